//! Ring-based patch placement.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::world::{BlockId, VoxelWorld};
use crate::worldgen::PatchConfig;

/// Replaces ice with thin ice in concentric rings around a random point in
/// the chunk. Returns the number of cells replaced.
///
/// Rings run from the drawn radius down to 1, sampled every 10 degrees.
/// Only pre-existing ice is touched, so patches naturally clip to frozen
/// water. The outer two rings replace with probability 1/2, which leaves a
/// ragged edge instead of a perfect circle.
pub fn gen_patch(
    rng: &mut StdRng,
    chunk: IVec2,
    world: &mut VoxelWorld,
    config: &PatchConfig,
) -> usize {
    let mid_x = chunk.x * 16 + rng.gen_range(0..16);
    let mid_z = chunk.y * 16 + rng.gen_range(0..16);

    let gaussian: f32 = rng.sample(StandardNormal);
    let radius = ((2.0 * gaussian + config.average_radius) / 2.0).round() as i32;

    let mut replaced = 0;
    for ring in (1..=radius).rev() {
        let ragged = ring > radius - 2;
        for step in 0..36 {
            let angle = (step as f32 * 10.0).to_radians();
            let cell = IVec3::new(
                mid_x + (ring as f32 * angle.cos()) as i32,
                config.surface_y,
                mid_z + (ring as f32 * angle.sin()) as i32,
            );
            if world.block(cell) != BlockId::ICE {
                continue;
            }
            if ragged && rng.gen_bool(0.5) {
                continue;
            }
            world.set_block(cell, BlockId::THIN_ICE);
            replaced += 1;
        }
    }
    replaced
}
