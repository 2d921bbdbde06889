//! Procedural thin-ice patches for snowy chunks.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::world::{BiomeMap, VoxelWorld};

pub mod patch;

pub struct PatchGenPlugin;

impl Plugin for PatchGenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PatchConfig>()
            .init_resource::<PatchState>()
            .add_event::<ChunkGenerated>()
            .add_systems(Update, grow_ice_patches);
    }
}

/// Sent by the host's chunk generator once per freshly generated chunk,
/// with the chunk-local RNG seed it used.
#[derive(Event, Clone, Copy, Debug)]
pub struct ChunkGenerated {
    /// Chunk coordinates (world x/z divided by 16).
    pub chunk: IVec2,
    /// Seed for this chunk's decoration pass.
    pub seed: u64,
}

/// Configuration for patch generation.
#[derive(Resource)]
pub struct PatchConfig {
    /// A snowy chunk patches with probability 1 in `gen_chance`.
    pub gen_chance: u32,
    /// Mean patch radius in blocks; the draw is Gaussian around this.
    pub average_radius: f32,
    /// Y level patches generate at. Usually the water surface.
    pub surface_y: i32,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            gen_chance: 20,
            average_radius: 6.0,
            surface_y: 62,
        }
    }
}

/// Cross-chunk generation state.
#[derive(Resource, Default)]
pub struct PatchState {
    /// Snowy chunks generated since the last patch anywhere. One counter
    /// for the whole generator, reset by any chunk's patch: coarse, but it
    /// keeps sparse snowy regions from never seeing a patch at all.
    pub chunks_since_patch: u32,
    /// Patches generated so far, for stats and tests.
    pub patches: u64,
}

/// Rolls each generated snowy chunk for a thin-ice patch, forcing a bonus
/// patch when too many chunks in a row came up empty.
fn grow_ice_patches(
    mut chunks: EventReader<ChunkGenerated>,
    config: Res<PatchConfig>,
    mut state: ResMut<PatchState>,
    biomes: Res<BiomeMap>,
    mut world: ResMut<VoxelWorld>,
) {
    let bonus_after = config.gen_chance + 1;
    for generated in chunks.read() {
        let anchor = generated.chunk * 16;
        if !biomes.snow_enabled(anchor) {
            continue;
        }

        let mut rng = StdRng::seed_from_u64(generated.seed);
        let rolled = rng.gen_range(0..config.gen_chance) == 0;
        if rolled || state.chunks_since_patch >= bonus_after {
            let replaced =
                patch::gen_patch(&mut rng, generated.chunk, &mut world, &config);
            state.chunks_since_patch = 0;
            state.patches += 1;
            debug!(
                "thin-ice patch in chunk {}: {replaced} cells{}",
                generated.chunk,
                if rolled { "" } else { " (bonus)" }
            );
        } else {
            state.chunks_since_patch += 1;
        }
    }
}
