//! Biome temperature field.
//!
//! Patch generation only needs one bit per column: does snow settle here?
//! A Perlin temperature field stands in for the host's biome table, sampled
//! per column the same way on every lookup so worldgen stays reproducible
//! for a given seed.

use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

/// Column-level biome lookup backed by Perlin temperature noise.
#[derive(Resource)]
pub struct BiomeMap {
    temperature: Perlin,
    /// Noise-space scale: larger values give broader biomes.
    scale: f64,
    /// Columns with temperature below this are snowy.
    snow_threshold: f64,
}

impl BiomeMap {
    pub fn new(seed: u32) -> Self {
        Self {
            temperature: Perlin::new(seed),
            scale: 1.0 / 192.0,
            snow_threshold: -0.2,
        }
    }

    /// Whether snow settles on the given column.
    pub fn snow_enabled(&self, column: IVec2) -> bool {
        let x = column.x as f64 * self.scale;
        let z = column.y as f64 * self.scale;
        self.temperature.get([x, z]) < self.snow_threshold
    }
}

impl Default for BiomeMap {
    fn default() -> Self {
        Self::new(7117)
    }
}
