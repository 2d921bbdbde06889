//! World model: block grid, biomes, box geometry.

use bevy::prelude::*;

pub mod biome;
pub mod geometry;
pub mod voxel;

pub use biome::BiomeMap;
pub use geometry::Aabb;
pub use voxel::{BlockId, VoxelWorld};

pub struct VoxelWorldPlugin;

impl Plugin for VoxelWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VoxelWorld>()
            .init_resource::<BiomeMap>();
    }
}
