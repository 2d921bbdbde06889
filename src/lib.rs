//! Shatterglass - fragile-block physics for voxel worlds.
//!
//! Blocks like panes, glass, and thin ice shatter ahead of entities moving
//! fast enough to crash through them, instead of stopping them dead for a
//! tick first. The break sweep advances each entity's bounding box along
//! its per-tick displacement and crashes it into every fragile block on
//! the way, so holes open before collision response cancels the movement.
//! Snowy chunks additionally grow procedural thin-ice patches.
//!
//! Everything hangs off [`ShatterglassPlugin`]; the host app supplies
//! entity movement, chunk generation events, and rendering.

use bevy::prelude::*;

pub mod breaking;
pub mod entity;
pub mod guard;
pub mod tick;
pub mod world;
pub mod worldgen;

pub use breaking::capability::{BreakCapability, Breaker, CrashError, FragileBlock, FragileRegistry, MoverState};
pub use breaking::BreakConfig;
pub use entity::{Collider, Dead, EntityKind, Motion, PreviousPosition, Sprinting};
pub use guard::{GuardConfig, SpeedGuard};
pub use tick::{TickConfig, TickPhase, WorldTick};
pub use world::{Aabb, BiomeMap, BlockId, VoxelWorld};
pub use worldgen::{ChunkGenerated, PatchConfig};

/// Adds every shatterglass subsystem to the app.
pub struct ShatterglassPlugin;

impl Plugin for ShatterglassPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(tick::TickPlugin)
            .add_plugins(world::VoxelWorldPlugin)
            .add_plugins(breaking::BreakingPlugin)
            .add_plugins(guard::TileGuardPlugin)
            .add_plugins(worldgen::PatchGenPlugin);
    }
}
