//! Legacy per-tile speed check.
//!
//! Blocks without a sweep-side crash handler can still shatter under
//! impact: a `SpeedGuard` tile watches the entities around its cell once
//! per tick and destroys its block when one of the allowed kinds is about
//! to slam through it. Simpler and coarser than the sweep (no stepping,
//! no capability lookup), kept for block types that only need "break if
//! something hits me fast".

use bevy::prelude::*;
use smallvec::SmallVec;

use crate::entity::{Collider, Dead, EntityKind, Motion};
use crate::tick::{TickPhase, WorldTick};
use crate::world::{Aabb, VoxelWorld};

pub struct TileGuardPlugin;

impl Plugin for TileGuardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuardConfig>()
            .add_systems(Update, tile_speed_guard.in_set(TickPhase::Step).run_if(authoritative));
    }
}

/// Configuration for speed-guard tiles.
#[derive(Resource)]
pub struct GuardConfig {
    /// Margin added to the block's box when looking for nearby entities.
    pub detection_margin: f32,
    /// Minimum axis speed, blocks per tick, for an impact to count.
    pub min_trigger_speed: f32,
    /// Guards only run on the authoritative simulation side; a
    /// visual-replica app sets this false and keeps the plugin installed.
    pub authoritative: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            detection_margin: 0.05,
            min_trigger_speed: 0.3,
            authoritative: true,
        }
    }
}

fn authoritative(config: Res<GuardConfig>) -> bool {
    config.authoritative
}

/// Tile component guarding one block cell.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpeedGuard {
    pub cell: IVec3,
}

/// An entity outside `bounds` on some axis, moving along that axis toward
/// the box faster than `min_speed`, is about to cross a boundary it has
/// not crossed yet.
fn moving_through(position: Vec3, bounds: &Aabb, velocity: Vec3, min_speed: f32) -> bool {
    (position.x < bounds.min.x && velocity.x > min_speed)
        || (position.x > bounds.max.x && velocity.x < -min_speed)
        || (position.y < bounds.min.y && velocity.y > min_speed)
        || (position.y > bounds.max.y && velocity.y < -min_speed)
        || (position.z < bounds.min.z && velocity.z > min_speed)
        || (position.z > bounds.max.z && velocity.z < -min_speed)
}

/// Once per tick per guard: collect nearby entities of the allowed kinds,
/// then break on the first falling block or first fast-enough impact.
fn tile_speed_guard(
    mut ticks: EventReader<WorldTick>,
    config: Res<GuardConfig>,
    mut world: ResMut<VoxelWorld>,
    mut commands: Commands,
    guards: Query<(Entity, &SpeedGuard)>,
    movers: Query<(&Transform, &Collider, &Motion, &EntityKind), Without<Dead>>,
) {
    for _tick in ticks.read() {
        for (tile, guard) in &guards {
            if world.block(guard.cell).is_air() {
                // Block already gone (sweep, another guard, the host);
                // the tile has nothing left to watch.
                commands.entity(tile).despawn();
                continue;
            }

            let bounds = Aabb::unit_cube(guard.cell);
            let detection = bounds.expand(config.detection_margin);

            let mut nearby: SmallVec<[(Vec3, Vec3, EntityKind); 8]> = SmallVec::new();
            for (transform, collider, motion, kind) in &movers {
                if !kind.can_trigger_guard() {
                    continue;
                }
                let position = transform.translation;
                if collider.world_box(position).intersects(&detection) {
                    nearby.push((position, motion.0, *kind));
                }
            }

            for (position, velocity, kind) in nearby {
                let breaks = kind == EntityKind::FallingBlock
                    || moving_through(position, &bounds, velocity, config.min_trigger_speed);
                if breaks {
                    world.destroy_block(guard.cell);
                    commands.entity(tile).despawn();
                    break; // first qualifying entity wins
                }
            }
        }
    }
}
