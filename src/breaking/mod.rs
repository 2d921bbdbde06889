//! The block-breaking subsystem: capability traits, the per-tick sweep
//! orchestrator, and the stock breaker/block implementations.

use bevy::prelude::*;

pub mod blocks;
pub mod breakers;
pub mod capability;
pub mod sweep;

use crate::entity::{track_previous_positions, Collider, Dead, Motion, PreviousPosition, Sprinting};
use crate::tick::{TickPhase, WorldTick};
use crate::world::VoxelWorld;
use capability::{Breaker, FragileRegistry, MoverState};
use sweep::{crash_into_blocks, sweep_box_placements};

pub struct BreakingPlugin;

impl Plugin for BreakingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BreakConfig>()
            .insert_resource(blocks::default_registry())
            .add_systems(
                Update,
                (break_sweep, track_previous_positions)
                    .chain()
                    .in_set(TickPhase::Start),
            );
    }
}

/// Configuration for the break orchestrator.
#[derive(Resource)]
pub struct BreakConfig {
    /// Squared speed ceiling, blocks per tick. Entities moving faster than
    /// chunks can stream in are skipped outright: the blocks they would
    /// crash into may not even be loaded yet.
    pub max_speed_squared: f32,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            max_speed_squared: 256.0, // 16 blocks/tick outruns chunk streaming
        }
    }
}

/// Whether a squared speed is slow enough to evaluate at all. The boundary
/// itself is still eligible.
pub fn within_streaming_limit(speed_squared: f32, max_speed_squared: f32) -> bool {
    speed_squared <= max_speed_squared
}

/// Per-tick break pass over every live mover with a `Breaker`.
///
/// Runs in `TickPhase::Start` so breaking decisions use pre-tick block
/// state. Iterates over an id snapshot with a re-fetch per entry: a crash
/// handler's side effects may kill an entity later in the same pass, and a
/// dead or despawned mover must not be processed on stale data.
fn break_sweep(
    mut ticks: EventReader<WorldTick>,
    config: Res<BreakConfig>,
    registry: Res<FragileRegistry>,
    mut world: ResMut<VoxelWorld>,
    mut movers: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &Motion,
            &mut Breaker,
            Option<&PreviousPosition>,
            Has<Sprinting>,
        ),
        Without<Dead>,
    >,
) {
    for _tick in ticks.read() {
        let snapshot: Vec<Entity> = movers.iter().map(|mover| mover.0).collect();
        for id in snapshot {
            let Ok((entity, transform, collider, motion, mut breaker, previous, sprinting)) =
                movers.get_mut(id)
            else {
                continue;
            };
            let position = transform.translation;
            let mover = MoverState {
                entity,
                position,
                velocity: motion.0,
                step: previous.map_or(motion.0, |prev| position - prev.0),
                sprinting,
            };
            breaker.0.update(&mover);

            let speed_squared = breaker.0.speed_squared(&mover);
            if !within_streaming_limit(speed_squared, config.max_speed_squared) {
                continue;
            }
            // Only pay for the square root once the gate has passed.
            let speed = speed_squared.sqrt();
            if speed <= f32::EPSILON {
                // Zero displacement: nothing to sweep, and no unit
                // direction to divide out.
                continue;
            }
            if !breaker.0.can_break(&mover, speed) {
                continue;
            }

            let motion = breaker.0.motion(&mover);
            let repeats = breaker.0.break_count(&mover).max(1);
            let start = collider.world_box(position);
            sweep_box_placements(start, motion, speed, repeats, &mut |aabb, effective| {
                crash_into_blocks(&mut world, &registry, entity, &aabb, effective);
            });
        }
    }
}
