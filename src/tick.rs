//! Simulation tick pump and phase ordering.
//!
//! The simulation runs on a fixed timestep (default 20 Hz) decoupled from
//! rendering. Systems listen for `WorldTick` events and are ordered into
//! `TickPhase` sets; block breaking runs in `TickPhase::Start` so it sees
//! pre-tick world state, before any movement or tile logic for the same
//! tick.

use bevy::prelude::*;

pub struct TickPlugin;

impl Plugin for TickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickConfig>()
            .init_resource::<TickStats>()
            .add_event::<WorldTick>()
            .configure_sets(
                Update,
                (TickPhase::Start, TickPhase::Step, TickPhase::Cleanup).chain(),
            )
            .add_systems(Update, tick_pump.before(TickPhase::Start));
    }
}

/// Configuration for the tick pump.
#[derive(Resource)]
pub struct TickConfig {
    /// Simulation ticks per second.
    pub tick_rate: f32,
    /// Whether the pump is paused. Ticks can still be injected by hand,
    /// which is how the tests drive the systems deterministically.
    pub paused: bool,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 20.0,
            paused: false,
        }
    }
}

/// Event sent once per simulation tick.
#[derive(Event)]
pub struct WorldTick {
    /// Tick number since app start.
    pub tick: u64,
    /// Fixed delta for this tick (1.0 / tick_rate).
    pub delta: f32,
}

/// Accumulator state for the fixed timestep.
#[derive(Resource, Default)]
pub struct TickStats {
    /// Total ticks since app start.
    pub total_ticks: u64,
    /// Accumulated real time not yet consumed by a tick.
    pub accumulator: f32,
}

/// Ordered phases within one tick. Handlers that must observe pre-tick
/// block state (the break sweep) go in `Start`; movement and tile logic in
/// `Step`; bookkeeping in `Cleanup`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickPhase {
    Start,
    Step,
    Cleanup,
}

/// Generates `WorldTick` events at fixed intervals.
fn tick_pump(
    config: Res<TickConfig>,
    mut stats: ResMut<TickStats>,
    time: Res<Time>,
    mut ticks: EventWriter<WorldTick>,
) {
    if config.paused {
        return;
    }

    stats.accumulator += time.delta_secs();
    let tick_duration = 1.0 / config.tick_rate;

    while stats.accumulator >= tick_duration {
        stats.accumulator -= tick_duration;
        stats.total_ticks += 1;

        ticks.send(WorldTick {
            tick: stats.total_ticks,
            delta: tick_duration,
        });
    }
}
