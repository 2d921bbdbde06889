//! Headless demo: an arrow and a sprinting player versus a glass wall.
//!
//! Drives a small scene for a few ticks and logs what breaks. The real
//! host is a game; this binary only exists to show the wiring.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use shatterglass::{
    breaking::breakers::{PlayerBreaker, ProjectileBreaker},
    BlockId, Breaker, Collider, EntityKind, Motion, PreviousPosition, ShatterglassPlugin,
    Sprinting, TickConfig, TickPhase, VoxelWorld, WorldTick,
};

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), ShatterglassPlugin))
        .add_systems(Startup, spawn_scene)
        .add_systems(Update, apply_motion.in_set(TickPhase::Step));

    // Drive the ticks by hand so the demo is deterministic.
    app.world_mut().resource_mut::<TickConfig>().paused = true;
    for tick in 1..=10 {
        app.world_mut().send_event(WorldTick { tick, delta: 0.05 });
        app.update();
    }

    let world = app.world().resource::<VoxelWorld>();
    info!(
        "demo finished: {} blocks destroyed, {} still standing",
        world.destroyed,
        world.len()
    );
}

fn spawn_scene(mut world: ResMut<VoxelWorld>, mut commands: Commands) {
    // A glass wall at x = 8, five cells tall and wide.
    for y in 60..65 {
        for z in -2..3 {
            world.set_block(IVec3::new(8, y, z), BlockId::FRAGILE_GLASS);
        }
    }

    // An arrow on a flat path through the wall.
    commands.spawn((
        Transform::from_translation(Vec3::new(0.5, 62.5, 0.5)),
        Collider::new(Vec3::splat(0.25)),
        Motion(Vec3::new(2.5, 0.0, 0.0)),
        EntityKind::Arrow,
        Breaker::new(ProjectileBreaker),
    ));

    // A sprinting player running at it.
    let position = Vec3::new(0.5, 61.9, -1.5);
    commands.spawn((
        Transform::from_translation(position),
        Collider::new(Vec3::new(0.3, 0.9, 0.3)),
        Motion(Vec3::new(0.4, 0.0, 0.0)),
        EntityKind::Player,
        Sprinting,
        PreviousPosition(position),
        Breaker::new(PlayerBreaker::new()),
    ));
}

/// Stand-in for the host's movement integration.
fn apply_motion(
    mut ticks: EventReader<WorldTick>,
    mut movers: Query<(&Motion, &mut Transform)>,
) {
    for _tick in ticks.read() {
        for (motion, mut transform) in &mut movers {
            transform.translation += motion.0;
        }
    }
}
