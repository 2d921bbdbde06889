//! Components describing moving bodies.
//!
//! The host simulation owns entity movement; these components are the
//! surface the breaking systems read. Positions come from `Transform`.

use bevy::prelude::*;

use crate::tick::WorldTick;
use crate::world::Aabb;

/// Per-tick displacement vector, in blocks per tick.
///
/// Not necessarily the entity's intrinsic velocity: the host writes
/// whatever the entity will actually move this tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Motion(pub Vec3);

/// Axis-aligned collision bounds, centered on the entity's translation.
#[derive(Component, Clone, Copy, Debug)]
pub struct Collider {
    pub half_extents: Vec3,
}

impl Collider {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// The entity's bounding box with its center at `position`.
    pub fn world_box(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.half_extents)
    }
}

/// Coarse entity classification used by the tile guard's kind filter.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Living,
    Player,
    Arrow,
    Fireball,
    Minecart,
    FallingBlock,
    Firework,
    Boat,
    PrimedTnt,
    Item,
    Other,
}

impl EntityKind {
    /// Kinds allowed to set off a `SpeedGuard` tile. Item drops and
    /// miscellaneous entities never do, however fast they move.
    pub fn can_trigger_guard(self) -> bool {
        !matches!(self, EntityKind::Item | EntityKind::Other)
    }
}

/// Marks an entity as dead. Dead entities are skipped by every breaking
/// system even while the host keeps them spawned (despawn may lag a tick).
#[derive(Component, Default)]
pub struct Dead;

/// Marks a player as sprinting; read by the player break policy.
#[derive(Component, Default)]
pub struct Sprinting;

/// Translation recorded at the previous tick's start. Lets capabilities
/// derive the step an entity actually took last tick, which for players
/// differs from their nominal motion.
#[derive(Component, Clone, Copy, Debug)]
pub struct PreviousPosition(pub Vec3);

/// Records each mover's position at tick start, right after the break
/// sweep has read it. By the next tick's sweep the host has applied one
/// tick of movement, so `position - previous` is the step actually taken.
pub fn track_previous_positions(
    mut ticks: EventReader<WorldTick>,
    mut movers: Query<(&Transform, &mut PreviousPosition)>,
) {
    if ticks.is_empty() {
        return;
    }
    ticks.clear();
    for (transform, mut previous) in &mut movers {
        previous.0 = transform.translation;
    }
}
