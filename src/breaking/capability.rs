//! Capability traits for breakers and fragile blocks.
//!
//! Entities opt into block breaking by carrying a [`Breaker`] component;
//! block types opt into being broken by registering a [`FragileBlock`]
//! handler for their [`BlockId`]. The orchestrator is polymorphic over
//! these traits, never over concrete entity or block kinds.

use bevy::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

use crate::world::{BlockId, VoxelWorld};

/// Snapshot of one mover's state for this tick, handed to every
/// [`BreakCapability`] call.
#[derive(Clone, Copy, Debug)]
pub struct MoverState {
    pub entity: Entity,
    /// Current translation.
    pub position: Vec3,
    /// Nominal per-tick displacement (the `Motion` component).
    pub velocity: Vec3,
    /// Displacement actually taken last tick, when tracked; falls back to
    /// `velocity` for entities without a `PreviousPosition`.
    pub step: Vec3,
    /// Whether the entity carries the `Sprinting` marker.
    pub sprinting: bool,
}

/// Break policy attached to a moving entity.
///
/// Implementations pick which displacement the sweep uses, whether the
/// entity may break at a given speed, and how many sweep passes to run.
pub trait BreakCapability: Send + Sync {
    /// Recompute any cached state before this tick's checks. No-op for
    /// most kinds; players derive their effective motion here.
    fn update(&mut self, _mover: &MoverState) {}

    /// Displacement vector the sweep should use.
    fn motion(&self, mover: &MoverState) -> Vec3 {
        mover.velocity
    }

    /// Squared speed, kept squared so the orchestrator can gate cheaply
    /// before paying for a square root.
    fn speed_squared(&self, mover: &MoverState) -> f32 {
        self.motion(mover).length_squared()
    }

    /// Whether the entity is currently allowed to break blocks at `speed`
    /// (blocks per tick). Block-side willingness is checked separately in
    /// [`FragileBlock::on_crash`].
    fn can_break(&self, mover: &MoverState, speed: f32) -> bool;

    /// How many times to replay the sweep. Each pass restarts from the end
    /// of the previous pass's full displacement, extending the swept range
    /// without raising the crash speed. Always at least 1.
    fn break_count(&self, _mover: &MoverState) -> u8 {
        1
    }
}

/// Component attaching a break policy to an entity.
#[derive(Component)]
pub struct Breaker(pub Box<dyn BreakCapability>);

impl Breaker {
    pub fn new(capability: impl BreakCapability + 'static) -> Self {
        Self(Box::new(capability))
    }
}

/// Failure raised by a fragile block's crash handler. The region breaker
/// logs these and carries on; a misbehaving handler must not abort the
/// sweep for other blocks or entities.
#[derive(Debug, Error)]
pub enum CrashError {
    #[error("block at {0} changed before the handler ran")]
    BlockChanged(IVec3),
    #[error("{0}")]
    Handler(String),
}

/// Reaction of one block type to an entity crashing through it.
pub trait FragileBlock: Send + Sync {
    /// Called with the block's current state, its cell, the colliding
    /// entity, and the effective speed at that point of the sweep. May
    /// mutate world state (typically destroying the block).
    fn on_crash(
        &self,
        state: BlockId,
        cell: IVec3,
        entity: Entity,
        speed: f32,
        world: &mut VoxelWorld,
    ) -> Result<(), CrashError>;
}

/// Registry of crash handlers keyed by block type.
#[derive(Resource, Default)]
pub struct FragileRegistry {
    handlers: HashMap<BlockId, Box<dyn FragileBlock>>,
}

impl FragileRegistry {
    /// Register `handler` for `block`, replacing any previous handler.
    pub fn register(&mut self, block: BlockId, handler: impl FragileBlock + 'static) {
        self.handlers.insert(block, Box::new(handler));
    }

    pub fn get(&self, block: BlockId) -> Option<&dyn FragileBlock> {
        self.handlers.get(&block).map(|h| h.as_ref())
    }
}
