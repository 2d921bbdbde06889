//! Break policies for the stock entity kinds.
//!
//! Each kind supplies its own thresholds; the orchestrator never matches on
//! kinds, only on the [`BreakCapability`] trait. Hosts with bespoke
//! entities implement the trait themselves and attach it the same way.

use bevy::prelude::*;

use crate::breaking::capability::{BreakCapability, MoverState};

/// Arrows, fireballs, snowballs: always willing, and fast enough that two
/// sweep passes are needed to clear a gap their whole flight path crosses.
pub struct ProjectileBreaker;

impl BreakCapability for ProjectileBreaker {
    fn can_break(&self, _mover: &MoverState, _speed: f32) -> bool {
        true
    }

    fn break_count(&self, _mover: &MoverState) -> u8 {
        2
    }
}

/// Falling anvils, sand, dripstone: weight does the work, speed is
/// irrelevant.
pub struct FallingBlockBreaker;

impl BreakCapability for FallingBlockBreaker {
    fn can_break(&self, _mover: &MoverState, _speed: f32) -> bool {
        true
    }
}

/// Minecarts and boats: break only at a ramming pace.
pub struct VehicleBreaker {
    /// Minimum speed, blocks per tick.
    pub min_speed: f32,
}

impl Default for VehicleBreaker {
    fn default() -> Self {
        Self { min_speed: 0.5 }
    }
}

impl BreakCapability for VehicleBreaker {
    fn can_break(&self, _mover: &MoverState, speed: f32) -> bool {
        speed >= self.min_speed
    }
}

/// Non-player living beings: anything moving at a hard sprint.
pub struct LivingBreaker {
    /// Minimum speed, blocks per tick.
    pub min_speed: f32,
}

impl Default for LivingBreaker {
    fn default() -> Self {
        Self { min_speed: 0.3 }
    }
}

impl BreakCapability for LivingBreaker {
    fn can_break(&self, _mover: &MoverState, speed: f32) -> bool {
        speed >= self.min_speed
    }
}

/// Players: must be sprinting or in a hard fall, and the sweep uses the
/// step the player actually took rather than their nominal motion, which
/// for players lags behind real movement.
pub struct PlayerBreaker {
    motion: Vec3,
    /// Downward step that counts as a hard fall, blocks per tick.
    pub fall_speed: f32,
}

impl PlayerBreaker {
    pub fn new() -> Self {
        Self {
            motion: Vec3::ZERO,
            fall_speed: 0.4,
        }
    }
}

impl Default for PlayerBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakCapability for PlayerBreaker {
    fn update(&mut self, mover: &MoverState) {
        self.motion = mover.step;
    }

    fn motion(&self, _mover: &MoverState) -> Vec3 {
        self.motion
    }

    fn can_break(&self, mover: &MoverState, _speed: f32) -> bool {
        mover.sprinting || self.motion.y <= -self.fall_speed
    }
}

/// Primed TNT: a heavy body flung by its own blast, swept twice so the
/// throw arc clears everything in its way.
pub struct TntBreaker;

impl BreakCapability for TntBreaker {
    fn can_break(&self, _mover: &MoverState, _speed: f32) -> bool {
        true
    }

    fn break_count(&self, _mover: &MoverState) -> u8 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(velocity: Vec3, step: Vec3, sprinting: bool) -> MoverState {
        MoverState {
            entity: Entity::PLACEHOLDER,
            position: Vec3::ZERO,
            velocity,
            step,
            sprinting,
        }
    }

    #[test]
    fn vehicles_need_ramming_pace() {
        let cart = VehicleBreaker::default();
        let state = mover(Vec3::new(0.4, 0.0, 0.0), Vec3::ZERO, false);
        assert!(!cart.can_break(&state, 0.4));
        assert!(cart.can_break(&state, 0.6));
    }

    #[test]
    fn players_use_their_actual_step() {
        let mut player = PlayerBreaker::new();
        let state = mover(Vec3::ZERO, Vec3::new(0.35, 0.0, 0.0), true);
        player.update(&state);
        assert_eq!(player.motion(&state), Vec3::new(0.35, 0.0, 0.0));
        assert!(player.can_break(&state, 0.35));
    }

    #[test]
    fn idle_players_cannot_break() {
        let mut player = PlayerBreaker::new();
        let walking = mover(Vec3::ZERO, Vec3::new(0.2, -0.1, 0.0), false);
        player.update(&walking);
        assert!(!player.can_break(&walking, 0.22));

        let falling = mover(Vec3::ZERO, Vec3::new(0.0, -0.9, 0.0), false);
        player.update(&falling);
        assert!(player.can_break(&falling, 0.9));
    }
}
