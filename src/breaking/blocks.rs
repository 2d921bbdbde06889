//! Crash handlers for the stock fragile block types.

use bevy::prelude::*;

use crate::breaking::capability::{CrashError, FragileBlock, FragileRegistry};
use crate::world::{BlockId, VoxelWorld};

/// Glass and panes: shatter when hit at or above a minimum crash speed.
pub struct Shatter {
    /// Minimum effective speed, blocks per tick.
    pub min_speed: f32,
}

impl Default for Shatter {
    fn default() -> Self {
        Self { min_speed: 0.3 }
    }
}

impl FragileBlock for Shatter {
    fn on_crash(
        &self,
        state: BlockId,
        cell: IVec3,
        _entity: Entity,
        speed: f32,
        world: &mut VoxelWorld,
    ) -> Result<(), CrashError> {
        if speed < self.min_speed {
            return Ok(());
        }
        // A previous placement or another entity may have taken the block
        // already this tick; that is a normal no-op, not a failure.
        if world.destroy_block(cell) {
            debug!("{state:?} at {cell} shattered at {speed:.2} blocks/tick");
        }
        Ok(())
    }
}

/// Thin ice: collapses under almost any moving body, leaving the water it
/// froze over.
pub struct ThinIce {
    /// Minimum effective speed, blocks per tick.
    pub min_speed: f32,
}

impl Default for ThinIce {
    fn default() -> Self {
        Self { min_speed: 0.05 }
    }
}

impl FragileBlock for ThinIce {
    fn on_crash(
        &self,
        _state: BlockId,
        cell: IVec3,
        _entity: Entity,
        speed: f32,
        world: &mut VoxelWorld,
    ) -> Result<(), CrashError> {
        if speed < self.min_speed {
            return Ok(());
        }
        if world.destroy_block(cell) {
            world.set_block(cell, BlockId::WATER);
        }
        Ok(())
    }
}

/// Registry preloaded with the stock block behaviors. Hosts extend or
/// replace entries with [`FragileRegistry::register`].
pub fn default_registry() -> FragileRegistry {
    let mut registry = FragileRegistry::default();
    registry.register(BlockId::FRAGILE_GLASS, Shatter::default());
    registry.register(BlockId::FRAGILE_PANE, Shatter::default());
    registry.register(BlockId::THIN_ICE, ThinIce::default());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_holds_below_the_shatter_speed() {
        let mut world = VoxelWorld::default();
        let cell = IVec3::new(0, 64, 0);
        world.set_block(cell, BlockId::FRAGILE_GLASS);
        let glass = Shatter::default();

        glass
            .on_crash(BlockId::FRAGILE_GLASS, cell, Entity::PLACEHOLDER, 0.2, &mut world)
            .unwrap();
        assert_eq!(world.block(cell), BlockId::FRAGILE_GLASS);

        glass
            .on_crash(BlockId::FRAGILE_GLASS, cell, Entity::PLACEHOLDER, 0.5, &mut world)
            .unwrap();
        assert_eq!(world.block(cell), BlockId::AIR);
    }

    #[test]
    fn thin_ice_leaves_water_behind() {
        let mut world = VoxelWorld::default();
        let cell = IVec3::new(4, 62, -3);
        world.set_block(cell, BlockId::THIN_ICE);

        ThinIce::default()
            .on_crash(BlockId::THIN_ICE, cell, Entity::PLACEHOLDER, 0.2, &mut world)
            .unwrap();
        assert_eq!(world.block(cell), BlockId::WATER);
    }
}
