//! The continuous block-breaking sweep.
//!
//! A single check at the end-of-tick position misses blocks the entity's
//! body passes through mid-tick: a falling player would hit a glass
//! ceiling, lose all speed, take impact damage, and only then break
//! through; an arrow would stop dead against a pane before shattering it.
//! Instead the entity's bounding box is advanced along its displacement
//! vector one grid unit at a time, crashing into every fragile block it
//! overlaps on the way, so the hole is open before collision response
//! would cancel the movement.

use bevy::prelude::*;

use crate::breaking::capability::FragileRegistry;
use crate::world::{Aabb, VoxelWorld};

/// Walks `start` along `motion`, visiting every box placement the sweep
/// must check together with the effective speed at that placement.
///
/// `distance` is the magnitude of `motion`; `motion / distance` is the unit
/// step direction. Each pass steps one unit at a time while more than one
/// unit of travel remains, then places the box at the full displacement
/// with the leftover distance as the final speed. The whole pass is
/// replayed `repeats` times, each pass starting where the previous pass's
/// full displacement ended, so the swept range is `repeats * distance`
/// while the per-placement speed never exceeds `distance`.
pub fn sweep_box_placements(
    start: Aabb,
    motion: Vec3,
    distance: f32,
    repeats: u8,
    visit: &mut impl FnMut(Aabb, f32),
) {
    if distance <= 0.0 {
        return;
    }
    let step = motion / distance;
    let mut anchor = start;
    for _ in 0..repeats {
        let mut stepped = anchor;
        let mut remaining = distance;
        while remaining > 1.0 {
            stepped = stepped.offset(step);
            remaining -= 1.0;
            visit(stepped, remaining);
        }
        anchor = anchor.offset(motion);
        visit(anchor, remaining);
    }
}

/// Crashes `entity` into every fragile block its box overlaps.
///
/// Enumerates the integer cells in `[floor(min), ceil(max))` on each axis,
/// which is exactly the set of cells the box geometrically overlaps. A
/// handler failure is logged and skipped so one defective block type cannot
/// abort the sweep for the rest.
pub fn crash_into_blocks(
    world: &mut VoxelWorld,
    registry: &FragileRegistry,
    entity: Entity,
    aabb: &Aabb,
    speed: f32,
) {
    let min = aabb.min.floor().as_ivec3();
    let max = aabb.max.ceil().as_ivec3();
    for x in min.x..max.x {
        for y in min.y..max.y {
            for z in min.z..max.z {
                let cell = IVec3::new(x, y, z);
                let state = world.block(cell);
                // Most cells are air; skip before any handler lookup.
                if state.is_air() {
                    continue;
                }
                let Some(handler) = registry.get(state) else {
                    continue;
                };
                if let Err(err) = handler.on_crash(state, cell, entity, speed, world) {
                    warn!("crash handler for {state:?} at {cell} failed: {err}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaking::capability::{CrashError, FragileBlock};
    use crate::world::BlockId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn placements(motion: Vec3, repeats: u8) -> Vec<(Aabb, f32)> {
        let start = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let mut out = Vec::new();
        sweep_box_placements(start, motion, motion.length(), repeats, &mut |aabb, speed| {
            out.push((aabb, speed));
        });
        out
    }

    #[test]
    fn short_moves_place_one_box() {
        let out = placements(Vec3::new(0.0, -0.8, 0.0), 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0.min, Vec3::new(0.0, -0.8, 0.0));
        assert!((out[0].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn long_moves_step_unit_by_unit() {
        let out = placements(Vec3::new(3.5, 0.0, 0.0), 1);
        // 3 intermediate unit steps, then the full-vector placement.
        assert_eq!(out.len(), 4);
        assert!((out[0].0.min.x - 1.0).abs() < 1e-6);
        assert!((out[0].1 - 2.5).abs() < 1e-6);
        assert!((out[1].1 - 1.5).abs() < 1e-6);
        assert!((out[2].1 - 0.5).abs() < 1e-6);
        assert!((out[3].0.min.x - 3.5).abs() < 1e-6);
        assert!((out[3].1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn repeats_extend_the_swept_range() {
        let motion = Vec3::new(3.5, 0.0, 0.0);
        let single = placements(motion, 1);
        let tripled = placements(motion, 3);
        assert_eq!(tripled.len(), 3 * single.len());
        // Pass k+1 starts where pass k's full displacement ended.
        let second_pass_first = tripled[single.len()].0;
        let first_pass_last = tripled[single.len() - 1].0;
        assert_eq!(second_pass_first.min.x, first_pass_last.min.x + 1.0);
        // Speeds repeat per pass rather than accumulating.
        assert!((tripled[single.len()].1 - 2.5).abs() < 1e-6);
    }

    #[test]
    fn zero_distance_skips_the_sweep() {
        let out = placements(Vec3::ZERO, 3);
        assert!(out.is_empty());
    }

    struct CountCrashes(Arc<AtomicUsize>);

    impl FragileBlock for CountCrashes {
        fn on_crash(
            &self,
            _state: BlockId,
            _cell: IVec3,
            _entity: Entity,
            _speed: f32,
            _world: &mut VoxelWorld,
        ) -> Result<(), CrashError> {
            self.0.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    struct AlwaysFails;

    impl FragileBlock for AlwaysFails {
        fn on_crash(
            &self,
            _state: BlockId,
            cell: IVec3,
            _entity: Entity,
            _speed: f32,
            _world: &mut VoxelWorld,
        ) -> Result<(), CrashError> {
            Err(CrashError::BlockChanged(cell))
        }
    }

    #[test]
    fn unit_box_overlaps_exactly_one_cell() {
        let mut world = VoxelWorld::default();
        let mut registry = FragileRegistry::default();
        let crashes = Arc::new(AtomicUsize::new(0));
        registry.register(BlockId::FRAGILE_GLASS, CountCrashes(crashes.clone()));
        for x in -1..2 {
            for y in -1..2 {
                for z in -1..2 {
                    world.set_block(IVec3::new(x, y, z), BlockId::FRAGILE_GLASS);
                }
            }
        }

        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        crash_into_blocks(
            &mut world,
            &registry,
            Entity::PLACEHOLDER,
            &aabb,
            1.0,
        );
        assert_eq!(crashes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn unregistered_blocks_are_never_crashed() {
        let mut world = VoxelWorld::default();
        let mut registry = FragileRegistry::default();
        let crashes = Arc::new(AtomicUsize::new(0));
        registry.register(BlockId::FRAGILE_GLASS, CountCrashes(crashes.clone()));
        world.set_block(IVec3::ZERO, BlockId::STONE);

        let aabb = Aabb::new(Vec3::splat(0.2), Vec3::splat(0.8));
        crash_into_blocks(&mut world, &registry, Entity::PLACEHOLDER, &aabb, 9.0);
        assert_eq!(crashes.load(Ordering::Relaxed), 0);
        assert_eq!(world.block(IVec3::ZERO), BlockId::STONE);
    }

    #[test]
    fn handler_failure_does_not_abort_remaining_cells() {
        let mut world = VoxelWorld::default();
        let mut registry = FragileRegistry::default();
        let crashes = Arc::new(AtomicUsize::new(0));
        registry.register(BlockId::FRAGILE_PANE, AlwaysFails);
        registry.register(BlockId::FRAGILE_GLASS, CountCrashes(crashes.clone()));
        world.set_block(IVec3::new(0, 0, 0), BlockId::FRAGILE_PANE);
        world.set_block(IVec3::new(1, 0, 0), BlockId::FRAGILE_GLASS);

        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
        crash_into_blocks(&mut world, &registry, Entity::PLACEHOLDER, &aabb, 1.0);
        assert_eq!(crashes.load(Ordering::Relaxed), 1);
    }
}
