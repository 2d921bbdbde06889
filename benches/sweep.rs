//! Sweep hot-path benchmarks.

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shatterglass::breaking::blocks::default_registry;
use shatterglass::breaking::sweep::{crash_into_blocks, sweep_box_placements};
use shatterglass::{Aabb, BlockId, VoxelWorld};

fn bench_sweep_placements(c: &mut Criterion) {
    let start = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let motion = Vec3::new(5.3, -2.1, 0.7);
    let distance = motion.length();

    c.bench_function("sweep_placements_diagonal", |b| {
        b.iter(|| {
            let mut visited = 0_u32;
            sweep_box_placements(
                black_box(start),
                black_box(motion),
                black_box(distance),
                2,
                &mut |_aabb, _speed| visited += 1,
            );
            visited
        })
    });
}

fn bench_crash_through_slab(c: &mut Criterion) {
    let registry = default_registry();
    let slab: Vec<IVec3> = (-8..8)
        .flat_map(|x| (-8..8).map(move |z| IVec3::new(x, 62, z)))
        .collect();

    let aabb = Aabb::new(Vec3::new(-4.0, 61.5, -4.0), Vec3::new(4.0, 63.5, 4.0));

    c.bench_function("crash_into_glass_slab", |b| {
        b.iter(|| {
            let mut world = VoxelWorld::default();
            for cell in &slab {
                world.set_block(*cell, BlockId::FRAGILE_GLASS);
            }
            crash_into_blocks(
                &mut world,
                &registry,
                Entity::PLACEHOLDER,
                black_box(&aabb),
                1.5,
            );
            world.destroyed
        })
    });
}

criterion_group!(benches, bench_sweep_placements, bench_crash_through_slab);
criterion_main!(benches);
