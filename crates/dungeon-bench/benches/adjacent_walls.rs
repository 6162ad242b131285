//! Criterion benchmarks for neighbourhood queries on a fixed map.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dungeon::point_index::iter_points;
use dungeon_test_utils::fixtures;

fn bench_adjacent_walls(c: &mut Criterion) {
    let floor = fixtures::bench_map();
    let points: Vec<_> = iter_points(floor.width, floor.height).collect();

    c.bench_function("adjacent_walls_1", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(floor.adjacent_walls(p, 1, 1));
            }
        });
    });

    c.bench_function("adjacent_walls_2", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(floor.adjacent_walls(p, 2, 2));
            }
        });
    });
}

fn bench_region_count(c: &mut Criterion) {
    let floor = fixtures::bench_map();
    c.bench_function("walkable_region_count", |b| {
        b.iter(|| black_box(floor.walkable_region_count()));
    });
}

criterion_group!(benches, bench_adjacent_walls, bench_region_count);
criterion_main!(benches);
