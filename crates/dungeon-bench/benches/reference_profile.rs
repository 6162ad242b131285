//! Criterion benchmarks for single-floor generation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dungeon::{Floor, FloorId};
use dungeon_bench::{
    profile_dimensions, reference_profile, stress_profile, REFERENCE_SIZE, STRESS_SIZE,
};

fn bench_floor_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor");
    for size in [25, 50, REFERENCE_SIZE] {
        let (width, height) = profile_dimensions(size);
        let config = reference_profile(42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let floor = Floor::new(FloorId::new(0), width, height, &config).unwrap();
                black_box(floor);
            });
        });
    }
    group.finish();
}

fn bench_stress_floor(c: &mut Criterion) {
    let (width, height) = profile_dimensions(STRESS_SIZE);
    let config = stress_profile(42);
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("floor_200", |b| {
        b.iter(|| {
            let floor = Floor::new(FloorId::new(0), width, height, &config).unwrap();
            black_box(floor);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_floor_sizes, bench_stress_floor);
criterion_main!(benches);
