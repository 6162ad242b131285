//! Criterion benchmarks for whole dungeons: serial against parallel
//! generation, and the output encoders.

use std::hint::black_box;
use std::num::NonZeroU16;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dungeon::{Dungeon, DungeonType, GenerationConfig};
use dungeon_bench::{profile_dimensions, reference_profile};

const FLOORS: u16 = 8;

fn generate(workers: usize) -> Dungeon {
    let (width, height) = profile_dimensions(60);
    let config = GenerationConfig {
        workers: Some(workers),
        ..reference_profile(7)
    };
    Dungeon::generate(
        height,
        width,
        NonZeroU16::new(FLOORS).unwrap(),
        DungeonType::Cave,
        &config,
    )
    .unwrap()
}

fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("dungeon_8_floors");
    group.sample_size(10);
    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &w| {
            b.iter(|| black_box(generate(w)));
        });
    }
    group.finish();
}

fn bench_encoders(c: &mut Criterion) {
    let dungeon = generate(4);
    c.bench_function("to_json", |b| {
        b.iter(|| black_box(dungeon.to_json().unwrap()));
    });
    c.bench_function("to_gif", |b| {
        b.iter(|| black_box(dungeon.to_gif().unwrap()));
    });
    c.bench_function("fingerprint", |b| {
        b.iter(|| black_box(dungeon.fingerprint()));
    });
}

criterion_group!(benches, bench_workers, bench_encoders);
criterion_main!(benches);
