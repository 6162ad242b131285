//! Integration test: seeded generation is reproducible.
//!
//! The same seed and config must give the same dungeon no matter how many
//! workers build it, and different seeds must give different dungeons.

use std::num::NonZeroU16;

use dungeon::{Dungeon, DungeonType, GenerationConfig};
use dungeon_test_utils::{dimension, seeded_config};

fn generate(seed: u64, workers: usize) -> Dungeon {
    Dungeon::generate(
        dimension(48),
        dimension(32),
        NonZeroU16::new(6).unwrap(),
        DungeonType::Cave,
        &GenerationConfig {
            workers: Some(workers),
            ..seeded_config(seed)
        },
    )
    .unwrap()
}

#[test]
fn worker_count_is_invisible() {
    let reference = generate(77, 1);
    for workers in [2, 3, 6, 16] {
        let other = generate(77, workers);
        assert_eq!(other.fingerprint(), reference.fingerprint(), "{workers} workers");
        assert_eq!(other, reference);
    }
}

#[test]
fn repeated_runs_match() {
    assert_eq!(generate(5, 4), generate(5, 4));
}

#[test]
fn seeds_matter() {
    assert_ne!(generate(1, 2).fingerprint(), generate(2, 2).fingerprint());
}

#[test]
fn floors_keep_their_order() {
    // Floor n of a longer dungeon is floor n of a shorter one.
    let short = generate(9, 3);
    let long = Dungeon::generate(
        dimension(48),
        dimension(32),
        NonZeroU16::new(8).unwrap(),
        DungeonType::Cave,
        &seeded_config(9),
    )
    .unwrap();
    assert_eq!(&long.floors[..6], &short.floors[..]);
}
