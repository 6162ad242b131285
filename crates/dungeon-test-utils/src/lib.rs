//! Test utilities for dungeon development.
//!
//! Parses floors from ASCII art (the glyphs of
//! [`ToAsciiCharacter`](dungeon::ToAsciiCharacter)) and checks the
//! invariants every generated floor must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use dungeon::point::FloorDimension;
use dungeon::point_index::iter_points;
use dungeon::{Dungeon, DungeonTile, Floor, GenerationConfig, Point};

/// Builds a floor from rows of glyphs.
///
/// # Panics
///
/// On ragged rows, unknown glyphs, or dimensions outside the floor bounds.
pub fn parse_floor(rows: &[&str]) -> Floor {
    let width = rows.first().map_or(0, |r| r.chars().count());
    assert!(
        rows.iter().all(|r| r.chars().count() == width),
        "ragged rows"
    );
    let data = rows
        .iter()
        .flat_map(|r| r.chars())
        .map(|c| DungeonTile::from_ascii_char(c).unwrap_or_else(|| panic!("unknown glyph {c:?}")))
        .collect();
    Floor::from_parts(dimension(width), dimension(rows.len()), data)
        .expect("rows describe a whole floor")
}

pub fn dimension(n: usize) -> FloorDimension {
    FloorDimension::new(n as i32).expect("floor dimension in range")
}

/// A config with a fixed seed and otherwise default settings.
pub fn seeded_config(seed: u64) -> GenerationConfig {
    GenerationConfig {
        seed: Some(seed),
        ..GenerationConfig::default()
    }
}

/// Every tile on the outer ring is a wall.
pub fn assert_ring_is_wall(floor: &Floor) {
    let (w, h) = (floor.width.as_unbounded(), floor.height.as_unbounded());
    for point in iter_points(floor.width, floor.height) {
        let (r, c) = (
            point.row.get().as_unbounded(),
            point.column.get().as_unbounded(),
        );
        if r == 0 || c == 0 || r == h - 1 || c == w - 1 {
            assert_eq!(*floor.at(point), DungeonTile::Wall, "ring tile {point} is open");
        }
    }
}

/// Exactly one entrance and one exit.
pub fn assert_single_entrance_and_exit(floor: &Floor) {
    let count = |tile| floor.data.iter().filter(|&&t| t == tile).count();
    assert_eq!(count(DungeonTile::Entrance), 1, "entrances");
    assert_eq!(count(DungeonTile::Exit), 1, "exits");
}

/// Every walkable tile can be reached from every other.
pub fn assert_connected(floor: &Floor) {
    assert_eq!(
        floor.walkable_region_count(),
        1,
        "floor is split:\n{}",
        floor.render_ascii()
    );
}

/// Every chest sits in the middle of a 3x3 block of empty tiles.
pub fn assert_chests_have_room(floor: &Floor) {
    for (point, tile) in floor.iter_points_and_tiles() {
        if *tile != DungeonTile::TreasureChest {
            continue;
        }
        let (r, c) = (
            point.row.get().as_unbounded(),
            point.column.get().as_unbounded(),
        );
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let beside = Point::from_raw(r + dr, c + dc).expect("chest is off the ring");
                assert_eq!(
                    floor.get(beside),
                    Some(&DungeonTile::Empty),
                    "chest at {point} touches {beside}"
                );
            }
        }
    }
}

/// Runs every per-floor check on every floor of `dungeon`.
pub fn assert_well_formed(dungeon: &Dungeon) {
    assert!(!dungeon.floors.is_empty());
    for floor in &dungeon.floors {
        assert_ring_is_wall(floor);
        assert_single_entrance_and_exit(floor);
        assert_connected(floor);
        assert_chests_have_room(floor);
    }
}
