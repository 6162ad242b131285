//! Hand-drawn floors.
//!
//! - [`OPEN_ROOM`]: one cave, entrance and exit inside it.
//! - [`TWO_ROOMS`]: two caves split by a wall, one with each stair.
//! - [`BENCH_MAP`]: a small ragged cave used by the adjacency benchmarks.

use dungeon::{Dungeon, DungeonType, Floor};

use crate::parse_floor;

pub const OPEN_ROOM: [&str; 10] = [
    "##########",
    "#<.......#",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    "#........#",
    "#.......>#",
    "##########",
];

pub const TWO_ROOMS: [&str; 10] = [
    "##########",
    "#<..#....#",
    "#...#....#",
    "#...#....#",
    "#...#....#",
    "#...#....#",
    "#...#....#",
    "#...#....#",
    "#...#...>#",
    "##########",
];

pub const BENCH_MAP: [&str; 10] = [
    "##########",
    "#..#.....#",
    "#.##..#..#",
    "#....###.#",
    "##.......#",
    "#..#..#..#",
    "#.###....#",
    "#...#..#.#",
    "#<.....>.#",
    "##########",
];

pub fn open_room() -> Floor {
    parse_floor(&OPEN_ROOM)
}

pub fn two_rooms() -> Floor {
    parse_floor(&TWO_ROOMS)
}

pub fn bench_map() -> Floor {
    parse_floor(&BENCH_MAP)
}

/// Two open rooms stacked as a dungeon.
pub fn two_floor_dungeon() -> Dungeon {
    Dungeon {
        dungeon_type: DungeonType::Cave,
        floors: vec![open_room(), open_room()],
    }
}
