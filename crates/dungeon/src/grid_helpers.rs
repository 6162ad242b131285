//! Shared grid-topology helpers for floors and floor builders.
//!
//! The outermost ring of tiles is always wall, so most pipeline stages only
//! look at *interior* neighbours: neighbours that are inside the grid and not
//! on that ring.

use smallvec::SmallVec;

use crate::dungeon_tile::DungeonTile;
use crate::point::{FloorDimension, Point};
use crate::point_index::PointIndex;

/// Down, right, up, left.
const OFFSETS_4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The eight surrounding offsets, row-major.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Down, right.
const OFFSETS_DOWN_RIGHT: [(i32, i32); 2] = [(1, 0), (0, 1)];

fn raw(point: Point) -> (i32, i32) {
    (
        point.row.get().as_unbounded(),
        point.column.get().as_unbounded(),
    )
}

/// `point` moved by `(dr, dc)`, or `None` if that leaves the grid.
pub(crate) fn offset(
    point: Point,
    dr: i32,
    dc: i32,
    width: FloorDimension,
    height: FloorDimension,
) -> Option<Point> {
    let (r, c) = raw(point);
    let (r, c) = (r + dr, c + dc);
    if r < 0 || c < 0 || r >= height.as_unbounded() || c >= width.as_unbounded() {
        return None;
    }
    Some(Point::from_raw_clamped(r, c))
}

/// Whether `point` lies inside a `width` x `height` grid.
pub(crate) fn in_grid(point: Point, width: FloorDimension, height: FloorDimension) -> bool {
    let (r, c) = raw(point);
    r < height.as_unbounded() && c < width.as_unbounded()
}

/// Whether `point` is on the outer ring (or outside the grid entirely).
pub(crate) fn is_ring(point: Point, width: FloorDimension, height: FloorDimension) -> bool {
    let (r, c) = raw(point);
    r == 0 || c == 0 || r >= height.as_unbounded() - 1 || c >= width.as_unbounded() - 1
}

/// `point` moved by each of `offsets`, skipping positions off the grid and,
/// with `interior_only`, positions on the outer ring.
fn shifted(
    point: Point,
    offsets: &[(i32, i32)],
    width: FloorDimension,
    height: FloorDimension,
    interior_only: bool,
) -> impl Iterator<Item = Point> + '_ {
    offsets
        .iter()
        .filter_map(move |&(dr, dc)| offset(point, dr, dc, width, height))
        .filter(move |&p| !interior_only || !is_ring(p, width, height))
}

/// 4-connected neighbours inside the grid.
pub(crate) fn neighbours_4(
    point: Point,
    width: FloorDimension,
    height: FloorDimension,
) -> SmallVec<[Point; 4]> {
    shifted(point, &OFFSETS_4, width, height, false).collect()
}

/// 4-connected neighbours that are not on the outer ring.
///
/// ```txt
/// . x .
/// x p x
/// . x .
/// ```
pub(crate) fn interior_neighbours_4(
    point: Point,
    width: FloorDimension,
    height: FloorDimension,
) -> SmallVec<[Point; 4]> {
    shifted(point, &OFFSETS_4, width, height, true).collect()
}

/// 8-connected neighbours that are not on the outer ring.
///
/// ```txt
/// x x x
/// x p x
/// x x x
/// ```
pub(crate) fn interior_neighbours_8(
    point: Point,
    width: FloorDimension,
    height: FloorDimension,
) -> SmallVec<[Point; 8]> {
    shifted(point, &OFFSETS_8, width, height, true).collect()
}

/// The neighbours below and to the right, if not on the outer ring.
///
/// ```txt
/// . . .
/// . p x
/// . x .
/// ```
pub(crate) fn interior_down_and_right(
    point: Point,
    width: FloorDimension,
    height: FloorDimension,
) -> SmallVec<[Point; 2]> {
    shifted(point, &OFFSETS_DOWN_RIGHT, width, height, true).collect()
}

/// Whether the tile at `point` counts as wall. The outer ring and anything
/// outside the grid always do.
pub(crate) fn is_wall(
    map: &[DungeonTile],
    point: Point,
    width: FloorDimension,
    height: FloorDimension,
) -> bool {
    is_ring(point, width, height) || map.at(point, width).is_wall()
}

/// Walls within the rectangle reaching `distance_x` columns and
/// `distance_y` rows away from `point`, not counting `point` itself.
/// Positions outside the grid count as walls.
pub(crate) fn count_adjacent_walls(
    map: &[DungeonTile],
    point: Point,
    distance_x: i32,
    distance_y: i32,
    width: FloorDimension,
    height: FloorDimension,
) -> usize {
    let mut counter = 0;
    for dr in -distance_y..=distance_y {
        for dc in -distance_x..=distance_x {
            if dr == 0 && dc == 0 {
                continue;
            }
            let walled = match offset(point, dr, dc, width, height) {
                Some(p) => is_wall(map, p, width, height),
                None => true,
            };
            if walled {
                counter += 1;
            }
        }
    }
    counter
}
