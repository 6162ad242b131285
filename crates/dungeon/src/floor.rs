//! A single generated level.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

use crate::config::GenerationConfig;
use crate::dungeon_tile::{render_grid, DungeonTile};
use crate::error::DungeonError;
use crate::floor_builder::{FloorBuilder, New};
use crate::grid_helpers;
use crate::hash::Fingerprinter;
use crate::point::{FloorDimension, Point};
use crate::point_index::{iter_points, PointIndex};

/// Identifies a floor within a [`Dungeon`](crate::Dungeon). Floor 0 is the
/// top; each exit leads to the next id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(u16);

impl FloorId {
    /// Wraps a raw id.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid of tiles, stored row-major.
///
/// Deserializing checks that `data` holds exactly `width * height` tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFloor")]
pub struct Floor {
    /// Number of columns.
    pub width: FloorDimension,
    /// Number of rows.
    pub height: FloorDimension,
    /// Tiles, row by row.
    pub data: Vec<DungeonTile>,
}

#[derive(Deserialize)]
struct RawFloor {
    width: FloorDimension,
    height: FloorDimension,
    data: Vec<DungeonTile>,
}

impl TryFrom<RawFloor> for Floor {
    type Error = DungeonError;

    fn try_from(raw: RawFloor) -> Result<Self, Self::Error> {
        Self::from_parts(raw.width, raw.height, raw.data)
    }
}

impl Floor {
    /// Generates a floor with the full pipeline.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate.
    pub fn new(
        id: FloorId,
        width: FloorDimension,
        height: FloorDimension,
        config: &GenerationConfig,
    ) -> Result<Self, DungeonError> {
        FloorBuilder::<New>::create(id, width, height, config).map(|built| built.floor)
    }

    /// Wraps existing tile data.
    ///
    /// # Errors
    ///
    /// [`DungeonError::InvalidFloor`] if `data` does not hold exactly
    /// `width * height` tiles.
    pub fn from_parts(
        width: FloorDimension,
        height: FloorDimension,
        data: Vec<DungeonTile>,
    ) -> Result<Self, DungeonError> {
        let expected = (width.as_unbounded() * height.as_unbounded()) as usize;
        if data.len() != expected {
            return Err(DungeonError::InvalidFloor {
                reason: format!(
                    "data length {} does not match {}x{}",
                    data.len(),
                    width,
                    height
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Whether `point` lies on this floor.
    pub fn contains(&self, point: Point) -> bool {
        grid_helpers::in_grid(point, self.width, self.height)
    }

    /// The tile at `point`.
    ///
    /// # Panics
    ///
    /// If `point` is not on the floor. See [`get`](Self::get).
    pub fn at(&self, point: Point) -> &DungeonTile {
        self.data.at(point, self.width)
    }

    /// The tile at `point`, mutably.
    ///
    /// # Panics
    ///
    /// If `point` is not on the floor.
    pub fn at_mut(&mut self, point: Point) -> &mut DungeonTile {
        self.data.at_mut(point, self.width)
    }

    /// The tile at `point`, or `None` off the floor.
    pub fn get(&self, point: Point) -> Option<&DungeonTile> {
        self.contains(point).then(|| self.at(point))
    }

    /// Every tile with its position, row-major.
    pub fn iter_points_and_tiles(&self) -> impl Iterator<Item = (Point, &DungeonTile)> + '_ {
        iter_points(self.width, self.height).zip(self.data.iter())
    }

    fn find(&self, tile: DungeonTile) -> Option<Point> {
        self.iter_points_and_tiles()
            .find(|(_, t)| **t == tile)
            .map(|(p, _)| p)
    }

    /// Where explorers arrive.
    pub fn entrance(&self) -> Option<Point> {
        self.find(DungeonTile::Entrance)
    }

    /// The way down.
    pub fn exit(&self) -> Option<Point> {
        self.find(DungeonTile::Exit)
    }

    /// Walls within `distance_x` columns and `distance_y` rows of `point`.
    /// The outer ring and anything off the floor count as wall.
    pub fn adjacent_walls(&self, point: Point, distance_x: i32, distance_y: i32) -> usize {
        grid_helpers::count_adjacent_walls(
            &self.data,
            point,
            distance_x,
            distance_y,
            self.width,
            self.height,
        )
    }

    /// The walkable 4-neighbours of `point`.
    pub fn walkable_neighbours(&self, point: Point) -> SmallVec<[Point; 4]> {
        grid_helpers::neighbours_4(point, self.width, self.height)
            .into_iter()
            .filter(|&n| self.at(n).is_walkable())
            .collect()
    }

    /// Number of separate 4-connected walkable regions. A fully generated
    /// floor has exactly one.
    pub fn walkable_region_count(&self) -> usize {
        let mut seen = vec![false; self.data.len()];
        let mut regions = 0;
        let mut queue = VecDeque::new();

        for (point, tile) in self.iter_points_and_tiles() {
            if !tile.is_walkable() || *seen.at(point, self.width) {
                continue;
            }
            regions += 1;
            *seen.at_mut(point, self.width) = true;
            queue.push_back(point);
            while let Some(current) = queue.pop_front() {
                for next in self.walkable_neighbours(current) {
                    if !*seen.at(next, self.width) {
                        *seen.at_mut(next, self.width) = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        regions
    }

    /// The floor as text, one line per row. See
    /// [`ToAsciiCharacter`](crate::dungeon_tile::ToAsciiCharacter) for glyphs.
    pub fn render_ascii(&self) -> String {
        render_grid(&self.data, self.width.as_unbounded() as usize)
    }

    /// FNV-1a hash of the dimensions and every tile.
    pub fn fingerprint(&self) -> u64 {
        let state = Fingerprinter::new()
            .u32(self.width.as_unbounded() as u32)
            .u32(self.height.as_unbounded() as u32);
        self.data
            .iter()
            .fold(state, Fingerprinter::tile)
            .finish()
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ascii())
    }
}
