//! Walking around a generated dungeon.
//!
//! An [`Explorer`] moves one tile at a time. Walls block; stepping onto an
//! [`Exit`](DungeonTile::Exit) leads down to the next floor's entrance, and
//! stepping onto the [`Entrance`](DungeonTile::Entrance) of any floor but the
//! first leads back up to the previous floor's exit.

use serde::{Deserialize, Serialize};

use crate::dungeon::Dungeon;
use crate::dungeon_tile::DungeonTile;
use crate::floor::{Floor, FloorId};
use crate::point::Point;

/// One of the four ways to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards column 0.
    Left,
    /// Away from row 0.
    Down,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// The neighbour of `from` in this direction, if it has valid
    /// coordinates.
    pub fn step(self, from: Point) -> Option<Point> {
        match self {
            Self::Up => from.sub_row(1),
            Self::Left => from.sub_column(1),
            Self::Down => from.add_row(1),
            Self::Right => from.add_column(1),
        }
    }

    /// Parses `U`, `L`, `D` or `R`, in either case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'L' => Some(Self::Left),
            'D' => Some(Self::Down),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

impl Floor {
    /// Where a step from `from` in `direction` lands, or `None` if it would
    /// leave the floor or hit a wall.
    pub fn try_move(&self, from: Point, direction: Direction) -> Option<Point> {
        let to = direction.step(from)?;
        self.get(to)
            .is_some_and(DungeonTile::is_walkable)
            .then_some(to)
    }
}

/// What happened on a call to [`Explorer::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved one tile on the same floor.
    Moved,
    /// A wall or the edge of the floor is in the way.
    Blocked,
    /// Took the stairs.
    FloorChanged {
        /// The floor left behind.
        from: FloorId,
        /// The floor arrived on.
        to: FloorId,
    },
}

/// A position in a dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Explorer {
    /// The floor the explorer is on.
    pub floor: FloorId,
    /// The tile the explorer stands on.
    pub position: Point,
}

impl Explorer {
    /// Starts at the entrance of the first floor, or `None` if the dungeon
    /// has no floors or the first floor no entrance.
    pub fn enter(dungeon: &Dungeon) -> Option<Self> {
        let position = dungeon.floors.first()?.entrance()?;
        Some(Self {
            floor: FloorId::new(0),
            position,
        })
    }

    fn current<'d>(&self, dungeon: &'d Dungeon) -> Option<&'d Floor> {
        dungeon.floors.get(usize::from(self.floor.get()))
    }

    /// Takes one step.
    pub fn step(&mut self, dungeon: &Dungeon, direction: Direction) -> MoveOutcome {
        let Some(floor) = self.current(dungeon) else {
            return MoveOutcome::Blocked;
        };
        let Some(to) = floor.try_move(self.position, direction) else {
            return MoveOutcome::Blocked;
        };
        self.position = to;

        let id = self.floor.get();
        let stairs = match floor.at(to) {
            DungeonTile::Exit => id.checked_add(1).and_then(|next| {
                let arrival = dungeon.floors.get(usize::from(next))?.entrance()?;
                Some((next, arrival))
            }),
            DungeonTile::Entrance if id > 0 => {
                let previous = id - 1;
                dungeon
                    .floors
                    .get(usize::from(previous))
                    .and_then(Floor::exit)
                    .map(|arrival| (previous, arrival))
            }
            _ => None,
        };

        match stairs {
            Some((next, arrival)) => {
                let from = self.floor;
                self.floor = FloorId::new(next);
                self.position = arrival;
                tracing::debug!(%from, to = next, %arrival, "changed floor");
                MoveOutcome::FloorChanged {
                    from,
                    to: self.floor,
                }
            }
            None => MoveOutcome::Moved,
        }
    }
}
