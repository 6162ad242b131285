use rand::seq::SliceRandom;
use rand::Rng;

use crate::dungeon_tile::DungeonTile;
use crate::floor_builder::{FloorBuilder, STAGE_DELAY};
use crate::grid_helpers::interior_neighbours_8;
use crate::point::Point;
use crate::point_index::iter_points;

use super::{Done, FloorBuilderState};

/// Every cave is reachable; only decoration is left.
#[derive(Debug)]
pub(crate) struct HasSecretPassages;

impl FloorBuilderState for HasSecretPassages {
    const TYPE_NAME: &'static str = "HasSecretPassages";
}

impl FloorBuilder<HasSecretPassages> {
    /// Places between `min` and `max` treasure chests on empty tiles whose
    /// eight neighbours are all empty (and not on the outer ring). Fewer are
    /// placed if the floor runs out of room.
    pub(crate) fn place_treasure_chests(mut self) -> FloorBuilder<Done> {
        let range = self.config.treasure_chests;
        let wanted = usize::from(self.rng.random_range(range.min..=range.max));

        let mut candidates: Vec<Point> = iter_points(self.width, self.height)
            .filter(|&p| self.tile(p) == DungeonTile::Empty)
            .collect();
        candidates.shuffle(&mut self.rng);

        let mut placed = 0;
        for point in candidates {
            if placed == wanted {
                break;
            }
            if self.tile(point) != DungeonTile::Empty {
                continue;
            }
            let around = interior_neighbours_8(point, self.width, self.height);
            if around.len() == 8 && around.iter().all(|&n| self.tile(n) == DungeonTile::Empty) {
                self.set_tile(point, DungeonTile::TreasureChest);
                placed += 1;
            }
        }

        if placed < wanted {
            tracing::debug!(wanted, placed, "not enough open space for every chest");
        } else {
            tracing::debug!(placed, "placed treasure chests");
        }
        self.frame_from_current_state(STAGE_DELAY);
        self.into_state(Done)
    }
}
