use rand::Rng;

use crate::dungeon_tile::DungeonTile;
use crate::floor_builder::noise::{create_billow, noise_value};
use crate::floor_builder::{FloorBuilder, STAGE_DELAY};
use crate::point_index::{iter_points, PointIndex};

use super::{FloorBuilderState, RandomFilled};

/// Everything at its default: an open map and a flat noise map.
#[derive(Debug)]
pub(crate) struct Blank;

impl FloorBuilderState for Blank {
    const TYPE_NAME: &'static str = "Blank";
}

impl FloorBuilder<Blank> {
    /// Fills the noise map and scatters walls. The outer ring is always wall;
    /// every other tile is a wall with `wall_chance_percent` probability.
    pub(crate) fn random_fill(mut self) -> FloorBuilder<RandomFilled> {
        let noise = create_billow(&mut self.rng);
        let chance = self.config.wall_chance_percent;

        for point in iter_points(self.width, self.height) {
            *self.noise_map.at_mut(point, self.width) = noise_value(
                &noise,
                point.column.get(),
                point.row.get(),
                self.width,
                self.height,
            );

            let tile = if self.is_out_of_bounds(point) || self.rng.random_range(0..100) < chance {
                DungeonTile::Wall
            } else {
                DungeonTile::Empty
            };
            self.set_tile(point, tile);
        }

        tracing::debug!(
            walls = self.map.iter().filter(|t| t.is_wall()).count(),
            "random fill"
        );
        self.frame_from_current_state(STAGE_DELAY);
        self.into_state(RandomFilled)
    }
}
