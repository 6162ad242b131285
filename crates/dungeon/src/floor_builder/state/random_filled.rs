use pathfinding::prelude::dijkstra;
use rand::Rng;

use crate::dungeon_tile::DungeonTile;
use crate::floor_builder::{FloorBuilder, STAGE_DELAY, STEP_DELAY};
use crate::grid_helpers::{interior_down_and_right, interior_neighbours_4};
use crate::point::Point;
use crate::point_index::PointIndex;

use super::{FloorBuilderState, Filled};

/// Samples drawn for the exit before falling back to a corner.
const EXIT_ATTEMPTS: usize = 64;

/// Random walls and noise, before any structure has been added.
#[derive(Debug)]
pub(crate) struct RandomFilled;

impl FloorBuilderState for RandomFilled {
    const TYPE_NAME: &'static str = "RandomFilled";
}

impl FloorBuilder<RandomFilled> {
    /// Places the entrance and exit and carves a 2-wide path between them
    /// along the cheapest route through the noise map.
    pub(crate) fn trace_original_path(mut self) -> FloorBuilder<Filled> {
        let start = self.random_interior_point();
        let end = self.pick_exit(start);

        let width = self.width;
        let height = self.height;
        let noise_map = &self.noise_map;
        let path = dijkstra(
            &start,
            |&point| {
                interior_neighbours_4(point, width, height)
                    .into_iter()
                    .map(move |n| (n, u64::from(*noise_map.at(n, width))))
            },
            |&point| point == end,
        )
        .map(|(path, _cost)| path)
        .unwrap_or_else(|| {
            tracing::warn!(%start, %end, "no path between entrance and exit");
            vec![start, end]
        });

        self.set_tile(start, DungeonTile::Entrance);
        self.set_tile(end, DungeonTile::Exit);

        for &point in &path {
            let mut carve = interior_down_and_right(point, width, height);
            carve.push(point);
            for p in carve {
                if self.tile(p).is_wall() {
                    self.set_tile(p, DungeonTile::Empty);
                }
            }
            self.frame_from_current_state(STEP_DELAY);
        }

        tracing::debug!(%start, %end, length = path.len(), "traced entrance path");
        self.frame_from_current_state(STAGE_DELAY);
        self.into_state(Filled)
    }

    fn random_interior_point(&mut self) -> Point {
        let row = self.rng.random_range(1..self.height.as_unbounded() - 1);
        let column = self.rng.random_range(1..self.width.as_unbounded() - 1);
        Point::from_raw_clamped(row, column)
    }

    /// An exit more than half the larger dimension away from `start`, but
    /// less than the whole of it. Falls back to the interior corner farthest
    /// from `start`.
    fn pick_exit(&mut self, start: Point) -> Point {
        let larger = f64::from(self.width.max(self.height).as_unbounded());

        for _ in 0..EXIT_ATTEMPTS {
            let candidate = self.random_interior_point();
            let distance = candidate.distance(start);
            if distance > larger / 2.0 && distance < larger {
                return candidate;
            }
        }

        let (last_row, last_column) = (
            self.height.as_unbounded() - 2,
            self.width.as_unbounded() - 2,
        );
        let fallback = [(1, 1), (1, last_column), (last_row, 1), (last_row, last_column)]
            .into_iter()
            .map(|(r, c)| Point::from_raw_clamped(r, c))
            .max_by_key(|corner| corner.distance_squared(start))
            .unwrap_or(start);
        tracing::warn!(%start, exit = %fallback, "no exit sampled in range, using farthest corner");
        fallback
    }
}
