use indexmap::IndexSet;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use crate::border::{Border, BorderId};
use crate::config::BuildConnectionIterations;
use crate::dungeon_tile::DungeonTile;
use crate::floor_builder::FloorBuilder;
use crate::grid_helpers::interior_neighbours_4;
use crate::point_index::{iter_points, PointIndex};

use super::{FloorBuilderState, HasBorders, HasSecretPassages};

/// The cellular automaton has run; cave edges are smooth.
#[derive(Debug)]
pub(crate) struct Smoothed;

impl FloorBuilderState for Smoothed {
    const TYPE_NAME: &'static str = "Smoothed";
}

impl FloorBuilder<Smoothed> {
    /// Finds every cave (4-connected open region) and the wall tiles around
    /// it. Borders come back in a random order drawn from the floor RNG.
    pub(crate) fn get_cave_borders(mut self) -> FloorBuilder<HasBorders> {
        let mut visited = vec![false; self.map.len()];
        let mut borders = Vec::new();

        for point in iter_points(self.width, self.height) {
            if *visited.at(point, self.width) || !self.tile(point).is_empty() {
                continue;
            }
            *visited.at_mut(point, self.width) = true;

            let mut points = IndexSet::new();
            let mut queue = VecDeque::from([point]);
            while let Some(current) = queue.pop_front() {
                for next in interior_neighbours_4(current, self.width, self.height) {
                    if !self.tile(next).is_empty() {
                        points.insert(next);
                    } else if !*visited.at(next, self.width) {
                        *visited.at_mut(next, self.width) = true;
                        queue.push_back(next);
                    }
                }
            }

            if !points.is_empty() {
                borders.push(Border {
                    id: BorderId::new(borders.len()),
                    points,
                });
            }
        }

        borders.shuffle(&mut self.rng);
        tracing::debug!(caves = borders.len(), "found cave borders");
        self.into_state(HasBorders { borders })
    }

    /// Joins any caves still disconnected with secret passages: locked
    /// secret doors at both ends, passage tiles between them.
    pub(crate) fn check_for_secret_passages(self) -> FloorBuilder<HasSecretPassages> {
        let with_borders = self.get_cave_borders();
        let caves = with_borders.extra.borders.len();
        if caves <= 1 {
            return with_borders.into_state(HasSecretPassages);
        }

        tracing::debug!(caves, "joining remaining caves with secret passages");
        with_borders
            .build_connections(BuildConnectionIterations::FullyConnect)
            .trace_connection_paths(false, false)
            .draw(|is_first, is_last, _| {
                if is_first || is_last {
                    DungeonTile::SecretDoor { requires_key: true }
                } else {
                    DungeonTile::SecretPassage
                }
            })
            .into_state(HasSecretPassages)
    }
}
