use std::collections::HashSet;

use petgraph::unionfind::UnionFind;

use crate::border::Border;
use crate::config::BuildConnectionIterations;
use crate::connection_path::Connection;
use crate::floor_builder::FloorBuilder;
use crate::point::Point;

use super::{FloorBuilderState, HasConnections};

/// Caves have been found and each has a border.
#[derive(Debug)]
pub(crate) struct HasBorders {
    pub(crate) borders: Vec<Border>,
}

impl FloorBuilderState for HasBorders {
    const TYPE_NAME: &'static str = "HasBorders";
}

/// Whether connection building should stop before making connection
/// number `made + 1`.
fn should_stop(iterations: BuildConnectionIterations, made: usize, components: usize) -> bool {
    if components <= 1 {
        return true;
    }
    match iterations {
        BuildConnectionIterations::FullyConnect => false,
        BuildConnectionIterations::Finite(n) => made >= usize::from(n),
        BuildConnectionIterations::Until(k) => components <= usize::from(k),
    }
}

impl FloorBuilder<HasBorders> {
    /// Connects each border, in order, to the closest border point owned by
    /// a cave it is not yet connected to.
    ///
    /// Every connection merges two groups of caves, so the connections form
    /// a spanning forest, and a full pass always ends fully connected.
    pub(crate) fn build_connections(
        self,
        iterations: BuildConnectionIterations,
    ) -> FloorBuilder<HasConnections> {
        let borders = &self.extra.borders;

        // A wall between two caves appears once per border it belongs to.
        let owned: Vec<(Point, usize)> = borders
            .iter()
            .enumerate()
            .flat_map(|(index, border)| border.points.iter().map(move |&p| (p, index)))
            .collect();

        let mut groups = UnionFind::<usize>::new(borders.len());
        let mut components = borders.len();
        let mut connections = Vec::new();

        for (index, border) in borders.iter().enumerate() {
            if should_stop(iterations, connections.len(), components) {
                break;
            }
            let group = groups.find_mut(index);

            let mut best: Option<(i64, Point, Point, usize)> = None;
            for &(to, owner) in &owned {
                if groups.find_mut(owner) == group {
                    continue;
                }
                for &from in &border.points {
                    let d = from.distance_squared(to);
                    if best.is_none_or(|(closest, ..)| d < closest) {
                        best = Some((d, from, to, owner));
                    }
                }
            }

            if let Some((d, from, to, owner)) = best {
                if groups.union(index, owner) {
                    components -= 1;
                }
                connections.push(Connection {
                    distance: (d as f64).sqrt(),
                    from: (from, border.id),
                    to: (to, borders[owner].id),
                });
            }
        }

        tracing::debug!(
            caves = borders.len(),
            connections = connections.len(),
            groups = components,
            ?iterations,
            "built connections"
        );

        let border_points: HashSet<Point> = owned.into_iter().map(|(p, _)| p).collect();
        self.into_state(HasConnections {
            connections,
            border_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::*;
    use crate::border::BorderId;
    use crate::config::GenerationConfig;
    use crate::floor::FloorId;
    use crate::floor_builder::{blank, state};
    use crate::point::FloorDimension;

    fn p(row: i32, column: i32) -> Point {
        Point::from_raw(row, column).unwrap()
    }

    /// Single-point borders along the top row, at the given columns.
    fn with_borders(columns: &[i32]) -> FloorBuilder<HasBorders> {
        let size = FloorDimension::new(40).unwrap();
        let borders = columns
            .iter()
            .enumerate()
            .map(|(i, &c)| Border {
                id: BorderId::new(i),
                points: IndexSet::from([p(1, c)]),
            })
            .collect();
        blank(FloorId::new(0), size, size, &GenerationConfig::default(), 0)
            .into_state(state::HasBorders { borders })
    }

    fn is_spanning_forest(caves: usize, connections: &[Connection]) -> bool {
        let mut uf = UnionFind::<usize>::new(caves);
        connections
            .iter()
            .all(|c| uf.union(c.from.1.get(), c.to.1.get()))
    }

    #[test]
    fn fully_connect_joins_everything() {
        let b = with_borders(&[1, 5, 20, 30, 38])
            .build_connections(BuildConnectionIterations::FullyConnect);
        assert_eq!(b.extra.connections.len(), 4);
        assert!(is_spanning_forest(5, &b.extra.connections));
    }

    #[test]
    fn finite_caps_the_number_of_connections() {
        let b = with_borders(&[1, 5, 20, 30, 38])
            .build_connections(BuildConnectionIterations::Finite(2));
        assert_eq!(b.extra.connections.len(), 2);
    }

    #[test]
    fn until_stops_at_the_group_count() {
        let b = with_borders(&[1, 5, 20, 30, 38])
            .build_connections(BuildConnectionIterations::Until(3));
        assert_eq!(b.extra.connections.len(), 2);
    }

    #[test]
    fn connects_to_the_nearest_other_cave() {
        let b = with_borders(&[1, 5, 30]).build_connections(BuildConnectionIterations::Finite(1));
        let c = b.extra.connections[0];
        assert_eq!(c.from, (p(1, 1), BorderId::new(0)));
        assert_eq!(c.to, (p(1, 5), BorderId::new(1)));
        assert_eq!(c.distance, 4.0);
    }

    #[test]
    fn single_cave_needs_no_connections() {
        let b = with_borders(&[7]).build_connections(BuildConnectionIterations::FullyConnect);
        assert!(b.extra.connections.is_empty());
        assert!(b.extra.border_points.contains(&p(1, 7)));
    }

    #[test]
    fn shared_wall_connects_in_place() {
        let size = FloorDimension::new(20).unwrap();
        let borders = vec![
            Border {
                id: BorderId::new(0),
                points: IndexSet::from([p(3, 3), p(3, 4)]),
            },
            Border {
                id: BorderId::new(1),
                points: IndexSet::from([p(3, 4), p(3, 9)]),
            },
        ];
        let b = blank(FloorId::new(0), size, size, &GenerationConfig::default(), 0)
            .into_state(state::HasBorders { borders })
            .build_connections(BuildConnectionIterations::FullyConnect);
        let c = b.extra.connections[0];
        assert_eq!(c.distance, 0.0);
        assert_eq!(c.from.0, c.to.0);
    }
}
