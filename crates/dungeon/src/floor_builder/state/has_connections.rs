use std::collections::HashSet;

use pathfinding::prelude::dijkstra;

use crate::connection_path::{Connection, ConnectionPath, ConnectionPathLength};
use crate::floor_builder::FloorBuilder;
use crate::grid_helpers::interior_neighbours_4;
use crate::point::Point;
use crate::point_index::PointIndex;

use super::{Drawable, FloorBuilderState};

/// Caves are paired up; paths between them are not traced yet.
#[derive(Debug)]
pub(crate) struct HasConnections {
    pub(crate) connections: Vec<Connection>,
    /// Every point of every border, so paths can steer clear of other caves.
    pub(crate) border_points: HashSet<Point>,
}

impl FloorBuilderState for HasConnections {
    const TYPE_NAME: &'static str = "HasConnections";
}

impl FloorBuilder<HasConnections> {
    /// Traces a path for every connection.
    ///
    /// Paths avoid the borders of caves other than the target so they do not
    /// cut through unrelated caves. If that is impossible the path may cross
    /// them. With `use_noise_map` the path follows cheap noise valleys,
    /// otherwise it is a shortest path. With `wide`, the 4-neighbours of
    /// every path tile are added to the body.
    pub(crate) fn trace_connection_paths(
        self,
        wide: bool,
        use_noise_map: bool,
    ) -> FloorBuilder<Drawable> {
        let (width, height) = (self.width, self.height);
        let mut to_draw = Vec::with_capacity(self.extra.connections.len());

        for connection in &self.extra.connections {
            let (start, start_border_id) = connection.from;
            let (goal, end_border_id) = connection.to;

            let cost = |point: Point| {
                if use_noise_map {
                    u64::from(*self.noise_map.at(point, width))
                } else {
                    1
                }
            };
            let border_points = &self.extra.border_points;
            let restricted = dijkstra(
                &start,
                |&point| {
                    interior_neighbours_4(point, width, height)
                        .into_iter()
                        .filter(move |n| *n == goal || !border_points.contains(n))
                        .map(move |n| (n, cost(n)))
                },
                |&point| point == goal,
            );
            let path = restricted.or_else(|| {
                tracing::warn!(%start, %goal, "no path around other caves, crossing them");
                dijkstra(
                    &start,
                    |&point| {
                        interior_neighbours_4(point, width, height)
                            .into_iter()
                            .map(move |n| (n, cost(n)))
                    },
                    |&point| point == goal,
                )
            });
            let Some((path, _cost)) = path else {
                tracing::warn!(%start, %goal, "connection could not be traced");
                continue;
            };

            let widen: Vec<Point> = if wide {
                path.iter()
                    .flat_map(|&p| interior_neighbours_4(p, width, height))
                    .collect()
            } else {
                Vec::new()
            };
            if let Some(path) = ConnectionPathLength::from_path(&path, widen) {
                to_draw.push(ConnectionPath {
                    start_border_id,
                    end_border_id,
                    path,
                });
            }
        }

        tracing::debug!(paths = to_draw.len(), wide, use_noise_map, "traced connection paths");
        self.into_state(Drawable { to_draw })
    }
}
