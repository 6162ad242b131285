//! Connections between caves and the paths traced for them.

use indexmap::IndexSet;
use std::iter;

use crate::border::BorderId;
use crate::point::Point;

/// A bridge between the closest points of two cave borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Euclidean distance between the two points.
    pub distance: f64,
    /// Starting point and the border it belongs to.
    pub from: (Point, BorderId),
    /// Ending point and the border it belongs to.
    pub to: (Point, BorderId),
}

/// A traced path for one [`Connection`], ready to be drawn.
#[derive(Debug, Clone)]
pub(crate) struct ConnectionPath {
    pub(crate) start_border_id: BorderId,
    pub(crate) end_border_id: BorderId,
    pub(crate) path: ConnectionPathLength,
}

impl ConnectionPath {
    /// Number of distinct tiles the path covers, ends included.
    pub(crate) fn length(&self) -> usize {
        match &self.path {
            ConnectionPathLength::Length1 { .. } => 1,
            ConnectionPathLength::Length2 { .. } => 2,
            ConnectionPathLength::Length3Plus { points, .. } => points.len() + 2,
        }
    }

    /// Start, body, end.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        let (first, body, last) = match &self.path {
            ConnectionPathLength::Length1 { point } => (*point, None, None),
            ConnectionPathLength::Length2 { start, end } => (*start, None, Some(*end)),
            ConnectionPathLength::Length3Plus { start, end, points } => {
                (*start, Some(points), Some(*end))
            }
        };
        iter::once(first)
            .chain(body.into_iter().flatten().copied())
            .chain(last)
    }
}

/// The shape of a traced path.
#[derive(Debug, Clone)]
pub(crate) enum ConnectionPathLength {
    /// Both borders share the point.
    Length1 { point: Point },
    /// The two ends touch.
    Length2 { start: Point, end: Point },
    /// A longer path. `points` excludes `start` and `end`.
    Length3Plus {
        start: Point,
        end: Point,
        points: IndexSet<Point>,
    },
}

impl ConnectionPathLength {
    /// Classifies a traced path. With `widen`, extra tiles are added to the
    /// body; they never include the two ends.
    pub(crate) fn from_path(path: &[Point], widen: impl IntoIterator<Item = Point>) -> Option<Self> {
        match path {
            [] => None,
            [point] => Some(Self::Length1 { point: *point }),
            [start, end] => Some(Self::Length2 {
                start: *start,
                end: *end,
            }),
            [start, .., end] => {
                let (start, end) = (*start, *end);
                let points = path
                    .iter()
                    .copied()
                    .chain(widen)
                    .filter(|p| *p != start && *p != end)
                    .collect();
                Some(Self::Length3Plus { start, end, points })
            }
        }
    }
}
