//! Borders around caves.

use indexmap::IndexSet;
use std::fmt;

use crate::point::Point;

/// Identifies one [`Border`] on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BorderId(usize);

impl BorderId {
    /// Wraps a raw id.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for BorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The wall tiles 4-adjacent to one cave.
///
/// Points are kept in discovery order so iteration is reproducible.
#[derive(Clone)]
pub(crate) struct Border {
    pub(crate) id: BorderId,
    pub(crate) points: IndexSet<Point>,
}

impl fmt::Debug for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Border")
            .field("id", &self.id)
            .field("points", &self.points.len())
            .finish()
    }
}
