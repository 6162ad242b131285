//! Grid coordinates.
//!
//! [`Row`] and [`Column`] wrap a [`Coordinate`] so the two axes cannot be
//! mixed up. [`Point`] pairs them and orders row-major: `(row, column)` is
//! compared lexicographically, which is the same order tiles are stored in.

use bounded_int::{BoundedInt, BoundedIntError, BoundedIntOverflowError, BoundedIntUnderflowError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// The minimum width or height of a [`Floor`](crate::Floor).
pub const MIN_FLOOR_SIZE: i32 = 10;

/// The maximum width or height of a [`Floor`](crate::Floor).
pub const MAX_FLOOR_SIZE: i32 = 200;

/// Width or height of a floor.
pub type FloorDimension = BoundedInt<MIN_FLOOR_SIZE, MAX_FLOOR_SIZE>;

/// A single row or column index.
pub type Coordinate = BoundedInt<0, MAX_FLOOR_SIZE>;

macro_rules! axis {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub(crate) Coordinate);

        impl $name {
            /// Wraps a coordinate.
            pub const fn new(value: Coordinate) -> Self {
                Self(value)
            }

            /// Returns the wrapped coordinate.
            pub const fn get(self) -> Coordinate {
                self.0
            }

            /// Returns the coordinate as a `usize`, for indexing.
            pub(crate) const fn index(self) -> usize {
                // Coordinate's lower bound is 0.
                self.0.as_unbounded() as usize
            }

            /// Adds `n`, clamping at the coordinate bounds.
            #[must_use]
            pub const fn saturating_add(self, n: i32) -> Self {
                Self(self.0.saturating_add(n))
            }

            /// Subtracts `n`, clamping at the coordinate bounds.
            #[must_use]
            pub const fn saturating_sub(self, n: i32) -> Self {
                Self(self.0.saturating_sub(n))
            }
        }

        impl Add<u16> for $name {
            type Output = Result<Self, BoundedIntOverflowError>;

            fn add(self, rhs: u16) -> Self::Output {
                Ok(Self((self.0 + rhs)?))
            }
        }

        impl Sub<u16> for $name {
            type Output = Result<Self, BoundedIntUnderflowError>;

            fn sub(self, rhs: u16) -> Self::Output {
                Ok(Self((self.0 - rhs)?))
            }
        }

        impl Add for $name {
            type Output = Option<Self>;

            fn add(self, rhs: Self) -> Self::Output {
                (self.0 + rhs.0).ok().map(Self)
            }
        }

        impl Sub for $name {
            type Output = Option<Self>;

            fn sub(self, rhs: Self) -> Self::Output {
                (self.0 - rhs.0).ok().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

axis! {
    /// The vertical position of a tile, counted from the top.
    Row
}

axis! {
    /// The horizontal position of a tile, counted from the left.
    Column
}

/// A tile position on a floor.
///
/// Field order matters: the derived [`Ord`] compares `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Vertical position.
    pub row: Row,
    /// Horizontal position.
    pub column: Column,
}

impl Point {
    /// Creates a point from its row and column.
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Creates a point from raw integers.
    ///
    /// # Errors
    ///
    /// Fails if either value lies outside `0..=MAX_FLOOR_SIZE`.
    pub fn from_raw(row: i32, column: i32) -> Result<Self, BoundedIntError> {
        Ok(Self {
            row: Row(Coordinate::new(row)?),
            column: Column(Coordinate::new(column)?),
        })
    }

    /// Creates a point from raw integers, clamping each into
    /// `0..=MAX_FLOOR_SIZE`.
    pub(crate) const fn from_raw_clamped(row: i32, column: i32) -> Self {
        Self {
            row: Row(Coordinate::new_clamped(row)),
            column: Column(Coordinate::new_clamped(column)),
        }
    }

    /// Moves down by `n`, clamping at the coordinate bounds.
    #[must_use]
    pub const fn saturating_add_row(self, n: i32) -> Self {
        Self {
            row: self.row.saturating_add(n),
            column: self.column,
        }
    }

    /// Moves up by `n`, clamping at zero.
    #[must_use]
    pub const fn saturating_sub_row(self, n: i32) -> Self {
        Self {
            row: self.row.saturating_sub(n),
            column: self.column,
        }
    }

    /// Moves right by `n`, clamping at the coordinate bounds.
    #[must_use]
    pub const fn saturating_add_column(self, n: i32) -> Self {
        Self {
            row: self.row,
            column: self.column.saturating_add(n),
        }
    }

    /// Moves left by `n`, clamping at zero.
    #[must_use]
    pub const fn saturating_sub_column(self, n: i32) -> Self {
        Self {
            row: self.row,
            column: self.column.saturating_sub(n),
        }
    }

    /// Moves down by `n`, or `None` past the coordinate bounds.
    pub fn add_row(self, n: u16) -> Option<Self> {
        Some(Self {
            row: (self.row + n).ok()?,
            column: self.column,
        })
    }

    /// Moves up by `n`, or `None` below zero.
    pub fn sub_row(self, n: u16) -> Option<Self> {
        Some(Self {
            row: (self.row - n).ok()?,
            column: self.column,
        })
    }

    /// Moves right by `n`, or `None` past the coordinate bounds.
    pub fn add_column(self, n: u16) -> Option<Self> {
        Some(Self {
            row: self.row,
            column: (self.column + n).ok()?,
        })
    }

    /// Moves left by `n`, or `None` below zero.
    pub fn sub_column(self, n: u16) -> Option<Self> {
        Some(Self {
            row: self.row,
            column: (self.column - n).ok()?,
        })
    }

    /// Squared Euclidean distance. Exact, and orders the same as
    /// [`distance`](Self::distance).
    pub(crate) fn distance_squared(self, other: Self) -> i64 {
        let dr = i64::from(self.row.0.as_unbounded()) - i64::from(other.row.0.as_unbounded());
        let dc =
            i64::from(self.column.0.as_unbounded()) - i64::from(other.column.0.as_unbounded());
        dr * dr + dc * dc
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl Add for Point {
    type Output = Option<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        Some(Self {
            row: (self.row + rhs.row)?,
            column: (self.column + rhs.column)?,
        })
    }
}

impl Sub for Point {
    type Output = Option<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        Some(Self {
            row: (self.row - rhs.row)?,
            column: (self.column - rhs.column)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
