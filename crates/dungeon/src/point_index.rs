//! Row-major indexing of flat grids by [`Point`].
//!
//! A grid of width 4 and height 3 is stored as
//!
//! ```txt
//! [a, b, c, d, e, f, g, h, i, j, k, l]
//!  ^--------^  ^--------^  ^--------^
//!    row 0       row 1       row 2
//! ```
//!
//! and the tile at row 1, column 2 lives at `1 * 4 + 2 = 6`.

use bounded_int::BoundedInt;

use crate::point::{Column, Coordinate, FloorDimension, Point, Row};

/// A flat container addressable as a 2D grid of known width.
///
/// # Panics
///
/// `at` and `at_mut` panic if the point lies outside the container, the same
/// way slice indexing does.
///
/// # Examples
///
/// ```
/// use bounded_int::BoundedInt;
/// use dungeon::point::Point;
/// use dungeon::point_index::PointIndex;
///
/// let mut map = vec![
///     0, 0, 0, 0,
///     0, 0, 0, 0,
///     0, 0, 0, 0,
///     0, 0, 1, 0,
///     0, 0, 0, 0,
/// ];
/// let width = BoundedInt::<0, 20>::new(4).unwrap();
///
/// assert_eq!(map.at(Point::from_raw(3, 2).unwrap(), width), &1);
///
/// *map.at_mut(Point::from_raw(2, 1).unwrap(), width) = 7;
/// assert_eq!(map[9], 7);
/// ```
pub trait PointIndex<T> {
    /// Returns a reference to the item at `point`.
    fn at<const LOW: i32, const HIGH: i32>(&self, point: Point, width: BoundedInt<LOW, HIGH>) -> &T;

    /// Returns a mutable reference to the item at `point`.
    fn at_mut<const LOW: i32, const HIGH: i32>(
        &mut self,
        point: Point,
        width: BoundedInt<LOW, HIGH>,
    ) -> &mut T;
}

/// Flat index of `point` in a row-major grid of the given width.
pub(crate) fn flat_index<const LOW: i32, const HIGH: i32>(
    point: Point,
    width: BoundedInt<LOW, HIGH>,
) -> usize {
    let width = usize::try_from(width.as_unbounded()).unwrap_or(0);
    point.row.index() * width + point.column.index()
}

impl<T> PointIndex<T> for [T] {
    fn at<const LOW: i32, const HIGH: i32>(&self, point: Point, width: BoundedInt<LOW, HIGH>) -> &T {
        &self[flat_index(point, width)]
    }

    fn at_mut<const LOW: i32, const HIGH: i32>(
        &mut self,
        point: Point,
        width: BoundedInt<LOW, HIGH>,
    ) -> &mut T {
        &mut self[flat_index(point, width)]
    }
}

impl<T> PointIndex<T> for Vec<T> {
    fn at<const LOW: i32, const HIGH: i32>(&self, point: Point, width: BoundedInt<LOW, HIGH>) -> &T {
        self.as_slice().at(point, width)
    }

    fn at_mut<const LOW: i32, const HIGH: i32>(
        &mut self,
        point: Point,
        width: BoundedInt<LOW, HIGH>,
    ) -> &mut T {
        self.as_mut_slice().at_mut(point, width)
    }
}

/// Every point of a `width` x `height` grid, in row-major order.
///
/// ```
/// use bounded_int::BoundedInt;
/// use dungeon::point_index::iter_points;
///
/// let ten = BoundedInt::new(10).unwrap();
/// let points: Vec<_> = iter_points(ten, ten).collect();
///
/// assert_eq!(points.len(), 100);
/// assert_eq!(points[11].row.get().as_unbounded(), 1);
/// assert_eq!(points[11].column.get().as_unbounded(), 1);
/// ```
pub fn iter_points(
    width: FloorDimension,
    height: FloorDimension,
) -> impl Iterator<Item = Point> + Clone {
    let width: Coordinate = width.expand_lower();
    let height: Coordinate = height.expand_lower();

    Coordinate::MIN.range_to(height).flat_map(move |row| {
        Coordinate::MIN
            .range_to(width)
            .map(move |column| Point::new(Row::new(row), Column::new(column)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let width = BoundedInt::<0, 10>::new(4).unwrap();
        let grid: Vec<usize> = (0..12).collect();
        assert_eq!(*grid.at(Point::from_raw(1, 2).unwrap(), width), 6);
        assert_eq!(*grid.at(Point::from_raw(2, 3).unwrap(), width), 11);
        assert_eq!(*grid[..].at(Point::from_raw(0, 0).unwrap(), width), 0);
    }

    #[test]
    fn iter_points_matches_flat_index() {
        let width = FloorDimension::new(13).unwrap();
        let height = FloorDimension::new(11).unwrap();
        for (i, point) in iter_points(width, height).enumerate() {
            assert_eq!(flat_index(point, width), i);
        }
        assert_eq!(iter_points(width, height).count(), 13 * 11);
    }

    #[test]
    fn iter_points_is_sorted() {
        let ten = FloorDimension::new(10).unwrap();
        let points: Vec<_> = iter_points(ten, ten).collect();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let width = BoundedInt::<0, 10>::new(4).unwrap();
        let grid = vec![0u8; 8];
        let _ = grid.at(Point::from_raw(5, 0).unwrap(), width);
    }
}
