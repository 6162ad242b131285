//! Range iterators over [`BoundedInt`] values.
//!
//! Both ranges know their exact remaining length, and both stay exhausted
//! once they return `None`.

use crate::BoundedInt;
use std::iter::FusedIterator;

/// Half-open range `start..end` over a [`BoundedInt`].
///
/// Created by [`BoundedInt::range_to`] and [`BoundedInt::range_from`].
#[derive(Debug, Clone)]
pub struct BoundedIntRange<const LOW: i32, const HIGH: i32> {
    pub(crate) pointer: BoundedInt<LOW, HIGH>,
    pub(crate) end: BoundedInt<LOW, HIGH>,
}

impl<const LOW: i32, const HIGH: i32> Iterator for BoundedIntRange<LOW, HIGH> {
    type Item = BoundedInt<LOW, HIGH>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pointer >= self.end {
            return None;
        }
        let current = self.pointer;
        // pointer < end <= HIGH, so the increment stays in bounds.
        self.pointer = BoundedInt(self.pointer.0 + 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (i64::from(self.end.0) - i64::from(self.pointer.0)).max(0) as usize;
        (len, Some(len))
    }
}

impl<const LOW: i32, const HIGH: i32> ExactSizeIterator for BoundedIntRange<LOW, HIGH> {}

impl<const LOW: i32, const HIGH: i32> FusedIterator for BoundedIntRange<LOW, HIGH> {}

/// Closed range `start..=end` over a [`BoundedInt`].
///
/// Created by [`BoundedInt::range_to_inclusive`] and
/// [`BoundedInt::range_from_inclusive`].
#[derive(Debug, Clone)]
pub struct BoundedIntRangeInclusive<const LOW: i32, const HIGH: i32> {
    pub(crate) pointer: BoundedInt<LOW, HIGH>,
    pub(crate) end: BoundedInt<LOW, HIGH>,
    pub(crate) finished: bool,
}

impl<const LOW: i32, const HIGH: i32> Iterator for BoundedIntRangeInclusive<LOW, HIGH> {
    type Item = BoundedInt<LOW, HIGH>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.pointer > self.end {
            return None;
        }
        let current = self.pointer;
        if self.pointer == self.end {
            // `end` may be HIGH itself; stop rather than step past it.
            self.finished = true;
        } else {
            self.pointer = BoundedInt(self.pointer.0 + 1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.finished {
            0
        } else {
            (i64::from(self.end.0) - i64::from(self.pointer.0) + 1).max(0) as usize
        };
        (len, Some(len))
    }
}

impl<const LOW: i32, const HIGH: i32> ExactSizeIterator for BoundedIntRangeInclusive<LOW, HIGH> {}

impl<const LOW: i32, const HIGH: i32> FusedIterator for BoundedIntRangeInclusive<LOW, HIGH> {}
