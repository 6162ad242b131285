//! Integers whose bounds are enforced through const generics.
//!
//! [`BoundedInt<LOW, HIGH>`] wraps an [`i32`] that is guaranteed to satisfy
//! `LOW <= value <= HIGH`. The bounds themselves are checked at compile time:
//! instantiating a `BoundedInt` whose `LOW` is not strictly less than its
//! `HIGH` fails when the offending function is monomorphized.
//!
//! **Note:** the inner value is always an [`i32`]. That is wasteful for very
//! small ranges and not enough for ranges wider than an `i32` can hold.
//!
//! # Examples
//!
//! ```
//! use std::ops::{Add, Sub};
//! use bounded_int::{BoundedInt, BoundedIntError};
//!
//! let b = BoundedInt::<-10, 10>::new(0).unwrap();
//!
//! assert_eq!(b.add(5_u16).unwrap(), BoundedInt::<-10, 10>::new(5).unwrap());
//! assert_eq!(b.sub(5_u16).unwrap(), BoundedInt::<-10, 10>::new(-5).unwrap());
//! assert_eq!(b.saturating_add(100), BoundedInt::<-10, 10>::new(10).unwrap());
//! assert_eq!(b.saturating_sub(100), BoundedInt::<-10, 10>::new(-10).unwrap());
//!
//! assert_eq!(BoundedInt::<-10, 10>::new(100), Err(BoundedIntError::TooHigh(100)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod ops;

pub use iter::{BoundedIntRange, BoundedIntRangeInclusive};
pub use ops::{BoundedIntOverflowError, BoundedIntUnderflowError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer bound between two points, inclusive on both ends.
///
/// Serializes as a bare integer. Deserializing an out-of-range integer is an
/// error rather than a silently clamped value.
///
/// # Examples
///
/// ```
/// use bounded_int::BoundedInt;
///
/// let x = BoundedInt::<0, 10>::new(7).unwrap();
/// assert_eq!(x.as_unbounded(), 7);
/// assert_eq!(i32::from(x), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct BoundedInt<const LOW: i32, const HIGH: i32>(pub(crate) i32);

/// Error returned when an [`i32`] does not fit in a [`BoundedInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoundedIntError {
    /// The number was above the upper bound. Contains the rejected value.
    ///
    /// ```
    /// use bounded_int::{BoundedInt, BoundedIntError};
    ///
    /// assert_eq!(BoundedInt::<0, 10>::new(15), Err(BoundedIntError::TooHigh(15)));
    /// ```
    TooHigh(i32),
    /// The number was below the lower bound. Contains the rejected value.
    ///
    /// ```
    /// use bounded_int::{BoundedInt, BoundedIntError};
    ///
    /// assert_eq!(BoundedInt::<20, 30>::new(15), Err(BoundedIntError::TooLow(15)));
    /// ```
    TooLow(i32),
}

impl fmt::Display for BoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooHigh(n) => write!(f, "value {n} is above the upper bound"),
            Self::TooLow(n) => write!(f, "value {n} is below the lower bound"),
        }
    }
}

impl std::error::Error for BoundedIntError {}

impl<const LOW: i32, const HIGH: i32> BoundedInt<LOW, HIGH> {
    /// Smallest representable value.
    pub const MIN: Self = {
        assert!(LOW < HIGH, "LOW must be less than HIGH");
        Self(LOW)
    };

    /// Largest representable value.
    pub const MAX: Self = {
        assert!(LOW < HIGH, "LOW must be less than HIGH");
        Self(HIGH)
    };

    /// Attempts to create a new [`BoundedInt`] with the provided value.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedIntError::TooLow`] or [`BoundedIntError::TooHigh`]
    /// when `n` falls outside `LOW..=HIGH`.
    pub const fn new(n: i32) -> Result<Self, BoundedIntError> {
        const { assert!(LOW < HIGH, "LOW must be less than HIGH") };

        if n < LOW {
            Err(BoundedIntError::TooLow(n))
        } else if n > HIGH {
            Err(BoundedIntError::TooHigh(n))
        } else {
            Ok(Self(n))
        }
    }

    /// Returns the input as a [`BoundedInt`], clamped at the bounds.
    ///
    /// ```
    /// use bounded_int::BoundedInt;
    ///
    /// assert_eq!(
    ///     BoundedInt::<20, 30>::new_clamped(15),
    ///     BoundedInt::<20, 30>::new(20).unwrap()
    /// );
    /// ```
    #[must_use = "returned value will be immediately dropped if not used"]
    pub const fn new_clamped(n: i32) -> Self {
        const { assert!(LOW < HIGH, "LOW must be less than HIGH") };

        if n < LOW {
            Self(LOW)
        } else if n > HIGH {
            Self(HIGH)
        } else {
            Self(n)
        }
    }

    /// Returns the inner value.
    #[inline]
    #[must_use = "`as_unbounded` does not mutate the original value"]
    pub const fn as_unbounded(self) -> i32 {
        self.0
    }

    /// Returns a [`BoundedIntRange`] from `self` up to, but excluding, `to`.
    ///
    /// If `to <= self` the range is empty.
    ///
    /// ```
    /// use bounded_int::BoundedInt;
    ///
    /// let start = BoundedInt::<10, 15>::new(10).unwrap();
    /// let end = BoundedInt::<10, 15>::new(13).unwrap();
    ///
    /// let v: Vec<i32> = start.range_to(end).map(|b| b.as_unbounded()).collect();
    /// assert_eq!(v, [10, 11, 12]);
    /// ```
    pub const fn range_to(self, to: Self) -> BoundedIntRange<LOW, HIGH> {
        BoundedIntRange {
            pointer: self,
            end: to,
        }
    }

    /// Returns a [`BoundedIntRange`] from `from` up to, but excluding, `self`.
    ///
    /// If `self <= from` the range is empty.
    pub const fn range_from(self, from: Self) -> BoundedIntRange<LOW, HIGH> {
        BoundedIntRange {
            pointer: from,
            end: self,
        }
    }

    /// Returns a [`BoundedIntRangeInclusive`] from `self` to `to`.
    ///
    /// Empty if `to < self`; yields exactly `self` if `to == self`.
    ///
    /// ```
    /// use bounded_int::BoundedInt;
    ///
    /// let start = BoundedInt::<10, 15>::new(13).unwrap();
    /// let end = BoundedInt::<10, 15>::new(15).unwrap();
    ///
    /// let v: Vec<i32> = start.range_to_inclusive(end).map(|b| b.as_unbounded()).collect();
    /// assert_eq!(v, [13, 14, 15]);
    /// ```
    pub const fn range_to_inclusive(self, to: Self) -> BoundedIntRangeInclusive<LOW, HIGH> {
        BoundedIntRangeInclusive {
            pointer: self,
            end: to,
            finished: false,
        }
    }

    /// Returns a [`BoundedIntRangeInclusive`] from `from` to `self`.
    ///
    /// Empty if `self < from`; yields exactly `self` if `self == from`.
    pub const fn range_from_inclusive(self, from: Self) -> BoundedIntRangeInclusive<LOW, HIGH> {
        BoundedIntRangeInclusive {
            pointer: from,
            end: self,
            finished: false,
        }
    }

    /// Raises the upper bound to `HIGHER`.
    ///
    /// ```
    /// use bounded_int::BoundedInt;
    ///
    /// fn requires_larger_bounds(_: BoundedInt<10, 20>) {}
    ///
    /// let small = BoundedInt::<10, 15>::new(10).unwrap();
    /// requires_larger_bounds(small.expand_upper());
    /// ```
    #[must_use = "`expand_upper` does not mutate the original value"]
    pub const fn expand_upper<const HIGHER: i32>(self) -> BoundedInt<LOW, HIGHER> {
        const { assert!(HIGHER >= HIGH, "HIGHER must be greater than or equal to HIGH") };
        BoundedInt(self.0)
    }

    /// Lowers the lower bound to `LOWER`.
    ///
    /// ```
    /// use bounded_int::BoundedInt;
    ///
    /// fn requires_larger_bounds(_: BoundedInt<0, 15>) {}
    ///
    /// let small = BoundedInt::<10, 15>::new(10).unwrap();
    /// requires_larger_bounds(small.expand_lower());
    /// ```
    #[must_use = "`expand_lower` does not mutate the original value"]
    pub const fn expand_lower<const LOWER: i32>(self) -> BoundedInt<LOWER, HIGH> {
        const { assert!(LOWER <= LOW, "LOWER must be less than or equal to LOW") };
        BoundedInt(self.0)
    }

    /// Widens both bounds at once.
    #[must_use = "`expand_bounds` does not mutate the original value"]
    pub const fn expand_bounds<const LOWER: i32, const HIGHER: i32>(
        self,
    ) -> BoundedInt<LOWER, HIGHER> {
        const {
            assert!(LOWER <= LOW, "LOWER must be less than or equal to LOW");
            assert!(HIGHER >= HIGH, "HIGHER must be greater than or equal to HIGH");
        };
        BoundedInt(self.0)
    }

    /// Addition that saturates at the bounds instead of failing.
    #[must_use = "`saturating_add` does not mutate the original value"]
    pub const fn saturating_add(self, rhs: i32) -> Self {
        Self::new_clamped(self.0.saturating_add(rhs))
    }

    /// Subtraction that saturates at the bounds instead of failing.
    #[must_use = "`saturating_sub` does not mutate the original value"]
    pub const fn saturating_sub(self, rhs: i32) -> Self {
        Self::new_clamped(self.0.saturating_sub(rhs))
    }

    /// Addition returning `None` when the result leaves the bounds.
    #[must_use = "`checked_add` does not mutate the original value"]
    pub fn checked_add(self, rhs: i32) -> Option<Self> {
        self.0.checked_add(rhs).and_then(|n| Self::new(n).ok())
    }

    /// Subtraction returning `None` when the result leaves the bounds.
    #[must_use = "`checked_sub` does not mutate the original value"]
    pub fn checked_sub(self, rhs: i32) -> Option<Self> {
        self.0.checked_sub(rhs).and_then(|n| Self::new(n).ok())
    }
}

impl<const LOW: i32, const HIGH: i32> TryFrom<i32> for BoundedInt<LOW, HIGH> {
    type Error = BoundedIntError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const LOW: i32, const HIGH: i32> From<BoundedInt<LOW, HIGH>> for i32 {
    fn from(value: BoundedInt<LOW, HIGH>) -> Self {
        value.0
    }
}

impl<const LOW: i32, const HIGH: i32> fmt::Display for BoundedInt<LOW, HIGH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Small = BoundedInt<-10, 10>;

    #[test]
    fn new_accepts_bounds_inclusive() {
        assert_eq!(Small::new(-10), Ok(BoundedInt(-10)));
        assert_eq!(Small::new(10), Ok(BoundedInt(10)));
        assert_eq!(Small::new(11), Err(BoundedIntError::TooHigh(11)));
        assert_eq!(Small::new(-11), Err(BoundedIntError::TooLow(-11)));
    }

    #[test]
    fn min_and_max_consts() {
        assert_eq!(Small::MIN.as_unbounded(), -10);
        assert_eq!(Small::MAX.as_unbounded(), 10);
    }

    #[test]
    fn saturating_ops_do_not_overflow_i32() {
        let b = Small::new(3).unwrap();
        assert_eq!(b.saturating_add(i32::MAX), Small::MAX);
        assert_eq!(b.saturating_sub(i32::MAX), Small::MIN);
        assert_eq!(Small::MIN.saturating_sub(i32::MIN), Small::MAX);
    }

    #[test]
    fn checked_ops() {
        let b = Small::new(8).unwrap();
        assert_eq!(b.checked_add(2), Some(Small::MAX));
        assert_eq!(b.checked_add(3), None);
        assert_eq!(b.checked_sub(18), Some(Small::MIN));
        assert_eq!(b.checked_sub(19), None);
        assert_eq!(b.checked_add(i32::MAX), None);
    }

    #[test]
    fn range_to() {
        let start = BoundedInt::<20, 25>::new(20).unwrap();
        let end = BoundedInt::<20, 25>::new(25).unwrap();

        let v: Vec<_> = start.range_to(end).collect();

        assert!(matches!(
            *v,
            [
                BoundedInt(20),
                BoundedInt(21),
                BoundedInt(22),
                BoundedInt(23),
                BoundedInt(24)
            ]
        ));
    }

    #[test]
    fn range_to_inclusive() {
        let start = BoundedInt::<0, 25>::new(20).unwrap();
        let end = BoundedInt::<0, 25>::new(25).unwrap();

        let v: Vec<_> = start.range_to_inclusive(end).collect();

        assert!(matches!(
            *v,
            [
                BoundedInt(20),
                BoundedInt(21),
                BoundedInt(22),
                BoundedInt(23),
                BoundedInt(24),
                BoundedInt(25)
            ]
        ));
    }

    #[test]
    fn range_from() {
        let start = BoundedInt::<0, 100>::new(20).unwrap();
        let end = BoundedInt::<0, 100>::new(23).unwrap();

        let v: Vec<_> = end.range_from(start).map(i32::from).collect();
        assert_eq!(v, [20, 21, 22]);
    }

    #[test]
    fn range_from_inclusive_single_item() {
        let x = BoundedInt::<0, 25>::new(7).unwrap();
        let v: Vec<_> = x.range_from_inclusive(x).collect();
        assert_eq!(v, [x]);
    }

    #[test]
    fn ranges_are_empty_when_reversed() {
        let lo = BoundedInt::<0, 25>::new(3).unwrap();
        let hi = BoundedInt::<0, 25>::new(9).unwrap();
        assert_eq!(hi.range_to(lo).count(), 0);
        assert_eq!(hi.range_to_inclusive(lo).count(), 0);
        assert_eq!(lo.range_to(lo).count(), 0);
    }

    #[test]
    fn expand_keeps_value() {
        let x = BoundedInt::<10, 15>::new(12).unwrap();
        let wide: BoundedInt<0, 200> = x.expand_bounds();
        assert_eq!(wide.as_unbounded(), 12);
        let lower: BoundedInt<0, 15> = x.expand_lower();
        assert_eq!(lower.as_unbounded(), 12);
        let upper: BoundedInt<10, 99> = x.expand_upper();
        assert_eq!(upper.as_unbounded(), 12);
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let x = BoundedInt::<0, 10>::new(4).unwrap();
        assert_eq!(serde_json::to_string(&x).unwrap(), "4");
        assert_eq!(serde_json::from_str::<BoundedInt<0, 10>>("4").unwrap(), x);
        assert!(serde_json::from_str::<BoundedInt<0, 10>>("11").is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            BoundedIntError::TooHigh(3).to_string(),
            "value 3 is above the upper bound"
        );
        assert_eq!(
            BoundedIntError::TooLow(-3).to_string(),
            "value -3 is below the lower bound"
        );
    }

    proptest! {
        #[test]
        fn new_ok_iff_in_range(n in any::<i32>()) {
            let r = Small::new(n);
            prop_assert_eq!(r.is_ok(), (-10..=10).contains(&n));
        }

        #[test]
        fn clamped_is_always_in_range(n in any::<i32>()) {
            let c = Small::new_clamped(n).as_unbounded();
            prop_assert!((-10..=10).contains(&c));
            if (-10..=10).contains(&n) {
                prop_assert_eq!(c, n);
            }
        }

        #[test]
        fn saturating_add_stays_in_range(start in -10i32..=10, rhs in any::<i32>()) {
            let b = Small::new(start).unwrap();
            let s = b.saturating_add(rhs).as_unbounded();
            prop_assert!((-10..=10).contains(&s));
        }

        #[test]
        fn range_len_matches_difference(a in 0i32..=50, b in 0i32..=50) {
            let x = BoundedInt::<0, 50>::new(a).unwrap();
            let y = BoundedInt::<0, 50>::new(b).unwrap();
            let expected = (b - a).max(0) as usize;
            prop_assert_eq!(x.range_to(y).count(), expected);
            prop_assert_eq!(x.range_to(y).len(), expected);
            prop_assert_eq!(x.range_to_inclusive(y).count(), if b >= a { expected + 1 } else { 0 });
        }
    }
}
