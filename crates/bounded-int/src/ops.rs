//! Checked arithmetic operators for [`BoundedInt`].
//!
//! `Add` reports [`BoundedIntOverflowError`] and `Sub` reports
//! [`BoundedIntUnderflowError`]. Arithmetic is carried out in `i64`, so the
//! error always carries the exact distance past the bound.
//!
//! Adding two negative values (or subtracting a negative one) can move the
//! result out of the *opposite* bound. The same error type is used and the
//! reported distance is then negative.

use crate::BoundedInt;
use std::fmt;
use std::ops::{Add, Sub};

/// The result of an addition exceeded `HIGH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedIntOverflowError {
    overflowed_by: i64,
}

impl BoundedIntOverflowError {
    /// How far past `HIGH` the result landed (`result - HIGH`).
    pub const fn overflowed_by(&self) -> i64 {
        self.overflowed_by
    }
}

impl fmt::Display for BoundedIntOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bounded integer overflowed by {}", self.overflowed_by)
    }
}

impl std::error::Error for BoundedIntOverflowError {}

/// The result of a subtraction fell below `LOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedIntUnderflowError {
    underflowed_by: i64,
}

impl BoundedIntUnderflowError {
    /// How far below `LOW` the result landed (`LOW - result`).
    pub const fn underflowed_by(&self) -> i64 {
        self.underflowed_by
    }
}

impl fmt::Display for BoundedIntUnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bounded integer underflowed by {}", self.underflowed_by)
    }
}

impl std::error::Error for BoundedIntUnderflowError {}

fn checked_sum<const LOW: i32, const HIGH: i32>(
    result: i64,
) -> Result<BoundedInt<LOW, HIGH>, BoundedIntOverflowError> {
    if result > i64::from(HIGH) || result < i64::from(LOW) {
        Err(BoundedIntOverflowError {
            overflowed_by: result - i64::from(HIGH),
        })
    } else {
        // In range, so it fits in i32.
        Ok(BoundedInt(result as i32))
    }
}

fn checked_difference<const LOW: i32, const HIGH: i32>(
    result: i64,
) -> Result<BoundedInt<LOW, HIGH>, BoundedIntUnderflowError> {
    if result < i64::from(LOW) || result > i64::from(HIGH) {
        Err(BoundedIntUnderflowError {
            underflowed_by: i64::from(LOW) - result,
        })
    } else {
        Ok(BoundedInt(result as i32))
    }
}

impl<const LOW: i32, const HIGH: i32> Add for BoundedInt<LOW, HIGH> {
    type Output = Result<Self, BoundedIntOverflowError>;

    fn add(self, rhs: Self) -> Self::Output {
        checked_sum(i64::from(self.0) + i64::from(rhs.0))
    }
}

impl<const LOW: i32, const HIGH: i32> Add<u16> for BoundedInt<LOW, HIGH> {
    type Output = Result<Self, BoundedIntOverflowError>;

    fn add(self, rhs: u16) -> Self::Output {
        checked_sum(i64::from(self.0) + i64::from(rhs))
    }
}

impl<const LOW: i32, const HIGH: i32> Sub for BoundedInt<LOW, HIGH> {
    type Output = Result<Self, BoundedIntUnderflowError>;

    fn sub(self, rhs: Self) -> Self::Output {
        checked_difference(i64::from(self.0) - i64::from(rhs.0))
    }
}

impl<const LOW: i32, const HIGH: i32> Sub<u16> for BoundedInt<LOW, HIGH> {
    type Output = Result<Self, BoundedIntUnderflowError>;

    fn sub(self, rhs: u16) -> Self::Output {
        checked_difference(i64::from(self.0) - i64::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type B = BoundedInt<0, 100>;

    #[test]
    fn add_within_bounds() {
        let a = B::new(40).unwrap();
        assert_eq!(a + 60_u16, Ok(B::MAX));
        assert_eq!((a + a).ok(), B::new(80).ok());
    }

    #[test]
    fn add_reports_overflow_distance() {
        let a = B::new(90).unwrap();
        let err = (a + 15_u16).unwrap_err();
        assert_eq!(err.overflowed_by(), 5);
        assert_eq!((a + a).unwrap_err().overflowed_by(), 80);
        assert_eq!(err.to_string(), "bounded integer overflowed by 5");
    }

    #[test]
    fn sub_reports_underflow_distance_from_low() {
        let a = BoundedInt::<10, 20>::new(12).unwrap();
        let err = (a - 5_u16).unwrap_err();
        assert_eq!(err.underflowed_by(), 3);
        assert_eq!((a - 2_u16).ok(), BoundedInt::<10, 20>::new(10).ok());
    }

    #[test]
    fn sub_self() {
        let a = B::new(30).unwrap();
        let b = B::new(31).unwrap();
        assert_eq!((b - a).ok(), B::new(1).ok());
        assert_eq!((a - b).unwrap_err().underflowed_by(), 1);
    }

    #[test]
    fn u16_max_does_not_wrap() {
        let a = BoundedInt::<{ i32::MAX - 10 }, { i32::MAX }>::new(i32::MAX - 1).unwrap();
        assert_eq!((a + u16::MAX).unwrap_err().overflowed_by(), i64::from(u16::MAX) - 1);
    }

    #[test]
    fn negative_sum_below_low_is_reported() {
        let a = BoundedInt::<-10, 10>::new(-8).unwrap();
        let err = (a + a).unwrap_err();
        assert_eq!(err.overflowed_by(), -26);
    }

    proptest! {
        #[test]
        fn add_u16_matches_i64(start in 0i32..=100, rhs in any::<u16>()) {
            let a = B::new(start).unwrap();
            let expected = i64::from(start) + i64::from(rhs);
            match a + rhs {
                Ok(v) => prop_assert_eq!(i64::from(v.as_unbounded()), expected),
                Err(e) => {
                    prop_assert!(expected > 100);
                    prop_assert_eq!(e.overflowed_by(), expected - 100);
                }
            }
        }

        #[test]
        fn sub_u16_matches_i64(start in 0i32..=100, rhs in any::<u16>()) {
            let a = B::new(start).unwrap();
            let expected = i64::from(start) - i64::from(rhs);
            match a - rhs {
                Ok(v) => prop_assert_eq!(i64::from(v.as_unbounded()), expected),
                Err(e) => {
                    prop_assert!(expected < 0);
                    prop_assert_eq!(e.underflowed_by(), -expected);
                }
            }
        }
    }
}
