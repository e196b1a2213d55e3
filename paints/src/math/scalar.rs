// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crate::{PaintsError, PaintsResult};

/// Returns `-1`, `0`, or `1` depending on the sign of `x`.
#[must_use]
pub const fn sgn(x: i64) -> i64 { x.signum() }

/// Linear interpolation. Implemented for [`f64`] and for [`crate::Vector`] of [`f64`].
pub trait Lerp: Sized {
    /// Returns `self + (other - self) * t`. Values of `t` outside `0.0..=1.0`
    /// extrapolate past the endpoints.
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self { self + (other - self) * t }
}

#[must_use]
pub fn lerp<T: Lerp>(a: T, b: T, t: f64) -> T { a.lerp(b, t) }

/// Clamps `value` into `lo..=hi`.
///
/// # Errors
///
/// Returns [`PaintsError::InvalidRange`] if `lo > hi`.
pub fn clamp<T: PartialOrd + Display + Copy>(value: T, lo: T, hi: T) -> PaintsResult<T> {
    if lo > hi {
        return Err(PaintsError::invalid_range(format!(
            "clamp bounds are reversed: {lo} > {hi}"
        )));
    }
    Ok(if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    })
}

/// Walks from `a` toward `b` one unit at a time.
///
/// - `inclusive == true` keeps both `a` and `b`, eg: `interval(3, 1, true)` is
///   `[3, 2, 1]`.
/// - `inclusive == false` drops both ends, eg: `interval(3, 1, false)` is `[2]`, and
///   `interval(3, 3, false)` is empty.
#[must_use]
pub fn interval(a: i64, b: i64, inclusive: bool) -> Vec<i64> {
    let step = sgn(b - a);
    let walk = std::iter::successors(Some(a), move |&it| (it != b).then_some(it + step));
    if inclusive {
        walk.collect()
    } else {
        walk.filter(|&it| it != a && it != b).collect()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(2024, 1)]
    #[test_case(0, 0)]
    #[test_case(-2024, -1)]
    fn test_sgn(input: i64, expected: i64) {
        assert_eq2!(sgn(input), expected);
    }

    #[test_case(0.0, 10.0, 0.5, 5.0)]
    #[test_case(0.0, 9.0, 0.333_333_333_333_333_3, 3.0)]
    #[test_case(-10.0, 10.0, 0.0, -10.0)]
    #[test_case(-10.0, 10.0, 0.1, -8.0)]
    #[test_case(-10.0, 10.0, 0.5, 0.0)]
    #[test_case(-10.0, 10.0, 1.0, 10.0)]
    #[allow(clippy::float_cmp)]
    fn test_lerp(a: f64, b: f64, t: f64, expected: f64) {
        assert_eq2!(lerp(a, b, t), expected);
    }

    #[test]
    fn test_clamp() {
        assert_eq2!(clamp(0, 3, 7), Ok(3));
        assert_eq2!(clamp(5, 3, 7), Ok(5));
        assert_eq2!(clamp(9, 3, 7), Ok(7));
        assert!(matches!(
            clamp(5, 7, 3),
            Err(PaintsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_interval_inclusive() {
        assert_eq2!(interval(1, 3, true), vec![1, 2, 3]);
        assert_eq2!(interval(3, 1, true), vec![3, 2, 1]);
        assert_eq2!(interval(3, -3, true), vec![3, 2, 1, 0, -1, -2, -3]);
        assert_eq2!(interval(3, 3, true), vec![3]);
    }

    #[test]
    fn test_interval_exclusive() {
        assert_eq2!(interval(3, -3, false), vec![2, 1, 0, -1, -2]);
        assert_eq2!(interval(3, 3, false), Vec::<i64>::new());
        assert_eq2!(interval(3, 4, false), Vec::<i64>::new());
    }
}
