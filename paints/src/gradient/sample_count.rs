// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PaintsError, PaintsResult};

/// Number of colors a gradient is asked to produce. At least two, since a path with one
/// point cannot start at one endpoint and end at the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleCount(usize);

impl SampleCount {
    pub const MIN: usize = 2;

    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl TryFrom<usize> for SampleCount {
    type Error = PaintsError;

    fn try_from(value: usize) -> PaintsResult<Self> {
        if value < Self::MIN {
            return Err(PaintsError::invalid_range(format!("N={value} is too small")));
        }
        Ok(Self(value))
    }
}

/// For counts that arrive as floating point, eg: from a config value. Must be a whole
/// number.
impl TryFrom<f64> for SampleCount {
    type Error = PaintsError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: f64) -> PaintsResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(PaintsError::invalid_range(format!(
                "N={value} must be an integer"
            )));
        }
        if value < 0.0 || value > usize::MAX as f64 {
            return Err(PaintsError::invalid_range(format!("N={value} is out of range")));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::try_from(value as usize)
    }
}

impl From<SampleCount> for usize {
    fn from(value: SampleCount) -> Self { value.0 }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_valid() {
        assert_eq2!(SampleCount::try_from(2_usize).map(SampleCount::get), Ok(2));
        assert_eq2!(SampleCount::try_from(15.0).map(usize::from), Ok(15));
    }

    #[test_case(0)]
    #[test_case(1)]
    fn test_too_small(value: usize) {
        assert!(matches!(
            SampleCount::try_from(value),
            Err(PaintsError::InvalidRange { .. })
        ));
    }

    #[test_case(1.5)]
    #[test_case(1.0)]
    #[test_case(-3.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_bad_float(value: f64) {
        assert!(matches!(
            SampleCount::try_from(value),
            Err(PaintsError::InvalidRange { .. })
        ));
    }
}
