// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{ColorRgb, palette_index_to_rgb};
use crate::{PaintsError, PaintsResult, Vector};

/// The three bands of the 256-color palette. Gradients only interpolate between colors
/// of the same band.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PaletteBand {
    /// `0..=15`.
    System,
    /// `16..=231`, the 6×6×6 RGB cube.
    Cube,
    /// `232..=255`, the 24-step gray ramp.
    Grayscale,
}

/// Index into the 256-color palette, or no color at all. The `None` variant renders as
/// an empty SGR fragment, which lets a paint leave a slot at the terminal default.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color256 {
    pub code: Option<u8>,
}

impl From<u8> for Color256 {
    fn from(index: u8) -> Self { Self::new(index) }
}

impl Display for Color256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(index) => write!(f, "Color256({index})"),
            None => write!(f, "Color256(None)"),
        }
    }
}

impl Color256 {
    pub const CUBE_ORIGIN: u8 = 16;
    pub const GRAYSCALE_ORIGIN: u8 = 232;

    #[must_use]
    pub const fn new(index: u8) -> Self { Self { code: Some(index) } }

    #[must_use]
    pub const fn none() -> Self { Self { code: None } }

    #[must_use]
    pub const fn is_none(&self) -> bool { self.code.is_none() }

    /// # Errors
    ///
    /// Returns [`PaintsError::InvalidArgument`] if `index` is outside `0..=255`.
    pub fn try_from_index(index: i64) -> PaintsResult<Self> {
        u8::try_from(index).map(Self::new).map_err(|_| {
            PaintsError::invalid_argument(format!(
                "palette index {index} must be in 0..=255"
            ))
        })
    }

    /// Standard xterm RGB value, `None` for no color.
    #[must_use]
    pub fn to_rgb(&self) -> Option<ColorRgb> { self.code.map(palette_index_to_rgb) }

    #[must_use]
    pub const fn band(&self) -> Option<PaletteBand> {
        match self.code {
            None => None,
            Some(0..=15) => Some(PaletteBand::System),
            Some(16..=231) => Some(PaletteBand::Cube),
            Some(_) => Some(PaletteBand::Grayscale),
        }
    }

    /// Position of a cube color along its red, green and blue axes, each in `0..=5`.
    /// `None` outside the cube band.
    ///
    /// ```rust
    /// use paints::{Color256, Vector};
    ///
    /// assert_eq!(Color256::new(39).cube_coordinates(), Some(Vector([0, 3, 5])));
    /// assert_eq!(Color256::new(214).cube_coordinates(), Some(Vector([5, 3, 0])));
    /// ```
    #[must_use]
    pub fn cube_coordinates(&self) -> Option<Vector<i64, 3>> {
        match (self.band(), self.code) {
            (Some(PaletteBand::Cube), Some(index)) => {
                let it = i64::from(index - Self::CUBE_ORIGIN);
                Some(Vector([it / 36, (it % 36) / 6, it % 6]))
            }
            _ => None,
        }
    }

    /// Inverse of [`Self::cube_coordinates`]. `None` if any axis is outside `0..=5`.
    #[must_use]
    pub fn from_cube_coordinates(coordinates: Vector<i64, 3>) -> Option<Self> {
        if !coordinates.iter().all(|it| (0..=5).contains(it)) {
            return None;
        }
        let [r, g, b] = coordinates.0;
        let index = i64::from(Self::CUBE_ORIGIN) + r * 36 + g * 6 + b;
        u8::try_from(index).ok().map(Self::new)
    }

    /// Position along the gray ramp, `0..=23`. `None` outside the grayscale band.
    #[must_use]
    pub fn grayscale_level(&self) -> Option<i64> {
        match (self.band(), self.code) {
            (Some(PaletteBand::Grayscale), Some(index)) => {
                Some(i64::from(index - Self::GRAYSCALE_ORIGIN))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn from_grayscale_level(level: i64) -> Option<Self> {
        if !(0..=23).contains(&level) {
            return None;
        }
        u8::try_from(i64::from(Self::GRAYSCALE_ORIGIN) + level)
            .ok()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, Some(PaletteBand::System))]
    #[test_case(15, Some(PaletteBand::System))]
    #[test_case(16, Some(PaletteBand::Cube))]
    #[test_case(231, Some(PaletteBand::Cube))]
    #[test_case(232, Some(PaletteBand::Grayscale))]
    #[test_case(255, Some(PaletteBand::Grayscale))]
    fn test_band(index: u8, band: Option<PaletteBand>) {
        assert_eq2!(Color256::new(index).band(), band);
    }

    #[test]
    fn test_none() {
        let it = Color256::none();
        assert!(it.is_none());
        assert_eq2!(it.band(), None);
        assert_eq2!(it.to_rgb(), None);
        assert_eq2!(it.to_string(), "Color256(None)");
        assert_eq2!(Color256::default(), it);
    }

    #[test]
    fn test_display() {
        assert_eq2!(Color256::new(208).to_string(), "Color256(208)");
    }

    #[test_case(-1)]
    #[test_case(256)]
    #[test_case(1000)]
    fn test_index_out_of_range(index: i64) {
        assert!(matches!(
            Color256::try_from_index(index),
            Err(PaintsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_cube_coordinates_round_trip() {
        for index in 16..=231_u8 {
            let it = Color256::new(index);
            let coordinates = it.cube_coordinates();
            assert!(coordinates.is_some());
            assert_eq2!(
                coordinates.and_then(Color256::from_cube_coordinates),
                Some(it)
            );
        }
        assert_eq2!(Color256::new(15).cube_coordinates(), None);
        assert_eq2!(Color256::from_cube_coordinates(Vector([6, 0, 0])), None);
        assert_eq2!(Color256::from_cube_coordinates(Vector([0, -1, 0])), None);
    }

    #[test]
    fn test_grayscale_level() {
        assert_eq2!(Color256::new(232).grayscale_level(), Some(0));
        assert_eq2!(Color256::new(255).grayscale_level(), Some(23));
        assert_eq2!(Color256::new(231).grayscale_level(), None);
        assert_eq2!(Color256::from_grayscale_level(13), Some(Color256::new(245)));
        assert_eq2!(Color256::from_grayscale_level(24), None);
    }
}
