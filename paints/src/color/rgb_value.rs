// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::fmt::{Display, Formatter};

use super::{Color256, convert_rgb_into_ansi256, convert_rgb_into_grayscale, hsv_to_rgb,
            rgb_to_hsv, try_parse_hex_color};
use crate::{PaintsError, PaintsResult, Vector};

/// Represents a color in RGB (24-bit truecolor) format. Channels are `u8`, so the
/// `0..=255` range holds by construction; the fallible constructors are for inputs
/// that arrive as wider integers or strings.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct ColorRgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for ColorRgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Unpacks `0xRRGGBB`. Bits above the low 24 are ignored.
impl From<u32> for ColorRgb {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

/// Packs into `0xRRGGBB`.
impl From<ColorRgb> for u32 {
    fn from(rgb: ColorRgb) -> Self {
        u32::from_be_bytes([0, rgb.red, rgb.green, rgb.blue])
    }
}

impl Display for ColorRgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl ColorRgb {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`PaintsError::InvalidArgument`] if any channel is outside `0..=255`.
    pub fn try_from_channels(channels: [i64; 3]) -> PaintsResult<Self> {
        match channels.map(|it| u8::try_from(it).ok()) {
            [Some(red), Some(green), Some(blue)] => Ok(Self { red, green, blue }),
            _ => Err(PaintsError::invalid_argument(format!(
                "RGB channels {channels:?} must each be in 0..=255"
            ))),
        }
    }

    /// # Errors
    ///
    /// Returns [`PaintsError::InvalidArgument`] if `input` isn't exactly `#RRGGBB`.
    pub fn try_from_hex(input: &str) -> PaintsResult<Self> { try_parse_hex_color(input) }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_vector(&self) -> Vector<i64, 3> {
        Vector([self.red, self.green, self.blue].map(i64::from))
    }

    /// Channel arithmetic (scaling, summing, averaging) happens on a [`Vector`] that may
    /// leave `0..=255`; this clamps it back in.
    ///
    /// ```rust
    /// use paints::ColorRgb;
    ///
    /// let red = ColorRgb::from_u8(255, 0, 0).to_vector() * 2_i64;
    /// let green = ColorRgb::from_u8(0, 255, 0).to_vector() * 2_i64;
    /// let yellow = ColorRgb::from_vector_saturating((red + green) / 2_i64);
    /// assert_eq!(yellow, ColorRgb::from_u8(255, 255, 0));
    /// ```
    #[must_use]
    pub fn from_vector_saturating(vector: Vector<i64, 3>) -> Self {
        let [red, green, blue] = vector.0.map(saturate);
        Self { red, green, blue }
    }

    /// Multiplies every channel by `factor`, truncating toward zero and saturating at
    /// `255`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let [red, green, blue] =
            [self.red, self.green, self.blue].map(|it| (f64::from(it) * factor) as u8);
        Self { red, green, blue }
    }

    /// Channels in `0.0..=1.0` are scaled by 255 and truncated toward zero. Anything
    /// outside saturates.
    #[must_use]
    pub fn from_unit_truncating(unit: Vector<f64, 3>) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let [red, green, blue] = unit.0.map(|it| (it * 255.0) as u8);
        Self { red, green, blue }
    }

    /// See [`rgb_to_hsv`].
    #[must_use]
    pub fn to_hsv(&self) -> Vector<f64, 3> { rgb_to_hsv(*self) }

    /// See [`hsv_to_rgb`]. Channels are truncated, not rounded.
    #[must_use]
    pub fn from_hsv(hsv: Vector<f64, 3>) -> Self { Self::from_unit_truncating(hsv_to_rgb(hsv)) }

    /// Nearest entry of the 256-color palette.
    #[must_use]
    pub fn to_ansi256(&self) -> Color256 { convert_rgb_into_ansi256(*self) }

    /// Nearest gray of the 256-color palette.
    #[must_use]
    pub fn to_grayscale(&self) -> Color256 { convert_rgb_into_grayscale(*self) }
}

fn saturate(value: i64) -> u8 { u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX) }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new() {
        let value = ColorRgb::from_u8(160, 90, 0);
        assert_eq2!((value.red, value.green, value.blue), (160, 90, 0));
        assert_eq2!(u32::from(value), 0x00A0_5A00);
    }

    #[test]
    fn test_packed_round_trip() {
        let value = ColorRgb::from(0x00C0_FFEE_u32);
        assert_eq2!(value, ColorRgb::from_u8(0xC0, 0xFF, 0xEE));
        assert_eq2!(value.to_hex_string(), "#C0FFEE");
        assert_eq2!(value.to_string(), "#C0FFEE");
    }

    #[test_case([300, 300, 300])]
    #[test_case([-1, 0, 0])]
    #[test_case([0, 256, 0])]
    fn test_channels_out_of_range(channels: [i64; 3]) {
        assert!(matches!(
            ColorRgb::try_from_channels(channels),
            Err(PaintsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_channels_in_range() {
        assert_eq2!(
            ColorRgb::try_from_channels([0, 128, 255]),
            Ok(ColorRgb::from_u8(0, 128, 255))
        );
    }

    #[test]
    fn test_scale() {
        let some_color = ColorRgb::from_u8(160, 90, 0);
        assert_eq2!(some_color.scale(0.8), ColorRgb::from_u8(128, 72, 0));
        assert_eq2!(some_color.scale(2.0), ColorRgb::from_u8(255, 180, 0));
    }

    #[test]
    fn test_vector_arithmetic_saturates() {
        let some_color = ColorRgb::from_u8(160, 90, 0);
        assert_eq2!(
            ColorRgb::from_vector_saturating(some_color.to_vector() / 2_i64),
            ColorRgb::from_u8(80, 45, 0)
        );
        assert_eq2!(
            ColorRgb::from_vector_saturating(some_color.to_vector() * 2_i64),
            ColorRgb::from_u8(255, 180, 0)
        );
        assert_eq2!(
            ColorRgb::from_vector_saturating(some_color.to_vector() - 100_i64),
            ColorRgb::from_u8(60, 0, 0)
        );
    }

    #[test]
    fn test_hsv_round_trip_of_primaries() {
        for rgb in [(255, 0, 0), (0, 255, 0), (0, 0, 255), (255, 255, 255)] {
            let rgb = ColorRgb::from(rgb);
            assert_eq2!(ColorRgb::from_hsv(rgb.to_hsv()), rgb);
        }
    }

    #[test]
    fn test_rgb_to_palette() {
        assert_eq2!(ColorRgb::from_u8(95, 0, 255).to_ansi256(), Color256::new(57));
        assert_eq2!(
            ColorRgb::from_u8(128, 128, 128).to_grayscale(),
            Color256::new(244)
        );
    }
}
