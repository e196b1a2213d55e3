// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use super::{Color256, ColorRgb};
use crate::{ColorRole, ColorSupport, Paint, PaintsError, PaintsResult, SgrCode,
            sgr_sequence};

/// This is the "top-level" color type used in this crate. A [`Paint`] holds one of these
/// per slot, and [`crate::gradient()`] takes and returns them.
/// - The variant set is closed. Every consumer matches on it exhaustively.
/// - Equality is structural: a palette color never equals an RGB color, even when they
///   render the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Palette(Color256),
    Rgb(ColorRgb),
}

/// The input shapes accepted by [`color()`], in the order they are tried.
///
/// | Variant    | Produces                                                  |
/// | :--------- | :-------------------------------------------------------- |
/// | `Color`    | the same color, unchanged                                 |
/// | `Index`    | a palette color; `None` is the "no color" sentinel        |
/// | `Channels` | an RGB color                                              |
/// | `Hex`      | an RGB color parsed from `#RRGGBB`                        |
/// | `Values`   | unpacked first: one value is `Index`, three are `Channels` |
///
/// There is deliberately no `From<bool>`: a boolean is never a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg<'a> {
    Color(Color),
    Index(Option<i64>),
    Channels([i64; 3]),
    Hex(&'a str),
    Values(&'a [i64]),
}

/// Smart constructor that dispatches on the shape of `arg`. See [`ColorArg`].
///
/// ```rust
/// use paints::{Color, Color256, ColorRgb, color};
///
/// assert_eq!(color(208), Ok(Color::Palette(Color256::new(208))));
/// assert_eq!(color(None), Ok(Color::Palette(Color256::none())));
/// assert_eq!(color((160, 90, 0)), Ok(Color::Rgb(ColorRgb::from_u8(160, 90, 0))));
/// assert_eq!(color("#A05A00"), color([160, 90, 0]));
/// assert!(color(256).is_err());
/// assert!(color(&[1_i64, 2][..]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`PaintsError::InvalidArgument`] for out-of-range values, wrong arity, or a
/// malformed hex string.
pub fn color<'a>(arg: impl Into<ColorArg<'a>>) -> PaintsResult<Color> {
    match arg.into() {
        ColorArg::Color(it) => Ok(it),
        ColorArg::Index(None) => Ok(Color::Palette(Color256::none())),
        ColorArg::Index(Some(index)) => Color256::try_from_index(index).map(Color::Palette),
        ColorArg::Channels(channels) => {
            ColorRgb::try_from_channels(channels).map(Color::Rgb)
        }
        ColorArg::Hex(input) => ColorRgb::try_from_hex(input).map(Color::Rgb),
        ColorArg::Values(&[index]) => color(ColorArg::Index(Some(index))),
        ColorArg::Values(&[r, g, b]) => color(ColorArg::Channels([r, g, b])),
        ColorArg::Values(values) => Err(PaintsError::invalid_argument(format!(
            "expected 1 or 3 values, got {}",
            values.len()
        ))),
    }
}

mod color_arg_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<Color> for ColorArg<'_> {
        fn from(it: Color) -> Self { ColorArg::Color(it) }
    }

    impl From<Color256> for ColorArg<'_> {
        fn from(it: Color256) -> Self { ColorArg::Color(Color::Palette(it)) }
    }

    impl From<ColorRgb> for ColorArg<'_> {
        fn from(it: ColorRgb) -> Self { ColorArg::Color(Color::Rgb(it)) }
    }

    impl From<u8> for ColorArg<'_> {
        fn from(it: u8) -> Self { ColorArg::Index(Some(i64::from(it))) }
    }

    impl From<i32> for ColorArg<'_> {
        fn from(it: i32) -> Self { ColorArg::Index(Some(i64::from(it))) }
    }

    impl From<i64> for ColorArg<'_> {
        fn from(it: i64) -> Self { ColorArg::Index(Some(it)) }
    }

    impl From<[i32; 1]> for ColorArg<'_> {
        fn from([it]: [i32; 1]) -> Self { ColorArg::Index(Some(i64::from(it))) }
    }

    impl From<(i32,)> for ColorArg<'_> {
        fn from((it,): (i32,)) -> Self { ColorArg::Index(Some(i64::from(it))) }
    }

    impl From<Option<i64>> for ColorArg<'_> {
        fn from(it: Option<i64>) -> Self { ColorArg::Index(it) }
    }

    impl From<(u8, u8, u8)> for ColorArg<'_> {
        fn from((r, g, b): (u8, u8, u8)) -> Self {
            ColorArg::Color(Color::Rgb(ColorRgb::from_u8(r, g, b)))
        }
    }

    impl From<(i32, i32, i32)> for ColorArg<'_> {
        fn from((r, g, b): (i32, i32, i32)) -> Self {
            ColorArg::Channels([r, g, b].map(i64::from))
        }
    }

    impl From<[i32; 3]> for ColorArg<'_> {
        fn from(it: [i32; 3]) -> Self { ColorArg::Channels(it.map(i64::from)) }
    }

    impl From<[i64; 3]> for ColorArg<'_> {
        fn from(it: [i64; 3]) -> Self { ColorArg::Channels(it) }
    }

    impl<'a> From<&'a str> for ColorArg<'a> {
        fn from(it: &'a str) -> Self { ColorArg::Hex(it) }
    }

    impl<'a> From<&'a [i64]> for ColorArg<'a> {
        fn from(it: &'a [i64]) -> Self { ColorArg::Values(it) }
    }
}

mod color_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Default for Color {
        fn default() -> Self { Color::Palette(Color256::none()) }
    }

    impl From<Color256> for Color {
        fn from(it: Color256) -> Self { Color::Palette(it) }
    }

    impl From<ColorRgb> for Color {
        fn from(it: ColorRgb) -> Self { Color::Rgb(it) }
    }

    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            match self {
                Color::Palette(it) => Display::fmt(it, f),
                Color::Rgb(it) => Display::fmt(it, f),
            }
        }
    }

    /// Parses the text forms a user would type: a decimal palette index, `none`,
    /// `#RRGGBB`, or `r,g,b`.
    impl FromStr for Color {
        type Err = PaintsError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let input = input.trim();
            if input.eq_ignore_ascii_case("none") {
                return Ok(Color::none());
            }
            if input.starts_with('#') {
                return color(input);
            }
            let values = input
                .split(',')
                .map(|it| it.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| {
                    PaintsError::invalid_argument(format!(
                        "{input:?} is not an index, `#RRGGBB`, or `r,g,b`"
                    ))
                })?;
            color(values.as_slice())
        }
    }

    impl Color {
        /// # Errors
        ///
        /// See [`color()`].
        pub fn try_new<'a>(arg: impl Into<ColorArg<'a>>) -> PaintsResult<Self> {
            color(arg)
        }

        #[must_use]
        pub const fn none() -> Self { Color::Palette(Color256::none()) }

        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Color::Palette(Color256 { code: None }))
        }

        /// `None` only for the "no color" sentinel.
        #[must_use]
        pub fn to_rgb(&self) -> Option<ColorRgb> {
            match self {
                Color::Palette(it) => it.to_rgb(),
                Color::Rgb(it) => Some(*it),
            }
        }

        /// Raw palette code, or packed `0xRRGGBB`.
        #[must_use]
        pub fn to_int(&self) -> Option<u32> {
            match self {
                Color::Palette(it) => it.code.map(u32::from),
                Color::Rgb(it) => Some(u32::from(*it)),
            }
        }

        #[must_use]
        pub fn sgr_code(&self, role: ColorRole) -> Option<SgrCode> {
            match self {
                Color::Palette(Color256 { code: None }) => None,
                Color::Palette(Color256 { code: Some(index) }) => {
                    Some(SgrCode::ansi256(role, *index))
                }
                Color::Rgb(ColorRgb { red, green, blue }) => {
                    Some(SgrCode::rgb(role, *red, *green, *blue))
                }
            }
        }

        /// The parameters this color contributes to an SGR sequence, eg: `38;5;208`. Empty
        /// for no color.
        #[must_use]
        pub fn fragment(&self, role: ColorRole) -> String {
            self.sgr_code(role)
                .map(|it| it.to_string())
                .unwrap_or_default()
        }

        /// Full SGR sequence for this color in `role`, eg: `\x1b[38;5;208m`.
        #[must_use]
        pub fn sequence(&self, role: ColorRole) -> String {
            sgr_sequence(self.sgr_code(role).as_slice())
        }

        /// Maps this color onto what a terminal with `support` can show.
        #[must_use]
        pub fn degrade(self, support: ColorSupport) -> Self {
            match (support, self) {
                (ColorSupport::NoColor, _) => Color::none(),
                (ColorSupport::Truecolor, it)
                | (ColorSupport::Ansi256, it @ Color::Palette(_)) => it,
                (ColorSupport::Ansi256, Color::Rgb(rgb)) => Color::Palette(rgb.to_ansi256()),
                (ColorSupport::Grayscale, Color::Rgb(rgb)) => {
                    Color::Palette(rgb.to_grayscale())
                }
                (ColorSupport::Grayscale, Color::Palette(it)) => match it.to_rgb() {
                    Some(rgb) if it.grayscale_level().is_none() => {
                        Color::Palette(rgb.to_grayscale())
                    }
                    _ => Color::Palette(it),
                },
            }
        }

        #[must_use]
        pub const fn fg_paint(self) -> Paint { Paint::fg_only(self) }

        #[must_use]
        pub const fn bg_paint(self) -> Paint { Paint::bg_only(self) }

        /// This color in the foreground over `bg`.
        #[must_use]
        pub const fn on(self, bg: Color) -> Paint { Paint::new(Some(self), Some(bg)) }

        /// Renders `text` with this color as foreground.
        #[must_use]
        pub fn fg(self, text: &str) -> String { self.fg_paint().render(text) }

        /// Renders `text` with this color as background.
        #[must_use]
        pub fn bg(self, text: &str) -> String { self.bg_paint().render(text) }
    }
}
