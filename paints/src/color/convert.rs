// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV>

use super::{Color256, ColorRgb};
use crate::Vector;

/// Standard xterm layout of the 256-color palette:
/// - `0..=15`: system colors. The low eight use `0x80` per active bit, the high eight
///   use `0xFF`. Index 7 is light grey `0xC0`, index 8 is dark grey `0x80`.
/// - `16..=231`: 6×6×6 cube, each axis maps `0 -> 0` and `n -> 55 + 40n`.
/// - `232..=255`: gray ramp, `8 + 10 * (index - 232)`.
#[must_use]
pub const fn palette_index_to_rgb(index: u8) -> ColorRgb {
    match index {
        0..=15 => system_color_to_rgb(index),
        16..=231 => {
            let it = index - 16;
            ColorRgb::from_u8(
                cube_level(it / 36),
                cube_level((it % 36) / 6),
                cube_level(it % 6),
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            ColorRgb::from_u8(level, level, level)
        }
    }
}

const fn cube_level(axis: u8) -> u8 {
    if axis == 0 { 0 } else { 55 + 40 * axis }
}

const fn system_color_to_rgb(index: u8) -> ColorRgb {
    let base: u8 = if index > 7 { 0xFF } else { 0x80 };
    let grey: u8 = match index {
        7 => 0x40,
        8 => 0x80,
        _ => 0,
    };
    ColorRgb::from_u8(
        system_channel(index, 0x1, base, grey),
        system_channel(index, 0x2, base, grey),
        system_channel(index, 0x4, base, grey),
    )
}

const fn system_channel(index: u8, bit: u8, base: u8, grey: u8) -> u8 {
    (if index & bit == 0 { 0 } else { base }) + grey
}

/// Nearest entry in `16..=255` by squared Euclidean distance, lowest index on ties. The
/// system colors are skipped because terminals theme them freely.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: ColorRgb) -> Color256 {
    let distance = |index: u8| {
        let other = palette_index_to_rgb(index);
        let channel = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2);
        channel(rgb.red, other.red)
            + channel(rgb.green, other.green)
            + channel(rgb.blue, other.blue)
    };
    let index = (16..=255_u8).min_by_key(|&it| distance(it)).unwrap_or(16);
    Color256::new(index)
}

/// Nearest gray (the gray ramp, plus the cube's black 16 and white 231) by luma.
#[must_use]
pub fn convert_rgb_into_grayscale(rgb: ColorRgb) -> Color256 {
    let luma = 0.299 * f64::from(rgb.red)
        + 0.587 * f64::from(rgb.green)
        + 0.114 * f64::from(rgb.blue);
    let candidates = std::iter::once(16_u8)
        .chain(232..=255)
        .chain(std::iter::once(231));
    let index = candidates
        .min_by(|&a, &b| {
            let distance = |it: u8| (f64::from(palette_index_to_rgb(it).red) - luma).abs();
            distance(a).total_cmp(&distance(b))
        })
        .unwrap_or(16);
    Color256::new(index)
}

/// Channels are normalized to `0.0..=1.0`. Hue is in `0.0..1.0`.
#[must_use]
pub fn rgb_to_hsv(rgb: ColorRgb) -> Vector<f64, 3> {
    let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|it| f64::from(it) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;

    #[allow(clippy::float_cmp)]
    if min == max {
        return Vector([0.0, 0.0, max]);
    }

    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    #[allow(clippy::float_cmp)]
    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Vector([(hue / 6.0).rem_euclid(1.0), saturation, max])
}

/// Inverse of [`rgb_to_hsv`]. Hue values at or past `1.0` wrap around the circle, which
/// lets gradients interpolate across the `1.0 -> 0.0` seam.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(hsv: Vector<f64, 3>) -> Vector<f64, 3> {
    let [h, s, v] = hsv.0;

    #[allow(clippy::float_cmp)]
    if s == 0.0 {
        return Vector([v, v, v]);
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    #[allow(clippy::cast_possible_truncation)]
    let it = match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };
    Vector(it)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, (0x00, 0x00, 0x00))]
    #[test_case(1, (0x80, 0x00, 0x00))]
    #[test_case(2, (0x00, 0x80, 0x00))]
    #[test_case(3, (0x80, 0x80, 0x00))]
    #[test_case(4, (0x00, 0x00, 0x80))]
    #[test_case(5, (0x80, 0x00, 0x80))]
    #[test_case(6, (0x00, 0x80, 0x80))]
    #[test_case(7, (0xC0, 0xC0, 0xC0))]
    #[test_case(8, (0x80, 0x80, 0x80))]
    #[test_case(9, (0xFF, 0x00, 0x00))]
    #[test_case(10, (0x00, 0xFF, 0x00))]
    #[test_case(11, (0xFF, 0xFF, 0x00))]
    #[test_case(12, (0x00, 0x00, 0xFF))]
    #[test_case(13, (0xFF, 0x00, 0xFF))]
    #[test_case(14, (0x00, 0xFF, 0xFF))]
    #[test_case(15, (0xFF, 0xFF, 0xFF))]
    #[test_case(16, (0x00, 0x00, 0x00))]
    #[test_case(42, (0, 215, 135))]
    #[test_case(57, (95, 0, 255))]
    #[test_case(208, (0xFF, 0x87, 0x00))]
    #[test_case(231, (0xFF, 0xFF, 0xFF))]
    #[test_case(232, (0x08, 0x08, 0x08))]
    #[test_case(237, (0x3A, 0x3A, 0x3A))]
    #[test_case(255, (0xEE, 0xEE, 0xEE))]
    fn test_palette_index_to_rgb(index: u8, expected: (u8, u8, u8)) {
        assert_eq2!(palette_index_to_rgb(index), ColorRgb::from(expected));
    }

    #[test_case((0, 0, 0), 16)]
    #[test_case((255, 255, 255), 231)]
    #[test_case((255, 128, 0), 208)]
    #[test_case((95, 0, 255), 57)]
    #[test_case((0x3A, 0x3A, 0x3A), 237)]
    fn test_rgb_into_ansi256(rgb: (u8, u8, u8), index: u8) {
        assert_eq2!(convert_rgb_into_ansi256(rgb.into()), Color256::new(index));
    }

    #[test_case((0, 0, 0), 16)]
    #[test_case((255, 255, 255), 231)]
    #[test_case((128, 128, 128), 244)]
    #[test_case((0, 128, 255), 242)]
    fn test_rgb_into_grayscale(rgb: (u8, u8, u8), index: u8) {
        assert_eq2!(convert_rgb_into_grayscale(rgb.into()), Color256::new(index));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq2!(rgb_to_hsv((255, 0, 0).into()), Vector([0.0, 1.0, 1.0]));
        assert_eq2!(hsv_to_rgb(Vector([0.0, 1.0, 1.0])), Vector([1.0, 0.0, 0.0]));
        assert_eq2!(hsv_to_rgb(Vector([1.0, 1.0, 1.0])), Vector([1.0, 0.0, 0.0]));
        assert_eq2!(rgb_to_hsv((0, 0, 0).into()), Vector([0.0, 0.0, 0.0]));
        assert_eq2!(hsv_to_rgb(Vector([0.3, 0.0, 0.5])), Vector([0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_hsv_wraps_negative_hue() {
        // Red dominant with blue above green lands just below 1.0.
        let hsv = rgb_to_hsv((255, 0, 17).into());
        assert!(hsv[0] > 0.98 && hsv[0] < 1.0);
    }
}
