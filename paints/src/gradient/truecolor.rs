// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::once;

use super::GradientSteps;
use crate::{Color, ColorRgb, lerp};

/// Length of a truecolor gradient when none is requested.
pub const DEFAULT_TRUECOLOR_STEPS: usize = 6;

/// Interpolates hue, saturation and value from `a` to `b`.
///
/// - Hue takes the shorter way around the circle, so red to blue passes through magenta
///   rather than green.
/// - The endpoints are returned as given. Interior channels are truncated, not rounded,
///   after scaling back to `0..=255`.
/// - `count` below 2 is treated as 2.
///
/// ```rust
/// use paints::{Color, ColorRgb, truecolor_gradient};
///
/// let it = truecolor_gradient(
///     ColorRgb::from_u8(0xFF, 0x11, 0x00),
///     ColorRgb::from_u8(0xFF, 0x00, 0x11),
///     Some(3),
/// );
/// assert_eq!(it[1], Color::Rgb(ColorRgb::from_u8(0xFF, 0x00, 0x00)));
/// ```
#[must_use]
pub fn truecolor_gradient(a: ColorRgb, b: ColorRgb, count: Option<usize>) -> GradientSteps {
    let last = count.unwrap_or(DEFAULT_TRUECOLOR_STEPS).max(2) - 1;

    let mut hsv_a = a.to_hsv();
    let mut hsv_b = b.to_hsv();
    if (hsv_b[0] - hsv_a[0]).abs() > 0.5 {
        if hsv_b[0] < hsv_a[0] {
            hsv_b[0] += 1.0;
        } else {
            hsv_a[0] += 1.0;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let interior = (1..last).map(|step| {
        let t = step as f64 / last as f64;
        Color::Rgb(ColorRgb::from_hsv(lerp(hsv_a, hsv_b, t)))
    });

    once(Color::Rgb(a))
        .chain(interior)
        .chain(once(Color::Rgb(b)))
        .collect()
}
