// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::{SmallVec, smallvec};

use super::{SampleCount, cube_gradient, grayscale_gradient, truecolor_gradient};
use crate::{Color, Color256, PaletteBand, PaintsResult};

/// Most gradients are short enough to stay on the stack.
pub type GradientSteps = SmallVec<[Color; 16]>;

/// Ordered colors from `a` to `b`. With `count` given, exactly that many, starting at
/// `a` and ending at `b`. Without it, each strategy picks its natural length.
///
/// | Endpoints                         | Result                                      |
/// | :-------------------------------- | :------------------------------------------ |
/// | `count == 2`                      | `[a, b]`                                    |
/// | both in the palette's gray ramp   | [`grayscale_gradient()`]                    |
/// | both in the palette's 6×6×6 cube  | [`cube_gradient()`]                         |
/// | both RGB                          | [`truecolor_gradient()`]                    |
/// | anything else                     | `[a, b]`, regardless of `count`             |
///
/// The last row is not an error: there is no meaningful path between eg: a system color
/// and a cube color, so the endpoints alone are returned.
///
/// ```rust
/// use paints::{color, gradient};
///
/// # fn main() -> paints::PaintsResult<()> {
/// let it = gradient(color(39)?, color(214)?, Some(4))?;
/// assert_eq!(it.as_slice(), &[color(39)?, color(109)?, color(179)?, color(214)?]);
/// assert!(gradient(color(39)?, color(214)?, Some(1)).is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`crate::PaintsError::InvalidRange`] if `count` is below 2.
pub fn gradient(a: Color, b: Color, count: Option<usize>) -> PaintsResult<GradientSteps> {
    let count = count.map(SampleCount::try_from).transpose()?;
    Ok(gradient_with(a, b, count))
}

/// Like [`gradient()`] with an already validated count.
#[must_use]
pub fn gradient_with(a: Color, b: Color, count: Option<SampleCount>) -> GradientSteps {
    let count = count.map(SampleCount::get);

    if count == Some(2) {
        return smallvec![a, b];
    }

    match (a, b) {
        (Color::Palette(pa), Color::Palette(pb)) => palette_gradient(pa, pb, count),
        (Color::Rgb(ra), Color::Rgb(rb)) => truecolor_gradient(ra, rb, count),
        _ => {
            tracing::trace!(%a, %b, "no interpolation between palette and RGB colors");
            smallvec![a, b]
        }
    }
}

fn palette_gradient(a: Color256, b: Color256, count: Option<usize>) -> GradientSteps {
    match (a.band(), b.band()) {
        (Some(PaletteBand::Grayscale), Some(PaletteBand::Grayscale)) => {
            grayscale_gradient(a, b, count)
        }
        (Some(PaletteBand::Cube), Some(PaletteBand::Cube)) => cube_gradient(a, b, count),
        (band_a, band_b) => {
            tracing::trace!(
                ?band_a,
                ?band_b,
                "no interpolation between these palette bands"
            );
            smallvec![Color::Palette(a), Color::Palette(b)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PaintsError, assert_eq2, color};

    fn c(index: i64) -> Color { color(index).unwrap() }

    #[test]
    fn test_invalid_count() {
        assert!(matches!(
            gradient(Color::none(), Color::none(), Some(1)),
            Err(PaintsError::InvalidRange { .. })
        ));
        assert!(matches!(
            gradient(c(39), c(214), Some(0)),
            Err(PaintsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_two_is_trivial() {
        let (a, b) = (c(39), c(214));
        assert_eq2!(gradient(a, b, Some(2)).unwrap().to_vec(), vec![a, b]);

        let rgb = color("#C0FFEE").unwrap();
        assert_eq2!(gradient(a, rgb, Some(2)).unwrap().to_vec(), vec![a, rgb]);
    }

    #[test]
    fn test_fallbacks_ignore_count() {
        let a = c(39);
        for b in [color("#C0FFEE").unwrap(), c(255), c(7), Color::none()] {
            assert_eq2!(gradient(a, b, None).unwrap().to_vec(), vec![a, b]);
            assert_eq2!(gradient(a, b, Some(7)).unwrap().to_vec(), vec![a, b]);
        }
    }

    #[test]
    fn test_dispatch() {
        let it = gradient(c(235), c(245), None).unwrap();
        assert_eq2!(it.len(), 11);

        let it = gradient(c(39), c(214), None).unwrap();
        assert_eq2!(it.len(), 6);

        let a = color("#F20594").unwrap();
        let b = color("#92DBBD").unwrap();
        let it = gradient(a, b, None).unwrap();
        assert_eq2!(it.len(), 6);
        assert_eq2!((it.first(), it.last()), (Some(&a), Some(&b)));
    }

    #[test]
    fn test_length_and_endpoints_for_every_count() {
        let pairs = [
            (c(235), c(245)),
            (c(245), c(232)),
            (c(39), c(214)),
            (c(16), c(231)),
            (color("#FF1100").unwrap(), color("#0011FF").unwrap()),
        ];
        for (a, b) in pairs {
            for count in 2..40 {
                let it = gradient(a, b, Some(count)).unwrap();
                assert_eq2!(it.len(), count);
                assert_eq2!((it.first(), it.last()), (Some(&a), Some(&b)));
            }
        }
    }
}
