// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, BitOr, Div, Not}};

use smallvec::SmallVec;

use crate::{Color, ColorRole, ColorSupport, SGR_RESET, SgrCode, sgr_sequence};

/// A foreground and background color pair that renders to one SGR sequence. An empty
/// slot (either `None` or [`Color::none()`]) leaves that slot at the terminal default.
///
/// ```rust
/// use paints::{Color, Paint, color};
///
/// # fn main() -> paints::PaintsResult<()> {
/// let paint = Paint::new(Some(color(9)?), Some(color(12)?));
/// assert_eq!(paint.render("text"), "\x1b[38;5;9;48;5;12mtext\x1b[m");
/// assert_eq!((!paint).render("text"), "\x1b[38;5;12;48;5;9mtext\x1b[m");
/// assert_eq!(Paint::none().render("text"), "text");
/// # Ok(())
/// # }
/// ```
///
/// Two paints are equal when they render the same sequence, so a `None` slot and a
/// [`Color::none()`] slot compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paint {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Paint {
    #[must_use]
    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self { Self { fg, bg } }

    #[must_use]
    pub const fn none() -> Self { Self { fg: None, bg: None } }

    #[must_use]
    pub const fn fg_only(fg: Color) -> Self { Self { fg: Some(fg), bg: None } }

    #[must_use]
    pub const fn bg_only(bg: Color) -> Self { Self { fg: None, bg: Some(bg) } }

    fn slot(slot: Option<Color>) -> Option<Color> { slot.filter(|it| !it.is_none()) }

    fn sgr_codes(self) -> SmallVec<[SgrCode; 2]> {
        [
            Self::slot(self.fg).and_then(|it| it.sgr_code(ColorRole::Foreground)),
            Self::slot(self.bg).and_then(|it| it.sgr_code(ColorRole::Background)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// `ESC [ <fg>;<bg> m`, or an empty string if both slots are empty.
    #[must_use]
    pub fn sequence(&self) -> String { sgr_sequence(&self.sgr_codes()) }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Self::slot(self.fg).is_none() && Self::slot(self.bg).is_none()
    }

    /// Wraps `text` in this paint's sequence and the reset sequence. An empty paint
    /// returns `text` unchanged.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let sequence = self.sequence();
        if sequence.is_empty() {
            return text.to_string();
        }
        format!("{sequence}{text}{SGR_RESET}")
    }

    /// Like [`Self::render`] but first degrades every slot to what `support` can show.
    #[must_use]
    pub fn render_for(&self, support: ColorSupport, text: &str) -> String {
        self.degrade(support).render(text)
    }

    #[must_use]
    pub fn degrade(&self, support: ColorSupport) -> Self {
        Self {
            fg: self.fg.map(|it| it.degrade(support)),
            bg: self.bg.map(|it| it.degrade(support)),
        }
    }

    /// Per slot, `other` wins if its slot is non-empty, else `self` is kept.
    #[must_use]
    pub fn override_with(&self, other: &Paint) -> Self {
        Self {
            fg: Self::slot(other.fg).or(self.fg),
            bg: Self::slot(other.bg).or(self.bg),
        }
    }

    /// Keeps this paint's foreground and borrows `other`'s foreground as the background.
    #[must_use]
    pub fn swap_roles(&self, other: &Paint) -> Self {
        Self {
            fg: self.fg,
            bg: other.fg,
        }
    }

    /// Foreground and background exchanged.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }
}

mod paint_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl PartialEq for Paint {
        fn eq(&self, other: &Self) -> bool { self.sequence() == other.sequence() }
    }

    impl Eq for Paint {}

    impl From<Color> for Paint {
        fn from(fg: Color) -> Self { Paint::fg_only(fg) }
    }

    /// Writes the sequence, or the bare reset when the paint is empty, so that
    /// `format!("{paint}text{}", Paint::none())` always terminates what it started.
    impl Display for Paint {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            let sequence = self.sequence();
            if sequence.is_empty() {
                f.write_str(SGR_RESET)
            } else {
                f.write_str(&sequence)
            }
        }
    }

    impl BitOr for Paint {
        type Output = Paint;
        fn bitor(self, rhs: Paint) -> Paint { self.override_with(&rhs) }
    }

    impl Add for Paint {
        type Output = Paint;
        fn add(self, rhs: Paint) -> Paint { self.override_with(&rhs) }
    }

    impl Div for Paint {
        type Output = Paint;
        fn div(self, rhs: Paint) -> Paint { self.swap_roles(&rhs) }
    }

    impl Not for Paint {
        type Output = Paint;
        fn not(self) -> Paint { self.invert() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorRgb, assert_eq2, color};

    fn p(index: i64) -> Paint { Paint::fg_only(color(index).unwrap()) }

    #[test]
    fn test_sequence() {
        assert_eq2!(Paint::none().sequence(), "");
        assert_eq2!(p(208).sequence(), "\x1b[38;5;208m");
        assert_eq2!(
            Paint::bg_only(color(208).unwrap()).sequence(),
            "\x1b[48;5;208m"
        );
        assert_eq2!(
            Paint::new(Some(Color::none()), Some(Color::Rgb(ColorRgb::from_u8(1, 2, 3))))
                .sequence(),
            "\x1b[48;2;1;2;3m"
        );
    }

    #[test]
    fn test_display() {
        assert_eq2!(Paint::none().to_string(), "\x1b[m");
        assert_eq2!(format!("{}", p(135)), "\x1b[38;5;135m");
    }

    #[test]
    fn test_render() {
        assert_eq2!(p(9).render("text"), "\x1b[38;5;9mtext\x1b[m");
        assert_eq2!(Paint::none().render("text"), "text");
        assert_eq2!(Paint::fg_only(Color::none()).render(""), "");
    }

    #[test]
    fn test_override() {
        let black = p(0);
        let yellow = p(11);
        assert_eq2!(
            black | !yellow,
            Paint::new(Some(color(0).unwrap()), Some(color(11).unwrap()))
        );
        assert_eq2!(black + yellow, yellow);
        assert_eq2!(black | Paint::none(), black);
        assert_eq2!(black | Paint::fg_only(Color::none()), black);
    }

    #[test]
    fn test_swap_roles() {
        let (red, yellow, blue, green) = (p(9), p(11), p(12), p(2));
        let ry = red / yellow;
        let bg = blue / green;
        let rybg = ry / bg;
        assert_eq2!(rybg, Paint::new(red.fg, blue.fg));
        assert_eq2!(rybg.render("text"), "\x1b[38;5;9;48;5;12mtext\x1b[m");
    }

    #[test]
    fn test_invert() {
        let rybg = Paint::new(p(9).fg, p(12).fg);
        assert_eq2!(!rybg, Paint::new(p(12).fg, p(9).fg));
        assert_eq2!((!rybg).render("text"), "\x1b[38;5;12;48;5;9mtext\x1b[m");
        assert_eq2!(!!rybg, rybg);
        assert_eq2!(!p(9), Paint::bg_only(color(9).unwrap()));
    }

    #[test]
    fn test_equality_ignores_empty_slot_kind() {
        assert_eq2!(Paint::fg_only(Color::none()), Paint::none());
        assert_ne!(p(1), p(2));
    }

    #[test]
    fn test_render_for() {
        let paint = Paint::fg_only(Color::Rgb(ColorRgb::from_u8(255, 128, 0)));
        assert_eq2!(
            paint.render_for(ColorSupport::Truecolor, "x"),
            "\x1b[38;2;255;128;0mx\x1b[m"
        );
        assert_eq2!(
            paint.render_for(ColorSupport::Ansi256, "x"),
            "\x1b[38;5;208mx\x1b[m"
        );
        assert_eq2!(paint.render_for(ColorSupport::NoColor, "x"), "x");
    }
}
