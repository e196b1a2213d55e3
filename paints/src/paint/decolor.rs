// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Matches any SGR sequence, not only the ones this crate emits (eg: `\x1b[1;31m`).
static SGR_SEQUENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR regex"));

/// Strips every `ESC [ <digits and semicolons> m` sequence from `text`. Borrows when
/// there is nothing to strip.
///
/// ```rust
/// use paints::{ORANGE, decolor};
///
/// assert_eq!(decolor(&ORANGE.render("test")), "test");
/// assert_eq!(decolor("\x1b[1;31mred\x1b[m"), "red");
/// ```
#[must_use]
pub fn decolor(text: &str) -> Cow<'_, str> { SGR_SEQUENCE_REGEX.replace_all(text, "") }

/// Terminal columns `text` occupies once its SGR sequences are stripped.
#[must_use]
pub fn visible_width(text: &str) -> usize { decolor(text).width() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Paint, assert_eq2, color};

    #[test]
    fn test_decolor() {
        let painted = Paint::new(color(208).ok(), color("#C0FFEE").ok()).render("test");
        assert_eq2!(decolor(&painted), "test");
        assert_eq2!(decolor("\x1b[1;31mred\x1b[m"), "red");
        assert_eq2!(decolor("a\x1b[mb\x1b[0mc"), "abc");
    }

    #[test]
    fn test_decolor_borrows_plain_text() {
        assert!(matches!(decolor("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_leaves_other_escapes_alone() {
        assert_eq2!(decolor("\x1b[2Jclear"), "\x1b[2Jclear");
    }

    #[test]
    fn test_visible_width() {
        let painted = color(9).map(|it| it.fg("日本")).unwrap_or_default();
        assert_eq2!(visible_width(&painted), 4);
        assert_eq2!(visible_width("abc"), 3);
    }
}
