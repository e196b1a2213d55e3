// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Resets every attribute. The parameter list is empty, which terminals treat as `0`.
pub const SGR_RESET: &str = "\x1b[m";

/// Which slot of a paint a color is rendered into. Determines the `38` / `48` prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Foreground,
    Background,
}

impl ColorRole {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            ColorRole::Foreground => "38",
            ColorRole::Background => "48",
        }
    }
}

/// A single color parameter group of an SGR sequence. Its [Display] impl writes only the
/// parameters (eg: `38;5;208`); use [`sgr_sequence`] to join several of them into one
/// `ESC [ ... m` sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
}

impl SgrCode {
    #[must_use]
    pub const fn ansi256(role: ColorRole, index: u8) -> Self {
        match role {
            ColorRole::Foreground => SgrCode::ForegroundAnsi256(index),
            ColorRole::Background => SgrCode::BackgroundAnsi256(index),
        }
    }

    #[must_use]
    pub const fn rgb(role: ColorRole, red: u8, green: u8, blue: u8) -> Self {
        match role {
            ColorRole::Foreground => SgrCode::ForegroundRgb(red, green, blue),
            ColorRole::Background => SgrCode::BackgroundRgb(red, green, blue),
        }
    }
}

impl Display for SgrCode {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
            SgrCode::ForegroundRgb(r, g, b)   => write!(f, "38;2;{r};{g};{b}"),
            SgrCode::BackgroundRgb(r, g, b)   => write!(f, "48;2;{r};{g};{b}"),
        }
    }
}

/// Joins `codes` into one `ESC [ <p1>;<p2> m` sequence. Returns an empty string when
/// there is nothing to set.
#[must_use]
pub fn sgr_sequence(codes: &[SgrCode]) -> String {
    use std::fmt::Write as _;

    if codes.is_empty() {
        return String::new();
    }

    let mut acc = String::from(CSI);
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            acc.push(';');
        }
        _ = write!(acc, "{code}");
    }
    acc.push_str(SGR);
    acc
}
