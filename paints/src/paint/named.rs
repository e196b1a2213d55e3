// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Color, Color256, Paint};

/// Colors with a well known name, looked up case insensitively. Some have an alias
/// (`magenta`, `cyan`, `orange`) that parses to the same variant.
///
/// ```rust
/// use paints::NamedColor;
///
/// let it: NamedColor = "Magenta".parse().unwrap();
/// assert_eq!(it, NamedColor::Fuchsia);
/// assert_eq!(it.index(), 13);
/// assert_eq!(it.to_string(), "fuchsia");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedColor {
    Black,
    Maroon,
    Green,
    Olive,
    Navy,
    Purple,
    Teal,
    Silver,
    Grey,
    Red,
    Lime,
    Yellow,
    Blue,
    #[strum(to_string = "fuchsia", serialize = "magenta")]
    Fuchsia,
    #[strum(to_string = "aqua", serialize = "cyan")]
    Aqua,
    White,
    #[strum(to_string = "darkorange", serialize = "orange")]
    DarkOrange,
    Murasaki,
}

impl NamedColor {
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            NamedColor::Black      => 0,
            NamedColor::Maroon     => 1,
            NamedColor::Green      => 2,
            NamedColor::Olive      => 3,
            NamedColor::Navy       => 4,
            NamedColor::Purple     => 5,
            NamedColor::Teal       => 6,
            NamedColor::Silver     => 7,
            NamedColor::Grey       => 8,
            NamedColor::Red        => 9,
            NamedColor::Lime       => 10,
            NamedColor::Yellow     => 11,
            NamedColor::Blue       => 12,
            NamedColor::Fuchsia    => 13,
            NamedColor::Aqua       => 14,
            NamedColor::White      => 15,
            NamedColor::DarkOrange => 208,
            NamedColor::Murasaki   => 135,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color { Color::Palette(Color256::new(self.index())) }

    /// Foreground-only paint.
    #[must_use]
    pub const fn paint(self) -> Paint { Paint::fg_only(self.color()) }
}

pub const NOCOLOR: Paint = Paint::none();
pub const BLACK: Paint = NamedColor::Black.paint();
pub const MAROON: Paint = NamedColor::Maroon.paint();
pub const GREEN: Paint = NamedColor::Green.paint();
pub const OLIVE: Paint = NamedColor::Olive.paint();
pub const NAVY: Paint = NamedColor::Navy.paint();
pub const PURPLE: Paint = NamedColor::Purple.paint();
pub const TEAL: Paint = NamedColor::Teal.paint();
pub const SILVER: Paint = NamedColor::Silver.paint();
pub const GREY: Paint = NamedColor::Grey.paint();
pub const RED: Paint = NamedColor::Red.paint();
pub const LIME: Paint = NamedColor::Lime.paint();
pub const YELLOW: Paint = NamedColor::Yellow.paint();
pub const BLUE: Paint = NamedColor::Blue.paint();
pub const FUCHSIA: Paint = NamedColor::Fuchsia.paint();
pub const MAGENTA: Paint = FUCHSIA;
pub const AQUA: Paint = NamedColor::Aqua.paint();
pub const CYAN: Paint = AQUA;
pub const WHITE: Paint = NamedColor::White.paint();
pub const DARKORANGE: Paint = NamedColor::DarkOrange.paint();
pub const ORANGE: Paint = DARKORANGE;
pub const MURASAKI: Paint = NamedColor::Murasaki.paint();
