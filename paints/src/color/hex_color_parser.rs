// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parses a hex color string into a [`ColorRgb`]. The hex color string must be in the
//! format `#RRGGBB`, eg: `#FF0000` for red. Digits are case insensitive.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res},
          sequence::preceded};

use crate::{ColorRgb, PaintsError, PaintsResult};

/// Parse function that generates a [`ColorRgb`] from the start of `input`. Whatever
/// follows the six hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if `input` does not start with `#` followed by six hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, ColorRgb> {
    preceded(tag("#"), (parse_hex_seg, parse_hex_seg, parse_hex_seg))
        .map(|(red, green, blue)| ColorRgb { red, green, blue })
        .parse(input)
}

/// Like [`parse_hex_color`] but the whole of `input` must be the color.
///
/// # Errors
///
/// Returns [`PaintsError::InvalidArgument`] for anything other than exactly `#RRGGBB`.
pub fn try_parse_hex_color(input: &str) -> PaintsResult<ColorRgb> {
    match all_consuming(parse_hex_color).parse(input) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(PaintsError::invalid_argument(format!(
            "malformed hex color {input:?}, expected `#RRGGBB`"
        ))),
    }
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()),
        |seg: &str| u8::from_str_radix(seg, 16),
    )
    .parse(input)
}
