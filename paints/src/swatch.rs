// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rows of colored cells for eyeballing colors in a terminal. Used by the `paints`
//! binary.

use crate::{BLACK, Color, Color256, ColorRgb, ColorSupport, GradientSteps, Paint, WHITE,
            palette_index_to_rgb};

/// Width of the filler cell that ends each palette row.
pub const SWATCH_FILLER_WIDTH: usize = 24;

/// Black text on light backgrounds, white text otherwise. A background counts as light
/// when its red or its green channel is above `0xC0`; blue alone never is.
#[must_use]
pub fn legible_fg(rgb: ColorRgb) -> Paint {
    if rgb.red > 0xC0 || rgb.green > 0xC0 { BLACK } else { WHITE }
}

/// One row of the palette dump: the index on the palette entry itself, then its RGB hex
/// on the equivalent truecolor background, then a filler in that truecolor.
#[must_use]
pub fn palette_row(index: u8, support: ColorSupport) -> String {
    let palette = Color::Palette(Color256::new(index));
    let rgb = palette_index_to_rgb(index);
    let fg = legible_fg(rgb);
    let on_palette = fg | palette.bg_paint();
    let on_rgb = fg | Color::Rgb(rgb).bg_paint();

    format!(
        "{}{}{}",
        on_palette.render_for(support, &format!(" {index:<5}  ")),
        on_rgb.render_for(support, &format!("  {rgb}  ")),
        on_rgb.render_for(support, &" ".repeat(SWATCH_FILLER_WIDTH)),
    )
}

/// Every step of a gradient as a two column cell, all on one line.
#[must_use]
pub fn gradient_swatch(steps: &GradientSteps, support: ColorSupport) -> String {
    steps
        .iter()
        .map(|it| it.bg_paint().render_for(support, "  "))
        .collect()
}

/// One line per gradient step: its position, a cell, and its value.
#[must_use]
pub fn gradient_legend(steps: &GradientSteps, support: ColorSupport) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(position, it)| {
            let cell = it.bg_paint().render_for(support, "    ");
            let rgb = it.to_rgb().map(|rgb| rgb.to_string()).unwrap_or_default();
            format!("{position:>3} {cell} {it} {rgb}")
        })
        .collect()
}
