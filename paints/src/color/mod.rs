// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal color values.
//!
//! - **Primitive types**: [`Color256`] (256-color palette index, or no color) and
//!   [`ColorRgb`] (24-bit truecolor)
//! - **Top-level type**: [`Color`], a closed sum of the two, plus the [`color()`] smart
//!   constructor that dispatches on a [`ColorArg`]
//! - **Conversion logic**: palette to RGB, RGB to nearest palette entry, and HSV

// Attach.
mod color256;
mod color_impl;
mod convert;
mod hex_color_parser;
mod rgb_value;

// Re-export.
pub use color256::*;
pub use color_impl::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
