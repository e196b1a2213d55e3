// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # paints
//!
//! Terminal colors as values, composed into ANSI SGR sequences, plus gradients between
//! them.
//!
//! - [`Color`] is either a 256-color palette entry ([`Color256`], which may also be "no
//!   color") or a 24-bit [`ColorRgb`]. Build one from any accepted input shape with
//!   [`color()`].
//! - [`Paint`] pairs an optional foreground with an optional background and renders them
//!   as one `ESC [ ... m` sequence. Paints combine with `|` (override), `/` (borrow the
//!   other paint's foreground as background) and `!` (invert).
//! - [`gradient()`] produces `N` colors from one endpoint to the other, walking the gray
//!   ramp or the 6×6×6 cube for palette colors and the shorter hue arc for RGB colors.
//! - [`decolor()`] strips SGR sequences back out.
//! - [`global_color_support::detect()`] works out what the terminal can show, and
//!   [`Paint::render_for()`] degrades output to match.
//!
//! ```rust
//! use paints::{RED, YELLOW, color, decolor, gradient};
//!
//! # fn main() -> paints::PaintsResult<()> {
//! let warning = RED / YELLOW;
//! assert_eq!(warning.render("hot"), "\x1b[38;5;9;48;5;11mhot\x1b[m");
//! assert_eq!(decolor(&warning.render("hot")), "hot");
//!
//! let ramp = gradient(color(235)?, color(245)?, Some(5))?;
//! let swatch: String = ramp.iter().map(|it| it.bg("  ")).collect();
//! assert_eq!(decolor(&swatch), " ".repeat(10));
//! # Ok(())
//! # }
//! ```
//!
//! Everything here is a pure function over `Copy` values, safe to call from any thread.
//! The only process wide state is the memoized color support detection.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod decl_macros;
pub mod detect_color_support;
pub mod error;
pub mod gradient;
pub mod log_support;
pub mod math;
pub mod paint;
pub mod sgr;
pub mod swatch;

// Re-export.
pub use color::*;
pub use detect_color_support::*;
pub use error::*;
pub use gradient::*;
pub use log_support::*;
pub use math::*;
pub use paint::*;
pub use sgr::*;
pub use swatch::*;
