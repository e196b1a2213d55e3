// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ordered sequences of colors between two endpoints.
//!
//! [`gradient()`] dispatches on the pair of endpoints:
//! - Two grayscale palette colors walk the gray ramp.
//! - Two cube palette colors walk the 6×6×6 cube.
//! - Two RGB colors interpolate in HSV along the shorter hue arc.
//! - Anything else has no interpolation and yields just the two endpoints.
//!
//! Both palette strategies compute a natural path and then resample it to the requested
//! length with [`distribute()`].

// Attach.
mod distribute;
mod gradient_impl;
mod palette_band;
mod sample_count;
mod truecolor;

// Re-export.
pub use distribute::*;
pub use gradient_impl::*;
pub use palette_band::*;
pub use sample_count::*;
pub use truecolor::*;
