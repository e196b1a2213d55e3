// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small numeric helpers used by the color types and the gradient engine.
//!
//! - `scalar` - [`sgn()`], [`lerp()`], [`clamp()`], and [`interval()`]
//! - `vector` - fixed arity [`Vector`] with elementwise arithmetic

// Attach sources.
mod scalar;
mod vector;

// Re-export.
pub use scalar::*;
pub use vector::*;
