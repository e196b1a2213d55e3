// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Foreground and background colors composed into one SGR sequence, the named color
//! constants built on top of that, and stripping those sequences back out.

// Attach.
mod decolor;
mod named;
mod paint_impl;

// Re-export.
pub use decolor::*;
pub use named::*;
pub use paint_impl::*;
