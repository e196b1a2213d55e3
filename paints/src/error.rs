// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors surfaced by color construction, numeric helpers, and gradients. Nothing in this
//! crate retries or recovers from these; they always surface to the caller.

/// Convenience alias used by every fallible function in this crate.
pub type PaintsResult<T> = Result<T, PaintsError>;

/// | Variant             | Raised by                                                  |
/// | :------------------ | :--------------------------------------------------------- |
/// | [`InvalidArgument`] | [`crate::color()`] and friends when the input shape is bad |
/// | [`InvalidRange`]    | [`crate::gradient()`] sample counts, [`crate::clamp()`]     |
///
/// Combining two colors that have no interpolation between them is *not* an error, see
/// [`crate::gradient()`].
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`InvalidRange`]: Self::InvalidRange
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PaintsError {
    #[error("🎨 Invalid color arguments: {reason}")]
    #[diagnostic(
        code(paints::color::invalid_argument),
        help(
            "Pass a palette index in 0..=255, three channels in 0..=255, \
             or a hex string like `#C0FFEE`"
        )
    )]
    InvalidArgument { reason: String },

    #[error("📏 Invalid range: {reason}")]
    #[diagnostic(code(paints::invalid_range))]
    InvalidRange { reason: String },
}

impl PaintsError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}
