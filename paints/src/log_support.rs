// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the number of `-v` flags to a level. Warnings and errors always show.
#[must_use]
pub fn level_filter_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a global `fmt` subscriber that writes to stderr, leaving stdout for the
/// colored output itself.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level_filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, LevelFilter::WARN)]
    #[test_case(1, LevelFilter::INFO)]
    #[test_case(2, LevelFilter::DEBUG)]
    #[test_case(3, LevelFilter::TRACE)]
    #[test_case(9, LevelFilter::TRACE)]
    fn test_level_filter_from_verbosity(verbosity: u8, expected: LevelFilter) {
        assert_eq2!(level_filter_from_verbosity(verbosity), expected);
    }
}
