// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Memoized, overridable terminal color support detection.
///
/// [`detect()`] checks, in order:
/// 1. An explicit override set with [`set_override()`], eg: from a `--color` CLI flag.
/// 2. The cached result of a previous detection.
/// 3. [`examine_env_vars_to_determine_color_support()`], whose result is then cached.
///
/// ```rust
/// use paints::{ColorSupport, global_color_support};
///
/// global_color_support::set_override(ColorSupport::NoColor);
/// assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
/// global_color_support::clear_override();
/// ```
///
/// [`detect()`]: global_color_support::detect
/// [`set_override()`]: global_color_support::set_override
pub mod global_color_support {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    static COLOR_SUPPORT_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }
        if let Ok(cached) = try_get_cached() {
            return cached;
        }
        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        tracing::debug!(?detected, "color support detected from environment");
        set_cached(detected);
        detected
    }

    /// Regardless of the environment, [`detect()`] returns `value` until
    /// [`clear_override()`] is called.
    ///
    /// # Testing support
    ///
    /// Tests that call this must be annotated with `#[serial]` from the
    /// [serial_test](https://crates.io/crates/serial_test) crate, since the override is
    /// process wide and tests run in parallel.
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no override is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_OVERRIDE.load(Ordering::Acquire))
    }

    /// Forces re-detection on the next call to [`detect()`].
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if nothing has been detected yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    pub fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }
}

/// Reads the process environment and checks whether `stream` is a terminal. Prefer
/// [`global_color_support::detect()`], which caches this.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    determine_color_support(
        |key| env::var(key).ok(),
        helpers::is_a_tty(stream),
        is_ci::uncached(),
    )
}

/// The decision logic behind [`examine_env_vars_to_determine_color_support()`], with the
/// environment passed in.
#[must_use]
pub fn determine_color_support(
    env_var: impl Fn(&str) -> Option<String>,
    is_a_tty: bool,
    is_ci: bool,
) -> ColorSupport {
    let is_set = |key: &str| env_var(key).is_some_and(|it| it != "0");
    let term = env_var("TERM").unwrap_or_default();

    if is_set("NO_COLOR") || term == "dumb" || !(is_a_tty || is_set("IGNORE_IS_TERMINAL")) {
        return ColorSupport::NoColor;
    }

    if env_var("COLORTERM").is_some_and(|it| it == "truecolor" || it == "24bit") {
        return ColorSupport::Truecolor;
    }

    if helpers::check_256_color(&term) {
        return ColorSupport::Ansi256;
    }

    if env_var("COLORTERM").is_some()
        || helpers::check_ansi_color(&term)
        || is_set("CLICOLOR")
        || is_ci
    {
        return ColorSupport::Ansi256;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// What a terminal can render, from most to least capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Truecolor),
                3 => Ok(super::ColorSupport::NoColor),
                4 => Ok(super::ColorSupport::Grayscale),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::Truecolor => 2,
                super::ColorSupport::NoColor   => 3,
                super::ColorSupport::Grayscale => 4,
            }
        }
    }
}

mod helpers {
    use super::Stream;

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        ["screen", "vscode", "xterm", "vt100", "vt220", "rxvt"]
            .iter()
            .any(|it| term.starts_with(it))
            || ["color", "ansi", "cygwin", "linux"]
                .iter()
                .any(|it| term.contains(it))
    }
}
