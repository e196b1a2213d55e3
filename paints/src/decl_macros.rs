// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro, so that colored diffs show up
/// whenever a test comparison fails.
///
/// Only usable from test code, since `pretty_assertions` is a dev dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
