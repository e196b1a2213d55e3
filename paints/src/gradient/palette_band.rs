// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradients within one band of the 256-color palette. Only palette entries are
//! produced, so the result looks the same on every terminal with 256 colors.

use super::{GradientSteps, distribute};
use crate::{Color, Color256, Vector, interval, sgn};

/// Walks the 24-step gray ramp from `a` to `b`. The natural length is one entry per gray
/// level, both ends included.
///
/// Both arguments must be in the grayscale band; anything else yields an empty result.
#[must_use]
pub fn grayscale_gradient(a: Color256, b: Color256, count: Option<usize>) -> GradientSteps {
    let (Some(level_a), Some(level_b)) = (a.grayscale_level(), b.grayscale_level()) else {
        return GradientSteps::new();
    };
    let levels = interval(level_a, level_b, true);
    distribute(&levels, count.unwrap_or(levels.len()))
        .into_iter()
        .filter_map(Color256::from_grayscale_level)
        .map(Color::Palette)
        .collect()
}

/// Walks the 6×6×6 cube from `a` to `b`.
///
/// The natural path moves every axis that has not yet arrived by one unit per step, so
/// it has `max(|Δr|, |Δg|, |Δb|) + 1` points. When `count` is omitted or longer than the
/// number of steps, that path is resampled to `count`. When `count` is shorter, each axis
/// is resampled on its own and the three are zipped back together, which spreads the
/// points more evenly than skipping along the path would.
///
/// Both arguments must be in the cube band; anything else yields an empty result.
#[must_use]
pub fn cube_gradient(a: Color256, b: Color256, count: Option<usize>) -> GradientSteps {
    let (Some(cube_a), Some(cube_b)) = (a.cube_coordinates(), b.cube_coordinates()) else {
        return GradientSteps::new();
    };
    let delta = cube_b - cube_a;
    let step_count = delta.iter().map(|it| it.abs()).max().unwrap_or(0);

    let points: Vec<Vector<i64, 3>> = match count {
        Some(count) if i64::try_from(count).is_ok_and(|it| it <= step_count) => {
            let [r, g, b] = [0_usize, 1, 2].map(|axis| {
                distribute(&interval(cube_a[axis], cube_b[axis], true), count)
            });
            r.into_iter()
                .zip(g)
                .zip(b)
                .map(|((r, g), b)| Vector([r, g, b]))
                .collect()
        }
        _ => {
            let path = contiguous_path(cube_a, delta, step_count);
            distribute(&path, count.unwrap_or(path.len()))
        }
    };

    points
        .into_iter()
        .filter_map(Color256::from_cube_coordinates)
        .map(Color::Palette)
        .collect()
}

fn contiguous_path(
    origin: Vector<i64, 3>,
    delta: Vector<i64, 3>,
    step_count: i64,
) -> Vec<Vector<i64, 3>> {
    let mut remaining = delta;
    let mut point = origin;
    let mut acc = vec![origin];
    for _ in 0..step_count {
        let step = remaining.map(sgn);
        point = point + step;
        remaining = remaining - step;
        acc.push(point);
    }
    acc
}
