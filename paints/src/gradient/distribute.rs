// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::repeat_n;

/// Resamples `samples` to exactly `count` items, keeping order and both endpoints.
///
/// - **Downsampling** keeps the first sample and splits the `len - count` skipped
///   samples over the `count - 1` gaps. Leading gaps absorb the remainder.
/// - **Upsampling** repeats every sample `count / len` times. Leading samples absorb the
///   remainder with one extra repeat each.
///
/// ```rust
/// use paints::distribute;
///
/// assert_eq!(distribute(&[1, 2, 3, 4, 5, 6], 4), vec![1, 3, 5, 6]);
/// assert_eq!(distribute(&[1, 2, 3], 7), vec![1, 1, 1, 2, 2, 3, 3]);
/// ```
#[must_use]
pub fn distribute<T: Clone>(samples: &[T], count: usize) -> Vec<T> {
    let len = samples.len();

    if count == len || len == 0 {
        return samples.to_vec();
    }

    if count < len {
        if count < 2 {
            return samples[..count].to_vec();
        }
        let skip_count = len - count;
        let gap_count = count - 1;
        let (dup, rem) = (skip_count / gap_count, skip_count % gap_count);

        let probes = (0..gap_count).scan(0, |probe, gap| {
            *probe += 1 + dup + usize::from(gap < rem);
            Some(*probe)
        });
        return std::iter::once(0)
            .chain(probes)
            .filter_map(|it| samples.get(it).cloned())
            .collect();
    }

    let (dup, rem) = (count / len, count % len);
    samples
        .iter()
        .enumerate()
        .flat_map(|(index, it)| repeat_n(it.clone(), dup + usize::from(index < rem)))
        .collect()
}
