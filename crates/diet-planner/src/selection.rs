// ABOUTME: Index selection policy shared by candidate picking, day spreading, and meal choice
// ABOUTME: Samples without replacement, or covers every index evenly when over-subscribed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::seq::index;
use rand::Rng;

/// Select `freq` indices out of a pool of `num`, shifted by `offset`.
///
/// - `freq < num`: `freq` distinct indices drawn uniformly from `[1, num + offset)`.
///   The lower bound is 1 whatever the offset, so with `offset == 0` index 0 is
///   never returned.
/// - `freq >= num`: every index of `[offset, num + offset)` repeated `freq / num`
///   times, followed by `freq % num` distinct indices of the same range. Each
///   pool member is used `floor(freq / num)` times before any is used again.
///
/// The result always holds exactly `freq` indices, except for an empty pool
/// (`num == 0`), which yields nothing.
pub fn select_indices<R: Rng + ?Sized>(
    num: usize,
    freq: usize,
    offset: usize,
    rng: &mut R,
) -> Vec<usize> {
    if num == 0 {
        return Vec::new();
    }

    if freq >= num {
        let times = freq / num;
        let rest = freq % num;

        let mut selected = Vec::with_capacity(freq);
        for _ in 0..times {
            selected.extend(offset..num + offset);
        }
        selected.extend(
            index::sample(rng, num, rest)
                .into_iter()
                .map(|value| value + offset),
        );
        selected
    } else {
        // [1, num + offset) holds num + offset - 1 values, at least freq of them
        let span = num + offset - 1;
        index::sample(rng, span, freq.min(span))
            .into_iter()
            .map(|value| value + 1)
            .collect()
    }
}
