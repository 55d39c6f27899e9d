// ABOUTME: Tests for the index selection policy used by allocation and balancing
// ABOUTME: Covers even coverage under over-subscription and distinct draws otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use diet_planner::select_indices;
use helpers::fixtures::{rng, SEEDS};
use std::collections::HashSet;

fn occurrences(selected: &[usize], values: usize) -> Vec<usize> {
    let mut counts = vec![0; values];
    for &index in selected {
        counts[index] += 1;
    }
    counts
}

#[test]
fn test_oversubscribed_selection_covers_every_index() {
    for seed in SEEDS {
        let selected = select_indices(3, 7, 0, &mut rng(seed));
        assert_eq!(selected.len(), 7);

        let counts = occurrences(&selected, 3);
        assert!(counts.iter().all(|&count| (2..=3).contains(&count)));
        assert_eq!(counts.iter().filter(|&&count| count == 3).count(), 1);
    }
}

#[test]
fn test_exact_multiple_uses_each_index_equally() {
    for seed in SEEDS {
        let selected = select_indices(4, 8, 1, &mut rng(seed));
        let counts = occurrences(&selected, 5);
        assert_eq!(counts, vec![0, 2, 2, 2, 2]);
    }
}

#[test]
fn test_equal_pool_and_count_returns_every_index_once() {
    let mut selected = select_indices(5, 5, 1, &mut rng(3));
    selected.sort_unstable();
    assert_eq!(selected, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_undersubscribed_selection_is_distinct() {
    for seed in SEEDS {
        let selected = select_indices(7, 3, 1, &mut rng(seed));
        assert_eq!(selected.len(), 3);

        let unique: HashSet<_> = selected.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(selected.iter().all(|index| (1..=7).contains(index)));
    }
}

#[test]
fn test_undersubscribed_selection_starts_at_one_without_offset() {
    // [1, num) is all that is left when the offset is zero
    for seed in SEEDS {
        let mut selected = select_indices(5, 4, 0, &mut rng(seed));
        selected.sort_unstable();
        assert_eq!(selected, vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_day_bound_for_five_day_week() {
    for seed in SEEDS {
        let mut rng = rng(seed);
        for count in 0..=12 {
            let days = select_indices(5, count, 1, &mut rng);
            assert_eq!(days.len(), count);
            assert!(days.iter().all(|day| (1..=5).contains(day)));
        }
    }
}

#[test]
fn test_empty_pool_and_zero_count() {
    assert!(select_indices(0, 3, 1, &mut rng(1)).is_empty());
    assert!(select_indices(4, 0, 1, &mut rng(1)).is_empty());
    assert!(select_indices(4, 0, 0, &mut rng(1)).is_empty());
}

#[test]
fn test_selection_is_deterministic_per_seed() {
    let first = select_indices(10, 23, 1, &mut rng(99));
    let second = select_indices(10, 23, 1, &mut rng(99));
    assert_eq!(first, second);
}
