// ABOUTME: Tests for per-week profile resolution into weekly and daily frequencies
// ABOUTME: Validates range bounds, sentinel handling, and fatal lookups of unknown groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use diet_core::config::FrequencySpec;
use diet_core::errors::ErrorCode;
use diet_planner::{resolve_profile, sample_count, sample_range, Frequency};
use helpers::fixtures::{counts, fixed, range, rng, sample_taxonomy, SEEDS};
use indexmap::IndexMap;

fn groups(entries: &[(&str, FrequencySpec)]) -> IndexMap<String, FrequencySpec> {
    entries
        .iter()
        .map(|(key, spec)| ((*key).to_owned(), *spec))
        .collect()
}

#[test]
fn test_weekly_count_stays_within_range() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[("Fast Food", range(2, 5))]);

    for seed in SEEDS {
        let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(seed)).unwrap();
        match resolved.get("Fast Food") {
            Some(Frequency::Weekly(count)) => assert!((2..=5).contains(&count)),
            other => panic!("unexpected resolution {other:?}"),
        }
    }
}

#[test]
fn test_zero_draw_removes_weekly_group() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[("Sweet Products", range(0, 1))]);

    let mut seen_absent = false;
    let mut seen_present = false;
    for seed in SEEDS {
        let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(seed)).unwrap();
        match resolved.get("Sweet Products") {
            None => seen_absent = true,
            Some(Frequency::Weekly(1)) => seen_present = true,
            other => panic!("unexpected resolution {other:?}"),
        }
    }
    assert!(seen_absent && seen_present);
}

#[test]
fn test_sentinels_never_reach_the_taxonomy() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[
        ("Not In Taxonomy", FrequencySpec::Unset),
        ("Also Missing", FrequencySpec::Disabled),
        ("Bread", FrequencySpec::Disabled),
    ]);

    let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(1)).unwrap();
    assert!(resolved.is_empty());
}

#[test]
fn test_unknown_food_group_is_fatal() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[("Bread", fixed(2)), ("Kale", range(1, 2))]);

    let error = resolve_profile(&food_groups, &taxonomy, &mut rng(1)).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.resource_id.as_deref(), Some("Kale"));
}

#[test]
fn test_daily_groups_keep_their_range() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[("Vegetables", range(1, 2)), ("Water", fixed(2))]);

    let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(5)).unwrap();
    assert_eq!(
        resolved.get("Vegetables"),
        Some(Frequency::Daily { min: 1, max: 2 })
    );
    assert_eq!(resolved.get("Water"), Some(Frequency::Daily { min: 2, max: 2 }));
}

#[test]
fn test_daily_group_without_items_is_removed() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[("Vegetables", FrequencySpec::Range { min: 0, max: 0 })]);

    let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(5)).unwrap();
    assert!(resolved.get("Vegetables").is_none());
}

#[test]
fn test_weekly_and_daily_partitions() {
    let taxonomy = sample_taxonomy();
    let food_groups = groups(&[
        ("Bread", fixed(3)),
        ("Fast Food", fixed(2)),
        ("Vegetables", range(1, 3)),
    ]);

    let resolved = resolve_profile(&food_groups, &taxonomy, &mut rng(2)).unwrap();
    assert_eq!(resolved.len(), 3);

    let weekly: Vec<_> = resolved.weekly().collect();
    assert_eq!(weekly, vec![("Bread", 3), ("Fast Food", 2)]);

    let daily: Vec<_> = resolved.daily().collect();
    assert_eq!(daily, vec![("Vegetables", 1, 3)]);
}

#[test]
fn test_sample_range_bounds() {
    let mut rng = rng(8);
    for _ in 0..200 {
        let value = sample_range(3, 6, &mut rng);
        assert!((3..=6).contains(&value));
    }
    assert_eq!(sample_range(4, 4, &mut rng), 4);
    assert_eq!(sample_count(counts(2, 2), &mut rng), 2);
}
