// ABOUTME: Tests for weekly allocation of food groups onto days
// ABOUTME: Covers weekly-tier spreading, daily-tier draws, single candidates, and lookup failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use diet_core::config::FrequencySpec;
use diet_core::errors::ErrorCode;
use diet_core::models::{DietType, DishCategory};
use diet_planner::{
    allocate_week, compute_subject_diet, resolve_profile, Subject, TaxonomyIndex, Week,
};
use helpers::fixtures::{
    busy_profile, fixed, profile, range, rng, sample_taxonomy, staged, staged_total, SEEDS,
};
use indexmap::IndexMap;
use rand_chacha::ChaCha8Rng;

fn allocate(
    days: usize,
    entries: &[(&str, FrequencySpec)],
    taxonomy: &TaxonomyIndex,
    rng: &mut ChaCha8Rng,
) -> Week {
    let food_groups: IndexMap<String, FrequencySpec> = entries
        .iter()
        .map(|(key, spec)| ((*key).to_owned(), *spec))
        .collect();
    let resolved = resolve_profile(&food_groups, taxonomy, rng).unwrap();
    let mut week = Week::with_meal_counts(DietType::Healthy, &vec![5; days]).unwrap();
    allocate_week(&mut week, &resolved, taxonomy, rng).unwrap();
    week
}

fn staged_items(week: &Week, category: DishCategory) -> Vec<String> {
    week.days()
        .iter()
        .filter_map(|day| day.staging())
        .flat_map(|bucket| bucket.items(category).iter().cloned())
        .collect()
}

#[test]
fn test_weekly_group_with_two_candidates() {
    let taxonomy = sample_taxonomy();

    for seed in SEEDS {
        let week = allocate(7, &[("Sweet Products", fixed(3))], &taxonomy, &mut rng(seed));

        let total: usize = week.days().iter().map(staged_total).sum();
        assert_eq!(total, 3);

        // every candidate is used before any repeats
        let desserts = staged_items(&week, DishCategory::Dessert);
        let snacks = staged_items(&week, DishCategory::Snack);
        assert!(desserts.iter().all(|item| item == "Cake"));
        assert!(snacks.iter().all(|item| item == "Cookies"));
        assert!(!desserts.is_empty() && !snacks.is_empty());

        for day in week.days() {
            assert!(staged(day, DishCategory::Dessert) <= 1);
            assert!(staged(day, DishCategory::Snack) <= 1);
        }
    }
}

#[test]
fn test_oversubscribed_category_spreads_evenly_over_days() {
    let taxonomy = sample_taxonomy();

    for seed in SEEDS {
        let week = allocate(7, &[("Fast Food", fixed(10))], &taxonomy, &mut rng(seed));

        let per_day: Vec<usize> = week
            .days()
            .iter()
            .map(|day| staged(day, DishCategory::Main))
            .collect();
        assert_eq!(per_day.iter().sum::<usize>(), 10);
        assert!(per_day.iter().all(|count| (1..=2).contains(count)));

        let mains = staged_items(&week, DishCategory::Main);
        for name in ["Burger", "Pizza", "Hot Dog"] {
            assert!(mains.iter().filter(|item| *item == name).count() >= 3);
        }
    }
}

#[test]
fn test_items_stay_within_a_short_week() {
    let taxonomy = sample_taxonomy();

    for seed in SEEDS {
        let week = allocate(
            5,
            &[("Fast Food", fixed(4)), ("Bread", fixed(3))],
            &taxonomy,
            &mut rng(seed),
        );
        assert_eq!(week.days().len(), 5);
        assert_eq!(staged_items(&week, DishCategory::Main).len(), 4);
        assert_eq!(staged_items(&week, DishCategory::Bread).len(), 3);
        for day in week.days() {
            assert!(staged(day, DishCategory::Main) <= 1);
        }
    }
}

#[test]
fn test_single_candidate_stages_the_group_key() {
    let taxonomy = sample_taxonomy();
    let week = allocate(7, &[("Fried Potatoes", fixed(2))], &taxonomy, &mut rng(3));

    let sides = staged_items(&week, DishCategory::Side);
    assert_eq!(sides, vec!["Fried Potatoes", "Fried Potatoes"]);
}

#[test]
fn test_daily_group_draws_per_day() {
    let taxonomy = sample_taxonomy();

    for seed in SEEDS {
        let week = allocate(3, &[("Vegetables", range(1, 2))], &taxonomy, &mut rng(seed));
        for day in week.days() {
            assert!((1..=2).contains(&staged_total(day)));
            let bucket = day.staging().unwrap();
            assert!(bucket.items(DishCategory::Side).iter().all(|item| item == "Salad"));
            assert!(bucket
                .items(DishCategory::Main)
                .iter()
                .all(|item| item == "Vegetable Soup"));
        }
    }
}

#[test]
fn test_daily_draws_vary_between_days() {
    let taxonomy = sample_taxonomy();
    let mut seeds = SEEDS;
    let varied = seeds.any(|seed| {
        let week = allocate(7, &[("Vegetables", range(1, 2))], &taxonomy, &mut rng(seed));
        let first = staged_total(&week.days()[0]);
        week.days().iter().any(|day| staged_total(day) != first)
    });
    assert!(varied);
}

#[test]
fn test_subject_allocation_report_matches_staging() {
    let taxonomy = sample_taxonomy();
    let config = busy_profile();

    for seed in SEEDS {
        let mut rng = rng(seed);
        let mut subject = Subject::generate("000010", "EUROPE", &config, &mut rng).unwrap();
        let report = compute_subject_diet(&mut subject, &config, &taxonomy, &mut rng).unwrap();

        let staged: usize = subject
            .weeks()
            .iter()
            .flat_map(Week::days)
            .map(staged_total)
            .sum();
        assert_eq!(report.total(), staged);
        assert!(report.weekly_items > 0);
        assert!(report.daily_items > 0);
    }
}

#[test]
fn test_unknown_group_fails_with_subject_id() {
    let taxonomy = sample_taxonomy();
    let config = profile("broken", DietType::Healthy, &[("Kale", fixed(1))]);

    let mut rng = rng(1);
    let mut subject = Subject::generate("000001", "EUROPE", &config, &mut rng).unwrap();
    let error = compute_subject_diet(&mut subject, &config, &taxonomy, &mut rng).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.subject_id.as_deref(), Some("000001"));
    assert_eq!(error.context.resource_id.as_deref(), Some("Kale"));
}
