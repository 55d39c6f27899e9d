// ABOUTME: In-memory taxonomy and profile fixtures for planner and generator tests
// ABOUTME: Provides seeded ChaCha8 random sources so every test run is reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::config::{CountRange, FrequencySpec, ProfileConfig, RegionSelector, Regularity};
use diet_core::models::{DietType, DishCategory, TaxonomyRow};
use diet_planner::{Day, ItemBucket, TaxonomyIndex};
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Seeds used by property-style tests
pub const SEEDS: Range<u64> = 0..64;

/// Deterministic random source
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn row(
    root: &str,
    category: &str,
    subcategory: &str,
    nutritional_level: u8,
    dish_type: DishCategory,
) -> TaxonomyRow {
    TaxonomyRow {
        root: root.to_owned(),
        category: category.to_owned(),
        subcategory: subcategory.to_owned(),
        nutritional_level,
        dish_type,
    }
}

/// Rows of the small taxonomy used across tests.
///
/// `Fried Potatoes` has a single candidate; `Water` is both category and
/// subcategory of the same row.
pub fn taxonomy_rows() -> Vec<TaxonomyRow> {
    vec![
        row("First Level", "Fast Food", "Burger", 1, DishCategory::Main),
        row("First Level", "Fast Food", "Pizza", 1, DishCategory::Main),
        row("First Level", "Fast Food", "Hot Dog", 1, DishCategory::Main),
        row("First Level", "Sweet Products", "Cake", 1, DishCategory::Dessert),
        row("First Level", "Sweet Products", "Cookies", 1, DishCategory::Snack),
        row("Second Level", "Sugary Drinks", "Soda", 2, DishCategory::Drinks),
        row("Third Level", "Bread", "Toast", 3, DishCategory::Bread),
        row("Third Level", "Fried Potatoes", "Fries", 3, DishCategory::Side),
        row("Fourth Level", "Dairy Products", "Cheese", 4, DishCategory::Appetizer),
        row("Fourth Level", "Dairy Products", "Yogurt", 4, DishCategory::Dessert),
        row("Fifth Level", "Vegetables", "Salad", 5, DishCategory::Side),
        row("Fifth Level", "Vegetables", "Vegetable Soup", 5, DishCategory::Main),
        row("Sixth Level", "Water", "Water", 6, DishCategory::Drinks),
    ]
}

pub fn sample_taxonomy() -> TaxonomyIndex {
    TaxonomyIndex::new(taxonomy_rows()).unwrap()
}

pub const fn range(min: u32, max: u32) -> FrequencySpec {
    FrequencySpec::Range { min, max }
}

pub const fn fixed(value: u32) -> FrequencySpec {
    FrequencySpec::Fixed(value)
}

pub const fn counts(min: u32, max: u32) -> CountRange {
    CountRange { min, max }
}

/// Non-variable profile with a 7-day week and the given food groups
pub fn profile(
    name: &str,
    diet_type: DietType,
    food_groups: &[(&str, FrequencySpec)],
) -> ProfileConfig {
    ProfileConfig {
        name: name.to_owned(),
        diet_type,
        num_subjects: 1,
        region: RegionSelector::Any,
        days_week: CountRange::exactly(7),
        num_meals: counts(3, 5),
        max_meals_with_main_dishes: counts(2, 3),
        max_main_dishes_per_meal: counts(1, 2),
        regularity: Regularity {
            weeks: 2,
            irregular_weeks: 0,
        },
        variable: false,
        secondary_profile: None,
        food_groups: food_groups
            .iter()
            .map(|(key, spec)| ((*key).to_owned(), *spec))
            .collect::<IndexMap<_, _>>(),
    }
}

/// Profile staging plenty of every category, for placement rule tests
pub fn busy_profile() -> ProfileConfig {
    profile(
        "busy",
        DietType::Unhealthy,
        &[
            ("Fast Food", range(6, 12)),
            ("Sweet Products", range(4, 9)),
            ("Sugary Drinks", range(3, 8)),
            ("Bread", range(4, 8)),
            ("Fried Potatoes", range(2, 6)),
            ("Dairy Products", range(3, 7)),
            ("Vegetables", range(1, 2)),
            ("Water", range(0, 2)),
        ],
    )
}

/// Staged items of one category on a day
pub fn staged(day: &Day, category: DishCategory) -> usize {
    day.staging().map_or(0, |bucket| bucket.count(category))
}

/// Staged items of every category on a day
pub fn staged_total(day: &Day) -> usize {
    day.staging().map_or(0, ItemBucket::total)
}
