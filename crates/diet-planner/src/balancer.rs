// ABOUTME: Per-day balancing of staged items into meal slots under placement rules
// ABOUTME: Enforces main dish caps and category exclusivity, drops what does not fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal balancing.
//!
//! Categories are placed in a fixed order: main, bread, side, dessert, drinks,
//! appetizer, snack. Main dishes go to a random subset of meals, capped per
//! meal. Bread and side only join meals holding a main dish, appetizer and snack
//! only meals without one, and dessert and drinks any meal. Each non-main
//! category holds at most one item per meal. Items with no eligible meal are
//! dropped. Meals left empty are removed at the end.

use crate::profile::sample_count;
use crate::schedule::{Day, MealSlot, Subject};
use crate::selection::select_indices;
use diet_core::config::ProfileConfig;
use diet_core::models::DishCategory;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Non-main categories in placement order, with whether they need a main dish
/// in the meal (`Some(true)`), need its absence (`Some(false)`), or do not care
const SECONDARY_PLACEMENT: [(DishCategory, Option<bool>); 6] = [
    (DishCategory::Bread, Some(true)),
    (DishCategory::Side, Some(true)),
    (DishCategory::Dessert, None),
    (DishCategory::Drinks, None),
    (DishCategory::Appetizer, Some(false)),
    (DishCategory::Snack, Some(false)),
];

/// Main dish caps applied to every day of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceLimits {
    /// Meals of a day that may hold main dishes
    pub max_meals_with_main_dishes: usize,
    /// Main dishes a single meal may hold
    pub max_main_dishes_per_meal: usize,
}

impl BalanceLimits {
    /// Sample the caps of one subject from its profile
    pub fn sample<R: Rng + ?Sized>(config: &ProfileConfig, rng: &mut R) -> Self {
        Self {
            max_meals_with_main_dishes: sample_count(config.max_meals_with_main_dishes, rng)
                as usize,
            max_main_dishes_per_meal: sample_count(config.max_main_dishes_per_meal, rng) as usize,
        }
    }
}

/// Placement outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceReport {
    placed: [usize; DishCategory::ALL.len()],
    dropped: [usize; DishCategory::ALL.len()],
    /// Empty meal slots removed during compaction
    pub removed_meals: usize,
}

impl BalanceReport {
    /// Items of a category placed into meals
    #[must_use]
    pub const fn placed(&self, category: DishCategory) -> usize {
        self.placed[category.index()]
    }

    /// Items of a category dropped for lack of an eligible meal
    #[must_use]
    pub const fn dropped(&self, category: DishCategory) -> usize {
        self.dropped[category.index()]
    }

    /// Items placed across all categories
    #[must_use]
    pub fn total_placed(&self) -> usize {
        self.placed.iter().sum()
    }

    /// Items dropped across all categories
    #[must_use]
    pub fn total_dropped(&self) -> usize {
        self.dropped.iter().sum()
    }

    /// Add another report's counters to this one
    pub fn merge(&mut self, other: &Self) {
        for (total, value) in self.placed.iter_mut().zip(other.placed) {
            *total += value;
        }
        for (total, value) in self.dropped.iter_mut().zip(other.dropped) {
            *total += value;
        }
        self.removed_meals += other.removed_meals;
    }

    fn record(&mut self, category: DishCategory, placed: bool) {
        if placed {
            self.placed[category.index()] += 1;
        } else {
            self.dropped[category.index()] += 1;
        }
    }
}

fn place_main_dishes<R: Rng + ?Sized>(
    meals: &mut [MealSlot],
    mut dishes: Vec<String>,
    limits: BalanceLimits,
    rng: &mut R,
    report: &mut BalanceReport,
) {
    dishes.shuffle(rng);

    // the chosen meal numbers are cycled once per allowed meal
    let chosen = select_indices(meals.len(), limits.max_meals_with_main_dishes, 1, rng);
    let mut candidates = chosen
        .repeat(limits.max_meals_with_main_dishes)
        .into_iter()
        .filter_map(|number| number.checked_sub(1));

    for dish in dishes {
        let slot = candidates.find(|&i| {
            meals.get(i).is_some_and(|meal| {
                meal.dishes.count(DishCategory::Main) < limits.max_main_dishes_per_meal
            })
        });
        match slot.and_then(|i| meals.get_mut(i)) {
            Some(meal) => {
                meal.dishes.push(DishCategory::Main, dish);
                report.record(DishCategory::Main, true);
            }
            None => report.record(DishCategory::Main, false),
        }
    }
}

fn place_first_fit<R: Rng + ?Sized>(
    meals: &mut [MealSlot],
    category: DishCategory,
    needs_main: Option<bool>,
    items: Vec<String>,
    rng: &mut R,
    report: &mut BalanceReport,
) {
    let mut order: Vec<usize> = (0..meals.len()).collect();
    order.shuffle(rng);

    for item in items {
        let slot = order.iter().copied().find(|&i| {
            let meal = &meals[i];
            needs_main.is_none_or(|needed| meal.has_main() == needed)
                && meal.dishes.count(category) == 0
        });
        match slot {
            Some(i) => {
                meals[i].dishes.push(category, item);
                report.record(category, true);
            }
            None => report.record(category, false),
        }
    }
}

/// Move a day's staged items into its meal slots, then remove empty meals.
///
/// A day without staged items is only compacted.
pub fn balance_day<R: Rng + ?Sized>(
    day: &mut Day,
    limits: BalanceLimits,
    rng: &mut R,
) -> BalanceReport {
    let mut report = BalanceReport::default();
    let mut staging = day.take_staging().unwrap_or_default();

    let mains = staging.take(DishCategory::Main);
    place_main_dishes(day.meals_mut(), mains, limits, rng, &mut report);

    for (category, needs_main) in SECONDARY_PLACEMENT {
        let items = staging.take(category);
        place_first_fit(day.meals_mut(), category, needs_main, items, rng, &mut report);
    }

    report.removed_meals = day.remove_empty_meals();
    report
}

/// Balance every day of a subject.
///
/// The main dish caps are sampled once for the subject and shared by all of its
/// days. Dropped items are counted in the report, never raised as errors.
pub fn balance_subject_diet<R: Rng + ?Sized>(
    subject: &mut Subject,
    config: &ProfileConfig,
    rng: &mut R,
) -> BalanceReport {
    let limits = BalanceLimits::sample(config, rng);
    let mut report = BalanceReport::default();
    let subject_id = subject.id().to_owned();

    for (week_index, week) in subject.weeks_mut().iter_mut().enumerate() {
        for (day_index, day) in week.days_mut().iter_mut().enumerate() {
            let day_report = balance_day(day, limits, rng);
            if day_report.total_dropped() > 0 {
                debug!(
                    subject_id = %subject_id,
                    week = week_index + 1,
                    day = day_index + 1,
                    dropped = day_report.total_dropped(),
                    "Dropped items without an eligible meal"
                );
            }
            report.merge(&day_report);
        }
    }

    report
}
