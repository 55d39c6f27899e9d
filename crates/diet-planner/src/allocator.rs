// ABOUTME: Weekly allocation of resolved food groups onto the days of each week
// ABOUTME: Weekly-tier items are pooled and spread across days, daily-tier items drawn per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::profile::{resolve_profile, sample_range, ResolvedProfile};
use crate::schedule::{ItemBucket, Subject, Week};
use crate::selection::select_indices;
use crate::taxonomy::{FoodGroup, TaxonomyIndex};
use diet_core::config::ProfileConfig;
use diet_core::errors::{AppError, AppResult};
use diet_core::models::DishCategory;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Items staged by the allocator for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationReport {
    /// Items staged from weekly-tier groups
    pub weekly_items: usize,
    /// Items staged from daily-tier groups
    pub daily_items: usize,
}

impl AllocationReport {
    /// All staged items
    #[must_use]
    pub const fn total(&self) -> usize {
        self.weekly_items + self.daily_items
    }
}

/// Pick `count` item names out of a food group.
///
/// A group with a single candidate yields its lookup key `count` times. With
/// several candidates a single item is a uniform draw, and more than one go
/// through [`select_indices`], so every candidate is used before any repeats.
fn pick_items<R: Rng + ?Sized>(
    group: &FoodGroup<'_>,
    count: usize,
    rng: &mut R,
) -> Vec<(DishCategory, String)> {
    match group.candidates() {
        [only] => vec![(only.dish_type, group.key().to_owned()); count],
        candidates if count == 1 => {
            let row = candidates[rng.gen_range(0..candidates.len())];
            vec![(row.dish_type, row.subcategory.clone())]
        }
        candidates => select_indices(candidates.len(), count, 0, rng)
            .into_iter()
            .filter_map(|i| candidates.get(i))
            .map(|row| (row.dish_type, row.subcategory.clone()))
            .collect(),
    }
}

/// Stage one week's items onto its days.
///
/// Weekly-tier items are pooled, grouped by category, shuffled within each
/// category, and spread over the days with [`select_indices`] so no day gets a
/// second item of a category before every day has one. Daily-tier groups draw a
/// fresh count from their range for every day.
///
/// # Errors
///
/// Returns `ResourceNotFound` if a resolved key is absent from the taxonomy
pub fn allocate_week<R: Rng + ?Sized>(
    week: &mut Week,
    resolved: &ResolvedProfile,
    taxonomy: &TaxonomyIndex,
    rng: &mut R,
) -> AppResult<AllocationReport> {
    let mut report = AllocationReport::default();

    let mut pool = ItemBucket::default();
    for (key, count) in resolved.weekly() {
        let group = taxonomy.lookup(key)?;
        for (category, item) in pick_items(&group, count as usize, rng) {
            pool.push(category, item);
        }
    }

    let day_count = week.days().len();
    for category in DishCategory::ALL {
        let mut items = pool.take(category);
        items.shuffle(rng);
        let targets = select_indices(day_count, items.len(), 1, rng);
        for (item, day_number) in items.into_iter().zip(targets) {
            let day = week.day_mut(day_number).ok_or_else(|| {
                AppError::internal(format!(
                    "Day {day_number} selected in a week of {day_count} days"
                ))
            })?;
            day.stage(category, item);
            report.weekly_items += 1;
        }
    }

    for (key, min, max) in resolved.daily() {
        let group = taxonomy.lookup(key)?;
        for day in week.days_mut() {
            let count = sample_range(min, max, rng) as usize;
            for (category, item) in pick_items(&group, count, rng) {
                day.stage(category, item);
                report.daily_items += 1;
            }
        }
    }

    Ok(report)
}

/// Stage every week of a subject.
///
/// The profile is re-resolved for each week, so weekly counts vary from week to
/// week. All weeks draw from the subject's own profile; a week's diet type label
/// is carried as metadata only.
///
/// # Errors
///
/// Returns `ResourceNotFound` if a configured food group is absent from the taxonomy
pub fn compute_subject_diet<R: Rng + ?Sized>(
    subject: &mut Subject,
    config: &ProfileConfig,
    taxonomy: &TaxonomyIndex,
    rng: &mut R,
) -> AppResult<AllocationReport> {
    let mut report = AllocationReport::default();
    let subject_id = subject.id().to_owned();

    for (week_index, week) in subject.weeks_mut().iter_mut().enumerate() {
        let resolved = resolve_profile(&config.food_groups, taxonomy, rng)
            .map_err(|e| e.with_subject_id(subject_id.clone()))?;
        let week_report = allocate_week(week, &resolved, taxonomy, rng)
            .map_err(|e| e.with_subject_id(subject_id.clone()))?;

        debug!(
            subject_id = %subject_id,
            week = week_index + 1,
            days = week.days().len(),
            food_groups = resolved.len(),
            weekly_items = week_report.weekly_items,
            daily_items = week_report.daily_items,
            "Allocated week"
        );

        report.weekly_items += week_report.weekly_items;
        report.daily_items += week_report.daily_items;
    }

    Ok(report)
}
