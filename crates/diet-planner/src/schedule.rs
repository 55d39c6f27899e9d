// ABOUTME: Schedule data model: subjects own weeks, weeks own days, days own meal slots
// ABOUTME: Category buckets store item names; serialization follows the exported JSON layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Schedule model.
//!
//! A [`Subject`] owns its [`Week`]s, a week owns its [`Day`]s and a day owns its
//! [`MealSlot`]s. During generation a day also holds a staging [`ItemBucket`]:
//! the allocator fills it and the balancer drains it into the meal slots.
//! Staging is never exported.

use crate::profile::sample_count;
use diet_core::config::{CountRange, ProfileConfig};
use diet_core::constants::limits::{MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};
use diet_core::constants::schedule_keys;
use diet_core::errors::{AppError, AppResult};
use diet_core::models::{DietType, DishCategory};
use rand::seq::index;
use rand::Rng;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::mem;

/// Item names grouped by dish category
///
/// Each category keeps its items in insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemBucket {
    items: [Vec<String>; DishCategory::ALL.len()],
}

impl ItemBucket {
    /// Append an item to a category
    pub fn push(&mut self, category: DishCategory, item: impl Into<String>) {
        self.items[category.index()].push(item.into());
    }

    /// Items of a category
    #[must_use]
    pub fn items(&self, category: DishCategory) -> &[String] {
        &self.items[category.index()]
    }

    /// Number of items in a category
    #[must_use]
    pub fn count(&self, category: DishCategory) -> usize {
        self.items[category.index()].len()
    }

    /// Remove and return every item of a category
    pub fn take(&mut self, category: DishCategory) -> Vec<String> {
        mem::take(&mut self.items[category.index()])
    }

    /// Remove the first occurrence of an item; returns whether one was found
    pub fn remove(&mut self, category: DishCategory, item: &str) -> bool {
        let items = &mut self.items[category.index()];
        items
            .iter()
            .position(|existing| existing == item)
            .map(|position| items.remove(position))
            .is_some()
    }

    /// Items across all categories
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.iter().map(Vec::len).sum()
    }

    /// Whether every category is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Vec::is_empty)
    }

    /// Non-empty categories with their items, in category order
    pub fn iter(&self) -> impl Iterator<Item = (DishCategory, &[String])> {
        DishCategory::ALL
            .into_iter()
            .map(|category| (category, self.items(category)))
            .filter(|(_, items)| !items.is_empty())
    }
}

impl Serialize for ItemBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (category, items) in self.iter() {
            map.serialize_entry(category.as_str(), items)?;
        }
        map.end()
    }
}

/// One eating occasion within a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealSlot {
    /// Items placed in this meal
    pub dishes: ItemBucket,
}

impl MealSlot {
    /// Whether the meal holds at least one main dish
    #[must_use]
    pub fn has_main(&self) -> bool {
        self.dishes.count(DishCategory::Main) > 0
    }
}

/// One day of a week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Day {
    meals: Vec<MealSlot>,
    staging: Option<ItemBucket>,
}

impl Day {
    /// A day with `meal_count` empty meal slots
    #[must_use]
    pub fn new(meal_count: usize) -> Self {
        Self {
            meals: vec![MealSlot::default(); meal_count],
            staging: None,
        }
    }

    /// Meal slots in order
    #[must_use]
    pub fn meals(&self) -> &[MealSlot] {
        &self.meals
    }

    /// Mutable meal slots
    pub fn meals_mut(&mut self) -> &mut [MealSlot] {
        &mut self.meals
    }

    /// Meal slot by 1-based number
    #[must_use]
    pub fn meal(&self, number: usize) -> Option<&MealSlot> {
        number.checked_sub(1).and_then(|i| self.meals.get(i))
    }

    /// Place an item directly into a meal slot
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the day has no meal with that 1-based number
    pub fn add_dish(
        &mut self,
        number: usize,
        category: DishCategory,
        item: impl Into<String>,
    ) -> AppResult<()> {
        let meal_count = self.meals.len();
        let meal = number
            .checked_sub(1)
            .and_then(|i| self.meals.get_mut(i))
            .ok_or_else(|| {
                AppError::value_out_of_range(format!(
                    "Meal {number} does not exist in a day of {meal_count} meals"
                ))
            })?;
        meal.dishes.push(category, item);
        Ok(())
    }

    /// Remove an item from a meal slot; returns whether it was there
    pub fn remove_dish(&mut self, number: usize, category: DishCategory, item: &str) -> bool {
        number
            .checked_sub(1)
            .and_then(|i| self.meals.get_mut(i))
            .is_some_and(|meal| meal.dishes.remove(category, item))
    }

    /// Add an item to the staging bucket, creating it on first use
    pub fn stage(&mut self, category: DishCategory, item: impl Into<String>) {
        self.staging
            .get_or_insert_with(ItemBucket::default)
            .push(category, item);
    }

    /// Staged items awaiting placement
    #[must_use]
    pub const fn staging(&self) -> Option<&ItemBucket> {
        self.staging.as_ref()
    }

    /// Detach the staging bucket
    pub fn take_staging(&mut self) -> Option<ItemBucket> {
        self.staging.take()
    }

    /// Drop meal slots left empty; returns how many were removed
    pub fn remove_empty_meals(&mut self) -> usize {
        let before = self.meals.len();
        self.meals.retain(|meal| !meal.dishes.is_empty());
        before - self.meals.len()
    }

    /// Items placed across all meal slots
    #[must_use]
    pub fn placed_items(&self) -> usize {
        self.meals.iter().map(|meal| meal.dishes.total()).sum()
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for (i, meal) in self.meals.iter().enumerate() {
            map.serialize_entry(&schedule_keys::meal(i + 1), meal)?;
        }
        map.end()
    }
}

/// One week of a subject's schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    diet_type: DietType,
    days: Vec<Day>,
}

impl Week {
    /// Build a week with one day per entry of `meal_counts`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the number of days is outside 1..=7
    pub fn with_meal_counts(diet_type: DietType, meal_counts: &[usize]) -> AppResult<Self> {
        let days = meal_counts.len();
        if !(MIN_DAYS_PER_WEEK as usize..=MAX_DAYS_PER_WEEK as usize).contains(&days) {
            return Err(AppError::value_out_of_range(format!(
                "A week needs between {MIN_DAYS_PER_WEEK} and {MAX_DAYS_PER_WEEK} days, got {days}"
            )));
        }
        Ok(Self {
            diet_type,
            days: meal_counts.iter().map(|&count| Day::new(count)).collect(),
        })
    }

    /// Build a week of `days` days, sampling each day's meal count from `num_meals`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `days` is outside 1..=7
    pub fn generate<R: Rng + ?Sized>(
        diet_type: DietType,
        days: u32,
        num_meals: CountRange,
        rng: &mut R,
    ) -> AppResult<Self> {
        if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&days) {
            return Err(AppError::value_out_of_range(format!(
                "A week needs between {MIN_DAYS_PER_WEEK} and {MAX_DAYS_PER_WEEK} days, got {days}"
            )));
        }
        let meal_counts: Vec<usize> = (0..days)
            .map(|_| sample_count(num_meals, rng) as usize)
            .collect();
        Self::with_meal_counts(diet_type, &meal_counts)
    }

    /// Diet type label of this week
    #[must_use]
    pub const fn diet_type(&self) -> DietType {
        self.diet_type
    }

    /// Days in order
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Mutable days
    pub fn days_mut(&mut self) -> &mut [Day] {
        &mut self.days
    }

    /// Day by 1-based number
    #[must_use]
    pub fn day(&self, number: usize) -> Option<&Day> {
        number.checked_sub(1).and_then(|i| self.days.get(i))
    }

    /// Mutable day by 1-based number
    pub fn day_mut(&mut self, number: usize) -> Option<&mut Day> {
        number.checked_sub(1).and_then(|i| self.days.get_mut(i))
    }
}

struct DaysView<'a>(&'a [Day]);

impl Serialize for DaysView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, day) in self.0.iter().enumerate() {
            map.serialize_entry(&schedule_keys::day(i + 1), day)?;
        }
        map.end()
    }
}

impl Serialize for Week {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut week = serializer.serialize_struct("Week", 3)?;
        week.serialize_field("diet_type", &self.diet_type)?;
        week.serialize_field("days_week", &self.days.len())?;
        week.serialize_field("meals", &DaysView(&self.days))?;
        week.end()
    }
}

struct WeeksView<'a>(&'a [Week]);

impl Serialize for WeeksView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, week) in self.0.iter().enumerate() {
            map.serialize_entry(&schedule_keys::week(i + 1), week)?;
        }
        map.end()
    }
}

/// A synthetic person and their whole schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: String,
    region: String,
    profile: String,
    variable: bool,
    weeks: Vec<Week>,
}

impl Subject {
    /// Assemble a subject from prebuilt weeks
    pub fn from_weeks(
        id: impl Into<String>,
        region: impl Into<String>,
        profile: impl Into<String>,
        variable: bool,
        weeks: Vec<Week>,
    ) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            profile: profile.into(),
            variable,
            weeks,
        }
    }

    /// Build the empty schedule skeleton of a subject from its profile.
    ///
    /// Every week samples its day count from `days_week` and every day its meal
    /// count from `num_meals`. A variable profile relabels `irregular_weeks`
    /// randomly chosen weeks with the secondary diet type, picking one of the two
    /// alternatives when the profile names none.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a sampled day count is outside 1..=7
    pub fn generate<R: Rng + ?Sized>(
        id: impl Into<String>,
        region: impl Into<String>,
        config: &ProfileConfig,
        rng: &mut R,
    ) -> AppResult<Self> {
        let total_weeks = config.total_weeks() as usize;
        let mut labels = vec![config.diet_type; total_weeks];

        if config.is_variable() {
            let secondary = config.secondary_profile.unwrap_or_else(|| {
                let alternatives = config.diet_type.alternatives();
                alternatives[rng.gen_range(0..alternatives.len())]
            });
            let irregular = (config.regularity.irregular_weeks as usize).min(total_weeks);
            for week in index::sample(rng, total_weeks, irregular) {
                labels[week] = secondary;
            }
        }

        let weeks = labels
            .into_iter()
            .map(|label| {
                let days = sample_count(config.days_week, rng);
                Week::generate(label, days, config.num_meals, rng)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::from_weeks(
            id,
            region,
            config.name.clone(),
            config.is_variable(),
            weeks,
        ))
    }

    /// Six-digit identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Region name
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Name of the profile the subject was generated from
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Whether the subject alternates diet types
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        self.variable
    }

    /// Weeks in order
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Mutable weeks
    pub fn weeks_mut(&mut self) -> &mut [Week] {
        &mut self.weeks
    }

    /// Items placed across the whole schedule
    #[must_use]
    pub fn placed_items(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(Week::days)
            .map(Day::placed_items)
            .sum()
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut subject = serializer.serialize_struct("Subject", 5)?;
        subject.serialize_field("ID", &self.id)?;
        subject.serialize_field("region", &self.region)?;
        subject.serialize_field("weeks", &self.weeks.len())?;
        subject.serialize_field("variable", &self.variable)?;
        subject.serialize_field("diets", &WeeksView(&self.weeks))?;
        subject.end()
    }
}
