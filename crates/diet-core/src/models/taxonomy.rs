// ABOUTME: Nutritional level taxonomy row and allocation tier selection
// ABOUTME: Rows map a root/category/subcategory to a nutritional level and a dish category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{DAILY_TIER_MIN_LEVEL, MAX_NUTRITIONAL_LEVEL, MIN_NUTRITIONAL_LEVEL};
use crate::errors::{AppError, AppResult};
use crate::models::DishCategory;
use serde::{Deserialize, Serialize};

/// One row of the nutritional level taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRow {
    /// Top of the hierarchy, e.g. `Fifth Level`
    pub root: String,
    /// Middle of the hierarchy, e.g. `Vegetables`
    pub category: String,
    /// Leaf of the hierarchy; this is the name that ends up in a schedule
    pub subcategory: String,
    /// Nutritional level, 1 (least healthy) to 6
    pub nutritional_level: u8,
    /// Meal slot placement class
    pub dish_type: DishCategory,
}

impl TaxonomyRow {
    /// Allocation tier selected by this row's nutritional level
    #[must_use]
    pub const fn tier(&self) -> AllocationTier {
        AllocationTier::for_level(self.nutritional_level)
    }

    /// Reject rows whose nutritional level is outside 1..=6
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the level is outside the taxonomy bounds
    pub fn validate(&self) -> AppResult<()> {
        if (MIN_NUTRITIONAL_LEVEL..=MAX_NUTRITIONAL_LEVEL).contains(&self.nutritional_level) {
            Ok(())
        } else {
            Err(AppError::value_out_of_range(format!(
                "Nutritional level {} of '{}' must be between {MIN_NUTRITIONAL_LEVEL} and {MAX_NUTRITIONAL_LEVEL}",
                self.nutritional_level, self.subcategory
            ))
            .with_resource_id(self.subcategory.clone()))
        }
    }
}

/// Allocation strategy for a food group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationTier {
    /// Level below 5: one weekly count, pooled and spread across days
    Weekly,
    /// Level 5 or above: a fresh count drawn for every day
    Daily,
}

impl AllocationTier {
    /// Tier for a nutritional level
    #[must_use]
    pub const fn for_level(level: u8) -> Self {
        if level < DAILY_TIER_MIN_LEVEL {
            Self::Weekly
        } else {
            Self::Daily
        }
    }
}
