// ABOUTME: Dish category model for meal slot placement
// ABOUTME: Closed enumeration of the seven placement classes with case-insensitive parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placement class of a scheduled item
///
/// The set is closed: every bucket in the schedule has exactly one sequence per
/// variant, so bucket access is total and an unknown category can only appear
/// while parsing external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DishCategory {
    /// Anchors a meal
    Main,
    /// Only joins a meal that has a main dish
    Bread,
    /// Any meal, at most one per meal
    Dessert,
    /// Any meal, at most one per meal
    Drinks,
    /// Only in meals without a main dish
    Appetizer,
    /// Only in meals without a main dish
    Snack,
    /// Only joins a meal that has a main dish
    Side,
}

impl DishCategory {
    /// All categories, in placement and export order
    pub const ALL: [Self; 7] = [
        Self::Main,
        Self::Bread,
        Self::Dessert,
        Self::Drinks,
        Self::Appetizer,
        Self::Snack,
        Self::Side,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Bread => "bread",
            Self::Dessert => "dessert",
            Self::Drinks => "drinks",
            Self::Appetizer => "appetizer",
            Self::Snack => "snack",
            Self::Side => "side",
        }
    }

    /// Position of this category inside `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("The dish type {s} is not valid")))
    }
}

impl TryFrom<String> for DishCategory {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
