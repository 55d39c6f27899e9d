// ABOUTME: Diet type model describing the nutritional archetype of a subject or week
// ABOUTME: Healthy, unhealthy, and medium profiles with lossless string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nutritional archetype of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    /// Frequencies close to dietary recommendations
    Healthy,
    /// Frequencies dominated by low nutritional level groups
    Unhealthy,
    /// Somewhere between the two
    Medium,
}

impl DietType {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Medium => "medium",
        }
    }

    /// The two diet types a variable subject can alternate to
    #[must_use]
    pub const fn alternatives(self) -> [Self; 2] {
        match self {
            Self::Healthy => [Self::Unhealthy, Self::Medium],
            Self::Unhealthy => [Self::Healthy, Self::Medium],
            Self::Medium => [Self::Healthy, Self::Unhealthy],
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Ok(Self::Healthy),
            "unhealthy" => Ok(Self::Unhealthy),
            "medium" => Ok(Self::Medium),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet type '{other}'"
            ))),
        }
    }
}
