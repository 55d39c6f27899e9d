// ABOUTME: Taxonomy index resolving food group keys to candidate taxonomy rows
// ABOUTME: Keys match root, category, or subcategory; table order is preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::errors::{AppError, AppResult};
use diet_core::models::{AllocationTier, TaxonomyRow};
use std::collections::HashMap;

/// Immutable lookup table over the nutritional level taxonomy
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    rows: Vec<TaxonomyRow>,
    by_key: HashMap<String, Vec<usize>>,
}

impl TaxonomyIndex {
    /// Build the index, validating every row
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a row's nutritional level is outside 1..=6
    pub fn new(rows: Vec<TaxonomyRow>) -> AppResult<Self> {
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, row) in rows.iter().enumerate() {
            row.validate()?;
            for key in [&row.root, &row.category, &row.subcategory] {
                let positions = by_key.entry(key.clone()).or_default();
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }
        Ok(Self { rows, by_key })
    }

    /// Candidate rows for a food group key
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no row names the key at any level
    pub fn lookup(&self, key: &str) -> AppResult<FoodGroup<'_>> {
        let (key, positions) = self.by_key.get_key_value(key).ok_or_else(|| {
            AppError::not_found(format!("Food group '{key}' in the taxonomy"))
                .with_resource_id(key)
        })?;
        Ok(FoodGroup {
            key,
            candidates: positions.iter().map(|&i| &self.rows[i]).collect(),
        })
    }

    /// All rows in table order
    #[must_use]
    pub fn rows(&self) -> &[TaxonomyRow] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the taxonomy holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A food group key together with its candidate rows
#[derive(Debug, Clone)]
pub struct FoodGroup<'a> {
    key: &'a str,
    candidates: Vec<&'a TaxonomyRow>,
}

impl<'a> FoodGroup<'a> {
    /// The key this group was looked up by
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Candidate rows, never empty
    #[must_use]
    pub fn candidates(&self) -> &[&'a TaxonomyRow] {
        &self.candidates
    }

    /// Nutritional level of the first candidate
    #[must_use]
    pub fn nutritional_level(&self) -> u8 {
        self.candidates.first().map_or(0, |row| row.nutritional_level)
    }

    /// Allocation tier of the group, decided by its first candidate
    #[must_use]
    pub fn tier(&self) -> AllocationTier {
        AllocationTier::for_level(self.nutritional_level())
    }
}
