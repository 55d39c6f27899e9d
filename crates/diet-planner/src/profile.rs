// ABOUTME: Per-week resolution of configured food group ranges into concrete frequencies
// ABOUTME: Weekly-tier groups get one sampled count, daily-tier groups keep their range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::taxonomy::TaxonomyIndex;
use diet_core::config::{CountRange, FrequencySpec};
use diet_core::errors::AppResult;
use diet_core::models::AllocationTier;
use rand::Rng;
use indexmap::IndexMap;
use tracing::trace;

/// Draw uniformly from the inclusive range `[min, max]`; a degenerate or inverted
/// range yields `min`
pub fn sample_range<R: Rng + ?Sized>(min: u32, max: u32, rng: &mut R) -> u32 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

/// Draw a value from a skeleton range
pub fn sample_count<R: Rng + ?Sized>(range: CountRange, rng: &mut R) -> u32 {
    sample_range(range.min, range.max, rng)
}

/// Concrete frequency of a food group for one week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Items per week, pooled and spread across days
    Weekly(u32),
    /// Items per day, drawn afresh from the range for each day
    Daily {
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },
}

/// A food group key with its resolved frequency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Food group key as written in the profile
    pub key: String,
    /// Resolved frequency
    pub frequency: Frequency,
}

/// Food groups to allocate for one week, in profile key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProfile {
    entries: Vec<ResolvedEntry>,
}

impl ResolvedProfile {
    /// All entries
    #[must_use]
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// Frequency of a key, if it survived resolution
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Frequency> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.frequency)
    }

    /// Weekly-tier entries with their weekly count
    pub fn weekly(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().filter_map(|entry| match entry.frequency {
            Frequency::Weekly(count) => Some((entry.key.as_str(), count)),
            Frequency::Daily { .. } => None,
        })
    }

    /// Daily-tier entries with their per-day range
    pub fn daily(&self) -> impl Iterator<Item = (&str, u32, u32)> {
        self.entries.iter().filter_map(|entry| match entry.frequency {
            Frequency::Daily { min, max } => Some((entry.key.as_str(), min, max)),
            Frequency::Weekly(_) => None,
        })
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no food group survived resolution
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a profile's food groups for one week.
///
/// Sentinel entries (unset or disabled) are skipped without touching the
/// taxonomy. Every other key must exist in the taxonomy. Weekly-tier groups get a
/// count drawn from their range and are dropped when the draw is 0. Daily-tier
/// groups keep their range and are dropped only when its maximum is 0.
///
/// # Errors
///
/// Returns `ResourceNotFound` if a configured key is absent from the taxonomy
pub fn resolve_profile<R: Rng + ?Sized>(
    food_groups: &IndexMap<String, FrequencySpec>,
    taxonomy: &TaxonomyIndex,
    rng: &mut R,
) -> AppResult<ResolvedProfile> {
    let mut entries = Vec::with_capacity(food_groups.len());

    for (key, spec) in food_groups {
        let Some((min, max)) = spec.bounds() else {
            continue;
        };

        let frequency = match taxonomy.lookup(key)?.tier() {
            AllocationTier::Weekly => match sample_range(min, max, rng) {
                0 => None,
                count => Some(Frequency::Weekly(count)),
            },
            AllocationTier::Daily => (max > 0).then_some(Frequency::Daily { min, max }),
        };

        match frequency {
            Some(frequency) => entries.push(ResolvedEntry {
                key: key.clone(),
                frequency,
            }),
            None => trace!(food_group = %key, "Food group resolved to zero items"),
        }
    }

    Ok(ResolvedProfile { entries })
}
