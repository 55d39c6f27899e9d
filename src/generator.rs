// ABOUTME: Population driver generating subjects profile by profile with reproducible randomness
// ABOUTME: Each subject draws from its own ChaCha8 stream derived from the master seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Population generation.
//!
//! Subjects are numbered with a global ordinal across the whole catalog. The
//! ordinal selects the subject's random stream, so generating subject `n` alone
//! yields exactly the subject a full run produces at position `n`.

use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use diet_core::config::{ProfileCatalog, ProfileConfig, RegionSelector};
use diet_core::constants::{regions, schedule_keys};
use diet_core::models::DietType;
use diet_planner::{
    balance_subject_diet, compute_subject_diet, AllocationReport, BalanceReport, Subject,
    TaxonomyIndex,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A finished subject with its generation counters
#[derive(Debug, Clone)]
pub struct GeneratedSubject {
    /// The balanced schedule
    pub subject: Subject,
    /// Items staged by the allocator
    pub allocation: AllocationReport,
    /// Placement outcome of the balancer
    pub balance: BalanceReport,
}

/// Progress notification sent after each subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationProgress<'a> {
    /// Subjects finished so far
    pub completed: u64,
    /// Subjects in the whole run
    pub total: u64,
    /// Profile the last subject was generated from
    pub profile: &'a str,
}

/// Totals of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Master seed of the run
    pub seed: u64,
    /// Subjects generated
    pub subjects: u64,
    /// Subjects per primary diet type
    pub subjects_by_diet: BTreeMap<DietType, u64>,
    /// Subjects alternating diet types
    pub variable_subjects: u64,
    /// Weeks generated across all subjects
    pub weeks: u64,
    /// Items placed into meals
    pub placed_items: u64,
    /// Items dropped by the balancer
    pub dropped_items: u64,
    /// Run start time
    pub started_at: DateTime<Utc>,
    /// Run end time
    pub finished_at: DateTime<Utc>,
}

impl GenerationSummary {
    fn new(seed: u64) -> Self {
        let now = Utc::now();
        Self {
            seed,
            subjects: 0,
            subjects_by_diet: BTreeMap::new(),
            variable_subjects: 0,
            weeks: 0,
            placed_items: 0,
            dropped_items: 0,
            started_at: now,
            finished_at: now,
        }
    }

    fn record(&mut self, profile: &ProfileConfig, generated: &GeneratedSubject) {
        self.subjects += 1;
        *self.subjects_by_diet.entry(profile.diet_type).or_insert(0) += 1;
        if generated.subject.is_variable() {
            self.variable_subjects += 1;
        }
        self.weeks += generated.subject.weeks().len() as u64;
        self.placed_items += generated.balance.total_placed() as u64;
        self.dropped_items += generated.balance.total_dropped() as u64;
    }
}

/// Pick the region of a subject
pub fn resolve_region<R: Rng + ?Sized>(selector: &RegionSelector, rng: &mut R) -> &'static str {
    match selector {
        RegionSelector::Fixed(region) => *region,
        RegionSelector::Any => regions::ALL[rng.gen_range(0..regions::ALL.len())],
    }
}

/// Generates subjects from profiles against one taxonomy
#[derive(Debug, Clone)]
pub struct DietGenerator {
    taxonomy: TaxonomyIndex,
    seed: u64,
}

impl DietGenerator {
    /// Create a generator with a master seed
    #[must_use]
    pub const fn new(taxonomy: TaxonomyIndex, seed: u64) -> Self {
        Self { taxonomy, seed }
    }

    /// Master seed
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Taxonomy used for lookups
    #[must_use]
    pub const fn taxonomy(&self) -> &TaxonomyIndex {
        &self.taxonomy
    }

    /// Random stream of one subject: the master seed with the ordinal as stream id
    #[must_use]
    pub fn subject_rng(&self, ordinal: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(ordinal);
        rng
    }

    /// Generate one subject: region, skeleton, allocation, then balancing
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile names a food group absent from
    /// the taxonomy, or `ValueOutOfRange` for an impossible day count
    pub fn generate_subject(
        &self,
        ordinal: u64,
        profile: &ProfileConfig,
    ) -> AppResult<GeneratedSubject> {
        let id = schedule_keys::subject_id(ordinal);
        let mut rng = self.subject_rng(ordinal);

        let region = resolve_region(&profile.region, &mut rng);
        let mut subject = Subject::generate(id.clone(), region, profile, &mut rng)
            .map_err(|e| e.with_subject_id(id.clone()))?;
        let allocation = compute_subject_diet(&mut subject, profile, &self.taxonomy, &mut rng)?;
        let balance = balance_subject_diet(&mut subject, profile, &mut rng);

        debug!(
            subject_id = %id,
            profile = %profile.name,
            region = %region,
            weeks = subject.weeks().len(),
            staged = allocation.total(),
            placed = balance.total_placed(),
            dropped = balance.total_dropped(),
            "Generated subject"
        );

        Ok(GeneratedSubject {
            subject,
            allocation,
            balance,
        })
    }

    /// Generate every subject of a catalog, in profile order.
    ///
    /// Each finished subject goes to `sink`, then `progress` is told how far the
    /// run has come. The first error from either generation or the sink aborts
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns the first generation or sink error
    pub fn generate_population<S, P>(
        &self,
        catalog: &ProfileCatalog,
        mut sink: S,
        mut progress: P,
    ) -> AppResult<GenerationSummary>
    where
        S: FnMut(&Subject) -> AppResult<()>,
        P: FnMut(GenerationProgress<'_>),
    {
        let total = catalog.total_subjects();
        let mut summary = GenerationSummary::new(self.seed);
        let mut ordinal = 0_u64;

        info!(
            seed = self.seed,
            profiles = catalog.profiles.len(),
            subjects = total,
            "Generating population"
        );

        for profile in &catalog.profiles {
            for _ in 0..profile.num_subjects {
                let generated = self.generate_subject(ordinal, profile)?;
                sink(&generated.subject)?;
                summary.record(profile, &generated);
                ordinal += 1;

                info!(
                    subject_id = %generated.subject.id(),
                    profile = %profile.name,
                    diet_type = %profile.diet_type,
                    region = %generated.subject.region(),
                    "Subject generated"
                );
                progress(GenerationProgress {
                    completed: ordinal,
                    total,
                    profile: &profile.name,
                });
            }
        }

        summary.finished_at = Utc::now();
        Ok(summary)
    }
}
