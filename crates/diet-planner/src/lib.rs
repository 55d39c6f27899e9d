// ABOUTME: Diet planning engine for synthetic subjects
// ABOUTME: Resolves profiles, allocates food groups to days, and balances days into meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner
//!
//! The two-phase engine that turns a profile into a meal schedule:
//!
//! 1. [`allocator::compute_subject_diet`] samples how many items of each food
//!    group a subject eats every week and stages them on specific days.
//! 2. [`balancer::balance_subject_diet`] moves each day's staged items into meal
//!    slots under capacity and exclusivity rules, then compacts empty slots.
//!
//! Every sampling step draws from a caller-supplied random source, so a seeded
//! generator reproduces a schedule exactly.

/// Weekly allocation of food groups to days
pub mod allocator;
/// Per-day placement of staged items into meal slots
pub mod balancer;
/// Per-week profile resolution from configured ranges
pub mod profile;
/// Subject, week, day, and meal slot data model
pub mod schedule;
/// Index selection with even coverage under over-subscription
pub mod selection;
/// Food group lookup over the nutritional taxonomy
pub mod taxonomy;

pub use allocator::{allocate_week, compute_subject_diet, AllocationReport};
pub use balancer::{balance_day, balance_subject_diet, BalanceLimits, BalanceReport};
pub use profile::{
    resolve_profile, sample_count, sample_range, Frequency, ResolvedEntry, ResolvedProfile,
};
pub use schedule::{Day, ItemBucket, MealSlot, Subject, Week};
pub use selection::select_indices;
pub use taxonomy::{FoodGroup, TaxonomyIndex};
