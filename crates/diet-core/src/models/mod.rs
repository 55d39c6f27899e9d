// ABOUTME: Core data models for synthetic diet generation
// ABOUTME: Re-exports dish categories, diet types, and nutritional taxonomy rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `DishCategory`: the seven placement classes a scheduled item belongs to
//! - `DietType`: the nutritional archetype labelling a subject or a week
//! - `TaxonomyRow`: one row of the nutritional level taxonomy
//! - `AllocationTier`: weekly pooling versus daily resampling, chosen by level

mod diet;
mod dish;
mod taxonomy;

pub use diet::DietType;
pub use dish::DishCategory;
pub use taxonomy::{AllocationTier, TaxonomyRow};
