// ABOUTME: Profile configuration module for diet generation
// ABOUTME: Re-exports profile, frequency, and range configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile configuration (food group frequencies, skeleton ranges, regularity)
pub mod profiles;

pub use profiles::{
    CountRange, FrequencySpec, ProfileCatalog, ProfileConfig, RegionSelector, Regularity,
    TemplateValue,
};
