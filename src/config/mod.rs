// ABOUTME: Configuration module for generator settings and profile definitions
// ABOUTME: Environment-driven run settings plus re-exported profile catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for generation runs
//!
//! - **Environment**: paths, seed, and output options from environment variables
//! - **Profiles**: typed profile catalog, defined in `diet-core`

/// Environment-based run configuration
pub mod environment;

pub use diet_core::config::{
    CountRange, FrequencySpec, ProfileCatalog, ProfileConfig, RegionSelector, Regularity,
    TemplateValue,
};
pub use environment::{Environment, GeneratorConfig, LogLevel};
