// ABOUTME: Main library entry point for the synthetic diet generator
// ABOUTME: Wires configuration, logging, input loading, population generation, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Synth
//!
//! Generates synthetic multi-week diet schedules for populations of subjects,
//! for use as nutrition research datasets.
//!
//! ## Architecture
//!
//! - **`diet-core`**: errors, constants, models, and profile configuration types
//! - **`diet-planner`**: the allocation and balancing engine
//! - **This crate**: environment configuration, structured logging, input
//!   loading, the population driver, and JSON export
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diet_synth::config::environment::GeneratorConfig;
//! use diet_synth::errors::AppResult;
//! use diet_synth::export::{create_dataset_directory, SubjectWriter};
//! use diet_synth::generator::DietGenerator;
//! use diet_synth::loaders::{load_profile_catalog, load_taxonomy};
//!
//! fn main() -> AppResult<()> {
//!     let config = GeneratorConfig::from_env()?;
//!     let taxonomy = load_taxonomy(&config.taxonomy_path)?;
//!     let catalog = load_profile_catalog(&config.profiles_path)?;
//!
//!     let generator = DietGenerator::new(taxonomy, config.seed.unwrap_or(42));
//!     let writer = SubjectWriter::new(create_dataset_directory(&config.output_dir)?, true);
//!     let summary = generator.generate_population(
//!         &catalog,
//!         |subject| writer.write(subject).map(|_| ()),
//!         |_| {},
//!     )?;
//!     println!("{} subjects generated", summary.subjects);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Error types shared with the workspace crates
pub mod errors;

/// JSON export of generated schedules
pub mod export;

/// Population driver with per-subject reproducible randomness
pub mod generator;

/// Taxonomy and profile catalog file loading
pub mod loaders;

/// Structured logging setup
pub mod logging;

pub use diet_core::{constants, models};
pub use diet_planner as planner;
