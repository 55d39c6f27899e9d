// ABOUTME: Core types and constants for the synthetic diet generator
// ABOUTME: Foundation crate with error handling, dish and diet models, and profile configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Core
//!
//! Foundation crate providing shared types and constants for synthetic diet
//! generation. It carries no randomness and performs no I/O, so it changes
//! infrequently and the planner and driver crates build on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Limits, region catalog, schedule key formats, environment variable names
//! - **models**: Dish categories, diet types, and nutritional taxonomy rows
//! - **config**: Per-profile generation parameters and food group frequency specs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (dish categories, diet types, taxonomy rows)
pub mod models;

/// Profile configuration (frequency specs, count ranges, regularity)
pub mod config;
