// ABOUTME: Error re-exports and conversions for filesystem and serialization failures
// ABOUTME: Maps io, JSON, and YAML errors onto AppError codes with path context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `diet-core` so the planner can return them too. This
//! module re-exports them and adds the conversions the outer driver needs.

pub use diet_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};

use serde_json::json;
use std::io;
use std::path::Path;

/// Wrap a filesystem failure on `path`; details carry the action and io error kind
pub fn storage_error(action: &str, path: &Path, error: io::Error) -> AppError {
    AppError::storage(format!("Failed to {action} {}: {error}", path.display()))
        .with_resource_id(path.display().to_string())
        .with_details(json!({
            "action": action,
            "kind": format!("{:?}", error.kind()),
        }))
        .with_source(error)
}

/// Wrap a JSON failure on `path`; details carry the failing line and column
pub fn json_error(path: &Path, error: serde_json::Error) -> AppError {
    AppError::serialization(format!("Invalid JSON in {}: {error}", path.display()))
        .with_resource_id(path.display().to_string())
        .with_details(json!({ "line": error.line(), "column": error.column() }))
        .with_source(error)
}

/// Wrap a YAML failure on `path`; details carry the location when the parser reports one
pub fn yaml_error(path: &Path, error: serde_yaml::Error) -> AppError {
    let details = error.location().map_or_else(
        || json!({}),
        |location| json!({ "line": location.line(), "column": location.column() }),
    );
    AppError::serialization(format!("Invalid YAML in {}: {error}", path.display()))
        .with_resource_id(path.display().to_string())
        .with_details(details)
        .with_source(error)
}
