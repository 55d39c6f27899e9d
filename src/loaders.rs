// ABOUTME: File loaders for the nutritional taxonomy table and the profile catalog
// ABOUTME: Picks JSON or YAML by file extension and validates what it reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{json_error, storage_error, yaml_error, AppError, AppResult};
use diet_core::config::ProfileCatalog;
use diet_core::models::{DishCategory, TaxonomyRow};
use diet_planner::TaxonomyIndex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialization format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl InputFormat {
    /// Format implied by a file extension
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any other extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(AppError::invalid_input(format!(
                "Unsupported input file {}: expected .json, .yaml, or .yml",
                path.display()
            ))
            .with_resource_id(path.display().to_string())),
        }
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| storage_error("read", path, e))?;
    parse_document(&content, format).map_err(|error| match error {
        DocumentError::Json(e) => json_error(path, e),
        DocumentError::Yaml(e) => yaml_error(path, e),
    })
}

enum DocumentError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl DocumentError {
    fn message(&self) -> String {
        match self {
            Self::Json(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
        }
    }
}

/// Attach the file path unless a more specific resource is already named
fn with_path(error: AppError, path: &Path) -> AppError {
    if error.context.resource_id.is_some() {
        error
    } else {
        error.with_resource_id(path.display().to_string())
    }
}

fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: InputFormat,
) -> Result<T, DocumentError> {
    match format {
        InputFormat::Json => serde_json::from_str(content).map_err(DocumentError::Json),
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(DocumentError::Yaml),
    }
}

/// Taxonomy row as written in the input file, before validation
#[derive(Debug, Deserialize)]
struct RawTaxonomyRow {
    root: String,
    category: String,
    subcategory: String,
    nutritional_level: i64,
    dish_type: String,
}

impl TryFrom<RawTaxonomyRow> for TaxonomyRow {
    type Error = AppError;

    fn try_from(raw: RawTaxonomyRow) -> Result<Self, Self::Error> {
        let dish_type: DishCategory = raw
            .dish_type
            .parse()
            .map_err(|e: AppError| e.with_resource_id(raw.subcategory.clone()))?;
        let nutritional_level = u8::try_from(raw.nutritional_level).map_err(|_| {
            AppError::value_out_of_range(format!(
                "Nutritional level {} of '{}' is not a valid level",
                raw.nutritional_level, raw.subcategory
            ))
            .with_resource_id(raw.subcategory.clone())
        })?;

        let row = Self {
            root: raw.root,
            category: raw.category,
            subcategory: raw.subcategory,
            nutritional_level,
            dish_type,
        };
        row.validate()?;
        Ok(row)
    }
}

/// Parse taxonomy rows from a document already in memory
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown dish type, `ValueOutOfRange` for a
/// nutritional level outside 1..=6, or `SerializationError` for malformed content
pub fn parse_taxonomy(content: &str, format: InputFormat) -> AppResult<TaxonomyIndex> {
    let raw: Vec<RawTaxonomyRow> = parse_document(content, format).map_err(|error| {
        AppError::serialization(format!("Invalid taxonomy document: {}", error.message()))
    })?;
    rows_to_index(raw)
}

fn rows_to_index(raw: Vec<RawTaxonomyRow>) -> AppResult<TaxonomyIndex> {
    let rows = raw
        .into_iter()
        .map(TaxonomyRow::try_from)
        .collect::<AppResult<Vec<_>>>()?;
    TaxonomyIndex::new(rows)
}

/// Load and index the taxonomy table
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, `SerializationError` if it
/// is not a valid document, or the row validation errors of [`parse_taxonomy`]
pub fn load_taxonomy(path: &Path) -> AppResult<TaxonomyIndex> {
    let raw: Vec<RawTaxonomyRow> = read_document(path)?;
    let index = rows_to_index(raw).map_err(|e| with_path(e, path))?;

    info!(
        path = %path.display(),
        rows = index.len(),
        "Loaded taxonomy table"
    );
    Ok(index)
}

/// Parse and validate a profile catalog from a document already in memory
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed profile values and the validation
/// errors of [`ProfileCatalog::validate`]
pub fn parse_profile_catalog(content: &str, format: InputFormat) -> AppResult<ProfileCatalog> {
    let catalog: ProfileCatalog = parse_document(content, format).map_err(|error| {
        AppError::invalid_format(format!("Malformed profile catalog: {}", error.message()))
    })?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load and validate the profile catalog
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, `InvalidFormat` for
/// malformed profile values, or `ConfigInvalid`/`ConfigMissing` when the
/// catalog is inconsistent
pub fn load_profile_catalog(path: &Path) -> AppResult<ProfileCatalog> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| storage_error("read", path, e))?;
    let catalog = parse_profile_catalog(&content, format).map_err(|e| with_path(e, path))?;

    info!(
        path = %path.display(),
        profiles = catalog.profiles.len(),
        subjects = catalog.total_subjects(),
        "Loaded profile catalog"
    );
    Ok(catalog)
}
