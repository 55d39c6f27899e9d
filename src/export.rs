// ABOUTME: JSON export of generated subjects into numbered dataset directories
// ABOUTME: Creates the first free diet_dataset_NNN directory and writes one file per subject
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{storage_error, AppError, AppResult};
use diet_core::constants::defaults;
use diet_planner::Subject;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Highest dataset directory number tried before giving up
const MAX_DATASET_INDEX: u32 = 999;

/// Render a subject in the export layout
///
/// # Errors
///
/// Returns `SerializationError` if the subject cannot be encoded
pub fn subject_to_json(subject: &Subject, pretty: bool) -> AppResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(subject)
    } else {
        serde_json::to_string(subject)
    };
    encoded.map_err(|e| {
        AppError::serialization(format!("Failed to encode subject {}: {e}", subject.id()))
            .with_subject_id(subject.id())
    })
}

/// Create the first `diet_dataset_NNN` directory that does not exist yet under `base`
///
/// # Errors
///
/// Returns `StorageError` if directories cannot be created or every number is taken
pub fn create_dataset_directory(base: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(base).map_err(|e| storage_error("create", base, e))?;

    for index in 0..=MAX_DATASET_INDEX {
        let candidate = base.join(format!("{}{index:03}", defaults::DATASET_DIR_PREFIX));
        match fs::create_dir(&candidate) {
            Ok(()) => {
                info!(path = %candidate.display(), "Created dataset directory");
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(storage_error("create", &candidate, e)),
        }
    }

    Err(AppError::storage(format!(
        "No free dataset directory left under {}",
        base.display()
    )))
}

/// Writes `Subject_<ID>.json` files into one dataset directory
#[derive(Debug, Clone)]
pub struct SubjectWriter {
    directory: PathBuf,
    pretty: bool,
}

impl SubjectWriter {
    /// Writer targeting an existing directory
    #[must_use]
    pub const fn new(directory: PathBuf, pretty: bool) -> Self {
        Self { directory, pretty }
    }

    /// Target directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File a subject is written to
    #[must_use]
    pub fn path_for(&self, subject_id: &str) -> PathBuf {
        self.directory
            .join(format!("{}{subject_id}.json", defaults::SUBJECT_FILE_PREFIX))
    }

    /// Write one subject, returning the file path
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` or `StorageError` on failure
    pub fn write(&self, subject: &Subject) -> AppResult<PathBuf> {
        let path = self.path_for(subject.id());
        let json = subject_to_json(subject, self.pretty)?;
        fs::write(&path, json).map_err(|e| {
            storage_error("write", &path, e).with_subject_id(subject.id())
        })?;
        debug!(subject_id = %subject.id(), path = %path.display(), "Wrote subject");
        Ok(path)
    }
}
