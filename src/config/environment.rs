// ABOUTME: Environment configuration management for generation runs
// ABOUTME: Reads input paths, output directory, seed, and formatting options from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::errors::{AppError, AppResult};
use diet_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Progress and summaries
    #[default]
    Info,
    /// Per-week and per-day planner events
    Debug,
    /// Everything, including resolver decisions
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local runs
    #[default]
    Development,
    /// Dataset production runs
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Taxonomy table file (JSON or YAML)
    pub taxonomy_path: PathBuf,
    /// Profile catalog file (YAML or JSON)
    pub profiles_path: PathBuf,
    /// Directory receiving the dataset directories
    pub output_dir: PathBuf,
    /// Master seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Indent exported JSON
    pub pretty_json: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from(defaults::TAXONOMY_PATH),
            profiles_path: PathBuf::from(defaults::PROFILES_PATH),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            seed: None,
            pretty_json: true,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config_invalid(format!(
            "Invalid {key} value '{other}': expected true or false"
        ))),
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the seed is not an unsigned integer or the
    /// pretty-print flag is not a boolean
    pub fn from_env() -> AppResult<Self> {
        let seed = match env::var(env_config::SEED) {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::config_invalid(format!(
                    "Invalid {} value '{raw}': {e}",
                    env_config::SEED
                ))
            })?),
            _ => None,
        };

        let config = Self {
            taxonomy_path: PathBuf::from(env_var_or(
                env_config::TAXONOMY_PATH,
                defaults::TAXONOMY_PATH,
            )),
            profiles_path: PathBuf::from(env_var_or(
                env_config::PROFILES_PATH,
                defaults::PROFILES_PATH,
            )),
            output_dir: PathBuf::from(env_var_or(env_config::OUTPUT_DIR, defaults::OUTPUT_DIR)),
            seed,
            pretty_json: parse_bool(
                env_config::PRETTY_JSON,
                &env_var_or(env_config::PRETTY_JSON, "true"),
            )?,
        };

        info!("Configuration loaded from environment");
        Ok(config)
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "taxonomy={} profiles={} output={} seed={} pretty_json={}",
            self.taxonomy_path.display(),
            self.profiles_path.display(),
            self.output_dir.display(),
            self.seed
                .map_or_else(|| "time-based".to_owned(), |seed| seed.to_string()),
            self.pretty_json
        )
    }
}
