// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Limits, region catalog, schedule key formats, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Hard limits on the schedule skeleton
pub mod limits {
    /// A week never holds more days than this
    pub const MAX_DAYS_PER_WEEK: u32 = 7;
    /// Lowest valid day count for a week
    pub const MIN_DAYS_PER_WEEK: u32 = 1;
    /// Lowest nutritional level in the taxonomy
    pub const MIN_NUTRITIONAL_LEVEL: u8 = 1;
    /// Highest nutritional level in the taxonomy
    pub const MAX_NUTRITIONAL_LEVEL: u8 = 6;
    /// Food groups at or above this level are resampled per day
    pub const DAILY_TIER_MIN_LEVEL: u8 = 5;
}

/// Territorial regions a subject can be assigned to
pub mod regions {
    /// Region used when a dish has no regional variant
    pub const INTERNATIONAL: &str = "INTERNATIONAL";

    /// Full region catalog, in the order used for random assignment
    pub const ALL: [&str; 7] = [
        INTERNATIONAL,
        "CENTRAL ASIA",
        "EAST AND SOUTHEAST ASIA",
        "EUROPE",
        "LATIN AMERICA AND THE CARIBBEAN",
        "NORTH AFRICA AND WEST ASIA",
        "NORTH AMERICA",
    ];

    /// Selector value that asks for a random region per subject
    pub const ANY: &str = "all";

    /// Look up a region by name, ignoring case
    #[must_use]
    pub fn find(name: &str) -> Option<&'static str> {
        ALL.iter()
            .copied()
            .find(|region| region.eq_ignore_ascii_case(name.trim()))
    }
}

/// Key formats for the exported schedule tree
pub mod schedule_keys {
    /// Week key, e.g. `week_3`
    #[must_use]
    pub fn week(number: usize) -> String {
        format!("week_{number}")
    }

    /// Day key, zero padded to two digits, e.g. `day_04`
    #[must_use]
    pub fn day(number: usize) -> String {
        format!("day_{number:02}")
    }

    /// Meal key, e.g. `meal_2`
    #[must_use]
    pub fn meal(number: usize) -> String {
        format!("meal_{number}")
    }

    /// Subject identifier, zero padded to six digits
    #[must_use]
    pub fn subject_id(ordinal: u64) -> String {
        format!("{ordinal:06}")
    }
}

/// Environment variable names read by the generator configuration
pub mod env_config {
    /// Path to the nutritional taxonomy table
    pub const TAXONOMY_PATH: &str = "DIET_TAXONOMY_PATH";
    /// Path to the profile catalog
    pub const PROFILES_PATH: &str = "DIET_PROFILES_PATH";
    /// Directory that receives generated datasets
    pub const OUTPUT_DIR: &str = "DIET_OUTPUT_DIR";
    /// Master random seed
    pub const SEED: &str = "DIET_SEED";
    /// Pretty-print exported JSON
    pub const PRETTY_JSON: &str = "DIET_PRETTY_JSON";
}

/// Default values for generator configuration
pub mod defaults {
    /// Default taxonomy table location
    pub const TAXONOMY_PATH: &str = "data/taxonomy.json";
    /// Default profile catalog location
    pub const PROFILES_PATH: &str = "data/profiles.yaml";
    /// Default output directory
    pub const OUTPUT_DIR: &str = "output";
    /// Prefix of generated dataset directories
    pub const DATASET_DIR_PREFIX: &str = "diet_dataset_";
    /// Prefix of per-subject schedule files
    pub const SUBJECT_FILE_PREFIX: &str = "Subject_";
}

/// Service identification for structured logging
pub mod service_names {
    /// Name of the generator service
    pub const DIET_GENERATOR: &str = "diet-synth";
}
