// ABOUTME: Profile configuration for synthetic subjects and their food group frequencies
// ABOUTME: Parses template values ("-", "0", "3", "1-3") into typed frequency specs and ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration profiles describing how a population of subjects eats.
//!
//! A profile carries two kinds of values. Skeleton ranges (`days_week`,
//! `num_meals`, the main dish caps) are always `[min, max]` pairs sampled by the
//! planner. Food group entries are [`FrequencySpec`]s, which additionally
//! allow the two sentinels of the profile templates: unset (`-`, or `-1`) and
//! disabled (`0`).
//!
//! Every value accepts the template spelling (`"2-4"`), a bare integer, or a
//! two-element array.

use crate::constants::limits::{MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};
use crate::constants::regions;
use crate::errors::{AppError, AppResult};
use crate::models::DietType;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use indexmap::IndexMap;
use std::fmt;

/// Sentinel used by the templates for "not configured"
const UNSET_SENTINEL: i64 = -1;

/// Raw template value before interpretation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TemplateValue {
    /// Bare integer, `-1` meaning unset
    Int(i64),
    /// Two-element `[min, max]` array
    Pair([i64; 2]),
    /// Template spelling: `-`, `N`, or `A-B`
    Text(String),
}

impl TemplateValue {
    /// Interpret the value as an inclusive `(min, max)` pair; `-` becomes `(-1, -1)`
    fn bounds(&self) -> AppResult<(i64, i64)> {
        match self {
            Self::Int(value) => Ok((*value, *value)),
            Self::Pair([min, max]) => Ok((*min, *max)),
            Self::Text(text) => parse_template_text(text),
        }
    }
}

fn parse_template_text(text: &str) -> AppResult<(i64, i64)> {
    let trimmed = text.trim();
    if trimmed == "-" {
        return Ok((UNSET_SENTINEL, UNSET_SENTINEL));
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok((value, value));
    }
    let parsed = trimmed.split_once('-').and_then(|(min, max)| {
        let min = min.trim().parse::<i64>().ok()?;
        let max = max.trim().parse::<i64>().ok()?;
        Some((min, max))
    });
    parsed.ok_or_else(|| AppError::invalid_format(format!("The value {text} is not valid")))
}

fn to_u32(value: i64, what: &str) -> AppResult<u32> {
    u32::try_from(value)
        .map_err(|_| AppError::value_out_of_range(format!("{what} value {value} is negative")))
}

/// Per food group frequency as written in a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateValue", into = "String")]
pub enum FrequencySpec {
    /// Not configured (`-` or `-1`); the group never appears
    Unset,
    /// Explicitly disabled (`0`); the group never appears
    Disabled,
    /// Exactly this many items
    Fixed(u32),
    /// Uniformly sampled from the inclusive range
    Range {
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },
}

impl FrequencySpec {
    /// Interpret an inclusive pair using the template sentinels
    ///
    /// # Errors
    ///
    /// Returns an error for negative bounds other than the unset sentinel or for `min > max`
    pub fn from_bounds(min: i64, max: i64) -> AppResult<Self> {
        if min == UNSET_SENTINEL && max == UNSET_SENTINEL {
            return Ok(Self::Unset);
        }
        let (min, max) = (to_u32(min, "Frequency")?, to_u32(max, "Frequency")?);
        if min > max {
            return Err(AppError::invalid_format(format!(
                "Frequency range {min}-{max} has its minimum above its maximum"
            )));
        }
        Ok(match (min, max) {
            (0, 0) => Self::Disabled,
            (min, max) if min == max => Self::Fixed(min),
            (min, max) => Self::Range { min, max },
        })
    }

    /// Inclusive bounds, or `None` for the sentinels
    #[must_use]
    pub const fn bounds(&self) -> Option<(u32, u32)> {
        match *self {
            Self::Unset | Self::Disabled => None,
            Self::Fixed(value) => Some((value, value)),
            Self::Range { min, max } => Some((min, max)),
        }
    }
}

impl TryFrom<TemplateValue> for FrequencySpec {
    type Error = AppError;

    fn try_from(raw: TemplateValue) -> Result<Self, Self::Error> {
        let (min, max) = raw.bounds()?;
        Self::from_bounds(min, max)
    }
}

impl fmt::Display for FrequencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("-"),
            Self::Disabled => f.write_str("0"),
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

impl From<FrequencySpec> for String {
    fn from(spec: FrequencySpec) -> Self {
        spec.to_string()
    }
}

/// Inclusive range used for skeleton sizes and caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateValue", into = "String")]
pub struct CountRange {
    /// Inclusive lower bound
    pub min: u32,
    /// Inclusive upper bound
    pub max: u32,
}

impl CountRange {
    /// Create a range, rejecting `min > max`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the bounds are inverted
    pub fn new(min: u32, max: u32) -> AppResult<Self> {
        if min > max {
            return Err(AppError::invalid_format(format!(
                "Range {min}-{max} has its minimum above its maximum"
            )));
        }
        Ok(Self { min, max })
    }

    /// A range holding a single value
    #[must_use]
    pub const fn exactly(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

impl TryFrom<TemplateValue> for CountRange {
    type Error = AppError;

    fn try_from(raw: TemplateValue) -> Result<Self, Self::Error> {
        let (min, max) = raw.bounds()?;
        Self::new(to_u32(min, "Range")?, to_u32(max, "Range")?)
    }
}

impl From<CountRange> for String {
    fn from(range: CountRange) -> Self {
        if range.min == range.max {
            range.min.to_string()
        } else {
            format!("{}-{}", range.min, range.max)
        }
    }
}

/// How many weeks a subject follows its primary and secondary profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regularity {
    /// Weeks following the primary profile
    pub weeks: u32,
    /// Extra weeks, placed at random, following the secondary profile
    #[serde(default)]
    pub irregular_weeks: u32,
}

/// Region assignment policy of a profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum RegionSelector {
    /// Uniformly random region per subject
    #[default]
    Any,
    /// Every subject gets this catalog region
    Fixed(&'static str),
}

impl TryFrom<String> for RegionSelector {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(regions::ANY) {
            return Ok(Self::Any);
        }
        regions::find(&value)
            .map(Self::Fixed)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown region '{value}'")))
    }
}

// Catalog regions are `&'static str`, so the derive would tie `'de` to `'static`
impl<'de> Deserialize<'de> for RegionSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw).map_err(DeError::custom)
    }
}

impl From<RegionSelector> for String {
    fn from(selector: RegionSelector) -> Self {
        match selector {
            RegionSelector::Any => regions::ANY.to_owned(),
            RegionSelector::Fixed(region) => region.to_owned(),
        }
    }
}

const fn default_num_subjects() -> u32 {
    1
}

/// Accept `none`/`None` as "no secondary profile", as the templates spell it
fn deserialize_secondary<'de, D>(deserializer: D) -> Result<Option<DietType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("" | "none" | "None" | "NONE") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(DeError::custom),
    }
}

/// Generation parameters for one named profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile name, used in logs and summaries
    pub name: String,
    /// Primary diet type
    pub diet_type: DietType,
    /// Number of subjects generated from this profile
    #[serde(default = "default_num_subjects")]
    pub num_subjects: u32,
    /// Region assignment policy
    #[serde(default)]
    pub region: RegionSelector,
    /// Days per week, sampled per week
    pub days_week: CountRange,
    /// Meal slots per day, sampled per day
    pub num_meals: CountRange,
    /// Meals allowed to hold main dishes, sampled once per subject
    pub max_meals_with_main_dishes: CountRange,
    /// Main dishes allowed per meal, sampled once per subject
    pub max_main_dishes_per_meal: CountRange,
    /// Week counts
    pub regularity: Regularity,
    /// Subject alternates to a secondary profile on irregular weeks
    #[serde(default)]
    pub variable: bool,
    /// Secondary diet type; chosen at random per subject when absent
    #[serde(default, deserialize_with = "deserialize_secondary")]
    pub secondary_profile: Option<DietType>,
    /// Food group key to frequency, in file order. Staging follows this order,
    /// so earlier groups win scarce meal slots.
    pub food_groups: IndexMap<String, FrequencySpec>,
}

impl ProfileConfig {
    /// Whether subjects of this profile alternate diet types across weeks
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        self.variable || self.secondary_profile.is_some()
    }

    /// Total weeks generated for one subject
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        if self.is_variable() {
            self.regularity.weeks + self.regularity.irregular_weeks
        } else {
            self.regularity.weeks
        }
    }

    /// Check internal consistency of the profile
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first inconsistency found
    pub fn validate(&self) -> AppResult<()> {
        let invalid = |message: String| {
            Err(AppError::config_invalid(message).with_resource_id(self.name.clone()))
        };

        for (label, range) in [
            ("days_week", self.days_week),
            ("num_meals", self.num_meals),
            ("max_meals_with_main_dishes", self.max_meals_with_main_dishes),
            ("max_main_dishes_per_meal", self.max_main_dishes_per_meal),
        ] {
            if range.min > range.max {
                return invalid(format!("{label} has its minimum above its maximum"));
            }
        }
        if self.days_week.min < MIN_DAYS_PER_WEEK || self.days_week.max > MAX_DAYS_PER_WEEK {
            return invalid(format!(
                "days_week must stay within {MIN_DAYS_PER_WEEK}-{MAX_DAYS_PER_WEEK}"
            ));
        }
        if self.num_meals.min == 0 {
            return invalid("num_meals must allow at least one meal per day".to_owned());
        }
        if self.regularity.weeks == 0 {
            return invalid("regularity.weeks must be at least 1".to_owned());
        }
        if self.secondary_profile == Some(self.diet_type) {
            return invalid("secondary_profile must differ from diet_type".to_owned());
        }
        for (key, spec) in &self.food_groups {
            if let FrequencySpec::Range { min, max } = spec {
                if min > max {
                    return invalid(format!("food group '{key}' has an inverted range"));
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of profiles making up one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    /// Profiles, generated in this order
    pub profiles: Vec<ProfileConfig>,
}

impl ProfileCatalog {
    /// Validate every profile and reject duplicate names
    ///
    /// # Errors
    ///
    /// Returns the first validation error found
    pub fn validate(&self) -> AppResult<()> {
        if self.profiles.is_empty() {
            return Err(AppError::config_missing("Profile catalog holds no profiles"));
        }
        for (index, profile) in self.profiles.iter().enumerate() {
            profile.validate()?;
            if self.profiles[..index].iter().any(|p| p.name == profile.name) {
                return Err(AppError::config_invalid(format!(
                    "Duplicate profile name '{}'",
                    profile.name
                )));
            }
        }
        Ok(())
    }

    /// Number of subjects across all profiles
    #[must_use]
    pub fn total_subjects(&self) -> u64 {
        self.profiles.iter().map(|p| u64::from(p.num_subjects)).sum()
    }

    /// Look up a profile by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.iter().find(|p| p.name == name)
    }
}
