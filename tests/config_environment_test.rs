// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates generator settings from environment variables and level parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use diet_core::constants::env_config;
use diet_synth::config::environment::{Environment, GeneratorConfig, LogLevel};
use diet_synth::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 5] = [
    env_config::TAXONOMY_PATH,
    env_config::PROFILES_PATH,
    env_config::OUTPUT_DIR,
    env_config::SEED,
    env_config::PRETTY_JSON,
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_generator_config_defaults() {
    clear_vars();

    let config = GeneratorConfig::from_env().unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.taxonomy_path, PathBuf::from("data/taxonomy.json"));
    assert_eq!(config.profiles_path, PathBuf::from("data/profiles.yaml"));
    assert_eq!(config.output_dir, PathBuf::from("output"));
    assert_eq!(config.seed, None);
    assert!(config.pretty_json);
    assert!(config.summary().contains("seed=time-based"));
}

#[test]
#[serial]
fn test_generator_config_overrides() {
    clear_vars();
    env::set_var(env_config::TAXONOMY_PATH, "/tmp/taxonomy.yaml");
    env::set_var(env_config::PROFILES_PATH, "/tmp/profiles.json");
    env::set_var(env_config::OUTPUT_DIR, "/tmp/diets");
    env::set_var(env_config::SEED, " 1234 ");
    env::set_var(env_config::PRETTY_JSON, "off");

    let config = GeneratorConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.taxonomy_path, PathBuf::from("/tmp/taxonomy.yaml"));
    assert_eq!(config.profiles_path, PathBuf::from("/tmp/profiles.json"));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/diets"));
    assert_eq!(config.seed, Some(1234));
    assert!(!config.pretty_json);
    assert!(config.summary().contains("seed=1234"));
}

#[test]
#[serial]
fn test_empty_seed_means_time_based() {
    clear_vars();
    env::set_var(env_config::SEED, "");

    let config = GeneratorConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.seed, None);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_vars();
    env::set_var(env_config::SEED, "-5");
    let error = GeneratorConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_vars();
    env::set_var(env_config::PRETTY_JSON, "sometimes");
    let error = GeneratorConfig::from_env().unwrap_err();
    clear_vars();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
