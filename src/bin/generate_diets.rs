// ABOUTME: Command line entry point generating a synthetic diet dataset
// ABOUTME: Loads the taxonomy and profile catalog, generates every subject, and writes JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic diet dataset generator.
//!
//! Usage:
//! ```bash
//! # Generate with the bundled sample inputs
//! cargo run --bin generate-diets
//!
//! # Reproducible run into a custom directory
//! cargo run --bin generate-diets -- --seed 7 --output /tmp/diets
//!
//! # Check the inputs and the generation without writing anything
//! cargo run --bin generate-diets -- --dry-run -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use diet_synth::config::environment::GeneratorConfig;
use diet_synth::export::{create_dataset_directory, SubjectWriter};
use diet_synth::generator::{DietGenerator, GenerationProgress};
use diet_synth::loaders::{load_profile_catalog, load_taxonomy};
use diet_synth::logging::LoggingConfig;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "generate-diets",
    about = "Synthetic diet dataset generator",
    long_about = "Generate multi-week meal schedules for a population of synthetic subjects \
                  described by a profile catalog"
)]
struct GenerateArgs {
    /// Taxonomy table (JSON or YAML); overrides DIET_TAXONOMY_PATH
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Profile catalog (YAML or JSON); overrides DIET_PROFILES_PATH
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Directory receiving the dataset; overrides DIET_OUTPUT_DIR
    #[arg(long)]
    output: Option<PathBuf>,

    /// Master seed for reproducible datasets; overrides DIET_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Generate every subject but write nothing
    #[arg(long)]
    dry_run: bool,
}

impl GenerateArgs {
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(taxonomy) = self.taxonomy {
            config.taxonomy_path = taxonomy;
        }
        if let Some(profiles) = self.profiles {
            config.profiles_path = profiles;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn time_based_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(12345)
}

fn log_progress(progress: GenerationProgress<'_>) {
    if progress.completed == progress.total || progress.completed % 100 == 0 {
        info!(
            completed = progress.completed,
            total = progress.total,
            profile = %progress.profile,
            "Progress"
        );
    }
}

fn main() -> Result<()> {
    let args = GenerateArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let dry_run = args.dry_run;
    let config = args.apply(GeneratorConfig::from_env()?);
    info!("Configuration: {}", config.summary());

    let taxonomy = load_taxonomy(&config.taxonomy_path)
        .with_context(|| format!("Loading taxonomy {}", config.taxonomy_path.display()))?;
    let catalog = load_profile_catalog(&config.profiles_path)
        .with_context(|| format!("Loading profiles {}", config.profiles_path.display()))?;

    let seed = config.seed.unwrap_or_else(time_based_seed);
    info!(seed, "Random seed");
    let generator = DietGenerator::new(taxonomy, seed);

    let summary = if dry_run {
        info!("Dry run: nothing will be written");
        generator.generate_population(&catalog, |_| Ok(()), log_progress)?
    } else {
        let dataset = create_dataset_directory(&config.output_dir)?;
        let writer = SubjectWriter::new(dataset, config.pretty_json);
        generator.generate_population(
            &catalog,
            |subject| writer.write(subject).map(|_| ()),
            log_progress,
        )?
    };

    for (diet_type, count) in &summary.subjects_by_diet {
        info!(diet_type = %diet_type, subjects = count, "Subjects by diet type");
    }
    info!(
        subjects = summary.subjects,
        variable_subjects = summary.variable_subjects,
        weeks = summary.weeks,
        placed_items = summary.placed_items,
        dropped_items = summary.dropped_items,
        elapsed_ms = (summary.finished_at - summary.started_at).num_milliseconds(),
        "Generation complete"
    );

    Ok(())
}
