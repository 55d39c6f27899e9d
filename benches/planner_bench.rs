// ABOUTME: Criterion benchmarks for diet planning and subject export
// ABOUTME: Measures index selection, full subject generation per profile, and JSON encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planner.
//!
//! Uses the bundled taxonomy and profile catalog under `data/`.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use diet_core::config::ProfileCatalog;
use diet_planner::{balance_subject_diet, compute_subject_diet, select_indices, Subject};
use diet_synth::export::subject_to_json;
use diet_synth::generator::DietGenerator;
use diet_synth::loaders::{load_profile_catalog, load_taxonomy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

const SEED: u64 = 42;

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn load_inputs() -> (DietGenerator, ProfileCatalog) {
    let taxonomy = load_taxonomy(&data_file("taxonomy.json")).unwrap();
    let catalog = load_profile_catalog(&data_file("profiles.yaml")).unwrap();
    (DietGenerator::new(taxonomy, SEED), catalog)
}

fn bench_select_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_indices");
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    for (num, freq) in [(7, 3), (7, 12), (40, 25), (40, 400)] {
        group.throughput(Throughput::Elements(freq as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{num}x{freq}")),
            &(num, freq),
            |b, &(num, freq)| {
                b.iter(|| select_indices(black_box(num), black_box(freq), 1, &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_generate_subject(c: &mut Criterion) {
    let (generator, catalog) = load_inputs();
    let mut group = c.benchmark_group("generate_subject");

    for profile in &catalog.profiles {
        group.bench_with_input(
            BenchmarkId::from_parameter(&profile.name),
            profile,
            |b, profile| {
                let mut ordinal = 0_u64;
                b.iter(|| {
                    ordinal += 1;
                    generator.generate_subject(black_box(ordinal), profile).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_allocate_and_balance(c: &mut Criterion) {
    let (generator, catalog) = load_inputs();
    let profile = &catalog.profiles[0];
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let skeleton = Subject::generate("000000", "EUROPE", profile, &mut rng).unwrap();

    c.bench_function("allocate_and_balance", |b| {
        b.iter(|| {
            let mut subject = skeleton.clone();
            compute_subject_diet(&mut subject, profile, generator.taxonomy(), &mut rng).unwrap();
            black_box(balance_subject_diet(&mut subject, profile, &mut rng))
        });
    });
}

fn bench_subject_export(c: &mut Criterion) {
    let (generator, catalog) = load_inputs();
    let generated = generator.generate_subject(0, &catalog.profiles[0]).unwrap();
    let encoded = subject_to_json(&generated.subject, false).unwrap();

    let mut group = c.benchmark_group("subject_to_json");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("compact", |b| {
        b.iter(|| subject_to_json(black_box(&generated.subject), false).unwrap());
    });
    group.bench_function("pretty", |b| {
        b.iter(|| subject_to_json(black_box(&generated.subject), true).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_select_indices,
    bench_generate_subject,
    bench_allocate_and_balance,
    bench_subject_export,
);
criterion_main!(benches);
