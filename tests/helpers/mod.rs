// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports taxonomy and profile fixtures with seeded random sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
