// ABOUTME: Configuration module for catalog locations and the preference store path
// ABOUTME: Environment-only configuration with CLI flag overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Stretch-Well
//!
//! There is no configuration file. Everything is read from environment
//! variables with defaults that work from a source checkout:
//!
//! - **Catalog**: directory and file names of the exercise and stretch CSVs
//! - **Store**: location of the single-slot preference file

/// Environment variable configuration
pub mod environment;

pub use environment::{AppConfig, CatalogConfig, StoreConfig};
