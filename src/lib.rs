// ABOUTME: Main library entry point for the Stretch-Well wellness questionnaire and dashboard
// ABOUTME: Questionnaire flow, catalog loading, preference storage and dashboard composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stretch-Well
//!
//! A stretching and mobility companion. A seven-question questionnaire captures
//! how the user spends the day and where they feel tension; the answers are
//! normalized into a [`UserPreferences`](stretchwell_core::models::UserPreferences)
//! record and saved. The dashboard then selects one stretch per time of day from
//! a static CSV catalog, groups the discomfort areas into focus tiers, and lists
//! exercises targeting them.
//!
//! ## Architecture
//!
//! - **`stretchwell-core`**: models, constants and error types
//! - **`stretchwell-intelligence`**: pure selection, tiering and formatting rules
//! - **This crate**: questionnaire navigation, catalog and store IO, dashboard
//!   composition, configuration, logging and output formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stretchwell::catalog::CsvCatalog;
//! use stretchwell::dashboard::{Dashboard, DashboardOutcome};
//! use stretchwell::recommendations::CatalogRecommendationProvider;
//! use stretchwell::store::JsonFileStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Arc::new(CsvCatalog::from_dir("data"));
//!     let dashboard = Dashboard::new(
//!         Arc::new(JsonFileStore::new("user_preferences.json")),
//!         Arc::new(CatalogRecommendationProvider::new(catalog)),
//!     );
//!
//!     match dashboard.build().await {
//!         DashboardOutcome::Ready(view) => println!("{}", view.greeting),
//!         DashboardOutcome::RedirectToQuestionnaire => println!("Take the questionnaire first"),
//!     }
//! }
//! ```

/// CSV catalog loading
pub mod catalog;

/// Environment configuration
pub mod config;

/// Dashboard view-model composition
pub mod dashboard;

/// Error types
pub mod errors;

/// Text and JSON output
pub mod formatters;

/// Tracing subscriber setup
pub mod logging;

/// Questionnaire slides, navigation and normalization
pub mod questionnaire;

/// Personalized recommendation provider
pub mod recommendations;

/// Single-slot preference storage
pub mod store;

/// Test data builders shared by unit and integration tests
pub mod test_utils;

pub use stretchwell_core::{constants, models};
pub use stretchwell_intelligence as intelligence;
