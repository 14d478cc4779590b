// ABOUTME: Integration tests for loading the CSV catalogs from disk
// ABOUTME: Uses the bundled data directory and temporary files for malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use stretchwell::catalog::{CatalogLoader, CsvCatalog};
use stretchwell::errors::ErrorCode;
use stretchwell::models::{BodyArea, Priority, TimeOfDay};
use stretchwell::recommendations::{CatalogRecommendationProvider, RecommendationProvider};
use stretchwell::test_utils::{create_test_preferences, SAMPLE_EXERCISES_CSV};
use tempfile::TempDir;

fn bundled_catalog() -> CsvCatalog {
    CsvCatalog::from_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[tokio::test]
async fn test_bundled_catalog_is_consistent() {
    let catalog = bundled_catalog();
    let exercises = catalog.load_exercises().await.unwrap();
    let stretches = catalog.load_stretches().await.unwrap();
    assert!(!exercises.is_empty());
    assert!(!stretches.is_empty());

    let exercise_ids: HashSet<&str> = exercises.iter().map(|e| e.exercise_id.as_str()).collect();
    for stretch in &stretches {
        assert!(!matches!(stretch.time_of_day, TimeOfDay::Other(_)), "{}", stretch.stretch_id);
        assert!(!matches!(stretch.priority, Priority::Unknown(_)), "{}", stretch.stretch_id);
        assert!(
            stretch.body_areas.iter().all(|a| !matches!(a, BodyArea::Unrecognized(_))),
            "{}",
            stretch.stretch_id
        );
        for id in &stretch.exercises {
            assert!(exercise_ids.contains(id.as_str()), "{} -> {id}", stretch.stretch_id);
        }
    }
}

#[tokio::test]
async fn test_unreadable_stretch_file_names_the_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("exercises.csv"), SAMPLE_EXERCISES_CSV).unwrap();
    let catalog = CsvCatalog::from_dir(dir.path());

    assert_eq!(catalog.load_exercises().await.unwrap().len(), 5);
    let error = catalog.load_stretches().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogLoadFailed);
    assert!(error
        .context
        .resource_id
        .as_deref()
        .unwrap()
        .ends_with("stretches.csv"));
}

#[tokio::test]
async fn test_missing_column_is_a_load_failure() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("stretches.csv"),
        "stretchId,name,priority\nst-1,No Time Of Day,high\n",
    )
    .unwrap();

    let error = CsvCatalog::from_dir(dir.path())
        .load_stretches()
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogLoadFailed);
}

#[tokio::test]
async fn test_provider_over_bundled_catalog_matches_areas() {
    let provider = CatalogRecommendationProvider::new(Arc::new(bundled_catalog()));
    let prefs = create_test_preferences();

    let stretches = provider.personalized_recommendations(&prefs).await.unwrap();
    assert!(!stretches.is_empty());
    assert!(stretches.iter().all(|s| s.targets_any(&prefs.discomfort_areas)));

    let exercises = provider
        .exercises_for_body_areas(&[BodyArea::Eyes])
        .await
        .unwrap();
    assert!(exercises.iter().all(|e| e.body_areas.contains(&BodyArea::Eyes)));
    assert_eq!(exercises.len(), 2);
}
