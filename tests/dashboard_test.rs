// ABOUTME: Integration tests for dashboard composition over a CSV catalog and saved preferences
// ABOUTME: Covers the redirect, the personalized view and degraded views on load failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use stretchwell::catalog::CsvCatalog;
use stretchwell::constants::messages::RECOMMENDATIONS_UNAVAILABLE;
use stretchwell::dashboard::{Dashboard, DashboardOutcome, DashboardView};
use stretchwell::errors::{AppError, AppResult};
use stretchwell::formatters::{format_output, OutputFormat};
use stretchwell::intelligence::FocusTier;
use stretchwell::models::{BodyArea, ExerciseRecord, StretchRecord, TimeBucket, UserPreferences};
use stretchwell::recommendations::{CatalogRecommendationProvider, RecommendationProvider};
use stretchwell::store::{InMemoryStore, PreferenceStore};
use stretchwell::test_utils::{
    create_test_preferences, create_test_stretch, SAMPLE_EXERCISES_CSV, SAMPLE_STRETCHES_CSV,
};
use tempfile::TempDir;

fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 3)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap()
}

fn sample_catalog(dir: &TempDir) -> Arc<CsvCatalog> {
    std::fs::write(dir.path().join("exercises.csv"), SAMPLE_EXERCISES_CSV).unwrap();
    std::fs::write(dir.path().join("stretches.csv"), SAMPLE_STRETCHES_CSV).unwrap();
    Arc::new(CsvCatalog::from_dir(dir.path()))
}

fn dashboard_over(dir: &TempDir, preferences: Option<UserPreferences>) -> Dashboard {
    let store = preferences.map_or_else(InMemoryStore::new, InMemoryStore::with_preferences);
    Dashboard::new(
        Arc::new(store),
        Arc::new(CatalogRecommendationProvider::new(sample_catalog(dir))),
    )
}

async fn ready(dashboard: &Dashboard, now: NaiveDateTime) -> DashboardView {
    match dashboard.build_at(now).await {
        DashboardOutcome::Ready(view) => *view,
        DashboardOutcome::RedirectToQuestionnaire => panic!("expected a dashboard"),
    }
}

#[tokio::test]
async fn test_missing_preferences_redirects() {
    let dir = TempDir::new().unwrap();
    let dashboard = dashboard_over(&dir, None);
    assert_eq!(
        dashboard.build_at(monday_at(9)).await,
        DashboardOutcome::RedirectToQuestionnaire
    );
}

#[tokio::test]
async fn test_personalized_dashboard() {
    let dir = TempDir::new().unwrap();
    let dashboard = dashboard_over(&dir, Some(create_test_preferences()));
    let view = ready(&dashboard, monday_at(8)).await;

    assert_eq!(view.greeting, "Good Morning, Wellness Seeker");
    assert_eq!(view.date_label, "Monday, March 3");
    assert_eq!(
        view.title.as_deref(),
        Some("Your personalized 5 exercise routine (10-15 minutes) focusing on Neck")
    );
    assert!(!view.no_recommendations);
    assert!(view.banners.is_empty());

    let daily: Vec<(&str, TimeBucket)> = view
        .daily_stretches
        .iter()
        .map(|d| (d.stretch.stretch_id.as_str(), d.bucket))
        .collect();
    assert_eq!(
        daily,
        vec![
            ("st-1", TimeBucket::Morning),
            ("st-2", TimeBucket::Midday),
            ("st-4", TimeBucket::Evening),
        ]
    );

    let labels: Vec<(&str, FocusTier)> = view
        .focus_tags
        .iter()
        .map(|t| (t.label.as_str(), t.tier))
        .collect();
    assert_eq!(
        labels,
        vec![("Neck", FocusTier::Primary), ("Shoulders", FocusTier::Primary)]
    );

    let exercises: Vec<&str> = view
        .targeted_exercises
        .iter()
        .map(|t| t.exercise.exercise_id.as_str())
        .collect();
    assert_eq!(exercises, vec!["ex-1", "ex-2"]);
    assert_eq!(view.targeted_exercises[1].area_tags, vec!["Shoulders", "Neck"]);
}

#[tokio::test]
async fn test_no_discomfort_areas_shows_general_wellness() {
    let dir = TempDir::new().unwrap();
    let mut prefs = create_test_preferences();
    prefs.discomfort_areas.clear();
    prefs.username = Some("Alex".to_owned());
    let view = ready(&dashboard_over(&dir, Some(prefs)), monday_at(23)).await;

    assert_eq!(view.greeting, "Good Night, Alex");
    assert!(view.no_recommendations);
    assert!(view.title.is_none());
    assert!(view.targeted_exercises.is_empty());
    assert_eq!(view.focus_tags.len(), 1);
    assert_eq!(view.focus_tags[0].label, "General Wellness");
}

#[tokio::test]
async fn test_targeted_exercises_are_capped_at_three() {
    let dir = TempDir::new().unwrap();
    let mut prefs = create_test_preferences();
    prefs.discomfort_areas = vec![
        BodyArea::Neck,
        BodyArea::Shoulders,
        BodyArea::LowerBack,
        BodyArea::Wrists,
    ];
    let view = ready(&dashboard_over(&dir, Some(prefs)), monday_at(13)).await;
    assert_eq!(view.targeted_exercises.len(), 3);
    assert_eq!(view.greeting, "Good Afternoon, Wellness Seeker");
}

#[tokio::test]
async fn test_missing_catalog_degrades_with_banner() {
    let dir = TempDir::new().unwrap();
    let provider = CatalogRecommendationProvider::new(Arc::new(CsvCatalog::from_dir(dir.path())));
    let dashboard = Dashboard::new(
        Arc::new(InMemoryStore::with_preferences(create_test_preferences())),
        Arc::new(provider),
    );
    let view = ready(&dashboard, monday_at(19)).await;

    assert_eq!(view.banners, vec![RECOMMENDATIONS_UNAVAILABLE]);
    assert!(view.no_recommendations);
    assert!(view.daily_stretches.is_empty());
    assert!(view.targeted_exercises.is_empty());
}

struct UnreadableStore;

#[async_trait]
impl PreferenceStore for UnreadableStore {
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>> {
        Err(AppError::storage("permission denied"))
    }

    async fn save_preferences(&self, _preferences: &UserPreferences) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_unreadable_store_redirects() {
    let dir = TempDir::new().unwrap();
    let dashboard = Dashboard::new(
        Arc::new(UnreadableStore),
        Arc::new(CatalogRecommendationProvider::new(sample_catalog(&dir))),
    );
    assert_eq!(dashboard.build().await, DashboardOutcome::RedirectToQuestionnaire);
}

struct ExercisesUnavailable;

#[async_trait]
impl RecommendationProvider for ExercisesUnavailable {
    async fn personalized_recommendations(
        &self,
        _preferences: &UserPreferences,
    ) -> AppResult<Vec<StretchRecord>> {
        Ok(vec![create_test_stretch(
            "only",
            &[BodyArea::Neck],
            "easy",
            "evening",
            "high",
        )])
    }

    async fn exercises_for_body_areas(
        &self,
        _areas: &[BodyArea],
    ) -> AppResult<Vec<ExerciseRecord>> {
        Err(AppError::catalog("exercises.csv is unreadable"))
    }
}

#[tokio::test]
async fn test_exercise_failure_is_not_a_banner() {
    let dashboard = Dashboard::new(
        Arc::new(InMemoryStore::with_preferences(create_test_preferences())),
        Arc::new(ExercisesUnavailable),
    );
    let view = ready(&dashboard, monday_at(20)).await;

    assert!(view.banners.is_empty());
    assert!(view.targeted_exercises.is_empty());
    assert_eq!(view.daily_stretches.len(), 1);
    assert_eq!(view.daily_stretches[0].display_time_of_day(), "Evening");
}

#[tokio::test]
async fn test_dashboard_renders_as_text_and_json() {
    let dir = TempDir::new().unwrap();
    let view = ready(
        &dashboard_over(&dir, Some(create_test_preferences())),
        monday_at(8),
    )
    .await;

    let text = format_output(&view, OutputFormat::Text).unwrap();
    assert!(text.starts_with("Good Morning, Wellness Seeker\nMonday, March 3\n"));
    assert!(text.contains("[Morning] Morning Neck Reset (5 min, easy)"));

    let json = format_output(&view, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["dailyStretches"][0]["bucket"], "morning");
    assert_eq!(value["focusTags"][0]["tier"], "primary");
    assert_eq!(value["targetedExercises"][0]["exerciseId"], "ex-1");
}
