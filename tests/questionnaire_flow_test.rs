// ABOUTME: Integration tests for the questionnaire from raw answers to a saved preference file
// ABOUTME: Walks the slides, checks validation messages and the normalized record on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use serde_json::json;
use stretchwell::errors::{AppError, AppResult, ErrorCode, QuestionnaireError};
use stretchwell::models::{
    BodyArea, DailyActivity, Intensity, QuestionnaireAnswers, RoutineDurationPreset,
    UserPreferences,
};
use stretchwell::questionnaire::{NavigationState, QuestionSlide, QuestionnaireNavigator};
use stretchwell::store::{JsonFileStore, PreferenceStore};
use stretchwell::test_utils::{create_complete_answers, test_timestamp};
use tempfile::TempDir;

fn advance_to_last(navigator: &mut QuestionnaireNavigator, answers: &QuestionnaireAnswers) {
    while navigator.current_question() != Some(QuestionSlide::LAST) {
        navigator.next(answers).unwrap();
    }
}

#[test]
fn test_answers_parse_from_form_json() {
    let answers: QuestionnaireAnswers = serde_json::from_value(json!({
        "daily-activity": "manual-labor",
        "discomfort-areas": ["lower-back", "knees"],
        "intensity": "challenging",
        "energy": "4",
        "breath": "3",
        "posture-adjust": "often",
        "tense-breathing": "rarely",
        "movement-breaks": "often",
        "after-work-stretch": "sometimes",
        "overexert": "never",
        "routine-duration": "long"
    }))
    .unwrap();

    assert_eq!(answers.discomfort_level, 5);
    assert_eq!(answers.daily_activity.as_deref(), Some("manual-labor"));

    let mut navigator = QuestionnaireNavigator::new();
    advance_to_last(&mut navigator, &answers);
    assert_eq!(navigator.progress_percent(), 100);
}

#[test]
fn test_each_slide_reports_its_message() {
    let complete = create_complete_answers();
    let cases: Vec<(u8, fn(&mut QuestionnaireAnswers), &'static str)> = vec![
        (1, |a| a.daily_activity = None, "Please select your main daily activity"),
        (
            1,
            |a| {
                a.daily_activity = Some("other".to_owned());
                a.other_activity = Some("   ".to_owned());
            },
            "Please describe your activity",
        ),
        (3, |a| a.intensity = None, "Please select your intensity preference"),
        (4, |a| a.energy = None, "Please select your current energy level"),
        (5, |a| a.breath = None, "Please select your breath awareness level"),
        (6, |a| a.overexert = None, "Please answer all questions in this section"),
    ];

    for (slide, blank, message) in cases {
        let mut answers = complete.clone();
        blank(&mut answers);

        let mut navigator = QuestionnaireNavigator::new();
        navigator.go_to(slide, &complete).unwrap();
        let error = navigator.next(&answers).unwrap_err();
        assert_eq!(error, QuestionnaireError::Validation { slide, message });
        assert_eq!(navigator.current_question().map(|s| s.number()), Some(slide));
    }
}

#[test]
fn test_discomfort_slide_is_optional() {
    let mut answers = create_complete_answers();
    answers.discomfort_areas.clear();

    let mut navigator = QuestionnaireNavigator::new();
    navigator.go_to(2, &answers).unwrap();
    assert_eq!(navigator.next(&answers).unwrap(), QuestionSlide::Intensity);
}

#[tokio::test]
async fn test_submit_writes_normalized_record() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("stretchwell").join("prefs.json"));

    let mut answers = create_complete_answers();
    answers.daily_activity = Some("other".to_owned());
    answers.other_activity = Some(" Gardening ".to_owned());
    answers.discomfort_areas = vec![
        "upper-back".to_owned(),
        "forearms".to_owned(),
        "upper-back".to_owned(),
    ];
    answers.intensity = Some("moderate".to_owned());

    let mut navigator = QuestionnaireNavigator::new();
    advance_to_last(&mut navigator, &answers);
    navigator
        .submit_at(&answers, &store, test_timestamp())
        .await
        .unwrap();
    assert_eq!(navigator.state(), NavigationState::Completed);

    let saved = store.get_saved_preferences().await.unwrap().unwrap();
    assert_eq!(saved.daily_activity, DailyActivity::Other);
    assert_eq!(saved.other_activity.as_deref(), Some("Gardening"));
    assert_eq!(
        saved.discomfort_areas,
        vec![
            BodyArea::UpperBack,
            BodyArea::Unrecognized("forearms".to_owned())
        ]
    );
    assert_eq!(saved.intensity_preference, Intensity::Medium);
    assert_eq!(saved.routine_duration, RoutineDurationPreset::Short.routine_duration());
    assert_eq!(saved.timestamp, test_timestamp());
    assert_eq!(saved.user_id, "guest");

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(raw["discomfortAreas"], json!(["upperback", "forearms"]));
    assert_eq!(raw["routineDuration"]["name"], "short");
    assert_eq!(raw["postureAdjustment"], "sometimes");
}

#[tokio::test]
async fn test_resubmission_overwrites_previous_record() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    for routine in ["short", "long"] {
        let mut answers = create_complete_answers();
        answers.routine_duration = Some(routine.to_owned());
        let mut navigator = QuestionnaireNavigator::new();
        advance_to_last(&mut navigator, &answers);
        navigator.submit(&answers, &store).await.unwrap();
    }

    let saved = store.get_saved_preferences().await.unwrap().unwrap();
    assert_eq!(saved.routine_duration.name, RoutineDurationPreset::Long);
}

struct DecliningStore;

#[async_trait]
impl PreferenceStore for DecliningStore {
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>> {
        Ok(None)
    }

    async fn save_preferences(&self, _preferences: &UserPreferences) -> AppResult<bool> {
        Ok(false)
    }
}

struct BrokenStore;

#[async_trait]
impl PreferenceStore for BrokenStore {
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>> {
        Ok(None)
    }

    async fn save_preferences(&self, _preferences: &UserPreferences) -> AppResult<bool> {
        Err(AppError::storage("disk full"))
    }
}

#[tokio::test]
async fn test_failed_save_keeps_cursor_on_last_question() {
    let answers = create_complete_answers();

    for store in [
        Box::new(DecliningStore) as Box<dyn PreferenceStore>,
        Box::new(BrokenStore) as Box<dyn PreferenceStore>,
    ] {
        let mut navigator = QuestionnaireNavigator::new();
        advance_to_last(&mut navigator, &answers);

        let error = navigator.submit(&answers, store.as_ref()).await.unwrap_err();
        assert_eq!(error, QuestionnaireError::SaveFailed);
        assert_eq!(
            error.to_string(),
            "There was a problem saving your data. Please try again."
        );
        assert_eq!(navigator.current_question(), Some(QuestionSlide::LAST));
        assert_eq!(AppError::from(error).code, ErrorCode::StorageError);
    }
}

#[tokio::test]
async fn test_missing_routine_duration_blocks_submit() {
    let mut answers = create_complete_answers();
    answers.routine_duration = None;
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("prefs.json"));

    let mut navigator = QuestionnaireNavigator::new();
    advance_to_last(&mut navigator, &answers);
    let error = navigator.submit(&answers, &store).await.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Please select your preferred routine duration"
    );
    assert!(store.get_saved_preferences().await.unwrap().is_none());
}
