// ABOUTME: Dashboard view-model composition from saved preferences and recommendations
// ABOUTME: Greeting, routine title, daily stretches, focus tags and targeted exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard composition
//!
//! A dashboard is only built from a saved questionnaire result. Without one, or
//! when the store cannot be read, the caller is told to send the user back to
//! the questionnaire. Building never fails outright. A failure to load
//! personalized stretches degrades the view to its empty state and adds a
//! banner; a failure to load targeted exercises is logged and otherwise ignored.

use crate::recommendations::RecommendationProvider;
use crate::store::PreferenceStore;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use std::sync::Arc;
use stretchwell_core::constants::dashboard::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR, NIGHT_START_HOUR,
    TARGETED_EXERCISE_LIMIT,
};
use stretchwell_core::constants::defaults::DEFAULT_USERNAME;
use stretchwell_core::constants::messages::RECOMMENDATIONS_UNAVAILABLE;
use stretchwell_core::models::{ExerciseRecord, StretchRecord, UserPreferences};
use stretchwell_intelligence::{
    count_exercises_in_recommendations, focus_tags, format_area_name, format_area_tags,
    select_daily_stretches, DailyStretch, FocusTag,
};
use tracing::{debug, error, info, warn};

/// Exercise card with display-ready area tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetedExercise {
    /// Catalog exercise
    #[serde(flatten)]
    pub exercise: ExerciseRecord,
    /// Formatted body-area labels
    pub area_tags: Vec<String>,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// "Good Morning, Alex"
    pub greeting: String,
    /// "Monday, March 3"
    pub date_label: String,
    /// Routine summary, absent when there are no recommendations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Label of the saved routine duration preset
    pub routine_duration_label: String,
    /// One stretch per non-empty time-of-day bucket
    pub daily_stretches: Vec<DailyStretch>,
    /// No personalized stretches to show
    pub no_recommendations: bool,
    /// Focus area tags
    pub focus_tags: Vec<FocusTag>,
    /// Up to three exercises for the discomfort areas
    pub targeted_exercises: Vec<TargetedExercise>,
    /// Dismissible error banners
    pub banners: Vec<String>,
}

/// Result of building the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// No saved preferences; the questionnaire must be completed first
    RedirectToQuestionnaire,
    /// Ready to render
    Ready(Box<DashboardView>),
}

/// Greeting prefix for a local hour
#[must_use]
pub const fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        h if h >= MORNING_START_HOUR && h < AFTERNOON_START_HOUR => "Good Morning",
        h if h >= AFTERNOON_START_HOUR && h < EVENING_START_HOUR => "Good Afternoon",
        h if h >= EVENING_START_HOUR && h < NIGHT_START_HOUR => "Good Evening",
        _ => "Good Night",
    }
}

/// Full greeting line, falling back to the default display name
#[must_use]
pub fn greeting(hour: u32, username: Option<&str>) -> String {
    let name = username
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_USERNAME);
    format!("{}, {name}", greeting_for_hour(hour))
}

/// Long-form date label, e.g. "Monday, March 3"
#[must_use]
pub fn date_label(now: &NaiveDateTime) -> String {
    now.format("%A, %B %-d").to_string()
}

/// Routine summary line for the dashboard header
#[must_use]
pub fn dashboard_title(preferences: &UserPreferences, recommendations: &[StretchRecord]) -> String {
    let total = count_exercises_in_recommendations(recommendations);
    let duration = if preferences.routine_duration.label.is_empty() {
        String::new()
    } else {
        format!(" ({})", preferences.routine_duration.label)
    };
    let focus = preferences.primary_area().map_or_else(
        || "for overall wellness".to_owned(),
        |area| format!("focusing on {}", format_area_name(area.as_str())),
    );
    format!("Your personalized {total} exercise routine{duration} {focus}")
}

/// Composes [`DashboardView`]s
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<dyn PreferenceStore>,
    recommendations: Arc<dyn RecommendationProvider>,
}

impl Dashboard {
    /// Dashboard over a preference store and a recommendation provider
    #[must_use]
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        recommendations: Arc<dyn RecommendationProvider>,
    ) -> Self {
        Self {
            store,
            recommendations,
        }
    }

    /// Build the dashboard for the current local time
    pub async fn build(&self) -> DashboardOutcome {
        self.build_at(Local::now().naive_local()).await
    }

    /// Build the dashboard as of `now` (local wall-clock time)
    ///
    /// An unreadable store redirects like an empty one; catalog failures
    /// degrade the view.
    pub async fn build_at(&self, now: NaiveDateTime) -> DashboardOutcome {
        let preferences = match self.store.get_saved_preferences().await {
            Ok(Some(preferences)) => preferences,
            Ok(None) => {
                warn!("No saved preferences; redirecting to questionnaire");
                return DashboardOutcome::RedirectToQuestionnaire;
            }
            Err(e) => {
                error!(error = %e, "Failed to read saved preferences; redirecting");
                return DashboardOutcome::RedirectToQuestionnaire;
            }
        };

        let mut banners = Vec::new();
        let recommendations = match self
            .recommendations
            .personalized_recommendations(&preferences)
            .await
        {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!(error = %e, "Failed to load personalized recommendations");
                banners.push(RECOMMENDATIONS_UNAVAILABLE.to_owned());
                Vec::new()
            }
        };

        let daily_stretches = select_daily_stretches(&recommendations);
        let title =
            (!recommendations.is_empty()).then(|| dashboard_title(&preferences, &recommendations));
        let targeted_exercises = self.targeted_exercises(&preferences).await;

        let view = DashboardView {
            greeting: greeting(now.hour(), preferences.username.as_deref()),
            date_label: date_label(&now),
            title,
            routine_duration_label: preferences.routine_duration.label.clone(),
            no_recommendations: daily_stretches.is_empty(),
            daily_stretches,
            focus_tags: focus_tags(&preferences.discomfort_areas),
            targeted_exercises,
            banners,
        };

        info!(
            recommendations = recommendations.len(),
            daily = view.daily_stretches.len(),
            exercises = view.targeted_exercises.len(),
            banners = view.banners.len(),
            "Built dashboard"
        );
        DashboardOutcome::Ready(Box::new(view))
    }

    async fn targeted_exercises(&self, preferences: &UserPreferences) -> Vec<TargetedExercise> {
        if !preferences.has_discomfort_areas() {
            debug!("No discomfort areas; skipping targeted exercises");
            return Vec::new();
        }

        match self
            .recommendations
            .exercises_for_body_areas(&preferences.discomfort_areas)
            .await
        {
            Ok(exercises) => exercises
                .into_iter()
                .take(TARGETED_EXERCISE_LIMIT)
                .map(|exercise| TargetedExercise {
                    area_tags: format_area_tags(&exercise.body_areas),
                    exercise,
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to load targeted exercises");
                Vec::new()
            }
        }
    }
}
