// ABOUTME: Questionnaire flow: slides, validation, navigation and answer normalization
// ABOUTME: Turns raw form answers into a saved UserPreferences record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Slide cursor and submission
pub mod navigation;
/// Form vocabulary to catalog vocabulary
pub mod normalizer;
/// Slide definitions and validation
pub mod slides;

pub use navigation::{NavigationState, QuestionnaireNavigator};
pub use normalizer::{
    map_activity_type, map_body_areas, map_intensity, map_routine_duration_to_database, normalize,
};
pub use slides::QuestionSlide;
