// ABOUTME: Core data models for questionnaire answers, preferences, and the exercise catalog
// ABOUTME: Re-exports the record types shared by the engine, store, and front ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `QuestionnaireAnswers`: raw form snapshot in form vocabulary
//! - `UserPreferences`: normalized record in catalog vocabulary
//! - `ExerciseRecord` / `StretchRecord`: read-only catalog entries

mod answers;
mod catalog;
mod preferences;

pub use answers::{answered, QuestionnaireAnswers};
pub use catalog::{
    split_list, ExerciseRecord, Priority, StretchRecord, TimeBucket, TimeOfDay,
};
pub use preferences::{
    BodyArea, DailyActivity, Intensity, RoutineDuration, RoutineDurationPreset, UserPreferences,
    WorkHabits,
};
