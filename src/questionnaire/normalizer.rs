// ABOUTME: Maps raw questionnaire answers onto the catalog vocabulary
// ABOUTME: Constant lookup tables with pass-through fallback and a medium routine default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference normalization
//!
//! Form values and catalog keys drifted apart over time (`manual-labor` vs
//! `physical-labor`, `upper-back` vs `upperback`). The tables below bridge the
//! two. Anything missing from a table is passed through unchanged, so new form
//! options that already use catalog keys need no table entry. Routine duration
//! is the exception: an absent or unknown value resolves to the medium preset.

use chrono::{DateTime, Utc};
use stretchwell_core::constants::defaults::{GUEST_USER_ID, MAX_DISCOMFORT_LEVEL};
use stretchwell_core::models::{
    answered, BodyArea, DailyActivity, Intensity, QuestionnaireAnswers, RoutineDuration,
    RoutineDurationPreset, UserPreferences, WorkHabits,
};

/// Form activity value to catalog activity key
pub const ACTIVITY_TABLE: &[(&str, &str)] = &[
    ("desk-work", "desk-work"),
    ("manual-labor", "physical-labor"),
    ("standing-job", "standing"),
    ("driving", "driving"),
    ("crafting", "handwork"),
    ("other", "other"),
];

/// Form checkbox id to catalog body-area key
pub const BODY_AREA_TABLE: &[(&str, &str)] = &[
    ("neck", "neck"),
    ("shoulders", "shoulders"),
    ("upper-back", "upperback"),
    ("mid-back", "midback"),
    ("lower-back", "lowerback"),
    ("wrists", "wrists"),
    ("hands", "hands"),
    ("hips", "hips"),
    ("knees", "knees"),
    ("ankles", "ankles"),
    ("feet", "feet"),
    ("eyes", "eyes"),
];

/// Form intensity value to catalog difficulty key
pub const INTENSITY_TABLE: &[(&str, &str)] = &[
    ("gentle", "easy"),
    ("moderate", "medium"),
    ("challenging", "hard"),
];

fn lookup<'a>(table: &[(&str, &'a str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find_map(|(form, canonical)| (*form == raw).then_some(*canonical))
        .unwrap_or(raw)
}

/// Map a raw activity value
#[must_use]
pub fn map_activity_type(raw: &str) -> DailyActivity {
    DailyActivity::from(lookup(ACTIVITY_TABLE, raw).to_owned())
}

/// Map checked body-area ids, keeping selection order and dropping repeats
#[must_use]
pub fn map_body_areas<S: AsRef<str>>(raw: &[S]) -> Vec<BodyArea> {
    let mut areas: Vec<BodyArea> = Vec::with_capacity(raw.len());
    for id in raw {
        let area = BodyArea::from(lookup(BODY_AREA_TABLE, id.as_ref()).to_owned());
        if !areas.contains(&area) {
            areas.push(area);
        }
    }
    areas
}

/// Map a raw intensity value
#[must_use]
pub fn map_intensity(raw: &str) -> Intensity {
    Intensity::from(lookup(INTENSITY_TABLE, raw).to_owned())
}

/// Resolve the routine-duration preset; medium when absent or unrecognized
#[must_use]
pub fn map_routine_duration_to_database(raw: Option<&str>) -> RoutineDuration {
    raw.and_then(RoutineDurationPreset::from_name)
        .unwrap_or_default()
        .routine_duration()
}

fn owned(value: Option<&String>) -> String {
    answered(value).unwrap_or_default().to_owned()
}

/// Assemble the normalized preference record from an answers snapshot
///
/// Presence of required answers is the navigator's job; anything missing here
/// becomes an empty string rather than an error.
#[must_use]
pub fn normalize(answers: &QuestionnaireAnswers, timestamp: DateTime<Utc>) -> UserPreferences {
    let daily_activity =
        map_activity_type(answered(answers.daily_activity.as_ref()).unwrap_or_default());
    let other_activity = if daily_activity == DailyActivity::Other {
        answered(answers.other_activity.as_ref()).map(str::to_owned)
    } else {
        None
    };

    UserPreferences {
        daily_activity,
        other_activity,
        discomfort_areas: map_body_areas(answers.discomfort_areas.as_slice()),
        intensity_preference: map_intensity(
            answered(answers.intensity.as_ref()).unwrap_or_default(),
        ),
        energy_level: owned(answers.energy.as_ref()),
        breath_awareness: owned(answers.breath.as_ref()),
        work_habits: WorkHabits {
            posture_adjustment: owned(answers.posture_adjust.as_ref()),
            tense_breathing: owned(answers.tense_breathing.as_ref()),
            movement_breaks: owned(answers.movement_breaks.as_ref()),
            after_work_stretch: owned(answers.after_work_stretch.as_ref()),
            overexertion: owned(answers.overexert.as_ref()),
        },
        discomfort_level: answers.discomfort_level.min(MAX_DISCOMFORT_LEVEL),
        routine_duration: map_routine_duration_to_database(answered(
            answers.routine_duration.as_ref(),
        )),
        timestamp,
        user_id: GUEST_USER_ID.to_owned(),
        username: answered(answers.username.as_ref()).map(str::to_owned),
    }
}
