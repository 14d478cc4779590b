// ABOUTME: Normalized user preference record captured at questionnaire submission
// ABOUTME: Canonical activity, body-area, intensity and routine-duration vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::{DEFAULT_DISCOMFORT_LEVEL, GUEST_USER_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Daily Activity
// ============================================================================

/// Main daily activity in catalog vocabulary
///
/// Values outside the known set are kept verbatim so newer front ends can add
/// options without breaking stored records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DailyActivity {
    /// Desk or computer work
    DeskWork,
    /// Manual or physical labor
    PhysicalLabor,
    /// Standing job
    Standing,
    /// Driving
    Driving,
    /// Crafting and other fine hand work
    Handwork,
    /// Something else, described in `other_activity`
    Other,
    /// Value not in the known vocabulary
    Unrecognized(String),
}

impl DailyActivity {
    /// Canonical string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DeskWork => "desk-work",
            Self::PhysicalLabor => "physical-labor",
            Self::Standing => "standing",
            Self::Driving => "driving",
            Self::Handwork => "handwork",
            Self::Other => "other",
            Self::Unrecognized(value) => value,
        }
    }

    /// Parse from canonical representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "desk-work" => Self::DeskWork,
            "physical-labor" => Self::PhysicalLabor,
            "standing" => Self::Standing,
            "driving" => Self::Driving,
            "handwork" => Self::Handwork,
            "other" => Self::Other,
            _ => Self::Unrecognized(s.to_owned()),
        }
    }
}

impl From<String> for DailyActivity {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Self::Unrecognized(_) => Self::Unrecognized(value),
            known => known,
        }
    }
}

impl From<DailyActivity> for String {
    fn from(value: DailyActivity) -> Self {
        match value {
            DailyActivity::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for DailyActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Body Areas
// ============================================================================

/// Body area key shared by the questionnaire and the catalog's `bodyAreas` column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyArea {
    /// Neck
    Neck,
    /// Shoulders
    Shoulders,
    /// Upper back
    UpperBack,
    /// Mid back
    MidBack,
    /// Lower back
    LowerBack,
    /// Wrists
    Wrists,
    /// Hands
    Hands,
    /// Hips
    Hips,
    /// Knees
    Knees,
    /// Ankles
    Ankles,
    /// Feet
    Feet,
    /// Eyes
    Eyes,
    /// Key not in the known vocabulary, compared verbatim
    Unrecognized(String),
}

impl BodyArea {
    /// Canonical catalog key
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Neck => "neck",
            Self::Shoulders => "shoulders",
            Self::UpperBack => "upperback",
            Self::MidBack => "midback",
            Self::LowerBack => "lowerback",
            Self::Wrists => "wrists",
            Self::Hands => "hands",
            Self::Hips => "hips",
            Self::Knees => "knees",
            Self::Ankles => "ankles",
            Self::Feet => "feet",
            Self::Eyes => "eyes",
            Self::Unrecognized(value) => value,
        }
    }

    /// Parse from canonical catalog key
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "neck" => Self::Neck,
            "shoulders" => Self::Shoulders,
            "upperback" => Self::UpperBack,
            "midback" => Self::MidBack,
            "lowerback" => Self::LowerBack,
            "wrists" => Self::Wrists,
            "hands" => Self::Hands,
            "hips" => Self::Hips,
            "knees" => Self::Knees,
            "ankles" => Self::Ankles,
            "feet" => Self::Feet,
            "eyes" => Self::Eyes,
            _ => Self::Unrecognized(s.to_owned()),
        }
    }
}

impl From<String> for BodyArea {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Self::Unrecognized(_) => Self::Unrecognized(value),
            known => known,
        }
    }
}

impl From<BodyArea> for String {
    fn from(value: BodyArea) -> Self {
        match value {
            BodyArea::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for BodyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Intensity
// ============================================================================

/// Intensity preference; also the catalog's difficulty vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    /// Gentle movements
    Easy,
    /// Moderate effort
    Medium,
    /// Challenging effort
    Hard,
    /// Value not in the known vocabulary
    Unrecognized(String),
}

impl Intensity {
    /// Canonical string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unrecognized(value) => value,
        }
    }

    /// Parse from canonical representation (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unrecognized(s.to_owned()),
        }
    }

    /// Ordinal level (easy = 1, hard = 3), `None` for unrecognized values
    #[must_use]
    pub const fn level(&self) -> Option<u8> {
        match self {
            Self::Easy => Some(1),
            Self::Medium => Some(2),
            Self::Hard => Some(3),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<String> for Intensity {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Self::Unrecognized(_) => Self::Unrecognized(value),
            known => known,
        }
    }
}

impl From<Intensity> for String {
    fn from(value: Intensity) -> Self {
        match value {
            Intensity::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Routine Duration
// ============================================================================

/// Fixed routine-duration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoutineDurationPreset {
    /// 3-5 minutes
    Short,
    /// 10-15 minutes
    #[default]
    Medium,
    /// 15-20 minutes
    Long,
}

impl RoutineDurationPreset {
    /// Every preset, shortest first
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Raw form value and preset name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Human readable time range
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Short => "3-5 minutes",
            Self::Medium => "10-15 minutes",
            Self::Long => "15-20 minutes",
        }
    }

    /// Inclusive exercise-count range `(min, max)`
    #[must_use]
    pub const fn exercise_range(&self) -> (u32, u32) {
        match self {
            Self::Short => (9, 15),
            Self::Medium => (31, 47),
            Self::Long => (47, 62),
        }
    }

    /// Look up a preset by its raw form value
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.as_str() == name)
    }

    /// Full preset record
    #[must_use]
    pub fn routine_duration(&self) -> RoutineDuration {
        let (min_exercises, max_exercises) = self.exercise_range();
        RoutineDuration {
            name: *self,
            label: self.label().to_owned(),
            min_exercises,
            max_exercises,
        }
    }
}

/// Routine duration preset as stored with the preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineDuration {
    /// Preset name
    pub name: RoutineDurationPreset,
    /// Display label, e.g. "10-15 minutes"
    pub label: String,
    /// Lower bound of exercises in the routine
    pub min_exercises: u32,
    /// Upper bound of exercises in the routine
    pub max_exercises: u32,
}

impl Default for RoutineDuration {
    fn default() -> Self {
        RoutineDurationPreset::default().routine_duration()
    }
}

// ============================================================================
// User Preferences
// ============================================================================

/// Work-habit answers from question 6, kept as the radio values chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHabits {
    /// Do you adjust your posture during the day
    pub posture_adjustment: String,
    /// Do you notice tense or shallow breathing
    pub tense_breathing: String,
    /// Do you take movement breaks
    pub movement_breaks: String,
    /// Do you stretch after work
    pub after_work_stretch: String,
    /// Do you tend to overexert yourself
    pub overexertion: String,
}

/// Normalized questionnaire result
///
/// Created once at submission and replaced wholesale on resubmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Main daily activity
    pub daily_activity: DailyActivity,
    /// Free-text description when the activity is `other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_activity: Option<String>,
    /// Discomfort areas in selection order, unique
    #[serde(default)]
    pub discomfort_areas: Vec<BodyArea>,
    /// Preferred intensity
    pub intensity_preference: Intensity,
    /// Current energy level (opaque ordinal)
    pub energy_level: String,
    /// Breath awareness (opaque ordinal)
    pub breath_awareness: String,
    /// Work-habit answers
    #[serde(flatten)]
    pub work_habits: WorkHabits,
    /// Discomfort slider value
    #[serde(default = "default_discomfort_level")]
    pub discomfort_level: u8,
    /// Routine duration preset, medium when missing
    #[serde(default)]
    pub routine_duration: RoutineDuration,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Owner of the record
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Display name for the dashboard greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

const fn default_discomfort_level() -> u8 {
    DEFAULT_DISCOMFORT_LEVEL
}

fn default_user_id() -> String {
    GUEST_USER_ID.to_owned()
}

impl UserPreferences {
    /// Whether any discomfort area was selected
    #[must_use]
    pub fn has_discomfort_areas(&self) -> bool {
        !self.discomfort_areas.is_empty()
    }

    /// First selected discomfort area
    #[must_use]
    pub fn primary_area(&self) -> Option<&BodyArea> {
        self.discomfort_areas.first()
    }
}
