// ABOUTME: Exercise and stretch catalog records loaded from the static tabular source
// ABOUTME: Time-of-day, priority, and bucket vocabularies used by the recommendation selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::preferences::{BodyArea, Intensity};
use crate::constants::catalog::LIST_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Split a pipe-delimited catalog column, dropping empty tokens
///
/// Tokens are trimmed first, so `"a| |b|"` yields `["a", "b"]`.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// Time of Day
// ============================================================================

/// One of the three recommendation slots shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// Morning slot
    Morning,
    /// Midday slot
    Midday,
    /// Evening slot
    Evening,
}

impl TimeBucket {
    /// Buckets in display order; this order also breaks ties when balancing
    /// `anytime` stretches
    pub const ALL: [Self; 3] = [Self::Morning, Self::Midday, Self::Evening];

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
        }
    }

    /// Capitalized name for card headers
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Evening => "Evening",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Midday => 1,
            Self::Evening => 2,
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `timeOfDay` column of the stretch catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeOfDay {
    /// Fixed slot
    Slot(TimeBucket),
    /// May be placed in any slot
    Anytime,
    /// Value not in the known vocabulary; never scheduled
    Other(String),
}

impl TimeOfDay {
    /// Parse case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "morning" => Self::Slot(TimeBucket::Morning),
            "midday" => Self::Slot(TimeBucket::Midday),
            "evening" => Self::Slot(TimeBucket::Evening),
            "anytime" => Self::Anytime,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Canonical string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Slot(bucket) => bucket.as_str(),
            Self::Anytime => "anytime",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for TimeOfDay {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        match value {
            TimeOfDay::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

// ============================================================================
// Priority
// ============================================================================

/// `priority` column of the stretch catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Rank 3
    High,
    /// Rank 2
    Medium,
    /// Rank 1
    Low,
    /// Rank 0; blank or unrecognized values
    Unknown(String),
}

impl Priority {
    /// Parse case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown(s.to_owned()),
        }
    }

    /// Selection rank: high 3, medium 2, low 1, unknown 0
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unknown(_) => 0,
        }
    }

    /// Canonical string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown(value) => value,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// A single exercise from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Catalog identifier
    pub exercise_id: String,
    /// Exercise name
    pub name: String,
    /// Short description
    pub description: String,
    /// Duration as written in the catalog, e.g. "30 sec"
    pub duration: String,
    /// Difficulty in intensity vocabulary
    pub difficulty: Intensity,
    /// Body areas targeted
    pub body_areas: Vec<BodyArea>,
}

impl ExerciseRecord {
    /// Whether the exercise targets any of `areas`
    #[must_use]
    pub fn targets_any(&self, areas: &[BodyArea]) -> bool {
        self.body_areas.iter().any(|area| areas.contains(area))
    }
}

/// A stretch routine from the catalog, grouping several exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StretchRecord {
    /// Catalog identifier
    pub stretch_id: String,
    /// Routine name
    pub name: String,
    /// Short description
    pub description: String,
    /// Duration as written in the catalog
    pub duration: String,
    /// Difficulty in intensity vocabulary
    pub difficulty: Intensity,
    /// Body areas targeted
    pub body_areas: Vec<BodyArea>,
    /// Preferred time of day
    pub time_of_day: TimeOfDay,
    /// Selection priority
    pub priority: Priority,
    /// Member exercise identifiers
    #[serde(default)]
    pub exercises: Vec<String>,
}

impl StretchRecord {
    /// Whether the stretch targets any of `areas`
    #[must_use]
    pub fn targets_any(&self, areas: &[BodyArea]) -> bool {
        self.body_areas.iter().any(|area| areas.contains(area))
    }

    /// Index in `areas` of the first area this stretch targets
    #[must_use]
    pub fn first_matching_area(&self, areas: &[BodyArea]) -> Option<usize> {
        areas
            .iter()
            .position(|area| self.body_areas.contains(area))
    }

    /// Number of member exercises
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}
