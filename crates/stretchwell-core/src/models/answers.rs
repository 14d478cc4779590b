// ABOUTME: Immutable snapshot of raw questionnaire answers as selected in the form
// ABOUTME: Values use the form vocabulary and are normalized only at submission time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::DEFAULT_DISCOMFORT_LEVEL;
use serde::{Deserialize, Serialize};

/// Raw questionnaire answers
///
/// Every single-choice question is optional here; the navigator's per-slide
/// validation decides which ones must be present before moving on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuestionnaireAnswers {
    /// Question 1: raw activity value (`desk-work`, `manual-labor`, ...)
    #[serde(default)]
    pub daily_activity: Option<String>,
    /// Question 1: description when `other` is chosen
    #[serde(default)]
    pub other_activity: Option<String>,
    /// Question 2: checked body-area ids in selection order
    #[serde(default)]
    pub discomfort_areas: Vec<String>,
    /// Question 2: discomfort slider
    #[serde(default = "default_discomfort_level")]
    pub discomfort_level: u8,
    /// Question 3: `gentle`, `moderate` or `challenging`
    #[serde(default)]
    pub intensity: Option<String>,
    /// Question 4
    #[serde(default)]
    pub energy: Option<String>,
    /// Question 5
    #[serde(default)]
    pub breath: Option<String>,
    /// Question 6
    #[serde(default)]
    pub posture_adjust: Option<String>,
    /// Question 6
    #[serde(default)]
    pub tense_breathing: Option<String>,
    /// Question 6
    #[serde(default)]
    pub movement_breaks: Option<String>,
    /// Question 6
    #[serde(default)]
    pub after_work_stretch: Option<String>,
    /// Question 6
    #[serde(default)]
    pub overexert: Option<String>,
    /// Question 7: `short`, `medium` or `long`
    #[serde(default)]
    pub routine_duration: Option<String>,
    /// Optional display name
    #[serde(default)]
    pub username: Option<String>,
}

const fn default_discomfort_level() -> u8 {
    DEFAULT_DISCOMFORT_LEVEL
}

impl Default for QuestionnaireAnswers {
    fn default() -> Self {
        Self {
            daily_activity: None,
            other_activity: None,
            discomfort_areas: Vec::new(),
            discomfort_level: DEFAULT_DISCOMFORT_LEVEL,
            intensity: None,
            energy: None,
            breath: None,
            posture_adjust: None,
            tense_breathing: None,
            movement_breaks: None,
            after_work_stretch: None,
            overexert: None,
            routine_duration: None,
            username: None,
        }
    }
}

/// Trimmed, non-empty view of an optional answer
#[must_use]
pub fn answered(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
