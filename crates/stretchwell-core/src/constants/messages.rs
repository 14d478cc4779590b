// ABOUTME: User-facing message strings for questionnaire validation and dashboard states
// ABOUTME: Kept in one place so front ends and tests agree on the exact wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Slide 1: no activity chosen
pub const SELECT_DAILY_ACTIVITY: &str = "Please select your main daily activity";

/// Slide 1: "other" chosen without a description
pub const DESCRIBE_ACTIVITY: &str = "Please describe your activity";

/// Slide 2: slider value above the scale
pub const DISCOMFORT_LEVEL_OUT_OF_RANGE: &str = "Please choose a discomfort level between 0 and 10";

/// Slide 3
pub const SELECT_INTENSITY: &str = "Please select your intensity preference";

/// Slide 4
pub const SELECT_ENERGY_LEVEL: &str = "Please select your current energy level";

/// Slide 5
pub const SELECT_BREATH_AWARENESS: &str = "Please select your breath awareness level";

/// Slide 6
pub const ANSWER_ALL_WORK_HABITS: &str = "Please answer all questions in this section";

/// Slide 7
pub const SELECT_ROUTINE_DURATION: &str = "Please select your preferred routine duration";

/// Preference store failed or returned false
pub const SAVE_FAILED: &str = "There was a problem saving your data. Please try again.";

/// Dashboard banner when recommendations could not be loaded
pub const RECOMMENDATIONS_UNAVAILABLE: &str =
    "We encountered an issue loading your personalized recommendations. Please try again later.";

/// Dashboard empty state
pub const NO_RECOMMENDATIONS: &str =
    "No personalized recommendations yet. We couldn't find stretches that match your profile. \
     Please update your questionnaire or try again later.";

/// Focus tag shown when no discomfort areas were selected
pub const GENERAL_WELLNESS: &str = "General Wellness";

/// Dashboard redirect notice when no preferences are stored
pub const NO_SAVED_PREFERENCES: &str =
    "No saved preferences found. Complete the questionnaire first.";
