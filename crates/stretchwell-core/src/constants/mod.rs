// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Questionnaire layout, dashboard limits, defaults, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the flow that uses them rather than kept in one list.

/// User-facing messages for validation, banners, and empty states
pub mod messages;

/// Placeholder identities and default answer values
pub mod defaults {
    /// Fixed user identifier (single-user, no authentication)
    pub const GUEST_USER_ID: &str = "guest";

    /// Name used by the dashboard greeting when none was provided
    pub const DEFAULT_USERNAME: &str = "Wellness Seeker";

    /// Initial position of the discomfort slider
    pub const DEFAULT_DISCOMFORT_LEVEL: u8 = 5;

    /// Highest value of the discomfort slider
    pub const MAX_DISCOMFORT_LEVEL: u8 = 10;

    /// File name of the single preference slot
    pub const PREFERENCES_FILE_NAME: &str = "user_preferences.json";

    /// Application directory under the platform data directory
    pub const APP_DIR_NAME: &str = "stretchwell";
}

/// Questionnaire layout
pub mod questionnaire {
    /// Number of question slides (the completion slide is not counted)
    pub const TOTAL_QUESTIONS: u8 = 7;

    /// Raw activity value that requires the free-text description
    pub const OTHER_ACTIVITY: &str = "other";
}

/// Dashboard grouping and display limits
pub mod dashboard {
    /// Number of areas shown as primary focus tags
    pub const PRIMARY_FOCUS_COUNT: usize = 3;

    /// Number of areas shown as secondary focus tags
    pub const SECONDARY_FOCUS_COUNT: usize = 2;

    /// Number of areas shown as tertiary focus tags
    pub const TERTIARY_FOCUS_COUNT: usize = 2;

    /// Maximum number of targeted exercise cards
    pub const TARGETED_EXERCISE_LIMIT: usize = 3;

    /// First hour (inclusive) of the morning greeting
    pub const MORNING_START_HOUR: u32 = 5;

    /// First hour of the afternoon greeting
    pub const AFTERNOON_START_HOUR: u32 = 12;

    /// First hour of the evening greeting
    pub const EVENING_START_HOUR: u32 = 18;

    /// First hour of the night greeting
    pub const NIGHT_START_HOUR: u32 = 22;
}

/// Catalog file conventions
pub mod catalog {
    /// Separator used by list-valued catalog columns
    pub const LIST_SEPARATOR: char = '|';

    /// Default exercise catalog file name
    pub const EXERCISES_FILE: &str = "exercises.csv";

    /// Default stretch catalog file name
    pub const STRETCHES_FILE: &str = "stretches.csv";

    /// Default catalog directory
    pub const DEFAULT_CATALOG_DIR: &str = "data";
}
