// ABOUTME: Test utilities for creating preferences, answers and catalog records consistently
// ABOUTME: Centralizes test data creation to avoid duplication across unit and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use stretchwell_core::constants::defaults::{DEFAULT_DISCOMFORT_LEVEL, GUEST_USER_ID};
use stretchwell_core::models::{
    split_list, BodyArea, DailyActivity, ExerciseRecord, Intensity, Priority,
    QuestionnaireAnswers, RoutineDurationPreset, StretchRecord, TimeOfDay, UserPreferences,
    WorkHabits,
};

/// Sample exercise catalog in the on-disk CSV layout
pub const SAMPLE_EXERCISES_CSV: &str = "\
exerciseId,name,description,duration,difficulty,bodyAreas
ex-1,Chin Tucks,Draw the chin straight back,30 sec,easy,neck
ex-2,Shoulder Rolls,Slow circles backwards,30 sec,easy,shoulders|neck
ex-3,Cat Cow,Alternate arching and rounding,45 sec,medium,midback|lowerback
ex-4,Wrist Circles,Rotate both wrists,20 sec,easy,wrists|hands
ex-5,Hip Flexor Lunge,Hold a low lunge,60 sec,hard,hips|lowerback
";

/// Sample stretch catalog in the on-disk CSV layout
pub const SAMPLE_STRETCHES_CSV: &str = "\
stretchId,name,description,duration,difficulty,bodyAreas,timeOfDay,priority,exercises
st-1,Morning Neck Reset,Wake up the neck,5 min,easy,neck|shoulders,morning,high,ex-1|ex-2
st-2,Desk Break,Quick midday release,3 min,easy,neck|wrists,midday,medium,ex-1|ex-4
st-3,Evening Back Unwind,Slow down before bed,10 min,medium,lowerback|midback,evening,high,ex-3|ex-5|ex-2
st-4,Anytime Shoulder Opener,Open the chest,4 min,medium,shoulders,anytime,low,ex-2
st-5,Hip Release,Loosen tight hips,8 min,hard,hips,evening,medium,ex-5
";

/// Fixed timestamp for records that are compared for equality
#[must_use]
pub fn test_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 8, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Create a normalized preference record with neck and shoulder discomfort
#[must_use]
pub fn create_test_preferences() -> UserPreferences {
    UserPreferences {
        daily_activity: DailyActivity::DeskWork,
        other_activity: None,
        discomfort_areas: vec![BodyArea::Neck, BodyArea::Shoulders],
        intensity_preference: Intensity::Easy,
        energy_level: "3".to_owned(),
        breath_awareness: "2".to_owned(),
        work_habits: WorkHabits {
            posture_adjustment: "sometimes".to_owned(),
            tense_breathing: "often".to_owned(),
            movement_breaks: "rarely".to_owned(),
            after_work_stretch: "never".to_owned(),
            overexertion: "sometimes".to_owned(),
        },
        discomfort_level: DEFAULT_DISCOMFORT_LEVEL,
        routine_duration: RoutineDurationPreset::Medium.routine_duration(),
        timestamp: test_timestamp(),
        user_id: GUEST_USER_ID.to_owned(),
        username: None,
    }
}

/// Create a raw answer set that passes every slide's validation
#[must_use]
pub fn create_complete_answers() -> QuestionnaireAnswers {
    let some = |value: &str| Some(value.to_owned());
    QuestionnaireAnswers {
        daily_activity: some("desk-work"),
        other_activity: None,
        discomfort_areas: vec!["neck".to_owned(), "upper-back".to_owned()],
        discomfort_level: 6,
        intensity: some("gentle"),
        energy: some("3"),
        breath: some("2"),
        posture_adjust: some("sometimes"),
        tense_breathing: some("often"),
        movement_breaks: some("rarely"),
        after_work_stretch: some("never"),
        overexert: some("sometimes"),
        routine_duration: some("short"),
        username: some("Alex"),
    }
}

/// Create a stretch record; `exercises` is derived from the id so counts are predictable
#[must_use]
pub fn create_test_stretch(
    id: &str,
    areas: &[BodyArea],
    difficulty: &str,
    time_of_day: &str,
    priority: &str,
) -> StretchRecord {
    StretchRecord {
        stretch_id: id.to_owned(),
        name: format!("Stretch {id}"),
        description: String::new(),
        duration: "5 min".to_owned(),
        difficulty: Intensity::parse(difficulty),
        body_areas: areas.to_vec(),
        time_of_day: TimeOfDay::parse(time_of_day),
        priority: Priority::parse(priority),
        exercises: split_list(&format!("{id}-a|{id}-b")),
    }
}

/// Create an exercise record
#[must_use]
pub fn create_test_exercise(id: &str, areas: &[BodyArea]) -> ExerciseRecord {
    ExerciseRecord {
        exercise_id: id.to_owned(),
        name: format!("Exercise {id}"),
        description: String::new(),
        duration: "30 sec".to_owned(),
        difficulty: Intensity::Easy,
        body_areas: areas.to_vec(),
    }
}
