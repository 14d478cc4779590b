// ABOUTME: Question slide definitions and their per-slide validation predicates
// ABOUTME: A failed predicate blocks forward navigation with a user-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use stretchwell_core::constants::defaults::MAX_DISCOMFORT_LEVEL;
use stretchwell_core::constants::messages::{
    ANSWER_ALL_WORK_HABITS, DESCRIBE_ACTIVITY, DISCOMFORT_LEVEL_OUT_OF_RANGE,
    SELECT_BREATH_AWARENESS, SELECT_DAILY_ACTIVITY, SELECT_ENERGY_LEVEL, SELECT_INTENSITY,
    SELECT_ROUTINE_DURATION,
};
use stretchwell_core::constants::questionnaire::OTHER_ACTIVITY;
use stretchwell_core::errors::QuestionnaireError;
use stretchwell_core::models::{answered, QuestionnaireAnswers};

/// The question slides, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionSlide {
    /// Main daily activity
    DailyActivity,
    /// Areas of discomfort and discomfort level (optional)
    DiscomfortAreas,
    /// Intensity preference
    Intensity,
    /// Current energy level
    EnergyLevel,
    /// Breath awareness
    BreathAwareness,
    /// Work habits
    WorkHabits,
    /// Preferred routine duration
    RoutineDuration,
}

impl QuestionSlide {
    /// All slides in order
    pub const ALL: [Self; 7] = [
        Self::DailyActivity,
        Self::DiscomfortAreas,
        Self::Intensity,
        Self::EnergyLevel,
        Self::BreathAwareness,
        Self::WorkHabits,
        Self::RoutineDuration,
    ];

    /// First slide
    pub const FIRST: Self = Self::DailyActivity;

    /// Last slide; it submits instead of advancing
    pub const LAST: Self = Self::RoutineDuration;

    /// One-based index as shown in the progress counter
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::DailyActivity => 1,
            Self::DiscomfortAreas => 2,
            Self::Intensity => 3,
            Self::EnergyLevel => 4,
            Self::BreathAwareness => 5,
            Self::WorkHabits => 6,
            Self::RoutineDuration => 7,
        }
    }

    /// Slide for a one-based index
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|slide| slide.number() == number)
    }

    /// Following slide, `None` on the last one
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding slide, `None` on the first one
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Question heading
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::DailyActivity => "What is your main daily activity?",
            Self::DiscomfortAreas => "Where do you feel tension or discomfort?",
            Self::Intensity => "How intense should your routine be?",
            Self::EnergyLevel => "How is your energy level today?",
            Self::BreathAwareness => "How aware are you of your breathing?",
            Self::WorkHabits => "Tell us about your work habits",
            Self::RoutineDuration => "How long should your routine be?",
        }
    }

    /// Check that the answers required by this slide are present
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Validation` with the message to display
    pub fn validate(&self, answers: &QuestionnaireAnswers) -> Result<(), QuestionnaireError> {
        let fail = |message: &'static str| -> Result<(), QuestionnaireError> {
            Err(QuestionnaireError::validation(self.number(), message))
        };

        match self {
            Self::DailyActivity => match answered(answers.daily_activity.as_ref()) {
                None => fail(SELECT_DAILY_ACTIVITY),
                Some(OTHER_ACTIVITY) if answered(answers.other_activity.as_ref()).is_none() => {
                    fail(DESCRIBE_ACTIVITY)
                }
                Some(_) => Ok(()),
            },
            Self::DiscomfortAreas if answers.discomfort_level > MAX_DISCOMFORT_LEVEL => {
                fail(DISCOMFORT_LEVEL_OUT_OF_RANGE)
            }
            Self::DiscomfortAreas => Ok(()),
            Self::Intensity => require(self, answers.intensity.as_ref(), SELECT_INTENSITY),
            Self::EnergyLevel => require(self, answers.energy.as_ref(), SELECT_ENERGY_LEVEL),
            Self::BreathAwareness => {
                require(self, answers.breath.as_ref(), SELECT_BREATH_AWARENESS)
            }
            Self::WorkHabits => {
                let habits = [
                    answers.posture_adjust.as_ref(),
                    answers.tense_breathing.as_ref(),
                    answers.movement_breaks.as_ref(),
                    answers.after_work_stretch.as_ref(),
                    answers.overexert.as_ref(),
                ];
                if habits.into_iter().all(|habit| answered(habit).is_some()) {
                    Ok(())
                } else {
                    fail(ANSWER_ALL_WORK_HABITS)
                }
            }
            Self::RoutineDuration => require(
                self,
                answers.routine_duration.as_ref(),
                SELECT_ROUTINE_DURATION,
            ),
        }
    }
}

fn require(
    slide: &QuestionSlide,
    value: Option<&String>,
    message: &'static str,
) -> Result<(), QuestionnaireError> {
    answered(value).map_or_else(
        || Err(QuestionnaireError::validation(slide.number(), message)),
        |_| Ok(()),
    )
}

impl fmt::Display for QuestionSlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stretchwell_core::constants::questionnaire::TOTAL_QUESTIONS;

    fn message(result: Result<(), QuestionnaireError>) -> Option<&'static str> {
        match result {
            Err(QuestionnaireError::Validation { message, .. }) => Some(message),
            _ => None,
        }
    }

    #[test]
    fn test_slide_numbering_round_trips() {
        for slide in QuestionSlide::ALL {
            assert_eq!(QuestionSlide::from_number(slide.number()), Some(slide));
        }
        assert_eq!(QuestionSlide::from_number(0), None);
        assert_eq!(QuestionSlide::from_number(8), None);
        assert_eq!(QuestionSlide::LAST.next(), None);
        assert_eq!(QuestionSlide::FIRST.previous(), None);
    }

    #[test]
    fn test_daily_activity_requires_selection() {
        let answers = QuestionnaireAnswers::default();
        assert_eq!(
            message(QuestionSlide::DailyActivity.validate(&answers)),
            Some(SELECT_DAILY_ACTIVITY)
        );
    }

    #[test]
    fn test_other_activity_requires_description() {
        let mut answers = QuestionnaireAnswers {
            daily_activity: Some("other".to_owned()),
            other_activity: Some("   ".to_owned()),
            ..QuestionnaireAnswers::default()
        };
        assert_eq!(
            message(QuestionSlide::DailyActivity.validate(&answers)),
            Some(DESCRIBE_ACTIVITY)
        );

        answers.other_activity = Some("Beekeeping".to_owned());
        assert!(QuestionSlide::DailyActivity.validate(&answers).is_ok());
    }

    #[test]
    fn test_discomfort_slide_is_optional() {
        assert!(QuestionSlide::DiscomfortAreas
            .validate(&QuestionnaireAnswers::default())
            .is_ok());
    }

    #[test]
    fn test_discomfort_level_above_scale_is_rejected() {
        let mut answers = QuestionnaireAnswers {
            discomfort_level: 11,
            ..QuestionnaireAnswers::default()
        };
        assert_eq!(
            message(QuestionSlide::DiscomfortAreas.validate(&answers)),
            Some(DISCOMFORT_LEVEL_OUT_OF_RANGE)
        );

        answers.discomfort_level = MAX_DISCOMFORT_LEVEL;
        assert!(QuestionSlide::DiscomfortAreas.validate(&answers).is_ok());
    }

    #[test]
    fn test_last_slide_matches_question_count() {
        assert_eq!(QuestionSlide::LAST.number(), TOTAL_QUESTIONS);
        assert_eq!(QuestionSlide::ALL.len(), usize::from(TOTAL_QUESTIONS));
    }

    #[test]
    fn test_work_habits_require_every_answer() {
        let mut answers = QuestionnaireAnswers {
            posture_adjust: Some("yes".to_owned()),
            tense_breathing: Some("no".to_owned()),
            movement_breaks: Some("yes".to_owned()),
            after_work_stretch: Some("no".to_owned()),
            ..QuestionnaireAnswers::default()
        };
        assert_eq!(
            message(QuestionSlide::WorkHabits.validate(&answers)),
            Some(ANSWER_ALL_WORK_HABITS)
        );

        answers.overexert = Some("sometimes".to_owned());
        assert!(QuestionSlide::WorkHabits.validate(&answers).is_ok());
    }

    #[test]
    fn test_validation_error_carries_slide_number() {
        let result = QuestionSlide::BreathAwareness.validate(&QuestionnaireAnswers::default());
        assert_eq!(
            result,
            Err(QuestionnaireError::validation(5, SELECT_BREATH_AWARENESS))
        );
    }
}
