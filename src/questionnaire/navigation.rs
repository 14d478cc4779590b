// ABOUTME: Slide cursor state machine for the seven-question questionnaire
// ABOUTME: Validates forward moves, steps back freely, and completes only on a successful save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalizer::normalize;
use super::slides::QuestionSlide;
use crate::store::PreferenceStore;
use chrono::{DateTime, Utc};
use stretchwell_core::constants::questionnaire::TOTAL_QUESTIONS;
use stretchwell_core::errors::QuestionnaireError;
use stretchwell_core::models::{QuestionnaireAnswers, UserPreferences};
use tracing::{debug, error, info, warn};

/// Where the questionnaire cursor is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// Showing a question slide
    Question(QuestionSlide),
    /// Answers saved; the front end moves on to the dashboard
    Completed,
}

/// Owns the slide cursor
///
/// Errors never move the cursor. The only way into [`NavigationState::Completed`]
/// is a `submit` that the store accepted.
#[derive(Debug, Clone)]
pub struct QuestionnaireNavigator {
    state: NavigationState,
}

impl Default for QuestionnaireNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireNavigator {
    /// Navigator positioned on the first question
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: NavigationState::Question(QuestionSlide::FIRST),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    /// Current slide, `None` once completed
    #[must_use]
    pub const fn current_question(&self) -> Option<QuestionSlide> {
        match self.state {
            NavigationState::Question(slide) => Some(slide),
            NavigationState::Completed => None,
        }
    }

    /// Whether the answers have been saved
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, NavigationState::Completed)
    }

    /// Progress bar fill, 0 on the first slide and 100 on the last or once completed
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = u32::from(TOTAL_QUESTIONS);
        match self.state {
            NavigationState::Completed => 100,
            NavigationState::Question(slide) => {
                let done = u32::from(slide.number()) - 1;
                u8::try_from(done * 100 / (total - 1)).unwrap_or(100)
            }
        }
    }

    fn active_slide(&self) -> Result<QuestionSlide, QuestionnaireError> {
        self.current_question()
            .ok_or(QuestionnaireError::AlreadyCompleted)
    }

    /// Validate the current slide and advance one question
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the current slide is incomplete,
    /// `SubmissionRequired` on the last slide, `AlreadyCompleted` after submit
    pub fn next(
        &mut self,
        answers: &QuestionnaireAnswers,
    ) -> Result<QuestionSlide, QuestionnaireError> {
        let current = self.active_slide()?;
        current.validate(answers).inspect_err(|e| {
            debug!(slide = current.number(), reason = %e, "Forward navigation blocked");
        })?;

        let target = current
            .next()
            .ok_or(QuestionnaireError::SubmissionRequired {
                slide: current.number(),
            })?;
        self.state = NavigationState::Question(target);
        debug!(from = current.number(), to = target.number(), "Advanced questionnaire");
        Ok(target)
    }

    /// Step back one question without validation; stays put on the first slide
    ///
    /// # Errors
    ///
    /// Returns `AlreadyCompleted` after submit
    pub fn prev(&mut self) -> Result<QuestionSlide, QuestionnaireError> {
        let current = self.active_slide()?;
        let target = current.previous().unwrap_or(current);
        self.state = NavigationState::Question(target);
        debug!(from = current.number(), to = target.number(), "Stepped back in questionnaire");
        Ok(target)
    }

    /// Jump to a one-based slide index
    ///
    /// Moving forward validates the current slide only, matching the slide
    /// buttons that carry a target index. Moving backward is unconditional.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSlide` for an index outside 1..=7, `Validation` when a
    /// forward jump is blocked, `AlreadyCompleted` after submit
    pub fn go_to(
        &mut self,
        slide: u8,
        answers: &QuestionnaireAnswers,
    ) -> Result<QuestionSlide, QuestionnaireError> {
        let current = self.active_slide()?;
        let target =
            QuestionSlide::from_number(slide).ok_or(QuestionnaireError::UnknownSlide { slide })?;

        if target.number() > current.number() {
            current.validate(answers)?;
        }
        self.state = NavigationState::Question(target);
        debug!(from = current.number(), to = target.number(), "Jumped in questionnaire");
        Ok(target)
    }

    /// Validate the last slide, normalize the answers and save them
    ///
    /// # Errors
    ///
    /// See [`Self::submit_at`]
    pub async fn submit<S>(
        &mut self,
        answers: &QuestionnaireAnswers,
        store: &S,
    ) -> Result<UserPreferences, QuestionnaireError>
    where
        S: PreferenceStore + ?Sized,
    {
        self.submit_at(answers, store, Utc::now()).await
    }

    /// [`Self::submit`] with an explicit record timestamp
    ///
    /// # Errors
    ///
    /// Returns `NotOnLastQuestion` before the last slide, `Validation` if the
    /// last slide is incomplete, `SaveFailed` if the store declined or failed
    /// the write, `AlreadyCompleted` after a previous submit
    pub async fn submit_at<S>(
        &mut self,
        answers: &QuestionnaireAnswers,
        store: &S,
        timestamp: DateTime<Utc>,
    ) -> Result<UserPreferences, QuestionnaireError>
    where
        S: PreferenceStore + ?Sized,
    {
        let current = self.active_slide()?;
        if current != QuestionSlide::LAST {
            return Err(QuestionnaireError::NotOnLastQuestion {
                slide: current.number(),
                last: QuestionSlide::LAST.number(),
            });
        }
        current.validate(answers)?;

        let preferences = normalize(answers, timestamp);
        match store.save_preferences(&preferences).await {
            Ok(true) => {
                self.state = NavigationState::Completed;
                info!(
                    activity = preferences.daily_activity.as_str(),
                    areas = preferences.discomfort_areas.len(),
                    routine = preferences.routine_duration.name.as_str(),
                    "Questionnaire submitted"
                );
                Ok(preferences)
            }
            Ok(false) => {
                warn!("Preference store declined the questionnaire save");
                Err(QuestionnaireError::SaveFailed)
            }
            Err(e) => {
                error!(error = %e, "Failed to save questionnaire preferences");
                Err(QuestionnaireError::SaveFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use crate::test_utils::create_complete_answers;

    #[test]
    fn test_starts_on_first_question() {
        let nav = QuestionnaireNavigator::new();
        assert_eq!(nav.current_question(), Some(QuestionSlide::DailyActivity));
        assert_eq!(nav.progress_percent(), 0);
    }

    #[test]
    fn test_next_blocked_by_validation() {
        let mut nav = QuestionnaireNavigator::new();
        let error = nav.next(&QuestionnaireAnswers::default()).unwrap_err();
        assert_eq!(error.to_string(), "Please select your main daily activity");
        assert_eq!(nav.current_question(), Some(QuestionSlide::DailyActivity));
    }

    #[test]
    fn test_prev_is_unconditional_and_clamped() {
        let mut nav = QuestionnaireNavigator::new();
        assert_eq!(nav.prev().unwrap(), QuestionSlide::DailyActivity);

        let answers = create_complete_answers();
        nav.next(&answers).unwrap();
        nav.next(&answers).unwrap();
        let empty = QuestionnaireAnswers::default();
        assert!(nav.next(&empty).unwrap_err().is_validation());
        assert_eq!(nav.prev().unwrap(), QuestionSlide::DiscomfortAreas);
    }

    #[test]
    fn test_next_on_last_requires_submission() {
        let mut nav = QuestionnaireNavigator::new();
        let answers = create_complete_answers();
        for _ in 1..7 {
            nav.next(&answers).unwrap();
        }
        assert_eq!(nav.progress_percent(), 100);
        assert_eq!(
            nav.next(&answers).unwrap_err(),
            QuestionnaireError::SubmissionRequired { slide: 7 }
        );
    }

    #[test]
    fn test_go_to_backward_skips_validation() {
        let mut nav = QuestionnaireNavigator::new();
        let answers = create_complete_answers();
        nav.go_to(5, &answers).unwrap();
        assert_eq!(nav.progress_percent(), 66);
        assert_eq!(
            nav.go_to(2, &QuestionnaireAnswers::default()).unwrap(),
            QuestionSlide::DiscomfortAreas
        );
        assert_eq!(
            nav.go_to(9, &answers).unwrap_err(),
            QuestionnaireError::UnknownSlide { slide: 9 }
        );
    }

    #[tokio::test]
    async fn test_submit_completes_and_saves() {
        let mut nav = QuestionnaireNavigator::new();
        let answers = create_complete_answers();
        let store = InMemoryStore::new();

        assert!(matches!(
            nav.submit(&answers, &store).await.unwrap_err(),
            QuestionnaireError::NotOnLastQuestion { slide: 1, last: 7 }
        ));

        nav.go_to(7, &answers).unwrap();
        let saved = nav.submit(&answers, &store).await.unwrap();
        assert!(nav.is_completed());
        assert_eq!(store.get_saved_preferences().await.unwrap(), Some(saved));
        assert_eq!(nav.prev().unwrap_err(), QuestionnaireError::AlreadyCompleted);
    }

    #[tokio::test]
    async fn test_submit_after_jump_caps_discomfort_level() {
        let mut nav = QuestionnaireNavigator::new();
        let mut answers = create_complete_answers();
        answers.discomfort_level = 200;
        let store = InMemoryStore::new();

        // jumping from slide 1 never validates slide 2
        nav.go_to(7, &answers).unwrap();
        let saved = nav.submit(&answers, &store).await.unwrap();
        assert_eq!(saved.discomfort_level, 10);

        let stored = store.get_saved_preferences().await.unwrap().unwrap();
        assert_eq!(stored.discomfort_level, 10);
    }

    #[test]
    fn test_next_rejects_discomfort_level_above_scale() {
        let mut nav = QuestionnaireNavigator::new();
        let mut answers = create_complete_answers();
        answers.discomfort_level = 12;
        nav.next(&answers).unwrap();

        let error = nav.next(&answers).unwrap_err();
        assert!(error.is_validation());
        assert_eq!(nav.current_question(), Some(QuestionSlide::DiscomfortAreas));
    }
}
