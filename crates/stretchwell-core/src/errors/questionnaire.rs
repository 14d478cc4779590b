// ABOUTME: Questionnaire-specific error types for slide navigation and submission
// ABOUTME: Structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use crate::constants::messages::SAVE_FAILED;
use thiserror::Error;

/// Errors raised while moving through or submitting the questionnaire.
///
/// None of these are fatal: the navigator stays on its current slide and the
/// front end shows the message inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// The current slide failed its validation predicate
    #[error("{message}")]
    Validation {
        /// One-based slide index that failed
        slide: u8,
        /// Message shown to the user
        message: &'static str,
    },
    /// `next` was requested on the last question; submission is required instead
    #[error("Question {slide} is the last question; submit the questionnaire to continue")]
    SubmissionRequired {
        /// One-based slide index
        slide: u8,
    },
    /// `submit` was requested before reaching the last question
    #[error("The questionnaire can only be submitted from question {last}")]
    NotOnLastQuestion {
        /// Slide the navigator is on
        slide: u8,
        /// The last question index
        last: u8,
    },
    /// Target slide does not exist
    #[error("Question {slide} does not exist")]
    UnknownSlide {
        /// Requested slide index
        slide: u8,
    },
    /// The questionnaire was already submitted
    #[error("The questionnaire has already been completed")]
    AlreadyCompleted,
    /// The preference store reported failure
    #[error("{}", SAVE_FAILED)]
    SaveFailed,
}

impl QuestionnaireError {
    /// Create a validation error for a slide
    #[must_use]
    pub const fn validation(slide: u8, message: &'static str) -> Self {
        Self::Validation { slide, message }
    }

    /// Whether this is a validation failure (as opposed to a flow or save error)
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<QuestionnaireError> for AppError {
    fn from(error: QuestionnaireError) -> Self {
        let code = match error {
            QuestionnaireError::Validation { .. } => ErrorCode::MissingRequiredField,
            QuestionnaireError::SaveFailed => ErrorCode::StorageError,
            QuestionnaireError::SubmissionRequired { .. }
            | QuestionnaireError::NotOnLastQuestion { .. }
            | QuestionnaireError::UnknownSlide { .. }
            | QuestionnaireError::AlreadyCompleted => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_only() {
        let error = QuestionnaireError::validation(3, "Please select your intensity preference");
        assert_eq!(error.to_string(), "Please select your intensity preference");
        assert!(error.is_validation());
    }

    #[test]
    fn test_conversion_to_app_error() {
        let app: AppError = QuestionnaireError::SaveFailed.into();
        assert_eq!(app.code, ErrorCode::StorageError);
        assert_eq!(app.message, SAVE_FAILED);

        let app: AppError = QuestionnaireError::AlreadyCompleted.into();
        assert_eq!(app.code, ErrorCode::InvalidInput);
    }
}
