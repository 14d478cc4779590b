// ABOUTME: Error types for the stretchwell crate, re-exported from stretchwell-core
// ABOUTME: Keeps `crate::errors` paths stable for library modules and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! All library operations return [`AppResult`]. Questionnaire navigation uses
//! the structured [`QuestionnaireError`], which converts into [`AppError`].

pub use stretchwell_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, QuestionnaireError,
};
