// ABOUTME: Core types and constants for the Stretch-Well wellness engine
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stretch-Well Core
//!
//! Foundation crate providing shared types and constants. It changes
//! infrequently so the rest of the workspace compiles incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `QuestionnaireError`
//! - **constants**: Questionnaire layout, dashboard limits, defaults, and messages
//! - **models**: Answers, preferences, and catalog records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
