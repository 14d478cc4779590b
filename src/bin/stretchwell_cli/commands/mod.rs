// ABOUTME: Re-exports command modules for stretchwell-cli
// ABOUTME: Provides access to questionnaire, dashboard, catalog and preference commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod dashboard;
pub mod preferences;
pub mod questionnaire;
