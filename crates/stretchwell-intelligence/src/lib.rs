// ABOUTME: Stretch recommendation engine: time-of-day selection, counting, and focus tiers
// ABOUTME: Extracted from the main crate so the algorithms stay free of IO
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stretch-Well Intelligence
//!
//! Pure selection and presentation logic used by the dashboard:
//!
//! - [`selector`]: one stretch per time-of-day bucket
//! - [`formatting`]: exercise totals and display labels for area keys
//! - [`focus`]: positional grouping of discomfort areas into focus tiers

/// Focus-area tiering
pub mod focus;

/// Exercise counting and area-name formatting
pub mod formatting;

/// Time-of-day bucketed stretch selection
pub mod selector;

pub use focus::{focus_tags, FocusAreas, FocusTag, FocusTier};
pub use formatting::{count_exercises_in_recommendations, format_area_name, format_area_tags};
pub use selector::{bucket_candidates, select_daily_stretches, DailyStretch};
