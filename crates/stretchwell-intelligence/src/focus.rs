// ABOUTME: Positional grouping of discomfort areas into primary, secondary, and tertiary tiers
// ABOUTME: Fixed-width display grouping; the order of selection decides the tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::formatting::format_area_name;
use serde::Serialize;
use stretchwell_core::constants::dashboard::{
    PRIMARY_FOCUS_COUNT, SECONDARY_FOCUS_COUNT, TERTIARY_FOCUS_COUNT,
};
use stretchwell_core::constants::messages::GENERAL_WELLNESS;
use stretchwell_core::models::BodyArea;

/// Tier of a focus tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTier {
    /// First three selected areas
    Primary,
    /// Next two
    Secondary,
    /// Next two after that
    Tertiary,
}

/// Discomfort areas split by position; anything past the tertiary tier is ignored
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusAreas<'a> {
    /// Up to three areas
    pub primary: &'a [BodyArea],
    /// Up to two areas
    pub secondary: &'a [BodyArea],
    /// Up to two areas
    pub tertiary: &'a [BodyArea],
}

impl<'a> FocusAreas<'a> {
    /// Partition `areas` positionally
    #[must_use]
    pub fn partition(areas: &'a [BodyArea]) -> Self {
        let (primary, rest) = areas.split_at(areas.len().min(PRIMARY_FOCUS_COUNT));
        let (secondary, rest) = rest.split_at(rest.len().min(SECONDARY_FOCUS_COUNT));
        let (tertiary, _ignored) = rest.split_at(rest.len().min(TERTIARY_FOCUS_COUNT));
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// Whether every tier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.tertiary.is_empty()
    }
}

/// A rendered focus tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusTag {
    /// Display label
    pub label: String,
    /// Tier
    pub tier: FocusTier,
}

/// Focus tags for the dashboard; a single primary "General Wellness" tag when
/// no areas were selected
#[must_use]
pub fn focus_tags(areas: &[BodyArea]) -> Vec<FocusTag> {
    let tiers = FocusAreas::partition(areas);
    if tiers.is_empty() {
        return vec![FocusTag {
            label: GENERAL_WELLNESS.to_owned(),
            tier: FocusTier::Primary,
        }];
    }

    [
        (tiers.primary, FocusTier::Primary),
        (tiers.secondary, FocusTier::Secondary),
        (tiers.tertiary, FocusTier::Tertiary),
    ]
    .into_iter()
    .flat_map(|(group, tier)| {
        group.iter().map(move |area| FocusTag {
            label: format_area_name(area.as_str()),
            tier,
        })
    })
    .collect()
}
