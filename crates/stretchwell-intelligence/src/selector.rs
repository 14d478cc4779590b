// ABOUTME: Selects one stretch per time-of-day bucket from personalized candidates
// ABOUTME: Greedy anytime balancing followed by a stable highest-priority pick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily stretch selection
//!
//! Candidates are bucketed into morning, midday and evening. A stretch tagged
//! `anytime` joins whichever bucket is smallest when it is encountered, with
//! ties going to the earliest bucket in [`TimeBucket::ALL`]. This is a greedy
//! placement, not a global balance. Each non-empty bucket then contributes its
//! highest-priority stretch, the earliest candidate winning on equal priority.

use serde::Serialize;
use stretchwell_core::models::{StretchRecord, TimeBucket, TimeOfDay};
use tracing::debug;

/// A stretch chosen for one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStretch {
    /// Bucket the stretch was selected for
    pub bucket: TimeBucket,
    /// The selected stretch
    pub stretch: StretchRecord,
}

impl DailyStretch {
    /// Capitalized bucket name for the card header
    #[must_use]
    pub const fn display_time_of_day(&self) -> &'static str {
        self.bucket.display_name()
    }
}

/// Distribute candidates over the three buckets, preserving input order
/// within each bucket. Stretches with an unrecognized time of day are skipped.
#[must_use]
pub fn bucket_candidates(candidates: &[StretchRecord]) -> [Vec<&StretchRecord>; 3] {
    let mut buckets: [Vec<&StretchRecord>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for stretch in candidates {
        let target = match &stretch.time_of_day {
            TimeOfDay::Slot(bucket) => *bucket,
            TimeOfDay::Anytime => least_filled(&buckets),
            TimeOfDay::Other(value) => {
                debug!(
                    stretch.id = %stretch.stretch_id,
                    time_of_day = %value,
                    "Skipping stretch with unrecognized time of day"
                );
                continue;
            }
        };
        buckets[target.index()].push(stretch);
    }

    buckets
}

/// Smallest bucket; `min_by_key` keeps the first of equal minima
fn least_filled(buckets: &[Vec<&StretchRecord>; 3]) -> TimeBucket {
    TimeBucket::ALL
        .into_iter()
        .min_by_key(|bucket| buckets[bucket.index()].len())
        .unwrap_or(TimeBucket::Morning)
}

/// Highest-priority stretch, earliest on ties
fn top_priority<'a>(bucket: &[&'a StretchRecord]) -> Option<&'a StretchRecord> {
    let mut best: Option<&StretchRecord> = None;
    for &candidate in bucket {
        match best {
            Some(current) if current.priority.rank() >= candidate.priority.rank() => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Pick at most one stretch per bucket, in bucket order
#[must_use]
pub fn select_daily_stretches(candidates: &[StretchRecord]) -> Vec<DailyStretch> {
    let buckets = bucket_candidates(candidates);

    let selected: Vec<DailyStretch> = TimeBucket::ALL
        .into_iter()
        .filter_map(|bucket| {
            top_priority(&buckets[bucket.index()]).map(|stretch| DailyStretch {
                bucket,
                stretch: stretch.clone(),
            })
        })
        .collect();

    debug!(
        candidates = candidates.len(),
        selected = selected.len(),
        "Selected daily stretches"
    );

    selected
}
