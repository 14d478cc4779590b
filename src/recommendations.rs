// ABOUTME: Personalized recommendation provider over the exercise and stretch catalogs
// ABOUTME: Filters catalog records by discomfort area and orders them by user relevance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::CatalogLoader;
use crate::errors::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use stretchwell_core::models::{
    BodyArea, ExerciseRecord, Intensity, StretchRecord, UserPreferences,
};
use tracing::debug;

/// Produces the candidate lists the dashboard works from
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Stretches relevant to the user's discomfort areas, most relevant first
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadFailed` if the stretch catalog cannot be loaded
    async fn personalized_recommendations(
        &self,
        preferences: &UserPreferences,
    ) -> AppResult<Vec<StretchRecord>>;

    /// Exercises targeting any of `areas`, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadFailed` if the exercise catalog cannot be loaded
    async fn exercises_for_body_areas(&self, areas: &[BodyArea]) -> AppResult<Vec<ExerciseRecord>>;
}

/// Recommendation provider backed by a [`CatalogLoader`]
///
/// The catalog is read on every call; it is small and loads are user driven.
#[derive(Clone)]
pub struct CatalogRecommendationProvider {
    catalog: Arc<dyn CatalogLoader>,
}

impl CatalogRecommendationProvider {
    /// Provider reading from `catalog`
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogLoader>) -> Self {
        Self { catalog }
    }
}

/// Distance between a stretch's difficulty and the preferred intensity;
/// unrecognized values sort after every known one
fn difficulty_distance(difficulty: &Intensity, preferred: &Intensity) -> u8 {
    match (difficulty.level(), preferred.level()) {
        (Some(d), Some(p)) => d.abs_diff(p),
        _ => u8::MAX,
    }
}

/// Keep stretches targeting `preferences.discomfort_areas`, ordered by the
/// first matching area, then closeness to the preferred intensity, then
/// catalog order
#[must_use]
pub fn rank_stretches(
    stretches: Vec<StretchRecord>,
    preferences: &UserPreferences,
) -> Vec<StretchRecord> {
    let areas = &preferences.discomfort_areas;
    if areas.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, u8, StretchRecord)> = stretches
        .into_iter()
        .filter_map(|stretch| {
            stretch.first_matching_area(areas).map(|area_rank| {
                let distance =
                    difficulty_distance(&stretch.difficulty, &preferences.intensity_preference);
                (area_rank, distance, stretch)
            })
        })
        .collect();

    // sort_by_key is stable, so catalog order breaks remaining ties
    ranked.sort_by_key(|(area_rank, distance, _)| (*area_rank, *distance));
    ranked.into_iter().map(|(_, _, stretch)| stretch).collect()
}

#[async_trait]
impl RecommendationProvider for CatalogRecommendationProvider {
    async fn personalized_recommendations(
        &self,
        preferences: &UserPreferences,
    ) -> AppResult<Vec<StretchRecord>> {
        if !preferences.has_discomfort_areas() {
            debug!("No discomfort areas selected; skipping stretch recommendations");
            return Ok(Vec::new());
        }

        let stretches = self.catalog.load_stretches().await?;
        let total = stretches.len();
        let ranked = rank_stretches(stretches, preferences);
        debug!(
            catalog = total,
            matched = ranked.len(),
            areas = preferences.discomfort_areas.len(),
            "Ranked personalized stretches"
        );
        Ok(ranked)
    }

    async fn exercises_for_body_areas(&self, areas: &[BodyArea]) -> AppResult<Vec<ExerciseRecord>> {
        if areas.is_empty() {
            return Ok(Vec::new());
        }

        let exercises = self.catalog.load_exercises().await?;
        Ok(exercises
            .into_iter()
            .filter(|exercise| exercise.targets_any(areas))
            .collect())
    }
}
