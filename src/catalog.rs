// ABOUTME: Loads the static exercise and stretch catalogs from CSV files
// ABOUTME: Converts pipe-delimited list columns into typed catalog records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog loading
//!
//! The catalog is two CSV files with a header row:
//!
//! ```text
//! exerciseId,name,description,duration,difficulty,bodyAreas
//! stretchId,name,description,duration,difficulty,bodyAreas,timeOfDay,priority,exercises
//! ```
//!
//! `bodyAreas` and `exercises` are pipe-delimited lists.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stretchwell_core::constants::catalog::{EXERCISES_FILE, STRETCHES_FILE};
use stretchwell_core::models::{
    split_list, BodyArea, ExerciseRecord, Intensity, Priority, StretchRecord, TimeOfDay,
};
use tokio::fs;
use tracing::{debug, info};

/// Source of catalog records
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Load every exercise
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadFailed` if the source is missing or malformed
    async fn load_exercises(&self) -> AppResult<Vec<ExerciseRecord>>;

    /// Load every stretch
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadFailed` if the source is missing or malformed
    async fn load_stretches(&self) -> AppResult<Vec<StretchRecord>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseRow {
    #[serde(alias = "id")]
    exercise_id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    body_areas: String,
}

impl From<ExerciseRow> for ExerciseRecord {
    fn from(row: ExerciseRow) -> Self {
        Self {
            exercise_id: row.exercise_id,
            name: row.name,
            description: row.description,
            duration: row.duration,
            difficulty: Intensity::from(row.difficulty),
            body_areas: body_areas(&row.body_areas),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StretchRow {
    #[serde(alias = "id")]
    stretch_id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    body_areas: String,
    time_of_day: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    exercises: String,
}

impl From<StretchRow> for StretchRecord {
    fn from(row: StretchRow) -> Self {
        Self {
            stretch_id: row.stretch_id,
            name: row.name,
            description: row.description,
            duration: row.duration,
            difficulty: Intensity::from(row.difficulty),
            body_areas: body_areas(&row.body_areas),
            time_of_day: TimeOfDay::parse(&row.time_of_day),
            priority: Priority::parse(&row.priority),
            exercises: split_list(&row.exercises),
        }
    }
}

fn body_areas(column: &str) -> Vec<BodyArea> {
    split_list(column).into_iter().map(BodyArea::from).collect()
}

fn parse_rows<R, T>(data: &[u8], source: &str) -> AppResult<Vec<T>>
where
    R: DeserializeOwned + Into<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<R>().enumerate() {
        let row = row.map_err(|e| {
            AppError::catalog(format!("Malformed row {} in {source}: {e}", index + 1))
                .with_resource_id(source)
                .with_details(serde_json::json!({ "row": index + 1 }))
                .with_source(e)
        })?;
        records.push(row.into());
    }

    debug!(source, records = records.len(), "Parsed catalog rows");
    Ok(records)
}

/// Parse exercise rows from CSV bytes
///
/// # Errors
///
/// Returns `CatalogLoadFailed` naming `source` if any row is malformed
pub fn parse_exercises(data: &[u8], source: &str) -> AppResult<Vec<ExerciseRecord>> {
    parse_rows::<ExerciseRow, ExerciseRecord>(data, source)
}

/// Parse stretch rows from CSV bytes
///
/// # Errors
///
/// Returns `CatalogLoadFailed` naming `source` if any row is malformed
pub fn parse_stretches(data: &[u8], source: &str) -> AppResult<Vec<StretchRecord>> {
    parse_rows::<StretchRow, StretchRecord>(data, source)
}

/// Catalog read from two CSV files
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    exercises_path: PathBuf,
    stretches_path: PathBuf,
}

impl CsvCatalog {
    /// Catalog from explicit file paths
    pub fn new(exercises_path: impl Into<PathBuf>, stretches_path: impl Into<PathBuf>) -> Self {
        Self {
            exercises_path: exercises_path.into(),
            stretches_path: stretches_path.into(),
        }
    }

    /// Catalog using the default file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(EXERCISES_FILE), dir.join(STRETCHES_FILE))
    }

    /// Exercise file
    #[must_use]
    pub fn exercises_path(&self) -> &Path {
        &self.exercises_path
    }

    /// Stretch file
    #[must_use]
    pub fn stretches_path(&self) -> &Path {
        &self.stretches_path
    }
}

async fn read_source(path: &Path) -> AppResult<Vec<u8>> {
    fs::read(path).await.map_err(|e| {
        AppError::catalog(format!("Failed to read catalog file {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}

#[async_trait]
impl CatalogLoader for CsvCatalog {
    async fn load_exercises(&self) -> AppResult<Vec<ExerciseRecord>> {
        let data = read_source(&self.exercises_path).await?;
        let source = self.exercises_path.display().to_string();
        let exercises = parse_exercises(&data, &source)?;
        info!(path = %source, count = exercises.len(), "Loaded exercise catalog");
        Ok(exercises)
    }

    async fn load_stretches(&self) -> AppResult<Vec<StretchRecord>> {
        let data = read_source(&self.stretches_path).await?;
        let source = self.stretches_path.display().to_string();
        let stretches = parse_stretches(&data, &source)?;
        info!(path = %source, count = stretches.len(), "Loaded stretch catalog");
        Ok(stretches)
    }
}
