// ABOUTME: Single-slot preference storage with overwrite semantics
// ABOUTME: JSON file backend for the CLI and an in-memory backend for tests and embedding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference store
//!
//! Holds at most one [`UserPreferences`] record. Saving replaces the previous
//! record wholesale; there is no history.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stretchwell_core::constants::defaults::{APP_DIR_NAME, PREFERENCES_FILE_NAME};
use stretchwell_core::models::UserPreferences;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Storage backend for the questionnaire result
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the saved record, `None` when nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>>;

    /// Replace the saved record; `false` means the backend declined the write
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` or `SerializationError` if the write fails
    async fn save_preferences(&self, preferences: &UserPreferences) -> AppResult<bool>;
}

// ============================================================================
// JSON File Store
// ============================================================================

/// Stores the record as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform default location, e.g. `~/.local/share/stretchwell/user_preferences.json`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    /// File backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved preferences");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read preferences from {}",
                    self.path.display()
                ))
                .with_resource_id(self.path.display().to_string())
                .with_source(e));
            }
        };

        match serde_json::from_slice::<UserPreferences>(&bytes) {
            Ok(preferences) => Ok(Some(preferences)),
            Err(e) => {
                // Same outcome as an empty slot: the user is sent back to the questionnaire
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable saved preferences"
                );
                Ok(None)
            }
        }
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> AppResult<bool> {
        let payload = serde_json::to_vec_pretty(preferences)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create {}", parent.display())).with_source(e)
            })?;
        }

        let temp = self.temp_path();
        fs::write(&temp, payload).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}", temp.display())).with_source(e)
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}", self.path.display())).with_source(e)
        })?;

        info!(
            path = %self.path.display(),
            areas = preferences.discomfort_areas.len(),
            routine = preferences.routine_duration.name.as_str(),
            "Saved questionnaire preferences"
        );
        Ok(true)
    }
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Keeps the record in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: RwLock<Option<UserPreferences>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a record
    #[must_use]
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self {
            slot: RwLock::new(Some(preferences)),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryStore {
    async fn get_saved_preferences(&self) -> AppResult<Option<UserPreferences>> {
        Ok(self.slot.read().await.clone())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> AppResult<bool> {
        *self.slot.write().await = Some(preferences.clone());
        Ok(true)
    }
}
