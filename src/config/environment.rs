// ABOUTME: Environment-based configuration loading for catalog files and preference storage
// ABOUTME: Reads STRETCHWELL_* variables with defaults relative to the working directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::CsvCatalog;
use crate::errors::{AppError, AppResult};
use crate::store::JsonFileStore;
use std::env::{self, VarError};
use std::path::PathBuf;
use stretchwell_core::constants::catalog::{DEFAULT_CATALOG_DIR, EXERCISES_FILE, STRETCHES_FILE};
use tracing::{debug, info};

/// Directory holding the catalog CSV files
pub const CATALOG_DIR_VAR: &str = "STRETCHWELL_CATALOG_DIR";
/// Exercise catalog file name or path
pub const EXERCISES_FILE_VAR: &str = "STRETCHWELL_EXERCISES_FILE";
/// Stretch catalog file name or path
pub const STRETCHES_FILE_VAR: &str = "STRETCHWELL_STRETCHES_FILE";
/// Preference file path
pub const PREFERENCES_PATH_VAR: &str = "STRETCHWELL_PREFERENCES_PATH";

/// Catalog file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base directory for relative file names
    pub dir: PathBuf,
    /// Exercise CSV, relative to `dir` unless absolute
    pub exercises_file: PathBuf,
    /// Stretch CSV, relative to `dir` unless absolute
    pub stretches_file: PathBuf,
}

impl CatalogConfig {
    /// Resolved exercise file path
    #[must_use]
    pub fn exercises_path(&self) -> PathBuf {
        self.dir.join(&self.exercises_file)
    }

    /// Resolved stretch file path
    #[must_use]
    pub fn stretches_path(&self) -> PathBuf {
        self.dir.join(&self.stretches_file)
    }

    /// CSV catalog reading the resolved paths
    #[must_use]
    pub fn csv_catalog(&self) -> CsvCatalog {
        CsvCatalog::new(self.exercises_path(), self.stretches_path())
    }
}

/// Preference store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON file holding the saved preferences
    pub preferences_path: PathBuf,
}

impl StoreConfig {
    /// File store at the configured path
    #[must_use]
    pub fn json_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.preferences_path)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog locations
    pub catalog: CatalogConfig,
    /// Preference store location
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty value, or if no
    /// preference path is configured and the platform has no data directory
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading configuration from environment variables");

        let preferences_path = match env_path(PREFERENCES_PATH_VAR)? {
            Some(path) => path,
            None => JsonFileStore::default_path().ok_or_else(|| {
                AppError::config(format!("No platform data directory; set {PREFERENCES_PATH_VAR}"))
            })?,
        };

        let config = Self {
            catalog: CatalogConfig {
                dir: env_path_or(CATALOG_DIR_VAR, DEFAULT_CATALOG_DIR)?,
                exercises_file: env_path_or(EXERCISES_FILE_VAR, EXERCISES_FILE)?,
                stretches_file: env_path_or(STRETCHES_FILE_VAR, STRETCHES_FILE)?,
            },
            store: StoreConfig { preferences_path },
        };

        config.validate()?;
        info!(
            catalog_dir = %config.catalog.dir.display(),
            preferences = %config.store.preferences_path.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the catalog directory
    #[must_use]
    pub fn with_catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog.dir = dir.into();
        self
    }

    /// Replace the preference file path
    #[must_use]
    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.preferences_path = path.into();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the preference path names a directory rather than a file
    pub fn validate(&self) -> AppResult<()> {
        let path = &self.store.preferences_path;
        if path.file_name().is_none() {
            return Err(AppError::config_invalid(format!(
                "{PREFERENCES_PATH_VAR} must name a file, got {}",
                path.display()
            ))
            .with_resource_id(path.display().to_string()));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Stretch-Well Configuration:\n\
             - Exercises: {}\n\
             - Stretches: {}\n\
             - Preferences: {}",
            self.catalog.exercises_path().display(),
            self.catalog.stretches_path().display(),
            self.store.preferences_path.display()
        )
    }
}

/// Optional path variable; set-but-empty is rejected
fn env_path(key: &str) -> AppResult<Option<PathBuf>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => {
            Err(AppError::config(format!("{key} is set but empty")))
        }
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::config(format!("Invalid {key} value")).with_source(e)),
    }
}

/// Path variable or default value
fn env_path_or(key: &str, default: &str) -> AppResult<PathBuf> {
    Ok(env_path(key)?.unwrap_or_else(|| PathBuf::from(default)))
}
