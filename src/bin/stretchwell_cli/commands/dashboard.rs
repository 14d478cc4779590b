// ABOUTME: Dashboard command: builds and prints the personalized dashboard
// ABOUTME: Prints a redirect notice when the questionnaire has not been completed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{print_formatted, print_notice};
use anyhow::{anyhow, Result};
use chrono::{Local, Timelike};
use std::sync::Arc;
use stretchwell::catalog::CatalogLoader;
use stretchwell::constants::messages::NO_SAVED_PREFERENCES;
use stretchwell::dashboard::{Dashboard, DashboardOutcome};
use stretchwell::formatters::OutputFormat;
use stretchwell::recommendations::CatalogRecommendationProvider;
use stretchwell::store::PreferenceStore;

/// Build and print the dashboard, optionally pinning the greeting hour
pub async fn show(
    store: Arc<dyn PreferenceStore>,
    catalog: Arc<dyn CatalogLoader>,
    format: OutputFormat,
    hour: Option<u32>,
) -> Result<()> {
    let mut now = Local::now().naive_local();
    if let Some(hour) = hour {
        now = now
            .with_hour(hour)
            .ok_or_else(|| anyhow!("--hour must be between 0 and 23, got {hour}"))?;
    }

    let dashboard = Dashboard::new(store, Arc::new(CatalogRecommendationProvider::new(catalog)));
    match dashboard.build_at(now).await {
        DashboardOutcome::Ready(view) => print_formatted(view.as_ref(), format),
        DashboardOutcome::RedirectToQuestionnaire => {
            print_notice(NO_SAVED_PREFERENCES);
            Ok(())
        }
    }
}
