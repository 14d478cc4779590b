// ABOUTME: Catalog command: lists the stretch or exercise catalog
// ABOUTME: Useful for checking a CSV edit before it reaches the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_formatted;
use anyhow::Result;
use stretchwell::catalog::CatalogLoader;
use stretchwell::formatters::OutputFormat;

/// Print every stretch
pub async fn stretches<C>(catalog: &C, format: OutputFormat) -> Result<()>
where
    C: CatalogLoader + ?Sized,
{
    let stretches = catalog.load_stretches().await?;
    print_formatted(stretches.as_slice(), format)
}

/// Print every exercise
pub async fn exercises<C>(catalog: &C, format: OutputFormat) -> Result<()>
where
    C: CatalogLoader + ?Sized,
{
    let exercises = catalog.load_exercises().await?;
    print_formatted(exercises.as_slice(), format)
}
