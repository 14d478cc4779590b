// ABOUTME: Preferences command: prints the saved questionnaire result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{print_formatted, print_notice};
use anyhow::Result;
use stretchwell::constants::messages::NO_SAVED_PREFERENCES;
use stretchwell::formatters::OutputFormat;
use stretchwell::store::PreferenceStore;

/// Print the saved preferences, or a notice when there are none
pub async fn show<S>(store: &S, format: OutputFormat) -> Result<()>
where
    S: PreferenceStore + ?Sized,
{
    match store.get_saved_preferences().await? {
        Some(preferences) => print_formatted(&preferences, format),
        None => {
            print_notice(NO_SAVED_PREFERENCES);
            Ok(())
        }
    }
}
