// ABOUTME: Questionnaire command: walks the slides with answers from a JSON file and submits
// ABOUTME: Stops at the first slide whose validation fails and reports its message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{print_formatted, print_slide_error};
use anyhow::{Context, Result};
use std::path::Path;
use stretchwell::formatters::OutputFormat;
use stretchwell::models::QuestionnaireAnswers;
use stretchwell::questionnaire::{QuestionSlide, QuestionnaireNavigator};
use stretchwell::store::PreferenceStore;
use tokio::fs;
use tracing::info;

/// Submit the answers in `answers_path`
pub async fn submit<S>(store: &S, answers_path: &Path) -> Result<()>
where
    S: PreferenceStore + ?Sized,
{
    let raw = fs::read_to_string(answers_path)
        .await
        .with_context(|| format!("Failed to read answers from {}", answers_path.display()))?;
    let answers: QuestionnaireAnswers = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid answers file {}", answers_path.display()))?;

    let mut navigator = QuestionnaireNavigator::new();
    while let Some(slide) = navigator.current_question() {
        if slide == QuestionSlide::LAST {
            break;
        }
        if let Err(e) = navigator.next(&answers) {
            print_slide_error(slide, &e.to_string());
            return Err(e.into());
        }
    }

    let preferences = match navigator.submit(&answers, store).await {
        Ok(preferences) => preferences,
        Err(e) => {
            if let Some(slide) = navigator.current_question() {
                print_slide_error(slide, &e.to_string());
            }
            return Err(e.into());
        }
    };

    info!(progress = navigator.progress_percent(), "Questionnaire complete");
    print_formatted(&preferences, OutputFormat::Text)
}
