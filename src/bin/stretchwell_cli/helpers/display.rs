// ABOUTME: Output helpers for stretchwell-cli
// ABOUTME: Prints formatted records to stdout and notices to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde::Serialize;
use stretchwell::constants::questionnaire::TOTAL_QUESTIONS;
use stretchwell::formatters::{format_output, OutputFormat, TextRender};
use stretchwell::questionnaire::QuestionSlide;

/// Print `data` in the requested format
pub fn print_formatted<T>(data: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + TextRender + ?Sized,
{
    let output = format_output(data, format)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Print a notice that is not part of the command output
pub fn print_notice(message: &str) {
    eprintln!("{message}");
}

/// Print a blocked questionnaire slide with its heading
pub fn print_slide_error(slide: QuestionSlide, message: &str) {
    eprintln!("Question {} of {TOTAL_QUESTIONS}: {}", slide.number(), slide.title());
    eprintln!("  {message}");
}
