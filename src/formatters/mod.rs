// ABOUTME: Output format abstraction for printing dashboards, catalogs and preferences
// ABOUTME: Supports human-readable text (default) and JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Everything the CLI prints goes through [`format_output`], so each printable
//! type is both `Serialize` (for JSON) and [`TextRender`] (for the terminal).
//!
//! ```rust,ignore
//! use stretchwell::formatters::{format_output, OutputFormat};
//!
//! let output = format_output(&view, OutputFormat::Json)?;
//! println!("{output}");
//! ```

/// Plain-text renderers
pub mod text;

use serde::Serialize;
use std::error::Error;
use std::fmt;

pub use text::TextRender;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Render `data` in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails. Text rendering is infallible.
pub fn format_output<T>(data: &T, format: OutputFormat) -> Result<String, FormatError>
where
    T: Serialize + TextRender + ?Sized,
{
    match format {
        OutputFormat::Text => Ok(data.render_text()),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}
