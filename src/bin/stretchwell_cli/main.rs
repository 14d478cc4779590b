// ABOUTME: Stretch-Well CLI - questionnaire submission, dashboard rendering and catalog browsing
// ABOUTME: Wires environment configuration, logging, the CSV catalog and the JSON preference store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Submit questionnaire answers from a JSON file
//! stretchwell-cli questionnaire --answers answers.json
//!
//! # Show the dashboard as text, or as JSON at a fixed hour
//! stretchwell-cli dashboard
//! stretchwell-cli dashboard --format json --hour 8
//!
//! # List the catalog
//! stretchwell-cli catalog stretches
//! stretchwell-cli catalog exercises
//!
//! # Print the saved preferences
//! stretchwell-cli preferences show
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stretchwell::config::AppConfig;
use stretchwell::formatters::OutputFormat;
use stretchwell::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stretchwell-cli",
    about = "Stretch-Well questionnaire and dashboard",
    long_about = "Command-line front end for the Stretch-Well questionnaire, dashboard \
                  and stretch catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory containing exercises.csv and stretches.csv
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// Preference file override
    #[arg(long, global = true)]
    store_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate, normalize and save questionnaire answers
    Questionnaire {
        /// JSON file with the raw form answers
        #[arg(long)]
        answers: PathBuf,
    },

    /// Render the personalized dashboard
    Dashboard {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Local hour (0-23) to use for the greeting
        #[arg(long)]
        hour: Option<u32>,
    },

    /// List catalog records
    Catalog {
        #[command(subcommand)]
        kind: CatalogCommand,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Saved preference commands
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommand,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List every stretch
    Stretches,
    /// List every exercise
    Exercises,
}

#[derive(Subcommand)]
enum PreferencesCommand {
    /// Print the saved preferences
    Show {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.catalog_dir {
        config = config.with_catalog_dir(dir);
    }
    if let Some(path) = cli.store_path {
        config = config.with_preferences_path(path);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let store = Arc::new(config.store.json_store());
    let catalog = Arc::new(config.catalog.csv_catalog());

    match cli.command {
        Command::Questionnaire { answers } => {
            commands::questionnaire::submit(store.as_ref(), &answers).await?;
        }
        Command::Dashboard { format, hour } => {
            commands::dashboard::show(
                store,
                catalog,
                OutputFormat::from_str_param(&format),
                hour,
            )
            .await?;
        }
        Command::Catalog { kind, format } => {
            let format = OutputFormat::from_str_param(&format);
            match kind {
                CatalogCommand::Stretches => {
                    commands::catalog::stretches(catalog.as_ref(), format).await?;
                }
                CatalogCommand::Exercises => {
                    commands::catalog::exercises(catalog.as_ref(), format).await?;
                }
            }
        }
        Command::Preferences { action } => match action {
            PreferencesCommand::Show { format } => {
                commands::preferences::show(store.as_ref(), OutputFormat::from_str_param(&format))
                    .await?;
            }
        },
    }

    Ok(())
}
