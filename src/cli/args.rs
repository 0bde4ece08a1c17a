// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Conventional commit checks for CI.
///
/// Reads the CI event payload named by GITHUB_EVENT_PATH and exits with
/// status 1 on the first message that breaks a rule.
#[derive(Parser, Debug, Clone)]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit checks for CI", long_about = None)]
pub struct Cli {
    /// Path to the CI event payload
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    pub event_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Which validator a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Every commit message of a push event.
    CommitMessages,
    /// The title of a pull request event.
    PrTitle,
}
