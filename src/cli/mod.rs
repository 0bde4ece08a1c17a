// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for convcheck.
//!
//! Both binaries share one argument parser and one entry point; they differ
//! only in the [`Validator`] they pass in.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat, Validator};
pub use dispatch::run;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse arguments, run `validator` and map the outcome to an exit code.
///
/// Every failure exits with status 1, including command line errors.
pub fn entry(validator: Validator) -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return ExitCode::from(parse_error_status(e.use_stderr(), e.print())),
    };

    setup_logging(cli.debug);
    tracing::debug!("convcheck {}", crate::version::version_string());

    match run(validator, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_reported() => {
            tracing::debug!("Validation failed: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit status after clap printed help, a version or a usage error.
///
/// Help and version exit 0 unless they could not be written; usage errors
/// always exit 1.
fn parse_error_status(use_stderr: bool, printed: std::io::Result<()>) -> u8 {
    match printed {
        Ok(()) if !use_stderr => 0,
        Ok(()) => 1,
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            1
        }
    }
}

/// Set up logging/tracing. Logs go to stderr, stdout is for diagnostics.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("convcheck=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
