// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! convcheck - conventional commit checks for CI
//!
//! Validates the commit messages of a push event and the title of a pull
//! request event against a conventional-commit style format.
//!
//! # Rules
//!
//! - **Length**: at most 72 characters
//! - **Type**: the text before the first colon is an allowed commit type
//! - **Case**: the text after the colon does not start upper-case
//! - **Trailing period**: the message does not end with `.`
//!
//! PR titles additionally get a `type: message` format precheck and allow
//! the `style` type.
//!
//! # Example
//!
//! ```
//! use convcheck::config::RuleSet;
//! use convcheck::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
//! assert!(engine.validate("feat: add retry logic").is_valid());
//! assert!(!engine.validate("feat: Add retry logic").is_valid());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod rules;

pub use config::RuleSet;
pub use error::{CheckError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of convcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git branch at compile time (if available).
    pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

    /// Value vergen emits when git information could not be collected.
    const PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let sha = GIT_SHA.filter(|s| *s != PLACEHOLDER);
        let branch = GIT_BRANCH.filter(|b| *b != PLACEHOLDER);

        match (sha, branch) {
            (Some(sha), Some(branch)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], branch)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }

}
