// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for convcheck.
//!
//! Rule violations and fatal input problems share one [`CheckError`] so the
//! binaries can decide in one place what to print and how to exit.

use crate::config::Target;
use std::path::PathBuf;
use thiserror::Error;

/// Prompt printed when a pull request arrives without a title.
pub const MISSING_TITLE_PROMPT: &str =
    "PR doesn't have a title, please add one that follows our guidelines.";

/// The main error type for convcheck operations.
#[derive(Error, Debug)]
pub enum CheckError {
    // Payload errors
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    // A message broke a rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // Pull request without a title
    #[error("{}", MISSING_TITLE_PROMPT)]
    MissingTitle,
}

impl CheckError {
    /// Whether the failure was already written to stdout as a diagnostic.
    pub fn is_reported(&self) -> bool {
        matches!(self, CheckError::Validation(_) | CheckError::MissingTitle)
    }
}

/// Errors locating or decoding the CI event payload.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("{env} is not set and no --event-path was given")]
    PathNotSet { env: &'static str },

    #[error("Failed to read event payload {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload {}: {source}", .path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A message that failed one of the rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{diagnostic}")]
pub struct ValidationError {
    /// Which validator rejected the message.
    pub target: Target,
    /// The offending message.
    pub message: String,
    /// Code of the violated rule.
    pub rule: &'static str,
    /// The human-readable diagnostic line.
    pub diagnostic: String,
}

/// Result type alias for convcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_set_names_variable() {
        let err = EventError::PathNotSet {
            env: "GITHUB_EVENT_PATH",
        };
        assert!(err.to_string().contains("GITHUB_EVENT_PATH"));
    }

    #[test]
    fn test_read_failed_display() {
        let err = EventError::ReadFailed {
            path: PathBuf::from("/path/to/event.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let text = err.to_string();
        assert!(text.contains("/path/to/event.json"));
        assert!(text.contains("gone"));
    }

    #[test]
    fn test_validation_error_displays_diagnostic_only() {
        let err: CheckError = ValidationError {
            target: Target::CommitMessage,
            message: "feat: x.".to_string(),
            rule: "trailing-period",
            diagnostic: "Commit message 'feat: x.' ends with a period.".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Commit message 'feat: x.' ends with a period."
        );
        assert!(err.is_reported());
    }

    #[test]
    fn test_missing_title_is_reported() {
        assert!(CheckError::MissingTitle.is_reported());
        assert_eq!(CheckError::MissingTitle.to_string(), MISSING_TITLE_PROMPT);
    }

    #[test]
    fn test_event_errors_are_not_reported() {
        let err: CheckError = EventError::PathNotSet { env: "X" }.into();
        assert!(!err.is_reported());
        assert!(err.to_string().starts_with("Event error:"));
    }
}
