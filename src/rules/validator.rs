// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::{RuleSet, Target};
use crate::error::{CheckError, Result, ValidationError, MISSING_TITLE_PROMPT};
use console::style;

use super::builtin::Violation;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Rule code for programmatic handling.
    pub code: &'static str,
    /// Human-readable diagnostic.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Build the issue for a violation found in `message`.
    pub fn from_violation(violation: &Violation, rules: &RuleSet, message: &str) -> Self {
        Self {
            code: violation.code(),
            message: violation.diagnostic(rules, message),
            suggestion: Some(violation.suggestion(rules)),
        }
    }

    /// Format the issue for terminal output. Always a single line.
    pub fn format(&self) -> String {
        style(&self.message).red().bold().to_string()
    }
}

/// Result of validating one message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Which validator produced this result.
    pub target: Target,
    /// The original message.
    pub message: String,
    /// Commit SHA when validating a pushed commit.
    pub commit_sha: Option<String>,
    /// The first issue found, if any.
    pub issue: Option<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new, passing validation result.
    pub fn new(target: Target, message: impl Into<String>) -> Self {
        Self {
            target,
            message: message.into(),
            commit_sha: None,
            issue: None,
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    /// Rule code of the issue, if any.
    pub fn rule(&self) -> Option<&'static str> {
        self.issue.as_ref().map(|i| i.code)
    }

    /// Convert a failing result into its error.
    pub fn to_error(&self) -> Option<ValidationError> {
        self.issue.as_ref().map(|issue| ValidationError {
            target: self.target,
            message: self.message.clone(),
            rule: issue.code,
            diagnostic: issue.message.clone(),
        })
    }
}

/// Outcome of a whole run: how many messages were checked and which one
/// failed first.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Which validator ran.
    pub target: Target,
    /// Messages checked, including the failing one.
    pub checked: usize,
    /// The first failing message.
    pub failure: Option<ValidationResult>,
}

impl BatchResult {
    /// A run with no failures yet.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            checked: 0,
            failure: None,
        }
    }

    /// Wrap the result of a single-message run.
    pub fn single(result: ValidationResult) -> Self {
        let target = result.target;
        Self {
            target,
            checked: 1,
            failure: if result.is_valid() { None } else { Some(result) },
        }
    }

    /// A pull request run that stopped before any check because the title
    /// was missing.
    pub fn missing_title() -> Self {
        let failure = ValidationResult {
            target: Target::PrTitle,
            message: String::new(),
            commit_sha: None,
            issue: Some(ValidationIssue {
                code: "title-missing",
                message: MISSING_TITLE_PROMPT.to_string(),
                suggestion: Some("Give the pull request a 'type: message' title".to_string()),
            }),
        };

        Self {
            target: Target::PrTitle,
            checked: 0,
            failure: Some(failure),
        }
    }

    /// Check if every message passed.
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// `Ok` when every message passed, otherwise the first failure.
    pub fn into_result(self) -> Result<()> {
        match self.failure.as_ref().and_then(ValidationResult::to_error) {
            None => Ok(()),
            Some(err) => Err(CheckError::Validation(err)),
        }
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => self.print_json(),
            OutputFormat::Text => self.print_text(),
        }
    }

    /// Print the failing diagnostic, if any. Successful runs print nothing.
    fn print_text(&self) {
        if let Some(issue) = self.failure.as_ref().and_then(|f| f.issue.as_ref()) {
            println!("{}", issue.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string(&self.to_json()).unwrap_or_default()
        );
    }

    /// The JSON document printed in JSON mode.
    pub fn to_json(&self) -> serde_json::Value {
        let issue = self.failure.as_ref().and_then(|f| f.issue.as_ref());

        serde_json::json!({
            "valid": self.is_valid(),
            "target": self.target,
            "checked": self.checked,
            "commit": self.failure.as_ref().and_then(|f| f.commit_sha.as_ref()),
            "message": self.failure.as_ref().map(|f| &f.message),
            "rule": issue.map(|i| i.code),
            "diagnostic": issue.map(|i| &i.message),
            "suggestion": issue.and_then(|i| i.suggestion.as_ref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(message: &str) -> ValidationResult {
        let rules = RuleSet::COMMIT_MESSAGES;
        let mut result = ValidationResult::new(rules.target, message);
        result.issue = Some(ValidationIssue::from_violation(
            &Violation::TrailingPeriod,
            &rules,
            message,
        ));
        result
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new(Target::CommitMessage, "feat: test");
        assert!(result.is_valid());
        assert!(result.rule().is_none());
        assert!(result.to_error().is_none());
    }

    #[test]
    fn test_validation_result_to_error() {
        let err = failing("feat: test.").to_error().unwrap();
        assert_eq!(err.rule, "trailing-period");
        assert_eq!(err.message, "feat: test.");
        assert_eq!(err.diagnostic, "Commit message 'feat: test.' ends with a period.");
    }

    #[test]
    fn test_issue_format_is_one_line() {
        let issue = failing("feat: test.").issue.unwrap();
        let formatted = issue.format();
        assert!(formatted.contains("ends with a period"));
        assert!(!formatted.contains('\n'));
    }

    #[test]
    fn test_batch_single() {
        let ok = BatchResult::single(ValidationResult::new(Target::PrTitle, "fix: a"));
        assert!(ok.is_valid());
        assert_eq!(ok.checked, 1);
        assert!(ok.into_result().is_ok());

        let bad = BatchResult::single(failing("fix: a."));
        assert!(!bad.is_valid());
        assert!(matches!(
            bad.into_result(),
            Err(CheckError::Validation(ValidationError { rule: "trailing-period", .. }))
        ));
    }

    #[test]
    fn test_batch_json() {
        let mut batch = BatchResult::new(Target::CommitMessage);
        batch.checked = 2;
        batch.failure = Some(failing("feat: b."));

        let json = batch.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["target"], "commit-message");
        assert_eq!(json["checked"], 2);
        assert_eq!(json["message"], "feat: b.");
        assert_eq!(json["rule"], "trailing-period");
        assert!(json["commit"].is_null());
    }

    #[test]
    fn test_batch_json_names_failing_commit() {
        let mut failure = failing("fix: c.");
        failure.commit_sha = Some("0a1b2c3d".to_string());

        let mut batch = BatchResult::new(Target::CommitMessage);
        batch.checked = 1;
        batch.failure = Some(failure);

        assert_eq!(batch.to_json()["commit"], "0a1b2c3d");
    }

    #[test]
    fn test_batch_json_valid() {
        let json = BatchResult::new(Target::PrTitle).to_json();
        assert_eq!(json["valid"], true);
        assert!(json["rule"].is_null());
        assert!(json["message"].is_null());
    }

    #[test]
    fn test_missing_title() {
        let batch = BatchResult::missing_title();
        assert_eq!(batch.checked, 0);
        assert_eq!(batch.to_json()["rule"], "title-missing");
        assert_eq!(batch.to_json()["diagnostic"], MISSING_TITLE_PROMPT);
    }
}
