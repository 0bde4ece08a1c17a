// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for message validation.

use crate::config::RuleSet;

use super::builtin::apply_builtin_rules;
use super::validator::{BatchResult, ValidationIssue, ValidationResult};

/// Rule engine for validating commit messages and PR titles.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine with the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate a single message.
    pub fn validate(&self, message: &str) -> ValidationResult {
        let mut result = ValidationResult::new(self.rules.target, message);

        if let Some(violation) = apply_builtin_rules(message, &self.rules) {
            tracing::debug!(rule = violation.code(), "Message failed validation");
            result.issue = Some(ValidationIssue::from_violation(
                &violation,
                &self.rules,
                message,
            ));
        }

        result
    }

    /// Validate messages in order, stopping at the first failure.
    ///
    /// `before_each` sees every message right before it is checked; messages
    /// after the first failure are never passed to it.
    pub fn validate_batch<'a, I, F>(&self, messages: I, mut before_each: F) -> BatchResult
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str),
    {
        let mut batch = BatchResult::new(self.rules.target);

        for message in messages {
            before_each(message);
            batch.checked += 1;

            let result = self.validate(message);
            if !result.is_valid() {
                batch.failure = Some(result);
                break;
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_engine_validate() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        let result = engine.validate("feat: add retry logic");
        assert!(result.is_valid());
    }

    #[test]
    fn test_rule_engine_message_too_long() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        let result = engine.validate(&format!("fix: {}", "a".repeat(100)));
        assert_eq!(result.rule(), Some("max-length"));
    }

    #[test]
    fn test_rule_engine_scenarios() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        assert_eq!(
            engine.validate("Feat: add retry logic").rule(),
            Some("type-not-allowed")
        );
        assert_eq!(
            engine.validate("feat: Add retry logic").rule(),
            Some("subject-case")
        );
        assert_eq!(
            engine.validate("feat: add retry logic.").rule(),
            Some("trailing-period")
        );
        assert_eq!(
            engine.validate("style: tidy formatting").rule(),
            Some("type-not-allowed")
        );
    }

    #[test]
    fn test_rule_engine_pr_title() {
        let engine = RuleEngine::new(RuleSet::PR_TITLE);
        assert!(engine.validate("style: tidy formatting").is_valid());
        assert_eq!(engine.validate("tidy formatting").rule(), Some("format"));
    }

    #[test]
    fn test_batch_stops_at_first_failure() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        let mut seen = Vec::new();

        let batch = engine.validate_batch(
            ["feat: one", "fix: Two", "Nope: three"],
            |m| seen.push(m.to_string()),
        );

        assert!(!batch.is_valid());
        assert_eq!(batch.checked, 2);
        assert_eq!(seen, vec!["feat: one", "fix: Two"]);
        let failure = batch.failure.unwrap();
        assert_eq!(failure.message, "fix: Two");
        assert_eq!(failure.rule(), Some("subject-case"));
    }

    #[test]
    fn test_batch_all_valid() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        let batch = engine.validate_batch(["docs: readme", "ci: cache deps"], |_| {});
        assert!(batch.is_valid());
        assert_eq!(batch.checked, 2);
    }

    #[test]
    fn test_batch_empty() {
        let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
        let batch = engine.validate_batch(std::iter::empty::<&str>(), |_| {});
        assert!(batch.is_valid());
        assert_eq!(batch.checked, 0);
    }
}
