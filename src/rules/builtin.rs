// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every check looks at the raw message and returns the violation it found,
//! if any. Ordering and first-failure handling live in the engine.

use crate::config::{RuleSet, Target};

/// A broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// No `type: message` shape.
    Format,
    /// Too many characters.
    TooLong { length: usize, max: usize },
    /// The type before the colon is not allowed.
    InvalidType { found: String },
    /// The text after the colon starts with an upper-case letter.
    UpperCaseStart { letter: char },
    /// The message ends with `.`.
    TrailingPeriod,
    /// Nothing after the colon, or no colon at all.
    MissingSubject,
}

impl Violation {
    /// Rule code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Format => "format",
            Violation::TooLong { .. } => "max-length",
            Violation::InvalidType { .. } => "type-not-allowed",
            Violation::UpperCaseStart { .. } => "subject-case",
            Violation::TrailingPeriod => "trailing-period",
            Violation::MissingSubject => "subject-missing",
        }
    }

    /// The diagnostic line printed for `message`.
    pub fn diagnostic(&self, rules: &RuleSet, message: &str) -> String {
        match (rules.target, self) {
            (_, Violation::Format) => {
                "PR title format incorrect, should be 'type: message' ex: 'fix: a known issue'"
                    .to_string()
            }
            (Target::CommitMessage, Violation::TooLong { .. }) => {
                format!("Commit message '{}' too long.", message)
            }
            (Target::PrTitle, Violation::TooLong { max, .. }) => format!(
                "PR title message '{}' too long. Max length is {} characters.",
                message, max
            ),
            (Target::CommitMessage, Violation::InvalidType { .. }) => format!(
                "Commit type invalid. It needs to be one of {}",
                rules.allowed_types_display()
            ),
            (Target::PrTitle, Violation::InvalidType { .. }) => format!(
                "PR type invalid. It needs to be one of {}.",
                rules.allowed_types_display()
            ),
            (Target::CommitMessage, Violation::UpperCaseStart { .. }) => {
                format!("Commit message '{}' starts with upper case letter.", message)
            }
            (Target::PrTitle, Violation::UpperCaseStart { letter }) => format!(
                "PR title message '{}' starts with upper case letter: '{}'",
                message, letter
            ),
            (Target::CommitMessage, Violation::TrailingPeriod) => {
                format!("Commit message '{}' ends with a period.", message)
            }
            (Target::PrTitle, Violation::TrailingPeriod) => {
                format!("PR title message '{}' ends with a period.", message)
            }
            (Target::CommitMessage, Violation::MissingSubject) => format!(
                "Commit message '{}' has no text after the type, should be 'type: message'.",
                message
            ),
            (Target::PrTitle, Violation::MissingSubject) => format!(
                "PR title message '{}' has no text after the type, should be 'type: message'.",
                message
            ),
        }
    }

    /// A hint for fixing the message.
    pub fn suggestion(&self, rules: &RuleSet) -> String {
        match self {
            Violation::Format | Violation::MissingSubject => {
                "Write it as 'type: message', for example 'fix: a known issue'".to_string()
            }
            Violation::TooLong { max, .. } => {
                format!("Shorten it to {} characters or less", max)
            }
            Violation::InvalidType { found } => format!(
                "Replace '{}' with one of {}",
                found,
                rules.allowed_types_display()
            ),
            Violation::UpperCaseStart { letter } => format!(
                "Start with '{}' instead of '{}'",
                letter.to_lowercase(),
                letter
            ),
            Violation::TrailingPeriod => "Remove the trailing period".to_string(),
        }
    }
}

/// Type and subject halves of a message, split on the first colon.
fn split_type(message: &str) -> (&str, Option<&str>) {
    match message.split_once(':') {
        Some((prefix, rest)) => (prefix.trim(), Some(rest.trim())),
        None => (message.trim(), None),
    }
}

/// The subject, unless it is empty or opens with another colon (`feat: : x`).
fn subject(message: &str) -> Option<&str> {
    split_type(message)
        .1
        .filter(|rest| !rest.is_empty() && !rest.starts_with(':'))
}

/// Apply the rules in order and stop at the first violation.
pub fn apply_builtin_rules(message: &str, rules: &RuleSet) -> Option<Violation> {
    if rules.format_precheck {
        if let Some(violation) = check_format(message) {
            return Some(violation);
        }
    }

    check_max_length(message, rules)
        .or_else(|| check_allowed_type(message, rules))
        .or_else(|| check_subject_case(message))
        .or_else(|| check_trailing_period(message))
}

/// Check for the `type: message` shape.
fn check_format(message: &str) -> Option<Violation> {
    match subject(message) {
        Some(_) => None,
        None => Some(Violation::Format),
    }
}

/// Check maximum length, in characters.
fn check_max_length(message: &str, rules: &RuleSet) -> Option<Violation> {
    let length = message.chars().count();

    if length > rules.max_length {
        Some(Violation::TooLong {
            length,
            max: rules.max_length,
        })
    } else {
        None
    }
}

/// Check if the commit type is allowed.
fn check_allowed_type(message: &str, rules: &RuleSet) -> Option<Violation> {
    let (found, _) = split_type(message);

    if rules.allows(found) {
        None
    } else {
        Some(Violation::InvalidType {
            found: found.to_string(),
        })
    }
}

/// Check if the subject starts with lowercase.
fn check_subject_case(message: &str) -> Option<Violation> {
    match subject(message).and_then(|s| s.chars().next()) {
        None => Some(Violation::MissingSubject),
        Some(letter) if letter.is_uppercase() => Some(Violation::UpperCaseStart { letter }),
        Some(_) => None,
    }
}

/// Check if the message ends with a period.
fn check_trailing_period(message: &str) -> Option<Violation> {
    if message.ends_with('.') {
        Some(Violation::TrailingPeriod)
    } else {
        None
    }
}
