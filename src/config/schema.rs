// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule set definitions.
//!
//! Both validators run from a fixed, compiled-in [`RuleSet`]. There is no
//! configuration file: the sets below are the whole policy.

use serde::Serialize;

/// Maximum number of characters in a commit message or PR title.
pub const MAX_MESSAGE_LENGTH: usize = 72;

/// Commit type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Build,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Test,
    Style,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Style => "style",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Build,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Test,
            CommitType::Style,
        ]
    }
}

/// Parsing is exact: no aliases, no case folding.
impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of text a rule set validates. Drives diagnostic wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    CommitMessage,
    PrTitle,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::CommitMessage => "commit-message",
            Target::PrTitle => "pr-title",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable set of rules for one validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// What is being validated.
    pub target: Target,

    /// Maximum length in characters.
    pub max_length: usize,

    /// Allowed commit types, in display order.
    pub allowed_types: &'static [CommitType],

    /// Whether the `type: message` shape is checked before anything else.
    pub format_precheck: bool,
}

impl RuleSet {
    /// Rules applied to every commit of a push event.
    pub const COMMIT_MESSAGES: RuleSet = RuleSet {
        target: Target::CommitMessage,
        max_length: MAX_MESSAGE_LENGTH,
        allowed_types: &[
            CommitType::Build,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Test,
        ],
        format_precheck: false,
    };

    /// Rules applied to a pull request title.
    pub const PR_TITLE: RuleSet = RuleSet {
        target: Target::PrTitle,
        max_length: MAX_MESSAGE_LENGTH,
        allowed_types: &[
            CommitType::Build,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Test,
            CommitType::Style,
        ],
        format_precheck: true,
    };

    /// Check whether a raw type token is allowed by this rule set.
    pub fn allows(&self, token: &str) -> bool {
        token
            .parse::<CommitType>()
            .map(|t| self.allowed_types.contains(&t))
            .unwrap_or(false)
    }

    /// The allowed types rendered as `{build, ci, ...}`.
    pub fn allowed_types_display(&self) -> String {
        let names: Vec<&str> = self.allowed_types.iter().map(|t| t.as_str()).collect();
        format!("{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_type_from_str() {
        assert_eq!("feat".parse::<CommitType>(), Ok(CommitType::Feat));
        assert_eq!("style".parse::<CommitType>(), Ok(CommitType::Style));
        assert!("unknown".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_commit_type_is_case_sensitive() {
        assert!("Feat".parse::<CommitType>().is_err());
        assert!("FIX".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_commit_type_display() {
        assert_eq!(CommitType::Feat.to_string(), "feat");
        assert_eq!(CommitType::Refactor.to_string(), "refactor");
    }

    #[test]
    fn test_style_only_allowed_in_pr_titles() {
        assert!(!RuleSet::COMMIT_MESSAGES.allows("style"));
        assert!(RuleSet::PR_TITLE.allows("style"));
    }

    #[test]
    fn test_commit_message_rules_allow_core_types() {
        for token in ["build", "ci", "docs", "feat", "fix", "perf", "refactor", "test"] {
            assert!(RuleSet::COMMIT_MESSAGES.allows(token), "{token}");
            assert!(RuleSet::PR_TITLE.allows(token), "{token}");
        }
        assert!(!RuleSet::COMMIT_MESSAGES.allows("chore"));
    }

    #[test]
    fn test_allowed_types_display() {
        assert_eq!(
            RuleSet::COMMIT_MESSAGES.allowed_types_display(),
            "{build, ci, docs, feat, fix, perf, refactor, test}"
        );
        assert!(RuleSet::PR_TITLE
            .allowed_types_display()
            .ends_with("test, style}"));
    }

    #[test]
    fn test_only_pr_title_runs_precheck() {
        assert!(RuleSet::PR_TITLE.format_precheck);
        assert!(!RuleSet::COMMIT_MESSAGES.format_precheck);
        assert_eq!(RuleSet::PR_TITLE.max_length, 72);
    }
}
