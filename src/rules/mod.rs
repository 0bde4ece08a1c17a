// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for message validation.
//!
//! The same checks back both validators; a [`RuleSet`](crate::config::RuleSet)
//! picks the allowed types and whether the format precheck runs.

mod builtin;
mod engine;
mod validator;

pub use builtin::{apply_builtin_rules, Violation};
pub use engine::RuleEngine;
pub use validator::{BatchResult, ValidationIssue, ValidationResult};
