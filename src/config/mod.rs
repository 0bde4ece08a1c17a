// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for convcheck.
//!
//! The rule sets are compiled in. The only runtime input is the path of the
//! event payload, taken from the CI environment.

mod schema;

pub use schema::*;

/// Environment variable holding the path of the CI event payload.
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
