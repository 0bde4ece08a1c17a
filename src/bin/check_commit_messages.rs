// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checks every commit message of a push event.

use convcheck::cli::{entry, Validator};
use std::process::ExitCode;

fn main() -> ExitCode {
    entry(Validator::CommitMessages)
}
