// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checks the title of a pull request event.

use convcheck::cli::{entry, Validator};
use std::process::ExitCode;

fn main() -> ExitCode {
    entry(Validator::PrTitle)
}
