// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

// Outside a git checkout vergen falls back to placeholder values, which
// `version::GIT_SHA` treats the same as a missing SHA.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder().git_sha(true).git_branch().emit()?;
    Ok(())
}
