// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator dispatch and execution.

use crate::config::{RuleSet, EVENT_PATH_ENV};
use crate::error::{CheckError, EventError, Result};
use crate::event::{load_event, CommitRecord, PullRequestEvent, PushEvent};
use crate::rules::{BatchResult, RuleEngine};
use std::path::PathBuf;

use super::args::{Cli, OutputFormat, Validator};

/// Run the given validator with the given arguments.
pub fn run(validator: Validator, cli: &Cli) -> Result<()> {
    let event_path = resolve_event_path(cli)?;

    match validator {
        Validator::CommitMessages => run_commit_messages(cli, &event_path),
        Validator::PrTitle => run_pr_title(cli, &event_path),
    }
}

fn resolve_event_path(cli: &Cli) -> Result<PathBuf> {
    cli.event_path.clone().ok_or_else(|| {
        CheckError::Event(EventError::PathNotSet {
            env: EVENT_PATH_ENV,
        })
    })
}

/// Check every commit of a push event.
fn run_commit_messages(cli: &Cli, event_path: &std::path::Path) -> Result<()> {
    let event: PushEvent = load_event(event_path)?;
    tracing::debug!("Checking {} commit messages", event.commits.len());

    let engine = RuleEngine::new(RuleSet::COMMIT_MESSAGES);
    let mut batch = engine.validate_batch(
        event.commits.iter().map(|c| c.message.as_str()),
        |message| {
            if cli.format == OutputFormat::Text {
                println!("{}", message);
            }
        },
    );
    attach_commit_sha(&mut batch, &event.commits);

    batch.print(cli.format);
    batch.into_result()
}

/// Record the SHA of the failing commit, which is always the last one checked.
fn attach_commit_sha(batch: &mut BatchResult, commits: &[CommitRecord]) {
    let index = batch.checked.saturating_sub(1);

    if let Some(failure) = batch.failure.as_mut() {
        failure.commit_sha = commits.get(index).and_then(|c| c.id.clone());
        tracing::debug!(commit = ?failure.commit_sha, "Commit {} failed validation", index + 1);
    }
}

/// Check the title of a pull request event.
fn run_pr_title(cli: &Cli, event_path: &std::path::Path) -> Result<()> {
    let event: PullRequestEvent = load_event(event_path)?;
    tracing::debug!(number = ?event.pull_request.number, "Checking pull request title");

    let title = match event.pull_request.title() {
        Some(title) => title,
        None => {
            BatchResult::missing_title().print(cli.format);
            return Err(CheckError::MissingTitle);
        }
    };

    let engine = RuleEngine::new(RuleSet::PR_TITLE);
    let batch = BatchResult::single(engine.validate(title));

    batch.print(cli.format);
    batch.into_result()
}
