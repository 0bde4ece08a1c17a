// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Event payload structures and loading.

use crate::error::{EventError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// A push event: the commits that were pushed, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    pub commits: Vec<CommitRecord>,
}

/// One commit of a push event.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    /// Full commit message.
    pub message: String,
    /// Commit SHA, when the platform provides it.
    #[serde(default)]
    pub id: Option<String>,
}

/// A pull request event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: PullRequestRecord,
}

/// The pull request of a pull request event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
}

impl PullRequestRecord {
    /// The title, or `None` when it is absent, null or empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// Load an event payload from a JSON file.
pub fn load_event<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!("Loading event payload from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| EventError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_event(&content, path)
}

/// Parse an event payload; `path` is only used for error messages.
pub fn parse_event<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| {
        EventError::ParseFailed {
            path: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}
