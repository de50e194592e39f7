//! Detailed build status records and the service's error payload

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build state tag reported by the service.
///
/// Kept as an open string: the server may add states we do not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildState(String);

impl BuildState {
    pub const SUCCESSFUL: &'static str = "SUCCESSFUL";
    pub const FAILED: &'static str = "FAILED";
    pub const IN_PROGRESS: &'static str = "INPROGRESS";

    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_successful(&self) -> bool {
        self.0 == Self::SUCCESSFUL
    }

    pub fn is_failed(&self) -> bool {
        self.0 == Self::FAILED
    }

    pub fn is_in_progress(&self) -> bool {
        self.0 == Self::IN_PROGRESS
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single build result attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub state: BuildState,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Milliseconds since the epoch on the wire, RFC 3339 when serialized
    #[serde(deserialize_with = "chrono::serde::ts_milliseconds::deserialize")]
    pub date_added: DateTime<Utc>,
}

/// Paged response of the single-commit endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusPage {
    pub size: u64,
    pub limit: u64,
    pub is_last_page: bool,
    pub start: u64,
    pub values: Vec<StatusRecord>,
}

impl StatusPage {
    /// A page with `size == 0` carries no build status for the commit
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops records beyond `size`
    pub fn truncate_to_size(&mut self) {
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);
        self.values.truncate(size);
    }
}

/// One entry of the service's error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteErrorEntry {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub exception_name: Option<String>,
}

/// Error payload: `{"errors": [{"message", "exceptionName"}, ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub errors: Vec<RemoteErrorEntry>,
}

impl RemoteError {
    /// All messages, newline-joined in the order received
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for RemoteError {}
