//! Errors returned by the build-status client

use thiserror::Error;

use crate::domain::{CommitId, RemoteError};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, DNS or TLS failure
    #[error("Request to build-status service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response without an error payload
    #[error("Build-status service responded with {0}")]
    Status(reqwest::StatusCode),

    /// Body matched neither the expected shape nor the error shape
    #[error("Unexpected response from build-status service: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Error payload reported by the service, messages newline-joined
    #[error("{0}")]
    Remote(RemoteError),

    /// Single-commit lookup returned an empty page
    #[error("No build status found for commit {}", .0.abbrev())]
    NotFound(CommitId),

    #[error("Invalid build-status endpoint: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// True for errors reported by the service itself rather than the transport
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Remote(_) | ClientError::NotFound(_))
    }
}
