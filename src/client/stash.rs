//! Client for the Bitbucket Server (Stash) build-status REST API
//!
//! Two endpoints are used:
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | [`StatusClient::batch_status`] | `POST rest/build-status/1.0/commits/stats` | commit id → counts |
//! | [`StatusClient::commit_status`] | `GET rest/build-status/1.0/commits/{id}` | paged status records |
//!
//! Every call is a single blocking round trip. Nothing is retried.

use std::collections::HashSet;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::auth::Authenticator;
use super::error::ClientError;
use crate::domain::{CommitId, CommitStats, RemoteError, StatusPage};

/// Header that lets the server skip its XSRF check
pub const CSRF_HEADER: &str = "X-Atlassian-Token";
pub const CSRF_VALUE: &str = "no-check";

const STATS_PATH: &str = "rest/build-status/1.0/commits/stats";
const COMMITS_PATH: &str = "rest/build-status/1.0/commits";

/// Result of decoding a body that may hold either the expected shape or
/// the service's error payload
#[derive(Debug, PartialEq)]
pub enum Decoded<T> {
    Body(T),
    Remote(RemoteError),
}

/// Decodes `body` as `T`, falling back to [`RemoteError`].
///
/// If neither shape matches, the error from the `T` attempt is returned.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Decoded<T>, serde_json::Error> {
    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(Decoded::Body(value)),
        Err(primary) => match serde_json::from_slice::<RemoteError>(body) {
            Ok(remote) => Ok(Decoded::Remote(remote)),
            Err(_) => Err(primary),
        },
    }
}

/// Returns the error payload in `body`, if it carries at least one entry
fn remote_error(body: &[u8]) -> Option<RemoteError> {
    serde_json::from_slice::<RemoteError>(body)
        .ok()
        .filter(|remote| !remote.is_empty())
}

/// Maps a raw response to `T` or the matching [`ClientError`]
fn interpret<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ClientError> {
    if !status.is_success() {
        return Err(remote_error(body).map_or(ClientError::Status(status), ClientError::Remote));
    }

    match decode::<T>(body)? {
        Decoded::Body(value) => Ok(value),
        Decoded::Remote(remote) => Err(ClientError::Remote(remote)),
    }
}

/// Build-status client bound to one server and one set of credentials
#[derive(Debug)]
pub struct StatusClient {
    base: Url,
    auth: Box<dyn Authenticator>,
    http: Client,
}

impl StatusClient {
    /// Creates a client for `base` (scheme, host and optional port)
    pub fn new(base: Url, auth: impl Authenticator + 'static) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("git-build-state/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(base, auth, http))
    }

    /// Creates a client that sends requests through `http`
    pub fn with_http_client(base: Url, auth: impl Authenticator + 'static, http: Client) -> Self {
        Self {
            base,
            auth: Box::new(auth),
            http,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of the batch endpoint
    pub fn stats_url(&self) -> Result<Url, ClientError> {
        self.endpoint(STATS_PATH)
    }

    /// URL of the single-commit endpoint for `commit`
    pub fn commit_url(&self, commit: &CommitId) -> Result<Url, ClientError> {
        self.endpoint(&format!("{}/{}", COMMITS_PATH, commit))
    }

    /// Looks up aggregate counts for `commits` in one request.
    ///
    /// Commits the server does not know are absent from the result. Keys the
    /// server returns that were not requested are dropped.
    pub fn batch_status(&self, commits: &[CommitId]) -> Result<CommitStats, ClientError> {
        let body = serde_json::to_vec(commits).map_err(ClientError::Encode)?;
        let request = self
            .http
            .post(self.stats_url()?)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let (status, body) = self.send(request)?;
        let mut stats: CommitStats = interpret(status, &body)?;

        let requested: HashSet<&CommitId> = commits.iter().collect();
        stats.retain(|id, _| requested.contains(id));
        Ok(stats)
    }

    /// Looks up the detailed status records for `commit`.
    ///
    /// An empty page is an error: [`ClientError::Remote`] when the body also
    /// carries an error payload, [`ClientError::NotFound`] otherwise. Records
    /// beyond the reported `size` are dropped.
    pub fn commit_status(&self, commit: &CommitId) -> Result<StatusPage, ClientError> {
        let request = self.http.get(self.commit_url(commit)?);

        let (status, body) = self.send(request)?;
        let mut page: StatusPage = interpret(status, &body)?;

        if page.is_empty() {
            return Err(remote_error(&body)
                .map_or_else(|| ClientError::NotFound(commit.clone()), ClientError::Remote));
        }
        page.truncate_to_size();
        Ok(page)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    fn send(&self, request: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ClientError> {
        let request = self
            .auth
            .authenticate(request)
            .header(CSRF_HEADER, CSRF_VALUE);

        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        Ok((status, body))
    }
}
