//! Configuration handling for git-build-state
//!
//! All settings live in git config under `build-state.*`, so they can be
//! set globally or per repository:
//!
//! ```bash
//! git config --global build-state.auth.user alice
//! git config build-state.endpoint https://stash.example.com
//! ```

use thiserror::Error;
use url::Url;

use super::command::{Git, GitError};
use super::remote::remote_host;
use crate::client::BasicAuth;

pub const ENDPOINT_KEY: &str = "build-state.endpoint";
pub const PORT_KEY: &str = "build-state.port";
pub const AUTH_USER_KEY: &str = "build-state.auth.user";
pub const AUTH_CREDENTIALS_KEY: &str = "build-state.auth.credentials";
pub const LOG_FORMAT_KEY: &str = "build-state.format.log";
pub const STATE_FORMAT_KEY: &str = "build-state.format.state";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing git config {0}. Run 'git build-state setup' first.")]
    Missing(&'static str),

    #[error("Unable to derive build-state endpoint from git remote '{0}'")]
    InvalidRemote(String),

    #[error("Invalid build-state endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Settings read from git config. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub credentials: Option<String>,
    pub log_format: Option<String>,
    pub state_format: Option<String>,
}

impl Settings {
    /// Loads every `build-state.*` key
    pub fn load(git: &Git) -> Result<Self, GitError> {
        let get = |key: &str| -> Result<Option<String>, GitError> {
            Ok(git.config_get(key)?.filter(|value| !value.is_empty()))
        };

        Ok(Self {
            endpoint: get(ENDPOINT_KEY)?,
            port: get(PORT_KEY)?,
            user: get(AUTH_USER_KEY)?,
            credentials: get(AUTH_CREDENTIALS_KEY)?,
            log_format: get(LOG_FORMAT_KEY)?,
            state_format: get(STATE_FORMAT_KEY)?,
        })
    }

    /// Basic auth from the stored user and encoded credentials
    pub fn basic_auth(&self) -> Result<BasicAuth, ConfigError> {
        let user = self
            .user
            .as_deref()
            .ok_or(ConfigError::Missing(AUTH_USER_KEY))?;
        let credentials = self
            .credentials
            .as_deref()
            .ok_or(ConfigError::Missing(AUTH_CREDENTIALS_KEY))?;
        Ok(BasicAuth::from_credentials(user, credentials))
    }

    /// Base URL of the build-status service.
    ///
    /// The configured endpoint wins. Otherwise the host of the first git
    /// remote is used with `proto` and the configured port.
    pub fn api_url(&self, proto: &str, git: &Git) -> Result<Url, ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(Url::parse(endpoint)?);
        }
        let remote = git.first_remote()?;
        self.api_url_for_remote(proto, &remote)
    }

    /// Base URL derived from `remote`, ignoring any configured endpoint
    pub fn api_url_for_remote(&self, proto: &str, remote: &str) -> Result<Url, ConfigError> {
        let host = remote_host(remote).ok_or_else(|| ConfigError::InvalidRemote(remote.to_string()))?;
        let authority = match &self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        };
        Ok(Url::parse(&format!("{}://{}", proto, authority))?)
    }
}
