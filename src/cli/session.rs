//! Wiring shared by the lookup commands

use anyhow::{Context, Result};

use super::output::Output;
use crate::client::StatusClient;
use crate::format::{Renderer, Template};
use crate::git::{Git, Settings};

/// Git access, settings and a client for the configured server
#[derive(Debug)]
pub struct Session {
    pub git: Git,
    pub settings: Settings,
    pub client: StatusClient,
}

impl Session {
    /// Reads git config and builds the client
    pub fn open(output: &Output, proto: &str) -> Result<Self> {
        let git = Git::new();
        let settings = Settings::load(&git).context("Failed to read git config")?;

        let auth = settings.basic_auth()?;
        let url = settings.api_url(proto, &git)?;
        output.verbose_ctx("session", &format!("Endpoint: {}", url));
        output.verbose_ctx("session", &format!("User: {}", auth.user()));

        let client = StatusClient::new(url, auth)?;
        Ok(Self {
            git,
            settings,
            client,
        })
    }
}

/// Picks the output mode.
///
/// JSON output ignores templates. Otherwise the `--template` flag wins over
/// the configured template, which wins over `default`.
pub fn renderer(
    output: &Output,
    flag: Option<&str>,
    configured: Option<&str>,
    default: &str,
) -> Result<Renderer> {
    if output.is_json() {
        return Ok(Renderer::Structured);
    }

    let source = flag
        .filter(|template| !template.is_empty())
        .or(configured)
        .unwrap_or(default);
    output.verbose_ctx("format", &format!("Template: {:?}", source));

    Ok(Renderer::Template(Template::parse(source)?))
}
