//! `state` command: build status of a single commit

use anyhow::Result;

use super::output::Output;
use super::session::{renderer, Session};
use crate::format::DEFAULT_STATE_TEMPLATE;

/// Resolves `reference` (default `HEAD`) and prints its build status
pub fn run(
    output: &Output,
    session: &Session,
    template: Option<&str>,
    reference: Option<&str>,
) -> Result<()> {
    let renderer = renderer(
        output,
        template,
        session.settings.state_format.as_deref(),
        DEFAULT_STATE_TEMPLATE,
    )?;

    output.verbose_ctx("state", &format!("Git ref: {}", reference.unwrap_or("HEAD")));
    let commit = session.git.resolve_ref(reference)?;
    output.verbose_ctx("state", &format!("Git commit: {}", commit));
    output.verbose_ctx("state", &format!("GET {}", session.client.commit_url(&commit)?));

    let page = session.client.commit_status(&commit)?;
    output.verbose_ctx(
        "state",
        &format!("Received {} of {} status record(s)", page.values.len(), page.size),
    );

    output.write(&renderer.page(&page)?)?;
    Ok(())
}
