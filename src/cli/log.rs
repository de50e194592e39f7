//! `log` command: branch history with aggregate build counts

use anyhow::Result;

use super::output::Output;
use super::session::{renderer, Session};
use crate::format::{LogLine, DEFAULT_LOG_TEMPLATE};

/// Prints every commit of `branch` (default: current branch) with its counts
pub fn run(
    output: &Output,
    session: &Session,
    template: Option<&str>,
    branch: Option<&str>,
) -> Result<()> {
    let renderer = renderer(
        output,
        template,
        session.settings.log_format.as_deref(),
        DEFAULT_LOG_TEMPLATE,
    )?;

    let log = session.git.short_log(branch)?;
    output.verbose_ctx("log", &format!("{} commit(s) in log", log.len()));

    let stats = if log.is_empty() {
        Default::default()
    } else {
        output.verbose_ctx("log", &format!("POST {}", session.client.stats_url()?));
        session.client.batch_status(&log.commit_ids())?
    };
    output.verbose_ctx("log", &format!("Build status for {} commit(s)", stats.len()));

    let lines = LogLine::collect(&log, &stats);
    output.write(&renderer.log(&lines)?)?;
    Ok(())
}
