//! Rendering of lookup results in template or structured mode

use serde::Serialize;

use super::template::{FormatError, Template};
use crate::domain::{CommitId, CommitStat, CommitStats, ShortLog, StatusPage};

/// One `log` entry joined with its batch result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogLine {
    pub id: CommitId,
    pub message: String,
    /// `None` when the service returned nothing for this commit
    pub status: Option<CommitStat>,
}

impl LogLine {
    /// Pairs every log entry, in log order, with its counts
    pub fn collect(log: &ShortLog, stats: &CommitStats) -> Vec<LogLine> {
        log.entries()
            .iter()
            .map(|entry| LogLine {
                id: entry.id.clone(),
                message: entry.message.clone(),
                status: stats.get(&entry.id).copied(),
            })
            .collect()
    }
}

/// Template view of a [`LogLine`].
///
/// `status` is always an object so `{{ status.failed }}` resolves for every
/// commit. `hasStatus` tells a missing result apart from zero counts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogLineView<'a> {
    id: &'a CommitId,
    message: &'a str,
    has_status: bool,
    status: CommitStat,
}

impl<'a> From<&'a LogLine> for LogLineView<'a> {
    fn from(line: &'a LogLine) -> Self {
        Self {
            id: &line.id,
            message: &line.message,
            has_status: line.status.is_some(),
            status: line.status.unwrap_or_default(),
        }
    }
}

/// Output mode
#[derive(Debug, Clone)]
pub enum Renderer {
    /// One rendered block per record
    Template(Template),
    /// A single indented JSON document
    Structured,
}

impl Renderer {
    pub fn is_structured(&self) -> bool {
        matches!(self, Renderer::Structured)
    }

    /// Renders the records of a single-commit lookup.
    ///
    /// Template blocks are separated by a blank line. Structured mode emits
    /// the `values` array.
    pub fn page(&self, page: &StatusPage) -> Result<String, FormatError> {
        match self {
            Renderer::Template(template) => {
                let mut out = String::new();
                for record in &page.values {
                    push_block(&mut out, &template.render(record)?);
                    out.push('\n');
                }
                Ok(out)
            }
            Renderer::Structured => structured(&page.values),
        }
    }

    /// Renders `log` lines, one block per commit in log order.
    ///
    /// Templates see `hasStatus` and a zeroed `status` for commits without a
    /// result. Structured mode collects every line into one array, with
    /// `status: null` for those commits.
    pub fn log(&self, lines: &[LogLine]) -> Result<String, FormatError> {
        match self {
            Renderer::Template(template) => {
                let mut out = String::new();
                for line in lines {
                    push_block(&mut out, &template.render(&LogLineView::from(line))?);
                }
                Ok(out)
            }
            Renderer::Structured => structured(lines),
        }
    }
}

/// Appends `block`, terminating it with a newline
fn push_block(out: &mut String, block: &str) {
    out.push_str(block);
    if !block.ends_with('\n') {
        out.push('\n');
    }
}

/// Serializes `value` as indented JSON with a trailing newline
pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
