//! Commit identifiers and aggregate build counts
//!
//! A [`CommitId`] is the full hash as reported by git. The batch endpoint
//! answers with a [`CommitStats`] map keyed by those ids.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of characters shown for an abbreviated commit id
pub const ABBREV_LEN: usize = 7;

/// Full commit id, compared by exact string match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first seven characters, for display only
    pub fn abbrev(&self) -> &str {
        match self.0.char_indices().nth(ABBREV_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CommitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Aggregate build counts for one commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitStat {
    pub successful: u64,
    pub in_progress: u64,
    pub failed: u64,
}

impl fmt::Display for CommitStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successful: {}, In Progress: {}, Failed: {}",
            self.successful, self.in_progress, self.failed
        )
    }
}

/// Batch lookup result. A missing key means "no status", not zero counts.
pub type CommitStats = HashMap<CommitId, CommitStat>;

/// One line of `git log --pretty=oneline`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: CommitId,
    pub message: String,
}

/// Ordered log entries, duplicates kept as git reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortLog(Vec<LogEntry>);

impl ShortLog {
    /// Parses `git log --pretty=oneline` output.
    ///
    /// Lines without an id/message separator are skipped.
    pub fn parse(output: &str) -> Self {
        let entries = output
            .lines()
            .filter_map(|line| {
                let (id, message) = line.split_once(' ')?;
                if id.is_empty() {
                    return None;
                }
                Some(LogEntry {
                    id: CommitId::new(id),
                    message: message.to_string(),
                })
            })
            .collect();
        Self(entries)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.0
    }

    /// Commit ids in log order
    pub fn commit_ids(&self) -> Vec<CommitId> {
        self.0.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<LogEntry>> for ShortLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn abbrev_takes_seven_chars() {
        let id = CommitId::new("0123456789abcdef");
        assert_eq!(id.abbrev(), "0123456");
    }

    #[test]
    fn abbrev_of_short_id_is_whole_id() {
        let id = CommitId::new("abc");
        assert_eq!(id.abbrev(), "abc");
    }

    #[test]
    fn commit_id_serializes_as_plain_string() {
        let ids = vec![CommitId::new("abc123"), CommitId::new("def456")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["abc123","def456"]"#);
    }

    #[test]
    fn stat_uses_camel_case_fields() {
        let stat: CommitStat =
            serde_json::from_str(r#"{"successful":2,"inProgress":0,"failed":1}"#).unwrap();
        assert_eq!(
            stat,
            CommitStat {
                successful: 2,
                in_progress: 0,
                failed: 1
            }
        );
        assert_eq!(stat.to_string(), "Successful: 2, In Progress: 0, Failed: 1");
    }

    #[test]
    fn negative_counts_are_rejected() {
        let result: Result<CommitStat, _> =
            serde_json::from_str(r#"{"successful":-1,"inProgress":0,"failed":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_short_log() {
        let output = "aaaaaaa1 First commit\nbbbbbbb2 Second: with spaces\n\nbroken\n";
        let log = ShortLog::parse(output);

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].id.as_str(), "aaaaaaa1");
        assert_eq!(log.entries()[0].message, "First commit");
        assert_eq!(log.entries()[1].message, "Second: with spaces");
    }

    #[test]
    fn short_log_keeps_duplicates_in_order() {
        let log = ShortLog::parse("c1 one\nc2 two\nc1 one again\n");
        let ids: Vec<_> = log.commit_ids().iter().map(|c| c.to_string()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c1"]);
    }

    proptest! {
        #[test]
        fn stat_decode_preserves_counts(s in any::<u32>(), p in any::<u32>(), f in any::<u32>()) {
            let body = format!(r#"{{"successful":{s},"inProgress":{p},"failed":{f}}}"#);
            let stat: CommitStat = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(stat.successful, u64::from(s));
            prop_assert_eq!(stat.in_progress, u64::from(p));
            prop_assert_eq!(stat.failed, u64::from(f));
        }
    }
}
