//! Domain models for git-build-state
//!
//! Plain data decoded from the build-status API and from git, without any
//! I/O concerns.

mod commit;
mod status;

pub use commit::{CommitId, CommitStat, CommitStats, LogEntry, ShortLog, ABBREV_LEN};
pub use status::{BuildState, RemoteError, RemoteErrorEntry, StatusPage, StatusRecord};
