//! git-build-state - Bitbucket Server build status for git commits
//!
//! Resolves a commit (or every commit on a branch) with git, asks the
//! build-status REST API for its CI results, and renders them through a
//! user-configurable template or as JSON.

pub mod domain;
pub mod client;
pub mod format;
pub mod git;
pub mod cli;

pub use client::{Authenticator, BasicAuth, ClientError, StatusClient, TokenAuth};
pub use domain::{CommitId, CommitStat, CommitStats, StatusPage, StatusRecord};
