//! Thin wrapper around the `git` executable

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;

use super::remote::parse_remote_list;
use crate::domain::{CommitId, ShortLog};

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {args} failed: {stderr}")]
    Failed { args: String, stderr: String },

    #[error("Not a valid git reference: {reference}: {stderr}")]
    InvalidRef { reference: String, stderr: String },

    #[error("No git remote configured")]
    NoRemote,
}

/// Runs git commands, optionally inside a given working tree
#[derive(Debug, Clone, Default)]
pub struct Git {
    dir: Option<PathBuf>,
}

impl Git {
    /// Uses the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every command inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn output(&self, args: &[&str]) -> Result<Output, GitError> {
        Ok(self.command(args).output()?)
    }

    /// Runs `git <args>` and returns trimmed stdout
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.output(args)?;
        if !output.status.success() {
            return Err(failed(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Name of the checked out branch
    pub fn current_branch(&self) -> Result<String, GitError> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// One-line log of `branch`, or of the current branch when `None`
    pub fn short_log(&self, branch: Option<&str>) -> Result<ShortLog, GitError> {
        let branch = match branch {
            Some(branch) if !branch.is_empty() => branch.to_string(),
            _ => self.current_branch()?,
        };

        let output = self.run(&["log", "--pretty=oneline", &branch])?;
        Ok(ShortLog::parse(&output))
    }

    /// Full commit id for `reference`, `HEAD` when `None` or empty
    pub fn resolve_ref(&self, reference: Option<&str>) -> Result<CommitId, GitError> {
        let reference = reference.filter(|r| !r.is_empty()).unwrap_or("HEAD");

        let output = self.output(&["show", "-q", "--pretty=format:%H", reference])?;
        if !output.status.success() {
            return Err(GitError::InvalidRef {
                reference: reference.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let id = stdout.lines().next().unwrap_or_default().trim();
        if id.is_empty() {
            return Err(GitError::InvalidRef {
                reference: reference.to_string(),
                stderr: "no commit".to_string(),
            });
        }
        Ok(CommitId::new(id))
    }

    /// URL of the first remote listed by `git remote -v`
    pub fn first_remote(&self) -> Result<String, GitError> {
        let output = self.run(&["remote", "-v"])?;
        parse_remote_list(&output).ok_or(GitError::NoRemote)
    }

    /// Reads a config value. An unset key is `Ok(None)`, not an error.
    pub fn config_get(&self, key: &str) -> Result<Option<String>, GitError> {
        let args = ["config", key];
        let output = self.output(&args)?;

        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            Some(1) => Ok(None),
            _ => Err(failed(&args, &output)),
        }
    }

    /// Writes a value to the user's global git config
    pub fn config_set_global(&self, key: &str, value: &str) -> Result<(), GitError> {
        self.run(&["config", "--global", key, value]).map(|_| ())
    }
}

fn failed(args: &[&str], output: &Output) -> GitError {
    GitError::Failed {
        args: args.join(" "),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
