//! # Git Integration
//!
//! Everything git-build-state needs from the repository it runs in.
//!
//! | Need | Command |
//! |------|---------|
//! | Current branch | `git rev-parse --abbrev-ref HEAD` |
//! | Branch log | `git log --pretty=oneline <branch>` |
//! | Full commit id | `git show -q --pretty=format:%H <ref>` |
//! | Server host | `git remote -v` |
//! | Settings | `git config build-state.*` |

mod command;
mod config;
mod remote;

pub use command::{Git, GitError};
pub use config::{
    ConfigError, Settings, AUTH_CREDENTIALS_KEY, AUTH_USER_KEY, ENDPOINT_KEY, LOG_FORMAT_KEY,
    PORT_KEY, STATE_FORMAT_KEY,
};
pub use remote::{parse_remote_list, remote_host};
