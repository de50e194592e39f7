//! # Command-Line Interface
//!
//! User-facing commands and output handling.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `state [REF]` (default) | Detailed build status of one commit |
//! | `log [BRANCH]` | Branch log with successful/in progress/failed counts |
//! | `generate-creds` | Print the git config command for encoded credentials |
//! | `setup` | Store encoded credentials in global git config |
//!
//! ## Output Formats
//!
//! - `text` (default): rendered with `--template`, the
//!   `build-state.format.*` git config, or the built-in template
//! - `json`: one indented JSON document
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `--debug`) to trace the endpoint, commits and
//! requests on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod creds;
mod log;
mod output;
mod session;
mod state;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use session::{renderer, Session};
