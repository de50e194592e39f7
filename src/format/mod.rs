//! # Output Formatting
//!
//! Results are rendered in one of two modes:
//!
//! | Mode | Output |
//! |------|--------|
//! | Template | Tera template per record (`--template`, git config, or default) |
//! | Structured | One indented JSON document (`--format json`) |
//!
//! Field names are identical in both modes.

mod render;
mod template;

pub use render::{structured, LogLine, Renderer};
pub use template::{FormatError, Template, DEFAULT_LOG_TEMPLATE, DEFAULT_STATE_TEMPLATE};
