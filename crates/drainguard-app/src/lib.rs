//! Use case orchestration for drainguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings, and
//! render layers. It owns file discovery and reading; the domain never touches the filesystem.
//!
//! The CLI crate depends on this; it only handles argument parsing and process exit.

#![forbid(unsafe_code)]

mod check;
mod discover;
mod explain;
mod render;

pub use check::{CheckInput, CheckOutput, EXIT_RUNTIME_ERROR, run_check, verdict_exit_code};
pub use discover::{Artifact, artifact_kind, collect_artifacts};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{OutputFormat, render_report, serialize_report, write_text};
