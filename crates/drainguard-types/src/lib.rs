//! Stable DTOs and IDs used across the drainguard workspace.
//!
//! This crate is intentionally boring:
//! - the `Finding` record every rule writes into
//! - stable rule identifiers
//! - the JSON report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    DrainguardData, DrainguardReport, Finding, SCHEMA_REPORT_V1, Severity, SeverityCounts,
    ToolMeta, Verdict,
};
