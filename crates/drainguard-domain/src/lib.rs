//! Pure rule evaluation (no IO).
//!
//! Input: the raw text of one artifact plus the caller's label for it.
//! Output: findings, in input traversal order.

#![forbid(unsafe_code)]

pub mod build_file;
pub mod catalog;
pub mod manifest;

mod engine;

#[cfg(test)]
mod proptest;

pub use build_file::analyze_build_file;
pub use engine::{ArtifactKind, analyze};
pub use manifest::{ManifestParseError, analyze_manifest, parse_documents};
