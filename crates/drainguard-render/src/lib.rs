//! Rendering utilities for CI surfaces (terminal text, JUnit XML, SARIF).
//!
//! Every renderer is a pure function of the finding list and keeps its order.

#![forbid(unsafe_code)]

mod junit;
mod sarif;
mod text;

pub use junit::render_junit;
pub use sarif::render_sarif;
pub use text::render_text;

/// Display name used in report headers.
pub const TOOL_DISPLAY_NAME: &str = "DrainGuard";
