//! Config parsing and rule selection.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DrainguardConfigV1, RuleConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `drainguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DrainguardConfigV1> {
    let cfg: DrainguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the set of enabled rules (config + CLI overrides).
pub fn resolve_config(
    cfg: DrainguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
