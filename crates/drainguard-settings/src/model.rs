use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `drainguard.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrainguardConfigV1 {
    /// Optional schema string for tooling (`drainguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of rule id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Rules are on unless switched off here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
