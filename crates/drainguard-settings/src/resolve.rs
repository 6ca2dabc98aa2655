use crate::model::DrainguardConfigV1;
use drainguard_types::ids;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Rule ids disabled on the command line.
    pub disable: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedConfig {
    disabled: BTreeSet<String>,
}

impl ResolvedConfig {
    pub fn is_enabled(&self, rule: &str) -> bool {
        !self.disabled.contains(rule)
    }

    pub fn disabled_rules(&self) -> impl Iterator<Item = &str> {
        self.disabled.iter().map(String::as_str)
    }
}

pub fn resolve_config(
    cfg: DrainguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut disabled = BTreeSet::new();

    for (rule, rc) in &cfg.rules {
        let rule = normalize_rule_id(rule)?;
        match rc.enabled {
            Some(false) => {
                disabled.insert(rule);
            }
            Some(true) | None => {
                disabled.remove(&rule);
            }
        }
    }

    for rule in &overrides.disable {
        disabled.insert(normalize_rule_id(rule)?);
    }

    Ok(ResolvedConfig { disabled })
}

fn normalize_rule_id(v: &str) -> anyhow::Result<String> {
    let id = v.trim().to_ascii_uppercase();
    if !ids::is_known_rule(&id) {
        anyhow::bail!(
            "unknown rule: {v} (expected one of {})",
            ids::ALL_RULES.join(", ")
        );
    }
    Ok(id)
}
