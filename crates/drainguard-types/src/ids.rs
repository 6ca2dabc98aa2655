//! Stable rule identifiers.
//!
//! `DG0xx` rules inspect container build files, `DG1xx` rules inspect workload manifests.
//! An id never changes meaning once released.

// Build-file rules
pub const RULE_ENTRYPOINT_SHELL_FORM: &str = "DG001";
pub const RULE_CMD_SHELL_FORM: &str = "DG002";

// Manifest rules
pub const RULE_GRACE_PERIOD_UNSET: &str = "DG101";
pub const RULE_MISSING_PRE_STOP: &str = "DG102";
pub const RULE_MISSING_READINESS_PROBE: &str = "DG103";

/// Every known rule id, in catalog order.
pub const ALL_RULES: &[&str] = &[
    RULE_ENTRYPOINT_SHELL_FORM,
    RULE_CMD_SHELL_FORM,
    RULE_GRACE_PERIOD_UNSET,
    RULE_MISSING_PRE_STOP,
    RULE_MISSING_READINESS_PROBE,
];

pub fn is_known_rule(id: &str) -> bool {
    ALL_RULES.contains(&id)
}
