//! The rule catalog: one static entry per rule id.
//!
//! Severity and message wording live here and nowhere else, so the pass/fail policy can be
//! audited in one place. Titles and remediation text belong to the explain registry.

use drainguard_types::{Finding, Severity, ids};

/// Placeholder substituted with the container name in per-container templates.
const CONTAINER_PLACEHOLDER: &str = "{container}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleTarget {
    BuildFile,
    Manifest,
}

#[derive(Clone, Copy, Debug)]
pub struct RuleSpec {
    pub id: &'static str,
    pub severity: Severity,
    pub target: RuleTarget,
    pub message: &'static str,
}

pub static ENTRYPOINT_SHELL_FORM: RuleSpec = RuleSpec {
    id: ids::RULE_ENTRYPOINT_SHELL_FORM,
    severity: Severity::Error,
    target: RuleTarget::BuildFile,
    message: "ENTRYPOINT uses shell form: SIGTERM will NOT reach your process. \
              Use exec form: ENTRYPOINT [\"executable\", \"arg\"]",
};

pub static CMD_SHELL_FORM: RuleSpec = RuleSpec {
    id: ids::RULE_CMD_SHELL_FORM,
    severity: Severity::Warning,
    target: RuleTarget::BuildFile,
    message: "CMD uses shell form: signals may not propagate correctly. \
              Prefer exec form: CMD [\"executable\", \"arg\"]",
};

pub static GRACE_PERIOD_UNSET: RuleSpec = RuleSpec {
    id: ids::RULE_GRACE_PERIOD_UNSET,
    severity: Severity::Warning,
    target: RuleTarget::Manifest,
    message: "terminationGracePeriodSeconds not set: defaults to 30s. \
              Set it explicitly to match your actual shutdown duration.",
};

pub static MISSING_PRE_STOP: RuleSpec = RuleSpec {
    id: ids::RULE_MISSING_PRE_STOP,
    severity: Severity::Warning,
    target: RuleTarget::Manifest,
    message: "Container \"{container}\": no preStop hook. Add \"sleep 5\" to let kube-proxy \
              propagate iptables rule removal before SIGTERM.",
};

pub static MISSING_READINESS_PROBE: RuleSpec = RuleSpec {
    id: ids::RULE_MISSING_READINESS_PROBE,
    severity: Severity::Warning,
    target: RuleTarget::Manifest,
    message: "Container \"{container}\": no readinessProbe. Without it, the endpoint won't be \
              removed from Service during shutdown.",
};

/// All rules, in catalog order.
pub static RULES: &[&RuleSpec] = &[
    &ENTRYPOINT_SHELL_FORM,
    &CMD_SHELL_FORM,
    &GRACE_PERIOD_UNSET,
    &MISSING_PRE_STOP,
    &MISSING_READINESS_PROBE,
];

pub fn lookup(id: &str) -> Option<&'static RuleSpec> {
    RULES.iter().copied().find(|r| r.id == id)
}

impl RuleSpec {
    /// A finding attributed to a single source line.
    pub fn at_line(&self, file: &str, line: u32) -> Finding {
        self.build(file, self.message.to_string(), Some(line))
    }

    /// A document-level finding (no line).
    pub fn at_document(&self, file: &str) -> Finding {
        self.build(file, self.message.to_string(), None)
    }

    /// A document-level finding naming a container.
    pub fn for_container(&self, file: &str, container: &str) -> Finding {
        self.build(
            file,
            self.message.replace(CONTAINER_PLACEHOLDER, container),
            None,
        )
    }

    fn build(&self, file: &str, message: String, line: Option<u32>) -> Finding {
        Finding {
            rule: self.id.to_string(),
            severity: self.severity,
            message,
            file: file.to_string(),
            line,
        }
    }
}
