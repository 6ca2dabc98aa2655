//! The `explain` use case: look up rule documentation.

use drainguard_domain::catalog::{self, RuleTarget};
use drainguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the rule.
    Found {
        rule: &'static str,
        explanation: Explanation,
    },
    /// Unknown identifier; includes the available rule ids.
    NotFound {
        identifier: String,
        available_rules: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let normalized = identifier.trim().to_ascii_uppercase();
    match (
        catalog::lookup(&normalized),
        explain::lookup_explanation(&normalized),
    ) {
        (Some(rule), Some(explanation)) => ExplainOutput::Found {
            rule: rule.id,
            explanation,
        },
        _ => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rules: explain::all_rule_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(rule: &str, exp: &Explanation) -> String {
    let fence = match catalog::lookup(rule).map(|r| r.target) {
        Some(RuleTarget::BuildFile) => "dockerfile",
        Some(RuleTarget::Manifest) => "yaml",
        None => "text",
    };
    let heading = format!("{rule}: {}", exp.title);

    let mut out = String::new();
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.chars().count()));
    out.push_str("\n\n");
    if let Some(spec) = catalog::lookup(rule) {
        out.push_str(&format!("Severity: {}\n\n", spec.severity.as_str()));
    }
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (violation):\n");
    out.push_str(&format!("```{fence}\n"));
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (fixed):\n");
    out.push_str(&format!("```{fence}\n"));
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rules: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule: {}\n\n", identifier));
    out.push_str("Available rules:\n");
    for id in rules {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
