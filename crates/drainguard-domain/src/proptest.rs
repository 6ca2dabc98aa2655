//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - exec-form vs shell-form detection and line attribution
//! - comment and blank-line handling
//! - per-document and per-container manifest findings
//! - totality of both analyzers on arbitrary text

use crate::build_file::analyze_build_file;
use crate::manifest::analyze_manifest;
use drainguard_types::{Severity, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// A launch keyword in random letter case.
fn arb_keyword(keyword: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), keyword.len()).prop_map(move |upper| {
        keyword
            .chars()
            .zip(upper)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// Shell-form arguments: never start with `[`.
fn arb_shell_argument() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z./-][a-z0-9 ./=-]{0,30}").unwrap()
}

/// Exec-form arguments: a JSON-ish array.
fn arb_exec_argument() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9./-]{1,10}", 1..4).prop_map(|parts| {
        let quoted: Vec<String> = parts.iter().map(|p| format!("\"{}\"", p)).collect();
        format!("[{}]", quoted.join(", "))
    })
}

/// Lines that never trigger a rule.
fn arb_inert_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        prop::string::string_regex("#[ -~]{0,40}").unwrap(),
        prop::string::string_regex("(FROM|RUN|COPY|ENV|WORKDIR) [a-z0-9 ./:=-]{1,20}").unwrap(),
    ]
}

/// Container names that YAML reads back as plain strings.
fn arb_container_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}")
        .unwrap()
        .prop_filter("name must stay a YAML string", |s| {
            !matches!(s.as_str(), "null" | "true" | "false" | "inf" | "infinity" | "nan")
        })
}

/// A bare `Pod` whose containers have nothing but a name and an image.
fn bare_pod(containers: &[String]) -> String {
    if containers.is_empty() {
        return "apiVersion: v1\nkind: Pod\nspec:\n  containers: []\n".to_string();
    }
    let mut doc = String::from("apiVersion: v1\nkind: Pod\nspec:\n  containers:\n");
    for name in containers {
        doc.push_str(&format!("    - name: {}\n      image: x:1\n", name));
    }
    doc
}

// ============================================================================
// Build-file properties
// ============================================================================

proptest! {
    #[test]
    fn shell_form_entrypoint_is_reported_at_its_line(
        prefix in prop::collection::vec(arb_inert_line(), 0..8),
        keyword in arb_keyword("ENTRYPOINT"),
        argument in arb_shell_argument(),
    ) {
        let mut lines = prefix.clone();
        lines.push(format!("{} {}", keyword, argument));
        let content = lines.join("\n");

        let findings = analyze_build_file(&content, "Dockerfile");
        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].rule.as_str(), ids::RULE_ENTRYPOINT_SHELL_FORM);
        prop_assert_eq!(findings[0].severity, Severity::Error);
        prop_assert_eq!(findings[0].line, Some(prefix.len() as u32 + 1));
    }

    #[test]
    fn shell_form_cmd_is_a_warning_at_its_line(
        prefix in prop::collection::vec(arb_inert_line(), 0..8),
        keyword in arb_keyword("CMD"),
        argument in arb_shell_argument(),
    ) {
        let mut lines = prefix.clone();
        lines.push(format!("{}\t{}", keyword, argument));
        let content = lines.join("\n");

        let findings = analyze_build_file(&content, "Dockerfile");
        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].rule.as_str(), ids::RULE_CMD_SHELL_FORM);
        prop_assert_eq!(findings[0].severity, Severity::Warning);
        prop_assert_eq!(findings[0].line, Some(prefix.len() as u32 + 1));
    }

    #[test]
    fn exec_form_is_never_reported(
        entry in arb_keyword("ENTRYPOINT"),
        cmd in arb_keyword("CMD"),
        entry_arg in arb_exec_argument(),
        cmd_arg in arb_exec_argument(),
    ) {
        let content = format!("FROM x\n{} {}\n{}  {}\n", entry, entry_arg, cmd, cmd_arg);
        prop_assert!(analyze_build_file(&content, "Dockerfile").is_empty());
    }

    #[test]
    fn comments_and_blank_lines_never_produce_findings(
        lines in prop::collection::vec(
            prop_oneof![
                Just(String::new()),
                prop::string::string_regex("[ \t]{0,4}#[ -~]{0,40}").unwrap(),
                prop::string::string_regex("[ \t]{1,6}").unwrap(),
            ],
            0..20,
        ),
    ) {
        prop_assert!(analyze_build_file(&lines.join("\n"), "Dockerfile").is_empty());
    }

    #[test]
    fn findings_are_in_ascending_line_order(
        body in prop::collection::vec(
            prop_oneof![
                arb_inert_line(),
                arb_shell_argument().prop_map(|a| format!("CMD {}", a)),
                arb_shell_argument().prop_map(|a| format!("ENTRYPOINT {}", a)),
            ],
            0..30,
        ),
    ) {
        let findings = analyze_build_file(&body.join("\n"), "Dockerfile");
        let lines: Vec<u32> = findings.iter().filter_map(|f| f.line).collect();
        prop_assert_eq!(lines.len(), findings.len());
        prop_assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn build_file_analysis_is_total(content in any::<String>()) {
        let _ = analyze_build_file(&content, "Dockerfile");
    }
}

// ============================================================================
// Manifest properties
// ============================================================================

proptest! {
    #[test]
    fn every_bare_container_yields_pre_stop_and_readiness_findings(
        names in prop::collection::vec(arb_container_name(), 0..6),
    ) {
        let findings = analyze_manifest(&bare_pod(&names), "pod.yaml");

        // DG101 once, then a DG102/DG103 pair per container.
        prop_assert_eq!(findings.len(), 1 + 2 * names.len());
        prop_assert_eq!(findings[0].rule.as_str(), ids::RULE_GRACE_PERIOD_UNSET);
        for (i, name) in names.iter().enumerate() {
            let pre_stop = &findings[1 + 2 * i];
            let readiness = &findings[2 + 2 * i];
            prop_assert_eq!(pre_stop.rule.as_str(), ids::RULE_MISSING_PRE_STOP);
            prop_assert_eq!(readiness.rule.as_str(), ids::RULE_MISSING_READINESS_PROBE);
            let quoted = format!("\"{}\"", name);
            prop_assert!(pre_stop.message.contains(&quoted));
            prop_assert!(readiness.message.contains(&quoted));
        }
    }

    #[test]
    fn any_explicit_grace_period_suppresses_dg101(seconds in 0u32..3600) {
        let manifest = format!(
            "kind: Pod\nspec:\n  terminationGracePeriodSeconds: {}\n  containers: []\n",
            seconds
        );
        prop_assert!(analyze_manifest(&manifest, "pod.yaml").is_empty());
    }

    #[test]
    fn k_identical_documents_yield_k_findings_per_rule(k in 1usize..6) {
        let doc = "kind: Deployment\nspec:\n  template:\n    spec:\n      containers:\n        \
                   - name: app\n";
        let manifest = vec![doc; k].join("---\n");
        let findings = analyze_manifest(&manifest, "deploy.yaml");

        for rule in [
            ids::RULE_GRACE_PERIOD_UNSET,
            ids::RULE_MISSING_PRE_STOP,
            ids::RULE_MISSING_READINESS_PROBE,
        ] {
            prop_assert_eq!(findings.iter().filter(|f| f.rule == rule).count(), k);
        }
        // Each document's block stays contiguous.
        for block in findings.chunks(3) {
            prop_assert_eq!(block[0].rule.as_str(), ids::RULE_GRACE_PERIOD_UNSET);
            prop_assert_eq!(block[1].rule.as_str(), ids::RULE_MISSING_PRE_STOP);
            prop_assert_eq!(block[2].rule.as_str(), ids::RULE_MISSING_READINESS_PROBE);
        }
    }

    #[test]
    fn manifest_analysis_is_total(content in any::<String>()) {
        let _ = analyze_manifest(&content, "any.yaml");
    }
}
