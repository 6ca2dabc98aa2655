use crate::TOOL_DISPLAY_NAME;
use drainguard_types::{Finding, Severity};

/// Test case names carry at most this many characters of the message.
const CASE_NAME_MESSAGE_CHARS: usize = 60;

/// Render findings as a JUnit XML report: one test case per finding, errors as failures.
pub fn render_junit(findings: &[Finding]) -> String {
    let failures = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\"?>\n");
    out.push_str("<testsuites>\n");
    out.push_str(&format!(
        "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\">\n",
        TOOL_DISPLAY_NAME,
        findings.len(),
        failures
    ));

    for f in findings {
        let short: String = f.message.chars().take(CASE_NAME_MESSAGE_CHARS).collect();
        let body = if f.severity == Severity::Error {
            format!("<failure message=\"{}\"/>", escape_xml(&f.message))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "    <testcase name=\"{}: {}\" classname=\"{}\">{}</testcase>\n",
            f.rule,
            escape_xml(&short),
            escape_xml(&f.file),
            body
        ));
    }

    out.push_str("  </testsuite>\n");
    out.push_str("</testsuites>\n");
    out
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
