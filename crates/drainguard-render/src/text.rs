use drainguard_types::{Finding, Severity};

/// Render findings as terminal lines: `{icon}  [{rule}] {file}:{line}: {message}`.
pub fn render_text(findings: &[Finding]) -> String {
    let mut out = String::new();

    if findings.is_empty() {
        out.push_str("\u{2705} All DrainGuard checks passed!\n");
        return out;
    }

    for f in findings {
        let icon = match f.severity {
            Severity::Error => "\u{274C}",
            Severity::Warning => "\u{26A0}\u{FE0F}",
            Severity::Info => "\u{2139}\u{FE0F}",
        };
        let loc = f.line.map(|l| format!(":{}", l)).unwrap_or_default();
        out.push_str(&format!(
            "{}  [{}] {}{}: {}\n",
            icon, f.rule, f.file, loc, f.message
        ));
    }

    out
}
