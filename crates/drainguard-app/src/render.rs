//! Render use cases: turn a report into the requested output format.

use anyhow::Context;
use camino::Utf8Path;
use drainguard_types::DrainguardReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Junit,
    Sarif,
    Json,
}

impl OutputFormat {
    pub fn parse(v: &str) -> anyhow::Result<Self> {
        match v.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "junit" => Ok(OutputFormat::Junit),
            "sarif" => Ok(OutputFormat::Sarif),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown format: {other} (expected text|junit|sarif|json)"),
        }
    }

    /// Where the report file goes when no path is given. Text output is not written to disk.
    pub fn default_report_path(self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Junit => Some("drainguard-report.xml"),
            OutputFormat::Sarif => Some("drainguard-report.sarif.json"),
            OutputFormat::Json => Some("drainguard-report.json"),
        }
    }
}

pub fn render_report(report: &DrainguardReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(drainguard_render::render_text(&report.findings)),
        OutputFormat::Junit => Ok(drainguard_render::render_junit(&report.findings)),
        OutputFormat::Sarif => {
            drainguard_render::render_sarif(&report.findings, &report.tool).context("render sarif")
        }
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            String::from_utf8(bytes).context("report json is not utf-8")
        }
    }
}

pub fn serialize_report(report: &DrainguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::tool_meta;
    use drainguard_types::{
        DrainguardData, Finding, SCHEMA_REPORT_V1, Severity, SeverityCounts, Verdict,
    };
    use time::OffsetDateTime;

    fn sample_report() -> DrainguardReport {
        let findings = vec![
            Finding {
                rule: "DG001".to_string(),
                severity: Severity::Error,
                message: "shell form".to_string(),
                file: "Dockerfile".to_string(),
                line: Some(2),
            },
            Finding {
                rule: "DG101".to_string(),
                severity: Severity::Warning,
                message: "grace".to_string(),
                file: "pod.yaml".to_string(),
                line: None,
            },
        ];
        DrainguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: tool_meta(),
            started_at: OffsetDateTime::UNIX_EPOCH,
            finished_at: OffsetDateTime::UNIX_EPOCH,
            verdict: Verdict::from_findings(&findings),
            data: DrainguardData {
                artifacts_scanned: 2,
                findings_total: 2,
                counts: SeverityCounts::from_findings(&findings),
            },
            findings,
        }
    }

    #[test]
    fn parses_formats() {
        assert_eq!(OutputFormat::parse("text").expect("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("JUnit").expect("junit"), OutputFormat::Junit);
        assert_eq!(OutputFormat::parse("sarif").expect("sarif"), OutputFormat::Sarif);
        assert_eq!(OutputFormat::parse("json").expect("json"), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn only_text_has_no_report_file() {
        assert_eq!(OutputFormat::Text.default_report_path(), None);
        assert_eq!(
            OutputFormat::Junit.default_report_path(),
            Some("drainguard-report.xml")
        );
        assert_eq!(
            OutputFormat::Sarif.default_report_path(),
            Some("drainguard-report.sarif.json")
        );
    }

    #[test]
    fn every_format_renders() {
        let report = sample_report();
        let text = render_report(&report, OutputFormat::Text).expect("text");
        assert!(text.contains("[DG001] Dockerfile:2: shell form"));

        let junit = render_report(&report, OutputFormat::Junit).expect("junit");
        assert!(junit.contains("failures=\"1\""));

        let sarif = render_report(&report, OutputFormat::Sarif).expect("sarif");
        assert!(sarif.contains("\"ruleId\": \"DG101\""));

        let json = render_report(&report, OutputFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["verdict"], "fail");
        assert_eq!(value["findings"][1]["rule"], "DG101");
        assert!(value["findings"][1].get("line").is_none());
    }

    #[test]
    fn write_text_creates_parent_directories() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let out = root.join("reports/nested/report.xml");

        write_text(&out, "<testsuites/>").expect("write");
        assert_eq!(std::fs::read_to_string(&out).expect("read"), "<testsuites/>");
    }
}
