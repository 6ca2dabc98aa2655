//! SARIF 2.1.0 output for code-scanning integrations.

use crate::TOOL_DISPLAY_NAME;
use drainguard_types::{Finding, Severity, ToolMeta, explain};
use serde::Serialize;

const SARIF_SCHEMA: &str = "https://schemastore.azurewebsites.net/schemas/json/sarif-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";

#[derive(Debug, Serialize)]
struct SarifLog<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun<'a>>,
}

#[derive(Debug, Serialize)]
struct SarifRun<'a> {
    tool: SarifTool<'a>,
    results: Vec<SarifResult<'a>>,
}

#[derive(Debug, Serialize)]
struct SarifTool<'a> {
    driver: SarifDriver<'a>,
}

#[derive(Debug, Serialize)]
struct SarifDriver<'a> {
    name: &'static str,
    version: &'a str,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: &'static str,
    short_description: SarifText,
}

#[derive(Debug, Serialize)]
struct SarifText {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult<'a> {
    rule_id: &'a str,
    level: &'static str,
    message: SarifText,
    locations: Vec<SarifLocation<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation<'a> {
    physical_location: SarifPhysicalLocation<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation<'a> {
    artifact_location: SarifArtifactLocation<'a>,
    region: SarifRegion,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation<'a> {
    uri: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: u32,
}

fn severity_to_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning | Severity::Info => "warning",
    }
}

/// Render findings as a pretty-printed SARIF log with a single run.
///
/// Findings without a line get an empty `locations` array.
pub fn render_sarif(findings: &[Finding], tool: &ToolMeta) -> serde_json::Result<String> {
    let rules = explain::all_rule_ids()
        .iter()
        .copied()
        .map(|id| SarifRule {
            id,
            short_description: SarifText {
                text: explain::lookup_explanation(id)
                    .map(|e| e.title.to_string())
                    .unwrap_or_default(),
            },
        })
        .collect();

    let results = findings
        .iter()
        .map(|f| SarifResult {
            rule_id: &f.rule,
            level: severity_to_level(f.severity),
            message: SarifText {
                text: f.message.clone(),
            },
            locations: f
                .line
                .map(|line| SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation { uri: &f.file },
                        region: SarifRegion { start_line: line },
                    },
                })
                .into_iter()
                .collect(),
        })
        .collect();

    let log = SarifLog {
        schema: SARIF_SCHEMA,
        version: SARIF_VERSION,
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: TOOL_DISPLAY_NAME,
                    version: &tool.version,
                    rules,
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&log)
}
