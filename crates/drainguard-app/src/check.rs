//! The `check` use case: analyze artifacts and produce a report.

use anyhow::Context;
use camino::Utf8PathBuf;
use drainguard_settings::{Overrides, ResolvedConfig};
use drainguard_types::{
    DrainguardData, DrainguardReport, Finding, SCHEMA_REPORT_V1, SeverityCounts, ToolMeta, Verdict,
};
use rayon::prelude::*;
use time::OffsetDateTime;

use crate::discover::{Artifact, collect_artifacts};

/// Exit code for failures that are not findings (unreadable input, bad config).
pub const EXIT_RUNTIME_ERROR: i32 = 2;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Files and directories to analyze, in the order given.
    pub paths: &'a [Utf8PathBuf],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: DrainguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, discover artifacts, analyze, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        drainguard_settings::DrainguardConfigV1::default()
    } else {
        drainguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = drainguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let artifacts = collect_artifacts(input.paths).context("collect artifacts")?;
    log::info!("analyzing {} artifact(s)", artifacts.len());

    // Artifacts are independent; collect() keeps input order.
    let per_artifact = artifacts
        .par_iter()
        .map(analyze_artifact)
        .collect::<anyhow::Result<Vec<Vec<Finding>>>>()?;

    let findings: Vec<Finding> = per_artifact
        .into_iter()
        .flatten()
        .filter(|f| resolved.is_enabled(&f.rule))
        .collect();

    let finished_at = OffsetDateTime::now_utc();

    let report = DrainguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: Verdict::from_findings(&findings),
        data: DrainguardData {
            artifacts_scanned: artifacts.len() as u32,
            findings_total: findings.len() as u32,
            counts: SeverityCounts::from_findings(&findings),
        },
        findings,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn analyze_artifact(artifact: &Artifact) -> anyhow::Result<Vec<Finding>> {
    let bytes = std::fs::read(&artifact.path).with_context(|| format!("read {}", artifact.path))?;
    // Invalid UTF-8 is replaced rather than rejected.
    let content = String::from_utf8_lossy(&bytes);

    let findings = drainguard_domain::analyze(artifact.kind, &content, artifact.path.as_str());
    log::debug!(
        "{} ({}): {} finding(s)",
        artifact.path,
        artifact.kind.as_str(),
        findings.len()
    );
    Ok(findings)
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "drainguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}
