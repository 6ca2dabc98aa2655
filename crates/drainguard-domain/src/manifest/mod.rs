//! Structural analysis of Kubernetes workload manifests.

mod model;
mod parse;

pub use model::{Container, PodSpec, UNNAMED_CONTAINER};
pub use parse::{ManifestParseError, parse_documents};

use crate::catalog;
use drainguard_types::Finding;

/// Check every pod spec in a (possibly multi-document) manifest.
///
/// Unparsable content yields no findings and no error: syntax validation is left to schema
/// validators. Documents without a resolvable pod spec are skipped.
///
/// Per document the order is DG101, then DG102 and DG103 for each container in list order.
pub fn analyze_manifest(content: &str, file: &str) -> Vec<Finding> {
    let documents = match parse_documents(content) {
        Ok(documents) => documents,
        Err(err) => {
            log::debug!("{file}: skipped, {err}");
            return Vec::new();
        }
    };

    let mut out = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        match PodSpec::locate(document) {
            Some(pod) => check_pod_spec(&pod, file, &mut out),
            None => log::debug!("{file}: document #{} has no pod spec", index + 1),
        }
    }
    out
}

fn check_pod_spec(pod: &PodSpec<'_>, file: &str, out: &mut Vec<Finding>) {
    if !pod.has_termination_grace_period() {
        out.push(catalog::GRACE_PERIOD_UNSET.at_document(file));
    }

    for container in pod.containers() {
        if !container.has_pre_stop() {
            out.push(catalog::MISSING_PRE_STOP.for_container(file, &container.name()));
        }
        if !container.has_readiness_probe() {
            out.push(catalog::MISSING_READINESS_PROBE.for_container(file, &container.name()));
        }
    }
}
