use crate::build_file::analyze_build_file;
use crate::manifest::analyze_manifest;
use drainguard_types::Finding;

/// Which analyzer an artifact goes through. Choosing it is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    BuildFile,
    Manifest,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::BuildFile => "build file",
            ArtifactKind::Manifest => "manifest",
        }
    }
}

/// Run the analyzer for `kind` over one artifact. Never fails.
pub fn analyze(kind: ArtifactKind, content: &str, file: &str) -> Vec<Finding> {
    match kind {
        ArtifactKind::BuildFile => analyze_build_file(content, file),
        ArtifactKind::Manifest => analyze_manifest(content, file),
    }
}
