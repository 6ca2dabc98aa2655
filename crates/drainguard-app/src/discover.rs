use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use drainguard_domain::ArtifactKind;
use walkdir::{DirEntry, WalkDir};

/// A file selected for analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: Utf8PathBuf,
    pub kind: ArtifactKind,
}

/// Pick the analyzer for a file from its name.
///
/// A name containing `dockerfile` (any case) is a build file; otherwise a `.yml`/`.yaml`
/// extension (any case) makes it a manifest. Anything else is not analyzed.
pub fn artifact_kind(path: &Utf8Path) -> Option<ArtifactKind> {
    let name = path.file_name()?.to_ascii_lowercase();
    if name.contains("dockerfile") {
        Some(ArtifactKind::BuildFile)
    } else if name.ends_with(".yml") || name.ends_with(".yaml") {
        Some(ArtifactKind::Manifest)
    } else {
        None
    }
}

/// Expand the requested paths into artifacts, keeping argument order.
///
/// Directories are walked recursively in file-name order, skipping hidden entries.
pub fn collect_artifacts(paths: &[Utf8PathBuf]) -> anyhow::Result<Vec<Artifact>> {
    let mut out = Vec::new();

    for path in paths {
        let meta =
            std::fs::metadata(path).with_context(|| format!("path does not exist: {}", path))?;

        if meta.is_dir() {
            for file in walk_dir(path) {
                push_if_recognized(&mut out, file);
            }
        } else {
            push_if_recognized(&mut out, path.clone());
        }
    }

    Ok(out)
}

fn push_if_recognized(out: &mut Vec<Artifact>, path: Utf8PathBuf) {
    match artifact_kind(&path) {
        Some(kind) => out.push(Artifact { path, kind }),
        None => log::debug!("skipping {}: not a build file or manifest", path),
    }
}

fn walk_dir(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
