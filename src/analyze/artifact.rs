//! Artifact persistence.
//!
//! Writes the rendered threat document and an explanatory README under
//! `<project_root>/numsec/threats/`. Directory creation failures and write
//! failures are fatal and propagate; this is the one place in the pipeline
//! where errors are not swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::render::render_threat_md;
use super::threat::ThreatRecord;

/// Explanatory README placed next to the threat directories.
///
/// Written once per project (first-writer-wins) and never overwritten, so
/// edits made inside a project survive re-analysis.
const THREATS_README: &str = "\
# Threats

This folder contains threats found by Numsec.

## Format

Each threat is stored in `numsec/threats/THREAT-*/threat.md`.

## Recommended workflow

- Run `numsec analyze --format json`
- Open `THREAT-*/threat.md`
- Ask your assistant to propose a fix and file a change in `numsec/changes/`
";

/// A threat document written to disk.
#[derive(Debug)]
pub struct WrittenArtifact {
    /// Path of `threat.md` relative to the project root, forward slashes.
    pub relative_path: String,
    /// Absolute path of the written `threat.md`.
    pub absolute_path: PathBuf,
}

/// Resolve the threats directory for a project.
pub fn threats_dir(project_root: &Path) -> PathBuf {
    project_root.join("numsec").join("threats")
}

/// Persist a threat record under `<project_root>/numsec/threats/<id>/`.
///
/// Creates the directory structure idempotently, writes the README only if
/// absent, and always overwrites `threat.md`. Two concurrent runs race on
/// the final write; last writer wins, no locking.
pub fn write_threat_artifact(
    project_root: &Path,
    record: &ThreatRecord,
) -> Result<WrittenArtifact> {
    let threats = threats_dir(project_root);
    fs::create_dir_all(&threats)?;

    let readme = threats.join("README.md");
    if !readme.exists() {
        fs::write(&readme, THREATS_README)?;
        tracing::debug!("wrote threats README at {}", readme.display());
    }

    let threat_dir = threats.join(&record.id);
    fs::create_dir_all(&threat_dir)?;

    let threat_md = threat_dir.join("threat.md");
    fs::write(&threat_md, render_threat_md(record))?;
    tracing::debug!("wrote {} ({})", threat_md.display(), record.detection_tag());

    Ok(WrittenArtifact {
        relative_path: format!("numsec/threats/{}/threat.md", record.id),
        absolute_path: threat_md,
    })
}
