//! Threat records and their construction.

use std::path::{Path, PathBuf};

use super::detector::ScanOutcome;

/// Upper bound on paths listed in a single record. Keeps artifacts readable
/// when a needle matches half the tree.
pub const MAX_AFFECTED_PATHS: usize = 20;

/// STRIDE threat classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrideCategory {
    Spoofing,
    Tampering,
    Repudiation,
    InformationDisclosure,
    DenialOfService,
    ElevationOfPrivilege,
}

impl std::fmt::Display for StrideCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Spoofing => "Spoofing",
            Self::Tampering => "Tampering",
            Self::Repudiation => "Repudiation",
            Self::InformationDisclosure => "Information Disclosure",
            Self::DenialOfService => "Denial of Service",
            Self::ElevationOfPrivilege => "Elevation of Privilege",
        };
        f.write_str(name)
    }
}

/// One discovered or exemplar security concern.
///
/// Immutable once constructed; rendering and writing never mutate it. Built
/// fresh on every analysis run, never loaded back from disk.
#[derive(Debug)]
pub struct ThreatRecord {
    /// Stable identifier, owned by the detector's registry slot.
    pub id: String,
    /// Short title.
    pub title: String,
    /// STRIDE classification.
    pub category: StrideCategory,
    /// Project-relative paths, capped at [`MAX_AFFECTED_PATHS`]. Empty when
    /// nothing was detected.
    pub affected_paths: Vec<PathBuf>,
    /// Attack scenario narrative.
    pub scenario: String,
    /// Impact narrative.
    pub impact: String,
    /// Ordered remediation steps.
    pub remediation_steps: Vec<String>,
}

impl ThreatRecord {
    /// Whether this record came from an actual detection (vs. the exemplar
    /// written when no detector fired).
    pub fn is_detection(&self) -> bool {
        !self.affected_paths.is_empty()
    }

    /// Detection tag for reports: `"detected"` or `"example"`.
    pub fn detection_tag(&self) -> &'static str {
        if self.is_detection() {
            "detected"
        } else {
            "example"
        }
    }
}

/// Build a threat record from a scan outcome.
///
/// A non-empty outcome produces a hardcoded-secrets record listing the first
/// [`MAX_AFFECTED_PATHS`] hits relative to `project_root`. An empty outcome
/// produces an exemplar record so the artifact format is always present for
/// assistants to work against.
pub fn build_record(id: &str, project_root: &Path, outcome: &ScanOutcome) -> ThreatRecord {
    if outcome.hits.is_empty() {
        return example_record(id);
    }

    let affected_paths = outcome
        .hits
        .iter()
        .take(MAX_AFFECTED_PATHS)
        .map(|p| p.strip_prefix(project_root).unwrap_or(p).to_path_buf())
        .collect();

    ThreatRecord {
        id: id.to_string(),
        title: "Hardcoded secret material in source code".to_string(),
        category: StrideCategory::InformationDisclosure,
        affected_paths,
        scenario: "An attacker with access to the repository or build artifacts extracts \
                   embedded secrets and uses them to reach external systems."
            .to_string(),
        impact: "Compromise of accounts and infrastructure, data exfiltration, financial loss."
            .to_string(),
        remediation_steps: vec![
            "Remove secrets from sources and, if needed, from git history.".to_string(),
            "Move secrets into environment variables or a secret manager.".to_string(),
            "Add pre-commit/CI secret scanning.".to_string(),
            "Rotate any keys that may have been exposed.".to_string(),
        ],
    }
}

fn example_record(id: &str) -> ThreatRecord {
    ThreatRecord {
        id: id.to_string(),
        title: "Example threat (MVP): missing automated detections".to_string(),
        category: StrideCategory::Tampering,
        affected_paths: Vec::new(),
        scenario: "MVP mode: detectors are still minimal. This file demonstrates the threat.md \
                   format so assistants can work with the structure and extend it."
            .to_string(),
        impact: "Not computed automatically yet.".to_string(),
        remediation_steps: vec![
            "Configure detectors and re-run `numsec analyze`.".to_string(),
            "Describe the project context manually in `numsec/project.md`.".to_string(),
        ],
    }
}
