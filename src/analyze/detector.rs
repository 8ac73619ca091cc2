//! Heuristic threat detectors.
//!
//! Detection in this release is intentionally crude: presence-based
//! substring matching over lowercased file contents. False positives (a
//! comment containing "password") are expected and acceptable; obfuscated
//! or split secrets will be missed. This is an MVP heuristic, not a
//! detector framework.

use std::fs;
use std::path::{Path, PathBuf};

use super::walker::walk_source_files;

/// Substrings associated with credential leakage.
///
/// Matched case-insensitively against full file contents.
pub const SECRET_NEEDLES: &[&str] = &["api_key", "apikey", "secret", "password", "token="];

/// Result of scanning a project tree with one detector.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Files whose contents matched, in enumeration order.
    pub hits: Vec<PathBuf>,
    /// Files that could not be read and were skipped.
    ///
    /// Skipping is deliberate (availability over completeness), but it is a
    /// blind spot worth surfacing, so the count is carried into the report
    /// instead of being swallowed.
    pub skipped_files: usize,
}

/// A heuristic detector over a project tree.
///
/// Detectors are registered in a fixed order; each registry slot owns a
/// stable threat identifier (see [`DetectorRegistry`]).
pub trait Detector {
    /// Stable detector name, used to key the slot→id mapping.
    fn name(&self) -> &'static str;

    /// Scan the tree rooted at `project_root`.
    fn scan(&self, project_root: &Path) -> ScanOutcome;
}

/// Detects hardcoded secret material in source files.
#[derive(Debug, Default)]
pub struct HardcodedSecretsDetector;

impl Detector for HardcodedSecretsDetector {
    fn name(&self) -> &'static str {
        "hardcoded-secrets"
    }

    fn scan(&self, project_root: &Path) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        for path in walk_source_files(project_root) {
            // Fails open: an unreadable file is skipped, not fatal. Lossy
            // decoding keeps partially-binary files scannable.
            let text = match fs::read(&path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).to_lowercase(),
                Err(e) => {
                    tracing::debug!("skipping unreadable file {}: {}", path.display(), e);
                    outcome.skipped_files += 1;
                    continue;
                }
            };

            if SECRET_NEEDLES.iter().any(|needle| text.contains(needle)) {
                outcome.hits.push(path);
            }
        }

        outcome
    }
}

/// Ordered detector registry.
///
/// Each slot owns the stable id `THREAT-<slot>`, 1-based and zero-padded to
/// three digits. The registry is append-only: new detectors go at the end so
/// existing ids never shift. Today there is a single detector.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorRegistry {
    /// The built-in detector set.
    pub fn builtin() -> Self {
        Self {
            detectors: vec![Box::new(HardcodedSecretsDetector)],
        }
    }

    /// Stable threat id for the detector at `slot` (0-based).
    pub fn threat_id(slot: usize) -> String {
        format!("THREAT-{:03}", slot + 1)
    }

    /// Iterate detectors with their slot index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &dyn Detector)> {
        self.detectors.iter().enumerate().map(|(i, d)| (i, d.as_ref()))
    }

    /// Number of registered detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
