//! Threat detection pipeline.
//!
//! Walks a project tree, runs the registered heuristic detectors, and writes
//! markdown threat artifacts under `<project_root>/numsec/threats/`. The
//! pipeline is single-threaded and stateless across runs; the only state is
//! the files it leaves on disk.
//!
//! Control flow per run: walker → matcher → builder → renderer → writer.

pub mod artifact;
pub mod detector;
pub mod render;
pub mod report;
pub mod threat;
pub mod walker;

use std::path::Path;

use crate::error::{NumsecError, Result};

pub use detector::{Detector, DetectorRegistry, ScanOutcome, SECRET_NEEDLES};
pub use report::AnalysisReport;
pub use threat::{StrideCategory, ThreatRecord, MAX_AFFECTED_PATHS};

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary line.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Result of a completed analysis run.
#[derive(Debug)]
pub struct AnalysisOutcome {
    report: AnalysisReport,
    format: ReportFormat,
}

impl AnalysisOutcome {
    /// The structured report for this run.
    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} at {}/{}",
            self.report.threat_id, self.report.project_root, self.report.generated[0]
        )
    }

    /// Render in the format requested for this run.
    pub fn render(&self) -> Result<String> {
        match self.format {
            ReportFormat::Text => Ok(self.summary()),
            ReportFormat::Json => self
                .report
                .to_json()
                .map_err(|e| NumsecError::Other(e.into())),
        }
    }
}

/// Analyze a project and generate threat markdown artifacts.
///
/// Runs every registered detector once against `project_root`. Each registry
/// slot writes its own `threat.md` under its stable id; when a detector finds
/// nothing, it still writes an exemplar record so the artifact format is
/// always present.
///
/// # Errors
///
/// Fails if `project_root` is not an existing directory, or if the artifact
/// directories cannot be created or written. Per-file read failures during
/// the scan are not errors; they are skipped and counted in the report.
pub fn analyze_project(project_root: &Path, format: ReportFormat) -> Result<AnalysisOutcome> {
    if !project_root.is_dir() {
        return Err(NumsecError::InvalidProjectRoot {
            path: project_root.to_path_buf(),
        });
    }

    let registry = DetectorRegistry::builtin();
    let mut generated = Vec::with_capacity(registry.len());
    let mut first_record = None;
    let mut skipped_files = 0;

    for (slot, det) in registry.iter() {
        let id = DetectorRegistry::threat_id(slot);
        tracing::debug!(detector = det.name(), id = %id, "running detector");

        let outcome = det.scan(project_root);
        skipped_files += outcome.skipped_files;

        let record = threat::build_record(&id, project_root, &outcome);
        let written = artifact::write_threat_artifact(project_root, &record)?;
        generated.push(written.relative_path);

        if first_record.is_none() {
            first_record = Some(record);
        }
    }

    // The registry is never empty; the first slot's record drives the
    // single-threat fields of the report.
    let record = first_record.ok_or_else(|| {
        NumsecError::Other(anyhow::anyhow!("detector registry is empty"))
    })?;

    let report = AnalysisReport {
        status: "ok",
        mode: "mvp",
        project_root: project_root.display().to_string(),
        threats_dir: artifact::threats_dir(project_root).display().to_string(),
        generated,
        threat_id: record.id.clone(),
        detection: record.detection_tag(),
        skipped_files,
    };

    Ok(AnalysisOutcome { report, format })
}
