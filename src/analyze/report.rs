//! Structured run reports.
//!
//! The machine-readable form of an analysis run. Serialized with serde so
//! paths containing quotes or backslashes are escaped correctly; field order
//! and naming are part of the output contract.

use serde::Serialize;

/// Machine-readable summary of one analysis run.
///
/// Field order matters: consumers of the JSON output rely on it.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Always `"ok"` for a run that completed.
    pub status: &'static str,
    /// Analysis mode. Only `"mvp"` exists today.
    pub mode: &'static str,
    /// Absolute project root that was analyzed.
    pub project_root: String,
    /// Absolute path of the threats directory.
    pub threats_dir: String,
    /// Project-relative paths of the generated threat documents.
    pub generated: Vec<String>,
    /// Id of the written threat record.
    pub threat_id: String,
    /// `"detected"` when a detector fired, `"example"` otherwise.
    pub detection: &'static str,
    /// Files the scanner could not read and skipped. A non-zero count is a
    /// blind spot in the scan, surfaced here instead of silently dropped.
    pub skipped_files: usize,
}

impl AnalysisReport {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            status: "ok",
            mode: "mvp",
            project_root: "/proj".to_string(),
            threats_dir: "/proj/numsec/threats".to_string(),
            generated: vec!["numsec/threats/THREAT-001/threat.md".to_string()],
            threat_id: "THREAT-001".to_string(),
            detection: "detected",
            skipped_files: 0,
        }
    }

    #[test]
    fn serializes_fields_in_contract_order() {
        let json = sample().to_json().unwrap();
        let order = [
            "\"status\"",
            "\"mode\"",
            "\"project_root\"",
            "\"threats_dir\"",
            "\"generated\"",
            "\"threat_id\"",
            "\"detection\"",
            "\"skipped_files\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn output_is_valid_json() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["threat_id"], "THREAT-001");
        assert_eq!(value["generated"][0], "numsec/threats/THREAT-001/threat.md");
    }

    #[test]
    fn special_characters_in_paths_are_escaped() {
        let mut report = sample();
        report.project_root = "/proj/with \"quotes\"".to_string();

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["project_root"], "/proj/with \"quotes\"");
    }
}
