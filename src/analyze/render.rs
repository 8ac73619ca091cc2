//! Markdown rendering of threat records.
//!
//! Pure string construction, no filesystem access. Content is interpolated
//! literally; paths containing markdown-special characters are not escaped.
//! That is a known limitation of the artifact format, shared with every
//! tool that consumes it.

use super::threat::ThreatRecord;

/// Render a threat record as the `threat.md` document.
///
/// Section order is fixed and part of the artifact contract: title,
/// metadata, affected files, attack scenario, impact, remediation.
pub fn render_threat_md(threat: &ThreatRecord) -> String {
    let files = if threat.affected_paths.is_empty() {
        "- (not detected)".to_string()
    } else {
        threat
            .affected_paths
            .iter()
            .map(|p| format!("- `{}`", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let remediation = threat
        .remediation_steps
        .iter()
        .map(|step| format!("- {step}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {title}\n\n\
         - **Threat ID**: `{id}`\n\
         - **STRIDE**: **{category}**\n\n\
         ## Affected files/components\n\
         {files}\n\n\
         ## Attack scenario\n\
         {scenario}\n\n\
         ## Impact\n\
         {impact}\n\n\
         ## Recommended remediation\n\
         {remediation}\n",
        title = threat.title,
        id = threat.id,
        category = threat.category,
        files = files,
        scenario = threat.scenario,
        impact = threat.impact,
        remediation = remediation,
    )
}
