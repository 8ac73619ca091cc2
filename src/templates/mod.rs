//! Embedded project templates and scaffolding.
//!
//! Templates are embedded at compile time. Each top-level directory under
//! `templates/` is one template; `manifest.json` describes the scaffold as a
//! whole and is consumed by the preflight check.

use std::fs;
use std::path::Path;
use std::process::Command;

use include_dir::{include_dir, Dir};

use crate::error::{NumsecError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Raw contents of the scaffold manifest.
pub fn manifest_source() -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file("manifest.json")
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| NumsecError::Other(anyhow::anyhow!("embedded scaffold manifest missing")))
}

/// Names of the available project templates, sorted.
pub fn available_templates() -> Vec<String> {
    let mut names: Vec<String> = TEMPLATES_DIR
        .dirs()
        .filter_map(|d| d.path().file_name())
        .filter_map(|n| n.to_str())
        .map(String::from)
        .collect();
    names.sort();
    names
}

/// Check if a template exists.
pub fn has_template(name: &str) -> bool {
    available_templates().iter().any(|t| t == name)
}

/// Initialize a new project from a template.
///
/// Copies the template tree into `project_path` and guarantees the
/// `numsec/threats/` and `numsec/changes/` directories exist. Refuses to
/// touch an existing directory unless `force` is set. A git repository is
/// initialized best-effort; a missing `git` binary is not an error.
pub fn init_project(project_path: &Path, template: &str, force: bool) -> Result<()> {
    let template_dir =
        TEMPLATES_DIR
            .get_dir(template)
            .ok_or_else(|| NumsecError::UnknownTemplate {
                name: template.to_string(),
            })?;

    if project_path.exists() && !force {
        return Err(NumsecError::ProjectExists {
            path: project_path.to_path_buf(),
        });
    }

    fs::create_dir_all(project_path)?;

    extract_dir(template_dir, template, project_path)?;

    let numsec_dir = project_path.join("numsec");
    fs::create_dir_all(numsec_dir.join("threats"))?;
    fs::create_dir_all(numsec_dir.join("changes"))?;

    // Best-effort git init; scaffolding is complete without it.
    match Command::new("git").arg("init").current_dir(project_path).output() {
        Ok(out) if !out.status.success() => {
            tracing::debug!("git init exited with {:?}", out.status.code());
        }
        Err(e) => tracing::debug!("git init unavailable: {}", e),
        _ => {}
    }

    Ok(())
}

/// Recursively write an embedded directory into `dest`, stripping the
/// template-name prefix from embedded paths.
fn extract_dir(dir: &Dir<'_>, prefix: &str, dest: &Path) -> Result<()> {
    for file in dir.files() {
        let rel = file
            .path()
            .strip_prefix(prefix)
            .unwrap_or_else(|_| file.path());
        let target = dest.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.contents()).map_err(|e| NumsecError::TemplateInstall {
            path: target.clone(),
            message: e.to_string(),
        })?;
    }

    for sub in dir.dirs() {
        extract_dir(sub, prefix, dest)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn basic_template_is_available() {
        assert!(has_template("basic"));
        assert!(available_templates().contains(&"basic".to_string()));
    }

    #[test]
    fn unknown_template_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = init_project(&temp.path().join("proj"), "nope", false).unwrap_err();
        assert!(matches!(err, NumsecError::UnknownTemplate { .. }));
    }

    #[test]
    fn init_creates_scaffold_layout() {
        let temp = TempDir::new().unwrap();
        let proj = temp.path().join("proj");

        init_project(&proj, "basic", false).unwrap();
        assert!(proj.join("README.md").exists());
        assert!(proj.join("numsec/project.md").exists());
        assert!(proj.join("numsec/threats").is_dir());
        assert!(proj.join("numsec/changes").is_dir());
    }

    #[test]
    fn existing_directory_requires_force() {
        let temp = TempDir::new().unwrap();
        let proj = temp.path().join("proj");
        fs::create_dir_all(&proj).unwrap();

        let err = init_project(&proj, "basic", false).unwrap_err();
        assert!(matches!(err, NumsecError::ProjectExists { .. }));

        init_project(&proj, "basic", true).unwrap();
        assert!(proj.join("numsec/threats").is_dir());
    }

    #[test]
    fn manifest_is_embedded() {
        assert!(manifest_source().unwrap().contains("format_version"));
    }
}
