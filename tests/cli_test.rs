//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn numsec() -> Command {
    Command::new(cargo_bin("numsec"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = numsec();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("security-focused project toolkit"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = numsec();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn list_templates_shows_basic() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = numsec();
    cmd.arg("list-templates");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- basic"));
    Ok(())
}

#[test]
fn init_scaffolds_project() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["init", "proj"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created project at"));

    assert!(temp.path().join("proj/README.md").exists());
    assert!(temp.path().join("proj/numsec/project.md").exists());
    assert!(temp.path().join("proj/numsec/threats").is_dir());
    assert!(temp.path().join("proj/numsec/changes").is_dir());
    Ok(())
}

#[test]
fn init_refuses_existing_dir_without_force() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("proj"))?;

    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["init", "proj"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let mut forced = numsec();
    forced.current_dir(temp.path());
    forced.args(["init", "proj", "--force"]);
    forced.assert().success();
    Ok(())
}

#[test]
fn init_rejects_unknown_template() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["init", "proj", "--template", "nonexistent"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent"));
    Ok(())
}

#[test]
fn analyze_empty_project_writes_example_record() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.arg("analyze");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Threat analysis complete"))
        .stdout(predicate::str::contains("Generated THREAT-001"));

    assert!(temp.path().join("numsec/threats/README.md").exists());
    let md = fs::read_to_string(temp.path().join("numsec/threats/THREAT-001/threat.md"))?;
    assert!(md.contains("**Tampering**"));
    assert!(md.contains("- (not detected)"));
    Ok(())
}

#[test]
fn analyze_reports_hardcoded_secret() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("app.py"), "PASSWORD = \"x\"\n")?;
    fs::write(temp.path().join("readme.md"), "password everywhere\n")?;

    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.arg("analyze");
    cmd.assert().success();

    let md = fs::read_to_string(temp.path().join("numsec/threats/THREAT-001/threat.md"))?;
    assert!(md.contains("**Information Disclosure**"));
    assert!(md.contains("- `app.py`"));
    assert!(!md.contains("readme.md"));
    Ok(())
}

#[test]
fn analyze_json_output_is_well_formed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("cfg.rs"), "let apikey = 1;\n")?;

    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["mode"], "mvp");
    assert_eq!(json["threat_id"], "THREAT-001");
    assert_eq!(json["detection"], "detected");
    assert_eq!(json["skipped_files"], 0);
    assert_eq!(json["generated"][0], "numsec/threats/THREAT-001/threat.md");
    Ok(())
}

#[test]
fn analyze_ai_format_alias_emits_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "--ai-format"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["detection"], "example");
    Ok(())
}

#[test]
fn analyze_missing_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "does-not-exist"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
    Ok(())
}

#[test]
fn analyze_verbose_failure_prints_error_chain() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "does-not-exist", "--verbose"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Project root is not a directory"))
        // The styled message plus the debug-formatted chain: two occurrences.
        .stderr(predicate::str::contains("not a directory").count(2));
    Ok(())
}

#[test]
fn analyze_failure_without_verbose_omits_chain() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "does-not-exist"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a directory").count(1));
    Ok(())
}

#[test]
fn analyze_verbose_shows_threats_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = numsec();
    cmd.current_dir(temp.path());
    cmd.args(["analyze", "--verbose"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Threats directory:"));

    let mut plain = numsec();
    plain.current_dir(temp.path());
    plain.arg("analyze");
    plain
        .assert()
        .success()
        .stdout(predicate::str::contains("Threats directory:").not());
    Ok(())
}

#[test]
fn analyze_twice_preserves_readme_edits() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut first = numsec();
    first.current_dir(temp.path());
    first.arg("analyze");
    first.assert().success();

    let readme = temp.path().join("numsec/threats/README.md");
    fs::write(&readme, "my notes\n")?;

    let mut second = numsec();
    second.current_dir(temp.path());
    second.arg("analyze");
    second.assert().success();

    assert_eq!(fs::read_to_string(&readme)?, "my notes\n");
    Ok(())
}

#[test]
fn init_then_analyze_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut init = numsec();
    init.current_dir(temp.path());
    init.args(["init", "proj"]);
    init.assert().success();

    let mut analyze = numsec();
    analyze.current_dir(temp.path());
    analyze.args(["analyze", "proj"]);
    analyze.assert().success();

    assert!(temp
        .path()
        .join("proj/numsec/threats/THREAT-001/threat.md")
        .exists());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = numsec();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("numsec"));
    Ok(())
}
