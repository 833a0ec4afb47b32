//! Integration tests for the deploylint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID: &str = r#"
metadata:
  name: awesome
  env: prod
settings:
  replicas: 2
  timeout: 60
features:
  - name: featureA
    enabled: true
"#;

const NO_TIMEOUT: &str = "metadata:\n  name: api\n  env: dev\nsettings:\n  replicas: 1\n";

const BROKEN: &str = "metadata:\n  env: unknown\nsettings:\n  replicas: 0\n";

fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn deploylint() -> Command {
    let mut cmd = Command::new(cargo_bin("deploylint"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployment configuration"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_requires_a_path() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<CONFIG>"));
    Ok(())
}

#[test]
fn check_clean_file_prints_ok() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", VALID);

    deploylint()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}: OK\n", path.display()))
        .stderr("");
    Ok(())
}

#[test]
fn check_quiet_prints_nothing_for_clean_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", VALID);

    deploylint()
        .args(["--quiet", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn check_reports_errors_and_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", BROKEN);
    let p = path.display().to_string();

    deploylint()
        .arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(format!(
            "  {p}:1 [error] metadata.name is required"
        )))
        .stderr(predicate::str::contains(format!(
            "  {p}:2 [warn] metadata.env value \"unknown\" is not recognized"
        )))
        .stderr(predicate::str::contains(format!(
            "  {p}:4 [error] settings.replicas must be a positive integer"
        )))
        .stderr(predicate::str::contains("Found 2 error(s) and 2 warning(s)"));
    Ok(())
}

#[test]
fn check_warnings_only_pass_unless_strict() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", NO_TIMEOUT);

    deploylint()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[warn] settings.timeout is missing; defaulting to 30",
        ));

    deploylint()
        .args(["check", "--strict"])
        .arg(&path)
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn check_prints_fix_suggestions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", NO_TIMEOUT);

    deploylint()
        .args(["check", "--fix-suggestions"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "    Fix suggestion: Add settings.timeout: 30",
        ));
    Ok(())
}

#[test]
fn check_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .args(["check", "-"])
        .write_stdin(VALID)
        .assert()
        .success()
        .stdout("-: OK\n");
    Ok(())
}

#[test]
fn check_missing_file_still_lints_the_rest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let good = write_config(&temp, "good.yaml", VALID);
    let missing = temp.path().join("missing.yaml");

    deploylint()
        .arg("check")
        .arg(&missing)
        .arg(&good)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(format!("{}: OK", good.display())))
        .stderr(predicate::str::contains(missing.display().to_string()));
    Ok(())
}

#[test]
fn check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", NO_TIMEOUT);

    let output = deploylint()
        .args(["check", "--format", "json"])
        .arg(&path)
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["strict"], false);
    assert_eq!(value["fatal"], false);
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["files"][0]["path"], path.display().to_string());
    assert_eq!(value["files"][0]["issues"][0]["line"], 4);
    Ok(())
}

#[test]
fn check_sarif_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "deploy.yaml", BROKEN);

    let output = deploylint()
        .args(["check", "--format", "sarif"])
        .arg(&path)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["version"], "2.1.0");
    let run = &value["runs"][0];
    assert_eq!(run["tool"]["driver"]["name"], "deploylint");
    assert_eq!(run["results"][0]["ruleId"], "metadata");
    assert_eq!(run["results"][0]["level"], "error");
    Ok(())
}

#[test]
fn rules_lists_builtins_in_order() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)^metadata.*\nsettings.*\nfeatures.*\n$")?);
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    deploylint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deploylint"));
    Ok(())
}
