#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary inside an isolated working directory and HOME so that no
/// user config leaks into the assertions.
fn severity(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breach-severity").expect("binary should compile");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn compute_explicit_minimum_is_low() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--ei", "0.25", "--no-color"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Formula: SE = (DPC: 1) x (EI: 0.25) + (CB: 0.00)",
        ))
        .stdout(predicate::str::contains("Final Severity Score: 0.25 - Low"));
}

#[test]
fn compute_explicit_maximum_is_very_high() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args([
            "compute",
            "--variant",
            "explicit",
            "--dpc",
            "4",
            "--ei",
            "1",
            "--confidentiality",
            "0.5",
            "--integrity",
            "0.5",
            "--availability",
            "0.5",
            "--malicious",
            "0.5",
            "--no-color",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Final Severity Score: 6.00 - Very High"));
}

#[test]
fn compute_explicit_without_ei_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--dpc", "3"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Select a level for Ease of Identification.",
        ));
}

#[test]
fn compute_reactive_uses_default_ei() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--variant", "reactive", "--dpc", "3", "--no-color"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Final Severity Score: 3.00 - Medium"));
}

#[test]
fn compute_reactive_scenarios_match_expected_bands() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args([
            "compute",
            "--variant",
            "reactive",
            "--dpc",
            "2",
            "--ei",
            "0.5",
            "--confidentiality",
            "0.25",
            "--no-color",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Final Severity Score: 1.25 - Low"));

    severity(&dir)
        .args([
            "compute",
            "--variant",
            "reactive",
            "--dpc",
            "3",
            "--ei",
            "0.75",
            "--confidentiality",
            "0.25",
            "--integrity",
            "0.25",
            "--availability",
            "0.25",
            "--malicious",
            "0.5",
            "--no-color",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Final Severity Score: 3.50 - Medium"));
}

#[test]
fn compute_rejects_out_of_domain_option() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--ei", "0.3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid option '0.3'"))
        .stderr(predicate::str::contains("0.25, 0.5, 0.75, 1"));
}

#[test]
fn compute_json_contains_comment_and_string_severity() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = severity(&dir)
        .args([
            "compute",
            "--variant",
            "reactive",
            "--comment",
            "malicious=ransomware note found",
            "--malicious",
            "0.5",
            "--format",
            "json",
        ])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid json");
    assert_eq!(value["result"]["severity"], "1.50");
    assert_eq!(value["result"]["risk_level"], "Low");
    assert_eq!(
        value["result"]["breakdown"][5]["comment"],
        "ransomware note found"
    );
}

#[test]
fn compute_explicit_rejects_comments() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--ei", "1", "--comment", "dpc=why"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("comments are not available"));
}

#[test]
fn compute_rejects_malformed_comment_argument() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["compute", "--variant", "reactive", "--comment", "no separator"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected <criterion>=<text>"));
}

#[test]
fn compute_fail_on_returns_threshold_exit_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args([
            "compute", "--dpc", "4", "--ei", "1", "--fail-on", "high", "--no-color",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Very High"))
        .stderr(predicate::str::contains("meets fail-on threshold"));

    severity(&dir)
        .args(["compute", "--ei", "1", "--fail-on", "high", "--no-color"])
        .assert()
        .code(0);
}

#[test]
fn config_file_selects_variant_and_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("breach-severity.toml"),
        r#"
[calculator]
variant = "reactive"

[output]
format = "md"
"#,
    )
    .expect("config should write");

    severity(&dir)
        .arg("compute")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Variant: reactive"))
        .stdout(predicate::str::contains("| Criterion | Selected Option | Score | Description | Comment |"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("breach-severity.toml"),
        "[output]\nformat = \"sarif\"\n",
    )
    .expect("config should write");

    severity(&dir)
        .args(["compute", "--ei", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported output.format"));
}

#[test]
fn missing_explicit_config_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["--config", "absent.toml", "options"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .arg("init")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("created"));
    assert!(dir.path().join("breach-severity.toml").exists());

    severity(&dir)
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn session_explicit_notifies_and_keeps_going() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["session", "--no-color"])
        .write_stdin("compute\nset ei 0.5\nset dpc 4\ncompute\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "error: Select a level for Ease of Identification.",
        ))
        .stdout(predicate::str::contains("Final Severity Score: 2.00 - Medium"));
}

#[test]
fn session_explicit_clear_ei_keeps_previous_result() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["session", "--no-color"])
        .write_stdin("set ei 1\ncompute\nclear ei\ncompute\nshow\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Ease of Identification (EI): -- Select --"))
        .stdout(predicate::str::contains(
            "error: Select a level for Ease of Identification.",
        ))
        .stdout(predicate::str::contains("Final Severity Score: 1.00 - Low").count(2));
}

#[test]
fn session_reactive_recomputes_on_change() {
    let dir = TempDir::new().expect("temp dir should be created");
    severity(&dir)
        .args(["session", "--variant", "reactive", "--no-color"])
        .write_stdin("set dpc 4\nset availability 0.5\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Final Severity Score: 4.00 - Medium"))
        .stdout(predicate::str::contains("Final Severity Score: 4.50 - Medium"));
}
