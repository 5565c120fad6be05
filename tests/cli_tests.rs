//! Integration tests for the classlint CLI
//!
//! These tests drive the binary end to end: scanning fixture stylesheets,
//! checking names given on the command line, output formats, exit codes and
//! configuration commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn classlint_cmd() -> Command {
    Command::cargo_bin("classlint").unwrap()
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/styles")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_cli_help() {
    classlint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("naming-convention linter"));
}

#[test]
fn test_check_reports_failure_with_location() {
    classlint_cmd()
        .args(["check", &fixture("dropdown.scss")])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "dropdown.scss:29: btn_primary — component name not camelCase / unexpected separator",
        ))
        .stdout(predicate::str::contains("dropdown--dropUp").not());
}

#[test]
fn test_check_clean_file_succeeds() {
    classlint_cmd()
        .args(["check", &fixture("clean.css")])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_json_output() {
    let output = classlint_cmd()
        .args(["check", "--format", "json", &fixture("dropdown.scss")])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 9);
    assert_eq!(report["passed"], 8);
    assert_eq!(report["files_scanned"], 1);

    let failures = report["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["name"], "btn_primary");
    assert_eq!(failures[0]["rule"], "camel-case");
    assert_eq!(failures[0]["location"]["line"], 29);
}

#[test]
fn test_check_directory_and_glob() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/styles");
    let output = classlint_cmd()
        .args(["check", "--format", "json", &dir.to_string_lossy()])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_scanned"], 2);
    assert_eq!(report["total"], 13);

    let pattern = format!("{}/*.css", dir.display());
    classlint_cmd()
        .args(["check", &pattern])
        .assert()
        .success();
}

#[test]
fn test_check_indented_sass_file() {
    let file = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sass/button.sass");
    let output = classlint_cmd()
        .args(["check", "--format", "json", &file.to_string_lossy()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_scanned"], 1);
    assert_eq!(report["total"], 5);

    let failures = report["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["name"], "btn_primary");
    assert_eq!(failures[0]["location"]["line"], 12);
}

#[test]
fn test_check_empty_directory() {
    let temp_dir = tempdir().unwrap();
    let output = classlint_cmd()
        .args(["check", "--format", "json", &temp_dir.path().to_string_lossy()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 0);
    assert!(report["failures"].as_array().unwrap().is_empty());
}

#[test]
fn test_check_missing_path_fails() {
    classlint_cmd()
        .args(["check", "/definitely/not/here.scss"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("error: /definitely/not/here.scss"));
}

#[test]
fn test_check_strict_fails_on_warnings() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("menu.scss");
    fs::write(&file, ".dropdown-menu-item { }\n").unwrap();
    let file = file.to_string_lossy().into_owned();

    classlint_cmd()
        .args(["check", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: "));

    classlint_cmd()
        .args(["check", "--strict", &file])
        .assert()
        .failure();

    classlint_cmd()
        .args(["check", "--strict", "--max-descendant-depth", "2", &file])
        .assert()
        .success();
}

#[test]
fn test_check_writes_report_file() {
    let temp_dir = tempdir().unwrap();
    let out = temp_dir.path().join("reports/naming.md");

    classlint_cmd()
        .args([
            "check",
            "--format",
            "markdown",
            "--out",
            &out.to_string_lossy(),
            &fixture("dropdown.scss"),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(out).unwrap();
    assert!(content.starts_with("# Naming report"));
    assert!(content.contains("`btn_primary`"));
}

#[test]
fn test_check_quiet_keeps_exit_code() {
    classlint_cmd()
        .args(["check", "--quiet", &fixture("dropdown.scss")])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_no_variables_skips_declarations() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("vars.scss");
    fs::write(&file, "$primary: blue;\n.card { }\n").unwrap();
    let file = file.to_string_lossy().into_owned();

    classlint_cmd()
        .args(["check", &file])
        .assert()
        .failure()
        .stdout(predicate::str::contains("variable name missing"));

    classlint_cmd()
        .args(["check", "--no-variables", &file])
        .assert()
        .success();
}

#[test]
fn test_check_uses_implicit_config_file() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("item.scss"),
        ".dropdown-item--active { }\n",
    )
    .unwrap();

    classlint_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "item.scss"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "modifier cannot be combined with a descendant",
        ));

    fs::write(
        temp_dir.path().join(".classlint.yml"),
        "naming:\n  disabled_rules: [modifier-with-descendant]\n",
    )
    .unwrap();

    classlint_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "item.scss"])
        .assert()
        .success();
}

#[test]
fn test_names_documented_examples_pass() {
    classlint_cmd()
        .args([
            "names",
            "myComponent",
            "myComponent--primary",
            "myComponent-descendantName",
            "u-textTruncate",
            "js-login",
            "dropdown.is-active",
        ])
        .assert()
        .success();
}

#[test]
fn test_names_reports_each_violation() {
    classlint_cmd()
        .args([
            "names",
            "my_component",
            "U-textTruncate",
            "myComponent--Primary--Secondary",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "my_component — component name not camelCase / unexpected separator",
        ))
        .stdout(predicate::str::contains(
            "U-textTruncate — utility namespace must be lowercase `u-`",
        ))
        .stdout(predicate::str::contains(
            "myComponent--Primary--Secondary — malformed name",
        ));
}

#[test]
fn test_names_standalone_state() {
    classlint_cmd()
        .args(["names", "is-active"])
        .assert()
        .success();

    classlint_cmd()
        .args(["names", "--standalone", "is-active"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("standalone selector"));
}

#[test]
fn test_names_variable_kind() {
    classlint_cmd()
        .args(["names", "--kind", "variable", "$dropdown-color-background"])
        .assert()
        .success();

    classlint_cmd()
        .args(["names", "--kind", "variable", "$primary"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "variable name missing `-<propertyName>-<variableName>` suffix",
        ));
}

#[test]
fn test_names_jsonl_output() {
    let output = classlint_cmd()
        .args(["names", "--format", "jsonl", "dropdown", "btn_primary", "Card"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["name"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(names, vec!["btn_primary", "Card"]);
}

#[test]
fn test_names_rejects_unknown_rule() {
    classlint_cmd()
        .args(["names", "--disable-rule", "no-such-rule", "dropdown"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_print_default_config() {
    classlint_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_descendant_depth"))
        .stdout(predicate::str::contains("exclude_patterns"));
}

#[test]
fn test_init_config() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("test_config.yml");

    classlint_cmd()
        .args(["init-config", "--output", &config_path.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("naming:"));

    classlint_cmd()
        .args(["init-config", "--output", &config_path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    classlint_cmd()
        .args(["init-config", "--force", "--output", &config_path.to_string_lossy()])
        .assert()
        .success();
}

#[test]
fn test_validate_config() {
    let temp_dir = tempdir().unwrap();
    let valid = temp_dir.path().join("valid.yml");
    fs::write(&valid, "naming:\n  project_namespaces: [tr]\n").unwrap();

    classlint_cmd()
        .args(["validate-config", "--verbose", "--config", &valid.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    let invalid = temp_dir.path().join("invalid.yml");
    fs::write(&invalid, "naming:\n  max_descendant_depth: 0\n").unwrap();

    classlint_cmd()
        .args(["validate-config", "--config", &invalid.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn test_list_rules() {
    classlint_cmd()
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("camel-case"))
        .stdout(predicate::str::contains("variable-suffix"));
}
