//! Integration tests for the sealvars CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. The
//! password is always injected via `SEALVARS_PASSWORD` so no test ever
//! blocks on the interactive prompt.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `{"DbPassword":"s3cr3t"}` encrypted under the key derived from
/// "correct-password" with an all-zero IV.
const GOLDEN_CIPHERTEXT: &str = "Nk2T/5fVB7Ay20zeaYscmt+FICojJoDxfPwBCoHarEo=";

const ZERO_IV: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

/// Helper: get a Command pointing at the sealvars binary.
fn sealvars() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sealvars").expect("binary should exist")
}

/// Helper: temp dir with a primary variables file.
fn project(vars_json: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("variables.json");
    fs::write(&path, vars_json).unwrap();
    (tmp, path)
}

#[test]
fn help_flag_shows_usage() {
    sealvars()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve deployment variables"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("encrypt"));
}

#[test]
fn version_flag_shows_version() {
    sealvars()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sealvars"));
}

#[test]
fn no_args_shows_help() {
    sealvars()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn resolve_missing_variables_file_fails() {
    let tmp = TempDir::new().unwrap();

    sealvars()
        .args(["resolve", "--file", "does-not-exist.json"])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables file not found"));
}

#[test]
fn resolve_without_sidecar_uses_primary_only() {
    let (tmp, path) = project(r#"{"AppName":"web","Port":"8080"}"#);

    sealvars()
        .args(["resolve", "--file", path.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "pw")
        .assert()
        .success()
        .stdout(predicate::str::diff("AppName=web\nPort=8080\n"));
}

#[test]
fn verbose_resolve_logs_missing_sidecar() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);

    sealvars()
        .args(["resolve", "--verbose", "--file", path.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "pw")
        .assert()
        .success()
        .stderr(predicate::str::contains("No sensitive-variables file was found"));
}

#[test]
fn encrypt_then_resolve_roundtrip() {
    let (tmp, path) = project(r#"{"AppName":"web","Foo":"bar"}"#);

    let input = tmp.path().join("sensitive.json");
    fs::write(&input, r#"{"Foo":"baz","DbPassword":"s3cr3t"}"#).unwrap();

    sealvars()
        .args([
            "encrypt",
            input.to_str().unwrap(),
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted 2 sensitive variables"));

    assert!(tmp.path().join("variables.secret").exists());

    // Sensitive entries win on collision; new entries append at the end.
    sealvars()
        .args([
            "resolve",
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .assert()
        .success()
        .stdout(predicate::str::diff("AppName=web\nFoo=baz\nDbPassword=s3cr3t\n"));
}

#[test]
fn resolve_golden_sidecar() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);
    fs::write(tmp.path().join("variables.secret"), GOLDEN_CIPHERTEXT).unwrap();

    sealvars()
        .args([
            "resolve",
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .assert()
        .success()
        .stdout(predicate::str::diff("AppName=web\nDbPassword=s3cr3t\n"));
}

#[test]
fn resolve_json_format() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);

    let output = sealvars()
        .args([
            "resolve",
            "--format",
            "json",
            "--file",
            path.to_str().unwrap(),
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "pw")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["AppName"], "web");
}

#[test]
fn wrong_password_fails_with_hint() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);
    fs::write(tmp.path().join("variables.secret"), GOLDEN_CIPHERTEXT).unwrap();

    sealvars()
        .args([
            "resolve",
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "wrong-password")
        .assert()
        .failure()
        .stderr(predicate::str::contains("check your password"));
}

#[test]
fn resolve_with_sidecar_but_no_iv_fails() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);
    fs::write(tmp.path().join("variables.secret"), GOLDEN_CIPHERTEXT).unwrap();

    sealvars()
        .args(["resolve", "--file", path.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .env_remove("SEALVARS_IV")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--iv"));
}

#[test]
fn get_prints_single_value() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);
    fs::write(tmp.path().join("variables.secret"), GOLDEN_CIPHERTEXT).unwrap();

    sealvars()
        .args([
            "get",
            "DbPassword",
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .assert()
        .success()
        .stdout(predicate::str::diff("s3cr3t\n"));
}

#[test]
fn get_unknown_variable_fails() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);

    sealvars()
        .args(["get", "Missing", "--file", path.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Missing' not found"));
}

#[test]
fn list_shows_names_but_not_values() {
    let (tmp, path) = project(r#"{"AppName":"web"}"#);
    fs::write(tmp.path().join("variables.secret"), GOLDEN_CIPHERTEXT).unwrap();

    sealvars()
        .args([
            "list",
            "--file",
            path.to_str().unwrap(),
            "--iv",
            ZERO_IV,
        ])
        .current_dir(tmp.path())
        .env("SEALVARS_PASSWORD", "correct-password")
        .assert()
        .success()
        .stdout(predicate::str::contains("AppName"))
        .stdout(predicate::str::contains("DbPassword"))
        .stdout(predicate::str::contains("s3cr3t").not());
}
