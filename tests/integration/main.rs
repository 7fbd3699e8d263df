//! Integration tests for the bunkcalc CLI
//!
//! Each test points `BUNKCALC_CONFIG` into a fresh temp dir so the user's
//! own config never leaks in.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a bunkcalc command with an isolated config location
fn bunkcalc(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("bunkcalc"));
    cmd.env("BUNKCALC_CONFIG", config_dir.path().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bunkcalc"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("required attendance percentage"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp).assert().success().stdout(predicate::str::contains("bunkcalc v"));
}

// =============================================================================
// calc
// =============================================================================

#[test]
fn test_calc_can_bunk() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "40", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You can bunk for 2 more days."))
        .stdout(predicate::str::contains("Current Attendance: 40/50 → 80.00%"))
        .stdout(predicate::str::contains("Attendance Then: 40/51 → 78.43%"));
}

#[test]
fn test_calc_must_attend_with_required() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "5", "10", "--required", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You need to attend 4 more classes to reach 90%."));
}

#[test]
fn test_calc_at_minimum() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "45", "50", "-r", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are at the minimum attendance requirement (90%)."));
}

#[test]
fn test_calc_negative_value_fails() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "-1", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please enter positive numbers only."));
}

#[test]
fn test_calc_zero_total_fails() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total classes cannot be zero."));
}

#[test]
fn test_calc_non_numeric_fails() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "many", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid numbers for both fields."));
}

#[test]
fn test_calc_unoffered_percentage_fails() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["calc", "4", "5", "-r", "70"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not one of the available options"));
}

#[test]
fn test_calc_json_output() {
    let temp = TempDir::new().unwrap();
    let output = bunkcalc(&temp).args(["--json", "calc", "30", "50"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["classification"]["kind"], "must_attend");
    assert_eq!(json["classification"]["days"], 8);
}

#[test]
fn test_calc_json_failure() {
    let temp = TempDir::new().unwrap();
    let output = bunkcalc(&temp).args(["--json", "calc", "10", "5"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Present classes cannot be greater than total classes.");
}

// =============================================================================
// options / config
// =============================================================================

#[test]
fn test_options_lists_defaults() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("75% (default)"))
        .stdout(predicate::str::contains("90%"));
}

#[test]
fn test_config_file_changes_options() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[calculator]\noptions = [60, 70]\ndefault_required = 60\n",
    )
    .unwrap();

    bunkcalc(&temp)
        .args(["calc", "6", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are at the minimum attendance requirement (60%)."));
}

#[test]
fn test_config_path() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp.path().join("config.toml").exists());

    bunkcalc(&temp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    bunkcalc(&temp).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_config_show_defaults() {
    let temp = TempDir::new().unwrap();
    bunkcalc(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_required = 75"));
}
