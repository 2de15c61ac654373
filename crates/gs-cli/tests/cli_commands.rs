//! Integration tests for the `stratum` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stratum() -> Command {
    let mut cmd = Command::cargo_bin("stratum").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a content file into a temp dir and return both.
fn content_file(json: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mission.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_fixed_roll_success() {
    stratum()
        .args(["check", "-a", "PHY", "-v", "4", "-d", "4", "-r", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PHY 4 + d6 (6) = 10 vs 4 + 6 = 10"))
        .stdout(predicate::str::contains("SUCCESS"));
}

#[test]
fn check_fixed_roll_failure() {
    stratum()
        .args(["check", "-a", "int", "-v", "3", "-d", "5", "-r", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 4 vs 5 + 6 = 11"))
        .stdout(predicate::str::contains("FAILURE"));
}

#[test]
fn check_boundary_json() {
    let output = stratum()
        .args(["check", "-a", "DEF", "-v", "2", "-d", "0", "-r", "4", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["attribute"], "DEF");
    assert_eq!(value["total"], 6);
    assert_eq!(value["target"], 6);
    assert_eq!(value["success"], true);
}

#[test]
fn check_negative_value() {
    stratum()
        .args(["check", "-a", "PHY", "--value", "-2", "-d", "0", "-r", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILURE"));
}

#[test]
fn check_seeded_is_reproducible() {
    let run = || {
        stratum()
            .args(["check", "-a", "PHY", "-v", "0", "-d", "10", "-s", "7", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn check_unknown_attribute() {
    stratum()
        .args(["check", "-a", "CHA", "-v", "3", "-d", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute: CHA"));
}

#[test]
fn check_rejects_roll_off_the_die() {
    stratum()
        .args(["check", "-a", "PHY", "-v", "3", "-d", "2", "-r", "7"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_sample() {
    stratum()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid 'Mara Voss': 4 scenes"));
}

#[test]
fn validate_reports_broken_links() {
    let (_dir, path) = content_file(
        r#"{
            "character": {"name": "Ash", "attributes": {"PHY": 2}},
            "narrative": {"start": "a", "scenes": [
                {"id": "a", "text": "Go.", "choices": [
                    {"label": "On", "on_success": {"next": "b", "effects": [{"track": "Hull", "delta": -1}]}}
                ]}
            ]}
        }"#,
    );
    stratum()
        .args(["validate", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing scene 'b'"))
        .stderr(predicate::str::contains("unknown meter 'Hull'"))
        .stderr(predicate::str::contains("2 error(s) found"));
}

#[test]
fn validate_rejects_inverted_meter() {
    let (_dir, path) = content_file(
        r#"{
            "character": {"name": "Ash", "attributes": {"PHY": 2},
                "tracks": [{"name": "Integrity", "current": 3, "min": 5, "max": 1}]},
            "narrative": {"start": "a", "scenes": [{"id": "a", "text": "."}]}
        }"#,
    );
    stratum()
        .args(["validate", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("min 5 is above max 1"));
    stratum()
        .args(["play", "-c"])
        .arg(&path)
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid meter 'Integrity'"));
}

#[test]
fn validate_missing_file() {
    stratum()
        .args(["validate", "-c", "/nonexistent/mission.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

// ---------------------------------------------------------------------------
// sample
// ---------------------------------------------------------------------------

#[test]
fn sample_round_trips_through_validate() {
    let output = stratum().arg("sample").output().unwrap();
    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();
    assert!(json.contains("\"start\": \"shaft\""));

    let (_dir, path) = content_file(&json);
    stratum()
        .args(["validate", "-c"])
        .arg(&path)
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_from_stdin() {
    stratum()
        .args(["play", "--seed", "42", "--delay", "0"])
        .write_stdin("status\nnote checking in\nlog\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Survey Shaft 7"))
        .stdout(predicate::str::contains("Integrity: 8/10"))
        .stdout(predicate::str::contains("Note: checking in"))
        .stdout(predicate::str::contains("Signing off."));
}

#[test]
fn play_resolves_a_check() {
    stratum()
        .args(["play", "--seed", "1", "--delay", "0"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolling PHY..."))
        .stdout(predicate::str::contains("The Stratum Floor"));
}

#[test]
fn play_rejects_broken_start() {
    let (_dir, path) = content_file(
        r#"{
            "character": {"name": "Ash", "attributes": {}},
            "narrative": {"start": "nowhere", "scenes": [{"id": "a", "text": "."}]}
        }"#,
    );
    stratum()
        .args(["play", "-c"])
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scene: nowhere"));
}
