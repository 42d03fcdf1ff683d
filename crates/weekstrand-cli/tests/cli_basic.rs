//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a temporary config file and verify
//! outputs.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command with `--config` pointing into `dir`.
/// Returns (exit code, stdout, stderr).
fn run_cli(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let config = dir.join("config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_weekstrand-cli"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_events(dir: &Path, json: &str) -> String {
    let path = dir.join("events.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_config_get_defaults() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "work_day_start"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "360");
}

#[test]
fn test_config_set_persists() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "work_day_end", "1080"]);
    assert_eq!(code, 0, "config set failed: {stderr}");
    assert!(dir.path().join("config.toml").exists());

    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "work_day_end"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1080");
}

#[test]
fn test_config_set_rejects_invalid_window() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "work_day_start", "1300"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "no_such_key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_list_and_reset() {
    let dir = TempDir::new().unwrap();
    run_cli(dir.path(), &["config", "set", "track_all_day", "true"]);

    let (code, stdout, _) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["track_all_day"], true);
    assert_eq!(parsed["conflict_color"], "#FF000000");

    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "track_all_day"]);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_weave_single_event() {
    let dir = TempDir::new().unwrap();
    // Monday 2026-10-19, 10:00-12:00
    let events = write_events(
        dir.path(),
        r##"[{"start_day": 2461333, "end_day": 2461333, "start_time": 600, "end_time": 720, "color": "#E53935"}]"##,
    );
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["weave", "--events", &events, "--week-of", "2026-10-19"],
    );
    assert_eq!(code, 0, "weave failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["week_start"], "2026-10-18");
    assert_eq!(parsed["first_julian_day"], 2461332);
    let strands = parsed["strands"].as_object().unwrap();
    assert_eq!(strands.len(), 1);
    let red = &strands["#FFE53935"];
    assert_eq!(red["count"], 1);
    // Second 40px column is centred on x=60
    assert_eq!(red["points"], serde_json::json!([60.0, 67.0, 60.0, 89.0]));
}

#[test]
fn test_weave_monday_first_week() {
    let dir = TempDir::new().unwrap();
    let events = write_events(
        dir.path(),
        r##"[{"start": "2026-10-19T10:00:00", "end": "2026-10-19T12:00:00", "color": "#E53935"}]"##,
    );
    let (code, stdout, _) = run_cli(
        dir.path(),
        &[
            "weave",
            "--events",
            &events,
            "--week-of",
            "2026-10-21",
            "--first-weekday",
            "mon",
        ],
    );
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["week_start"], "2026-10-19");
    assert_eq!(
        parsed["strands"]["#FFE53935"]["points"],
        serde_json::json!([20.0, 67.0, 20.0, 89.0])
    );
}

#[test]
fn test_weave_empty_events() {
    let dir = TempDir::new().unwrap();
    let events = write_events(dir.path(), "[]");
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["weave", "--events", &events, "--week-of", "2026-10-19"],
    );
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["strands"].is_null());
}

#[test]
fn test_weave_missing_events_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["weave", "--events", missing.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("cannot read"));
}

#[test]
fn test_weave_rejects_bad_minutes() {
    let dir = TempDir::new().unwrap();
    let events = write_events(
        dir.path(),
        r##"[{"start_day": 2461333, "end_day": 2461333, "start_time": 600, "end_time": 2000, "color": "#E53935"}]"##,
    );
    let (code, _, stderr) = run_cli(dir.path(), &["weave", "--events", &events]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
