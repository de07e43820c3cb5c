use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn luxestate(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("luxestate");
    cmd.current_dir(dir)
        .env_remove("PORT")
        .env_remove("DATABASE_PATH")
        .env_remove("RUST_LOG");
    cmd
}

/// Config pointing at a database inside `dir`, with every date free.
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let db = dir.join("catalog.db");
    fs::write(
        &path,
        format!(
            "[database]\npath = '{}'\n\n[availability]\navailability_rate = 1.0\n",
            db.display()
        ),
    )
    .unwrap();
    path
}

fn seeded() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    luxestate(dir.path())
        .args(["seed", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted 6 properties"));
    (dir, config)
}

/// Parse `--json` output into `(type, payload)` pairs.
fn json_lines(stdout: &[u8]) -> Vec<(String, Value)> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            (
                value["type"].as_str().unwrap().to_string(),
                value["payload"].clone(),
            )
        })
        .collect()
}

#[test]
fn help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    luxestate(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("availability"));
}

#[test]
fn version_flag() {
    let dir = tempfile::tempdir().unwrap();
    luxestate(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_validate_accepts_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    luxestate(dir.path())
        .args(["config", "validate", "-c", "absent.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found, using defaults"))
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_bad_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[availability]\navailability_rate = 1.5\n").unwrap();

    luxestate(dir.path())
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("availability.availability_rate"));
}

#[test]
fn search_emits_json_records() {
    let (dir, config) = seeded();
    let output = luxestate(dir.path())
        .args(["--json", "search", "--type", "rental", "-c"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let properties: Vec<Value> = json_lines(&output.stdout)
        .into_iter()
        .filter(|(kind, _)| kind == "property")
        .map(|(_, payload)| payload)
        .collect();
    assert_eq!(properties.len(), 3);
    assert!(properties.iter().all(|p| p["type"] == "rental"));
    assert_eq!(properties[0]["title"], "Apartamento Ejecutivo Centro Histórico");
}

#[test]
fn search_table_shows_nightly_prices() {
    let (dir, config) = seeded();
    luxestate(dir.path())
        .args(["search", "--location", "matuna", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loft Artístico La Matuna"))
        .stdout(predicate::str::contains("/ night"));
}

#[test]
fn search_rejects_malformed_filter() {
    let (dir, config) = seeded();
    luxestate(dir.path())
        .args(["search", "--bedrooms", "many", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bedrooms"));
}

#[test]
fn stats_as_json() {
    let (dir, config) = seeded();
    let output = luxestate(dir.path())
        .args(["--json", "stats", "-c"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let (_, stats) = json_lines(&output.stdout)
        .into_iter()
        .find(|(kind, _)| kind == "stats")
        .expect("stats record");
    assert_eq!(stats["total"], 6);
    assert_eq!(stats["forRental"], 3);
}

#[test]
fn quote_for_sale_property_fails() {
    let (dir, config) = seeded();
    let check_in = Utc::now().date_naive() + Duration::days(7);
    let check_out = check_in + Duration::days(3);
    luxestate(dir.path())
        .args(["quote", "--property", "1", "--check-in"])
        .arg(check_in.to_string())
        .arg("--check-out")
        .arg(check_out.to_string())
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available for booking"));
}

#[test]
fn quote_prints_breakdown() {
    let (dir, config) = seeded();
    let check_in = Utc::now().date_naive() + Duration::days(7);
    let check_out = check_in + Duration::days(3);
    luxestate(dir.path())
        .args(["quote", "--property", "2", "--guests", "2", "--check-in"])
        .arg(check_in.to_string())
        .arg("--check-out")
        .arg(check_out.to_string())
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 nights"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn availability_selection_is_quoted() {
    let (dir, config) = seeded();
    let from = Utc::now().date_naive() + Duration::days(7);
    let check_out = from + Duration::days(2);
    let output = luxestate(dir.path())
        .args(["--json", "availability", "--property", "4", "--days", "5", "--from"])
        .arg(from.to_string())
        .arg("--select")
        .arg(from.to_string())
        .arg("--select")
        .arg(check_out.to_string())
        .arg("-c")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.iter().filter(|(kind, _)| kind == "day").count(), 5);
    let (_, quote) = lines
        .iter()
        .find(|(kind, _)| kind == "quote")
        .expect("quote record");
    assert_eq!(quote["nights"], 2);
}
