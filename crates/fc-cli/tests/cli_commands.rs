//! Integration tests for the fc CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fc() -> Command {
    Command::cargo_bin("fc").unwrap()
}

/// A cost model file with an economy small enough to simulate quickly.
fn test_config() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("economy.json"),
        r#"{
    "prices": { "item": 1000000, "transfer_item": 0 },
    "gold_fees": [[10000, 20000]],
    "low_class_threshold": 2
}
"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_summary_and_percentiles() {
    fc().args([
        "simulate", "-c", "4", "-t", "3", "--transfer", "none", "-n", "500",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("class 4, tier 3")
            .and(predicate::str::contains("mean total cost"))
            .and(predicate::str::contains("standard deviation"))
            .and(predicate::str::contains("Percentiles"))
            .and(predicate::str::contains("99%")),
    );
}

#[test]
fn simulate_json_output() {
    let output = fc()
        .args(["simulate", "-t", "2", "-n", "200", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["summary"]["trials"], 200);
    assert_eq!(value["scenario"]["tier"], 2);
    assert_eq!(value["scenario"]["transfer"], "convergence");
    assert_eq!(value["summary"]["percentiles"].as_array().unwrap().len(), 7);
}

#[test]
fn simulate_is_reproducible_with_seed() {
    let run = || {
        fc().args([
            "simulate", "-t", "2", "-n", "300", "-s", "9", "-w", "2", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_with_histogram() {
    fc().args([
        "simulate", "-t", "2", "--transfer", "plain", "-n", "300", "--histogram",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Distribution").and(predicate::str::contains("#")));
}

#[test]
fn simulate_with_config_file() {
    let dir = test_config();
    let config = dir.path().join("economy.json");
    fc().args([
        "simulate",
        "-c",
        "1",
        "-t",
        "2",
        "--transfer",
        "none",
        "-n",
        "200",
        "--config",
        config.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("class 1, tier 2"));
}

#[test]
fn simulate_labels_costs_with_configured_unit() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("thousands.json");
    fs::write(&config, r#"{ "reporting_unit": 1000.0 }"#).unwrap();
    fc().args([
        "simulate",
        "-t",
        "2",
        "-n",
        "200",
        "--config",
        config.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("k").and(predicate::str::contains("kk").not()));
}

#[test]
fn simulate_rejects_unknown_transfer() {
    fc().args(["simulate", "--transfer", "sideways", "-n", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown transfer mode"));
}

#[test]
fn simulate_rejects_out_of_range_tier() {
    fc().args(["simulate", "-c", "1", "-t", "3", "--transfer", "none", "-n", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn simulate_rejects_single_trial() {
    fc().args(["simulate", "-t", "1", "-n", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 samples"));
}

#[test]
fn simulate_rejects_missing_config() {
    fc().args(["simulate", "-n", "10", "--config", "/nonexistent/economy.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config read error"));
}

// ---------------------------------------------------------------------------
// policy
// ---------------------------------------------------------------------------

#[test]
fn policy_lists_every_level() {
    fc().args(["policy", "-c", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("always spends cores")
                .and(predicate::str::contains("0 -> 1"))
                .and(predicate::str::contains("9 -> 10"))
                .and(predicate::str::contains("65%")),
        );
}

#[test]
fn policy_for_low_class() {
    fc().args(["policy", "-c", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("weighs core prices").and(predicate::str::contains("50%")),
        );
}

#[test]
fn policy_unknown_class() {
    fc().args(["policy", "-c", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown item class 7"));
}

// ---------------------------------------------------------------------------
// defaults
// ---------------------------------------------------------------------------

#[test]
fn defaults_prints_loadable_json() {
    let output = fc()
        .arg("defaults")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("defaults.json");
    fs::write(&path, &output).unwrap();

    fc().args([
        "policy",
        "-c",
        "3",
        "--config",
        path.to_str().unwrap(),
    ])
    .assert()
    .success();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"gold_fees\""));
    assert!(text.contains("\"refunds\""));
}
