//! Command-line behaviour of the `bondscope` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's environment and config directory.
fn bondscope(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bondscope").unwrap();
    cmd.env_remove("FRED_API_KEY")
        .env_remove("BONDSCOPE_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

const YIELD_SCENARIO: &[&str] = &[
    "analyze",
    "--face",
    "1000",
    "--coupon",
    "7",
    "--frequency",
    "1",
    "--settlement",
    "2020-01-01",
    "--maturity",
    "2035-12-31",
    "--yield",
    "9",
];

const PRICE_SCENARIO: &[&str] = &[
    "analyze",
    "--face",
    "1000",
    "--coupon",
    "8",
    "--frequency",
    "2",
    "--settlement",
    "2020-01-01",
    "--maturity",
    "2026-01-01",
    "--price",
    "911.37",
];

// =============================================================================
// ANALYZE
// =============================================================================

#[test]
fn analyze_from_yield_prints_price_and_tenor() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(YIELD_SCENARIO)
        .arg("--offline")
        .assert()
        .success()
        .stdout(predicate::str::contains("838.79"))
        .stdout(predicate::str::contains("10 Year"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn analyze_from_price_as_json() {
    let home = TempDir::new().unwrap();
    let output = bondscope(&home)
        .args(PRICE_SCENARIO)
        .args(["--offline", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let ytm = record["yield_to_maturity"].as_f64().unwrap();
    assert!((ytm - 0.099_998_75).abs() < 1e-6, "ytm {ytm}");
    assert_eq!(record["tenor"], "5 Year");
    assert!(record["benchmark"].is_null());
    assert!(record["spread"].is_null());
}

#[test]
fn analyze_minimal_output() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(YIELD_SCENARIO)
        .args(["--offline", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: 838.79, YTM: 9.0000%"))
        .stdout(predicate::str::contains("Spread: N/A"));
}

#[test]
fn analyze_with_benchmark_file_reports_spread() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("benchmarks.csv");
    fs::write(
        &file,
        "series_id,date,value\nDGS5,2024-03-02,.\nDGS5,2024-03-01,4.25\n",
    )
    .unwrap();

    bondscope(&home)
        .args([
            "analyze",
            "--coupon",
            "5",
            "--settlement",
            "2024-03-03",
            "--maturity",
            "2029-03-03",
            "--yield",
            "5.5",
            "--benchmark-file",
        ])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 Year"))
        .stdout(predicate::str::contains("DGS5 on 2024-03-01"))
        .stdout(predicate::str::contains("125 bps"));
}

#[test]
fn analyze_without_source_still_succeeds() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(YIELD_SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn rejects_malformed_date() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2030/01/01"])
        .args(["--settlement", "2020-01-01", "--yield", "5", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn rejects_settlement_after_maturity() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2020-01-01"])
        .args(["--settlement", "2021-01-01", "--yield", "5", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after maturity"));
}

#[test]
fn rejects_settlement_in_future() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "3000-01-01"])
        .args(["--settlement", "2999-01-01", "--yield", "5", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after today"));
}

#[test]
fn rejects_negative_inputs() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2030-01-01"])
        .args(["--settlement", "2020-01-01", "--price=-10", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));

    bondscope(&home)
        .args(["analyze", "--coupon=-1", "--maturity", "2030-01-01"])
        .args(["--settlement", "2020-01-01", "--yield", "5", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn requires_exactly_one_of_price_and_yield() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2030-01-01"])
        .args(["--settlement", "2020-01-01", "--offline"])
        .assert()
        .failure();

    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2030-01-01"])
        .args(["--settlement", "2020-01-01", "--offline", "--price", "950", "--yield", "5"])
        .assert()
        .failure();
}

#[test]
fn rejects_unknown_frequency() {
    let home = TempDir::new().unwrap();
    bondscope(&home)
        .args(["analyze", "--coupon", "5", "--maturity", "2030-01-01", "--frequency", "5"])
        .args(["--settlement", "2020-01-01", "--yield", "5", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frequency"));
}

// =============================================================================
// CURVE
// =============================================================================

#[test]
fn curve_as_csv_has_every_point() {
    let home = TempDir::new().unwrap();
    let output = bondscope(&home)
        .args(["curve", "--face", "1000", "--coupon", "7", "--frequency", "1"])
        .args(["--settlement", "2020-01-01", "--maturity", "2035-12-31", "--yield", "9"])
        .args(["--format", "csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "yield_pct,duration_price,convexity_price");
    assert_eq!(lines.len(), 202);
    assert!(lines[1].starts_with("4.5000,"));
    assert!(lines[201].starts_with("13.5000,"));
}

#[test]
fn curve_can_thin_points() {
    let home = TempDir::new().unwrap();
    let output = bondscope(&home)
        .args(["curve", "--coupon", "7", "--settlement", "2020-01-01"])
        .args(["--maturity", "2035-12-31", "--yield", "9", "--every", "50", "--format", "csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 6);
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("conf").join("bondscope.toml");

    bondscope(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    bondscope(&home)
        .args(["config", "show", "--format", "minimal", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark.max_attempts=7"))
        .stdout(predicate::str::contains("tenor.cutoffs=reference"));

    // refuses to clobber without --force
    bondscope(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[solver]\nmax_iterations = 0\n").unwrap();

    bondscope(&home)
        .args(YIELD_SCENARIO)
        .args(["--offline", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_changes_tenor_cutoffs() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("calendar.toml");
    fs::write(&path, "[tenor]\ncutoffs = \"calendar\"\n").unwrap();

    // 15.99 years: 10 Year under reference cutoffs, 20 Year under calendar ones
    bondscope(&home)
        .args(YIELD_SCENARIO)
        .args(["--offline", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("20 Year"));
}
