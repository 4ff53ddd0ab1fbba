//! End-to-end tests for the lcmp binary
//!
//! Each test runs the compiled binary against a fresh working directory and
//! checks the rendered chart in every output format.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

const STANDALONE_LABEL: &str = "Standalone latency (avg/ms)";
const CLUSTER_LABEL: &str = "Cluster latency (avg/ms)";

fn lcmp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lcmp").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CHART_TITLE")
        .env_remove("OUTPUT_FORMAT")
        .env_remove("CHART_OUTPUT")
        .env_remove("BAR_WIDTH")
        .env_remove("CHART_WIDTH")
        .env_remove("CHART_HEIGHT")
        .env("ENABLE_COLOR", "false");
    cmd
}

fn json_output(dir: &TempDir, standalone: &str, cluster: &str) -> serde_json::Value {
    let output = lcmp(dir)
        .args(["--format", "json", standalone, cluster])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_terminal_chart() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .args(["120.5", "45.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standalone vs Cluster latency"))
        .stdout(predicate::str::contains("120.50 ms"))
        .stdout(predicate::str::contains("45.20 ms"))
        .stdout(predicate::str::contains(STANDALONE_LABEL))
        .stdout(predicate::str::contains(CLUSTER_LABEL))
        .stdout(predicate::str::contains("\x1b[").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_chart_description() {
    let dir = TempDir::new().unwrap();
    let value = json_output(&dir, "120.5", "45.2");

    assert_eq!(value["bar_mode"], "group");
    assert_eq!(value["y_axis_title"], "Latency (ms)");

    let series = value["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["label"], STANDALONE_LABEL);
    assert_eq!(series[0]["color"], "#ffa500");
    assert_eq!(series[0]["points"][0]["name"], "Standalone");
    assert_eq!(series[0]["points"][0]["latency"], 120.5);
    assert_eq!(series[1]["label"], CLUSTER_LABEL);
    assert_eq!(series[1]["color"], "#008000");
    assert_eq!(series[1]["points"][0]["name"], "Cluster");
    assert_eq!(series[1]["points"][0]["latency"], 45.2);
}

#[test]
fn test_zero_latencies() {
    let dir = TempDir::new().unwrap();
    let value = json_output(&dir, "0", "0");
    assert_eq!(value["series"][0]["points"][0]["latency"], 0.0);
    assert_eq!(value["series"][1]["points"][0]["latency"], 0.0);

    lcmp(&dir).args(["0", "0"]).assert().success().stdout(predicate::str::contains("0.00 ms"));
    lcmp(&dir).args(["--format", "svg", "0", "0"]).assert().success();
}

#[test]
fn test_scientific_notation_and_whitespace() {
    let dir = TempDir::new().unwrap();
    let value = json_output(&dir, "1e3", " 2e2 ");
    assert_eq!(value["series"][0]["points"][0]["latency"], 1000.0);
    assert_eq!(value["series"][1]["points"][0]["latency"], 200.0);
}

#[test]
fn test_svg_with_opposite_extremes() {
    let dir = TempDir::new().unwrap();
    for (standalone, cluster) in [("1e308", "-1e308"), ("1.7e308", "-1.7e308")] {
        lcmp(&dir)
            .args(["--format", "svg", standalone, cluster])
            .timeout(Duration::from_secs(30))
            .assert()
            .success()
            .stdout(predicate::str::contains("</svg>"))
            .stdout(predicate::str::contains("inf").not());
    }
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let dir = TempDir::new().unwrap();
    let first = lcmp(&dir).args(["--format", "svg", "12.345", "6.789"]).output().unwrap();
    let second = lcmp(&dir).args(["--format", "svg", "12.345", "6.789"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_svg_to_stdout() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .args(["--format", "svg", "--title", "Replication overhead", "120.5", "45.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"))
        .stdout(predicate::str::contains("Replication overhead"))
        .stdout(predicate::str::contains(STANDALONE_LABEL))
        .stdout(predicate::str::contains(CLUSTER_LABEL));
}

#[test]
fn test_svg_file_output_infers_format() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .args(["--output", "chart.svg", "120.5", "45.2"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let svg = fs::read_to_string(dir.path().join("chart.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(STANDALONE_LABEL));
    assert!(svg.contains(CLUSTER_LABEL));
}

#[test]
fn test_output_from_environment() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .env("CHART_OUTPUT", "latency.json")
        .args(["1", "2"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("latency.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["series"][1]["points"][0]["latency"], 2.0);
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .args(["--output", "missing/chart.svg", "1", "2"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Failed to write chart"));
}

#[test]
fn test_forced_color_output() {
    let dir = TempDir::new().unwrap();
    lcmp(&dir)
        .args(["--color", "120.5", "45.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("120.50 ms"));
}
