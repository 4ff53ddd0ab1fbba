//! CLI options interaction tests
//!
//! These tests validate argument handling, exit codes and how the CLI
//! options combine with environment configuration.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Variables read by the renderer; cleared so the host environment cannot leak in
const CONFIG_VARS: [&str; 7] = [
    "CHART_TITLE",
    "CHART_WIDTH",
    "CHART_HEIGHT",
    "BAR_WIDTH",
    "OUTPUT_FORMAT",
    "CHART_OUTPUT",
    "ENABLE_COLOR",
];

/// Helper function to create a test command running in an empty directory
fn create_test_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lcmp").unwrap();
    cmd.current_dir(dir.path());
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_missing_both_arguments() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing argument"));
}

#[test]
fn test_missing_cluster_argument() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("120.5")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing argument"))
        .stderr(predicate::str::contains("CLUSTER_METRICS"));
}

#[test]
fn test_missing_argument_reported_before_parsing() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("abc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing argument"))
        .stderr(predicate::str::contains("Invalid number").not());
}

#[test]
fn test_invalid_numbers() {
    let dir = TempDir::new().unwrap();

    for (standalone, cluster, argument) in [
        ("abc", "45.2", "standalone_metrics"),
        ("120.5", "abc", "cluster_metrics"),
        ("", "1", "standalone_metrics"),
        ("1", "nan", "cluster_metrics"),
        ("1e999", "1", "standalone_metrics"),
    ] {
        create_test_cmd(&dir)
            .args([standalone, cluster])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid number"))
            .stderr(predicate::str::contains(argument));
    }
}

#[test]
fn test_unknown_option_is_usage_error() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["1", "2", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn test_invalid_format_value() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--format", "png", "1", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_help_and_version() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("STANDALONE_METRICS"))
        .stdout(predicate::str::contains("CLUSTER_METRICS"));

    create_test_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_out_of_range_width_is_config_error() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--width", "50", "1", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG"));
}

#[test]
fn test_invalid_env_value_is_config_error() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .env("BAR_WIDTH", "wide")
        .args(["1", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("BAR_WIDTH"));
}

#[test]
fn test_env_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "CHART_TITLE=\"From env file\"\nOUTPUT_FORMAT=json\n").unwrap();

    create_test_cmd(&dir)
        .args(["1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"From env file\""));

    // CLI options win over the env file
    create_test_cmd(&dir)
        .args(["--title", "From cli", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"From cli\""));
}

#[test]
fn test_negative_numbers_are_values_not_options() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-color", "-5", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-5.00 ms"))
        .stdout(predicate::str::contains("10.00 ms"));
}

#[test]
fn test_negative_decimals_are_values() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-color", "--", "-.5", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-0.50 ms"))
        .stdout(predicate::str::contains("1.00 ms"));

    create_test_cmd(&dir)
        .args(["--no-color", "-1e-3", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-0.00 ms"))
        .stdout(predicate::str::contains("2.00 ms"));

    create_test_cmd(&dir)
        .args(["--no-color", "-.5", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-0.50 ms"));
}

#[test]
fn test_hyphenated_text_is_invalid_number() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["-abc", "1"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid number"))
        .stderr(predicate::str::contains("standalone_metrics"));
}

#[test]
fn test_extreme_values_render() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-color", "--verbose", "1.7e308", "-1.7e308"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.70e308 ms"))
        .stdout(predicate::str::contains("Difference:   out of range"))
        .stdout(predicate::str::contains("inf").not());
}

#[test]
fn test_verbose_summary() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-color", "--verbose", "100", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Summary"))
        .stdout(predicate::str::contains("Faster:       Cluster"));
}

#[test]
fn test_debug_output_stays_on_stderr() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-color", "--debug", "--format", "json", "1", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration Summary:"))
        .stdout(predicate::str::starts_with("{"));
}
