//! Integration tests for the embudo binary: output formats, CSV export,
//! config overrides, and fail-fast loader errors

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_LOG: &str = "\
Case_ID,Activity,Timestamp,Priority,Category
HD-1,Opened,2024-03-01 09:00:00,High,Network
HD-1,Investigation Started,2024-03-01 14:00:00,High,Network
HD-1,Solution Implemented,2024-03-03 14:00:00,High,Network
HD-1,Closed,2024-03-06 14:00:00,High,Network
HD-2,Opened,2024-03-02 08:00:00,Low,Software
HD-2,Investigation Started,2024-03-02 10:00:00,Low,Software
HD-2,Closed,2024-03-04 10:00:00,Low,Software
";

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("log.csv");
    fs::write(&path, SAMPLE_LOG).unwrap();
    path
}

#[test]
fn test_text_report_sections() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loaded 7 events for 2 tickets"))
        .stdout(predicate::str::contains("Average Cycle Time by Stage:"))
        .stdout(predicate::str::contains("Investigation Started"))
        .stdout(predicate::str::contains("RECOMMENDED ACTIONS:"));
}

#[test]
fn test_json_output_parses() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    let output = cmd.arg(&input).arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tool"], "embudo");
    assert_eq!(value["event_count"], 7);
    assert_eq!(value["case_count"], 2);
    assert!(value["stage_summary"].as_array().unwrap().len() >= 3);
    assert!(value["recommendations"].as_array().unwrap().len() >= 2);
}

#[test]
fn test_csv_export_writes_three_tables() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let out_dir = dir.path().join("results");

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input)
        .arg("--format")
        .arg("csv")
        .arg("-o")
        .arg(&out_dir);

    cmd.assert().success();

    let stage_summary = fs::read_to_string(out_dir.join("stage_summary.csv")).unwrap();
    assert!(stage_summary.starts_with("From_Stage,Avg_Hours,Median_Hours,Std_Hours,Count"));
    assert!(stage_summary.contains("Investigation Started"));

    let resolution = fs::read_to_string(out_dir.join("resolution_summary.csv")).unwrap();
    assert!(resolution.starts_with("Case_ID,Total_Hours,Priority,Category"));
    assert!(resolution.contains("HD-1,125.00,High,Network"));

    let recommendations = fs::read_to_string(out_dir.join("recommendations.csv")).unwrap();
    assert!(recommendations.starts_with("Issue,Action,Expected_Impact"));
}

#[test]
fn test_out_dir_with_text_format_also_exports() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let out_dir = dir.path().join("exports");

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input).arg("-o").arg(&out_dir);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Average Cycle Time by Stage:"));
    assert!(out_dir.join("stage_summary.csv").exists());
}

#[test]
fn test_threshold_flag_changes_bottleneck_set() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    // With an absurdly high threshold nothing qualifies
    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input).arg("-t").arg("10000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0 stages above 10000.0h"));
}

#[test]
fn test_config_file_overridden_by_cli() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let config_path = dir.path().join("embudo.toml");
    fs::write(
        &config_path,
        "[analysis]\nbottleneck_threshold_hours = 10000.0\n",
    )
    .unwrap();

    // CLI flag wins over the file value
    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input)
        .arg("--config")
        .arg(&config_path)
        .arg("-t")
        .arg("20");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stages above 20.0h"));
}

#[test]
fn test_missing_column_fails_fast() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "Case_ID,Activity,Timestamp,Priority\nHD-1,Opened,2024-03-01 09:00:00,High\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing required column: Category"));
}

#[test]
fn test_bad_timestamp_names_row_and_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "Case_ID,Activity,Timestamp,Priority,Category\n\
         HD-1,Opened,2024-03-01 09:00:00,High,Network\n\
         HD-1,Closed,03/06/2024,High,Network\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("row 2"))
        .stderr(predicate::str::contains("Timestamp"));
}

#[test]
fn test_invalid_improvement_pct_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg(&input).arg("--improvement-pct").arg("1.5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--improvement-pct"));
}

#[test]
fn test_missing_input_file_reports_path() {
    let mut cmd = Command::cargo_bin("embudo").unwrap();
    cmd.arg("no-such-file.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.csv"));
}
