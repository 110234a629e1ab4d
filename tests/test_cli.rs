//! Tests for the labcal binary in non-interactive use

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_with_explicit_input() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("week.csv"),
        "Experiment Name,Date,Period,Room\nTitration,2024-03-06,5,Lab 3\nBad,2024-03-06,x,Lab 3\n",
    )
    .unwrap();

    Command::cargo_bin("labcal")
        .unwrap()
        .current_dir(dir.path())
        .args(["--input", "week.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 rows written"))
        .stderr(
            predicate::str::contains("skipping row")
                .and(predicate::str::contains("line 3, Experiment Name: 'Bad'")),
        );

    let written = fs::read_to_string(dir.path().join("output.csv")).unwrap();
    assert!(written.starts_with("Subject,Start Date,Start Time,End Date,End Time,"));
    assert!(written.contains("Titration,2024-03-06,01:55:00 PM,2024-03-06,02:35:00 PM"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("labcal")
        .unwrap()
        .current_dir(dir.path())
        .args(["-i", "nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));

    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_bad_period_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("week.csv"), "Experiment Name,Date,Period,Room\n").unwrap();
    fs::write(dir.path().join("periods.toml"), "period = []\n").unwrap();

    Command::cargo_bin("labcal")
        .unwrap()
        .current_dir(dir.path())
        .args(["-i", "week.csv", "--periods", "periods.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("period table is empty"));
}

#[test]
fn test_init_creates_template() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("labcal")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "term2"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("term2.csv")).unwrap();
    assert_eq!(text, "Experiment Name,Date,Period,Room\n");
}
