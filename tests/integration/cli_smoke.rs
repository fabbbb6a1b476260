use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readability"));
    cmd.env_remove("READABILITY_SCORE").env_remove("READABILITY_FORMAT");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--score"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn text_report_with_farewell() {
    cmd()
        .arg(fixture("cat.txt"))
        .args(["--score", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 6"))
        .stdout(predicate::str::contains("Coleman–Liau index: -6.066667 (about -1 year olds)"))
        .stdout(predicate::str::ends_with("Thanks for using the readability calculator\n"));
}

#[test]
fn selection_is_case_insensitive() {
    cmd()
        .arg(fixture("cat.txt"))
        .args(["--score", "ARI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated Readability Index: -4.230000"));
}

#[test]
fn score_from_environment() {
    cmd()
        .arg(fixture("cat.txt"))
        .env("READABILITY_SCORE", "fk")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch–Kincaid readability tests: -2.620000 (about 2 year olds)"));
}

#[test]
fn missing_file_fails_but_says_goodbye() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    cmd()
        .arg(&missing)
        .args(["--score", "all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("was not found"))
        .stdout(predicate::str::contains("Thanks for using the readability calculator"));
}

#[test]
fn empty_file_fails() {
    let file = tempfile::NamedTempFile::new().unwrap();

    cmd()
        .arg(file.path())
        .args(["--score", "ari"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Seems like the file was empty"));
}

#[test]
fn unsupported_selection_exits_zero() {
    cmd()
        .arg(fixture("cat.txt"))
        .args(["--score", "fog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I can't calculate that :("));
}

#[test]
fn answers_prompts_from_stdin() {
    let input = format!("{}\n\nsmog\n", fixture("sentences.txt").display());

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter a File Path: "))
        .stderr(predicate::str::contains("Enter the score you want to calculate"))
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook:"));
}

#[test]
fn json_keeps_stdout_parseable() {
    let output = cmd()
        .arg(fixture("cat.txt"))
        .args(["--score", "all", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["kind"], "all");
    assert_eq!(value["report"]["average_age"], 2.75);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Thanks for using"));
}

#[test]
fn blank_score_is_rejected() {
    cmd()
        .arg(fixture("cat.txt"))
        .args(["--score", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--score"));
}
