//! CLI surface tests: argument validation and exit statuses

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mdtoc() -> Command {
    Command::cargo_bin("mdtoc").expect("binary should build")
}

#[test]
fn test_missing_argument_exits_one() {
    mdtoc()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("directory"));
}

#[test]
fn test_nonexistent_path_exits_one() {
    mdtoc()
        .arg("/nonexistent/path/to/tree")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_file_path_exits_one() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.md");
    std::fs::write(&file, "# Not a directory").unwrap();

    mdtoc()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_success_exits_zero_and_writes_outline() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("guide.md"), "# Intro\n").unwrap();

    mdtoc()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning directory:"));

    assert!(dir.path().join("toc.md").exists());
}

#[test]
fn test_fatal_errors_write_nothing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    mdtoc().arg(&missing).assert().failure();
    assert!(!missing.exists(), "no output should appear on a fatal error");
}
