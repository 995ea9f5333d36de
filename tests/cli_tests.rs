//! End-to-end CLI tests driving the `nb2report` binary with assert_cmd.

mod common;

use assert_cmd::prelude::*;
use common::{markdown_cell, write_notebook};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Writes a small schema notebook: one top-level section, one nested
/// section and a list with two test cases.
fn write_schema(dir: &TempDir) -> std::path::PathBuf {
    let schema = dir.path().join("HOW_TO.ipynb");
    write_notebook(
        &schema,
        &[
            markdown_cell(&["# T1\n"]),
            markdown_cell(&["## T2\n"]),
            markdown_cell(&["* csv\n", "* parquet\n", "nada\n"]),
        ],
    );
    schema
}

#[test]
fn test_scaffold_creates_the_tree() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.arg("scaffold")
        .arg("--name")
        .arg("spark")
        .arg("--version")
        .arg("2.4")
        .arg("--input")
        .arg(&schema)
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scaffolding created at"));

    let t2 = temp_dir.path().join("spark").join("2.4").join("T1").join("T2");
    assert!(t2.join("csv.ipynb").is_file());
    assert!(t2.join("parquet.ipynb").is_file());
    assert!(!t2.join("nada.ipynb").exists());
}

#[test]
fn test_scaffold_with_missing_schema_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.arg("scaffold")
        .arg("-n")
        .arg("spark")
        .arg("-v")
        .arg("2.4")
        .arg("-i")
        .arg(temp_dir.path().join("missing.ipynb"))
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!temp_dir.path().join("spark").exists());
}

/// A freshly scaffolded tree is runnable without any interpreter: every
/// leaf is the empty template, whose asserts section has no code cells, so
/// every notebook reports KO and the summary is still generated.
#[test]
fn test_scaffold_then_report_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let schema = write_schema(&temp_dir);

    Command::cargo_bin("nb2report")
        .unwrap()
        .arg("scaffold")
        .arg("-n")
        .arg("spark")
        .arg("-v")
        .arg("2.4")
        .arg("-i")
        .arg(&schema)
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.arg("report")
        .arg("-n")
        .arg("spark")
        .arg("-v")
        .arg("2.4")
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Test Summary"))
        .stdout(predicate::str::contains(
            "Summary report generated successfully",
        ));

    let summary = temp_dir
        .path()
        .join("spark")
        .join("2.4")
        .join("summary.html");
    let html = fs::read_to_string(&summary).unwrap();
    assert!(html.contains("csv.ipynb"));
    assert!(html.contains("parquet.ipynb"));
    assert!(html.contains("KO"));
}

#[test]
fn test_report_on_missing_tree_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.arg("report")
        .arg("-n")
        .arg("spark")
        .arg("-v")
        .arg("9.9")
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_report_with_marker_less_notebook_fails() {
    let temp_dir = TempDir::new().unwrap();
    let run_root = temp_dir.path().join("spark").join("2.4");
    fs::create_dir_all(&run_root).unwrap();
    write_notebook(
        &run_root.join("orphan.ipynb"),
        &[markdown_cell(&["# No marker here\n"])],
    );

    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.arg("report")
        .arg("-n")
        .arg("spark")
        .arg("-v")
        .arg("2.4")
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("asserts cell cannot be found"));
}

#[test]
fn test_missing_subcommand_shows_help() {
    let mut cmd = Command::cargo_bin("nb2report").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
