//! Unit tests for the notebook test runner: output cleaning, boolean
//! parsing, verdict aggregation and whole-notebook execution against a
//! scripted executor.

mod common;

use common::{code_cell, markdown_cell, write_notebook, write_test_notebook, ScriptedExecutor};
use nb2report::core::models::Verdict;
use nb2report::core::runner::{clean_output, evaluate_results, parse_bool, run_notebook};
use nb2report::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_clean_output_strips_echo_prefix() {
    assert_eq!(clean_output("Out[1]: True\n"), "True");
    assert_eq!(clean_output("Out[12]: False\n"), "False");

    // Any identifier with a bracketed counter counts, not only Out
    assert_eq!(clean_output("HolaQueTal[0546]:    True\n"), "True");
}

#[test]
fn test_clean_output_without_prefix() {
    assert_eq!(clean_output("True\n"), "True");
    assert_eq!(clean_output("  False  \n\n"), "False");
    assert_eq!(clean_output(""), "");
}

#[test]
fn test_parse_bool_is_case_insensitive() {
    assert!(parse_bool("True").unwrap());
    assert!(parse_bool("true").unwrap());
    assert!(parse_bool("TRUE").unwrap());
    assert!(!parse_bool("False").unwrap());
    assert!(!parse_bool("false").unwrap());
}

#[test]
fn test_parse_bool_rejects_everything_else() {
    for garbage in ["", "Verdadero", "1", "None", "True False"] {
        assert!(
            matches!(parse_bool(garbage), Err(Error::NotABoolean { .. })),
            "{garbage:?} must not parse as a boolean"
        );
    }
}

#[test]
fn test_evaluate_results() {
    assert_eq!(evaluate_results(&[]), Verdict::Ko);
    assert_eq!(evaluate_results(&[true]), Verdict::Ok);
    assert_eq!(evaluate_results(&[true, true, true]), Verdict::Ok);
    assert_eq!(evaluate_results(&[true, false, true]), Verdict::Ko);
    assert_eq!(evaluate_results(&[false]), Verdict::Ko);
}

#[test]
fn test_run_notebook_all_true_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_test_notebook(&path, &["1 + 1 == 2", "len('ab') == 2"]);

    let mut executor = ScriptedExecutor::new(&["Out[1]: True\n", "True\n"]);
    assert_eq!(run_notebook(&path, &mut executor).unwrap(), Verdict::Ok);
    assert_eq!(executor.calls.len(), 2);
}

#[test]
fn test_run_notebook_any_false_is_ko() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_test_notebook(&path, &["1 + 1 == 2", "1 + 1 == 3"]);

    let mut executor = ScriptedExecutor::new(&["True\n", "Out[2]: False\n"]);
    assert_eq!(run_notebook(&path, &mut executor).unwrap(), Verdict::Ko);
}

#[test]
fn test_run_notebook_without_assertions_is_ko() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_test_notebook(&path, &[]);

    let mut executor = ScriptedExecutor::new(&[]);
    assert_eq!(run_notebook(&path, &mut executor).unwrap(), Verdict::Ko);
    assert!(executor.calls.is_empty());
}

#[test]
fn test_run_notebook_skips_cells_before_the_marker() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_notebook(
        &path,
        &[
            code_cell(&["setup = 'not an assertion'"]),
            markdown_cell(&["# Asserts\n"]),
            code_cell(&["setup == 'not an assertion'"]),
            markdown_cell(&["a note between assertions"]),
        ],
    );

    let mut executor = ScriptedExecutor::new(&["True\n"]);
    assert_eq!(run_notebook(&path, &mut executor).unwrap(), Verdict::Ok);

    // Only the code cell after the marker is executed
    assert_eq!(executor.calls, vec!["setup == 'not an assertion'"]);
}

#[test]
fn test_run_notebook_marker_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_notebook(
        &path,
        &[markdown_cell(&["# ASSERTS\n"]), code_cell(&["True"])],
    );

    let mut executor = ScriptedExecutor::new(&["True\n"]);
    assert_eq!(run_notebook(&path, &mut executor).unwrap(), Verdict::Ok);
}

#[test]
fn test_run_notebook_without_marker_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_notebook(
        &path,
        &[markdown_cell(&["# Just a title\n"]), code_cell(&["True"])],
    );

    let mut executor = ScriptedExecutor::new(&[]);
    let result = run_notebook(&path, &mut executor);
    assert!(matches!(result, Err(Error::MarkerNotFound { .. })));
    assert!(executor.calls.is_empty());
}

#[test]
fn test_run_notebook_non_boolean_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nb.ipynb");
    write_test_notebook(&path, &["print('hola')"]);

    let mut executor = ScriptedExecutor::new(&["hola\n"]);
    let result = run_notebook(&path, &mut executor);
    assert!(matches!(result, Err(Error::NotABoolean { .. })));
}

#[test]
fn test_run_notebook_unreadable_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut executor = ScriptedExecutor::new(&[]);

    let missing = run_notebook(&temp_dir.path().join("missing.ipynb"), &mut executor);
    assert!(matches!(missing, Err(Error::Io(_))));

    let broken = temp_dir.path().join("broken.ipynb");
    fs::write(&broken, "not a notebook").unwrap();
    let malformed = run_notebook(&broken, &mut executor);
    assert!(matches!(malformed, Err(Error::Format(_))));
}
