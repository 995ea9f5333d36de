//! # Notebook Test Runner Module / 笔记本测试执行模块
//!
//! This module executes one test notebook: it locates the asserts marker
//! cell, pushes every subsequent code cell through the execution
//! collaborator, cleans the captured output and folds the boolean results
//! into a single OK/KO verdict.
//!
//! 此模块执行单个测试笔记本：定位断言标记单元格，
//! 将其后的每个代码单元格交给执行协作方，清理捕获的输出，
//! 并将布尔结果折叠为单一的 OK/KO 判定。

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::core::cells::Notebook;
use crate::core::models::Verdict;
use crate::error::{Error, Result};
use crate::infra::executor::CodeExecutor;

/// Interpreter echo prefix, e.g. `Out[1]: `. Any identifier followed by a
/// bracketed counter and a colon counts, not only `Out`.
static ECHO_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z]+\[[0-9]+\]: +").expect("echo prefix pattern must compile")
});

/// Run one test notebook and fold its assertion outputs into a verdict.
///
/// # Errors
/// `Error::Io`/`Error::Format` if the notebook is unreadable or malformed,
/// `Error::MarkerNotFound` if it has no asserts cell, and
/// `Error::NotABoolean` if an assertion cell prints something that is not a
/// boolean. All of these are fatal to the run that invoked them; a
/// legitimately false assertion is not an error and simply yields `Ko`.
pub fn run_notebook(path: &Path, executor: &mut dyn CodeExecutor) -> Result<Verdict> {
    let notebook = Notebook::load(path)?;
    let marker_index = assert_cell_index(&notebook, path)?;

    let mut results = Vec::new();
    for cell in notebook.cells.iter().skip(marker_index + 1) {
        if cell.is_code() {
            let raw = executor.run_code(&cell.code())?;
            results.push(parse_bool(&clean_output(&raw))?);
        }
    }

    Ok(evaluate_results(&results))
}

/// Index of the marker cell opening the assertion section: the first
/// markdown cell whose first source line contains the asserts marker.
fn assert_cell_index(notebook: &Notebook, path: &Path) -> Result<usize> {
    notebook
        .cells
        .iter()
        .position(|cell| cell.is_markdown() && cell.is_assert_marker())
        .ok_or_else(|| Error::MarkerNotFound {
            path: path.to_path_buf(),
        })
}

/// Clean raw captured output: strip every interpreter echo prefix, drop
/// newlines and trim surrounding whitespace.
pub fn clean_output(raw: &str) -> String {
    ECHO_PREFIX_RE
        .replace_all(raw, "")
        .replace('\n', "")
        .trim()
        .to_string()
}

/// Parse a cleaned output as a boolean. Anything that is not a
/// case-insensitive `true`/`false` is a contract violation surfaced as an
/// error rather than folded into KO.
pub fn parse_bool(cleaned: &str) -> Result<bool> {
    if cleaned.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if cleaned.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::NotABoolean {
            output: cleaned.to_string(),
        })
    }
}

/// Fold assertion results into a verdict: OK iff there is at least one
/// assertion and all of them are true.
pub fn evaluate_results(results: &[bool]) -> Verdict {
    if !results.is_empty() && results.iter().all(|&passed| passed) {
        Verdict::Ok
    } else {
        Verdict::Ko
    }
}
