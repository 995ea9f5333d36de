// Shared test helpers for integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use nb2report::error::Result;
use nb2report::infra::executor::CodeExecutor;

/// Builds a markdown cell value in ipynb format.
pub fn markdown_cell(lines: &[&str]) -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": lines,
    })
}

/// Builds a code cell value in ipynb format.
pub fn code_cell(lines: &[&str]) -> Value {
    json!({
        "cell_type": "code",
        "metadata": {},
        "outputs": [],
        "source": lines,
    })
}

/// Builds a raw cell value, which every walk should ignore.
pub fn raw_cell(lines: &[&str]) -> Value {
    json!({
        "cell_type": "raw",
        "metadata": {},
        "source": lines,
    })
}

/// Serializes cells into a complete notebook document.
pub fn notebook_json(cells: &[Value]) -> String {
    json!({
        "cells": cells,
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 4,
    })
    .to_string()
}

/// Writes a notebook document with the given cells to `path`.
pub fn write_notebook(path: &Path, cells: &[Value]) {
    fs::write(path, notebook_json(cells)).expect("failed to write notebook fixture");
}

/// Writes a runnable test notebook: a content cell, the asserts marker and
/// one code cell per assertion snippet.
pub fn write_test_notebook(path: &Path, assertions: &[&str]) {
    let mut cells = vec![
        markdown_cell(&["Some free-form content"]),
        markdown_cell(&["# Asserts\n", "\n", "All asserts must be true"]),
    ];
    for assertion in assertions {
        cells.push(code_cell(&[assertion]));
    }
    write_notebook(path, &cells);
}

/// A scripted stand-in for the interpreter session: replays canned outputs
/// in order and records every submitted source snippet.
pub struct ScriptedExecutor {
    outputs: VecDeque<String>,
    pub calls: Vec<String>,
}

impl ScriptedExecutor {
    pub fn new(outputs: &[&str]) -> Self {
        Self {
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
            calls: Vec::new(),
        }
    }
}

impl CodeExecutor for ScriptedExecutor {
    fn run_code(&mut self, source: &str) -> Result<String> {
        self.calls.push(source.to_string());
        Ok(self
            .outputs
            .pop_front()
            .unwrap_or_else(|| "True\n".to_string()))
    }
}
