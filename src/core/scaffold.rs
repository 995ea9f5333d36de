//! # Scaffold Builder Module / 脚手架构建模块
//!
//! This module turns a markdown-structured schema notebook into a directory
//! tree of test notebooks. Heading cells open and close directory levels,
//! enumeration cells expand into one leaf notebook per list item, copied
//! from an embedded empty-notebook template.
//!
//! 此模块将以 markdown 结构组织的 schema 笔记本转换为测试笔记本目录树。
//! 标题单元格打开和关闭目录层级，枚举单元格按列表项展开为叶子笔记本，
//! 内容复制自内嵌的空笔记本模板。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::cells::{Cell, Notebook};
use crate::error::{Error, Result};
use crate::infra::fs::{ensure_dir, setup_run_root};

/// Embedded empty-notebook template. Every generated leaf notebook is a
/// byte-copy of this resource.
pub const EMPTY_NOTEBOOK_TEMPLATE: &str = include_str!("assets/empty_notebook.ipynb");

/// Matches a markdown list item line: optional indentation, one or more `*`
/// tokens, at least one space, then the item name. Lines that do not match
/// are free-form notes and produce nothing.
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ *\*+ +(.*)").expect("list item pattern must compile")
});

/// Create the complete scaffolding for a framework under test.
///
/// Given a framework name and version, create the directory tree described
/// by the schema notebook under `<root>/<name>/<version>`.
///
/// # Errors
/// `Error::SchemaNotFound` if the schema path is missing or not a file
/// (checked before anything is created on disk), `Error::Format` if the
/// schema does not deserialize, `Error::Io` on filesystem failures. There
/// is no rollback: a failing pass may leave a partial tree behind.
pub fn create(name: &str, version: &str, schema: &Path, root: &Path) -> Result<()> {
    if !schema.is_file() {
        return Err(Error::SchemaNotFound {
            path: schema.to_path_buf(),
        });
    }

    let notebook = Notebook::load(schema)?;
    let run_root = setup_run_root(root, name, version)?;
    build(&notebook.cells, &run_root)
}

/// Single forward pass over the schema cells, mirroring heading nesting
/// into directories and expanding enumeration cells into leaf notebooks.
/// Cells that are neither markdown titles nor markdown lists are ignored.
pub fn build(cells: &[Cell], run_root: &Path) -> Result<()> {
    let mut current_level: usize = 0;
    let mut current_path = run_root.to_path_buf();

    for cell in cells {
        if !cell.is_markdown() {
            continue;
        }

        if cell.is_title() {
            let Some(first_line) = cell.first_line() else {
                continue;
            };
            let (new_level, new_title) = parse_heading(first_line);
            (current_path, current_level) =
                walk_path(current_path, current_level, new_level, new_title)?;
        } else if cell.is_list() {
            generate_notebooks(&cell.source, &current_path)?;
        }
    }

    Ok(())
}

/// Split a heading line into its depth and trimmed title.
/// The depth is the count of consecutive leading `#` tokens.
fn parse_heading(first_line: &str) -> (usize, &str) {
    let level = first_line.chars().take_while(|&c| c == '#').count();
    (level, first_line[level..].trim())
}

/// Reconcile `current_level` with `new_level`, one directory transition per
/// iteration. The loop runs `abs(delta) + 1` times: an equal-level heading
/// still performs its sibling replacement, and each intermediate iteration
/// of a multi-level jump creates one intermediate directory level, so the
/// final path depth always matches the deepest heading level.
fn walk_path(
    mut current_path: PathBuf,
    mut current_level: usize,
    new_level: usize,
    new_title: &str,
) -> Result<(PathBuf, usize)> {
    for _ in 0..current_level.abs_diff(new_level) + 1 {
        if new_level > current_level {
            current_path = level_in(&current_path, new_title)?;
            current_level += 1;
        } else if new_level < current_level {
            current_path = level_out(&current_path);
            current_level -= 1;
        } else {
            // Consecutive same-depth headings become siblings under the
            // same parent: step out, then step into the new title.
            current_path = level_out(&current_path);
            current_path = level_in(&current_path, new_title)?;
        }
    }

    Ok((current_path, current_level))
}

/// Dive a level in: join the new title onto the current path and create the
/// directory if it does not exist yet.
fn level_in(current_path: &Path, new_title: &str) -> Result<PathBuf> {
    let next_path = current_path.join(new_title);
    ensure_dir(&next_path)?;
    Ok(next_path)
}

/// Get a level out. At the filesystem root there is no parent to step out
/// to, so the path is returned unchanged.
fn level_out(current_path: &Path) -> PathBuf {
    current_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| current_path.to_path_buf())
}

/// Generate one leaf notebook per matching list line inside `current_path`.
/// Non-matching lines (free-form notes mixed into the cell) are silently
/// skipped. A pre-existing leaf with the same name is overwritten.
fn generate_notebooks(lines: &[String], current_path: &Path) -> Result<()> {
    for line in lines {
        let Some(caps) = LIST_ITEM_RE.captures(line) else {
            continue;
        };
        let name = caps[1].trim();
        if name.is_empty() {
            continue;
        }

        let leaf = current_path.join(format!("{name}.ipynb"));
        fs::write(&leaf, EMPTY_NOTEBOOK_TEMPLATE)?;
    }

    Ok(())
}
