//! # Report Walker Module / 报告遍历模块
//!
//! Depth-first, pre-order exploration of a generated test tree. Every
//! directory contributes a section row, every `.ipynb` leaf is executed and
//! contributes a verdict row. Row order is traversal order and is exactly
//! the order rendered in the summary.
//!
//! 对生成的测试目录树进行深度优先的先序遍历。
//! 每个目录产生一个小节行，每个 `.ipynb` 叶子被执行并产生一个判定行。
//! 行的顺序即遍历顺序，也正是摘要渲染的顺序。

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::models::{color_for_depth, leaf_color, ReportRow};
use crate::core::runner::run_notebook;
use crate::error::{Error, Result};
use crate::infra::executor::CodeExecutor;
use crate::infra::fs::is_hidden;

/// Visited-set accumulator mirroring the explored tree shape. Only presence
/// is ever consulted; nothing is read back for decisions beyond that.
#[derive(Debug, Default)]
pub struct ScaffoldTree {
    pub dirs: BTreeMap<PathBuf, ScaffoldTree>,
    pub files: BTreeSet<PathBuf>,
}

/// Per-run state for one report generation: the executor session shared by
/// every notebook and the rows accumulated in traversal order. A fresh
/// context is constructed per run and consumed by `explore`, so rows can
/// never leak between runs.
pub struct ReportContext<'a> {
    executor: &'a mut dyn CodeExecutor,
    rows: Vec<ReportRow>,
}

impl<'a> ReportContext<'a> {
    pub fn new(executor: &'a mut dyn CodeExecutor) -> Self {
        Self {
            executor,
            rows: Vec::new(),
        }
    }

    /// Explore the scaffolding based on the given root path and return the
    /// accumulated report rows in traversal order.
    ///
    /// # Errors
    /// `Error::ScaffoldNotFound` if `root` is not a directory. Any failure
    /// inside a single notebook (missing marker, non-boolean output)
    /// propagates and aborts the whole walk; there is no partial report.
    pub fn explore(mut self, root: &Path) -> Result<Vec<ReportRow>> {
        if !root.is_dir() {
            return Err(Error::ScaffoldNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut scaffold = ScaffoldTree::default();
        self.explore_path(root, &mut scaffold, 0)?;
        Ok(self.rows)
    }

    fn explore_path(
        &mut self,
        path: &Path,
        scaffold: &mut ScaffoldTree,
        depth: usize,
    ) -> Result<()> {
        if is_hidden(path) {
            return Ok(());
        }

        if path.is_dir() {
            if scaffold.dirs.contains_key(path) {
                return Ok(());
            }
            scaffold.dirs.insert(path.to_path_buf(), ScaffoldTree::default());

            // The run root itself (depth 0) gets no row of its own.
            if depth > 0 {
                self.rows
                    .push(ReportRow::section(file_name(path), color_for_depth(depth)));
            }

            // Entries are sorted by name so the rendered order does not
            // depend on the filesystem's enumeration order.
            let mut entries = fs::read_dir(path)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<io::Result<Vec<_>>>()?;
            entries.sort();

            if let Some(subtree) = scaffold.dirs.get_mut(path) {
                for entry in &entries {
                    self.explore_path(entry, subtree, depth + 1)?;
                }
            }
        } else if path.extension().is_some_and(|ext| ext == "ipynb") {
            scaffold.files.insert(path.to_path_buf());
            let verdict = run_notebook(path, self.executor)?;
            self.rows
                .push(ReportRow::leaf(file_name(path), leaf_color(), verdict));
        }

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
