//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for the generated test tree:
//! idempotent directory creation and run-root resolution.
//!
//! 此模块提供生成测试目录树所需的实用功能：
//! 幂等的目录创建和运行根目录解析。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Creates a directory if it does not exist yet. A directory that already
/// exists (including one created concurrently) is success, never an error.
///
/// # Arguments
/// * `path` - Path of the directory to create
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Creates the root testing directory `<root>/<name>/<version>`, one level
/// at a time, each created only if absent. All generated tests for that
/// framework version are placed under the returned path.
///
/// # Arguments
/// * `root` - Base directory the tree is rooted at
/// * `name` - Framework name
/// * `version` - Framework version
///
/// # Returns
/// The complete path to the run root.
pub fn setup_run_root(root: &Path, name: &str, version: &str) -> Result<PathBuf> {
    let framework_path = root.join(name);
    ensure_dir(&framework_path)?;

    let run_root = framework_path.join(version);
    ensure_dir(&run_root)?;

    Ok(run_root)
}

/// Resolves the run root `<root>/<name>/<version>` of an existing tree.
///
/// # Errors
/// `Error::ScaffoldNotFound` if the directory does not exist, so a report
/// run fails loudly instead of rendering an empty summary.
pub fn existing_run_root(root: &Path, name: &str, version: &str) -> Result<PathBuf> {
    let run_root = root.join(name).join(version);
    if !run_root.is_dir() {
        return Err(Error::ScaffoldNotFound { path: run_root });
    }
    Ok(run_root)
}

/// Checks if a path's file name starts with a dot. Hidden entries are
/// skipped by the report walker.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
