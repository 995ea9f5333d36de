//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the report walker and
//! the renderers: the per-notebook verdict, the accumulated report rows and
//! the depth-indexed color palette.
//!
//! 此模块定义报告遍历器和渲染器共享的数据结构：
//! 单个笔记本的判定结果、累积的报告行以及按深度索引的颜色调色板。

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of running one test notebook's assertion cells.
/// `Ok` means every assertion evaluated to true and there was at least one;
/// `Ko` covers any false assertion and the zero-assertion case.
///
/// 运行一个测试笔记本断言单元格的结果。
/// `Ok` 表示所有断言均为真且至少存在一条断言；
/// `Ko` 涵盖任何为假的断言以及没有断言的情况。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ok,
    Ko,
}

impl Verdict {
    /// Check if the verdict is a pass.
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// The display form used in summaries: `OK` or `KO`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Ko => "KO",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Depth-indexed palette for directory rows. The last entry is reused for
/// all deeper levels and for leaf notebook rows.
///
/// 目录行使用的按深度索引的调色板。最后一项用于所有更深的层级
/// 以及叶子笔记本行。
pub const REPORT_COLORS: [&str; 5] = [
    "Teal",
    "DarkCyan",
    "LightSeaGreen",
    "DarkSeaGreen",
    "MediumAquamarine",
];

/// Palette color for a directory row at the given depth, clamped to the
/// deepest palette entry.
pub fn color_for_depth(depth: usize) -> &'static str {
    REPORT_COLORS[depth.min(REPORT_COLORS.len() - 1)]
}

/// Palette color for leaf notebook rows.
pub fn leaf_color() -> &'static str {
    REPORT_COLORS[REPORT_COLORS.len() - 1]
}

/// One line of the generated summary: a directory (no verdict) or an
/// executed notebook (OK/KO). Rows are rendered exactly in the order they
/// were accumulated during the walk.
///
/// 生成摘要中的一行：目录（无判定）或已执行的笔记本（OK/KO）。
/// 各行严格按遍历期间累积的顺序渲染。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Display name: the directory or notebook file name.
    pub title: String,
    /// CSS color for the title, taken from the depth palette.
    pub color: &'static str,
    /// The verdict for leaf rows; `None` for directory rows.
    pub verdict: Option<Verdict>,
}

impl ReportRow {
    /// A directory row, carrying no verdict.
    pub fn section(title: impl Into<String>, color: &'static str) -> Self {
        Self {
            title: title.into(),
            color,
            verdict: None,
        }
    }

    /// A leaf row for an executed notebook.
    pub fn leaf(title: impl Into<String>, color: &'static str, verdict: Verdict) -> Self {
        Self {
            title: title.into(),
            color,
            verdict: Some(verdict),
        }
    }

    /// The verdict column content: `OK`, `KO` or empty for directory rows.
    pub fn supported_str(&self) -> &'static str {
        self.verdict.map(|v| v.as_str()).unwrap_or("")
    }

    /// The verdict column color: green for a pass, red otherwise.
    pub fn supported_color(&self) -> &'static str {
        match self.verdict {
            Some(Verdict::Ok) => "green",
            _ => "red",
        }
    }
}
