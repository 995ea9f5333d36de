//! # Notebook Cell Model / 笔记本单元格模型
//!
//! Cell and notebook records deserialized from `.ipynb` JSON documents,
//! plus the content predicates used by the scaffolding walk and the test
//! runner (title cells, list cells, the asserts marker).
//!
//! 从 `.ipynb` JSON 文档反序列化的单元格与笔记本记录，
//! 以及脚手架遍历和测试执行器使用的内容判定（标题单元格、列表单元格、断言标记）。

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// The asserts marker text. The first markdown cell whose first source line
/// contains this text (case-insensitively) opens the assertion section of a
/// test notebook.
///
/// 断言标记文本。第一个首行（不区分大小写）包含该文本的 markdown 单元格
/// 标志着测试笔记本断言部分的开始。
pub const ASSERTS_MARKER: &str = "# asserts";

/// The type of a notebook cell. Anything that is neither markdown nor code
/// is carried along as `Other` and ignored by every walk.
///
/// 笔记本单元格的类型。既不是 markdown 也不是 code 的类型
/// 一律归为 `Other`，并被所有遍历忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
    #[serde(other)]
    Other,
}

/// A single notebook cell: a type tag plus the ordered source lines.
/// Both fields are required; a document missing either fails to
/// deserialize, so downstream predicates never see a malformed cell.
///
/// 单个笔记本单元格：类型标签加上有序的源码行。
/// 两个字段都是必需的；缺少任一字段的文档会反序列化失败，
/// 因此下游判定永远不会看到格式错误的单元格。
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    pub source: Vec<String>,
}

impl Cell {
    /// Check if the cell type is markdown.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }

    /// Check if the cell type is code.
    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    /// First non-blank source line, trimmed. `None` for cells whose source
    /// is empty or all blank.
    pub fn first_line(&self) -> Option<&str> {
        self.source
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
    }

    /// Check if the cell looks like a markdown title: its first non-blank
    /// source line starts with the `#` token. False on empty source.
    pub fn is_title(&self) -> bool {
        self.first_line().is_some_and(|line| line.starts_with('#'))
    }

    /// Check if the cell looks like a markdown enumeration: its first
    /// non-blank source line starts with the `*` token. False on empty
    /// source.
    pub fn is_list(&self) -> bool {
        self.first_line().is_some_and(|line| line.starts_with('*'))
    }

    /// Check if the cell carries the asserts marker. Only the very first
    /// source line is considered, so a marker buried further down does not
    /// open the assertion section.
    pub fn is_assert_marker(&self) -> bool {
        self.source
            .first()
            .is_some_and(|line| line.to_lowercase().contains(ASSERTS_MARKER))
    }

    /// All the code from the source field, concatenated in document order.
    pub fn code(&self) -> String {
        self.source.concat()
    }
}

/// A notebook document: an ordered sequence of cells. Loaded fresh for
/// every operation and discarded afterwards, never cached or mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Load a notebook document from disk.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be read, `Error::Format` if the JSON
    /// does not describe a notebook with well-formed cells.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let notebook = serde_json::from_str(&content)?;
        Ok(notebook)
    }
}
