//! # Reporting Module / 报告模块
//!
//! This module handles the exploration of a generated test tree and the
//! rendering of its results: a colorful console summary and a styled HTML
//! summary file.
//!
//! 此模块负责遍历生成的测试目录树并渲染其结果：
//! 彩色的控制台摘要和带样式的 HTML 摘要文件。

pub mod console;
pub mod html;
pub mod walker;

// Re-export common reporting functions
pub use console::print_summary;
pub use html::{generate_html_report, SUMMARY_FILE_NAME};
pub use walker::ReportContext;
