//! # Core Module / 核心模块
//!
//! This module contains the core functionality of nb2report,
//! including the notebook cell model, the scaffolding walk and the
//! notebook test runner.
//!
//! 此模块包含 nb2report 的核心功能，
//! 包括笔记本单元格模型、脚手架遍历和笔记本测试执行器。

pub mod cells;
pub mod models;
pub mod runner;
pub mod scaffold;

// Re-exports
pub use cells::Notebook;
pub use models::Verdict;
pub use runner::run_notebook;
