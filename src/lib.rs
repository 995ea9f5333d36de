//! # nb2report Library / nb2report 库
//!
//! This library provides the core functionality for the nb2report tool,
//! which turns a markdown-structured "schema" notebook into a directory
//! tree of test notebooks, executes such trees and renders an HTML
//! pass/fail summary.
//!
//! 此库为 nb2report 工具提供核心功能，
//! 它将以 markdown 结构组织的 "schema" 笔记本转换为测试笔记本目录树，
//! 执行这些目录树并生成 HTML 通过/失败摘要。
//!
//! ## Modules / 模块
//!
//! - `core` - Notebook cell model, scaffolding walk and test runner
//! - `infra` - Infrastructure services like code execution and file system operations
//! - `reporting` - Report accumulation and rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 笔记本单元格模型、脚手架遍历和测试执行器
//! - `infra` - 基础设施服务，如代码执行和文件系统操作
//! - `reporting` - 报告收集与渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::cells::{Cell, CellType, Notebook};
pub use crate::core::models::Verdict;
pub use crate::error::Error;
