//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for nb2report,
//! including interpreter session management and file system operations.
//!
//! 此模块为 nb2report 提供基础设施服务，
//! 包括解释器会话管理和文件系统操作。

pub mod executor;
pub mod fs;
