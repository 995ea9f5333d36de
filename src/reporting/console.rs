//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the accumulated report rows as a colorful, formatted summary:
//! directory rows as plain section lines, executed notebooks with a
//! color-coded OK/KO column, and a totals line at the end.
//!
//! 将累积的报告行打印为彩色的格式化摘要：
//! 目录行显示为普通小节行，已执行的笔记本带有颜色编码的 OK/KO 列，
//! 末尾附有总计行。

use colored::*;

use crate::core::models::{ReportRow, Verdict};

/// Prints a formatted summary of a report run to the console.
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - spark-tests                              |
///   - csv.ipynb                                |   OK
///   - parquet.ipynb                            |   KO
///
/// 2 notebooks: 1 OK, 1 KO
/// ```
pub fn print_summary(rows: &[ReportRow]) {
    println!("\n{}", "--- Test Summary ---".bold());

    for row in rows {
        let status = match row.verdict {
            Some(Verdict::Ok) => row.supported_str().green(),
            Some(Verdict::Ko) => row.supported_str().red(),
            None => "".normal(),
        };

        println!("  - {:<40} | {:>4}", row.title, status);
    }

    let total = rows.iter().filter(|row| row.verdict.is_some()).count();
    let passed = rows
        .iter()
        .filter(|row| row.verdict.is_some_and(|v| v.is_ok()))
        .count();
    let failed = total - passed;

    println!(
        "\n{} notebooks: {}, {}",
        total,
        format!("{passed} OK").green(),
        format!("{failed} KO").red()
    );
}
