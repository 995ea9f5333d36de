//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of the HTML summary file.
//! It creates a styled HTML document with pass/fail statistics and the
//! full report table, in the exact order the rows were accumulated.
//!
//! 此模块处理 HTML 摘要文件的生成。
//! 它创建带样式的 HTML 文档，包含通过/失败统计以及完整的报告表格，
//! 顺序与报告行累积的顺序完全一致。

use std::fs;
use std::path::Path;

use crate::core::models::ReportRow;
use crate::error::Result;

/// File name of the generated summary inside the run root.
pub const SUMMARY_FILE_NAME: &str = "summary.html";

/// Embedded CSS styles for the HTML summary / HTML 摘要的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Generates the HTML summary from accumulated report rows.
/// Creates a styled HTML file with a totals banner and one table row per
/// report row, directory rows carrying no verdict.
///
/// # Arguments / 参数
/// * `title` - The document title, e.g. `Test summary for spark 2.4`
///             文档标题，例如 `Test summary for spark 2.4`
/// * `rows` - Report rows in traversal order / 按遍历顺序排列的报告行
/// * `output_path` - The file path where the HTML summary will be saved
///                   保存 HTML 摘要的文件路径
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written
/// to the specified path.
///
/// 如果无法将输出文件写入指定路径，此函数会返回错误。
pub fn generate_html_report(title: &str, rows: &[ReportRow], output_path: &Path) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        escape_html(title)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!("<h1>{}</h1>", escape_html(title)));

    // Totals banner
    let total = rows.iter().filter(|r| r.verdict.is_some()).count();
    let passed = rows
        .iter()
        .filter(|r| r.verdict.is_some_and(|v| v.is_ok()))
        .count();
    let failed = total - passed;

    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{total}</span><span class='label'>Notebooks</span></div>"
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count passed-text'>{passed}</span><span class='label'>OK</span></div>"
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count failed-text'>{failed}</span><span class='label'>KO</span></div>"
    ));
    html.push_str("</div>");

    // Report table, one row per accumulated report row
    html.push_str("<table><thead><tr>");
    html.push_str("<th>Item</th>");
    html.push_str("<th class='status-col'>Supported</th>");
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td style='color:{};'>{}</td>",
            row.color,
            escape_html(&row.title)
        ));
        html.push_str(&format!(
            "<td class='status-col'><span class='status-cell' style='color:{};'>{}</span></td>",
            row.supported_color(),
            row.supported_str()
        ));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<p class='generated-at'>Generated at {}</p>",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str("</body></html>");

    fs::write(output_path, html)?;
    Ok(())
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
