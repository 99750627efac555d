//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML binding check reports.
//! It creates styled HTML files with check statistics, a detailed results
//! table, and interactive features for viewing assembled matrices and
//! failure output.
//!
//! 此模块处理 HTML 绑定检查报告的生成。
//! 它创建带有检查统计、详细结果表格以及查看组装矩阵和
//! 失败输出的交互功能的样式化 HTML 文件。

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::core::binding::ArgumentMatrix;
use crate::core::models::CheckOutcome;
use crate::infra::t;

/// Stylesheet embedded into every report / 嵌入每份报告的样式表
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Script for the collapsible detail rows / 可折叠详情行的脚本
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates a comprehensive HTML report from binding check outcomes.
/// Creates a styled HTML file with check statistics, a detailed results
/// table, and collapsible sections showing each assembled matrix or
/// failure message.
///
/// 从绑定检查结果生成综合的 HTML 报告。
/// 创建一个样式化的 HTML 文件，包含检查统计、详细结果表格，
/// 以及显示每个组装矩阵或失败消息的可折叠区域。
///
/// # Arguments / 参数
/// * `outcomes` - The check outcomes the report covers
///                报告所涵盖的检查结果
/// * `output_path` - Where the rendered HTML file is written
///                   渲染后的 HTML 文件的写入位置
/// * `locale` - The language the report is rendered in
///              报告渲染所用的语言
pub fn generate_html_report(
    outcomes: &[CheckOutcome],
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));

    // Add summary statistics
    let total = outcomes.len();
    let bound = outcomes
        .iter()
        .filter(|o| matches!(o, CheckOutcome::Bound { .. }) && !o.is_empty_matrix())
        .count();
    let empty = outcomes.iter().filter(|o| o.is_empty_matrix()).count();
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, CheckOutcome::Skipped))
        .count();

    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        total,
        t!("html_report.summary.total", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count bound-text'>{}</span><span class='label'>{}</span></div>",
        bound,
        t!("html_report.summary.bound", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count empty-text'>{}</span><span class='label'>{}</span></div>",
        empty,
        t!("html_report.summary.empty", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count failed-text'>{}</span><span class='label'>{}</span></div>",
        failed,
        t!("html_report.summary.failed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count skipped-text'>{}</span><span class='label'>{}</span></div>",
        skipped,
        t!("html_report.summary.skipped", locale = locale)
    ));
    html.push_str("</div>");

    // Add results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.data", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='rows-cell'>{}</th>",
        t!("html_report.table.header.rows", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='duration-cell'>{}</th>",
        t!("html_report.table.header.duration", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, outcome) in outcomes.iter().enumerate() {
        let status_str = outcome.get_status_str(locale);
        let status_class = outcome.get_status_class();
        let duration_str = outcome
            .get_duration()
            .map(|d| format!("{:.2}s", d.as_secs_f64()))
            .unwrap_or_else(|| "N/A".to_string());

        let detail_id = format!("detail-{}", i);
        let (detail_row, detail_toggle) = match outcome {
            CheckOutcome::Failed { error, .. } => {
                let escaped_output = escape_html(error);
                (
                    format!(
                        "<tr id='{}' style='display:none;'><td colspan='5'><pre class='output-content'>{}</pre></td></tr>",
                        detail_id, escaped_output
                    ),
                    format!(
                        "<div class='output-toggle' onclick=\"toggleDetail('{}')\">{}</div>",
                        detail_id,
                        t!("html_report.toggle_output", locale = locale)
                    ),
                )
            }
            CheckOutcome::Bound { matrix, .. } if !matrix.is_empty() => (
                format!(
                    "<tr id='{}' style='display:none;'><td colspan='5'>{}</td></tr>",
                    detail_id,
                    render_matrix_table(matrix)
                ),
                format!(
                    "<div class='output-toggle' onclick=\"toggleDetail('{}')\">{}</div>",
                    detail_id,
                    t!("html_report.toggle_matrix", locale = locale)
                ),
            ),
            _ => (String::new(), String::new()),
        };

        html.push_str("<tr>");
        html.push_str(&format!(
            "<td>{}</td>",
            escape_html(outcome.binding_name())
        ));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div>{}</td>",
            status_class, status_str, detail_toggle
        ));
        html.push_str(&format!(
            "<td>{}</td>",
            escape_html(outcome.data_source())
        ));
        html.push_str(&format!(
            "<td class='rows-cell'>{}</td>",
            outcome.row_count()
        ));
        html.push_str(&format!("<td class='duration-cell'>{}</td>", duration_str));
        html.push_str("</tr>");
        html.push_str(&detail_row);
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<div class='report-footer'>{}</div>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write(output_path, html)?;
    Ok(())
}

/// Renders an assembled matrix as a nested HTML table, one column per
/// declared path expression.
/// 将组装好的矩阵渲染为嵌套的 HTML 表格，
/// 每个声明的路径表达式一列。
fn render_matrix_table(matrix: &ArgumentMatrix) -> String {
    let mut table = String::from("<table class='matrix-table'><thead><tr><th>#</th>");
    for column in matrix.columns() {
        table.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    table.push_str("</tr></thead><tbody>");

    for (index, row) in matrix.rows().iter().enumerate() {
        table.push_str(&format!("<tr><td>{}</td>", index));
        for cell in row {
            table.push_str(&format!("<td>{}</td>", escape_html(&cell.to_string())));
        }
        table.push_str("</tr>");
    }

    table.push_str("</tbody></table>");
    table
}

/// Escapes the characters HTML treats as markup. Cell values and error
/// messages pass through here before being embedded.
/// 转义 HTML 视为标记的字符。单元格值和错误消息
/// 在嵌入前都会经过这里。
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
