//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of argument matrices and binding check
//! results in the console. It provides functionality for printing colorful,
//! formatted tables and summaries with internationalization support.
//!
//! 此模块处理参数矩阵和绑定检查结果在控制台中的显示。
//! 它提供打印彩色格式化表格和摘要的功能，支持国际化。

use crate::core::binding::ArgumentMatrix;
use crate::core::models::{CheckOutcome, FailureReason};
use crate::infra::t;
use colored::*;

/// Prints an assembled argument matrix as an aligned table, one row per
/// filtered record and one column per declared parameter.
///
/// 将组装好的参数矩阵打印为对齐的表格，
/// 每条过滤后记录一行，每个声明参数一列。
///
/// # Arguments / 参数
/// * `name` - The binding name shown in the banner
///            横幅中显示的绑定名称
/// * `matrix` - The matrix to print
///              要打印的矩阵
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Argument Matrix: news_search ---
///      # | query | category | result.page_elements.tools
///      0 | bing  | News     | [All news, Recent, Sorted by relevance]
/// ```
pub fn print_matrix(name: &str, matrix: &ArgumentMatrix, locale: &str) {
    println!(
        "\n{}",
        t!("matrix_banner", locale = locale, name = name).bold()
    );

    if matrix.is_empty() {
        println!("  {}", t!("matrix_no_rows", locale = locale).yellow());
        return;
    }

    let rendered: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = matrix.columns().iter().map(|c| c.len()).collect();
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header = matrix
        .columns()
        .iter()
        .zip(&widths)
        .map(|(label, width)| format!("{:<width$}", label))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("  {:>4} | {}", "#", header.cyan().bold());

    for (index, row) in rendered.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("  {:>4} | {}", index, line);
    }
}

/// Prints a formatted summary of binding check results to the console.
/// Displays a table with check status, binding name, duration, and row
/// count, using color coding to highlight different statuses.
///
/// 在控制台打印格式化的绑定检查结果摘要。
/// 显示一个包含检查状态、绑定名称、持续时间和行数的表格，
/// 使用颜色编码突出显示不同的状态。
///
/// # Arguments / 参数
/// * `outcomes` - A slice of check outcomes to summarize
///                要总结的检查结果切片
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Binding Check Summary ---
///   - Bound    | news_search                              |     0.01s  (1 rows)
///   - No Rows  | archived_search                          |     0.01s
///   - Failed   | broken_search                            |     0.00s
/// ```
pub fn print_summary(outcomes: &[CheckOutcome], locale: &str) {
    println!("\n{}", t!("check_summary_banner", locale = locale).bold());

    for outcome in outcomes {
        let status_str = outcome.get_status_str(locale);
        let duration_str = outcome
            .get_duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());

        let name = outcome.binding_name();
        let rows_str = match outcome {
            CheckOutcome::Bound { matrix, .. } if !matrix.is_empty() => {
                format!(" ({} rows)", matrix.row_count())
            }
            _ => String::new(),
        };

        let status_colored = match outcome {
            CheckOutcome::Bound { .. } => {
                if outcome.is_empty_matrix() {
                    status_str.yellow()
                } else {
                    status_str.green()
                }
            }
            CheckOutcome::Failed { .. } => status_str.red(),
            CheckOutcome::Skipped => status_str.dimmed(),
        };

        println!(
            "  - {:<18} | {:<40} | {:>10} {}",
            status_colored, name, duration_str, rows_str
        );
    }
}

/// Prints detailed information about failed binding checks.
/// Shows the full error message for each failure, including the data
/// source path, so the operator can locate the offending entry.
///
/// 打印失败绑定检查的详细信息。
/// 显示每个失败的完整错误消息，包括数据源路径，
/// 以便操作者定位问题条目。
///
/// # Arguments / 参数
/// * `failures` - A slice of check outcomes that failed
///                失败的检查结果切片
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
pub fn print_failure_details(failures: &[&CheckOutcome], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("failure_details_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, outcome) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report_header_failure", locale = locale).red(),
            outcome.binding_name().cyan()
        );

        if let CheckOutcome::Failed { error, reason, binding, .. } = outcome {
            let log_header = match reason {
                FailureReason::DataSource => t!("data_source_log", locale = locale),
                _ => t!("binding_log", locale = locale),
            };
            println!("\n--- {} ---\n", log_header.yellow());
            println!(
                "{}",
                t!("failure_data_source", locale = locale, path = binding.data)
            );
            println!("{}", error);
            println!("\n{}", "-".repeat(80));
        }
    }
}
