//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of binding check reports
//! in multiple formats. It provides functionality for creating styled HTML
//! reports and printing colorful, formatted matrices and summaries to the
//! console with internationalization support.
//!
//! 此模块处理多种格式的绑定检查报告生成和显示。
//! 它提供创建样式化 HTML 报告以及在控制台打印彩色格式化矩阵
//! 和摘要的功能，支持国际化。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::{print_failure_details, print_matrix, print_summary};
pub use html::generate_html_report;
