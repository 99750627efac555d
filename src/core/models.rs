//! # Data Models Module / 数据模型模块
//!
//! This module defines the result structures produced when bindings are
//! checked against their data sources. It includes models for check
//! outcomes and failure reasons used by reporting.
//!
//! 此模块定义了根据数据源检查绑定时产生的结果结构。
//! 它包括报告所使用的检查结果和失败原因的模型。

use crate::core::binding::ArgumentMatrix;
use crate::core::config::Binding;
use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Enumerates the possible reasons for a binding check failure.
/// This helps in categorizing errors for reporting and handling.
/// 枚举绑定检查失败的可能原因。
/// 这有助于对错误进行分类，以便报告和处理。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FailureReason {
    /// The data source could not be read or parsed.
    /// 数据源无法读取或解析。
    DataSource,
    /// A cell failed to resolve or had the wrong value kind.
    /// 某个单元格解析失败或值种类不符。
    Binding,
    /// The check task itself crashed.
    /// 检查任务本身崩溃。
    Internal,
}

/// Represents the final result of checking a single binding.
/// This enum captures all possible outcomes: a successfully assembled
/// matrix (possibly with zero rows), a failure, or a skipped check.
///
/// 表示检查单个绑定的最终结果。
/// 此枚举捕获所有可能的结果：成功组装的矩阵（可能为零行）、
/// 失败或被跳过的检查。
#[derive(Debug, Clone, Serialize)]
pub enum CheckOutcome {
    /// The binding produced a matrix.
    /// 绑定产出了矩阵。
    Bound {
        /// The binding that was checked / 被检查的绑定
        binding: Binding,
        /// The assembled argument matrix / 组装好的参数矩阵
        matrix: ArgumentMatrix,
        /// The time taken to load and bind / 加载与绑定所花费的时间
        duration: Duration,
    },
    /// The binding failed to produce a matrix.
    /// 绑定未能产出矩阵。
    Failed {
        /// The binding that failed / 失败的绑定
        binding: Binding,
        /// The rendered error message / 渲染后的错误消息
        error: String,
        /// The specific reason for the failure / 失败的具体原因
        reason: FailureReason,
        /// The time taken before the failure occurred / 失败发生前所花费的时间
        duration: Duration,
    },
    /// The check was skipped because the run was cancelled.
    /// 由于运行被取消，检查被跳过。
    Skipped,
}

impl CheckOutcome {
    /// Checks if the outcome is any kind of failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckOutcome::Failed { .. })
    }

    /// Checks if the binding succeeded but selected no records. An empty
    /// matrix is not an error, but reports call it out separately.
    /// 检查绑定是否成功但未选中任何记录。空矩阵不是错误，
    /// 但报告会单独标出它。
    pub fn is_empty_matrix(&self) -> bool {
        matches!(self, CheckOutcome::Bound { matrix, .. } if matrix.is_empty())
    }

    /// Gets the name of the binding. Returns "Skipped" for skipped checks.
    /// 获取绑定的名称。对于跳过的检查，返回 "Skipped"。
    pub fn binding_name(&self) -> &str {
        match self {
            CheckOutcome::Bound { binding, .. } => &binding.name,
            CheckOutcome::Failed { binding, .. } => &binding.name,
            CheckOutcome::Skipped => "Skipped",
        }
    }

    /// Gets the data source path of the binding, empty for skipped checks.
    /// 获取绑定的数据源路径，跳过的检查返回空字符串。
    pub fn data_source(&self) -> &str {
        match self {
            CheckOutcome::Bound { binding, .. } => &binding.data,
            CheckOutcome::Failed { binding, .. } => &binding.data,
            CheckOutcome::Skipped => "",
        }
    }

    /// Gets the appropriate CSS class for the outcome status.
    pub fn get_status_class(&self) -> &str {
        match self {
            CheckOutcome::Bound { .. } => {
                if self.is_empty_matrix() {
                    "status-Empty"
                } else {
                    "status-Bound"
                }
            }
            CheckOutcome::Failed { .. } => "status-Failed",
            CheckOutcome::Skipped => "status-Skipped",
        }
    }

    /// Gets the status of the outcome as a string for display.
    /// 以字符串形式获取结果的状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self {
            CheckOutcome::Bound { .. } => {
                if self.is_empty_matrix() {
                    t!("report.status_empty", locale = locale).to_string()
                } else {
                    t!("report.status_bound", locale = locale).to_string()
                }
            }
            CheckOutcome::Failed { .. } => t!("report.status_failed", locale = locale).to_string(),
            CheckOutcome::Skipped => t!("report.status_skipped", locale = locale).to_string(),
        }
    }

    /// Gets the error message of the outcome. Returns an empty string if
    /// there is none.
    /// 获取结果的错误消息。如果没有，则返回空字符串。
    pub fn get_error(&self) -> String {
        match self {
            CheckOutcome::Failed { error, .. } => error.clone(),
            _ => String::new(),
        }
    }

    /// Gets the number of rows in the assembled matrix, 0 otherwise.
    /// 获取组装矩阵的行数，其他情况返回 0。
    pub fn row_count(&self) -> usize {
        match self {
            CheckOutcome::Bound { matrix, .. } => matrix.row_count(),
            _ => 0,
        }
    }

    /// Gets the duration of the check. Returns None if not applicable.
    /// 获取检查的持续时间。如果不适用，则返回 None。
    pub fn get_duration(&self) -> Option<Duration> {
        match self {
            CheckOutcome::Bound { duration, .. } => Some(*duration),
            CheckOutcome::Failed { duration, .. } => Some(*duration),
            CheckOutcome::Skipped => None,
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
