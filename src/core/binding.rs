//! # Parameter Mapper Module / 参数映射模块
//!
//! This module orchestrates the record filter and the path resolver into the
//! engine's end product: the argument matrix. For a declared parameter list
//! and an optional predicate set it produces one row per surviving record and
//! one column per declared parameter, each cell holding the resolved value
//! coerced to the declared type.
//!
//! 此模块把记录过滤器和路径解析器编排为引擎的最终产物：参数矩阵。
//! 对于声明的参数列表和可选的谓词集，它为每条存活记录生成一行、
//! 为每个声明参数生成一列，每个单元格持有解析后并
//! 强制为声明类型的值。
//!
//! Binding is fail-fast: the first cell that does not resolve, or whose value
//! kind does not match its declaration, aborts matrix construction — a
//! partial matrix is never returned. A successful binding over zero surviving
//! records yields a zero-row matrix; whether that means "skip the test" is
//! the consuming framework's policy, not this module's.
//!
//! 绑定是快速失败的：第一个无法解析、或值种类与声明不符的单元格
//! 会中止矩阵构建 —— 绝不返回部分矩阵。零条存活记录上的成功绑定
//! 产生零行矩阵；这是否意味着"跳过测试"由消费方框架决定，
//! 而非本模块。

use crate::core::filter::{select_records, PredicateSet};
use crate::core::path::{resolve, PathError, PathExpr};
use crate::core::value::{Record, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type a declared parameter expects its resolved value to have.
/// Coercion is a strict kind check: no value is converted across kinds,
/// sequence elements and mapping entries are passed through untouched.
///
/// 声明参数期望其解析值具有的类型。
/// 强制转换是严格的种类检查：值不会跨种类转换，
/// 序列元素和映射条目原样传递。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    #[serde(alias = "boolean")]
    Bool,
    #[serde(alias = "list")]
    Sequence,
    #[serde(alias = "map")]
    Mapping,
}

impl ParamType {
    /// The lowercase name used in config files and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Bool => "bool",
            ParamType::Sequence => "sequence",
            ParamType::Mapping => "mapping",
        }
    }

    /// Whether a resolved value satisfies this declaration.
    /// 解析出的值是否满足此声明。
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ParamType::String, Value::String(_))
                | (ParamType::Number, Value::Number(_))
                | (ParamType::Bool, Value::Bool(_))
                | (ParamType::Sequence, Value::Sequence(_))
                | (ParamType::Mapping, Value::Mapping(_))
        )
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One declared parameter of a target test operation: a path expression and
/// the type its resolved value must have. Declaration order in the parameter
/// list determines column order in the matrix.
///
/// 目标测试操作的一个声明参数：一个路径表达式，
/// 以及其解析值必须具有的类型。参数列表中的声明顺序
/// 决定矩阵中的列顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Where in each record the value lives / 值在每条记录中的位置
    pub path: PathExpr,
    /// The kind the value must have / 值必须具有的种类
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl ParamSpec {
    /// Creates a declaration from an already-parsed path expression.
    pub fn new(path: PathExpr, ty: ParamType) -> Self {
        Self { path, ty }
    }

    /// Parses the path expression and creates the declaration in one step.
    ///
    /// # Errors
    /// Returns [`PathError::Syntax`] when the path expression is malformed.
    pub fn parse(path: impl Into<String>, ty: ParamType) -> Result<Self, PathError> {
        Ok(Self {
            path: PathExpr::parse(path)?,
            ty,
        })
    }
}

/// The ordered 2-D result of a binding: one row per filtered record, one
/// column per declared parameter, columns labelled with their path
/// expressions. A matrix is allocated fresh per call and owned entirely by
/// the caller — the mapper retains nothing.
///
/// 绑定的有序二维结果：每条过滤后记录一行，每个声明参数一列，
/// 列以其路径表达式标注。矩阵在每次调用时全新分配，
/// 完全归调用方所有 —— 映射器不保留任何内容。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentMatrix {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ArgumentMatrix {
    /// The column labels, i.e. the declared path expressions in declaration
    /// order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows, in original (filtered) record order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Consumes the matrix, yielding owned rows for the invoking framework.
    /// 消耗矩阵，为调用框架产出其拥有的行。
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when no record survived filtering.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for ArgumentMatrix {
    type Item = Vec<Value>;
    type IntoIter = std::vec::IntoIter<Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// A binding-time failure, carrying enough context to locate the offending
/// data entry: the index of the record within the *filtered* sequence (the
/// row it would have occupied) and the path expression of the failing cell.
///
/// 绑定期失败，携带足以定位问题数据条目的上下文：
/// 记录在*过滤后*序列中的索引（即它本应占据的行号）
/// 以及失败单元格的路径表达式。
#[derive(Debug, Clone, PartialEq)]
pub enum BindingError {
    /// Path resolution failed for a cell. Never silently defaulted to null.
    /// 单元格的路径解析失败。绝不静默退化为空值。
    Path {
        record_index: usize,
        source: PathError,
    },
    /// A cell resolved, but to a value of the wrong kind.
    /// 单元格解析成功，但值的种类不符。
    TypeMismatch {
        record_index: usize,
        path: String,
        expected: ParamType,
        actual: &'static str,
    },
}

impl BindingError {
    /// The filtered-sequence index of the record the failure occurred on.
    pub fn record_index(&self) -> usize {
        match self {
            BindingError::Path { record_index, .. } => *record_index,
            BindingError::TypeMismatch { record_index, .. } => *record_index,
        }
    }

    /// The path expression of the failing cell.
    pub fn path(&self) -> &str {
        match self {
            BindingError::Path { source, .. } => match source {
                PathError::Syntax { path } => path,
                PathError::NotFound { path, .. } => path,
                PathError::NotAMapping { path, .. } => path,
            },
            BindingError::TypeMismatch { path, .. } => path,
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::Path {
                record_index,
                source,
            } => write!(f, "record #{}: {}", record_index, source),
            BindingError::TypeMismatch {
                record_index,
                path,
                expected,
                actual,
            } => write!(
                f,
                "record #{}: path '{}' resolved to {}, expected {}",
                record_index, path, actual, expected
            ),
        }
    }
}

impl std::error::Error for BindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindingError::Path { source, .. } => Some(source),
            BindingError::TypeMismatch { .. } => None,
        }
    }
}

/// Binds a single record to the declared parameter list, producing one
/// matrix row: every declaration's path resolved against this record and
/// kind-checked against its declared type, in declaration order.
///
/// 将单条记录绑定到声明的参数列表，生成一个矩阵行：
/// 每个声明的路径都针对此记录解析，并按其声明类型进行种类检查，
/// 依声明顺序排列。
///
/// `record_index` is the position the row will occupy in the matrix; it is
/// only used to label errors.
pub fn bind_record(
    record: &Record,
    record_index: usize,
    params: &[ParamSpec],
) -> Result<Vec<Value>, BindingError> {
    let mut row = Vec::with_capacity(params.len());

    for param in params {
        let value = resolve(record, &param.path).map_err(|source| BindingError::Path {
            record_index,
            source,
        })?;

        if !param.ty.accepts(value) {
            return Err(BindingError::TypeMismatch {
                record_index,
                path: param.path.as_str().to_string(),
                expected: param.ty,
                actual: value.kind(),
            });
        }

        // The kind matched; the cell takes the value whole. Sequence elements
        // and mapping entries pass through uncoerced.
        // 种类匹配；单元格整体取值。序列元素和映射条目原样通过。
        row.push(value.clone());
    }

    Ok(row)
}

/// Builds the complete argument matrix for one target test operation.
///
/// Filtering runs to completion first; each surviving record then becomes
/// one row via [`bind_record`], in its original relative order. The output
/// is fully deterministic for a fixed record sequence, predicate set and
/// declaration list — no caching, no hidden state.
///
/// 为一个目标测试操作构建完整的参数矩阵。
///
/// 过滤首先完整执行；随后每条存活记录通过 [`bind_record`]
/// 按其原始相对顺序成为一行。对于固定的记录序列、谓词集和声明列表，
/// 输出完全确定 —— 无缓存，无隐藏状态。
///
/// # Arguments
/// * `records` - The loaded record sequence
/// * `params` - The ordered parameter declarations (column order)
/// * `predicates` - Equality predicates selecting the relevant records
///
/// # Returns
/// The assembled matrix, or the first [`BindingError`] encountered.
pub fn bind_matrix(
    records: &[Record],
    params: &[ParamSpec],
    predicates: &PredicateSet,
) -> Result<ArgumentMatrix, BindingError> {
    let selected = select_records(records, predicates);

    let mut rows = Vec::with_capacity(selected.len());
    for (record_index, record) in selected.into_iter().enumerate() {
        rows.push(bind_record(record, record_index, params)?);
    }

    Ok(ArgumentMatrix {
        columns: params
            .iter()
            .map(|param| param.path.as_str().to_string())
            .collect(),
        rows,
    })
}
