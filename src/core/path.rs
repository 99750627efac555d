//! # Path Resolver Module / 路径解析模块
//!
//! This module resolves dotted path expressions (e.g.
//! `result.page_elements.tools`) against a single record, descending through
//! nested mappings one segment at a time. The value remaining after the last
//! segment is returned whole and un-coerced, whether it is a scalar, a
//! sequence or another mapping.
//!
//! 此模块针对单条记录解析点分路径表达式
//! （例如 `result.page_elements.tools`），逐段下钻嵌套映射。
//! 消耗完最后一段后剩下的值被原样整体返回，
//! 无论它是标量、序列还是另一个映射。
//!
//! Known grammar limitations, preserved deliberately: a literal dot inside a
//! key name cannot be escaped, and sequences cannot be indexed by position —
//! a path terminates on a sequence and returns it whole.
//!
//! 语法的已知限制（有意保留）：键名中的字面点号无法转义，
//! 序列不能按位置索引 —— 路径终止于序列时将其整体返回。

use crate::core::value::{Record, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, pre-split path expression.
///
/// Splitting happens once at construction; resolution against any number of
/// records reuses the same segments. Construction rejects empty paths and
/// empty segments (leading, trailing or doubled dots) as usage errors.
///
/// 已验证并预先切分的路径表达式。
///
/// 切分在构造时进行一次；针对任意数量记录的解析复用同一批段。
/// 构造时拒绝空路径与空段（前导、尾随或连续的点号），视为使用错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathExpr {
    raw: String,
    segments: Vec<String>,
}

impl PathExpr {
    /// Parses a dotted path expression, validating every segment.
    ///
    /// 解析点分路径表达式，并验证每一段。
    ///
    /// # Errors
    /// Returns [`PathError::Syntax`] for an empty path or a path containing
    /// an empty segment, e.g. `".query"`, `"query."` or `"a..b"`.
    pub fn parse(path: impl Into<String>) -> Result<Self, PathError> {
        let raw = path.into();
        if raw.is_empty() {
            return Err(PathError::Syntax { path: raw });
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(PathError::Syntax { path: raw });
        }
        Ok(Self { raw, segments })
    }

    /// The original dotted form of the expression.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The individual segments, in descent order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<String> for PathExpr {
    type Error = PathError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        PathExpr::parse(raw)
    }
}

impl From<PathExpr> for String {
    fn from(path: PathExpr) -> Self {
        path.raw
    }
}

/// The ways a path expression can fail against a record.
/// 路径表达式针对记录失败的各种方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The expression itself is malformed (empty path or empty segment).
    /// This is a usage error, caught at parse time rather than during
    /// resolution.
    /// 表达式本身格式错误（空路径或空段）。
    /// 这是使用错误，在解析时而非求值时捕获。
    Syntax { path: String },
    /// A segment named a key that is absent from the current mapping.
    /// 某段指定的键在当前映射中不存在。
    NotFound { path: String, segment: String },
    /// A segment tried to descend into a value that is not a mapping
    /// (a scalar or a sequence).
    /// 某段试图下钻到非映射的值（标量或序列）。
    NotAMapping {
        path: String,
        segment: String,
        kind: &'static str,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Syntax { path } => write!(
                f,
                "invalid path expression '{}': empty paths and empty segments are not allowed",
                path
            ),
            PathError::NotFound { path, segment } => {
                write!(f, "path '{}' does not resolve: no key '{}'", path, segment)
            }
            PathError::NotAMapping {
                path,
                segment,
                kind,
            } => write!(
                f,
                "path '{}' cannot descend into '{}': found {}, expected a mapping",
                path, segment, kind
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves a path expression against one record.
///
/// Starting from the record itself, each segment requires the current value
/// to be a mapping and looks the segment's key up in it. The value left after
/// the final segment is returned by reference, without coercion.
///
/// 针对一条记录解析路径表达式。
///
/// 从记录本身出发，每一段都要求当前值是映射，并在其中查找该段的键。
/// 消耗完最后一段后剩下的值按引用返回，不做任何强制转换。
///
/// # Errors
/// * [`PathError::NotFound`] — a segment's key is absent.
/// * [`PathError::NotAMapping`] — an intermediate value is a scalar or a
///   sequence, so descent is impossible.
///
/// Resolution is deterministic: repeated calls with the same record and path
/// return the identical value.
pub fn resolve<'a>(record: &'a Record, path: &PathExpr) -> Result<&'a Value, PathError> {
    let mut current: Option<&Value> = None;

    for segment in path.segments() {
        let slot = match current {
            // The first segment looks up a top-level key of the record.
            // 第一段查找记录的顶层键。
            None => record.get(segment.as_str()),
            Some(Value::Mapping(map)) => map.get(segment.as_str()),
            Some(other) => {
                return Err(PathError::NotAMapping {
                    path: path.as_str().to_string(),
                    segment: segment.clone(),
                    kind: other.kind(),
                });
            }
        };

        match slot {
            Some(value) => current = Some(value),
            None => {
                return Err(PathError::NotFound {
                    path: path.as_str().to_string(),
                    segment: segment.clone(),
                });
            }
        }
    }

    // `PathExpr::parse` guarantees at least one segment, so `current` is
    // always populated here; an empty expression is still reported as the
    // usage error it is rather than panicking.
    // `PathExpr::parse` 保证至少有一段，因此这里 `current` 必然已填充；
    // 空表达式仍按使用错误报告而非 panic。
    current.ok_or_else(|| PathError::Syntax {
        path: path.as_str().to_string(),
    })
}
