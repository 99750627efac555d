//! # Data Value Model / 数据值模型
//!
//! This module defines the generic value model shared by every stage of the
//! binding pipeline: the loader deserializes into it, predicates compare
//! against it, path resolution walks through it, and matrix cells hold it.
//!
//! 此模块定义了绑定管线每个阶段共享的通用值模型：
//! 加载器反序列化到它，谓词与它比较，路径解析在它内部下钻，
//! 矩阵单元格持有它。
//!
//! Equality between values is structural and kind-aware: a string never
//! equals a number, `1.0` never equals `"1"`. There is exactly one number
//! kind; integers read from a data file are widened to `f64` on load, so
//! integers beyond 2^53 lose precision (a documented limitation of the
//! single-number-kind data model).
//!
//! 值之间的相等是结构化且区分种类的：字符串永远不等于数字，
//! `1.0` 永远不等于 `"1"`。数字只有一种；从数据文件读取的整数
//! 在加载时被拓宽为 `f64`，因此超过 2^53 的整数会丢失精度
//! （单一数字种类数据模型的已知限制）。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One record of test data: an ordered mapping from string keys to values,
/// nested to arbitrary depth. Records are loaded fresh per run and never
/// mutated after load, so sharing them across threads needs no locking.
///
/// 一条测试数据记录：从字符串键到值的有序映射，可任意深度嵌套。
/// 记录在每次运行时重新加载，加载后绝不修改，
/// 因此跨线程共享无需加锁。
pub type Record = BTreeMap<String, Value>;

/// A generic data value as found in a YAML or JSON data file.
///
/// The `untagged` representation lets `serde_yaml`, `serde_json` and `toml`
/// all deserialize natural documents straight into this enum.
///
/// YAML 或 JSON 数据文件中的通用数据值。
///
/// `untagged` 表示使 `serde_yaml`、`serde_json` 和 `toml`
/// 都能把自然文档直接反序列化为此枚举。
///
/// # Examples
///
/// ```rust
/// use param_matrix::core::value::Value;
/// let v = Value::String("bing".to_string());
/// assert_eq!(v.kind(), "string");
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null / 显式空值
    #[default]
    Null,
    /// A boolean / 布尔值
    Bool(bool),
    /// A number; integers are widened to `f64` / 数字；整数被拓宽为 `f64`
    Number(f64),
    /// A string / 字符串
    String(String),
    /// An ordered sequence of values / 有序的值序列
    Sequence(Vec<Value>),
    /// A nested mapping from string keys to values / 嵌套的字符串键值映射
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the kind of this value as a lowercase name.
    /// These names appear verbatim in type-mismatch errors.
    ///
    /// 返回此值的种类（小写名称）。
    /// 这些名称会原样出现在类型不匹配错误中。
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Returns true if the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained bool if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained number if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained string slice if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained sequence if this is a `Sequence` value.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the contained mapping if this is a `Mapping` value.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key if this value is a mapping.
    /// This is the single descent step the path resolver repeats.
    ///
    /// 若此值为映射则查找一个键。
    /// 这是路径解析器反复执行的单步下钻。
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers / 显示格式化辅助函数
    // ------------------------------------------------------------------------

    /// Helper for formatting sequence values.
    fn fmt_sequence(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }

    /// Helper for formatting mapping values.
    fn fmt_mapping(f: &mut fmt::Formatter<'_>, map: &BTreeMap<String, Value>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (k, v) in map.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                // Print integral numbers without the trailing ".0".
                // 整数值不打印末尾的 ".0"。
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => Value::fmt_sequence(f, items),
            Value::Mapping(map) => Value::fmt_mapping(f, map),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}
