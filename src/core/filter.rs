//! # Record Filter Module / 记录过滤模块
//!
//! This module selects the subset of loaded records a binding applies to,
//! using declarative equality predicates combined by logical AND. Filtering
//! is total before any path resolution begins: the parameter mapper never
//! resolves a path against a record that failed the predicate set.
//!
//! 此模块使用按逻辑与组合的声明式相等谓词，
//! 选出某个绑定适用的已加载记录子集。
//! 过滤在任何路径解析开始之前完整完成：
//! 参数映射器绝不会针对未通过谓词集的记录解析路径。
//!
//! Predicates address top-level record keys only; filtering on nested paths
//! is a possible future extension, not part of the current contract. Deep
//! data is reached exclusively through parameter resolution.
//!
//! 谓词仅针对记录的顶层键；按嵌套路径过滤是可能的未来扩展，
//! 不属于当前契约。深层数据只能通过参数解析到达。

use crate::core::value::{Record, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single equality predicate: the record's top-level `key` must equal
/// `expected` under kind-aware structural equality. A record that lacks the
/// key simply does not match — absence is never an error.
///
/// 单个相等谓词：记录的顶层 `key` 必须在区分种类的结构相等下等于
/// `expected`。缺少该键的记录只是不匹配 —— 缺失绝不是错误。
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    key: String,
    expected: Value,
}

impl Predicate {
    /// Creates an equality predicate on a top-level record key.
    pub fn new(key: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// The top-level key this predicate inspects.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value the key must equal.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Evaluates the predicate against one record.
    /// 针对一条记录求值该谓词。
    pub fn matches(&self, record: &Record) -> bool {
        record
            .get(&self.key)
            .map(|value| *value == self.expected)
            .unwrap_or(false)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.expected)
    }
}

/// An unordered conjunction of predicates. The empty set matches every
/// record.
///
/// 无序的谓词合取。空集匹配所有记录。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    /// Creates an empty predicate set (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style addition of one equality predicate.
    ///
    /// 构建器风格地添加一个相等谓词。
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_matrix::core::filter::PredicateSet;
    /// let set = PredicateSet::new().with("category", "News");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn with(mut self, key: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::new(key, expected));
        self
    }

    /// Adds one predicate in place.
    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Iterates over the contained predicates.
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    /// Evaluates the conjunction against one record.
    /// 针对一条记录求值整个合取。
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(record))
    }
}

impl FromIterator<Predicate> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

/// Builds a predicate set from a plain key/value table, the shape the
/// `[bindings.where]` config section deserializes into.
///
/// 从普通键值表构建谓词集，即配置中 `[bindings.where]` 小节
/// 反序列化出的形态。
impl From<BTreeMap<String, Value>> for PredicateSet {
    fn from(table: BTreeMap<String, Value>) -> Self {
        table
            .into_iter()
            .map(|(key, expected)| Predicate::new(key, expected))
            .collect()
    }
}

impl fmt::Display for PredicateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for predicate in &self.predicates {
            if !first {
                write!(f, " and ")?;
            }
            write!(f, "{}", predicate)?;
            first = false;
        }
        Ok(())
    }
}

/// Retains the records satisfying every predicate in the set, preserving
/// their original relative order (a stable filter). With an empty predicate
/// set the full sequence is returned.
///
/// 保留满足集合中所有谓词的记录，并保持其原始相对顺序（稳定过滤）。
/// 谓词集为空时返回完整序列。
///
/// # Arguments
/// * `records` - The loaded record sequence (possibly empty)
/// * `predicates` - The predicate set to satisfy
///
/// # Returns
/// References to the surviving records, a subsequence of `records`.
pub fn select_records<'a>(records: &'a [Record], predicates: &PredicateSet) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| predicates.matches(record))
        .collect()
}
