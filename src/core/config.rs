//! # Binding Configuration Module / 绑定配置模块
//!
//! Defines the TOML configuration format that names each binding, points it
//! at a data source, and declares its predicates and parameters.
//!
//! 定义 TOML 配置格式，为每个绑定命名、指向数据源，
//! 并声明其谓词和参数。

use crate::core::binding::ParamSpec;
use crate::core::filter::PredicateSet;
use crate::core::value::Value;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Represents a single binding defined in the configuration: one target test
/// operation, the data source feeding it, and how records become argument
/// rows.
/// 代表配置中定义的单个绑定：一个目标测试操作、
/// 为其供数的数据源，以及记录如何变成参数行。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Binding {
    /// The unique name for the binding, used for identification in output.
    /// 绑定的唯一名称，用于在输出中进行识别。
    pub name: String,
    /// Path to the YAML or JSON data file, resolved relative to the
    /// configuration file's directory when not absolute.
    /// YAML 或 JSON 数据文件的路径，非绝对路径时
    /// 相对于配置文件所在目录解析。
    pub data: String,
    /// Equality predicates over top-level record keys. A record must satisfy
    /// every entry to contribute a row. An empty table selects all records.
    /// 作用于记录顶层键的相等谓词。记录必须满足每个条目才能贡献一行。
    /// 空表选择所有记录。
    #[serde(default, rename = "where")]
    pub filters: BTreeMap<String, Value>,
    /// The ordered parameter declarations. Order here is column order in the
    /// resulting matrix.
    /// 有序的参数声明。此处的顺序即结果矩阵中的列顺序。
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl Binding {
    /// The predicate set this binding filters its records with.
    /// 此绑定用于过滤其记录的谓词集。
    pub fn predicate_set(&self) -> PredicateSet {
        PredicateSet::from(self.filters.clone())
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            data: "".to_string(),
            filters: BTreeMap::new(),
            params: vec![],
        }
    }
}

/// Represents the entire binding configuration, loaded from a TOML file.
/// It contains global settings and a list of all bindings.
/// 代表从 TOML 文件加载的整个绑定配置。
/// 它包含全局设置和所有绑定的列表。
#[derive(Debug, Deserialize, Serialize)]
pub struct BindingConfig {
    /// The language for the tool's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 工具输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// A vector containing all the bindings defined in the file.
    /// 一个包含文件中定义的所有绑定的向量。
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

fn default_language() -> String {
    "en".to_string()
}

/// Loads and parses a binding configuration from a TOML file.
/// 从 TOML 文件加载并解析绑定配置。
pub fn load_binding_config(path: &Path) -> Result<BindingConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read binding config at {}", path.display()))?;
    let config: BindingConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse binding config at {}", path.display()))?;
    Ok(config)
}
