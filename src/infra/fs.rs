//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as resolving data source references against the configuration
//! file's directory.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如相对于配置文件所在目录解析数据源引用。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Resolves a data source reference from a binding configuration.
/// Relative references are taken relative to the configuration file's
/// directory, so a config can be invoked from anywhere.
///
/// 解析绑定配置中的数据源引用。
/// 相对引用以配置文件所在目录为基准，
/// 因此配置可以从任何位置调用。
///
/// # Arguments
/// * `config_dir` - Directory containing the binding configuration file
/// * `data_ref` - The `data` value as written in the configuration
pub fn resolve_data_path(config_dir: &Path, data_ref: &str) -> PathBuf {
    let referenced = Path::new(data_ref);
    if referenced.is_absolute() {
        referenced.to_path_buf()
    } else {
        config_dir.join(referenced)
    }
}
