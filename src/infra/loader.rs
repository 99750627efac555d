//! # Data Source Loader Module / 数据源加载模块
//!
//! This module reads and parses the raw record sequences that feed the
//! binding engine. A data source is a YAML or JSON document whose top level
//! is a sequence of mappings; anything else is a loading failure, reported
//! distinctly from binding-time failures.
//!
//! 此模块读取并解析供给绑定引擎的原始记录序列。
//! 数据源是顶层为映射序列的 YAML 或 JSON 文档；
//! 其他任何形态都是加载失败，与绑定期失败分开报告。

use crate::core::value::Record;
use std::fmt;
use std::fs;
use std::path::Path;

/// The on-disk formats a data source may use, detected from the file
/// extension.
/// 数据源可能使用的磁盘格式，根据文件扩展名检测。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    /// Detects the format from a path's extension. Returns `None` for
    /// unrecognized extensions, including none at all.
    /// 根据路径扩展名检测格式。无法识别的扩展名
    /// （包括没有扩展名）返回 `None`。
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Some(DataFormat::Yaml),
            Some("json") => Some(DataFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Yaml => write!(f, "YAML"),
            DataFormat::Json => write!(f, "JSON"),
        }
    }
}

/// A failure to obtain records from a data source. Carries the source
/// identifier so reports can name the offending file.
/// 从数据源获取记录的失败。携带数据源标识，
/// 以便报告能指出问题文件。
#[derive(Debug)]
pub enum DataSourceError {
    /// The source could not be read at all.
    /// 数据源完全无法读取。
    Io {
        identifier: String,
        source: std::io::Error,
    },
    /// The source extension names no supported format.
    /// 数据源扩展名不属于任何受支持的格式。
    UnsupportedFormat { identifier: String },
    /// The source was read but is not a well-formed sequence of mappings.
    /// 数据源已读取，但不是格式良好的映射序列。
    Parse { identifier: String, message: String },
}

impl DataSourceError {
    /// The identifier of the source the failure occurred on.
    pub fn identifier(&self) -> &str {
        match self {
            DataSourceError::Io { identifier, .. } => identifier,
            DataSourceError::UnsupportedFormat { identifier } => identifier,
            DataSourceError::Parse { identifier, .. } => identifier,
        }
    }
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io { identifier, source } => {
                write!(f, "failed to read data source '{}': {}", identifier, source)
            }
            DataSourceError::UnsupportedFormat { identifier } => write!(
                f,
                "unsupported data source format '{}' (expected .yaml, .yml or .json)",
                identifier
            ),
            DataSourceError::Parse {
                identifier,
                message,
            } => {
                write!(f, "failed to parse data source '{}': {}", identifier, message)
            }
        }
    }
}

impl std::error::Error for DataSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataSourceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads the complete record sequence from a data source file, detecting
/// the format from the extension. Record order in the document is
/// preserved.
///
/// 从数据源文件加载完整的记录序列，根据扩展名检测格式。
/// 文档中的记录顺序得以保留。
///
/// # Arguments
/// * `path` - The data source file to read
///
/// # Returns
/// The parsed records, or a [`DataSourceError`] naming the source.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DataSourceError> {
    let identifier = path.display().to_string();

    let format = DataFormat::from_path(path).ok_or_else(|| DataSourceError::UnsupportedFormat {
        identifier: identifier.clone(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        identifier: identifier.clone(),
        source,
    })?;

    load_records_from_str(&content, format, &identifier)
}

/// Parses a record sequence from an already-read document. The `identifier`
/// only labels errors; it is not dereferenced.
/// 从已读取的文档解析记录序列。`identifier` 仅用于标注错误，
/// 不会被解引用。
pub fn load_records_from_str(
    content: &str,
    format: DataFormat,
    identifier: &str,
) -> Result<Vec<Record>, DataSourceError> {
    match format {
        DataFormat::Yaml => {
            serde_yaml::from_str::<Vec<Record>>(content).map_err(|e| DataSourceError::Parse {
                identifier: identifier.to_string(),
                message: e.to_string(),
            })
        }
        DataFormat::Json => {
            serde_json::from_str::<Vec<Record>>(content).map_err(|e| DataSourceError::Parse {
                identifier: identifier.to_string(),
                message: e.to_string(),
            })
        }
    }
}
