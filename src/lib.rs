//! # Param Matrix Library / Param Matrix 库
//!
//! This library provides the core functionality for the Param Matrix tool,
//! a structured-data query and parameter-binding engine that turns
//! hierarchical YAML or JSON records into argument matrices for
//! parameterized tests.
//!
//! 此库为 Param Matrix 工具提供核心功能，
//! 这是一个结构化数据查询与参数绑定引擎，
//! 可将层级化的 YAML 或 JSON 记录转换为参数化测试的参数矩阵。
//!
//! ## Modules / 模块
//!
//! - `core` - Value model, path resolution, record filtering and binding engine
//! - `infra` - Infrastructure services like data source loading and file system operations
//! - `reporting` - Binding check reporting and visualization
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 值模型、路径解析、记录过滤和绑定引擎
//! - `infra` - 基础设施服务，如数据源加载和文件系统操作
//! - `reporting` - 绑定检查报告和可视化
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::binding;
pub use core::config;
pub use core::models;

/// Resolves the display language from the system locale and applies it.
///
/// The detected locale is matched against the shipped catalogs: first the
/// full tag (e.g. "zh-CN"), then the bare language code (e.g. "en" out of
/// "en-US"). Unmatched locales fall back to "en". Returns the language that
/// was applied so callers can keep passing it to `t!`.
///
/// 从系统区域设置解析显示语言并应用它。
/// 检测到的区域设置先按完整标签（如 "zh-CN"）与内置目录匹配，
/// 再按纯语言代码（如 "en-US" 中的 "en"）匹配。
/// 无法匹配时回退到 "en"。返回已应用的语言，
/// 以便调用方继续将其传给 `t!`。
pub fn init() -> String {
    let detected = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available = rust_i18n::available_locales!();

    let lang = if available.contains(&detected.as_str()) {
        detected.as_str()
    } else {
        detected
            .split('-')
            .next()
            .filter(|code| available.contains(code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
