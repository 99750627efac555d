//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Param Matrix,
//! including the value model, path resolution, record filtering and
//! parameter binding logic.
//!
//! 此模块包含 Param Matrix 的核心功能，
//! 包括值模型、路径解析、记录过滤和参数绑定逻辑。

pub mod binding;
pub mod config;
pub mod filter;
pub mod models;
pub mod path;
pub mod value;

// Re-exports
pub use binding::{bind_matrix, ArgumentMatrix, BindingError, ParamSpec, ParamType};
pub use config::{load_binding_config, Binding, BindingConfig};
pub use filter::{select_records, Predicate, PredicateSet};
pub use models::CheckOutcome;
pub use path::{resolve, PathError, PathExpr};
pub use value::{Record, Value};
