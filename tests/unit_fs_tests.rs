//! # File System Module Unit Tests / 文件系统模块单元测试
//!
//! This module contains unit tests for the `fs.rs` module, testing both
//! the `absolute_path` and `resolve_data_path` functions.
//!
//! 此模块包含 `fs.rs` 模块的单元测试，
//! 测试 `absolute_path` 和 `resolve_data_path` 两个函数。

use param_matrix::infra::fs::{absolute_path, resolve_data_path};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[cfg(test)]
mod absolute_path_tests {
    use super::*;

    #[test]
    fn test_absolute_path_of_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.yaml");
        fs::write(&file_path, "[]").unwrap();

        let resolved = absolute_path(&file_path).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("records.yaml"));
    }

    #[test]
    fn test_absolute_path_normalizes_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("sub");
        fs::create_dir_all(&sub_dir).unwrap();
        let file_path = temp_dir.path().join("records.yaml");
        fs::write(&file_path, "[]").unwrap();

        let indirect = sub_dir.join("..").join("records.yaml");
        let resolved = absolute_path(&indirect).unwrap();

        assert_eq!(resolved, absolute_path(&file_path).unwrap());
    }

    #[test]
    fn test_absolute_path_of_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        let err = absolute_path(&missing).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to resolve path"));
    }
}

#[cfg(test)]
mod resolve_data_path_tests {
    use super::*;

    #[test]
    fn test_relative_reference_is_joined_onto_config_dir() {
        let config_dir = Path::new("/etc/param-matrix");

        let resolved = resolve_data_path(config_dir, "records.yaml");

        assert_eq!(resolved, Path::new("/etc/param-matrix/records.yaml"));
    }

    #[test]
    fn test_nested_relative_reference() {
        let config_dir = Path::new("/etc/param-matrix");

        let resolved = resolve_data_path(config_dir, "data/search/records.json");

        assert_eq!(
            resolved,
            Path::new("/etc/param-matrix/data/search/records.json")
        );
    }

    #[test]
    fn test_absolute_reference_ignores_config_dir() {
        let config_dir = Path::new("/etc/param-matrix");

        let resolved = resolve_data_path(config_dir, "/var/data/records.yaml");

        assert_eq!(resolved, Path::new("/var/data/records.yaml"));
    }
}
