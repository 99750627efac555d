//! # Internationalization Integration Tests / 国际化集成测试
//!
//! This module contains integration tests for internationalization features,
//! testing language switching, locale fallback, and multilingual output.
//!
//! 此模块包含国际化功能的集成测试，
//! 测试语言切换、区域设置回退和多语言输出。

mod common;

use assert_cmd::prelude::*;
use common::{setup_test_environment, SAMPLE_YAML};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a Chinese language binding config
/// 创建中文语言绑定配置的辅助函数
fn create_chinese_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("chinese.toml");
    let content = r#"
language = "zh-CN"

[[bindings]]
name = "新闻搜索"
data = "data/records.yaml"

[bindings.where]
category = "News"

[[bindings.params]]
path = "query"
type = "string"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create an English language binding config
/// 创建英文语言绑定配置的辅助函数
fn create_english_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("english.toml");
    let content = r#"
language = "en"

[[bindings]]
name = "news_search"
data = "data/records.yaml"

[[bindings.params]]
path = "query"
type = "string"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a config without a language key
/// 创建未指定语言的绑定配置的辅助函数
fn create_default_language_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let config_path = temp_dir.path().join("default_lang.toml");
    let content = r#"
# No language specified - should default to "en"

[[bindings]]
name = "default_language_binding"
data = "data/records.yaml"

[[bindings.params]]
path = "query"
type = "string"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

#[cfg(test)]
mod language_output_tests {
    use super::*;

    #[test]
    fn test_chinese_output() {
        let temp_dir = setup_test_environment();
        let config_path = create_chinese_config(&temp_dir);

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("所有绑定均成功产出矩阵！"));
    }

    #[test]
    fn test_english_output() {
        let temp_dir = setup_test_environment();
        let config_path = create_english_config(&temp_dir);

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        cmd.assert().success().stdout(predicate::str::contains(
            "All bindings produced their matrices successfully!",
        ));
    }

    #[test]
    fn test_default_language_fallback() {
        let temp_dir = setup_test_environment();
        let config_path = create_default_language_config(&temp_dir);

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        // Should default to English
        cmd.assert().success().stdout(predicate::str::contains(
            "All bindings produced their matrices successfully!",
        ));
    }

    #[test]
    fn test_invalid_language_fallback() {
        let temp_dir = setup_test_environment();
        let config_path = temp_dir.path().join("invalid_lang.toml");
        let content = r#"
language = "invalid-language-code"

[[bindings]]
name = "fallback_binding"
data = "data/records.yaml"

[[bindings.params]]
path = "query"
type = "string"
"#;
        fs::write(&config_path, content).unwrap();

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        // Should fall back to English
        cmd.assert().success().stdout(predicate::str::contains(
            "All bindings produced their matrices successfully!",
        ));
    }

    #[test]
    fn test_chinese_bind_output() {
        let temp_dir = setup_test_environment();
        let config_path = create_chinese_config(&temp_dir);

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("bind").arg("--config").arg(&config_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("参数矩阵：新闻搜索"));
    }
}

#[cfg(test)]
mod error_message_i18n_tests {
    use super::*;

    fn write_broken_config(temp_dir: &TempDir, language: &str) -> std::path::PathBuf {
        let config_path = temp_dir.path().join(format!("broken_{}.toml", language));
        let content = format!(
            r#"
language = "{}"

[[bindings]]
name = "broken_binding"
data = "data/records.yaml"

[[bindings.params]]
path = "result.page_size"
type = "number"
"#,
            language
        );
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_chinese_failure_details() {
        let temp_dir = setup_test_environment();
        let config_path = write_broken_config(&temp_dir, "zh-CN");

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        cmd.assert()
            .failure()
            .stdout(predicate::str::contains("失败详情"))
            .stderr(predicate::str::contains("绑定检查失败。"));
    }

    #[test]
    fn test_english_failure_details() {
        let temp_dir = setup_test_environment();
        let config_path = write_broken_config(&temp_dir, "en");

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        cmd.assert()
            .failure()
            .stdout(predicate::str::contains("Failure Details"))
            .stderr(predicate::str::contains("Binding checks failed."));
    }
}

#[cfg(test)]
mod html_report_i18n_tests {
    use super::*;

    #[test]
    fn test_chinese_html_report() {
        let temp_dir = setup_test_environment();
        let config_path = create_chinese_config(&temp_dir);
        let report_path = temp_dir.path().join("chinese_report.html");

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check")
            .arg("--config")
            .arg(&config_path)
            .arg("--html")
            .arg(&report_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Generating HTML report"));

        assert!(report_path.exists());

        let report_content = fs::read_to_string(&report_path).unwrap();
        assert!(
            report_content.contains("<title>Param Matrix 检查报告</title>"),
            "Chinese HTML report content is invalid. Got:\n\n{}",
            report_content
        );
    }

    #[test]
    fn test_english_html_report() {
        let temp_dir = setup_test_environment();
        let config_path = create_english_config(&temp_dir);
        let report_path = temp_dir.path().join("english_report.html");

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check")
            .arg("--config")
            .arg(&config_path)
            .arg("--html")
            .arg(&report_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Generating HTML report"));

        assert!(report_path.exists());

        let report_content = fs::read_to_string(&report_path).unwrap();
        assert!(report_content.contains("<title>Param Matrix Check Report</title>"));
    }
}

#[cfg(test)]
mod mixed_language_tests {
    use super::*;

    #[test]
    fn test_chinese_config_with_english_binding_names() {
        let temp_dir = setup_test_environment();
        let config_path = temp_dir.path().join("mixed.toml");
        let content = r#"
language = "zh-CN"

[[bindings]]
name = "english-binding-name"
data = "data/records.yaml"

[[bindings.params]]
path = "query"
type = "string"

[[bindings]]
name = "中文绑定名称"
data = "data/records.yaml"

[[bindings.params]]
path = "category"
type = "string"
"#;
        fs::write(&config_path, content).unwrap();

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("check").arg("--config").arg(&config_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("english-binding-name"))
            .stdout(predicate::str::contains("中文绑定名称"))
            .stdout(predicate::str::contains("所有绑定均成功产出矩阵！"));
    }

    #[test]
    fn test_unicode_record_values_flow_through_the_matrix() {
        let temp_dir = setup_test_environment();
        let unicode_yaml = format!(
            "{}- query: \"emoji-🚀\"\n  category: \"特殊字符-©®™\"\n  limit: 1\n  safe_search: true\n  result:\n    page_elements:\n      tools: []\n",
            SAMPLE_YAML
        );
        fs::write(temp_dir.path().join("data/records.yaml"), unicode_yaml).unwrap();

        let config_path = temp_dir.path().join("unicode.toml");
        let content = r#"
language = "zh-CN"

[[bindings]]
name = "unicode_binding"
data = "data/records.yaml"

[bindings.where]
category = "特殊字符-©®™"

[[bindings.params]]
path = "query"
type = "string"

[[bindings.params]]
path = "category"
type = "string"
"#;
        fs::write(&config_path, content).unwrap();

        let mut cmd = Command::cargo_bin("param-matrix").unwrap();
        cmd.arg("bind").arg("--config").arg(&config_path);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("emoji-🚀"))
            .stdout(predicate::str::contains("特殊字符-©®™"));
    }
}
