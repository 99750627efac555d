//! # Models Module Unit Tests / Models 模块单元测试
//!
//! This module contains comprehensive unit tests for the `models.rs` module,
//! testing the check outcome variants and their reporting helpers.
//!
//! 此模块包含 `models.rs` 模块的全面单元测试，
//! 测试检查结果的各个变体及其报告辅助方法。

use param_matrix::core::binding::{bind_matrix, ArgumentMatrix, ParamSpec, ParamType};
use param_matrix::core::config::Binding;
use param_matrix::core::filter::PredicateSet;
use param_matrix::core::models::{CheckOutcome, FailureReason};
use param_matrix::infra::loader::{load_records_from_str, DataFormat};
use std::collections::BTreeMap;
use std::time::Duration;

const RECORDS: &str = r#"- query: bing
  category: Images
- query: bing
  category: News
"#;

/// Helper function to create a binding / 创建绑定的辅助函数
fn create_binding(name: &str) -> Binding {
    Binding {
        name: name.to_string(),
        data: "data/records.yaml".to_string(),
        filters: BTreeMap::new(),
        params: vec![ParamSpec::parse("query", ParamType::String).unwrap()],
    }
}

/// Helper function to assemble a matrix from the fixture records
/// 从夹具记录组装矩阵的辅助函数
fn assemble_matrix(predicates: PredicateSet) -> ArgumentMatrix {
    let records = load_records_from_str(RECORDS, DataFormat::Yaml, "records.yaml").unwrap();
    let params = vec![ParamSpec::parse("query", ParamType::String).unwrap()];
    bind_matrix(&records, &params, &predicates).unwrap()
}

#[cfg(test)]
mod check_outcome_tests {
    use super::*;

    #[test]
    fn test_check_outcome_bound() {
        let binding = create_binding("bound-binding");
        let outcome = CheckOutcome::Bound {
            binding: binding.clone(),
            matrix: assemble_matrix(PredicateSet::new()),
            duration: Duration::from_secs(1),
        };

        match &outcome {
            CheckOutcome::Bound { binding, matrix, .. } => {
                assert_eq!(binding.name, "bound-binding");
                assert_eq!(matrix.row_count(), 2);
            }
            _ => panic!("Expected Bound variant"),
        }

        assert!(!outcome.is_failure());
        assert!(!outcome.is_empty_matrix());
        assert_eq!(outcome.binding_name(), "bound-binding");
        assert_eq!(outcome.data_source(), "data/records.yaml");
        assert_eq!(outcome.row_count(), 2);
        assert_eq!(outcome.get_error(), "");
        assert_eq!(outcome.get_duration(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_check_outcome_bound_with_empty_matrix() {
        let binding = create_binding("empty-binding");
        let outcome = CheckOutcome::Bound {
            binding,
            matrix: assemble_matrix(PredicateSet::new().with("category", "Videos")),
            duration: Duration::from_millis(3),
        };

        // An empty matrix is still a successful outcome, just called out
        // separately by the reports.
        // 空矩阵仍然是成功的结果，只是报告会单独标出。
        assert!(!outcome.is_failure());
        assert!(outcome.is_empty_matrix());
        assert_eq!(outcome.row_count(), 0);
    }

    #[test]
    fn test_check_outcome_failed() {
        let binding = create_binding("failed-binding");
        let outcome = CheckOutcome::Failed {
            binding: binding.clone(),
            error: "path 'result.page_size' does not resolve: no key 'page_size'".to_string(),
            reason: FailureReason::Binding,
            duration: Duration::from_secs(1),
        };

        match &outcome {
            CheckOutcome::Failed {
                binding: failed_binding,
                error,
                reason,
                ..
            } => {
                assert_eq!(failed_binding.name, "failed-binding");
                assert!(error.contains("does not resolve"));
                assert!(matches!(reason, FailureReason::Binding));
            }
            _ => panic!("Expected Failed variant"),
        }

        assert!(outcome.is_failure());
        assert!(!outcome.is_empty_matrix());
        assert!(outcome.get_error().contains("page_size"));
        assert_eq!(outcome.row_count(), 0);
    }

    #[test]
    fn test_check_outcome_skipped() {
        let outcome = CheckOutcome::Skipped;

        match &outcome {
            CheckOutcome::Skipped => {
                // Expected
            }
            _ => panic!("Expected Skipped variant"),
        }

        assert!(!outcome.is_failure());
        assert_eq!(outcome.binding_name(), "Skipped");
        assert_eq!(outcome.data_source(), "");
        assert_eq!(outcome.row_count(), 0);
        assert_eq!(outcome.get_duration(), None);
    }

    #[test]
    fn test_check_outcome_clone() {
        let binding = create_binding("clone-binding");
        let original = CheckOutcome::Bound {
            binding,
            matrix: assemble_matrix(PredicateSet::new()),
            duration: Duration::from_secs(5),
        };

        let cloned = original.clone();

        match (&original, &cloned) {
            (
                CheckOutcome::Bound {
                    binding: orig_binding,
                    matrix: orig_matrix,
                    ..
                },
                CheckOutcome::Bound {
                    binding: clone_binding,
                    matrix: clone_matrix,
                    ..
                },
            ) => {
                assert_eq!(orig_binding.name, clone_binding.name);
                assert_eq!(orig_matrix.rows(), clone_matrix.rows());
            }
            _ => panic!("Clone should preserve variant type"),
        }
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_status_class_per_variant() {
        let bound = CheckOutcome::Bound {
            binding: create_binding("b"),
            matrix: assemble_matrix(PredicateSet::new()),
            duration: Duration::ZERO,
        };
        let empty = CheckOutcome::Bound {
            binding: create_binding("e"),
            matrix: assemble_matrix(PredicateSet::new().with("category", "Videos")),
            duration: Duration::ZERO,
        };
        let failed = CheckOutcome::Failed {
            binding: create_binding("f"),
            error: "boom".to_string(),
            reason: FailureReason::Internal,
            duration: Duration::ZERO,
        };

        assert_eq!(bound.get_status_class(), "status-Bound");
        assert_eq!(empty.get_status_class(), "status-Empty");
        assert_eq!(failed.get_status_class(), "status-Failed");
        assert_eq!(CheckOutcome::Skipped.get_status_class(), "status-Skipped");
    }

    #[test]
    fn test_status_str_is_localized() {
        let bound = CheckOutcome::Bound {
            binding: create_binding("b"),
            matrix: assemble_matrix(PredicateSet::new()),
            duration: Duration::ZERO,
        };

        assert_eq!(bound.get_status_str("en"), "Bound");
        assert_eq!(bound.get_status_str("zh-CN"), "已绑定");
        assert_eq!(CheckOutcome::Skipped.get_status_str("en"), "Skipped");
        assert_eq!(CheckOutcome::Skipped.get_status_str("zh-CN"), "已跳过");
    }

    #[test]
    fn test_status_str_for_empty_matrix() {
        let empty = CheckOutcome::Bound {
            binding: create_binding("e"),
            matrix: assemble_matrix(PredicateSet::new().with("category", "Videos")),
            duration: Duration::ZERO,
        };

        assert_eq!(empty.get_status_str("en"), "No Rows");
        assert_eq!(empty.get_status_str("zh-CN"), "无行");
    }

    #[test]
    fn test_status_str_falls_back_to_english() {
        let failed = CheckOutcome::Failed {
            binding: create_binding("f"),
            error: "boom".to_string(),
            reason: FailureReason::DataSource,
            duration: Duration::ZERO,
        };

        assert_eq!(failed.get_status_str("fr"), "Failed");
    }
}

#[cfg(test)]
mod failure_reason_tests {
    use super::*;

    #[test]
    fn test_failure_reason_variants() {
        let data_source = FailureReason::DataSource;
        let binding = FailureReason::Binding;
        let internal = FailureReason::Internal;

        // Test Debug formatting
        assert_eq!(format!("{:?}", data_source), "DataSource");
        assert_eq!(format!("{:?}", binding), "Binding");
        assert_eq!(format!("{:?}", internal), "Internal");
    }

    #[test]
    fn test_failure_reason_clone() {
        let original = FailureReason::DataSource;
        let cloned = original;

        assert!(matches!(cloned, FailureReason::DataSource));
    }

    #[test]
    fn test_failure_reason_round_trips_through_json() {
        let rendered = serde_json::to_string(&FailureReason::Binding).unwrap();
        let parsed: FailureReason = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, FailureReason::Binding);
    }
}

#[cfg(test)]
mod serialization_tests {
    use super::*;

    #[test]
    fn test_bound_outcome_serializes_matrix_and_binding() {
        let outcome = CheckOutcome::Bound {
            binding: create_binding("serialized-binding"),
            matrix: assemble_matrix(PredicateSet::new()),
            duration: Duration::from_secs(1),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        let bound = json.get("Bound").expect("Bound variant should be tagged");

        assert_eq!(bound["binding"]["name"], "serialized-binding");
        assert_eq!(bound["matrix"]["columns"][0], "query");
        assert_eq!(bound["matrix"]["rows"][0][0], "bing");
    }

    #[test]
    fn test_failed_outcome_serializes_reason() {
        let outcome = CheckOutcome::Failed {
            binding: create_binding("failed-binding"),
            error: "failed to read data source 'x.yaml': missing".to_string(),
            reason: FailureReason::DataSource,
            duration: Duration::ZERO,
        };

        let json = serde_json::to_value(&outcome).unwrap();
        let failed = json.get("Failed").expect("Failed variant should be tagged");

        assert_eq!(failed["reason"], "DataSource");
        assert!(failed["error"].as_str().unwrap().contains("x.yaml"));
    }

    #[test]
    fn test_skipped_outcome_serializes_as_unit() {
        let json = serde_json::to_value(CheckOutcome::Skipped).unwrap();

        assert_eq!(json, serde_json::json!("Skipped"));
    }
}
