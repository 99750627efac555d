// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

pub const SAMPLE_YAML: &str = r#"- query: bing
  category: Images
  limit: 40
  safe_search: true
  result:
    page_elements:
      tools:
        - "Type of images"
        - "Color"
- query: bing
  category: News
  limit: 25
  safe_search: false
  result:
    page_elements:
      tools:
        - "All news"
        - "Recent"
        - "Sorted by relevance"
"#;

pub const SAMPLE_JSON: &str = r#"[
  {
    "query": "bing",
    "category": "Images",
    "limit": 40,
    "safe_search": true,
    "result": {"page_elements": {"tools": ["Type of images", "Color"]}}
  },
  {
    "query": "bing",
    "category": "News",
    "limit": 25,
    "safe_search": false,
    "result": {"page_elements": {"tools": ["All news", "Recent", "Sorted by relevance"]}}
  }
]"#;

pub fn setup_test_environment() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let data_path = temp_dir.path().join("data");
    fs::create_dir_all(&data_path).expect("Failed to create data directory");

    fs::write(data_path.join("records.yaml"), SAMPLE_YAML)
        .expect("Failed to write records.yaml");
    fs::write(data_path.join("records.json"), SAMPLE_JSON)
        .expect("Failed to write records.json");

    temp_dir
}

/// Helper function to create a configuration binding the sample records
pub fn create_sample_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("Bindings.toml");
    let content = r#"
language = "en"

[[bindings]]
name = "news_search"
data = "data/records.yaml"

[bindings.where]
category = "News"

[[bindings.params]]
path = "query"
type = "string"

[[bindings.params]]
path = "category"
type = "string"

[[bindings.params]]
path = "result.page_elements.tools"
type = "sequence"

[[bindings]]
name = "all_searches"
data = "data/records.json"

[[bindings.params]]
path = "query"
type = "string"

[[bindings.params]]
path = "limit"
type = "number"

[[bindings.params]]
path = "safe_search"
type = "bool"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("invalid.toml");
    let content = r#"
language = "en"
# Invalid TOML - missing closing bracket
[[bindings]
name = "invalid-binding"
data = "data/records.yaml"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration whose path never resolves
pub fn create_broken_path_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("broken_path.toml");
    let content = r#"
language = "en"

[[bindings]]
name = "broken_path"
data = "data/records.yaml"

[[bindings.params]]
path = "result.page_size"
type = "number"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration whose declared type never matches
pub fn create_type_mismatch_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("type_mismatch.toml");
    let content = r#"
language = "en"

[[bindings]]
name = "limit_as_string"
data = "data/records.yaml"

[[bindings.params]]
path = "limit"
type = "string"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration pointing at a missing data file
pub fn create_missing_data_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("missing_data.toml");
    let content = r#"
language = "en"

[[bindings]]
name = "no_data"
data = "data/does_not_exist.yaml"

[[bindings.params]]
path = "query"
type = "string"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}
