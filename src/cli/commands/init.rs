//! # Binding Configuration Initialization Module / 绑定配置初始化模块
//!
//! This module provides functionality for initializing a new binding
//! configuration through an interactive command-line wizard. It helps users
//! create a `Bindings.toml` file together with a sample data source so the
//! first `check` run succeeds out of the box.
//!
//! 此模块通过交互式命令行向导提供初始化新绑定配置的功能。
//! 它帮助用户创建 `Bindings.toml` 文件以及示例数据源，
//! 让第一次 `check` 运行开箱即用。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::binding::{ParamSpec, ParamType};
use crate::core::config::{Binding, BindingConfig};
use crate::core::value::Value;
use crate::infra::t;

/// Sample records demonstrating nested mappings and a sequence leaf.
/// 示例记录，演示嵌套映射和序列叶子值。
const DEFAULT_DATA: &str = r#"# Sample search records / 示例搜索记录
- query: bing
  category: Images
  limit: 40
  safe_search: true
  result:
    page_elements:
      tools: ["All images", "Creative Commons", "Large"]

- query: bing
  category: News
  limit: 25
  safe_search: false
  result:
    page_elements:
      tools: ["All news", "Recent", "Sorted by relevance"]
"#;

/// Runs the interactive wizard to generate a `Bindings.toml` file.
///
/// This function provides a step-by-step guided process for creating a new
/// binding configuration file, and optionally a sample data source the
/// configuration points at.
///
/// 运行交互式向导以生成 `Bindings.toml` 文件。
///
/// 此函数提供逐步指导过程，用于创建新的绑定配置文件，
/// 以及配置所指向的可选示例数据源。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("Bindings.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let default_config = generate_default_config(language)?;

    if non_interactive {
        write_sample_data(Path::new("data/records.yaml"), language)?;
        write_config(config_path, &default_config, language)?;
        return Ok(());
    }

    // Interactive part starts here
    let name: String = Input::with_theme(&theme)
        .with_prompt(t!("init_binding_name_prompt", locale = language))
        .default("sample_search".to_string())
        .interact_text()?;

    let data: String = Input::with_theme(&theme)
        .with_prompt(t!("init_data_path_prompt", locale = language))
        .default("data/records.yaml".to_string())
        .interact_text()?;

    let options = vec![
        ("query", t!("init_param_query", locale = language)),
        ("category", t!("init_param_category", locale = language)),
        ("tools", t!("init_param_tools", locale = language)),
    ];

    let selections = MultiSelect::with_theme(&theme)
        .with_prompt(t!("init_param_selection_prompt", locale = language))
        .items(&options.iter().map(|o| o.1.clone()).collect::<Vec<_>>())
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    if selections.is_empty() {
        println!("{}", t!("init_no_params_selected", locale = language).yellow());
    }

    let mut params = Vec::new();
    for i in selections {
        let param = match options[i].0 {
            "query" => ParamSpec::parse("query", ParamType::String)?,
            "category" => ParamSpec::parse("category", ParamType::String)?,
            "tools" => ParamSpec::parse("result.page_elements.tools", ParamType::Sequence)?,
            _ => continue,
        };
        params.push(param);
    }

    let final_config = if params.is_empty() {
        default_config
    } else {
        let mut filters = BTreeMap::new();
        filters.insert("category".to_string(), Value::from("News"));

        BindingConfig {
            language: language.to_string(),
            bindings: vec![Binding {
                name,
                data: data.clone(),
                filters,
                params,
            }],
        }
    };

    let create_data = Confirm::with_theme(&theme)
        .with_prompt(t!("init_create_sample_data_prompt", locale = language, path = data))
        .default(true)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    if create_data {
        write_sample_data(Path::new(&data), language)?;
    }

    write_config(config_path, &final_config, language)
}

fn generate_default_config(language: &str) -> Result<BindingConfig> {
    let mut filters = BTreeMap::new();
    filters.insert("category".to_string(), Value::from("News"));

    Ok(BindingConfig {
        language: language.to_string(),
        bindings: vec![Binding {
            name: "sample_search".to_string(),
            data: "data/records.yaml".to_string(),
            filters,
            params: vec![
                ParamSpec::parse("query", ParamType::String)?,
                ParamSpec::parse("category", ParamType::String)?,
                ParamSpec::parse("result.page_elements.tools", ParamType::Sequence)?,
            ],
        }],
    })
}

fn write_config(path: &Path, config: &BindingConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!(
            "init_success_created",
            locale = language,
            path = path.display()
        )
        .bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}

/// Writes the sample data source, creating parent directories as needed.
/// 写入示例数据源，按需创建父目录。
fn write_sample_data(path: &Path, language: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!(
                    "init_create_parent_dir_failed",
                    locale = language,
                    path = parent.display()
                )
            })?;
        }
    }

    fs::write(path, DEFAULT_DATA)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()))?;

    println!(
        "{} {}",
        "✔".green(),
        t!(
            "init_sample_data_created",
            locale = language,
            path = path.display()
        )
    );

    Ok(())
}
