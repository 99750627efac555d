//! # Bind Command Module / 绑定命令模块
//!
//! This module implements the `bind` command for the Param Matrix CLI,
//! which assembles and prints the argument matrix for one or all bindings
//! in the configuration.
//!
//! 此模块实现了 Param Matrix CLI 的 `bind` 命令，
//! 用于组装并打印配置中一个或全部绑定的参数矩阵。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        binding::bind_matrix,
        config::{self, Binding, BindingConfig},
    },
    infra::{
        fs::{absolute_path, resolve_data_path},
        loader, t,
    },
    reporting::console::print_matrix,
};

/// Executes the bind command with the provided arguments.
///
/// # Arguments
/// * `config` - Path to the binding configuration file
/// * `binding_name` - When given, bind only the named binding
/// * `json` - Print the assembled matrices as JSON instead of tables
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(config: PathBuf, binding_name: Option<String>, json: bool) -> Result<()> {
    let (binding_config, config_path) = setup_and_parse_config(&config)?;
    let locale = binding_config.language.clone();
    rust_i18n::set_locale(&locale);

    let config_dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let bindings = select_bindings(binding_config, binding_name, &locale)?;

    if bindings.is_empty() {
        println!("{}", t!("no_bindings_defined", locale = locale).yellow());
        return Ok(());
    }

    let mut json_entries = Vec::with_capacity(bindings.len());

    for binding in bindings {
        let data_path = resolve_data_path(&config_dir, &binding.data);
        let records = loader::load_records(&data_path)
            .with_context(|| t!("bind_failed_for", locale = locale, name = binding.name))?;

        let matrix = bind_matrix(&records, &binding.params, &binding.predicate_set())
            .with_context(|| t!("bind_failed_for", locale = locale, name = binding.name))?;

        if json {
            json_entries.push(serde_json::json!({
                "name": binding.name,
                "matrix": matrix,
            }));
        } else {
            print_matrix(&binding.name, &matrix, &locale);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&json_entries)?);
    }

    Ok(())
}

/// Sets up and parses the binding configuration file.
fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(BindingConfig, PathBuf)> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let config_path = absolute_path(config_path_arg).with_context(|| {
        t!(
            "config_read_failed_path",
            locale = locale,
            path = config_path_arg.display()
        )
    })?;

    let binding_config = config::load_binding_config(&config_path)
        .with_context(|| t!("config_parse_failed", locale = locale))?;

    Ok((binding_config, config_path))
}

/// Narrows the configured bindings to the requested one, or keeps them all.
/// 将配置的绑定缩小到请求的那个，或全部保留。
fn select_bindings(
    binding_config: BindingConfig,
    binding_name: Option<String>,
    locale: &str,
) -> Result<Vec<Binding>> {
    match binding_name {
        Some(name) => {
            let found = binding_config
                .bindings
                .into_iter()
                .find(|binding| binding.name == name);
            match found {
                Some(binding) => Ok(vec![binding]),
                None => anyhow::bail!(t!("bind_unknown_binding", locale = locale, name = name)),
            }
        }
        None => Ok(binding_config.bindings),
    }
}
