//! # Check Command Module / 检查命令模块
//!
//! This module implements the `check` command for the Param Matrix CLI,
//! which validates every binding in the configuration by loading its data
//! source and assembling its argument matrix.
//!
//! 此模块实现了 Param Matrix CLI 的 `check` 命令，
//! 通过加载数据源并组装参数矩阵来验证配置中的每个绑定。

use anyhow::{Context, Result};
use colored::*;
use futures::{stream, StreamExt};
use std::{fs, path::Path, path::PathBuf, time::Duration, time::Instant};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        binding::bind_matrix,
        config::{self, Binding, BindingConfig},
        models::{CheckOutcome, FailureReason},
    },
    infra::{
        fs::{absolute_path, resolve_data_path},
        loader, t,
    },
    reporting::{
        console::{print_failure_details, print_summary},
        html::generate_html_report,
    },
};

/// Executes the check command with the provided arguments.
///
/// # Arguments
/// * `jobs` - Number of parallel check jobs to run
/// * `config` - Path to the binding configuration file
/// * `fail_fast` - Cancel remaining checks after the first failure
/// * `html` - Optional path for HTML report output
/// * `json` - Optional path for machine-readable JSON results
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(
    jobs: Option<usize>,
    config: PathBuf,
    fail_fast: bool,
    html: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let (binding_config, config_path) = setup_and_parse_config(&config)?;
    let locale = binding_config.language.clone();
    rust_i18n::set_locale(&locale);

    let config_dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!(
        "{}",
        t!(
            "loading_binding_config",
            locale = locale,
            path = config_path.display()
        )
    );

    let overall_stop_token = setup_signal_handler(&locale)?;

    if binding_config.bindings.is_empty() {
        println!("{}", t!("no_bindings_to_check", locale = locale).green());
        return Ok(());
    }

    println!(
        "{}",
        t!(
            "checking_bindings",
            locale = locale,
            count = binding_config.bindings.len()
        )
        .bold()
    );

    let (final_outcomes, has_failures) = check_bindings(
        binding_config.bindings,
        jobs.unwrap_or(num_cpus::get() / 2 + 1),
        &config_dir,
        fail_fast,
        overall_stop_token,
    )
    .await?;

    print_summary(&final_outcomes, &locale);

    if let Some(report_path) = &html {
        println!("\nGenerating HTML report at: {}", report_path.display());
        if let Err(e) = generate_html_report(&final_outcomes, report_path, &locale) {
            eprintln!("{} {}", "Failed to generate HTML report:".red(), e);
        }
    }

    if let Some(json_path) = &json {
        println!("Writing JSON results to: {}", json_path.display());
        if let Err(e) = write_json_results(&final_outcomes, json_path) {
            eprintln!("{} {}", "Failed to write JSON results:".red(), e);
        }
    }

    if has_failures {
        let failures: Vec<_> = final_outcomes.iter().filter(|o| o.is_failure()).collect();
        print_failure_details(&failures, &locale);
        anyhow::bail!(t!("check_failed_bail", locale = locale));
    } else {
        println!(
            "\n{}",
            t!("all_bindings_bound", locale = locale).green().bold()
        );
        Ok(())
    }
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

/// Installs a Ctrl-C handler whose token cancels the outstanding checks.
fn setup_signal_handler(locale: &str) -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl-C");
        println!("\n{}", t!("shutdown_signal", locale = &locale).yellow());
        handler_token.cancel();
    });

    Ok(token)
}

/// Checks a single binding end to end: loads its data source, filters the
/// records and assembles the argument matrix, timing the whole step.
///
/// 端到端检查单个绑定：加载其数据源、过滤记录并组装参数矩阵，
/// 并对整个步骤计时。
async fn check_binding(binding: Binding, config_dir: &Path) -> CheckOutcome {
    let start_time = Instant::now();
    let data_path = resolve_data_path(config_dir, &binding.data);

    let records = match loader::load_records(&data_path) {
        Ok(records) => records,
        Err(e) => {
            return CheckOutcome::Failed {
                error: e.to_string(),
                reason: FailureReason::DataSource,
                duration: start_time.elapsed(),
                binding,
            };
        }
    };

    match bind_matrix(&records, &binding.params, &binding.predicate_set()) {
        Ok(matrix) => CheckOutcome::Bound {
            matrix,
            duration: start_time.elapsed(),
            binding,
        },
        Err(e) => CheckOutcome::Failed {
            error: e.to_string(),
            reason: FailureReason::Binding,
            duration: start_time.elapsed(),
            binding,
        },
    }
}

/// Runs the binding checks in parallel.
async fn check_bindings(
    bindings: Vec<Binding>,
    jobs: usize,
    config_dir: &Path,
    fail_fast: bool,
    overall_stop_token: CancellationToken,
) -> Result<(Vec<CheckOutcome>, bool)> {
    let fail_fast_token = CancellationToken::new();

    let stream = stream::iter(bindings.into_iter().map(|binding| {
        let fail_fast_token = fail_fast_token.clone();
        let overall_stop_token = overall_stop_token.clone();
        let config_dir = config_dir.to_path_buf();
        let binding_clone_for_error = binding.clone();

        tokio::spawn(async move {
            let mut handle =
                tokio::spawn(async move { check_binding(binding, &config_dir).await });

            let mut join_result = None;

            tokio::select! {
                biased;
                _ = overall_stop_token.cancelled() => {
                    handle.abort();
                }
                res = &mut handle => {
                    join_result = Some(res);
                }
            }

            match join_result {
                None => CheckOutcome::Skipped,
                Some(res) => {
                    if fail_fast_token.is_cancelled() {
                        CheckOutcome::Skipped
                    } else {
                        let outcome = match res {
                            Ok(outcome) => outcome,
                            Err(e) => CheckOutcome::Failed {
                                binding: binding_clone_for_error,
                                error: e.to_string(),
                                reason: FailureReason::Internal,
                                duration: Duration::default(),
                            },
                        };

                        if fail_fast && outcome.is_failure() {
                            // Cancel the remaining checks after the first failure
                            fail_fast_token.cancel();
                        }

                        outcome
                    }
                }
            }
        })
    }))
    .buffer_unordered(jobs)
    .collect::<Vec<Result<CheckOutcome, tokio::task::JoinError>>>()
    .await;

    // Process results and check for failures
    let mut has_failures = false;
    let final_outcomes: Vec<CheckOutcome> = stream
        .into_iter()
        .map(|res| match res {
            Ok(outcome) => {
                if outcome.is_failure() {
                    has_failures = true;
                }
                outcome
            }
            Err(e) => {
                has_failures = true;
                CheckOutcome::Failed {
                    binding: Binding::default(),
                    error: format!("Critical error during binding check: {}", e),
                    reason: FailureReason::Internal,
                    duration: Duration::default(),
                }
            }
        })
        .collect();

    Ok((final_outcomes, has_failures))
}

/// Writes the raw check outcomes as pretty-printed JSON.
fn write_json_results(outcomes: &[CheckOutcome], path: &Path) -> Result<()> {
    let rendered = serde_json::to_string_pretty(outcomes)?;
    fs::write(path, rendered)
        .with_context(|| format!("failed to write JSON results to {}", path.display()))?;
    Ok(())
}
