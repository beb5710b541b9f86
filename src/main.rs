//! ut-harness - unit test harness CLI
//!
//! Hosts the harness's built-in suite and exposes listing, running and
//! self-testing from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Run every registered test
//! ut-harness run
//!
//! # Run tests whose name contains a match for the pattern
//! ut-harness run '^fal'
//!
//! # List tests without running them
//! ut-harness list
//!
//! # Validate the harness itself
//! ut-harness selftest
//! ```
//!
//! Exit status is 0 when no test failed, 1 when any test failed and 2 when
//! the configuration cannot be loaded or a pattern is rejected in strict
//! mode.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

mod cli;

use cli::Args;
use ut_harness::config::{print_env_help, EnvConfig, HarnessConfig};
use ut_harness::utils::{init_logger, LogLevel};
use ut_harness::{selftest, PatternPolicy, Registry, Runner, RunnerError};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logger(LogLevel::Warn);
            error!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level()
    };
    init_logger(level);
    debug!("Effective configuration: {:?}", config);

    match execute(args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            match e.downcast_ref::<RunnerError>() {
                Some(RunnerError::Pattern(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

/// Resolve file configuration and environment overrides
fn load_config(args: &Args) -> Result<HarnessConfig> {
    let env = EnvConfig::load();
    let path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(PathBuf::from));

    Ok(HarnessConfig::load_or_default(path.as_deref())?.merge_env(&env))
}

fn execute(args: Args, config: HarnessConfig) -> Result<ExitCode> {
    match args.command {
        cli::Command::List(list_args) => {
            let pattern = list_args.pattern.or(config.pattern.clone());
            let policy = effective_policy(list_args.strict, &config);
            let code = with_suite(|registry| {
                let stdout = std::io::stdout();
                Runner::new(registry)
                    .with_policy(policy)
                    .list(pattern.as_deref(), &mut stdout.lock())?;
                Ok(ExitCode::SUCCESS)
            })?;
            Ok(code)
        }
        cli::Command::Run(run_args) => {
            let pattern = run_args.pattern.or(config.pattern.clone());
            let policy = effective_policy(run_args.strict, &config);
            let code = with_suite(|registry| {
                let stdout = std::io::stdout();
                let summary = Runner::new(registry)
                    .with_policy(policy)
                    .run(pattern.as_deref(), &mut stdout.lock())?;
                if summary.is_all_passed() {
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            })?;
            Ok(code)
        }
        cli::Command::Selftest(selftest_args) => {
            let failed = selftest::run_selftest(selftest_args.pattern.as_deref())?;
            Ok(exit_code(failed))
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build the hosted suite, hand it to `f`, then release it
fn with_suite<F>(f: F) -> Result<ExitCode, RunnerError>
where
    F: FnOnce(&Registry) -> Result<ExitCode, RunnerError>,
{
    let mut registry = Registry::new();
    registry.initialize();
    selftest::register_builtin(&mut registry)?;

    let result = f(&registry);
    registry.cleanup();
    result
}

fn effective_policy(strict_flag: bool, config: &HarnessConfig) -> PatternPolicy {
    if strict_flag {
        PatternPolicy::Strict
    } else {
        config.policy()
    }
}

fn exit_code(failed: u32) -> ExitCode {
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn manage_config(args: cli::ConfigArgs, config: &HarnessConfig) -> Result<()> {
    match args.action {
        cli::ConfigAction::Show => {
            let rendered =
                serde_yaml::to_string(config).context("Failed to serialize configuration")?;
            print!("{rendered}");
        }
        cli::ConfigAction::Init { output, force } => {
            if output.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    output.display()
                );
            }
            HarnessConfig::default().save(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
        cli::ConfigAction::Env => {
            print_env_help();
            println!();
            let env = EnvConfig::load();
            if env.has_any() {
                env.print_summary();
            }
        }
    }
    Ok(())
}
