//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unit test registration and execution harness
#[derive(Parser, Debug)]
#[command(name = "ut-harness")]
#[command(version)]
#[command(about = "List and run registered unit tests")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered tests
    List(ListArgs),

    /// Run registered tests
    Run(RunArgs),

    /// Run the harness self-tests
    Selftest(SelftestArgs),

    /// Configuration management
    Config(ConfigArgs),
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Regular expression searched for in test names
    pub pattern: Option<String>,

    /// Reject an invalid pattern instead of listing every test
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Regular expression searched for in test names
    pub pattern: Option<String>,

    /// Reject an invalid pattern instead of running every test
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for selftest command
#[derive(Parser, Debug)]
pub struct SelftestArgs {
    /// Regular expression searched for in self-test names
    pub pattern: Option<String>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "ut-harness.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Describe environment variable overrides
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_pattern() {
        let args = Args::parse_from(["ut-harness", "run", "^Detect", "--strict"]);
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.pattern.as_deref(), Some("^Detect"));
                assert!(run.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_without_pattern() {
        let args = Args::parse_from(["ut-harness", "-v", "list"]);
        assert!(args.verbose);
        assert!(matches!(args.command, Command::List(ListArgs { pattern: None, .. })));
    }

    #[test]
    fn test_parse_config_init() {
        let args = Args::parse_from(["ut-harness", "config", "init", "-o", "x.json"]);
        match args.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { output, force },
            }) => {
                assert_eq!(output, PathBuf::from("x.json"));
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
