//! Configuration module
//!
//! Loads harness settings from a YAML or JSON file, then applies
//! environment overrides. CLI flags are applied last by the binary.

mod env;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pattern::PatternPolicy;
use crate::utils::LogLevel;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./ut-harness.yaml",
    "./ut-harness.yml",
    "./.ut-harness.yaml",
    "~/.config/ut-harness/config.yaml",
    "~/.ut-harness.yaml",
];

/// Harness configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Default selection pattern when none is given on the command line
    pub pattern: Option<String>,

    /// Reject an invalid pattern instead of selecting every test
    pub strict_pattern: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            strict_pattern: false,
            log_level: "warn".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_path(location))
            .find(|path| path.exists())
    }

    /// Load from `path`, or from the first standard location, or defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_path_buf).or_else(Self::find) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if LogLevel::from_str(&self.log_level).is_none() {
            anyhow::bail!("Invalid log level: {}", self.log_level);
        }
        Ok(())
    }

    /// Apply environment overrides on top of this configuration
    pub fn merge_env(mut self, env: &EnvConfig) -> Self {
        if let Some(pattern) = &env.pattern {
            self.pattern = Some(pattern.clone());
        }
        if let Some(strict) = env.strict {
            self.strict_pattern = strict;
        }
        if let Some(level) = &env.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn policy(&self) -> PatternPolicy {
        PatternPolicy::from_strict(self.strict_pattern)
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_str(&self.log_level).unwrap_or(LogLevel::Warn)
    }
}

/// Expand `~/` to the home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
