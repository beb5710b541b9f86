//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "UT_HARNESS";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Selection pattern from UT_HARNESS_PATTERN
    pub pattern: Option<String>,
    /// Strict pattern handling from UT_HARNESS_STRICT
    pub strict: Option<bool>,
    /// Log level from UT_HARNESS_LOG
    pub log_level: Option<String>,
    /// Config file from UT_HARNESS_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            pattern: get_env("PATTERN"),
            strict: get_env_bool("STRICT"),
            log_level: get_env("LOG"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.pattern.is_some()
            || self.strict.is_some()
            || self.log_level.is_some()
            || self.config_file.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_PATTERN: {:?}", ENV_PREFIX, self.pattern);
        println!("  {}_STRICT:  {:?}", ENV_PREFIX, self.strict);
        println!("  {}_LOG:     {:?}", ENV_PREFIX, self.log_level);
        println!("  {}_CONFIG:  {:?}", ENV_PREFIX, self.config_file);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
#[derive(Default)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_PATTERN"), pattern.into()));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_STRICT"), strict.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all UT_HARNESS environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_PATTERN   Default test selection pattern");
    println!("  {ENV_PREFIX}_STRICT    Reject invalid patterns (true/false)");
    println!("  {ENV_PREFIX}_LOG       Log level (trace, debug, info, warn, error)");
    println!("  {ENV_PREFIX}_CONFIG    Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_PATTERN='^Detect'");
    println!("  ut-harness run");
}
