//! Test listing and execution
//!
//! Walks a [`Registry`] in registration order, selects tests by name and
//! either prints them (list mode) or runs them and reconciles each result
//! against its expected value (run mode).
//!
//! Test bodies run synchronously on the calling thread. There is no
//! isolation: a panic or abort inside a test ends the whole run before the
//! summary footer is written.

use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{RunSummary, TestRecord};
use crate::pattern::{PatternError, PatternPolicy, Selector};
use crate::registry::{Registry, RegistryError};
use crate::utils::Timer;

/// Width the test name is padded and truncated to on result lines
pub const NAME_WIDTH: usize = 60;

/// Errors surfaced by list/run
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to write test output: {0}")]
    Io(#[from] io::Error),
}

/// Lists or runs the tests of one registry
pub struct Runner<'a> {
    registry: &'a Registry,
    policy: PatternPolicy,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            policy: PatternPolicy::default(),
        }
    }

    /// Set how an invalid pattern is handled
    pub fn with_policy(mut self, policy: PatternPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Write the name of every selected test, one per line.
    ///
    /// Returns the number of names written.
    pub fn list<W: Write>(&self, pattern: Option<&str>, out: &mut W) -> Result<usize, RunnerError> {
        let selector = Selector::with_policy(pattern, self.policy)?;
        let mut listed = 0;

        for test in self.registry.iter().filter(|t| selector.matches(t.name())) {
            writeln!(out, "{}", test.name())?;
            listed += 1;
        }

        out.flush()?;
        Ok(listed)
    }

    /// Run every selected test and write one result line per test followed
    /// by the summary footer.
    pub fn run<W: Write>(&self, pattern: Option<&str>, out: &mut W) -> Result<RunSummary, RunnerError> {
        let selector = Selector::with_policy(pattern, self.policy)?;
        let timer = Timer::start("test run");
        let mut summary = RunSummary::new();

        for test in self.registry.iter().filter(|t| selector.matches(t.name())) {
            write!(out, "{}", result_prefix(test.name()))?;
            // name must be visible before the body runs in case it aborts
            out.flush()?;

            let actual = test.invoke();
            let record = TestRecord::new(test.name(), test.expected(), actual);
            writeln!(out, "{}", record.outcome)?;

            if !record.outcome.is_success() {
                debug!(
                    "{} returned {} (expected {})",
                    record.name, record.actual, record.expected
                );
            }
            summary.record(record);
        }

        write!(out, "{summary}")?;
        out.flush()?;

        let elapsed = timer.stop();
        info!(
            "Ran {} tests in {}ms - passed: {}, failed: {}",
            summary.total(),
            elapsed.as_millis(),
            summary.passed,
            summary.failed
        );

        Ok(summary)
    }
}

/// Render the `Test <name> : ` prefix of a result line
pub fn result_prefix(name: &str) -> String {
    format!("Test {:<width$.width$} : ", name, width = NAME_WIDTH)
}

/// List selected tests to stdout, selecting everything on an invalid pattern
pub fn list_tests(registry: &Registry, pattern: Option<&str>) -> Result<usize, RunnerError> {
    let stdout = io::stdout();
    Runner::new(registry).list(pattern, &mut stdout.lock())
}

/// Run selected tests, reporting to stdout, and return the failure count.
///
/// An invalid pattern selects every test.
pub fn run_tests(registry: &Registry, pattern: Option<&str>) -> Result<u32, RunnerError> {
    let stdout = io::stdout();
    let summary = Runner::new(registry).run(pattern, &mut stdout.lock())?;
    Ok(summary.failed)
}
