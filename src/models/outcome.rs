//! Test outcome models
//!
//! Defines per-test records and the aggregate run summary.

use std::fmt;

/// Outcome of comparing a test's result against its expected value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestOutcome {
    Pass,
    Fail,
}

impl TestOutcome {
    /// Reconcile an actual result code against the expected one
    pub fn from_result(actual: i32, expected: i32) -> Self {
        if actual == expected {
            TestOutcome::Pass
        } else {
            TestOutcome::Fail
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Pass)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Pass => write!(f, "pass"),
            TestOutcome::Fail => write!(f, "FAILED"),
        }
    }
}

/// Result of a single executed test
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRecord {
    pub name: String,
    pub expected: i32,
    pub actual: i32,
    pub outcome: TestOutcome,
}

impl TestRecord {
    pub fn new(name: impl Into<String>, expected: i32, actual: i32) -> Self {
        Self {
            name: name.into(),
            expected,
            actual,
            outcome: TestOutcome::from_result(actual, expected),
        }
    }
}

/// Aggregate counts for one run invocation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: u32,
    pub failed: u32,
    pub records: Vec<TestRecord>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a record toward the totals and keep it
    pub fn record(&mut self, record: TestRecord) {
        match record.outcome {
            TestOutcome::Pass => self.passed += 1,
            TestOutcome::Fail => self.failed += 1,
        }
        self.records.push(record);
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn is_all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Names of the tests that failed, in execution order
    pub fn failed_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.outcome.is_success())
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== TEST RESULTS ====")?;
        writeln!(f, "PASSED: {}", self.passed)?;
        writeln!(f, "FAILED: {}", self.failed)?;
        writeln!(f, "======================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(TestOutcome::from_result(1, 1), TestOutcome::Pass);
        assert_eq!(TestOutcome::from_result(0, 1), TestOutcome::Fail);
        assert_eq!(TestOutcome::from_result(i32::MIN, i32::MIN), TestOutcome::Pass);
        assert_eq!(TestOutcome::from_result(-1, 0), TestOutcome::Fail);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(TestOutcome::Pass.to_string(), "pass");
        assert_eq!(TestOutcome::Fail.to_string(), "FAILED");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new();
        summary.record(TestRecord::new("alpha", 1, 1));
        summary.record(TestRecord::new("beta", 1, 0));
        summary.record(TestRecord::new("gamma", 5, 5));

        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.is_all_passed());
        assert_eq!(summary.failed_names(), vec!["beta"]);
    }

    #[test]
    fn test_summary_footer() {
        let summary = RunSummary::new();
        assert_eq!(
            summary.to_string(),
            "==== TEST RESULTS ====\nPASSED: 0\nFAILED: 0\n======================\n"
        );
    }
}
