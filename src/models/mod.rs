//! Data models for test execution
//!
//! Outcome, per-test record and run summary types shared by the runner.

mod outcome;

pub use outcome::{RunSummary, TestOutcome, TestRecord};
