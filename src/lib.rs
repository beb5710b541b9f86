//! Minimal embeddable unit test harness
//!
//! Tests register a name, a body returning an integer result code and the
//! code it is expected to return. A runner then selects tests by regular
//! expression search over their names and either lists them or runs them,
//! printing one line per test and a pass/fail summary.
//!
//! ```
//! use ut_harness::{Registry, Runner};
//!
//! let mut registry = Registry::new();
//! registry.register("alpha", || 1, 1).unwrap();
//! registry.register("beta", || 0, 1).unwrap();
//!
//! let mut out = Vec::new();
//! let summary = Runner::new(&registry).run(None, &mut out).unwrap();
//! assert_eq!((summary.passed, summary.failed), (1, 1));
//!
//! registry.cleanup();
//! ```

pub mod config;
pub mod models;
pub mod pattern;
pub mod registry;
pub mod runner;
pub mod selftest;
pub mod utils;

pub use models::{RunSummary, TestOutcome, TestRecord};
pub use pattern::{PatternError, PatternPolicy, Selector};
pub use registry::{Registry, RegistryError, Runnable, TestDescriptor};
pub use runner::{list_tests, run_tests, Runner, RunnerError, NAME_WIDTH};
pub use selftest::run_selftest;

#[cfg(test)]
mod tests {
    use super::*;

    fn returns_1() -> i32 {
        1
    }

    fn returns_0() -> i32 {
        0
    }

    fn returns_5() -> i32 {
        5
    }

    fn greek() -> Registry {
        let mut registry = Registry::new();
        registry.register("alpha", returns_1, 1).unwrap();
        registry.register("beta", returns_0, 1).unwrap();
        registry.register("gamma", returns_5, 5).unwrap();
        registry
    }

    fn run(registry: &Registry, pattern: Option<&str>) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = Runner::new(registry).run(pattern, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    fn list(registry: &Registry, pattern: Option<&str>) -> Vec<String> {
        let mut out = Vec::new();
        Runner::new(registry).list(pattern, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn result_line(name: &str, outcome: &str) -> String {
        format!("Test {:<width$} : {}", name, outcome, width = NAME_WIDTH)
    }

    #[test]
    fn test_unfiltered_run_reports_each_test() {
        let (summary, output) = run(&greek(), None);

        let expected = [
            result_line("alpha", "pass"),
            result_line("beta", "FAILED"),
            result_line("gamma", "pass"),
            "==== TEST RESULTS ====".to_string(),
            "PASSED: 2".to_string(),
            "FAILED: 1".to_string(),
            "======================".to_string(),
        ];
        assert_eq!(output.lines().collect::<Vec<_>>(), expected);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed, 2);
    }

    #[test]
    fn test_filtered_run_selects_subset() {
        let (summary, output) = run(&greek(), Some("ta"));

        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failed_names(), vec!["beta"]);
        assert!(output.contains(&result_line("beta", "FAILED")));
        assert!(!output.contains("alpha"));
        assert!(!output.contains("gamma"));
    }

    #[test]
    fn test_counts_sum_to_registrations() {
        let mut registry = Registry::new();
        for i in 0..25 {
            let expected = if i % 3 == 0 { 1 } else { 0 };
            registry
                .register(format!("case_{i:02}"), move || i % 2, expected)
                .unwrap();
        }

        let (summary, _) = run(&registry, None);
        assert_eq!(summary.total(), 25);
        assert_eq!(summary.records.len(), 25);
    }

    #[test]
    fn test_expected_value_decides_outcome() {
        for value in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
            let mut registry = Registry::new();
            registry.register("matches", move || value, value).unwrap();
            registry
                .register("differs", move || value, value.wrapping_add(1))
                .unwrap();

            let (summary, _) = run(&registry, None);
            assert_eq!(summary.passed, 1, "value {value}");
            assert_eq!(summary.failed_names(), vec!["differs"], "value {value}");
        }
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let names = ["zeta", "alpha", "mu", "beta"];
        let mut registry = Registry::new();
        for name in names {
            registry.register(name, returns_0, 0).unwrap();
        }

        assert_eq!(list(&registry, None), names);
        assert_eq!(list(&registry, Some("ta$")), ["zeta", "beta"]);
    }

    #[test]
    fn test_pattern_matching_nothing() {
        let registry = greek();
        let (summary, output) = run(&registry, Some("^delta$"));

        assert_eq!(summary.total(), 0);
        assert_eq!(
            output,
            "==== TEST RESULTS ====\nPASSED: 0\nFAILED: 0\n======================\n"
        );
        assert!(list(&registry, Some("^delta$")).is_empty());
    }

    #[test]
    fn test_run_after_cleanup_is_empty() {
        let mut registry = greek();
        registry.cleanup();

        let (after_cleanup, cleaned_output) = run(&registry, None);
        let (never_populated, fresh_output) = run(&Registry::new(), None);

        assert_eq!(after_cleanup, never_populated);
        assert_eq!(cleaned_output, fresh_output);
        assert_eq!(after_cleanup.total(), 0);
    }

    #[test]
    fn test_invalid_pattern_fallback_runs_everything() {
        let (summary, _) = run(&greek(), Some("[unterminated"));
        assert_eq!(summary.total(), 3);
        assert_eq!(list(&greek(), Some("[unterminated")).len(), 3);
    }

    #[test]
    fn test_invalid_pattern_strict_is_an_error() {
        let registry = greek();
        let mut out = Vec::new();
        let err = Runner::new(&registry)
            .with_policy(PatternPolicy::Strict)
            .list(Some("[unterminated"), &mut out)
            .unwrap_err();

        assert!(matches!(err, RunnerError::Pattern(_)));
        assert!(err.to_string().contains("[unterminated"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_long_names_truncated_on_result_line() {
        let long = "n".repeat(NAME_WIDTH * 2);
        let mut registry = Registry::new();
        registry.register(long.as_str(), returns_1, 1).unwrap();

        let (_, output) = run(&registry, None);
        let first = output.lines().next().unwrap();
        assert_eq!(first, format!("Test {} : pass", "n".repeat(NAME_WIDTH)));

        // listing prints the full name
        assert_eq!(list(&registry, None), [long]);
    }

    #[test]
    fn test_empty_width_pattern_selects_whole_registry() {
        let registry = greek();
        assert_eq!(list(&registry, Some("x*")), ["alpha", "beta", "gamma"]);

        let (summary, _) = run(&registry, Some("x*"));
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failed_names(), vec!["beta"]);
    }
}
