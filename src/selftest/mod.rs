//! Harness self-tests
//!
//! Two trivial cases run through the real runner to validate the harness:
//! `true` returns 1 and expects 1, `false` returns 0 and expects 0. Both
//! must pass. Compiled only with the `selftest` feature.

use std::io::{self, Write};

#[cfg(feature = "selftest")]
use crate::registry::{Registry, RegistryError};
use crate::runner::RunnerError;
#[cfg(feature = "selftest")]
use crate::runner::Runner;

#[cfg(feature = "selftest")]
fn selftest_true() -> i32 {
    1
}

#[cfg(feature = "selftest")]
fn selftest_false() -> i32 {
    0
}

/// Register the built-in self-test cases
#[cfg(feature = "selftest")]
pub fn register_builtin(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register("true", selftest_true, 1)?;
    registry.register("false", selftest_false, 0)?;
    Ok(())
}

/// Run the self-tests in a private registry, reporting to `out`.
///
/// Returns the number of failed self-tests.
#[cfg(feature = "selftest")]
pub fn run_selftest_to<W: Write>(pattern: Option<&str>, out: &mut W) -> Result<u32, RunnerError> {
    writeln!(out, "* Running Unittesting subsystem selftests...")?;

    let mut registry = Registry::new();
    registry.initialize();
    register_builtin(&mut registry)?;

    let result = Runner::new(&registry).run(pattern, out);
    registry.cleanup();
    let failed = result?.failed;

    if failed == 0 {
        writeln!(out, "* Done running Unittesting subsystem selftests...")?;
    } else {
        writeln!(out, "* ERROR running Unittesting subsystem selftests failed...")?;
    }
    out.flush()?;

    Ok(failed)
}

#[cfg(not(feature = "selftest"))]
pub fn run_selftest_to<W: Write>(_pattern: Option<&str>, _out: &mut W) -> Result<u32, RunnerError> {
    Ok(0)
}

/// Run the self-tests, reporting to stdout
pub fn run_selftest(pattern: Option<&str>) -> Result<u32, RunnerError> {
    let stdout = io::stdout();
    run_selftest_to(pattern, &mut stdout.lock())
}
