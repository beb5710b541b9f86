//! Test descriptor
//!
//! One registered test: a name, a callable body and the result it must return.

use std::fmt;

/// A test body: runs once and returns an integer result code
pub trait Runnable {
    fn run(&self) -> i32;
}

impl<F> Runnable for F
where
    F: Fn() -> i32,
{
    fn run(&self) -> i32 {
        self()
    }
}

/// Registered test entry
pub struct TestDescriptor {
    name: String,
    callable: Box<dyn Runnable>,
    expected: i32,
}

impl TestDescriptor {
    pub(crate) fn new(name: String, callable: Box<dyn Runnable>, expected: i32) -> Self {
        Self {
            name,
            callable,
            expected,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected(&self) -> i32 {
        self.expected
    }

    /// Invoke the test body once, synchronously
    pub fn invoke(&self) -> i32 {
        self.callable.run()
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
