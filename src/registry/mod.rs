//! Test registry
//!
//! Ordered, append-only collection of test descriptors with an explicit
//! lifecycle: construct, populate with [`Registry::register`], hand to a
//! runner, then [`Registry::cleanup`] (or drop).

mod descriptor;

pub use descriptor::{Runnable, TestDescriptor};

use std::collections::TryReserveError;
use thiserror::Error;
use tracing::{debug, error};

/// Registration errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to allocate test descriptor for '{name}': {source}")]
    Allocation {
        name: String,
        #[source]
        source: TryReserveError,
    },

    #[error("Test name must not be empty")]
    EmptyName,
}

/// Ordered collection of registered tests
#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<TestDescriptor>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// Reset to empty, discarding any registered tests
    pub fn initialize(&mut self) {
        self.tests = Vec::new();
    }

    /// Append a test to the tail of the registry.
    ///
    /// On failure the registry is left unchanged and the test is not
    /// registered; the caller decides whether that is fatal.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        callable: F,
        expected: i32,
    ) -> Result<(), RegistryError>
    where
        F: Runnable + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            error!("Refusing to register test with empty name");
            return Err(RegistryError::EmptyName);
        }

        if let Err(source) = self.tests.try_reserve(1) {
            error!("Failed to allocate test descriptor for {}: {}", name, source);
            return Err(RegistryError::Allocation { name, source });
        }

        debug!("Registered test {} (expects {})", name, expected);
        self.tests
            .push(TestDescriptor::new(name, Box::new(callable), expected));
        Ok(())
    }

    /// Release every descriptor and reset to empty
    pub fn cleanup(&mut self) {
        if !self.tests.is_empty() {
            debug!("Releasing {} registered tests", self.tests.len());
        }
        self.tests.clear();
        self.tests.shrink_to_fit();
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, TestDescriptor> {
        self.tests.iter()
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tests.iter().map(TestDescriptor::name).collect()
    }
}
