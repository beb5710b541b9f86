//! Test name selection
//!
//! Compiles an optional filter once per list/run call and matches each
//! candidate name against it with unanchored, case-sensitive search.

use regex::Regex;
use thiserror::Error;
use tracing::warn;

/// Pattern compilation errors
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern \"{pattern}\": {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// How an invalid pattern is handled by list/run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternPolicy {
    /// Report the error and select every test
    #[default]
    Fallback,
    /// Propagate the error and select nothing
    Strict,
}

impl PatternPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            PatternPolicy::Strict
        } else {
            PatternPolicy::Fallback
        }
    }
}

/// Compiled selection for one list/run invocation
#[derive(Clone, Debug)]
pub enum Selector {
    /// No pattern supplied; every name matches
    All,
    /// Names containing a match of the expression
    Pattern(Regex),
}

impl Selector {
    /// Compile an optional pattern.
    ///
    /// `None` and the empty string both select everything without compiling.
    pub fn compile(pattern: Option<&str>) -> Result<Self, PatternError> {
        match pattern {
            None | Some("") => Ok(Selector::All),
            Some(p) => Regex::new(p)
                .map(Selector::Pattern)
                .map_err(|source| PatternError::Invalid {
                    pattern: p.to_string(),
                    source,
                }),
        }
    }

    /// Compile a pattern, resolving a compile failure by `policy`
    pub fn with_policy(pattern: Option<&str>, policy: PatternPolicy) -> Result<Self, PatternError> {
        match Self::compile(pattern) {
            Ok(selector) => Ok(selector),
            Err(e) if policy == PatternPolicy::Fallback => {
                warn!("{}; selecting all tests", e);
                Ok(Selector::All)
            }
            Err(e) => Err(e),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Pattern(re) => re.is_match(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}
