//! Error definitions
//!
//! This module provides error types for mockfunc.
//!
//! Both errors describe a mistake in test setup rather than a runtime
//! condition. The panicking queries on [`MockFunc`](crate::mock::MockFunc)
//! abort the test with the error text; the `try_*` queries hand it back as
//! a value instead.

use thiserror::Error;

use crate::mock::CallSite;

/// Which ledger a query tried to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ledger {
    /// The recorded inputs.
    Invocations,
    /// The stored completion callbacks.
    Completions,
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invocations => write!(f, "invocations"),
            Self::Completions => write!(f, "completions"),
        }
    }
}

/// Main error type for mockfunc
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An output was requested before any result was configured.
    #[error("You must provide a result handler before using MockFunc instantiated at {site}")]
    UnconfiguredResult {
        /// Where the mock was constructed.
        site: CallSite,
    },

    /// A `last_*` query ran against an empty ledger.
    #[error("No {ledger} recorded yet on MockFunc instantiated at {site}")]
    EmptyInvocationHistory {
        /// Where the mock was constructed.
        site: CallSite,
        /// The ledger that was empty.
        ledger: Ledger,
    },
}

impl Error {
    /// Create an unconfigured result error.
    #[must_use]
    pub fn unconfigured(site: CallSite) -> Self {
        Self::UnconfiguredResult { site }
    }

    /// Create an empty history error for the given ledger.
    #[must_use]
    pub fn empty(site: CallSite, ledger: Ledger) -> Self {
        Self::EmptyInvocationHistory { site, ledger }
    }

    /// Abort the current test with this error.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Turns a query result into its value or a test-aborting panic.
pub(crate) trait OrRaise<T> {
    fn or_raise(self) -> T;
}

impl<T> OrRaise<T> for Result<T> {
    #[track_caller]
    fn or_raise(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }
}
