//! Query helpers shared by anything that records invocations.

use crate::error::{Error, Ledger, OrRaise, Result};
use crate::mock::CallSite;

/// Read access to a recorded invocation ledger.
///
/// Implementors provide [`call_site`](Self::call_site),
/// [`invocation_count`](Self::invocation_count) and
/// [`invocations`](Self::invocations); the counting and lookup helpers
/// are derived from them.
pub trait MockFuncInvoking {
    /// The recorded argument type. Multi-argument functions use a tuple.
    type Input;

    /// Where the recorder was constructed.
    fn call_site(&self) -> CallSite;

    /// How many times the function was called.
    fn invocation_count(&self) -> usize;

    /// Every input received so far, in call order.
    fn invocations(&self) -> Vec<Self::Input>
    where
        Self::Input: Clone;

    /// `true` if the function was called at least once.
    fn was_called(&self) -> bool {
        self.invocation_count() > 0
    }

    /// `true` if the function was called exactly once.
    fn was_called_once(&self) -> bool {
        self.invocation_count() == 1
    }

    /// `true` if the function was called exactly `n` times.
    fn was_called_times(&self, n: usize) -> bool {
        self.invocation_count() == n
    }

    /// `true` if any recorded input equals `expected`.
    fn was_called_with(&self, expected: &Self::Input) -> bool
    where
        Self::Input: Clone + PartialEq,
    {
        self.invocations().iter().any(|input| input == expected)
    }

    /// The most recent input, or an error if nothing was recorded.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInvocationHistory`] when the ledger is empty.
    fn try_last_input(&self) -> Result<Self::Input>
    where
        Self::Input: Clone,
    {
        self.invocations()
            .pop()
            .ok_or_else(|| Error::empty(self.call_site(), Ledger::Invocations))
    }

    /// The most recent input.
    ///
    /// # Panics
    ///
    /// Panics if the function was never called.
    #[track_caller]
    fn last_input(&self) -> Self::Input
    where
        Self::Input: Clone,
    {
        self.try_last_input().or_raise()
    }
}
