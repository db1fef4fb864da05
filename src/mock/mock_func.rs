// Allow must_use_candidate since mock methods often have useful side effects,
// and inputs are taken by value to mirror the mocked signature
#![allow(clippy::must_use_candidate, clippy::needless_pass_by_value)]

//! The record-and-return mock container.
//!
//! # Example
//!
//! ```rust
//! use mockfunc::mock::MockFunc;
//!
//! let fetch_mock = MockFunc::<(String, i32), bool>::new();
//! fetch_mock.returns(true);
//!
//! let output = fetch_mock.call_and_return(("https://x".to_string(), 7));
//!
//! assert!(output);
//! assert!(fetch_mock.was_called_once());
//! assert_eq!(fetch_mock.last_input(), ("https://x".to_string(), 7));
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use parking_lot::Mutex;

use super::call_site::CallSite;
use super::container::{CompletionContainer, ResultContainer};
use super::invoking::MockFuncInvoking;
use crate::error::{Error, Ledger, OrRaise, Result};

type Observer<Input> = Arc<dyn Fn(&Input) + Send + Sync>;

struct MockState<Input, Output> {
    /// Required before any output is produced.
    result: Option<ResultContainer<Input, Output>>,
    /// Notified after each recorded call.
    did_call: Observer<Input>,
    invocations: Vec<Input>,
    completions: Vec<CompletionContainer<Output>>,
    calls_completion_immediately: bool,
}

/// A stand-in for a single function signature.
///
/// Test doubles own one `MockFunc` per mocked method and forward the
/// method body to [`call`](Self::call),
/// [`call_and_return`](Self::call_and_return) or
/// [`call_with_completion`](Self::call_with_completion). Multi-argument
/// methods record a tuple.
///
/// Everything runs synchronously on the caller's thread. Completion
/// callbacks are invoked before `call_with_completion` returns (unless
/// immediate dispatch is turned off), so assertions written right after
/// the call already observe their effects.
///
/// Misuse is fatal: asking for an output before configuring a result, or
/// reading `last_*` before any call, panics with a message naming where
/// the mock was constructed.
///
/// Recording a call requires `Input: Clone`: the ledger keeps one copy and
/// the [`when_called`](Self::when_called) observer is handed a reference to
/// the other after the lock is released. A method whose arguments are not
/// `Clone` needs to record something that is, such as an id or a
/// formatted string, rather than the argument itself.
///
/// ```rust
/// use mockfunc::mock::MockFunc;
///
/// trait Store {
///     fn remove(&self, key: &str);
/// }
///
/// struct MockStore {
///     remove_mock: MockFunc<String, ()>,
/// }
///
/// impl Store for MockStore {
///     fn remove(&self, key: &str) {
///         self.remove_mock.call_and_return(key.to_string())
///     }
/// }
///
/// let store = MockStore { remove_mock: MockFunc::named("remove_mock") };
/// store.remove_mock.returns_unit();
///
/// store.remove("session");
/// assert_eq!(store.remove_mock.last_input(), "session");
/// ```
pub struct MockFunc<Input, Output> {
    site: CallSite,
    state: Mutex<MockState<Input, Output>>,
}

impl<Input, Output> MockFunc<Input, Output> {
    /// Create an unconfigured mock, remembering the caller's location.
    #[must_use]
    #[track_caller]
    pub fn new() -> Self {
        Self::with_site(CallSite::here())
    }

    /// Create an unconfigured mock with a readable name for diagnostics.
    ///
    /// ```rust
    /// use mockfunc::mock::MockFunc;
    ///
    /// let search_mock = MockFunc::<String, Vec<u32>>::named("search_mock");
    /// assert_eq!(search_mock.call_site().name(), Some("search_mock"));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn named(name: &'static str) -> Self {
        Self::with_site(CallSite::named(name))
    }

    fn with_site(site: CallSite) -> Self {
        Self {
            site,
            state: Mutex::new(MockState {
                result: None,
                did_call: Arc::new(|_: &Input| {}),
                invocations: Vec::new(),
                completions: Vec::new(),
                calls_completion_immediately: true,
            }),
        }
    }

    /// Where this mock was constructed.
    pub fn call_site(&self) -> CallSite {
        self.site
    }

    /// How many times the function was called.
    pub fn invocation_count(&self) -> usize {
        MockFuncInvoking::invocation_count(self)
    }

    /// `true` if the function was called at least once.
    pub fn was_called(&self) -> bool {
        MockFuncInvoking::was_called(self)
    }

    /// `true` if the function was called exactly once.
    pub fn was_called_once(&self) -> bool {
        MockFuncInvoking::was_called_once(self)
    }

    /// `true` if the function was called exactly `n` times.
    pub fn was_called_times(&self, n: usize) -> bool {
        MockFuncInvoking::was_called_times(self, n)
    }

    /// `true` once a result has been configured.
    pub fn is_configured(&self) -> bool {
        self.state.lock().result.is_some()
    }

    /// Whether completions run as soon as they are recorded. Defaults to `true`.
    pub fn calls_completion_immediately(&self) -> bool {
        self.state.lock().calls_completion_immediately
    }

    /// Choose between running completions immediately or only storing them.
    ///
    /// With `false`, completion-style calls leave the callback in
    /// [`completions`](Self::completions) and the test dispatches it
    /// through [`last_completion`](Self::last_completion).
    pub fn set_calls_completion_immediately(&self, immediately: bool) {
        self.state.lock().calls_completion_immediately = immediately;
    }

    /// Every completion received so far, in call order.
    pub fn completions(&self) -> Vec<CompletionContainer<Output>> {
        self.state.lock().completions.clone()
    }

    /// The most recent completion, or an error if none was recorded.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInvocationHistory`] when no completion-style call was made.
    pub fn try_last_completion(&self) -> Result<CompletionContainer<Output>> {
        self.state
            .lock()
            .completions
            .last()
            .cloned()
            .ok_or_else(|| Error::empty(self.site, Ledger::Completions))
    }

    /// The most recent completion.
    ///
    /// # Panics
    ///
    /// Panics if no completion-style call was made.
    #[track_caller]
    pub fn last_completion(&self) -> CompletionContainer<Output> {
        self.try_last_completion().or_raise()
    }

    /// Get notified whenever the function is called.
    ///
    /// Replaces any previous observer. The observer runs after the input
    /// is recorded, so it already sees the new call in the ledger.
    pub fn when_called<F>(&self, closure: F)
    where
        F: Fn(&Input) + Send + Sync + 'static,
    {
        self.state.lock().did_call = Arc::new(closure);
    }

    pub(super) fn install(&self, result: ResultContainer<Input, Output>) {
        tracing::debug!(target: "mockfunc", site = %self.site, "result configured");
        self.state.lock().result = Some(result);
    }

    fn try_output_for(&self, input: &Input) -> Result<Output> {
        let result = self
            .state
            .lock()
            .result
            .clone()
            .ok_or_else(|| Error::unconfigured(self.site))?;
        Ok(result.produce(input))
    }
}

impl<Input: Clone, Output> MockFunc<Input, Output> {
    /// Every input received so far, in call order.
    pub fn invocations(&self) -> Vec<Input> {
        MockFuncInvoking::invocations(self)
    }

    /// `true` if any recorded input equals `expected`.
    pub fn was_called_with(&self, expected: &Input) -> bool
    where
        Input: PartialEq,
    {
        MockFuncInvoking::was_called_with(self, expected)
    }

    /// The most recent input, or an error if nothing was recorded.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInvocationHistory`] when the function was never called.
    pub fn try_last_input(&self) -> Result<Input> {
        MockFuncInvoking::try_last_input(self)
    }

    /// The most recent input.
    ///
    /// # Panics
    ///
    /// Panics if the function was never called.
    #[track_caller]
    pub fn last_input(&self) -> Input {
        MockFuncInvoking::last_input(self)
    }

    /// The configured result applied to the most recent input.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInvocationHistory`] when the function was never
    /// called, then [`Error::UnconfiguredResult`] when no result is set.
    pub fn try_last_output(&self) -> Result<Output> {
        let input = self.try_last_input()?;
        self.try_output_for(&input)
    }

    /// The configured result applied to the most recent input.
    ///
    /// # Panics
    ///
    /// Panics if the function was never called or no result is configured.
    #[track_caller]
    pub fn last_output(&self) -> Output {
        self.try_last_output().or_raise()
    }

    /// Record a call without producing an output.
    ///
    /// Appends `input` to the ledger and notifies the
    /// [`when_called`](Self::when_called) observer.
    pub fn call(&self, input: Input) {
        self.record(&input);
    }

    /// Record a call and return the configured result for it.
    ///
    /// # Panics
    ///
    /// Panics if no result was configured. The call is still recorded.
    #[track_caller]
    pub fn call_and_return(&self, input: Input) -> Output {
        self.record(&input);
        self.try_output_for(&input).or_raise()
    }

    /// Record a call to a callback-style function.
    ///
    /// The completion is stored in [`completions`](Self::completions). If
    /// [`calls_completion_immediately`](Self::calls_completion_immediately)
    /// is set, it is also invoked with the configured result before this
    /// method returns.
    ///
    /// # Panics
    ///
    /// Panics if the completion runs immediately and no result was configured.
    #[track_caller]
    pub fn call_with_completion<F>(&self, input: Input, completion: F)
    where
        F: Fn(Output) + Send + Sync + 'static,
    {
        self.record(&input);

        let completion = CompletionContainer::new(completion);
        let immediately = {
            let mut state = self.state.lock();
            state.completions.push(completion.clone());
            state.calls_completion_immediately
        };

        tracing::trace!(target: "mockfunc", site = %self.site, immediately, "completion stored");
        if immediately {
            completion.complete(self.try_output_for(&input).or_raise());
        }
    }

    fn record(&self, input: &Input) {
        let (did_call, count) = {
            let mut state = self.state.lock();
            state.invocations.push(input.clone());
            (Arc::clone(&state.did_call), state.invocations.len())
        };
        tracing::trace!(target: "mockfunc", site = %self.site, count, "call recorded");
        did_call(input);
    }
}

impl<Output> MockFunc<(), Output> {
    /// Shorthand for `call(())`.
    pub fn call_no_args(&self) {
        self.call(());
    }

    /// Shorthand for `call_and_return(())`.
    ///
    /// # Panics
    ///
    /// Panics if no result was configured.
    #[track_caller]
    pub fn call_and_return_no_args(&self) -> Output {
        self.call_and_return(())
    }
}

impl<Input, Output> Default for MockFunc<Input, Output> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl<Input, Output> MockFuncInvoking for MockFunc<Input, Output> {
    type Input = Input;

    fn call_site(&self) -> CallSite {
        self.site
    }

    fn invocation_count(&self) -> usize {
        self.state.lock().invocations.len()
    }

    fn invocations(&self) -> Vec<Input>
    where
        Input: Clone,
    {
        self.state.lock().invocations.clone()
    }
}

impl<Input: Debug, Output> Debug for MockFunc<Input, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MockFunc")
            .field("site", &self.site)
            .field("call_count", &state.invocations.len())
            .field("invocations", &state.invocations)
            .field("configured", &state.result.is_some())
            .field("completions", &state.completions.len())
            .finish()
    }
}
