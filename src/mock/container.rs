//! Owned value holders for a mock's result strategy and its completions.

use std::fmt;
use std::sync::Arc;

/// Produces a mock's output from its input.
///
/// Exactly one is installed on a [`MockFunc`](super::MockFunc) at a time.
/// Cloning is cheap and shares the underlying closure.
pub(crate) struct ResultContainer<Input, Output> {
    closure: Arc<dyn Fn(&Input) -> Output + Send + Sync>,
}

impl<Input, Output> ResultContainer<Input, Output> {
    pub(crate) fn new<F>(closure: F) -> Self
    where
        F: Fn(&Input) -> Output + Send + Sync + 'static,
    {
        Self {
            closure: Arc::new(closure),
        }
    }

    #[inline]
    pub(crate) fn produce(&self, input: &Input) -> Output {
        (self.closure)(input)
    }
}

impl<Input, Output> Clone for ResultContainer<Input, Output> {
    fn clone(&self) -> Self {
        Self {
            closure: Arc::clone(&self.closure),
        }
    }
}

impl<Input, Output> fmt::Debug for ResultContainer<Input, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultContainer").finish_non_exhaustive()
    }
}

/// A completion callback handed to a completion-style mocked call.
///
/// Calling [`complete`](Self::complete) forwards the output to the
/// original callback on the current thread. The container can be cloned
/// and completed any number of times.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use mockfunc::mock::MockFunc;
///
/// let mock = MockFunc::<u32, u32>::new();
/// mock.returns(7);
/// mock.set_calls_completion_immediately(false);
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let sink = Arc::clone(&seen);
/// mock.call_with_completion(1, move |out| sink.store(out as usize, Ordering::SeqCst));
/// assert_eq!(seen.load(Ordering::SeqCst), 0);
///
/// mock.last_completion().complete(mock.last_output());
/// assert_eq!(seen.load(Ordering::SeqCst), 7);
/// ```
pub struct CompletionContainer<Output> {
    completion: Arc<dyn Fn(Output) + Send + Sync>,
}

impl<Output> CompletionContainer<Output> {
    pub(crate) fn new<F>(completion: F) -> Self
    where
        F: Fn(Output) + Send + Sync + 'static,
    {
        Self {
            completion: Arc::new(completion),
        }
    }

    /// Invoke the wrapped callback with `output`.
    #[inline]
    pub fn complete(&self, output: Output) {
        (self.completion)(output);
    }
}

impl<Output> Clone for CompletionContainer<Output> {
    fn clone(&self) -> Self {
        Self {
            completion: Arc::clone(&self.completion),
        }
    }
}

impl<Output> fmt::Debug for CompletionContainer<Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionContainer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_result_container_sees_input() {
        let result = ResultContainer::new(|x: &i32| x * 3);

        assert_eq!(result.produce(&2), 6);
        assert_eq!(result.clone().produce(&5), 15);
    }

    #[test]
    fn test_completion_forwards_every_time() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let completion = CompletionContainer::new(move |v: &'static str| sink.lock().push(v));

        completion.complete("first");
        completion.clone().complete("second");

        assert_eq!(*seen.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_debug() {
        let completion = CompletionContainer::new(|_: ()| {});
        assert!(format!("{completion:?}").contains("CompletionContainer"));
    }
}
