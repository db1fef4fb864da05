//! Result configuration for [`MockFunc`].
//!
//! Every operation here replaces the installed result wholesale; the last
//! one called wins. The shorthands for `()`, `Option` and `Result`
//! outputs only exist when the output type matches.

use super::container::ResultContainer;
use super::mock_func::MockFunc;

impl<Input, Output> MockFunc<Input, Output> {
    /// Compute the output from each call's input.
    ///
    /// ```rust
    /// use mockfunc::mock::MockFunc;
    ///
    /// let double_mock = MockFunc::<u32, u32>::new();
    /// double_mock.returns_with(|x| x * 2);
    ///
    /// assert_eq!(double_mock.call_and_return(21), 42);
    /// ```
    pub fn returns_with<F>(&self, closure: F)
    where
        F: Fn(&Input) -> Output + Send + Sync + 'static,
    {
        self.install(ResultContainer::new(closure));
    }

    /// Always return `value`, whatever the input.
    ///
    /// ```rust
    /// use mockfunc::mock::MockFunc;
    ///
    /// let search_mock = MockFunc::<String, Vec<u32>>::new();
    /// search_mock.returns(vec![1]);
    /// ```
    pub fn returns(&self, value: Output)
    where
        Output: Clone + Send + Sync + 'static,
    {
        self.returns_with(move |_| value.clone());
    }
}

impl<Input> MockFunc<Input, ()> {
    /// Configure a function without a return value.
    ///
    /// A result still has to be set for `()` outputs, otherwise the mock
    /// is not considered configured.
    pub fn returns_unit(&self) {
        self.returns_with(|_| ());
    }
}

impl<Input, T> MockFunc<Input, Option<T>> {
    /// Always return `None`.
    pub fn returns_none(&self) {
        self.returns_with(|_| None);
    }
}

impl<Input, T, E> MockFunc<Input, Result<T, E>> {
    /// Always return `Ok(value)`.
    ///
    /// ```rust
    /// use mockfunc::mock::MockFunc;
    ///
    /// let parse_mock = MockFunc::<String, Result<u8, String>>::new();
    /// parse_mock.succeeds(7);
    ///
    /// assert_eq!(parse_mock.call_and_return("7".into()), Ok(7));
    /// ```
    pub fn succeeds(&self, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.returns_with(move |_| Ok(value.clone()));
    }

    /// Always return `Err(error)`.
    pub fn fails(&self, error: E)
    where
        E: Clone + Send + Sync + 'static,
    {
        self.returns_with(move |_| Err(error.clone()));
    }
}

impl<Input, E> MockFunc<Input, Result<(), E>> {
    /// Always return `Ok(())`.
    pub fn succeeds_unit(&self) {
        self.returns_with(|_| Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum FetchError {
        Offline,
    }

    #[test]
    fn test_returns_ignores_input() {
        let mock = MockFunc::<i32, &str>::new();
        mock.returns("fixed");

        assert_eq!(mock.call_and_return(1), "fixed");
        assert_eq!(mock.call_and_return(2), "fixed");
        assert_eq!(mock.last_output(), "fixed");
    }

    #[test]
    fn test_returns_unit() {
        let mock = MockFunc::<String, ()>::new();
        mock.returns_unit();

        mock.call_and_return("key".to_string());

        assert!(mock.is_configured());
        assert!(mock.try_last_output().is_ok());
    }

    #[test]
    fn test_returns_none() {
        let mock = MockFunc::<u32, Option<String>>::new();
        mock.returns_none();

        assert_eq!(mock.call_and_return(1), None);
    }

    #[test]
    fn test_succeeds_and_fails() {
        let mock = MockFunc::<(), Result<u32, FetchError>>::new();

        mock.succeeds(5);
        assert_eq!(mock.call_and_return_no_args(), Ok(5));

        mock.fails(FetchError::Offline);
        assert_eq!(mock.call_and_return_no_args(), Err(FetchError::Offline));
        assert_eq!(mock.last_output(), Err(FetchError::Offline));
    }

    #[test]
    fn test_succeeds_unit() {
        let mock = MockFunc::<u8, Result<(), FetchError>>::new();
        mock.succeeds_unit();

        assert_eq!(mock.call_and_return(0), Ok(()));
    }

    #[test]
    fn test_last_configuration_wins() {
        let mock = MockFunc::<i32, Option<i32>>::new();

        mock.returns(Some(1));
        mock.returns_none();
        mock.call(0);
        assert_eq!(mock.last_output(), None);

        mock.returns_with(|x| Some(x + 100));
        assert_eq!(mock.last_output(), Some(100));
    }

    #[test]
    fn test_reconfiguring_keeps_history() {
        let mock = MockFunc::<i32, i32>::new();
        mock.returns(1);
        mock.call_and_return(7);

        mock.returns(2);

        assert_eq!(mock.invocations(), vec![7]);
        assert_eq!(mock.last_output(), 2);
    }
}
