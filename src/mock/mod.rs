//! Function mocks for hand-written test doubles.
//!
//! This module provides:
//!
//! - [`MockFunc`] - Records calls to one method and returns a configured result
//! - [`MockFuncInvoking`] - Query helpers over a recorded invocation ledger
//! - [`CompletionContainer`] - A stored completion callback
//! - [`CallSite`] - Where a mock was constructed, for diagnostics
//!
//! # Returning values
//!
//! ```rust
//! use mockfunc::mock::MockFunc;
//!
//! let load_mock = MockFunc::<u64, Option<String>>::new();
//! load_mock.returns(Some("cached".to_string()));
//!
//! assert_eq!(load_mock.call_and_return(1), Some("cached".to_string()));
//! assert!(load_mock.was_called_once());
//! ```
//!
//! # Completions
//!
//! Callback-style functions are flattened into synchronous calls: the
//! completion has already run by the time the mocked call returns.
//!
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use mockfunc::mock::MockFunc;
//!
//! let fetch_mock = MockFunc::<String, Result<u16, String>>::new();
//! fetch_mock.succeeds(200);
//!
//! let done = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&done);
//! fetch_mock.call_with_completion("/health".to_string(), move |status| {
//!     assert_eq!(status, Ok(200));
//!     flag.store(true, Ordering::SeqCst);
//! });
//!
//! assert!(done.load(Ordering::SeqCst));
//! ```

mod call_site;
mod container;
mod invoking;
mod mock_func;
mod returns;

pub use call_site::CallSite;
pub use container::CompletionContainer;
pub use invoking::MockFuncInvoking;
pub use mock_func::MockFunc;
