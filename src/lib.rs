//! # mockfunc
//!
//! > Record-and-return function mocks for hand-written test doubles
//!
//! **mockfunc** gives each mocked method a [`MockFunc`](mock::MockFunc):
//! it records every input, returns whatever the test configured, and runs
//! completion callbacks synchronously so callback-based APIs can be
//! asserted on without waiting.
//!
//! ## Quick Start
//!
//! ```rust
//! use mockfunc::prelude::*;
//!
//! trait Loader {
//!     fn load(&self, url: &str, id: i32) -> bool;
//! }
//!
//! struct MockLoader {
//!     load_mock: MockFunc<(String, i32), bool>,
//! }
//!
//! impl Loader for MockLoader {
//!     fn load(&self, url: &str, id: i32) -> bool {
//!         self.load_mock.call_and_return((url.to_string(), id))
//!     }
//! }
//!
//! let loader = MockLoader { load_mock: MockFunc::new() };
//! loader.load_mock.returns(true);
//!
//! assert!(loader.load("https://x", 7));
//! assert!(loader.load_mock.was_called_once());
//! assert_eq!(loader.load_mock.last_input(), ("https://x".to_string(), 7));
//! ```
//!
//! ## Features
//!
//! - **Invocation ledger** - Every input, in call order
//! - **Result strategies** - Fixed values, `()`, `None`, `Ok`/`Err`, or a closure
//! - **Completions** - Run immediately or stored for the test to trigger
//! - **Loud failures** - Unconfigured mocks panic and name their construction site

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mock;

/// Prelude for convenient imports
///
/// ```rust
/// use mockfunc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mock::{CallSite, CompletionContainer, MockFunc, MockFuncInvoking};
}

// Re-exports
pub use error::{Error, Result};
