//! A typed result algebra.
//!
//! An [`Outcome`] is either a [`Success`] holding a value or a [`Failure`]
//! holding an error. Fallible steps become ordinary values that compose
//! through a small set of combinators instead of unwinding the stack.
//!
//! # Core Types
//!
//! * [`Outcome`] - Either a success or a failure
//! * [`Success`] - A success on its own, with no error slot
//! * [`Failure`] - A failure on its own, with no value slot
//! * [`Caught`] - The opaque error captured by [`try_catch`]
//!
//! # Construction
//!
//! * [`success`] - Wrap a known-good value
//! * [`failure`] - Wrap a known error
//! * [`try_catch`] - Run a closure, capturing any panic as a failure
//!
//! # Validation
//!
//! * [`Check`] - Validate individual outcomes
//! * [`Compare`] - Compare two outcomes
//! * [`Config`] - Configuration for validation behavior
//!
//! # Example
//!
//! ```rust
//! use upshot_result::{failure, success, Outcome};
//!
//! let outcome = success(10)
//!     .map(|x| x + 1)
//!     .into_outcome::<&str>()
//!     .flat_map(|x| {
//!         if x > 0 {
//!             Outcome::success(x)
//!         } else {
//!             Outcome::failure("neg")
//!         }
//!     });
//! assert_eq!(outcome.value(), Some(&11));
//!
//! let message = failure("io-error")
//!     .into_outcome::<String>()
//!     .map_error(|e| format!("wrapped: {}", e))
//!     .match_with(|v| v, |e| e);
//! assert_eq!(message, "wrapped: io-error");
//! ```

pub mod check;
mod combinators;
pub mod compare;
pub mod config;
pub mod construct;
pub mod types;

pub use {
    check::Check,
    compare::Compare,
    config::Config,
    construct::{failure, success, try_catch},
    types::{Failure, Outcome, Settled, Success},
    upshot_error::error::Caught,
};
