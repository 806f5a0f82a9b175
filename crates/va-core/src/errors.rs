//! Error types for volarb-rs.
//!
//! The library is a pure value/computation layer: every failure is a
//! synchronous `Result` at the call site, with no logging, retries, or
//! partial recovery.  The `ensure!` and `fail!` macros are the convenience
//! forms used by the validated constructors.

use thiserror::Error;

/// The top-level error type used throughout volarb-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (maps to `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// A model parameter violated its documented bound (maps to `ensure!`).
    ///
    /// The message names the offending field and the bound, e.g.
    /// `"vol-of-variance xi must be positive, got -0.3"`.
    #[error("invalid parameter: {0}")]
    Parameter(String),
}

/// Shorthand `Result` type used throughout volarb-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a constructor precondition.
///
/// Returns `Err(Error::Parameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use va_core::{ensure, errors::Error};
/// fn positive(x: f64) -> va_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Parameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Abort with a runtime error.
///
/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use va_core::{fail, errors::Error};
/// fn always_err() -> va_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
