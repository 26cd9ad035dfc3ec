//! Error types for weekcal.
//!
//! All fatal failures in the workspace — invalid dates, malformed input
//! lines, violated construction preconditions — funnel into a single
//! `thiserror`-derived enum.  The `ensure!` and `fail!` macros cover the
//! common guard-clause patterns.
//!
//! Recoverable anomalies (an annotation that does not land on the day it
//! claims) are *not* errors; they travel as diagnostic values defined in
//! `wcal-planner`.

use thiserror::Error;

/// The top-level error type used throughout weekcal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (a constructor argument that breaks an
    /// invariant, e.g. a week anchored on a non-Monday).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: out-of-range year, invalid month/day triple.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A source string that does not match its expected format.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout weekcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard clause: return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wcal_core::ensure;
/// fn week_number(n: u8) -> wcal_core::errors::Result<u8> {
///     ensure!((1..=53).contains(&n), "week number {n} out of range [1, 53]");
///     Ok(n)
/// }
/// assert!(week_number(12).is_ok());
/// assert!(week_number(60).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use wcal_core::fail;
/// fn always_err() -> wcal_core::errors::Result<()> {
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
