//! Error types for onleave-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below. Calendar look-ups that find
//! nothing are *not* errors: they surface as `Ok(None)`. An `Err` always
//! means the caller broke a contract (bad country, year out of range, date
//! arithmetic leaving the representable range).
//!
//! The `ensure!`, `ensure_post!` and `fail!` macros keep the checks terse.

use thiserror::Error;

/// The top-level error type used throughout onleave-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated by the caller.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated by the callee.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// An argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout onleave-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use ol_core::{ensure, errors::Error};
/// fn check_country(country: &str) -> ol_core::errors::Result<&str> {
///     ensure!(!country.trim().is_empty(), "country must not be blank");
///     Ok(country)
/// }
/// assert!(check_country("IE").is_ok());
/// assert_eq!(
///     check_country(" "),
///     Err(Error::Precondition("country must not be blank".into()))
/// );
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

/// Return `Err(Error::Postcondition(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use ol_core::ensure_post;
/// fn months() -> ol_core::errors::Result<Vec<u8>> {
///     let months: Vec<u8> = (1..=12).collect();
///     ensure_post!(months.len() == 12, "expected 12 months, got {}", months.len());
///     Ok(months)
/// }
/// assert!(months().is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ol_core::fail;
/// fn always_err() -> ol_core::errors::Result<()> {
///     fail!("no calendar configured");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
