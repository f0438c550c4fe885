//! Extension trait erasing the failure type of a `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultOutcomeExt;
//!
//! let outcome = std::fs::read_to_string("missing-config.toml").into_any_outcome();
//! assert!(outcome.error().unwrap().is::<std::io::Error>());
//! ```

use crate::types::alloc_type::BoxError;
use crate::types::{AnyError, Outcome};

/// Extension trait for converting a `Result` with any raisable failure into an
/// `Outcome<V, AnyError>`.
///
/// Implemented for every `Result<V, X>` whose failure converts into
/// [`BoxError`], which covers all `Error + Send + Sync + 'static` types as
/// well as `&str` and `String` messages.
pub trait ResultOutcomeExt<V> {
    /// Keeps the success payload and wraps any failure in [`AnyError`].
    fn into_any_outcome(self) -> Outcome<V, AnyError>;

    /// Like [`into_any_outcome`](ResultOutcomeExt::into_any_outcome), then
    /// keeps only failures that downcast to `E`.
    ///
    /// Failures of any other type are returned in the outer `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::ParseIntError;
    /// use outcome_rail::traits::ResultOutcomeExt;
    ///
    /// let typed = "x".parse::<u8>().into_typed_outcome::<ParseIntError>().unwrap();
    /// assert!(typed.is_failure());
    /// ```
    fn into_typed_outcome<E>(self) -> Result<Outcome<V, E>, AnyError>
    where
        E: core::error::Error + 'static;
}

impl<V, X> ResultOutcomeExt<V> for Result<V, X>
where
    X: Into<BoxError>,
{
    #[inline]
    fn into_any_outcome(self) -> Outcome<V, AnyError> {
        Outcome::from_throwing_any(|| self)
    }

    fn into_typed_outcome<E>(self) -> Result<Outcome<V, E>, AnyError>
    where
        E: core::error::Error + 'static,
    {
        match self.into_any_outcome() {
            Outcome::Success(value) => Ok(Outcome::Success(value)),
            Outcome::Failure(error) => error.downcast::<E>().map(Outcome::Failure),
        }
    }
}
