//! Extension trait for `Future<Output = Result<V, X>>`.
//!
//! Provides `.into_outcome()` and friends for futures, mirroring the sync
//! [`IntoOutcome`](crate::traits::IntoOutcome) and
//! [`ResultOutcomeExt`](crate::traits::ResultOutcomeExt) traits.

use core::future::Future;

use crate::types::alloc_type::BoxError;
use crate::types::AnyError;

use super::outcome_future::OutcomeFuture;

/// Extension trait for resolving `Result`-returning futures into outcomes.
///
/// # Examples
///
/// ```rust,no_run
/// use outcome_rail::async_ext::FutureOutcomeExt;
/// use outcome_rail::{AnyError, Outcome};
///
/// async fn fetch_bytes(_url: &str) -> Result<Vec<u8>, std::io::Error> {
///     Err(std::io::Error::other("unreachable host"))
/// }
///
/// async fn fetch(url: &str) -> Outcome<Vec<u8>, AnyError> {
///     fetch_bytes(url).into_any_outcome().await
/// }
/// ```
pub trait FutureOutcomeExt<V, X>: Future<Output = Result<V, X>> + Sized {
    /// Resolves to `Outcome<V, X>`, keeping the error type.
    #[inline]
    fn into_outcome(self) -> OutcomeFuture<Self, fn(X) -> X> {
        OutcomeFuture::new(self, core::convert::identity::<X> as fn(X) -> X)
    }

    /// Resolves to `Outcome<V, AnyError>`, erasing the error type.
    #[inline]
    fn into_any_outcome(self) -> OutcomeFuture<Self, fn(X) -> AnyError>
    where
        X: Into<BoxError>,
    {
        OutcomeFuture::new(self, erase::<X> as fn(X) -> AnyError)
    }

    /// Resolves to `Outcome<V, E>`, converting a failure with `f`.
    ///
    /// `f` is only called when the future resolves to an error.
    #[inline]
    fn map_outcome_error<E, F>(self, f: F) -> OutcomeFuture<Self, F>
    where
        F: FnOnce(X) -> E,
    {
        OutcomeFuture::new(self, f)
    }
}

impl<Fut, V, X> FutureOutcomeExt<V, X> for Fut where Fut: Future<Output = Result<V, X>> {}

fn erase<X: Into<BoxError>>(error: X) -> AnyError {
    AnyError::from_boxed(error.into())
}
