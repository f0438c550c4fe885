//! Type-erased failure wrapper.
//!
//! [`AnyError`] hides the concrete type of a failure behind a single, uniform
//! type so that call sites with heterogeneous failure types can share one
//! [`Outcome`](crate::Outcome) error parameter.
//!
//! Wrapping never nests: handing an `AnyError` (or a boxed error that turns
//! out to be one) to any constructor returns the existing wrapper unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::AnyError;
//!
//! let parse_failure = "x".parse::<u8>().unwrap_err();
//! let once = AnyError::new(parse_failure);
//! let twice = AnyError::new(once);
//!
//! assert!(twice.is::<core::num::ParseIntError>());
//! assert!(!twice.is::<AnyError>());
//! ```

use core::error::Error;
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{Box, BoxError, String};

/// A failure of unknown original type.
///
/// Created from any `core::error::Error + Send + Sync + 'static`. The original
/// value can be recovered with [`downcast`](AnyError::downcast) or inspected with
/// [`downcast_ref`](AnyError::downcast_ref).
pub struct AnyError {
    inner: BoxError,
}

impl AnyError {
    /// Wraps `error`, reusing it as-is when it already is an `AnyError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::AnyError;
    ///
    /// let err = AnyError::new(core::fmt::Error);
    /// assert_eq!(err.to_string(), "an error occurred when formatting an argument");
    /// ```
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps an already boxed failure.
    ///
    /// The box is downcast first; if it holds an `AnyError` that wrapper is
    /// unboxed and returned instead of being wrapped a second time.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<AnyError>() {
            Ok(existing) => *existing,
            Err(inner) => Self { inner },
        }
    }

    /// Creates a failure that only carries a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::AnyError;
    ///
    /// let err = AnyError::msg("quota exceeded");
    /// assert_eq!(err.to_string(), "quota exceeded");
    /// ```
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self { inner: Box::new(MessageError(message.into())) }
    }

    /// Returns `true` if the wrapped failure is of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: Error + 'static,
    {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped failure as `T`, if that is its concrete type.
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.inner.downcast_ref::<T>()
    }

    /// Recovers the original failure, or gives the wrapper back on a type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::AnyError;
    ///
    /// let err = AnyError::new(core::fmt::Error);
    /// let err = err.downcast::<core::num::ParseIntError>().unwrap_err();
    /// assert!(err.downcast::<core::fmt::Error>().is_ok());
    /// ```
    pub fn downcast<T>(self) -> Result<T, Self>
    where
        T: Error + 'static,
    {
        self.inner.downcast::<T>().map(|boxed| *boxed).map_err(|inner| Self { inner })
    }

    /// Borrows the wrapped failure as a trait object.
    #[inline]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Consumes the wrapper, returning the boxed failure.
    #[inline]
    pub fn into_boxed(self) -> BoxError {
        self.inner
    }

    /// Iterates over the wrapped failure followed by each of its sources.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let root: &(dyn Error + 'static) = &*self.inner;
        core::iter::successors(Some(root), |err| (*err).source())
    }
}

impl Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyError").field(&self.inner).finish()
    }
}

impl Display for AnyError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Error for AnyError {
    /// Delegates to the wrapped failure so the wrapper stays invisible in chains.
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl From<BoxError> for AnyError {
    #[inline]
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

impl From<&str> for AnyError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for AnyError {
    #[inline]
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

struct MessageError(String);

impl Debug for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for MessageError {}
