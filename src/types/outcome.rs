//! The two-variant success/failure container.
//!
//! [`Outcome<V, E>`] holds exactly one of a success payload `V` or a failure
//! payload `E`. It is immutable: every combinator consumes the receiver and
//! returns a new value.
//!
//! Fallible closures are plain `Result`-returning closures. An `Err` returned
//! from such a closure is a *raised* failure; an `Outcome::Failure` is a
//! failure kept as data. Only the constructors and combinators documented as
//! catching a raised failure turn one into the other.

use core::error::Error;
use core::fmt::{self, Display};

use crate::types::alloc_type::{BoxError, String};
use crate::types::any_error::AnyError;
use crate::types::outcome_formatter::OutcomeFormatter;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of an operation that can fail with a typed error.
///
/// # Serde Support
///
/// With the `serde` feature `Outcome` serializes externally tagged, e.g.
/// `{"Success":42}` or `{"Failure":"timeout"}`.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The failure type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let err = Outcome::<i32, &str>::failure("timeout");
/// assert!(err.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs `body`, keeping its failure as data.
    ///
    /// The closure can only raise `E`, so every failure it produces lands in
    /// [`Outcome::Failure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_fallible(|| "12".parse::<u8>());
    /// assert_eq!(outcome, Outcome::Success(12));
    /// ```
    #[inline]
    pub fn from_fallible<F>(body: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        body().into()
    }

    /// Runs `body`, catching only failures of type `E`.
    ///
    /// A raised failure that downcasts to `E` becomes [`Outcome::Failure`].
    /// A failure of any other type is not convertible to `E` and is handed
    /// back untouched in the outer `Err`, so it keeps propagating with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::ParseIntError;
    /// use outcome_rail::{BoxError, Outcome};
    ///
    /// let caught = Outcome::<u8, ParseIntError>::from_throwing(|| Ok("x".parse::<u8>()?));
    /// assert!(caught.unwrap().is_failure());
    ///
    /// let escaped = Outcome::<u8, ParseIntError>::from_throwing(|| Err(BoxError::from(core::fmt::Error)));
    /// assert!(escaped.is_err());
    /// ```
    pub fn from_throwing<F>(body: F) -> Result<Self, BoxError>
    where
        F: FnOnce() -> Result<V, BoxError>,
        E: Error + 'static,
    {
        match body() {
            Ok(value) => Ok(Self::Success(value)),
            Err(raised) => match raised.downcast::<E>() {
                Ok(error) => Ok(Self::Failure(*error)),
                Err(unrelated) => Err(unrelated),
            },
        }
    }

    /// Collapses an optional value/error pair into an outcome.
    ///
    /// The error takes precedence: if it is present the outcome is a failure
    /// even when a value is present too.
    ///
    /// # Panics
    ///
    /// Panics if both `value` and `error` are `None`. Callers must never hand
    /// over an empty pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let both = Outcome::from_optional_pair(Some(1), Some("late"));
    /// assert_eq!(both, Outcome::Failure("late"));
    ///
    /// let value = Outcome::<_, &str>::from_optional_pair(Some(1), None);
    /// assert_eq!(value, Outcome::Success(1));
    /// ```
    #[track_caller]
    pub fn from_optional_pair(value: Option<V>, error: Option<E>) -> Self {
        match (value, error) {
            (_, Some(error)) => Self::Failure(error),
            (Some(value), None) => Self::Success(value),
            (None, None) => panic!("Outcome::from_optional_pair requires a value or an error"),
        }
    }

    /// Creates a success from `Some`, or a failure carrying `fail_with` from `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let missing: Option<u32> = None;
    /// assert_eq!(Outcome::from_option(missing, "no id"), Outcome::Failure("no id"));
    /// ```
    #[inline]
    pub fn from_option(value: Option<V>, fail_with: E) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(fail_with),
        }
    }

    /// Returns `true` for `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success payload, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, keeping the success payload.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, keeping the failure payload.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<V, E>` into `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success payload, or raises the stored error.
    ///
    /// This is the bridge back into `?`-based propagation.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<u8, &str>::success(3).dematerialize(), Ok(3));
    /// assert_eq!(Outcome::<u8, &str>::failure("gone").dematerialize(), Err("gone"));
    /// ```
    #[inline]
    pub fn dematerialize(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success payload with a transform that may fail.
    ///
    /// A failure raised by `transform` must be convertible into `E`; it
    /// becomes the new [`Outcome::Failure`]. On a failed receiver the
    /// transform is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed: Outcome<u8, String> =
    ///     Outcome::success("300").try_map(|s: &str| s.parse::<u8>().map_err(|e| e.to_string()));
    /// assert!(parsed.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, X, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Result<U, X>,
        X: Into<E>,
    {
        match self {
            Self::Success(value) => match transform(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(raised) => Outcome::Failure(raised.into()),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success payload, re-raising whatever `transform` raises.
    ///
    /// The transform's own failure type passes through the outer `Err`
    /// unchanged; the stored error of a failed receiver stays in the inner
    /// outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let raised = Outcome::<&str, &str>::success("x").map_raising(|s| s.parse::<u8>());
    /// assert!(raised.is_err());
    ///
    /// let kept = Outcome::<&str, &str>::failure("offline").map_raising(|s| s.parse::<u8>());
    /// assert_eq!(kept, Ok(Outcome::Failure("offline")));
    /// ```
    #[inline]
    pub fn map_raising<U, X, F>(self, transform: F) -> Result<Outcome<U, E>, X>
    where
        F: FnOnce(V) -> Result<U, X>,
    {
        match self {
            Self::Success(value) => transform(value).map(Outcome::Success),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Chains a step that itself produces an outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(n: u32) -> Outcome<u32, &'static str> {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::Success(2));
    /// assert_eq!(Outcome::success(6).flat_map(half).flat_map(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let coded = Outcome::<(), u16>::failure(404).map_error(|code| format!("HTTP {}", code));
    /// assert_eq!(coded, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, transform: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    /// Maps the failure payload with a transform that may itself fail.
    ///
    /// A failure raised by `transform` passes through the outer `Err`
    /// unchanged. On a successful receiver the transform is never invoked.
    #[inline]
    pub fn map_error_raising<E2, X, F>(self, transform: F) -> Result<Outcome<V, E2>, X>
    where
        F: FnOnce(E) -> Result<E2, X>,
    {
        match self {
            Self::Success(value) => Ok(Outcome::Success(value)),
            Self::Failure(error) => transform(error).map(Outcome::Failure),
        }
    }

    /// Reduces the outcome with one handler per variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let status = Outcome::<u8, &str>::failure("denied").fold(|_| 200, |_| 403);
    /// assert_eq!(status, 403);
    /// ```
    #[inline]
    pub fn fold<T, S, F>(self, if_success: S, if_failure: F) -> T
    where
        S: FnOnce(V) -> T,
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => if_success(value),
            Self::Failure(error) => if_failure(error),
        }
    }

    /// Maps both variants at once.
    #[inline]
    pub fn bimap<U, E2, S, F>(self, success_f: S, failure_f: F) -> Outcome<U, E2>
    where
        S: FnOnce(V) -> U,
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_f(value)),
            Self::Failure(error) => Outcome::Failure(failure_f(error)),
        }
    }

    /// Returns the success payload, or `default` on failure.
    #[inline]
    pub fn recover(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Replaces a failure with the outcome produced by `recovery`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let cached = Outcome::<u8, &str>::failure("miss").recover_with(|_| Outcome::<u8, ()>::success(1));
    /// assert_eq!(cached, Outcome::Success(1));
    /// ```
    #[inline]
    pub fn recover_with<E2, F>(self, recovery: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Pairs two successes; the first failure encountered wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let user = Outcome::<&str, &str>::success("ada");
    /// let quota = Outcome::<u32, &str>::success(5);
    /// assert_eq!(user.zip(quota), Outcome::Success(("ada", 5)));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(V, U), E> {
        match (self, other) {
            (Self::Success(left), Outcome::Success(right)) => Outcome::Success((left, right)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Calls `f` with the success payload and passes the outcome on.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the failure payload and passes the outcome on.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Erases the failure type behind [`AnyError`].
    #[inline]
    pub fn erase(self) -> Outcome<V, AnyError>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_error(AnyError::new)
    }

    /// Renders the outcome with a custom formatter.
    ///
    /// A payload whose `Display` impl fails renders as an empty string; use
    /// [`try_render_with`](Outcome::try_render_with) to observe that failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeFormatConfig};
    ///
    /// let err = Outcome::<u8, &str>::failure("timeout");
    /// assert_eq!(err.render_with(&OutcomeFormatConfig::tagged()), "Result.failure(timeout)");
    /// ```
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        V: Display,
        E: Display,
        F: OutcomeFormatter + ?Sized,
    {
        match self {
            Self::Success(value) => formatter.format(true, value),
            Self::Failure(error) => formatter.format(false, error),
        }
    }

    /// Like [`render_with`](Outcome::render_with), but returns `fmt::Error` when
    /// the payload's `Display` impl fails instead of rendering nothing.
    pub fn try_render_with<F>(&self, formatter: &F) -> Result<String, fmt::Error>
    where
        V: Display,
        E: Display,
        F: OutcomeFormatter + ?Sized,
    {
        match self {
            Self::Success(value) => formatter.try_format(true, value),
            Self::Failure(error) => formatter.try_format(false, error),
        }
    }
}

impl<V> Outcome<V, AnyError> {
    /// Runs `body`, catching a raised failure of any type as [`AnyError`].
    ///
    /// Nothing escapes: whatever `body` raises ends up in
    /// [`Outcome::Failure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_throwing_any(|| "-1".parse::<u32>());
    /// assert!(outcome.error().unwrap().is::<core::num::ParseIntError>());
    /// ```
    pub fn from_throwing_any<X, F>(body: F) -> Self
    where
        F: FnOnce() -> Result<V, X>,
        X: Into<BoxError>,
    {
        match body() {
            Ok(value) => Self::Success(value),
            Err(raised) => Self::Failure(AnyError::from_boxed(raised.into())),
        }
    }

    /// Maps the success payload, catching a raised failure of any type as [`AnyError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AnyError, Outcome};
    ///
    /// let outcome = Outcome::<&str, AnyError>::success("4096").map_any(|s| s.parse::<u8>());
    /// assert!(outcome.is_failure());
    /// ```
    pub fn map_any<U, X, F>(self, transform: F) -> Outcome<U, AnyError>
    where
        F: FnOnce(V) -> Result<U, X>,
        X: Into<BoxError>,
    {
        match self {
            Self::Success(value) => match transform(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(raised) => Outcome::Failure(AnyError::from_boxed(raised.into())),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E> Display for Outcome<V, E>
where
    V: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Result({})", value),
            Self::Failure(error) => write!(f, "Result({})", error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.dematerialize()
    }
}

/// Collects successes into `C`, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<u8>, &str> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::dematerialize).collect::<Result<C, E>>().into()
    }
}
