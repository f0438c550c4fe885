use crate::types::Outcome;

/// Converts a type into an [`Outcome`].
///
/// # Type Parameters
///
/// * `V` - The success value type of the produced outcome
/// * `E` - The failure type of the produced outcome
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::Outcome;
///
/// let result: Result<i32, &str> = Err("refused");
/// assert_eq!(result.into_outcome(), Outcome::Failure("refused"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an `Outcome`",
    label = "this type does not implement `IntoOutcome`",
    note = "wrap fallible code in `Outcome::from_fallible` or `Outcome::from_throwing_any` instead"
)]
pub trait IntoOutcome<V, E> {
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self.into()
    }
}

impl<V, E> IntoOutcome<V, E> for Outcome<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}

/// Extension trait turning `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<V> {
    /// `Some` becomes a success; `None` becomes a failure carrying `error`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E>;

    /// Like [`ok_or_failure`](OptionOutcomeExt::ok_or_failure), building the error lazily.
    fn ok_or_failure_with<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E;
}

impl<V> OptionOutcomeExt<V> for Option<V> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E> {
        Outcome::from_option(self, error)
    }

    #[inline]
    fn ok_or_failure_with<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}
