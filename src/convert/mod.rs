//! Conversion helpers between `Result`, nested outcomes and batches of outcomes.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edge
//! of existing `Result`-based code, and to gather the failures of a whole
//! batch instead of stopping at the first one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome::<i32, &str>(Ok(42));
//! assert!(outcome.is_success());
//!
//! let (values, errors) = partition_outcomes(vec![
//!     Outcome::success(1),
//!     Outcome::failure("bad row"),
//!     Outcome::success(3),
//! ]);
//! assert_eq!(values, vec![1, 3]);
//! assert_eq!(errors.as_slice(), &["bad row"]);
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, Outcome};

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome::<u8, &str>(Err("eof")), Outcome::Failure("eof"));
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    result.into()
}

/// Converts an `Outcome` back into a `Result`.
///
/// Equivalent to [`Outcome::dematerialize`].
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.dematerialize()
}

/// Removes one level of nesting from an outcome of outcomes.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten_outcome;
/// use outcome_rail::Outcome;
///
/// let nested: Outcome<Outcome<u8, &str>, &str> = Outcome::success(Outcome::failure("inner"));
/// assert_eq!(flatten_outcome(nested), Outcome::Failure("inner"));
/// ```
#[inline]
pub fn flatten_outcome<V, E>(nested: Outcome<Outcome<V, E>, E>) -> Outcome<V, E> {
    nested.flat_map(|inner| inner)
}

/// Splits a batch of outcomes into its successes and its failures.
///
/// Order is preserved within each side.
pub fn partition_outcomes<V, E, I>(outcomes: I) -> (Vec<V>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorVec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }

    (values, errors)
}

/// Collects every success, or every failure if at least one outcome failed.
///
/// Unlike collecting into `Outcome<Vec<V>, E>`, which stops at the first
/// failure, this walks the whole batch.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_failures;
/// use outcome_rail::Outcome;
///
/// let batch = vec![Outcome::failure("a"), Outcome::success(2), Outcome::failure("b")];
/// let failures = collect_failures(batch).into_error().unwrap();
/// assert_eq!(failures.len(), 2);
/// ```
pub fn collect_failures<V, E, I>(outcomes: I) -> Outcome<Vec<V>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let (values, errors) = partition_outcomes(outcomes);
    if errors.is_empty() {
        Outcome::Success(values)
    } else {
        Outcome::Failure(errors)
    }
}
