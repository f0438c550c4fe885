//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for reporting failed outcomes through the
//! `tracing` ecosystem without interrupting a pipeline: every method hands the
//! outcome back unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::types::Outcome;

/// Extension trait emitting `tracing` events for outcomes.
///
/// Failures are reported at `WARN` with the fields `operation` and `error`;
/// successes, when reported at all, at `DEBUG`.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::Outcome;
///
/// let port = Outcome::from_fallible(|| "http".parse::<u16>())
///     .trace_failure("parse listen port")
///     .recover(8080);
///
/// assert_eq!(port, 8080);
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Logs a failure and passes the outcome through.
    fn trace_failure(self, operation: &str) -> Self;

    /// Logs a failure at `WARN` or a success at `DEBUG` and passes the outcome through.
    fn trace_outcome(self, operation: &str) -> Self;

    /// Logs a failure inside `span`, using the span name as the operation.
    fn in_span(self, span: &Span) -> Self;
}

impl<V, E> OutcomeTraceExt for Outcome<V, E>
where
    E: Display,
{
    fn trace_failure(self, operation: &str) -> Self {
        if let Outcome::Failure(error) = &self {
            tracing::warn!(operation, error = %error, "operation failed");
        }
        self
    }

    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(_) => tracing::debug!(operation, "operation succeeded"),
            Outcome::Failure(error) => {
                tracing::warn!(operation, error = %error, "operation failed")
            },
        }
        self
    }

    fn in_span(self, span: &Span) -> Self {
        let _entered = span.enter();
        self.trace_failure(span_name(span))
    }
}

/// Reports `error` as a failure of `operation` without an outcome at hand.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::trace_error;
///
/// trace_error("flush cache", &"disk full");
/// ```
pub fn trace_error<E: Display + ?Sized>(operation: &str, error: &E) {
    tracing::warn!(operation, error = %error, "operation failed");
}

/// Name of the span, or `"unknown"` for a disabled span.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
