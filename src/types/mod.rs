//! Outcome types and utilities.
//!
//! This module provides the [`Outcome`] container, the type-erased
//! [`AnyError`] wrapper and the configuration used to render outcomes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{AnyError, Outcome};
//!
//! let fetched: Outcome<&str, AnyError> = Outcome::failure(AnyError::msg("connection reset"));
//!
//! println!("{}", fetched);
//! // Output: Result(connection reset)
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod any_error;
pub mod outcome;
pub mod outcome_formatter;

pub use alloc_type::BoxError;
pub use any_error::*;
pub use outcome::*;
pub use outcome_formatter::*;

/// SmallVec-backed collection used when gathering failures from many outcomes.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case where a batch fails at most once.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
