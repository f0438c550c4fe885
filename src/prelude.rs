//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`]
//! - **Types**: [`Outcome`], [`AnyError`], [`BoxError`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`], [`ResultOutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn read_port(raw: &str) -> AnyOutcome<u16> {
//!     raw.trim().parse::<u16>().into_any_outcome()
//! }
//!
//! assert_eq!(read_port(" 8080 ").into_value(), Some(8080));
//! assert!(read_port("http").is_failure());
//! ```

// Macros
pub use crate::attempt;

// Core types
pub use crate::types::{AnyError, BoxError, Outcome};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt, ResultOutcomeExt};

/// Outcome whose failure type has been erased.
///
/// This is the recommended return type at boundaries that merge failures of
/// several unrelated types.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// fn load(path: &str) -> AnyOutcome<String> {
///     std::fs::read_to_string(path).into_any_outcome()
/// }
///
/// assert!(load("/definitely/not/here").is_failure());
/// ```
pub type AnyOutcome<V> = Outcome<V, AnyError>;
