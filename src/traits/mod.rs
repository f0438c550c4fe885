//! Conversion traits for moving values into [`Outcome`](crate::Outcome).
//!
//! - [`IntoOutcome`]: Conversion from `Result` (and `Outcome` itself) into an outcome
//! - [`OptionOutcomeExt`]: Turns `Option` into an outcome with a caller-supplied failure
//! - [`ResultOutcomeExt`]: Erases the failure type of a `Result` into [`AnyError`](crate::AnyError)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<u8, _> = "7".parse::<u8>().into_outcome();
//! assert_eq!(parsed.value(), Some(&7));
//!
//! let header: Option<u8> = None;
//! let missing = header.ok_or_failure("no header");
//! assert_eq!(missing, Outcome::Failure("no header"));
//! ```

pub mod into_outcome;
pub mod result_ext;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
pub use result_ext::ResultOutcomeExt;
