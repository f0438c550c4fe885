//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success or Failure
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::success("21")
//!     .try_map(|s: &str| s.parse::<i32>().map_err(|e| e.to_string()))
//!     .map(|n| n * 2);
//!
//! assert_eq!(parsed, Outcome::Success(42));
//! assert_eq!(parsed.to_string(), "Result(42)");
//! ```
//!
//! ## Bridging back into `?`
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn load() -> Result<u8, &'static str> {
//!     let outcome: Outcome<u8, &'static str> = Outcome::failure("disk offline");
//!     let value = outcome.dematerialize()?;
//!     Ok(value)
//! }
//!
//! assert_eq!(load(), Err("disk offline"));
//! ```
//!
//! ## Type-erased failures
//!
//! ```
//! use outcome_rail::{AnyError, Outcome};
//!
//! let outcome: Outcome<u16, AnyError> = Outcome::from_throwing_any(|| "70000".parse::<u16>());
//!
//! let error = outcome.into_error().unwrap();
//! assert!(error.is::<core::num::ParseIntError>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-standing conversions between `Result`, `Option` and `Outcome`
pub mod convert;
/// Macros for wrapping fallible blocks
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits into `Outcome`
pub mod traits;
/// `Outcome`, `AnyError` and rendering configuration
pub mod types;

/// Async adapters resolving futures into outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration for failed outcomes (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{
    outcome_formatter::{OutcomeFormatConfig, OutcomeFormatter},
    AnyError, BoxError, ErrorVec, Outcome,
};
