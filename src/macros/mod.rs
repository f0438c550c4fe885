//! Ergonomic macros for wrapping fallible code in an [`Outcome`](crate::Outcome).
//!
//! - [`macro@crate::attempt`] - Runs a block in which `?` raises any error type and
//!   catches the raised failure as an [`AnyError`](crate::AnyError).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::attempt;
//!
//! let total = attempt!({
//!     let a: u32 = "40".parse()?;
//!     let b: u32 = "2".parse()?;
//!     Ok(a + b)
//! });
//!
//! assert_eq!(total.into_value(), Some(42));
//! ```

/// Runs a block that may raise any error and captures the result as an
/// `Outcome<_, AnyError>`.
///
/// Inside the block `?` converts every error into a
/// [`BoxError`](crate::BoxError), so failures of unrelated types can be mixed
/// freely. The block must end in `Ok(value)` or `Err(error)`.
///
/// This is shorthand for [`Outcome::from_throwing_any`](crate::Outcome::from_throwing_any)
/// with an inline closure.
///
/// # Syntax
///
/// - `attempt!(expr)` - Wraps a single `Result`-producing expression
/// - `attempt!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::attempt;
///
/// let outcome = attempt!({
///     let port: u16 = "99999".parse()?;
///     Ok(port)
/// });
/// assert!(outcome.error().unwrap().is::<core::num::ParseIntError>());
///
/// let refused = attempt!(Err::<u8, _>("connection refused".into()));
/// assert_eq!(refused.to_string(), "Result(connection refused)");
/// ```
#[macro_export]
macro_rules! attempt {
    ($($body:tt)+) => {
        $crate::Outcome::from_throwing_any(
            || -> ::core::result::Result<_, $crate::BoxError> { $($body)+ },
        )
    };
}
