//! Async extensions for outcome-rail.
//!
//! This module adapts futures that resolve to a `Result` so that they resolve
//! to an [`Outcome`](crate::Outcome) instead. No executor is bundled; the
//! adapters work with any runtime.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::async_ext::FutureOutcomeExt;
//!
//! async fn fetch_profile(id: u64) -> Outcome<Profile, AnyError> {
//!     http_get(id).into_any_outcome().await
//! }
//! ```

mod future_ext;
mod outcome_future;

pub use future_ext::FutureOutcomeExt;
pub use outcome_future::OutcomeFuture;
