//! # mathcalc-core
//!
//! Arbitrary-precision engine for integer power, Fibonacci and factorial,
//! each memoized in a bounded thread-safe LRU cache, plus the request and
//! record types and the computation facade that the HTTP API and CLI call.

pub mod cache;
pub mod constants;
pub mod engine;
pub mod error;
pub mod facade;
pub mod factorial;
pub mod fastdoubling;
pub mod power;
pub mod record;
pub mod request;

// Re-exports
pub use cache::MemoCache;
pub use engine::Engine;
pub use error::{ComputeError, EngineError};
pub use facade::compute;
pub use record::ResultRecord;
pub use request::{ComputeRequest, OpKind};

use num_bigint::BigInt;

/// Compute F(n) using fast doubling, without caching.
///
/// This is a convenience function for simple use cases. Callers that issue
/// repeated requests should go through [`Engine`] to get memoization.
///
/// # Example
/// ```
/// assert_eq!(mathcalc_core::fibonacci(10).to_string(), "55");
/// assert_eq!(mathcalc_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigInt {
    BigInt::from(fastdoubling::fibonacci(n))
}
