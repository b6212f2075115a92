//! The memoizing numeric engine.

use num_bigint::BigInt;
use tracing::debug;

use crate::cache::MemoCache;
use crate::constants::{FACT_CACHE_CAPACITY, FIB_CACHE_CAPACITY, POW_CACHE_CAPACITY};
use crate::error::EngineError;
use crate::{factorial, fastdoubling, power};

/// Arbitrary-precision engine for pow, fib and fact, each wrapped in its
/// own bounded LRU cache.
///
/// The engine is `Send + Sync` and may be called concurrently; the caches
/// are the only shared mutable state and each sits behind its own mutex.
/// Removing the caches never changes observable results, only latency.
pub struct Engine {
    pow_cache: MemoCache<(i64, i64)>,
    fib_cache: MemoCache<i64>,
    fact_cache: MemoCache<i64>,
}

impl Engine {
    /// Engine with the default per-operation cache bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacities(POW_CACHE_CAPACITY, FIB_CACHE_CAPACITY, FACT_CACHE_CAPACITY)
    }

    /// Engine with custom per-operation cache bounds.
    #[must_use]
    pub fn with_capacities(pow: usize, fib: usize, fact: usize) -> Self {
        Self {
            pow_cache: MemoCache::new(pow),
            fib_cache: MemoCache::new(fib),
            fact_cache: MemoCache::new(fact),
        }
    }

    /// Compute `base^exponent` exactly. `pow(_, 0) = 1`, including base 0.
    pub fn pow(&self, base: i64, exponent: i64) -> Result<BigInt, EngineError> {
        let e = check_non_negative("pow", "exponent", exponent)?;
        if let Some(hit) = self.pow_cache.get(&(base, exponent)) {
            debug!(base, exponent, "pow cache hit");
            return Ok(hit);
        }
        debug!(base, exponent, "pow cache miss");
        let value = power::pow(&BigInt::from(base), e);
        self.pow_cache.put((base, exponent), value.clone());
        Ok(value)
    }

    /// Compute F(n), with F(0)=0 and F(1)=1.
    pub fn fib(&self, n: i64) -> Result<BigInt, EngineError> {
        let k = check_non_negative("fib", "n", n)?;
        if let Some(hit) = self.fib_cache.get(&n) {
            debug!(n, "fib cache hit");
            return Ok(hit);
        }
        debug!(n, "fib cache miss");
        let value = BigInt::from(fastdoubling::fibonacci(k));
        self.fib_cache.put(n, value.clone());
        Ok(value)
    }

    /// Compute n!, with fact(0) = fact(1) = 1.
    pub fn fact(&self, n: i64) -> Result<BigInt, EngineError> {
        let k = check_non_negative("fact", "n", n)?;
        if let Some(hit) = self.fact_cache.get(&n) {
            debug!(n, "fact cache hit");
            return Ok(hit);
        }
        debug!(n, "fact cache miss");
        let value = BigInt::from(factorial::factorial(k));
        self.fact_cache.put(n, value.clone());
        Ok(value)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Precondition check. Negative arguments are supposed to be rejected at
/// the boundary; reaching this with one is a caller bug.
fn check_non_negative(
    op: &'static str,
    name: &'static str,
    value: i64,
) -> Result<u64, EngineError> {
    u64::try_from(value).map_err(|_| EngineError::Precondition { op, name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_known_values() {
        let engine = Engine::new();
        assert_eq!(engine.pow(2, 10).unwrap(), BigInt::from(1024));
        assert_eq!(engine.pow(0, 0).unwrap(), BigInt::from(1));
        assert_eq!(engine.pow(-2, 3).unwrap(), BigInt::from(-8));
    }

    #[test]
    fn fib_known_values() {
        let engine = Engine::new();
        assert_eq!(engine.fib(0).unwrap(), BigInt::from(0));
        assert_eq!(engine.fib(1).unwrap(), BigInt::from(1));
        assert_eq!(engine.fib(10).unwrap(), BigInt::from(55));
    }

    #[test]
    fn fact_known_values() {
        let engine = Engine::new();
        assert_eq!(engine.fact(0).unwrap(), BigInt::from(1));
        assert_eq!(engine.fact(1).unwrap(), BigInt::from(1));
        assert_eq!(engine.fact(5).unwrap(), BigInt::from(120));
        assert_eq!(
            engine.fact(20).unwrap(),
            BigInt::from(2_432_902_008_176_640_000i64)
        );
    }

    #[test]
    fn negative_arguments_are_precondition_errors() {
        let engine = Engine::new();
        assert_eq!(
            engine.pow(2, -1).unwrap_err(),
            EngineError::Precondition { op: "pow", name: "exponent", value: -1 }
        );
        assert_eq!(
            engine.fib(-3).unwrap_err(),
            EngineError::Precondition { op: "fib", name: "n", value: -3 }
        );
        assert_eq!(
            engine.fact(-1).unwrap_err(),
            EngineError::Precondition { op: "fact", name: "n", value: -1 }
        );
    }

    #[test]
    fn cached_and_recomputed_results_are_identical() {
        let engine = Engine::new();
        let first = engine.fib(500).unwrap(); // miss: computes and stores
        let second = engine.fib(500).unwrap(); // hit: served from cache
        assert_eq!(first, second);

        // A fresh engine recomputes the same value
        let fresh = Engine::new();
        assert_eq!(fresh.fib(500).unwrap(), first);
    }

    #[test]
    fn per_operation_caches_are_independent() {
        // fib(5) = 5 and fact(5) = 120 share the key but not the cache
        let engine = Engine::new();
        assert_eq!(engine.fib(5).unwrap(), BigInt::from(5));
        assert_eq!(engine.fact(5).unwrap(), BigInt::from(120));
        assert_eq!(engine.fib(5).unwrap(), BigInt::from(5));
    }

    #[test]
    fn eviction_does_not_change_results() {
        let engine = Engine::with_capacities(2, 2, 2);
        let f30 = engine.fib(30).unwrap();
        // Push more distinct keys than the bound to force eviction
        for n in 0..10 {
            engine.fib(n).unwrap();
        }
        assert_eq!(engine.fib(30).unwrap(), f30);
    }

    #[test]
    fn concurrent_fib_is_consistent() {
        let engine = Engine::new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| engine.fib(30).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), BigInt::from(832_040));
            }
        });
        // The cache still serves the value afterwards
        assert_eq!(engine.fib(30).unwrap(), BigInt::from(832_040));
    }
}
