//! Cache capacities and the small-value Fibonacci fast path.

/// Bounded cache capacity for pow results.
pub const POW_CACHE_CAPACITY: usize = 256;

/// Bounded cache capacity for Fibonacci results.
///
/// Sized larger than the other two: Fibonacci callers revisit far more
/// distinct indices in practice.
pub const FIB_CACHE_CAPACITY: usize = 512;

/// Bounded cache capacity for factorial results.
pub const FACT_CACHE_CAPACITY: usize = 256;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`; F(94) overflows it.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
