//! Fast doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB carrying the pair
//! (F(k), F(k+1)), for O(log n) arithmetic steps with no call-stack
//! recursion.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Compute F(n) exactly, with F(0)=0 and F(1)=1.
///
/// Small n (n <= 93) is served from a precomputed u64 table; larger n runs
/// the iterative doubling loop.
///
/// # Example
/// ```
/// use mathcalc_core::fastdoubling::fibonacci;
///
/// assert_eq!(fibonacci(10).to_string(), "55");
/// assert_eq!(fibonacci(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[n as usize]);
    }
    doubling_loop(n)
}

fn doubling_loop(n: u64) -> BigUint {
    let num_bits = 64 - n.leading_zeros();

    // (fk, fk1) = (F(0), F(1))
    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        // Doubling step: compute F(2k) and F(2k+1)
        // t = 2*F(k+1) - F(k)
        let mut t = fk1.clone();
        t <<= 1;
        t -= &fk;

        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;

        fk = f2k;
        fk1 = f2k1;

        // Conditional addition step when the bit is set: advance the pair
        // from (F(2k), F(2k+1)) to (F(2k+1), F(2k+2)).
        if (n >> i) & 1 == 1 {
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    fk
}
