//! Binary exponentiation for exact integer powers.

use num_bigint::BigInt;
use num_traits::One;

/// Compute `base^exponent` by square-and-multiply over the exponent bits,
/// using O(log exponent) big-integer multiplications.
///
/// `exponent == 0` yields 1 for every base, including 0.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use mathcalc_core::power::pow;
///
/// assert_eq!(pow(&BigInt::from(2), 10).to_string(), "1024");
/// assert_eq!(pow(&BigInt::from(0), 0).to_string(), "1");
/// ```
#[must_use]
pub fn pow(base: &BigInt, exponent: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut square = base.clone();
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result *= &square;
        }
        e >>= 1;
        if e > 0 {
            square = &square * &square;
        }
    }
    result
}
