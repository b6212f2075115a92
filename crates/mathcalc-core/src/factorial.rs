//! Iterative factorial.

use num_bigint::BigUint;
use num_traits::One;

/// Compute n! as a running product, with 0! = 1! = 1.
///
/// Deliberately iterative: a recursive descent on n would scale the call
/// depth with the input.
///
/// # Example
/// ```
/// use mathcalc_core::factorial::factorial;
///
/// assert_eq!(factorial(5).to_string(), "120");
/// assert_eq!(factorial(0).to_string(), "1");
/// ```
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}
