//! Stateless numeric helpers.

use abacus_common::error::MathError;
use tracing::debug;

/// Returns `true` when `number` is strictly greater than zero.
///
/// `0.0`, `-0.0` and `NaN` are not positive.
pub fn is_positive(number: f64) -> bool {
    number > 0.0
}

/// Computes `n!` for non-negative `n`, with `0! == 1`.
///
/// Results are exact up to `20!`. Larger inputs overflow `i64` and wrap
/// around silently in both debug and release builds.
pub fn calculate_factorial(n: i64) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::NegativeFactorial(n));
    }
    debug!(n, "computing factorial");

    let mut result: i64 = 1;
    for i in 1..=n {
        result = result.wrapping_mul(i);
    }
    Ok(result)
}
