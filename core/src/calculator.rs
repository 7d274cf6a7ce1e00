//! # Calculator
//!
//! A four-function calculator holding a single piece of state: the result of
//! the most recent successful operation.
//!
//! Inputs are not validated beyond the divisor. Non-finite operands are
//! accepted and propagate through IEEE-754 arithmetic, and overflow saturates
//! to infinity.

use std::fmt;

use abacus_common::error::MathError;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    /// Creates a calculator whose last result is `0.0`.
    pub fn new() -> Self {
        Self { last_result: 0.0 }
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        self.store(a + b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        self.store(a - b)
    }

    /// Multiplies two numbers.
    ///
    /// There is no overflow detection: a product outside the `f64` range
    /// becomes `inf` or `-inf` and is stored as such.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        self.store(a * b)
    }

    /// Divides `a` by `b`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `b` compares equal to
    /// zero (`-0.0` included). The comparison is exact, so tiny non-zero
    /// divisors are accepted. On failure the last result is left untouched.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, MathError> {
        if b == 0.0 {
            warn!(a, "rejected division by zero");
            return Err(MathError::DivisionByZero);
        }
        debug!(a, b, "performing division");
        Ok(self.store(a / b))
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Resets the last result to `0.0`.
    pub fn clear(&mut self) {
        self.last_result = 0.0;
    }

    fn store(&mut self, value: f64) -> f64 {
        self.last_result = value;
        value
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.last_result)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.last_result(), 0.0);
        assert_eq!(calc, Calculator::default());
    }

    #[test]
    fn test_operations_update_last_result() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(5.0, 3.0), 8.0);
        assert_eq!(calc.last_result(), 8.0);
        assert_eq!(calc.subtract(10.0, 4.0), 6.0);
        assert_eq!(calc.last_result(), 6.0);
        assert_eq!(calc.multiply(6.0, 7.0), 42.0);
        assert_eq!(calc.last_result(), 42.0);
        assert_eq!(calc.divide(15.0, 3.0), Ok(5.0));
        assert_eq!(calc.last_result(), 5.0);
    }

    #[test]
    fn test_divide_by_zero_keeps_state() {
        let mut calc = Calculator::new();
        calc.divide(15.0, 3.0).unwrap();

        assert_eq!(calc.divide(10.0, 0.0), Err(MathError::DivisionByZero));
        assert_eq!(calc.last_result(), 5.0);
    }

    #[test]
    fn test_divide_by_negative_zero_fails() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(1.0, -0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_divisor_succeeds() {
        let mut calc = Calculator::new();
        let result = calc.divide(1.0, f64::MIN_POSITIVE).unwrap();
        assert!(result.is_finite());
        assert_eq!(calc.last_result(), result);
    }

    #[test]
    fn test_multiply_overflow_saturates() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(f64::MAX, 2.0), f64::INFINITY);
        assert_eq!(calc.multiply(f64::MAX, -2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_propagates() {
        let mut calc = Calculator::new();
        assert!(calc.add(f64::NAN, 1.0).is_nan());
        assert!(calc.last_result().is_nan());
    }

    #[test]
    fn test_subtract_undoes_add() {
        let samples = [0.0, 1.0, -2.5, 3.75, 1e-9, 12345.678, -98765.4321, 1e15];
        let mut calc = Calculator::new();
        for &a in &samples {
            for &b in &samples {
                let sum = calc.add(a, b);
                let back = calc.subtract(sum, b);
                let tolerance = 1e-9 * a.abs().max(b.abs()).max(1.0);
                assert!((back - a).abs() <= tolerance, "a={a} b={b} got {back}");
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::new();
        calc.multiply(6.0, 7.0);
        calc.clear();
        assert_eq!(calc.last_result(), 0.0);
    }

    #[test]
    fn test_display_shows_last_result() {
        let mut calc = Calculator::new();
        calc.add(40.0, 2.0);
        assert_eq!(calc.to_string(), "42");
        calc.divide(1.0, 4.0).unwrap();
        assert_eq!(calc.to_string(), "0.25");
    }
}
