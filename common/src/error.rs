use thiserror::Error;

/// Rejected arguments of the arithmetic core.
///
/// Every variant belongs to the "invalid argument" class: the input is
/// outside the domain of the operation and nothing was computed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Factorial is not defined for negative numbers")]
    NegativeFactorial(i64),
}

impl MathError {
    /// Classifies the error. Every current variant is an invalid argument;
    /// callers should still ask, since other kinds of failure may be added.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MathError::DivisionByZero | MathError::NegativeFactorial(_))
    }
}
