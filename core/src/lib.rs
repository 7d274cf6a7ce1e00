//! # Abacus Core
//!
//! Arithmetic building blocks.
//!
//! * **[`calculator`]**: a calculator remembering the result of its last operation.
//! * **[`manager`]**: an append-only arena of calculators addressed by index.
//! * **[`utils`]**: stateless helpers (positivity check, factorial).

pub mod calculator;
pub mod manager;
pub mod utils;

pub use abacus_common::error::MathError;
pub use calculator::Calculator;
pub use manager::{CalculatorId, CalculatorManager};
pub use utils::{calculate_factorial, is_positive};
