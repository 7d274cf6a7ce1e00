//! # Calculator Manager
//!
//! Owns calculators in an append-only arena. Each calculator is named by its
//! insertion index, which stays valid for the lifetime of the manager since
//! nothing is ever removed.

use tracing::{debug, trace};

use crate::calculator::Calculator;

/// Zero-based insertion index of a calculator.
///
/// Signed so that callers can ask for ids like `-1` and get `None` back.
pub type CalculatorId = i64;

#[derive(Debug, Default)]
pub struct CalculatorManager {
    calculators: Vec<Calculator>,
}

impl CalculatorManager {
    pub fn new() -> Self {
        Self {
            calculators: Vec::new(),
        }
    }

    /// Appends a fresh calculator and returns its id.
    pub fn add_calculator(&mut self) -> CalculatorId {
        self.calculators.push(Calculator::new());
        let id = (self.calculators.len() - 1) as CalculatorId;
        debug!(id, "calculator added");
        id
    }

    /// Looks up a calculator. Ids outside `0..count` yield `None`.
    pub fn get_calculator(&self, id: CalculatorId) -> Option<&Calculator> {
        let found = usize::try_from(id)
            .ok()
            .and_then(|idx| self.calculators.get(idx));
        if found.is_none() {
            trace!(id, "no calculator with this id");
        }
        found
    }

    pub fn get_calculator_mut(&mut self, id: CalculatorId) -> Option<&mut Calculator> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.calculators.get_mut(idx))
    }

    pub fn count_calculators(&self) -> usize {
        self.calculators.len()
    }

    /// Iterates over `(id, calculator)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CalculatorId, &Calculator)> {
        self.calculators
            .iter()
            .enumerate()
            .map(|(idx, calc)| (idx as CalculatorId, calc))
    }
}
