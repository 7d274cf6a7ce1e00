#![cfg(test)]
use abacus_core::{CalculatorId, CalculatorManager};

#[test]
fn lookup_after_n_insertions() {
    for n in [0_i64, 1, 2, 10] {
        let mut manager: CalculatorManager = CalculatorManager::new();
        for _ in 0..n {
            manager.add_calculator();
        }

        assert_eq!(manager.count_calculators() as i64, n);
        for id in 0..n {
            assert!(manager.get_calculator(id).is_some(), "id {id} of {n} missing");
        }
        assert!(manager.get_calculator(n).is_none());
        assert!(manager.get_calculator(-1).is_none());
    }
}

#[test]
fn ids_are_stable_while_growing() {
    let mut manager: CalculatorManager = CalculatorManager::new();
    let first: CalculatorId = manager.add_calculator();
    manager.get_calculator_mut(first).unwrap().multiply(6.0, 7.0);

    for _ in 0..100 {
        manager.add_calculator();
    }

    assert_eq!(manager.get_calculator(first).unwrap().last_result(), 42.0);
    assert_eq!(manager.count_calculators(), 101);
}
