#![cfg(test)]
use abacus_core::{Calculator, CalculatorManager, MathError, calculate_factorial, is_positive};

/// Walks one calculator through every operation and checks that a rejected
/// division leaves the previous result in place.
#[test]
fn calculator_walkthrough() {
    let mut calc: Calculator = Calculator::new();

    calc.add(5.0, 3.0);
    assert_eq!(calc.last_result(), 8.0);

    calc.subtract(10.0, 4.0);
    assert_eq!(calc.last_result(), 6.0);

    assert_eq!(calc.multiply(6.0, 7.0), 42.0);
    assert_eq!(calc.divide(15.0, 3.0), Ok(5.0));

    let err = calc.divide(10.0, 0.0).unwrap_err();
    assert_eq!(err, MathError::DivisionByZero);
    assert!(err.is_invalid_argument());
    assert_eq!(
        calc.last_result(),
        5.0,
        "failed division must not touch the last result"
    );
}

#[test]
fn divide_by_zero_fails_for_any_dividend() {
    let mut calc: Calculator = Calculator::new();
    for a in [0.0, 1.0, -1.0, 1e300, -1e-300, f64::MAX] {
        assert!(calc.divide(a, 0.0).is_err(), "{a} / 0 should fail");
        assert_eq!(calc.divide(a, 2.0), Ok(a / 2.0));
    }
}

#[test]
fn managed_calculator_feeds_factorial() -> anyhow::Result<()> {
    let mut manager: CalculatorManager = CalculatorManager::new();
    let id = manager.add_calculator();

    let calc = manager
        .get_calculator_mut(id)
        .ok_or_else(|| anyhow::anyhow!("calculator {id} missing"))?;
    let n = calc.add(2.0, 3.0);
    assert!(is_positive(n));

    let factorial = calculate_factorial(n as i64)?;
    assert_eq!(factorial, 120);
    Ok(())
}

#[test]
fn negative_factorial_is_invalid_argument() {
    let err = calculate_factorial(-5).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "Factorial is not defined for negative numbers");
}
