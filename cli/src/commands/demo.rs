use abacus_common::config::{Config, Language};
use abacus_core::{Calculator, CalculatorManager, calculate_factorial};
use anyhow::Context;

use crate::terminal::{messages::Messages, print};

const MANAGED_CALCULATORS: usize = 2;
const FACTORIAL_INPUT: i64 = 5;

/// One printed line of the demonstration.
#[derive(Debug, PartialEq)]
pub enum Line {
    /// `expression = value`
    Result { expression: String, value: String },
    /// `label: value`
    Labeled { label: &'static str, value: String },
    /// `expression = <error label>: reason`
    Failure { expression: String, reason: &'static str },
    Blank,
}

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let text = Messages::for_language(cfg.lang);
    print::header(text.title, cfg.quiet);

    run_steps(cfg.lang, |line| print::line(&line, text))?;

    print::closing_header(text.done, cfg.quiet);
    Ok(())
}

/// Runs every operation in order, handing each line to `emit` as soon as the
/// step that produced it has finished.
pub fn run_steps<F>(lang: Language, mut emit: F) -> anyhow::Result<()>
where
    F: FnMut(Line),
{
    let text = Messages::for_language(lang);

    let mut calc = Calculator::new();
    emit(result("5 + 3", calc.add(5.0, 3.0)));
    emit(result("10 - 4", calc.subtract(10.0, 4.0)));
    emit(result("6 * 7", calc.multiply(6.0, 7.0)));

    let quotient = calc.divide(15.0, 3.0).context("dividing 15 by 3")?;
    emit(result("15 / 3", quotient));

    match calc.divide(10.0, 0.0) {
        Ok(value) => emit(result("10 / 0", value)),
        Err(err) => emit(Line::Failure {
            expression: "10 / 0".to_string(),
            reason: text.describe(&err),
        }),
    }

    let mut manager = CalculatorManager::new();
    for _ in 0..MANAGED_CALCULATORS {
        manager.add_calculator();
    }
    emit(Line::Blank);
    emit(Line::Labeled {
        label: text.calculators_created,
        value: manager.count_calculators().to_string(),
    });

    let factorial = calculate_factorial(FACTORIAL_INPUT)
        .with_context(|| format!("computing the factorial of {FACTORIAL_INPUT}"))?;
    emit(result(
        &format!("{} {}", text.factorial_of, FACTORIAL_INPUT),
        factorial,
    ));

    Ok(())
}

fn result(expression: &str, value: impl ToString) -> Line {
    Line::Result {
        expression: expression.to_string(),
        value: value.to_string(),
    }
}
