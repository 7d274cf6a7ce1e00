//! Localized text of the demonstration.

use abacus_common::{config::Language, error::MathError};

pub struct Messages {
    pub title: &'static str,
    pub error_label: &'static str,
    pub calculators_created: &'static str,
    pub factorial_of: &'static str,
    pub division_by_zero: &'static str,
    pub negative_factorial: &'static str,
    pub done: &'static str,
}

const ENGLISH: Messages = Messages {
    title: "Calculator Example",
    error_label: "Error",
    calculators_created: "Calculators created",
    factorial_of: "Factorial of",
    division_by_zero: "Division by zero is not allowed",
    negative_factorial: "Factorial is not defined for negative numbers",
    done: "done",
};

const PORTUGUESE: Messages = Messages {
    title: "Exemplo de Calculadora",
    error_label: "Erro",
    calculators_created: "Calculadoras criadas",
    factorial_of: "Fatorial de",
    division_by_zero: "Divisão por zero não é permitida",
    negative_factorial: "Fatorial não é definido para números negativos",
    done: "concluído",
};

impl Messages {
    pub fn for_language(lang: Language) -> &'static Messages {
        match lang {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }

    pub fn describe(&self, err: &MathError) -> &'static str {
        match err {
            MathError::DivisionByZero => self.division_by_zero,
            MathError::NegativeFactorial(_) => self.negative_factorial,
        }
    }
}
