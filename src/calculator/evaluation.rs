//! Evaluation of the pending binary expression.
//!
//! Operands are stored as text, so evaluation parses both sides, applies the
//! pending operation and turns the value back into operand text.

use lazy_static::lazy_static;
use regex::Regex;

use super::state::CalculatorState;

lazy_static! {
    /// Plain decimal literals: `12`, `-3.5`, `.5`, `5.`.
    static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)$"
    ).unwrap();
}

/// Result of evaluating a calculator state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    /// Both operands parsed. The value may still be infinite or NaN when the
    /// arithmetic itself produces one (e.g. division by zero).
    Number(f64),
    /// An operand or the operation is missing, or an operand does not parse.
    NotANumber,
}

impl Evaluation {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::NotANumber => None,
        }
    }

    /// Operand text for a successful evaluation.
    pub fn to_operand(self) -> Option<String> {
        self.value().map(number_to_operand)
    }
}

/// Evaluate `previous <operation> current`.
pub fn evaluate(state: &CalculatorState) -> Evaluation {
    let (Some(prev), Some(current), Some(operation)) =
        (state.previous(), state.current(), state.operation)
    else {
        return Evaluation::NotANumber;
    };

    match (parse_operand(prev), parse_operand(current)) {
        (Some(prev), Some(current)) => Evaluation::Number(operation.apply(prev, current)),
        _ => Evaluation::NotANumber,
    }
}

/// Parse operand text into a number.
///
/// Accepts plain decimal literals and the `Infinity` text left behind by a
/// division by zero. Everything else, including `NaN`, is not a number.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let trimmed = operand.trim();

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if !DECIMAL_LITERAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Convert a number to canonical operand text.
///
/// Finite values use the shortest text that round-trips. Negative zero is
/// written as `0`.
pub fn number_to_operand(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    fn state(prev: &str, op: Operation, current: &str) -> CalculatorState {
        CalculatorState {
            previous_operand: Some(prev.to_string()),
            current_operand: Some(current.to_string()),
            operation: Some(op),
            overwrite: false,
        }
    }

    fn eval_text(prev: &str, op: Operation, current: &str) -> Option<String> {
        evaluate(&state(prev, op, current)).to_operand()
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(eval_text("3", Operation::Add, "4").as_deref(), Some("7"));
        assert_eq!(eval_text("3", Operation::Subtract, "4").as_deref(), Some("-1"));
        assert_eq!(eval_text("3", Operation::Multiply, "4").as_deref(), Some("12"));
        assert_eq!(eval_text("3", Operation::Divide, "4").as_deref(), Some("0.75"));
        assert_eq!(eval_text("200", Operation::Percent, "15").as_deref(), Some("30"));
    }

    #[test]
    fn test_shortest_round_trip_text() {
        assert_eq!(eval_text("0.1", Operation::Add, "0.2").as_deref(), Some("0.30000000000000004"));
        assert_eq!(eval_text("1", Operation::Divide, "3").as_deref(), Some("0.3333333333333333"));
        assert_eq!(eval_text("2.5", Operation::Multiply, "2").as_deref(), Some("5"));
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate(&state("5", Operation::Divide, "0"));
        assert!(result.value().unwrap().is_infinite());
        assert_eq!(result.to_operand().as_deref(), Some("Infinity"));

        assert_eq!(eval_text("-5", Operation::Divide, "0").as_deref(), Some("-Infinity"));
        assert_eq!(eval_text("0", Operation::Divide, "0").as_deref(), Some("NaN"));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(eval_text("-1", Operation::Multiply, "0").as_deref(), Some("0"));
    }

    #[test]
    fn test_missing_parts_are_not_a_number() {
        let mut s = state("1", Operation::Add, "2");
        s.current_operand = None;
        assert_eq!(evaluate(&s), Evaluation::NotANumber);

        let mut s = state("1", Operation::Add, "2");
        s.operation = None;
        assert_eq!(evaluate(&s), Evaluation::NotANumber);

        assert_eq!(evaluate(&CalculatorState::default()), Evaluation::NotANumber);
    }

    #[test]
    fn test_unparseable_operands() {
        assert_eq!(evaluate(&state("abc", Operation::Add, "1")), Evaluation::NotANumber);
        assert_eq!(evaluate(&state("1", Operation::Add, ".")), Evaluation::NotANumber);
        assert_eq!(evaluate(&state("NaN", Operation::Add, "1")), Evaluation::NotANumber);
        assert_eq!(evaluate(&state("", Operation::Add, "1")), Evaluation::NotANumber);
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("12"), Some(12.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("-3.25"), Some(-3.25));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("1e5"), None);
        assert_eq!(parse_operand("1.2.3"), None);
    }

    #[test]
    fn test_infinity_chains() {
        assert_eq!(eval_text("Infinity", Operation::Add, "1").as_deref(), Some("Infinity"));
    }
}
