//! State transitions for the calculator.
//!
//! `transition` is total: every intent maps any state to a valid state, and
//! intents that make no sense in the current state leave it unchanged. A
//! pending expression that is not a number evaluates to the `NaN` operand.
//! Operators use immediate execution, so choosing an operator while a full
//! expression is pending evaluates it first, left to right.

use super::evaluation::{Evaluation, evaluate, number_to_operand, parse_operand};
use super::intent::{Digit, Intent, Operation};
use super::state::{CalculatorState, DisplayLines};

/// Compute the state that follows `state` when `intent` is applied.
pub fn transition(state: &CalculatorState, intent: Intent) -> CalculatorState {
    let next = match intent {
        Intent::AddDigit(digit) => add_digit(state, digit),
        Intent::ChooseOperation(op) => choose_operation(state, op),
        Intent::Clear => Some(CalculatorState::default()),
        Intent::DeleteDigit => delete_digit(state),
        Intent::Evaluate => evaluate_pending(state),
        Intent::Percentage => percentage(state),
    };

    match next {
        Some(next) => {
            tracing::debug!(?intent, ?next, "applied intent");
            next
        }
        None => {
            tracing::debug!(?intent, "intent ignored");
            state.clone()
        }
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> Option<CalculatorState> {
    if state.overwrite {
        return Some(CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        });
    }

    let current = state.current().unwrap_or_default();
    if digit == Digit::ZERO && current == "0" {
        return None;
    }
    if digit.is_point() && current.contains('.') {
        return None;
    }

    Some(CalculatorState {
        current_operand: Some(format!("{}{}", current, digit)),
        ..state.clone()
    })
}

fn choose_operation(state: &CalculatorState, op: Operation) -> Option<CalculatorState> {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => None,
        // Switching operator before the second operand is typed.
        (None, Some(_)) => Some(CalculatorState {
            operation: Some(op),
            ..state.clone()
        }),
        (Some(current), None) => Some(CalculatorState {
            operation: Some(op),
            previous_operand: Some(current.clone()),
            current_operand: None,
            ..state.clone()
        }),
        (Some(_), Some(_)) => Some(CalculatorState {
            previous_operand: Some(evaluated_operand(state)),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        }),
    }
}

fn delete_digit(state: &CalculatorState) -> Option<CalculatorState> {
    if state.overwrite {
        return Some(CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        });
    }

    let current = state.current()?;
    let mut chars = current.chars();
    chars.next_back();
    let trimmed = chars.as_str();

    Some(CalculatorState {
        current_operand: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        ..state.clone()
    })
}

fn evaluate_pending(state: &CalculatorState) -> Option<CalculatorState> {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return None;
    }

    Some(CalculatorState {
        current_operand: Some(evaluated_operand(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    })
}

fn percentage(state: &CalculatorState) -> Option<CalculatorState> {
    let value = parse_operand(state.current()?)?;

    Some(CalculatorState {
        current_operand: Some(number_to_operand(value / 100.0)),
        ..state.clone()
    })
}

/// Evaluate the pending expression as operand text.
///
/// An expression that is not a number still completes the transition; its
/// result is the `NaN` operand, which later evaluations also treat as not a
/// number.
fn evaluated_operand(state: &CalculatorState) -> String {
    match evaluate(state) {
        Evaluation::Number(value) => number_to_operand(value),
        Evaluation::NotANumber => {
            tracing::warn!(
                previous = ?state.previous_operand,
                current = ?state.current_operand,
                "pending expression is not a number"
            );
            number_to_operand(f64::NAN)
        }
    }
}

/// Owns the current state on behalf of a front end.
///
/// Front ends feed intents one at a time and read back the display lines.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CalculatorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Apply one intent and return the new state.
    pub fn dispatch(&mut self, intent: Intent) -> &CalculatorState {
        self.state = transition(&self.state, intent);
        &self.state
    }

    /// Apply intents in order.
    pub fn dispatch_all(&mut self, intents: impl IntoIterator<Item = Intent>) -> &CalculatorState {
        for intent in intents {
            self.state = transition(&self.state, intent);
        }
        &self.state
    }

    pub fn display(&self) -> DisplayLines {
        self.state.display()
    }
}
