//! The calculator's memory between key presses.

use serde::{Deserialize, Serialize};

use super::format::format_operand;
use super::intent::Operation;

/// A snapshot of the calculator.
///
/// Every intent produces a new snapshot; nothing is mutated in place.
/// `CalculatorState::default()` is the empty state, both at startup and
/// after a clear.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The operand being typed (or the last result).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_operand: Option<String>,
    /// The operand captured before the pending operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_operand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    /// When set, the next digit replaces `current_operand` instead of
    /// extending it.
    #[serde(default)]
    pub overwrite: bool,
}

/// The two lines a front end renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLines {
    /// Formatted previous operand followed by the pending operation symbol.
    pub previous: String,
    /// Formatted current operand.
    pub current: String,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this is the empty state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    /// Format both display lines.
    pub fn display(&self) -> DisplayLines {
        let previous = format_operand(self.previous()).unwrap_or_default();
        let previous = match self.operation {
            Some(op) if previous.is_empty() => op.symbol().to_string(),
            Some(op) => format!("{} {}", previous, op),
            None => previous,
        };

        DisplayLines {
            previous,
            current: format_operand(self.current()).unwrap_or_default(),
        }
    }
}
