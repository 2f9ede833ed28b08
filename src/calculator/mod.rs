//! Immediate-execution calculator core.
//!
//! This module provides functionality to:
//! - Apply user intents to an immutable calculator state
//! - Evaluate the pending binary expression
//! - Format operands for display
//! - Map keypad buttons and typed keys to intents
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod evaluation;
mod format;
mod intent;
mod keypad;
mod keys;
mod state;

pub use clipboard::copy_to_clipboard;
pub use engine::{CalculatorEngine, transition};
pub use evaluation::{Evaluation, evaluate, number_to_operand, parse_operand};
pub use format::format_operand;
pub use intent::{Digit, Intent, Operation};
pub use keypad::{Button, COLUMNS, Keypad, PercentKey};
pub use keys::parse_keys;
pub use state::{CalculatorState, DisplayLines};
