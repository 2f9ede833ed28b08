//! An immediate-execution calculator.
//!
//! The core is a pure reducer: [`calculator::transition`] maps a
//! [`calculator::CalculatorState`] and an [`calculator::Intent`] to the next
//! state, and [`calculator::format_operand`] renders operands for display.

pub mod calculator;
pub mod config;
pub mod error;
