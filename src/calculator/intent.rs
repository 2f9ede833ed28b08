//! User intents accepted by the calculator engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// A single character that may be appended to an operand: `0`-`9` or `.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');

    /// Create a digit, returning `None` for anything outside `0-9` and `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    /// Digit for a keypad label known to be valid.
    pub(crate) fn keypad(c: char) -> Self {
        debug_assert!(c.is_ascii_digit() || c == '.');
        Self(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(KeyError::InvalidDigit(c))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five binary operations the calculator knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷", alias = "/")]
    Divide,
    /// `a % b` is `b` percent of `a`.
    #[serde(rename = "%")]
    Percent,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
    ];

    /// The symbol shown on the keypad and in the previous-operand line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Apply the operation to two parsed operands.
    pub fn apply(self, prev: f64, current: f64) -> f64 {
        match self {
            Self::Add => prev + current,
            Self::Subtract => prev - current,
            Self::Multiply => prev * current,
            Self::Divide => prev / current,
            Self::Percent => (prev / 100.0) * current,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "%" => Ok(Self::Percent),
            other => Err(KeyError::InvalidOperation(other.to_string())),
        }
    }
}

/// Everything a front end can ask the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Intent {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
    /// Divide the current operand by 100 in place.
    Percentage,
}

impl From<Digit> for Intent {
    fn from(digit: Digit) -> Self {
        Self::AddDigit(digit)
    }
}

impl From<Operation> for Intent {
    fn from(op: Operation) -> Self {
        Self::ChooseOperation(op)
    }
}
