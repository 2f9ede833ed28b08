//! Turning typed key sequences into intents.
//!
//! Input is split on whitespace. Whole-word tokens name keypad buttons
//! (`AC`, `C`, `DEL`, `PCT`); anything else is read one character at a time:
//! digits and `.` add to the operand, `+ - * / ÷` choose an operation, `%`
//! follows the configured [`PercentKey`], `=` evaluates and `<` deletes.

use lazy_static::lazy_static;
use regex::Regex;

use super::intent::{Digit, Intent, Operation};
use super::keypad::PercentKey;
use crate::error::KeyError;

lazy_static! {
    /// Word tokens that stand for a whole button.
    static ref WORD_KEY: Regex = Regex::new(r"(?i)^(ac|c|del|pct)$").unwrap();
}

/// Parse a key sequence into intents.
///
/// `position` in errors counts characters from the start of `input`.
pub fn parse_keys(input: &str, percent_key: PercentKey) -> Result<Vec<Intent>, KeyError> {
    let mut intents = Vec::new();
    let mut offset = 0;

    for token in input.split_inclusive(char::is_whitespace) {
        let word = token.trim_end();
        if let Some(intent) = word_intent(word) {
            intents.push(intent);
        } else {
            for (i, key) in word.chars().enumerate() {
                let intent = key_intent(key, percent_key).ok_or(KeyError::UnknownKey {
                    key,
                    position: offset + i,
                })?;
                intents.push(intent);
            }
        }
        offset += token.chars().count();
    }

    tracing::debug!(count = intents.len(), "parsed key sequence");
    Ok(intents)
}

fn word_intent(word: &str) -> Option<Intent> {
    if !WORD_KEY.is_match(word) {
        return None;
    }
    match word.to_ascii_lowercase().as_str() {
        "ac" | "c" => Some(Intent::Clear),
        "del" => Some(Intent::DeleteDigit),
        "pct" => Some(Intent::Percentage),
        _ => None,
    }
}

fn key_intent(key: char, percent_key: PercentKey) -> Option<Intent> {
    if let Some(digit) = Digit::new(key) {
        return Some(Intent::AddDigit(digit));
    }

    match key {
        '+' => Some(Operation::Add.into()),
        '-' => Some(Operation::Subtract.into()),
        '*' | '×' => Some(Operation::Multiply.into()),
        '/' | '÷' => Some(Operation::Divide.into()),
        '%' => Some(percent_key.intent()),
        '=' => Some(Intent::Evaluate),
        '<' => Some(Intent::DeleteDigit),
        _ => None,
    }
}
