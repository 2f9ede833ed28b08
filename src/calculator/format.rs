//! Display formatting for operands.
//!
//! Only the integer part of an operand is touched: it gets thousand
//! separators. Decimal digits are shown exactly as typed so that trailing
//! zeros and a trailing point survive while the user is still entering them.

/// Format an operand for display.
///
/// Returns `None` when there is no operand to show.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;

    Some(match operand.split_once('.') {
        Some((integer, decimal)) => format!("{}.{}", format_integer(integer), decimal),
        None => format_integer(operand),
    })
}

/// Format the integer part of an operand with thousand separators.
fn format_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits == "Infinity" {
        return format!("{}∞", sign);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return integer.to_string();
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return format!("{}0", sign);
    }

    format!("{}{}", sign, group_thousands(digits))
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
