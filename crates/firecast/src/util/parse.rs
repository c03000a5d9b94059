//! Pure money-amount parsing for interactive entry.
//!
//! The interactive prompt loops on this validator; the parsing itself has
//! no I/O and is fully testable.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    NotANumber(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "empty input"),
            AmountParseError::NotANumber(s) => write!(f, "not a valid amount: {s:?}"),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Parse a money amount the way a person types one.
///
/// Accepts `437133.95`, `437,133.95`, `$437,133.95` and accounting-style
/// negatives like `(1,234.56)` → `-1234.56`.
pub fn parse_amount(text: &str) -> Result<f64, AmountParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    // Accounting parentheses mean negative
    let (body, negated) = match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (trimmed, false),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(AmountParseError::NotANumber(trimmed.to_string()));
    }

    Ok(if negated { -value } else { value })
}
