//! Operand arithmetic
//!
//! The four operators, the `compute` rule applied on chaining and equals,
//! and the rounding/formatting used to turn results back into entry text.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Largest magnitude at which every f64 is still an exact integer (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Type-safe operator enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII operator symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the glyph shown on the display's top line
    #[must_use]
    pub const fn display_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '\u{2212}',
            Self::Multiply => '\u{00d7}',
            Self::Divide => '\u{00f7}',
        }
    }

    /// Parses an operator from its ASCII symbol or display glyph
    pub fn from_char(c: char) -> CalcResult<Self> {
        match c {
            '+' => Ok(Self::Add),
            '-' | '\u{2212}' => Ok(Self::Subtract),
            '*' | '\u{00d7}' => Ok(Self::Multiply),
            '/' | '\u{00f7}' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

/// Applies `op` to two operands.
///
/// Division by zero and non-finite results are reported as errors rather
/// than numeric values, so they can never reach the display as `inf`/`NaN`.
pub fn compute(a: f64, op: Operator, b: f64) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Rounds `value` to `places` fractional digits (half away from zero).
///
/// Values too large to scale exactly are returned unchanged, and
/// negative zero is folded into zero.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return normalize_zero(value);
    }
    normalize_zero(scaled.round() / factor)
}

/// Formats a value as entry text no longer than `max_len` digits.
///
/// Plain decimal notation is preferred. When that is too long the fraction
/// is rounded to fit; if even the integer part does not fit, scientific
/// notation is used with the mantissa trimmed to the cap.
#[must_use]
pub fn format_value(value: f64, max_len: usize) -> String {
    let value = normalize_zero(value);
    let plain = value.to_string();
    if unsigned_len(&plain) <= max_len {
        return plain;
    }

    let int_len = unsigned_len(&format!("{:.0}", value.trunc()));
    if int_len < max_len {
        let places = (max_len - int_len - 1) as u32;
        return normalize_zero(round_to(value, places)).to_string();
    }

    scientific(value, max_len)
}

fn scientific(value: f64, max_len: usize) -> String {
    let mut places = max_len.saturating_sub(2);
    loop {
        let text = trim_mantissa(&format!("{value:.places$e}"));
        if unsigned_len(&text) <= max_len || places == 0 {
            return text;
        }
        places -= 1;
    }
}

fn trim_mantissa(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{mantissa}e{exponent}")
        }
        _ => text.to_string(),
    }
}

fn unsigned_len(text: &str) -> usize {
    text.trim_start_matches('-').chars().count()
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
