//! Normalized input events
//!
//! Front ends (keypad clicks, keyboard, terminal) translate whatever they
//! receive into a [`CalcInput`] before it reaches the state machine.

use crate::core::{CalcError, CalcResult, Operator};
use serde::{Deserialize, Serialize};

/// One input event for the calculator
///
/// Deserialization validates digit payloads, so a session with
/// `{"type":"digit","value":12}` is rejected with `InvalidDigit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "snake_case",
    try_from = "WireInput"
)]
pub enum CalcInput {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Dot,
    /// Select an operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last character
    Delete,
    /// Divide the entry by 100
    Percent,
    /// Toggle the sign of the entry
    Sign,
}

/// Unvalidated wire form of [`CalcInput`]
#[derive(Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
enum WireInput {
    Digit(u8),
    Dot,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    Percent,
    Sign,
}

impl TryFrom<WireInput> for CalcInput {
    type Error = CalcError;

    fn try_from(wire: WireInput) -> Result<Self, Self::Error> {
        Ok(match wire {
            WireInput::Digit(d) => Self::digit(d)?,
            WireInput::Dot => Self::Dot,
            WireInput::Operator(op) => Self::Operator(op),
            WireInput::Equals => Self::Equals,
            WireInput::Clear => Self::Clear,
            WireInput::Delete => Self::Delete,
            WireInput::Percent => Self::Percent,
            WireInput::Sign => Self::Sign,
        })
    }
}

impl CalcInput {
    /// Creates a digit event, rejecting values above 9
    pub fn digit(d: u8) -> CalcResult<Self> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        Ok(Self::Digit(d))
    }

    /// Maps a keyboard key name to an input event
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Some(Self::Digit(d as u8));
            }
            if let Ok(op) = Operator::from_char(c) {
                return Some(Self::Operator(op));
            }
        }

        match key {
            "." | "," => Some(Self::Dot),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "Delete" | "c" | "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Delete),
            "%" => Some(Self::Percent),
            "F9" | "n" | "N" => Some(Self::Sign),
            _ => None,
        }
    }

    /// Returns the button label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Operator(op) => op.display_symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "\u{232b}".to_string(),
            Self::Percent => "%".to_string(),
            Self::Sign => "\u{00b1}".to_string(),
        }
    }
}
