//! Core calculator module
//!
//! The pure part of the calculator: operand arithmetic, the validated
//! current-entry value, and the state machine that ties them together.
//! Nothing in here performs I/O or logging.

mod entry;
mod operations;
mod state;

pub use entry::Entry;
pub use operations::{compute, format_value, round_to, Operator};
pub use state::{CalculatorState, Phase, Transition};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,

    /// Digit payload outside 0..=9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Text is not a valid partial numeral
    #[error("Invalid entry: {0:?}")]
    InvalidEntry(String),

    /// Character is not one of the four operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(char),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true for errors that put the calculator into its Error state
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}
