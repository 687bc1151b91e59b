//! The two display lines handed to the render callback

use serde::{Deserialize, Serialize};

/// Display lines derived from the calculator state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Top line: `"<previous> <symbol>"` or empty
    pub previous_line: String,
    /// Bottom line: the current entry verbatim
    pub current_line: String,
}

impl Display {
    /// Creates a display from its two lines
    #[must_use]
    pub fn new(previous_line: impl Into<String>, current_line: impl Into<String>) -> Self {
        Self {
            previous_line: previous_line.into(),
            current_line: current_line.into(),
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.previous_line)?;
        write!(f, "{}", self.current_line)
    }
}
