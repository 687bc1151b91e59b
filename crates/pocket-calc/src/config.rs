//! Calculator configuration

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum entry length in characters, not counting a leading minus
    pub max_input_len: usize,
    /// Fractional digits kept when rounding results
    pub precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

impl CalculatorConfig {
    /// Default display width
    pub const DEFAULT_MAX_INPUT_LEN: usize = 14;

    /// Default rounding precision
    pub const DEFAULT_PRECISION: u32 = 10;

    /// Smallest usable width: room for `"0."`
    pub const MIN_INPUT_LEN: usize = 2;

    /// Largest precision an f64 can honour
    pub const MAX_PRECISION: u32 = 15;

    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum entry length
    #[must_use]
    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the rounding precision
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Parses and validates a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalcError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configured limits
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_input_len < Self::MIN_INPUT_LEN {
            return Err(CalcError::invalid_config(format!(
                "max_input_len must be at least {}, got {}",
                Self::MIN_INPUT_LEN,
                self.max_input_len
            )));
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(CalcError::invalid_config(format!(
                "precision must be at most {}, got {}",
                Self::MAX_PRECISION,
                self.precision
            )));
        }
        Ok(())
    }
}
