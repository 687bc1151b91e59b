//! The in-progress numeral shown on the display's bottom line

use crate::core::{format_value, CalcError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const ZERO: &str = "0";
const ERROR: &str = "Error";

/// Current calculator entry
///
/// Always a valid partial numeric literal (`"0"`, `"12."`, `"-3.5"`,
/// `"1.2e20"`) or the `Error` marker. Every mutator re-establishes the
/// invariants: never empty, at most one decimal point, no redundant
/// leading zeros, and no more than the configured number of characters
/// after an optional leading minus sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Entry {
    text: String,
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    /// The canonical `"0"` entry
    #[must_use]
    pub fn zero() -> Self {
        Self {
            text: ZERO.to_string(),
        }
    }

    /// The `Error` marker entered after a failed computation
    #[must_use]
    pub fn error() -> Self {
        Self {
            text: ERROR.to_string(),
        }
    }

    /// Builds an entry from a computed value
    #[must_use]
    pub fn from_value(value: f64, max_len: usize) -> Self {
        Self {
            text: format_value(value, max_len),
        }
    }

    /// Returns the entry text verbatim
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric value of the entry (`0` for the Error marker)
    #[must_use]
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    /// Returns true for the canonical `"0"` entry
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == ZERO
    }

    /// Returns true for the Error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.text == ERROR
    }

    /// Returns true when the entry already holds a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.') && !self.is_scientific()
    }

    /// Returns true when the entry is a result in scientific notation
    #[must_use]
    pub fn is_scientific(&self) -> bool {
        self.text.contains('e')
    }

    /// Returns true when the entry is negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// Number of characters, not counting a leading minus sign
    #[must_use]
    pub fn len(&self) -> usize {
        self.unsigned().len()
    }

    /// Entries are never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends a digit, replacing a lone `"0"`; values above 9 are ignored
    pub fn push_digit(&mut self, digit: u8, max_len: usize) {
        if digit > 9 {
            return;
        }
        let c = char::from(b'0' + digit);
        if self.is_zero() || self.is_scientific() {
            self.text = c.to_string();
            return;
        }
        self.text.push(c);
        self.truncate(max_len);
        self.normalize_leading_zeros();
    }

    /// Appends a decimal point unless one is already present
    pub fn push_dot(&mut self, max_len: usize) {
        if self.is_scientific() {
            self.text = "0.".to_string();
            return;
        }
        if self.has_decimal_point() {
            return;
        }
        self.text.push('.');
        self.truncate(max_len);
    }

    /// Removes the last character
    ///
    /// A trailing decimal point left behind is removed as well, and anything
    /// that is no longer a numeral, or only a signed zero, falls back to `"0"`.
    pub fn pop(&mut self) {
        if self.text.len() <= 1 || self.is_scientific() {
            *self = Self::zero();
            return;
        }
        self.text.pop();
        if self.text.ends_with('.') {
            self.text.pop();
        }
        self.normalize_leading_zeros();
        if matches!(self.unsigned(), "" | ZERO) {
            *self = Self::zero();
        }
    }

    /// Toggles the leading minus sign; `"0"` stays unsigned
    pub fn toggle_sign(&mut self) {
        if self.is_zero() {
            return;
        }
        if self.is_negative() {
            self.text.remove(0);
        } else {
            self.text.insert(0, '-');
        }
    }

    fn unsigned(&self) -> &str {
        self.text.strip_prefix('-').unwrap_or(&self.text)
    }

    fn truncate(&mut self, max_len: usize) {
        let sign_len = usize::from(self.is_negative());
        self.text.truncate(sign_len + max_len);
    }

    fn normalize_leading_zeros(&mut self) {
        let negative = self.is_negative();
        let unsigned = self.unsigned();
        let bytes = unsigned.as_bytes();
        let mut start = 0;
        while start + 1 < bytes.len() && bytes[start] == b'0' && bytes[start + 1].is_ascii_digit()
        {
            start += 1;
        }
        if start > 0 {
            let stripped = unsigned[start..].to_string();
            self.text = if negative {
                format!("-{stripped}")
            } else {
                stripped
            };
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Entry {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ERROR {
            return Ok(Self::error());
        }
        let invalid = || CalcError::InvalidEntry(s.to_string());

        if s.contains('e') {
            let value: f64 = s.parse().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            return Ok(Self {
                text: s.to_string(),
            });
        }

        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let starts_with_digit = unsigned
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        let only_numeral_chars = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.');
        let dots = unsigned.matches('.').count();
        if !starts_with_digit || !only_numeral_chars || dots > 1 {
            return Err(invalid());
        }

        let mut entry = Self {
            text: s.to_string(),
        };
        entry.normalize_leading_zeros();
        Ok(entry)
    }
}

impl TryFrom<String> for Entry {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.text
    }
}
