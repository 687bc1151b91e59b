//! Calculator state machine
//!
//! Every handler takes the current [`CalculatorState`] by reference and
//! returns the next one; nothing is mutated in place. Division by zero and
//! overflow are absorbed here: they put the machine into its Error phase,
//! which only [`CalculatorState::clear`] leaves. Any other event while in
//! Error returns the state unchanged.

use crate::config::CalculatorConfig;
use crate::core::{compute, format_value, round_to, CalcError, Entry, Operator};
use crate::display::Display;
use crate::input::CalcInput;
use serde::Serialize;

/// Coarse phase of the machine, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Fresh state: `"0"`, nothing pending
    Idle,
    /// Digits are being entered
    AccumulatingOperand,
    /// Operator chosen, waiting for the second operand
    PendingOperator,
    /// Showing the result of `=`
    JustEvaluated,
    /// A computation failed; only clear leaves this phase
    Error,
}

/// Result of applying one input event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The state after the event
    pub state: CalculatorState,
    /// Display derived from `state`
    pub display: Display,
}

/// Calculator interaction state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CalculatorState {
    current: Entry,
    previous: Option<f64>,
    operator: Option<Operator>,
    just_evaluated: bool,
    #[serde(skip)]
    error: Option<CalcError>,
}

impl CalculatorState {
    /// Creates the default state (`"0"`, nothing pending)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry shown on the bottom line
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// Operand accumulated before the pending operator
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after `=` produced a result
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// The failure that put the machine into its Error phase
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// True while in the Error phase
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Derives the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if self.just_evaluated {
            Phase::JustEvaluated
        } else if self.operator.is_some() && self.current.is_zero() {
            Phase::PendingOperator
        } else if !self.current.is_zero() {
            Phase::AccumulatingOperand
        } else {
            Phase::Idle
        }
    }

    /// Derives the two display lines
    #[must_use]
    pub fn display(&self, config: &CalculatorConfig) -> Display {
        let previous_line = match (self.previous, self.operator) {
            (Some(value), Some(op)) => format!(
                "{} {}",
                format_value(value, config.max_input_len),
                op.display_symbol()
            ),
            _ => String::new(),
        };
        Display::new(previous_line, self.current.as_str())
    }

    /// Applies one input event
    #[must_use]
    pub fn apply(&self, input: CalcInput, config: &CalculatorConfig) -> Transition {
        let state = match input {
            CalcInput::Digit(d) => self.digit(d, config),
            CalcInput::Dot => self.dot(config),
            CalcInput::Operator(op) => self.operator(op, config),
            CalcInput::Equals => self.equals(config),
            CalcInput::Clear => self.clear(),
            CalcInput::Delete => self.delete(),
            CalcInput::Percent => self.percent(config),
            CalcInput::Sign => self.sign(),
        };
        let display = state.display(config);
        Transition { state, display }
    }

    /// Enters a digit; anything above 9 is ignored
    #[must_use]
    pub fn digit(&self, digit: u8, config: &CalculatorConfig) -> Self {
        if self.is_error() || digit > 9 {
            return self.clone();
        }
        let mut next = self.clone();
        if next.just_evaluated {
            next.current = Entry::zero();
            next.just_evaluated = false;
        }
        next.current.push_digit(digit, config.max_input_len);
        next
    }

    /// Enters a decimal point
    #[must_use]
    pub fn dot(&self, config: &CalculatorConfig) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        if next.just_evaluated {
            next.current = Entry::zero();
            next.just_evaluated = false;
        }
        next.current.push_dot(config.max_input_len);
        next
    }

    /// Selects an operator, evaluating a pending one first
    #[must_use]
    pub fn operator(&self, op: Operator, config: &CalculatorConfig) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let current = self.current.value();
        let previous = match (self.previous, self.operator) {
            (None, _) => current,
            (Some(previous), Some(pending)) if !self.just_evaluated => {
                match compute(previous, pending, current) {
                    Ok(result) => round_to(result, config.precision),
                    Err(err) => return Self::failed(err),
                }
            }
            (Some(previous), _) => previous,
        };
        Self {
            current: Entry::zero(),
            previous: Some(previous),
            operator: Some(op),
            just_evaluated: false,
            error: None,
        }
    }

    /// Evaluates the pending operation; no-op when nothing is pending
    #[must_use]
    pub fn equals(&self, config: &CalculatorConfig) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let (Some(previous), Some(op)) = (self.previous, self.operator) else {
            return self.clone();
        };
        match compute(previous, op, self.current.value()) {
            Ok(result) => Self {
                current: Entry::from_value(
                    round_to(result, config.precision),
                    config.max_input_len,
                ),
                previous: None,
                operator: None,
                just_evaluated: true,
                error: None,
            },
            Err(err) => Self::failed(err),
        }
    }

    /// Resets everything, including the Error phase
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Removes the last character of the entry
    #[must_use]
    pub fn delete(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        if next.just_evaluated {
            next.current = Entry::zero();
            next.just_evaluated = false;
        } else {
            next.current.pop();
        }
        next
    }

    /// Divides the entry by 100
    #[must_use]
    pub fn percent(&self, config: &CalculatorConfig) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let value = round_to(self.current.value() / 100.0, config.precision);
        Self {
            current: Entry::from_value(value, config.max_input_len),
            ..self.clone()
        }
    }

    /// Toggles the sign of the entry
    #[must_use]
    pub fn sign(&self) -> Self {
        if self.is_error() {
            return self.clone();
        }
        let mut next = self.clone();
        next.current.toggle_sign();
        next
    }

    fn failed(err: CalcError) -> Self {
        Self {
            current: Entry::error(),
            previous: None,
            operator: None,
            just_evaluated: false,
            error: Some(err),
        }
    }
}
