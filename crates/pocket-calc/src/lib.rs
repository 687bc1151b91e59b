//! Pocket Calculator - button-driven arithmetic state machine
//!
//! A four-function calculator in the style of a pocket device: digits are
//! entered one at a time, operators chain left to right without
//! precedence, and the result is rendered on two lines (the pending
//! `"<value> <operator>"` line and the current entry).
//!
//! The state machine in [`core`] is pure. [`Calculator`] owns one state
//! value and calls a render callback after every event; [`Keypad`] and
//! [`CalcInput::from_key`] turn button ids and key names into events.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.run([
//!     CalcInput::Digit(2),
//!     CalcInput::Operator(Operator::Add),
//!     CalcInput::Digit(3),
//!     CalcInput::Operator(Operator::Multiply),
//! ]);
//! assert_eq!(calc.display().previous_line, "5 ×");
//!
//! calc.handle(CalcInput::Digit(4));
//! assert_eq!(calc.handle(CalcInput::Equals).current_line, "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod display;
pub mod driver;
pub mod input;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::CalculatorConfig;
pub use controller::Calculator;
pub use display::Display;
pub use input::CalcInput;
pub use keypad::Keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::{Calculator, RenderFn};
    pub use crate::core::{
        compute, CalcError, CalcResult, CalculatorState, Entry, Operator, Phase, Transition,
    };
    pub use crate::display::Display;
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::input::CalcInput;
    pub use crate::keypad::{Keypad, KeypadButtonDef};

    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction};
}
