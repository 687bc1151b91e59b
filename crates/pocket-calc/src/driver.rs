//! Unified Calculator Driver
//!
//! Scenario functions are written once against [`CalculatorDriver`] and
//! run against any front end that implements it.

use crate::config::CalculatorConfig;
use crate::controller::Calculator;
use crate::core::{CalcResult, Operator};
use crate::display::Display;
use crate::input::CalcInput;
use crate::keypad::Keypad;
use std::cell::RefCell;
use std::rc::Rc;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Sends one normalized input event
    fn press(&mut self, input: CalcInput);

    /// Clicks a keypad button by element id; returns false for unknown ids
    fn click(&mut self, element_id: &str) -> bool;

    /// Text currently shown on the top line
    fn previous_line(&self) -> String;

    /// Text currently shown on the bottom line
    fn current_line(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Sends a sequence of events
    fn press_all(&mut self, inputs: &[CalcInput]) {
        for input in inputs {
            self.press(*input);
        }
    }

    /// Types a numeral digit by digit (`.` enters a decimal point)
    fn type_number(&mut self, numeral: &str) {
        for c in numeral.chars() {
            if let Some(input) = CalcInput::from_key(&c.to_string()) {
                self.press(input);
            }
        }
    }
}

/// Driver that routes keypad clicks into a [`Calculator`] and reads the
/// lines back from what the render callback last drew
#[derive(Debug)]
pub struct KeypadDriver {
    calculator: Calculator,
    keypad: Keypad,
    screen: Rc<RefCell<Display>>,
    frames: Rc<RefCell<usize>>,
}

impl Default for KeypadDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::attach(Calculator::new())
    }

    /// Creates a driver with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> CalcResult<Self> {
        Ok(Self::attach(Calculator::with_config(config)?))
    }

    fn attach(mut calculator: Calculator) -> Self {
        let screen = Rc::new(RefCell::new(Display::default()));
        let frames = Rc::new(RefCell::new(0));
        let (screen_sink, frame_sink) = (Rc::clone(&screen), Rc::clone(&frames));
        calculator.set_renderer(move |display| {
            screen_sink.borrow_mut().clone_from(display);
            *frame_sink.borrow_mut() += 1;
        });
        Self {
            calculator,
            keypad: Keypad::new(),
            screen,
            frames,
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Number of frames drawn so far, including the initial one
    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        *self.frames.borrow()
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, input: CalcInput) {
        self.calculator.handle(input);
    }

    fn click(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(input) => {
                self.calculator.handle(input);
                true
            }
            None => false,
        }
    }

    fn previous_line(&self) -> String {
        self.screen.borrow().previous_line.clone()
    }

    fn current_line(&self) -> String {
        self.screen.borrow().current_line.clone()
    }

    fn reset(&mut self) {
        self.calculator.reset();
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four basic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2", Operator::Add, "3", "5"),
        ("10", Operator::Subtract, "4", "6"),
        ("6", Operator::Multiply, "7", "42"),
        ("20", Operator::Divide, "4", "5"),
    ];
    for (a, op, b, expected) in cases {
        driver.reset();
        driver.type_number(a);
        driver.press(CalcInput::Operator(op));
        driver.type_number(b);
        driver.press(CalcInput::Equals);
        assert_eq!(driver.current_line(), expected, "{a} {op} {b}");
        assert_eq!(driver.previous_line(), "");
    }
    driver.reset();
}

/// Verifies the top line while an operator is pending
pub fn verify_pending_operator_line<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_number("5");
    driver.press(CalcInput::Operator(Operator::Add));
    assert_eq!(driver.previous_line(), "5 +");
    assert_eq!(driver.current_line(), "0");

    // switching operators chains the pending one with the "0" entry
    for (op, line) in [(Operator::Subtract, "5 −"), (Operator::Add, "5 +")] {
        driver.press(CalcInput::Operator(op));
        assert_eq!(driver.previous_line(), line);
    }

    for (op, line) in [(Operator::Multiply, "8 ×"), (Operator::Divide, "8 ÷")] {
        driver.reset();
        driver.type_number("8");
        driver.press(CalcInput::Operator(op));
        assert_eq!(driver.previous_line(), line);
    }
    driver.reset();
}

/// Verifies left-to-right chaining: 2 + 3 × 4 = 20
pub fn verify_chained_calculation<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_number("2");
    driver.press(CalcInput::Operator(Operator::Add));
    driver.type_number("3");
    driver.press(CalcInput::Operator(Operator::Multiply));
    assert_eq!(driver.previous_line(), "5 ×");
    driver.type_number("4");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.current_line(), "20");
    driver.reset();
}

/// Verifies that division by zero shows Error until cleared
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_number("5");
    driver.press(CalcInput::Operator(Operator::Divide));
    driver.type_number("0");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.current_line(), "Error");
    assert_eq!(driver.previous_line(), "");

    driver.type_number("7");
    driver.press(CalcInput::Sign);
    assert_eq!(driver.current_line(), "Error");

    driver.press(CalcInput::Clear);
    assert_eq!(driver.current_line(), "0");
    driver.reset();
}

/// Verifies the entry editing keys: delete, sign and percent
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_number("12.");
    driver.press(CalcInput::Delete);
    assert_eq!(driver.current_line(), "12");
    driver.press(CalcInput::Delete);
    driver.press(CalcInput::Delete);
    assert_eq!(driver.current_line(), "0");

    driver.press(CalcInput::Sign);
    assert_eq!(driver.current_line(), "0");
    driver.type_number("5");
    driver.press(CalcInput::Sign);
    assert_eq!(driver.current_line(), "-5");
    driver.press(CalcInput::Sign);
    assert_eq!(driver.current_line(), "5");

    driver.type_number("0");
    driver.press(CalcInput::Percent);
    assert_eq!(driver.current_line(), "0.5");
    driver.reset();
}

/// Verifies that rounding hides floating point noise
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_number("0.1");
    driver.press(CalcInput::Operator(Operator::Add));
    driver.type_number("0.2");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.current_line(), "0.3");
    driver.reset();
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_pending_operator_line(driver);
    verify_chained_calculation(driver);
    verify_division_by_zero(driver);
    verify_entry_editing(driver);
    verify_rounding(driver);
}
