//! Calculator keypad layout
//!
//! Maps button element ids to input events so that a front end only has
//! to forward the id of whatever was clicked.

use crate::core::Operator;
use crate::input::CalcInput;

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button produces
    pub input: CalcInput,
    /// The element id for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(input: CalcInput, row: usize, col: usize) -> Self {
        let id = match input {
            CalcInput::Digit(d) => format!("btn-{d}"),
            CalcInput::Dot => "btn-decimal".to_string(),
            CalcInput::Operator(op) => format!("btn-{}", op_name(op)),
            CalcInput::Equals => "btn-equals".to_string(),
            CalcInput::Clear => "btn-clear".to_string(),
            CalcInput::Delete => "btn-delete".to_string(),
            CalcInput::Percent => "btn-percent".to_string(),
            CalcInput::Sign => "btn-sign".to_string(),
        };
        Self { input, id, row, col }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.input.label()
    }
}

fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Keypad layout definition
///
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use CalcInput::{Clear, Delete, Digit, Dot, Equals, Percent, Sign};

        let grid = [
            [Clear, Sign, Percent, CalcInput::Operator(Operator::Divide)],
            [Digit(7), Digit(8), Digit(9), CalcInput::Operator(Operator::Multiply)],
            [Digit(4), Digit(5), Digit(6), CalcInput::Operator(Operator::Subtract)],
            [Digit(1), Digit(2), Digit(3), CalcInput::Operator(Operator::Add)],
            [Digit(0), Dot, Delete, Equals],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, inputs)| {
                inputs
                    .iter()
                    .enumerate()
                    .map(move |(col, input)| KeypadButtonDef::new(*input, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing `input`
    #[must_use]
    pub fn find_button_for(&self, input: CalcInput) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Translates a click on `element_id` into an input event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<CalcInput> {
        self.find_button_by_id(element_id).map(|btn| btn.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButtonDef tests =====

    #[test]
    fn test_button_def_digit() {
        let btn = KeypadButtonDef::new(CalcInput::Digit(5), 2, 1);
        assert_eq!(btn.id, "btn-5");
        assert_eq!(btn.label(), "5");
        assert_eq!((btn.row, btn.col), (2, 1));
    }

    #[test]
    fn test_button_def_operators() {
        let ids: Vec<String> = Operator::ALL
            .iter()
            .map(|op| KeypadButtonDef::new(CalcInput::Operator(*op), 0, 0).id)
            .collect();
        assert_eq!(ids, ["btn-divide", "btn-times", "btn-minus", "btn-plus"]);
    }

    #[test]
    fn test_button_def_special() {
        let cases = [
            (CalcInput::Dot, "btn-decimal"),
            (CalcInput::Equals, "btn-equals"),
            (CalcInput::Clear, "btn-clear"),
            (CalcInput::Delete, "btn-delete"),
            (CalcInput::Percent, "btn-percent"),
            (CalcInput::Sign, "btn-sign"),
        ];
        for (input, id) in cases {
            assert_eq!(KeypadButtonDef::new(input, 0, 0).id, id);
        }
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 20);
    }

    #[test]
    fn test_keypad_corners() {
        let keypad = Keypad::default();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().input, CalcInput::Clear);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().input,
            CalcInput::Operator(Operator::Divide)
        );
        assert_eq!(keypad.get_button_at(4, 0).unwrap().input, CalcInput::Digit(0));
        assert_eq!(keypad.get_button_at(4, 3).unwrap().input, CalcInput::Equals);
    }

    #[test]
    fn test_keypad_positions_match_definitions() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            assert_eq!(keypad.get_button_at(btn.row, btn.col), Some(btn));
        }
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_has_every_event() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button_for(CalcInput::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_button_for(CalcInput::Operator(op)).is_some());
        }
        for input in [
            CalcInput::Dot,
            CalcInput::Equals,
            CalcInput::Clear,
            CalcInput::Delete,
            CalcInput::Percent,
            CalcInput::Sign,
        ] {
            assert!(keypad.find_button_for(input).is_some(), "{input:?}");
        }
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(CalcInput::Digit(7)));
        assert_eq!(
            keypad.handle_click("btn-times"),
            Some(CalcInput::Operator(Operator::Multiply))
        );
        assert_eq!(keypad.handle_click("btn-sign"), Some(CalcInput::Sign));
        assert_eq!(keypad.handle_click("calc-display"), None);
    }
}
