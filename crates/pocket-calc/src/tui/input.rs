//! Keyboard input handling for terminal front ends

use crate::input::CalcInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input event to the calculator
    Input(CalcInput),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Input(CalcInput::Clear),
                _ => KeyAction::None,
            };
        }

        let input = match code {
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char(c) => CalcInput::from_key(&c.to_string()),
            KeyCode::Enter => Some(CalcInput::Equals),
            KeyCode::Esc | KeyCode::Delete => Some(CalcInput::Clear),
            KeyCode::Backspace => Some(CalcInput::Delete),
            KeyCode::F(9) => Some(CalcInput::Sign),
            _ => None,
        };
        input.map_or(KeyAction::None, KeyAction::Input)
    }

    /// Returns true if the key event asks to quit
    #[must_use]
    pub fn is_quit(&self, event: KeyEvent) -> bool {
        self.handle_key(event) == KeyAction::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_input_handler_new() {
        let handler = InputHandler::new();
        let _ = format!("{:?}", handler);
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(CalcInput::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Input(CalcInput::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_edit_chars() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Input(CalcInput::Dot)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Input(CalcInput::Percent)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Input(CalcInput::Equals)
        );
    }

    #[test]
    fn test_handle_ignored_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('('))),
            KeyAction::None
        );
    }

    // ===== Special key tests =====

    #[test]
    fn test_handle_special_keys() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Enter, CalcInput::Equals),
            (KeyCode::Esc, CalcInput::Clear),
            (KeyCode::Delete, CalcInput::Clear),
            (KeyCode::Backspace, CalcInput::Delete),
            (KeyCode::F(9), CalcInput::Sign),
        ];
        for (code, input) in cases {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Input(input)
            );
        }
    }

    #[test]
    fn test_handle_navigation_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Up)), KeyAction::None);
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert!(handler.is_quit(key_event_ctrl(KeyCode::Char('c'))));
        assert!(handler.is_quit(key_event_ctrl(KeyCode::Char('q'))));
        assert!(handler.is_quit(key_event(KeyCode::Char('q'))));
        assert!(!handler.is_quit(key_event(KeyCode::Char('1'))));
    }

    #[test]
    fn test_handle_ctrl_clear() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Input(CalcInput::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }
}
