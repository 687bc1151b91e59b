//! Calculator controller
//!
//! Owns the single [`CalculatorState`] of a calculator instance, feeds it
//! input events and hands every resulting [`Display`] to the render
//! callback installed by the front end.

use crate::config::CalculatorConfig;
use crate::core::{CalcResult, CalculatorState, Phase};
use crate::display::Display;
use crate::input::CalcInput;
use tracing::{debug, trace, warn};

/// Render callback invoked after every handled event
pub type RenderFn = Box<dyn FnMut(&Display)>;

/// Calculator owning its state and render callback
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    display: Display,
    renderer: Option<RenderFn>,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("display", &self.display)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::build(CalculatorConfig::default())
    }

    /// Creates a calculator with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CalculatorConfig) -> Self {
        let state = CalculatorState::new();
        let display = state.display(&config);
        Self {
            state,
            config,
            display,
            renderer: None,
        }
    }

    /// Installs the render callback and renders the current display once
    pub fn set_renderer(&mut self, renderer: impl FnMut(&Display) + 'static) {
        let mut renderer: RenderFn = Box::new(renderer);
        renderer(&self.display);
        self.renderer = Some(renderer);
    }

    /// Builder form of [`Calculator::set_renderer`]
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl FnMut(&Display) + 'static) -> Self {
        self.set_renderer(renderer);
        self
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current display
    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Handles one input event and renders the result
    pub fn handle(&mut self, input: CalcInput) -> &Display {
        let before = self.state.phase();
        if before == Phase::Error && input != CalcInput::Clear {
            trace!(?input, "ignored while in error");
        }

        let transition = self.state.apply(input, &self.config);
        self.state = transition.state;
        self.display = transition.display;

        let after = self.state.phase();
        if after == Phase::Error && before != Phase::Error {
            if let Some(err) = self.state.error().filter(|e| e.is_arithmetic()) {
                warn!(?input, error = %err, "calculation failed");
            }
        }
        debug!(
            ?input,
            phase = ?after,
            current = %self.display.current_line,
            "handled input"
        );

        if let Some(renderer) = self.renderer.as_mut() {
            renderer(&self.display);
        }
        &self.display
    }

    /// Handles a keyboard key; unmapped keys are ignored
    pub fn press_key(&mut self, key: &str) -> Option<&Display> {
        match CalcInput::from_key(key) {
            Some(input) => Some(self.handle(input)),
            None => {
                trace!(key, "unmapped key");
                None
            }
        }
    }

    /// Handles a sequence of events, returning the final display
    pub fn run<I>(&mut self, inputs: I) -> &Display
    where
        I: IntoIterator<Item = CalcInput>,
    {
        for input in inputs {
            self.handle(input);
        }
        &self.display
    }

    /// Resets the calculator, same as a `clear()` event
    pub fn reset(&mut self) -> &Display {
        self.handle(CalcInput::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<Display>>>, impl FnMut(&Display) + 'static) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        (frames, move |d: &Display| sink.borrow_mut().push(d.clone()))
    }

    // ===== Constructor tests =====

    #[test]
    fn test_calculator_new() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), &Display::new("", "0"));
        assert_eq!(calc.config(), &CalculatorConfig::default());
        assert_eq!(calc.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_calculator_with_config() {
        let config = CalculatorConfig::new().with_max_input_len(4);
        let mut calc = Calculator::with_config(config).unwrap();
        calc.run([1, 2, 3, 4, 5, 6].map(CalcInput::Digit));
        assert_eq!(calc.display().current_line, "1234");
    }

    #[test]
    fn test_calculator_with_invalid_config() {
        let config = CalculatorConfig::new().with_precision(40);
        assert!(Calculator::with_config(config).is_err());
    }

    #[test]
    fn test_calculator_debug() {
        let calc = Calculator::new().with_renderer(|_| {});
        let debug = format!("{calc:?}");
        assert!(debug.contains("Calculator"));
        assert!(debug.contains("renderer: true"));
    }

    // ===== Render callback tests =====

    #[test]
    fn test_renderer_receives_initial_display() {
        let (frames, sink) = recorder();
        let _calc = Calculator::new().with_renderer(sink);
        assert_eq!(frames.borrow().as_slice(), &[Display::new("", "0")]);
    }

    #[test]
    fn test_renderer_called_after_every_event() {
        let (frames, sink) = recorder();
        let mut calc = Calculator::new().with_renderer(sink);
        calc.run([
            CalcInput::Digit(5),
            CalcInput::Operator(Operator::Add),
            CalcInput::Digit(3),
            CalcInput::Equals,
        ]);
        let frames = frames.borrow();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[2], Display::new("5 +", "0"));
        assert_eq!(frames[4], Display::new("", "8"));
    }

    #[test]
    fn test_renderer_called_for_noop_events() {
        let (frames, sink) = recorder();
        let mut calc = Calculator::new().with_renderer(sink);
        calc.handle(CalcInput::Equals);
        calc.handle(CalcInput::Sign);
        assert_eq!(frames.borrow().len(), 3);
    }

    // ===== Event handling tests =====

    #[test]
    fn test_handle_returns_display() {
        let mut calc = Calculator::new();
        let display = calc.handle(CalcInput::Digit(9));
        assert_eq!(display.current_line, "9");
    }

    #[test]
    fn test_press_key() {
        let mut calc = Calculator::new();
        calc.press_key("4");
        calc.press_key("*");
        calc.press_key("2");
        let display = calc.press_key("Enter").cloned();
        assert_eq!(display, Some(Display::new("", "8")));
    }

    #[test]
    fn test_press_unmapped_key() {
        let mut calc = Calculator::new();
        assert!(calc.press_key("Tab").is_none());
        assert_eq!(calc.display().current_line, "0");
    }

    #[test]
    fn test_error_then_reset() {
        let mut calc = Calculator::new();
        calc.run([
            CalcInput::Digit(5),
            CalcInput::Operator(Operator::Divide),
            CalcInput::Digit(0),
            CalcInput::Equals,
        ]);
        assert_eq!(calc.display().current_line, "Error");
        calc.handle(CalcInput::Digit(3));
        assert_eq!(calc.display().current_line, "Error");
        calc.reset();
        assert_eq!(calc.display(), &Display::new("", "0"));
        assert_eq!(calc.state(), &CalculatorState::new());
    }
}
