//! Terminal Keys Demo
//!
//! Reads raw key presses with crossterm and feeds them to the calculator.
//! Press `q` or Ctrl+C to quit.
//!
//! Run with: cargo run --example terminal_keys --features tui

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use pocket_calc::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let result = run();
    disable_raw_mode()?;
    println!();

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
    Ok(())
}

fn run() -> io::Result<()> {
    let mut calc = Calculator::new().with_renderer(|display| {
        let mut out = io::stdout();
        // raw mode: return to column 0 ourselves
        let _ = write!(
            out,
            "\r\x1b[2K{:>16} | {:>16}",
            display.previous_line, display.current_line
        );
        let _ = out.flush();
    });

    let handler = InputHandler::new();
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match handler.handle_key(key) {
                KeyAction::Input(input) => {
                    calc.handle(input);
                }
                KeyAction::Quit => return Ok(()),
                KeyAction::None => {}
            }
        }
    }
}
