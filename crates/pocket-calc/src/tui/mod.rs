//! Terminal front end support
//!
//! Maps crossterm key events onto calculator input events.

mod input;

pub use input::{InputHandler, KeyAction};
