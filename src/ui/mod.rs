//! Terminal keypad front-end for the calculator.

mod app;
mod input;
mod keypad;
mod render;
mod terminal;

pub use app::{CalculatorApp, StatusLine};
pub use input::{KeyAction, map_key};
pub use keypad::{ButtonKind, Direction, Keypad, KeypadButton, KeypadWidget};
pub use render::{AppLayout, layout, render};
pub use terminal::run;
