//! Four-function keypad calculator.
//!
//! This module provides functionality to:
//! - Translate keypad buttons and keystrokes into input events
//! - Track operands and the pending operator across chained entry
//! - Format results and project the state onto the display
//! - Copy the displayed value to the clipboard

mod clipboard;
mod display;
mod engine;
mod evaluation;
mod event;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::Display;
pub use engine::{Calculator, ERROR_MARKER};
pub use evaluation::{CalcError, evaluate, format_result};
pub use event::{InputEvent, Operator, UnknownKey};
