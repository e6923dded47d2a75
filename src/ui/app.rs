//! Keypad UI state.

use super::input::KeyAction;
use super::keypad::{Direction, Keypad};
use crate::calculator::{Calculator, InputEvent, copy_to_clipboard};
use ratatui::layout::Rect;

/// A one-line message shown under the keypad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// The calculator plus keypad selection and UI flags.
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    selected: usize,
    /// Button flashed for the last input, if it has one.
    pressed: Option<usize>,
    status: Option<StatusLine>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    pub fn new() -> Self {
        let keypad = Keypad::new();
        let selected = keypad.index_of(InputEvent::Equals).unwrap_or(0);

        Self {
            calculator: Calculator::new(),
            keypad,
            selected,
            pressed: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a mapped key press.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(event) => self.press(event),
            KeyAction::Move(direction) => self.move_selection(direction),
            KeyAction::PressSelected => self.press_selected(),
            KeyAction::Copy => self.copy_current(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Send an event to the calculator and flash its button.
    pub fn press(&mut self, event: InputEvent) {
        self.calculator.handle(event);
        self.pressed = self.keypad.index_of(event);
        self.status = None;
    }

    pub fn press_selected(&mut self) {
        if let Some(button) = self.keypad.get(self.selected) {
            let event = button.event;
            self.press(event);
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.selected = self.keypad.neighbour(self.selected, direction);
    }

    /// Handle a left click at a screen position; `keypad_area` is where the
    /// keypad was last drawn.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(index) = self.keypad.hit_test(keypad_area, x, y) {
            self.selected = index;
            self.press_selected();
        }
    }

    /// Copy the full, untruncated current value.
    pub fn copy_current(&mut self) {
        let value = self.calculator.current_input().to_string();
        self.status = Some(match copy_to_clipboard(&value) {
            Ok(()) => StatusLine {
                text: format!("Copied {value}"),
                is_error: false,
            },
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                StatusLine {
                    text: err.to_string(),
                    is_error: true,
                }
            }
        });
    }
}
