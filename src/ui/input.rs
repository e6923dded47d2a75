//! Keyboard handling for the keypad UI.

use super::keypad::Direction;
use crate::calculator::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator.
    Input(InputEvent),
    /// Move the keypad selection.
    Move(Direction),
    /// Press the selected keypad button.
    PressSelected,
    /// Copy the current value to the clipboard.
    Copy,
    Quit,
    None,
}

/// Map a key event to an action.
pub fn map_key(event: KeyEvent) -> KeyAction {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c' | 'q') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('y') => KeyAction::Copy,
        KeyCode::Char(' ') => KeyAction::PressSelected,
        KeyCode::Char(c) => InputEvent::from_key(c).map_or(KeyAction::None, KeyAction::Input),
        KeyCode::Enter => KeyAction::Input(InputEvent::Equals),
        KeyCode::Esc => KeyAction::Input(InputEvent::ClearAll),
        KeyCode::Delete => KeyAction::Input(InputEvent::ClearEntry),
        KeyCode::Backspace => KeyAction::Input(InputEvent::Backspace),
        KeyCode::F(9) => KeyAction::Input(InputEvent::ToggleSign),
        KeyCode::Up => KeyAction::Move(Direction::Up),
        KeyCode::Down => KeyAction::Move(Direction::Down),
        KeyCode::Left => KeyAction::Move(Direction::Left),
        KeyCode::Right => KeyAction::Move(Direction::Right),
        _ => KeyAction::None,
    }
}
