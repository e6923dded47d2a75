//! Input events accepted by the calculator engine.
//!
//! Button presses, keystrokes and batch tokens are all translated into an
//! [`InputEvent`] before they reach [`Calculator::handle`](super::Calculator::handle).

use std::fmt;
use thiserror::Error;

/// A batch token that is neither a button label nor a run of key characters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown key {0:?}")]
pub struct UnknownKey(pub String);

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol shown on the keypad and in the history line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Map a typed or displayed operator character.
    ///
    /// Both the ASCII keyboard forms (`*`, `/`) and the keypad glyphs
    /// (`×`, `÷`) are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero is not checked here; see [`super::evaluation`].
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A discrete input to the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit `0`-`9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// An arithmetic operator.
    Operator(Operator),
    /// `=` / Enter.
    Equals,
    /// `AC`: reset everything.
    ClearAll,
    /// `CE`: reset only the value being entered.
    ClearEntry,
    /// `±`.
    ToggleSign,
    /// Delete the last character.
    Backspace,
}

impl InputEvent {
    /// Create a digit event, rejecting values above 9.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Map a single typed character.
    ///
    /// Returns `None` for characters with no calculator meaning.
    pub fn from_key(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }

        match c {
            '.' => Some(Self::Decimal),
            '=' | '\r' | '\n' => Some(Self::Equals),
            'c' | 'C' => Some(Self::ClearAll),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// Map a button label or key name.
    ///
    /// Accepts everything [`InputEvent::from_key`] does plus the multi-character
    /// keypad labels (`AC`, `CE`, `±`) and key names (`Enter`, `Esc`,
    /// `Backspace`). Matching of key names is case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(event) = Self::single_char_label(c)
        {
            return Some(event);
        }

        match label.to_ascii_lowercase().as_str() {
            "ac" | "esc" | "escape" => Some(Self::ClearAll),
            "ce" => Some(Self::ClearEntry),
            "+/-" | "neg" => Some(Self::ToggleSign),
            "enter" | "return" => Some(Self::Equals),
            "backspace" | "bs" => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Parse batch tokens into events.
    ///
    /// Each token is either a label accepted by [`InputEvent::from_label`] or
    /// a run of key characters such as `12+3=`.
    pub fn parse_keys<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Self>, UnknownKey> {
        let mut events = Vec::new();
        for token in tokens {
            if let Some(event) = Self::from_label(token) {
                events.push(event);
                continue;
            }

            let run = token
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Self::single_char_label)
                .collect::<Option<Vec<_>>>()
                .filter(|run| !run.is_empty())
                .ok_or_else(|| UnknownKey(token.to_string()))?;
            events.extend(run);
        }
        Ok(events)
    }

    fn single_char_label(c: char) -> Option<Self> {
        match c {
            '±' => Some(Self::ToggleSign),
            '⌫' => Some(Self::Backspace),
            _ => Self::from_key(c),
        }
    }

    /// The keypad label for this event.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for c in '0'..='9' {
            let expected = c.to_digit(10).unwrap() as u8;
            assert_eq!(InputEvent::from_key(c), Some(InputEvent::Digit(expected)));
        }
        assert_eq!(InputEvent::digit(10), None);
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(
            InputEvent::from_key('*'),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_key('×'),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_key('/'),
            Some(InputEvent::Operator(Operator::Divide))
        );
        assert_eq!(
            InputEvent::from_label("÷"),
            Some(InputEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(InputEvent::from_key('\r'), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key('='), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key('c'), Some(InputEvent::ClearAll));
        assert_eq!(InputEvent::from_key('C'), Some(InputEvent::ClearAll));
        assert_eq!(InputEvent::from_key('x'), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(InputEvent::from_label("AC"), Some(InputEvent::ClearAll));
        assert_eq!(InputEvent::from_label("Escape"), Some(InputEvent::ClearAll));
        assert_eq!(InputEvent::from_label("CE"), Some(InputEvent::ClearEntry));
        assert_eq!(InputEvent::from_label("±"), Some(InputEvent::ToggleSign));
        assert_eq!(InputEvent::from_label("Enter"), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_label("backspace"), Some(InputEvent::Backspace));
        assert_eq!(InputEvent::from_label(" 7 "), Some(InputEvent::Digit(7)));
        assert_eq!(InputEvent::from_label("sqrt"), None);
        assert_eq!(InputEvent::from_label(""), None);
    }

    #[test]
    fn test_parse_keys() {
        let events = InputEvent::parse_keys(["12+3", "=", "±", "CE"]).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(1),
                InputEvent::Digit(2),
                InputEvent::Operator(Operator::Add),
                InputEvent::Digit(3),
                InputEvent::Equals,
                InputEvent::ToggleSign,
                InputEvent::ClearEntry,
            ]
        );
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        assert_eq!(
            InputEvent::parse_keys(["1", "2x"]),
            Err(UnknownKey("2x".to_string()))
        );
        assert_eq!(
            InputEvent::parse_keys([""]),
            Err(UnknownKey(String::new()))
        );
    }

    #[test]
    fn test_labels_parse_back() {
        let events = [
            InputEvent::Digit(4),
            InputEvent::Decimal,
            InputEvent::Operator(Operator::Subtract),
            InputEvent::Equals,
            InputEvent::ClearAll,
            InputEvent::ClearEntry,
            InputEvent::ToggleSign,
            InputEvent::Backspace,
        ];
        for event in events {
            assert_eq!(InputEvent::from_label(&event.label()), Some(event));
        }
    }
}
