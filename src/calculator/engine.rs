//! The calculator state machine.
//!
//! All keypad and keyboard input ends up in [`Calculator::handle`]. The
//! engine never fails outward: arithmetic errors turn into the
//! [`ERROR_MARKER`] display state and are cleared by the next input.

use super::display::Display;
use super::evaluation::evaluate;
use super::{InputEvent, Operator};

/// Value shown after a failed calculation.
pub const ERROR_MARKER: &str = "Error";

const ZERO: &str = "0";

/// An operator waiting for its second operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingOperation {
    /// The first operand, as it was displayed when the operator was pressed.
    pub operand: String,
    pub operator: Operator,
}

/// Four-function calculator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculator {
    current_input: String,
    pending: Option<PendingOperation>,
    should_reset_display: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_input: ZERO.to_string(),
            pending: None,
            should_reset_display: false,
        }
    }

    /// Dispatch a single input event.
    pub fn handle(&mut self, event: InputEvent) {
        tracing::trace!(?event, "calculator input");

        match event {
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.calculate(),
            InputEvent::ClearAll => self.clear_all(),
            InputEvent::ClearEntry => self.clear_entry(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Backspace => self.backspace(),
        }
    }

    /// Append a digit, or start a new number after an operator or result.
    pub fn input_digit(&mut self, d: u8) {
        let Some(digit) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.should_reset_display {
            self.current_input = digit.to_string();
            self.should_reset_display = false;
        } else if self.current_input == ZERO || self.is_error() {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    /// Add a decimal point. A second press on the same entry does nothing.
    pub fn input_decimal(&mut self) {
        if self.should_reset_display || self.is_error() {
            self.current_input = "0.".to_string();
            self.should_reset_display = false;
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Capture the current value as the first operand of `op`.
    ///
    /// A pending operation with a freshly entered second operand is folded
    /// first, so `3 + 4 + 5` evaluates left to right. Pressing another
    /// operator before entering a new value only swaps the operator.
    pub fn input_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }

        if self.pending.is_some() && !self.should_reset_display {
            self.calculate();
            if self.is_error() {
                return;
            }
        }

        self.pending = Some(PendingOperation {
            operand: self.current_input.clone(),
            operator: op,
        });
        self.should_reset_display = true;
    }

    /// Flip the sign of the current value. Zero and the error marker are left alone.
    pub fn toggle_sign(&mut self) {
        if self.current_input == ZERO || self.is_error() {
            return;
        }

        match self.current_input.strip_prefix('-') {
            Some(rest) => self.current_input = rest.to_string(),
            None => self.current_input.insert(0, '-'),
        }
    }

    /// Reset everything to the startup state.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Reset only the value being entered; a pending operation survives.
    pub fn clear_entry(&mut self) {
        self.current_input = ZERO.to_string();
    }

    /// Remove the last character of the current value.
    pub fn backspace(&mut self) {
        if self.is_error() || self.current_input.chars().count() <= 1 {
            self.current_input = ZERO.to_string();
            return;
        }

        self.current_input.pop();

        // A shortened scientific result must not end in a bare exponent marker.
        let kept = self.current_input.trim_end_matches(['e', '+', '-']).len();
        self.current_input.truncate(kept);

        if self.current_input.is_empty() || self.current_input == "-0" {
            self.current_input = ZERO.to_string();
        }
    }

    /// Apply the pending operation, if any.
    pub fn calculate(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match evaluate(&pending.operand, pending.operator, &self.current_input) {
            Ok(result) => {
                tracing::debug!(
                    lhs = %pending.operand,
                    op = %pending.operator,
                    rhs = %self.current_input,
                    %result,
                    "calculated"
                );
                self.current_input = result;
            }
            Err(err) => {
                tracing::debug!(
                    lhs = %pending.operand,
                    op = %pending.operator,
                    rhs = %self.current_input,
                    error = %err,
                    "calculation failed"
                );
                self.current_input = ERROR_MARKER.to_string();
            }
        }
        self.should_reset_display = true;
    }

    /// The value being entered or the last result, untruncated.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The first operand of the pending operation, or `""` when none.
    pub fn previous_input(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Whether the next digit starts a new number.
    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Whether the last calculation failed.
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_MARKER
    }

    /// Project the state onto the two display fields.
    pub fn display(&self) -> Display {
        Display::project(
            &self.current_input,
            self.pending
                .as_ref()
                .map(|p| (p.operand.as_str(), p.operator.symbol())),
            self.is_error(),
        )
    }
}
