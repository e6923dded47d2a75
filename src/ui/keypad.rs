//! The on-screen button grid.
//!
//! ```text
//!  AC  CE  ±   ÷
//!  7   8   9   ×
//!  4   5   6   -
//!  1   2   3   +
//!  0 (2 wide)  .   =
//! ```

use crate::calculator::{InputEvent, Operator};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Visual grouping of buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Equals,
    Clear,
    Function,
}

impl ButtonKind {
    fn style(self) -> Style {
        let color = match self {
            Self::Number => Color::White,
            Self::Operator => Color::Red,
            Self::Equals => Color::Green,
            Self::Clear => Color::Yellow,
            Self::Function => Color::Magenta,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// A button and the grid cells it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypadButton {
    pub event: InputEvent,
    pub kind: ButtonKind,
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
}

impl KeypadButton {
    fn new(event: InputEvent, kind: ButtonKind, row: usize, col: usize) -> Self {
        Self {
            event,
            kind,
            row,
            col,
            col_span: 1,
        }
    }

    fn wide(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }

    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Whether the button covers the cell at `row`, `col`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// Direction for moving the keyboard selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        use ButtonKind::{Clear, Equals, Function, Number};

        let digit = |d: u8, row, col| KeypadButton::new(InputEvent::Digit(d), Number, row, col);
        let op = |op: Operator, row, col| {
            KeypadButton::new(InputEvent::Operator(op), ButtonKind::Operator, row, col)
        };

        let buttons = vec![
            KeypadButton::new(InputEvent::ClearAll, Clear, 0, 0),
            KeypadButton::new(InputEvent::ClearEntry, Clear, 0, 1),
            KeypadButton::new(InputEvent::ToggleSign, Function, 0, 2),
            op(Operator::Divide, 0, 3),
            digit(7, 1, 0),
            digit(8, 1, 1),
            digit(9, 1, 2),
            op(Operator::Multiply, 1, 3),
            digit(4, 2, 0),
            digit(5, 2, 1),
            digit(6, 2, 2),
            op(Operator::Subtract, 2, 3),
            digit(1, 3, 0),
            digit(2, 3, 1),
            digit(3, 3, 2),
            op(Operator::Add, 3, 3),
            digit(0, 4, 0).wide(2),
            KeypadButton::new(InputEvent::Decimal, Number, 4, 2),
            KeypadButton::new(InputEvent::Equals, Equals, 4, 3),
        ];

        Self { buttons }
    }

    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    pub fn get(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering a grid cell.
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Index of the button that sends `event`.
    pub fn index_of(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// The neighbour of button `from` in `direction`, or `from` at the edge.
    pub fn neighbour(&self, from: usize, direction: Direction) -> usize {
        let Some(button) = self.buttons.get(from) else {
            return from;
        };

        let target = match direction {
            Direction::Up => button.row.checked_sub(1).map(|row| (row, button.col)),
            Direction::Down => Some((button.row + 1, button.col)),
            Direction::Left => button.col.checked_sub(1).map(|col| (button.row, col)),
            Direction::Right => Some((button.row, button.col + button.col_span)),
        };

        target
            .and_then(|(row, col)| self.index_at(row, col))
            .unwrap_or(from)
    }

    /// Map a screen position inside the widget `area` to a button index.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if !inner.contains((x, y).into()) {
            return None;
        }

        let cell_width = inner.width / COLS as u16;
        let cell_height = inner.height / ROWS as u16;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }

        let col = ((x - inner.x) / cell_width) as usize;
        let row = ((y - inner.y) / cell_height) as usize;
        self.index_at(row, col)
    }
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Renders a [`Keypad`] with one button selected and optionally one flashed.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    selected: usize,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(keypad: &'a Keypad, selected: usize, pressed: Option<usize>) -> Self {
        Self {
            keypad,
            selected,
            pressed,
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner_area(area);
        let cell_width = inner.width / COLS as u16;
        let cell_height = inner.height / ROWS as u16;
        if cell_width < 3 || cell_height == 0 {
            return;
        }

        for (index, button) in self.keypad.buttons().iter().enumerate() {
            let rect = Rect {
                x: inner.x + button.col as u16 * cell_width,
                y: inner.y + button.row as u16 * cell_height,
                width: cell_width * button.col_span as u16,
                height: cell_height,
            };

            let mut style = button.kind.style();
            if self.pressed == Some(index) {
                style = style.bg(Color::DarkGray);
            }
            if self.selected == index {
                style = style.add_modifier(Modifier::REVERSED);
            }

            // Leave a one column gap between buttons.
            let face = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            buf.set_style(face, style);

            let label = button.label();
            let label_width = label.chars().count() as u16;
            let label_x = face.x + face.width.saturating_sub(label_width) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_string(label_x, label_y, &label, style);
        }
    }
}
