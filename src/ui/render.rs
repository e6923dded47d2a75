//! Drawing the keypad UI.

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Widest the calculator gets; it is centered in larger terminals.
const MAX_WIDTH: u16 = 30;

const HELP: &str = "space: press  y: copy  q: quit";

/// Screen areas of the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

/// Split the terminal area. Also used for mouse hit testing.
pub fn layout(area: Rect) -> AppLayout {
    let width = area.width.min(MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // History + value
            Constraint::Min(7),    // Keypad
            Constraint::Length(1), // Status
        ])
        .split(column);

    AppLayout {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
    }
}

pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let areas = layout(frame.area());

    render_display(app, frame, areas.display);
    frame.render_widget(
        KeypadWidget::new(app.keypad(), app.selected(), app.pressed()),
        areas.keypad,
    );
    render_status(app, frame, areas.status);
}

fn render_display(app: &CalculatorApp, frame: &mut Frame, area: Rect) {
    let display = app.calculator().display();

    let value_style = if display.is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            display.history,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(display.primary, value_style)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .title(" Calculator ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status(app: &CalculatorApp, frame: &mut Frame, area: Rect) {
    let line = match app.status() {
        Some(status) if status.is_error => {
            Span::styled(status.text.as_str(), Style::default().fg(Color::Red))
        }
        Some(status) => Span::styled(status.text.as_str(), Style::default().fg(Color::Green)),
        None => Span::styled(HELP, Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
