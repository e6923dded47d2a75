//! Terminal setup and the event loop.

use super::app::CalculatorApp;
use super::input::map_key;
use super::render::{layout, render};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, stdout};

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore(&mut stdout());
                Err(err)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

fn restore<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Run the keypad UI until the user quits.
pub fn run(mut app: CalculatorApp) -> io::Result<()> {
    let mut session = TerminalSession::new()?;
    tracing::info!("keypad ui started");

    while !app.should_quit() {
        session.terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.apply(map_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = session.terminal.size()?;
                let keypad = layout(Rect::new(0, 0, size.width, size.height)).keypad;
                app.click(keypad, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    tracing::info!(value = app.calculator().current_input(), "keypad ui closed");
    Ok(())
}
