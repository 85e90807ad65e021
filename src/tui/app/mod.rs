//! Terminal lifecycle shared by TUI applications.

pub mod status_footer;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

/// Control flow signal returned by key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Keep running
    Continue,
    /// Exit without producing output
    Quit,
    /// Exit and hand the result to the caller
    Submit,
}

/// An application that can be driven by [`App::run`].
pub trait TuiApp {
    /// Draw one frame.
    fn render(&mut self, frame: &mut Frame);

    /// React to a key press.
    fn handle_key(&mut self, key: KeyEvent) -> KeyResult;
}

/// Owns the terminal while a TUI application runs.
pub struct App {
    terminal: DefaultTerminal,
    tick_rate: Duration,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            terminal: ratatui::init(),
            tick_rate,
        }
    }

    /// Run the draw/input loop until the application quits or submits.
    #[cfg(not(tarpaulin_include))]
    pub fn run<A: TuiApp>(&mut self, app: &mut A) -> Result<KeyResult> {
        loop {
            self.terminal.draw(|frame| app.render(frame))?;

            if !event::poll(self.tick_rate)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported by some terminals
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key) {
                    KeyResult::Continue => {}
                    result => return Ok(result),
                }
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
