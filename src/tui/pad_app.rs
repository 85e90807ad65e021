//! Pad TUI application
//!
//! An input field above a keypad. Typing edits the field directly; keypad
//! buttons insert their text at the field's cursor and hand focus back to
//! the field.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use super::app::status_footer::{render_footer, render_status_line};
use super::app::{App, KeyResult, TuiApp};
use super::ui::centered_rect;
use super::widgets::{InputFieldWidget, KeypadWidget};
use crate::config::Config;
use crate::input::{InsertMode, InsertOutcome, InvalidControlError, TextControl, TextField};
use crate::keypad::{Keypad, PressResult};
use crate::theme::{theme_from_config, Theme};

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Keypad,
}

/// Message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Pad application state
pub struct PadApp {
    input: TextField,
    keypad: Keypad,
    focus: Focus,
    theme: Theme,
    status: Option<Status>,
    show_help: bool,
}

impl PadApp {
    /// Create the pad with `initial` in the input field.
    ///
    /// The field is focused at start, so its cursor sits at the end of
    /// `initial`.
    pub fn new(config: &Config, initial: &str) -> Self {
        let mut keypad = Keypad::from_rows(&config.keypad.rows);
        if keypad.is_empty() {
            keypad = Keypad::default();
        }
        let mut input = TextField::with_value(initial);
        input.focus(None);

        Self {
            input,
            keypad,
            focus: Focus::Input,
            theme: theme_from_config(&config.ui.theme),
            status: None,
            show_help: false,
        }
    }

    pub fn input(&self) -> &TextField {
        &self.input
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Run until the user submits (returns the value) or quits (`None`).
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<Option<String>> {
        let result = {
            let mut app = App::new(Duration::from_millis(250));
            app.run(&mut self)?
        };
        Ok(match result {
            KeyResult::Submit => Some(self.input.value().to_string()),
            KeyResult::Quit | KeyResult::Continue => None,
        })
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => {
                self.input.blur();
                Focus::Keypad
            }
            Focus::Keypad => {
                self.input.focus(None);
                Focus::Input
            }
        };
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> KeyResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return KeyResult::Submit,
            KeyCode::Char('a') if ctrl => self.input.select_all(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => {
                let mut buf = [0u8; 4];
                let result = self.input.insert_str(c.encode_utf8(&mut buf));
                if let Err(e) = result {
                    self.status = Some(Status::Error(e.to_string()));
                }
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        KeyResult::Continue
    }

    fn handle_keypad_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Up => self.keypad.move_up(),
            KeyCode::Down => self.keypad.move_down(),
            KeyCode::Left => self.keypad.move_left(),
            KeyCode::Right => self.keypad.move_right(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.keypad.press_selected(&mut self.input);
                self.after_press(result);
            }
            KeyCode::Char('?') => self.show_help = true,
            // Typing a button's label presses it
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                if let Some(pos) = self.keypad.find(c.encode_utf8(&mut buf)) {
                    let result = self.keypad.press(pos, &mut self.input);
                    self.after_press(result);
                }
            }
            _ => {}
        }
        KeyResult::Continue
    }

    /// Record the press in the status line. A successful insertion focuses
    /// the input field, so keyboard focus follows it.
    fn after_press(&mut self, result: Result<PressResult, InvalidControlError>) {
        self.status = match result {
            Ok(PressResult::Inserted(outcome)) => Some(Status::Info(describe_insert(&outcome))),
            Ok(PressResult::Cleared) => Some(Status::Info("Cleared input".to_string())),
            Ok(PressResult::Missed) => None,
            Err(e) => Some(Status::Error(e.to_string())),
        };
        if self.input.is_focused() {
            self.focus = Focus::Input;
        }
        debug!(focus = ?self.focus, "keypad press handled");
    }

    fn status_text(&self) -> (String, Style) {
        match &self.status {
            Some(Status::Info(msg)) => (msg.clone(), self.theme.text_secondary_style()),
            Some(Status::Error(msg)) => (msg.clone(), self.theme.error_style()),
            None => {
                let text = match self.input.selection() {
                    Some(sel) if sel.is_collapsed() => format!("Cursor: {}", sel.start()),
                    Some(sel) => format!("Selection: {}", sel),
                    None => "No cursor".to_string(),
                };
                (text, self.theme.text_secondary_style())
            }
        }
    }

    fn footer_keys(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Input => &[
                ("Enter", "submit"),
                ("Tab", "keypad"),
                ("F1", "help"),
                ("Esc", "quit"),
            ],
            Focus::Keypad => &[
                ("\u{2190}\u{2191}\u{2193}\u{2192}", "move"),
                ("Enter", "press"),
                ("Tab", "input"),
                ("Esc", "quit"),
            ],
        }
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, modal_area);

        let help = Paragraph::new(build_help_text(&self.theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(help, modal_area);
    }
}

impl TuiApp for PadApp {
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, input_area, keypad_area, _, status_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(KeypadWidget::height(&self.keypad)),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " mathpad",
            self.theme.accent_bold_style(),
        )));
        frame.render_widget(title, title_area);

        let input_focused = self.focus == Focus::Input;
        frame.render_widget(
            InputFieldWidget::new(&self.input, "Input", &self.theme).focused(input_focused),
            input_area,
        );
        if input_focused && self.input.cursor().is_some() {
            frame.set_cursor_position(InputFieldWidget::cursor_position(&self.input, input_area));
        }

        frame.render_widget(
            KeypadWidget::new(&self.keypad, &self.theme).focused(!input_focused),
            keypad_area,
        );

        let (status, style) = self.status_text();
        render_status_line(frame, status_area, &status, style);
        render_footer(frame, footer_area, self.footer_keys(), &self.theme);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        // Any key closes the help overlay
        if self.show_help {
            self.show_help = false;
            return KeyResult::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyResult::Quit
            }
            KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return KeyResult::Continue;
            }
            KeyCode::F(1) => {
                self.show_help = true;
                return KeyResult::Continue;
            }
            _ => {}
        }

        self.status = None;
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Keypad => self.handle_keypad_key(key),
        }
    }
}

/// One-line description of an insertion for the status line.
fn describe_insert(outcome: &InsertOutcome) -> String {
    match (outcome.mode, outcome.cursor) {
        (InsertMode::AtCursor, Some(cursor)) => format!("Inserted, cursor at {}", cursor),
        _ => "Appended to input".to_string(),
    }
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), theme.accent_style()),
            Span::raw(desc),
        ])
    };
    vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
        Line::from(Span::styled("Input", theme.text_secondary_style())),
        key("\u{2190}/\u{2192}", "Move cursor"),
        key("Home/End", "Start/end of input"),
        key("Ctrl+A", "Select all"),
        key("Ctrl+U", "Clear input"),
        key("Enter", "Submit and exit"),
        Line::from(""),
        Line::from(Span::styled("Keypad", theme.text_secondary_style())),
        key("Arrows", "Choose button"),
        key("Enter/Space", "Press button"),
        key("Label key", "Press the button with that label"),
        Line::from(""),
        key("Tab", "Switch input/keypad"),
        key("Esc/Ctrl+C", "Quit without output"),
    ]
}
