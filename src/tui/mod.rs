//! TUI (Text User Interface) module for mathpad
//!
//! Terminal UI built on ratatui/crossterm: an input field with a keypad
//! that inserts text at the field's cursor.

pub mod app;
pub mod pad_app;
pub mod ui;
pub mod widgets;

pub use app::{KeyResult, TuiApp};
pub use pad_app::{Focus, PadApp, Status};
