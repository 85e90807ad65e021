//! mathpad - insert text at the cursor of a text field.
//!
//! The core operation is [`input::insert_text_at_cursor`]: it inserts a
//! string at a control's selection (replacing any selected text), or
//! appends it when the control has no cursor, then focuses the control.
//! Around it sit an in-memory [`input::TextField`], a [`keypad`] of buttons
//! that drive insertions, and a terminal UI hosting both.

pub mod cli;
pub mod config;
pub mod input;
pub mod keypad;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use input::{
    insert_text_at_cursor, InsertOutcome, InvalidControlError, Selection, TextControl, TextField,
};
