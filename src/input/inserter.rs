//! Cursor-aware text insertion.
//!
//! [`insert_text_at_cursor`] is the single entry point. It snapshots the
//! control into an [`InsertionContext`], plans the edit as a pure function of
//! that snapshot, then writes the result back and restores focus.

use serde::Serialize;
use tracing::{debug, warn};

use super::control::TextControl;
use super::error::InvalidControlError;
use super::selection::{byte_index, Selection};

/// Which branch an insertion took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertMode {
    /// Inserted at the selection, replacing any selected text
    AtCursor,
    /// No selection was known; text was appended to the value
    Appended,
}

/// What an insertion did to the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOutcome {
    pub mode: InsertMode,
    /// The control's value after the insertion
    pub value: String,
    /// Collapsed cursor after the inserted text (cursor-aware branch only)
    pub cursor: Option<usize>,
    /// Offset handed to the control's focus routine
    pub focus_hint: Option<usize>,
}

/// Snapshot of everything an insertion reads.
#[derive(Debug, Clone, Copy)]
pub struct InsertionContext<'a> {
    pub value: &'a str,
    pub selection: Option<Selection>,
    pub text: &'a str,
}

impl<'a> InsertionContext<'a> {
    /// Capture the control's current state alongside the text to insert.
    pub fn capture<C: TextControl + ?Sized>(control: &'a C, text: &'a str) -> Self {
        Self {
            value: control.value(),
            selection: control.selection(),
            text,
        }
    }

    /// Compute the outcome without touching any control.
    ///
    /// Offset zero is a real cursor position: only `None` routes to the
    /// append branch.
    pub fn plan(&self) -> InsertOutcome {
        match self.selection {
            Some(selection) => {
                let selection = selection.clamp_to(self.value.chars().count());
                let head = &self.value[..byte_index(self.value, selection.start())];
                let tail = &self.value[byte_index(self.value, selection.end())..];

                let mut value = String::with_capacity(head.len() + self.text.len() + tail.len());
                value.push_str(head);
                value.push_str(self.text);
                value.push_str(tail);

                InsertOutcome {
                    mode: InsertMode::AtCursor,
                    value,
                    cursor: Some(selection.start() + self.text.chars().count()),
                    focus_hint: Some(selection.end()),
                }
            }
            None => InsertOutcome {
                mode: InsertMode::Appended,
                value: format!("{}{}", self.value, self.text),
                cursor: None,
                focus_hint: None,
            },
        }
    }
}

/// Insert `text` into `control` at its cursor, replacing any selected range.
///
/// Without a selection the text is appended. Either way the control is
/// focused exactly once afterwards. Controls that are read-only or cannot
/// take focus are rejected before anything changes.
pub fn insert_text_at_cursor<C: TextControl + ?Sized>(
    control: &mut C,
    text: &str,
) -> Result<InsertOutcome, InvalidControlError> {
    if !control.is_editable() {
        warn!("refusing to insert into read-only control");
        return Err(InvalidControlError::ReadOnly);
    }
    if !control.is_focusable() {
        warn!("refusing to insert into control that cannot take focus");
        return Err(InvalidControlError::NotFocusable);
    }

    let outcome = InsertionContext::capture(&*control, text).plan();
    debug!(
        mode = ?outcome.mode,
        inserted_chars = text.chars().count(),
        cursor = ?outcome.cursor,
        "inserting text"
    );

    control.set_value(outcome.value.clone());
    if let Some(cursor) = outcome.cursor {
        control.set_selection(Selection::cursor(cursor));
    }
    control.focus(outcome.focus_hint);

    Ok(outcome)
}
