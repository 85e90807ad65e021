//! In-memory text field control.
//!
//! Behaves like a single-line browser input: it starts without a cursor,
//! gains one when focused, and keeps its selection across blur.

use unicode_width::UnicodeWidthStr;

use super::control::TextControl;
use super::error::InvalidControlError;
use super::inserter::{insert_text_at_cursor, InsertOutcome};
use super::selection::{byte_index, Selection};

/// A single-line editable text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    selection: Option<Selection>,
    focused: bool,
    read_only: bool,
    disabled: bool,
    last_focus_hint: Option<usize>,
}

impl TextField {
    /// Create an empty field that has never been focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `value`, with no cursor yet.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Mark the field read-only (builder style).
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Mark the field disabled; disabled fields cannot take focus.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Hint passed to the most recent `focus` call.
    pub fn last_focus_hint(&self) -> Option<usize> {
        self.last_focus_hint
    }

    /// Drop focus. The selection survives so a later insertion lands at the
    /// same place.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Length of the value in chars.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Collapsed cursor position, if the field has one.
    pub fn cursor(&self) -> Option<usize> {
        self.selection
            .filter(Selection::is_collapsed)
            .map(|s| s.start())
    }

    /// The selected text, if any.
    pub fn selected_text(&self) -> Option<&str> {
        let sel = self.selection.filter(|s| !s.is_collapsed())?;
        let start = byte_index(&self.value, sel.start());
        let end = byte_index(&self.value, sel.end());
        Some(&self.value[start..end])
    }

    /// Insert `text` at the cursor (or append when there is none).
    pub fn insert_str(&mut self, text: &str) -> Result<InsertOutcome, InvalidControlError> {
        insert_text_at_cursor(self, text)
    }

    /// Delete the selection, or the char before the cursor.
    pub fn backspace(&mut self) {
        if self.read_only {
            return;
        }
        let sel = self.active_selection();
        if !sel.is_collapsed() {
            self.remove_range(sel);
        } else if sel.start() > 0 {
            self.remove_range(Selection::new(sel.start() - 1, sel.start()));
        }
    }

    /// Delete the selection, or the char after the cursor.
    pub fn delete(&mut self) {
        if self.read_only {
            return;
        }
        let sel = self.active_selection();
        if !sel.is_collapsed() {
            self.remove_range(sel);
        } else if sel.start() < self.char_len() {
            self.remove_range(Selection::new(sel.start(), sel.start() + 1));
        }
    }

    /// Move left one char, or to the start of the selection.
    pub fn move_left(&mut self) {
        let sel = self.active_selection();
        let pos = if sel.is_collapsed() {
            sel.start().saturating_sub(1)
        } else {
            sel.start()
        };
        self.selection = Some(Selection::cursor(pos));
    }

    /// Move right one char, or to the end of the selection.
    pub fn move_right(&mut self) {
        let sel = self.active_selection();
        let pos = if sel.is_collapsed() {
            (sel.end() + 1).min(self.char_len())
        } else {
            sel.end()
        };
        self.selection = Some(Selection::cursor(pos));
    }

    pub fn move_home(&mut self) {
        self.selection = Some(Selection::cursor(0));
    }

    pub fn move_end(&mut self) {
        self.selection = Some(Selection::cursor(self.char_len()));
    }

    pub fn select_all(&mut self) {
        self.selection = Some(Selection::new(0, self.char_len()));
    }

    /// Empty the value and put the cursor at zero.
    pub fn clear(&mut self) {
        if self.read_only {
            return;
        }
        self.value.clear();
        self.selection = Some(Selection::cursor(0));
    }

    /// Display column of the cursor (or selection start), accounting for
    /// wide characters.
    pub fn cursor_column(&self) -> usize {
        let pos = self.active_selection().start();
        let head = &self.value[..byte_index(&self.value, pos)];
        head.width()
    }

    /// Selection, or a cursor at the end of the value if none is known.
    fn active_selection(&self) -> Selection {
        self.selection
            .map(|s| s.clamp_to(self.char_len()))
            .unwrap_or_else(|| Selection::cursor(self.char_len()))
    }

    fn remove_range(&mut self, range: Selection) {
        let start = byte_index(&self.value, range.start());
        let end = byte_index(&self.value, range.end());
        self.value.replace_range(start..end, "");
        self.selection = Some(Selection::cursor(range.start()));
    }
}

impl TextControl for TextField {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        if let Some(sel) = self.selection {
            self.selection = Some(sel.clamp_to(self.char_len()));
        }
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection.clamp_to(self.char_len()));
    }

    fn focus(&mut self, hint: Option<usize>) {
        self.focused = true;
        self.last_focus_hint = hint;
        if self.selection.is_none() {
            let pos = hint.unwrap_or(usize::MAX).min(self.char_len());
            self.selection = Some(Selection::cursor(pos));
        }
    }

    fn is_editable(&self) -> bool {
        !self.read_only
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }
}
