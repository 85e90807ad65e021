//! Keypad of buttons that insert text into an input field.
//!
//! Each button inserts its (sanitized) label at the field's cursor using
//! [`insert_text_at_cursor`](crate::input::insert_text_at_cursor). The
//! keypad also tracks which button is highlighted for keyboard navigation.

mod button;
mod layout;

pub use button::{strip_math_delimiters, ButtonAction, KeypadButton, CLEAR_LABEL};
pub use layout::{default_rows, DEFAULT_ROWS};

use tracing::debug;

use crate::input::{InsertOutcome, InvalidControlError, TextControl, TextField};

/// Row/column of a button in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of pressing a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressResult {
    Inserted(InsertOutcome),
    Cleared,
    /// No button at the pressed position
    Missed,
}

/// A grid of keypad buttons with a highlighted position.
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
    selected: Position,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::from_rows(&default_rows())
    }
}

impl Keypad {
    /// Build a keypad from rows of labels. Empty rows are dropped.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let rows = rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.iter()
                    .map(|label| KeypadButton::from_label(label.as_ref()))
                    .collect()
            })
            .collect();
        Self {
            rows,
            selected: Position::default(),
        }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Position {
        self.selected
    }

    pub fn button(&self, pos: Position) -> Option<&KeypadButton> {
        self.rows.get(pos.row)?.get(pos.col)
    }

    pub fn selected_button(&self) -> Option<&KeypadButton> {
        self.button(self.selected)
    }

    /// Find the first button with the given label.
    pub fn find(&self, label: &str) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| b.label() == label || b.display_label() == label)
                .map(|col| Position::new(row, col))
        })
    }

    pub fn move_up(&mut self) {
        if self.selected.row > 0 {
            self.selected.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.selected.row + 1 < self.rows.len() {
            self.selected.row += 1;
            self.clamp_col();
        }
    }

    pub fn move_left(&mut self) {
        self.selected.col = self.selected.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let row_len = self.rows.get(self.selected.row).map_or(0, Vec::len);
        if self.selected.col + 1 < row_len {
            self.selected.col += 1;
        }
    }

    /// Press the button at `pos`, editing `field`.
    pub fn press(
        &self,
        pos: Position,
        field: &mut TextField,
    ) -> Result<PressResult, InvalidControlError> {
        let Some(button) = self.button(pos) else {
            return Ok(PressResult::Missed);
        };
        debug!(label = button.label(), row = pos.row, col = pos.col, "keypad press");

        match button.action() {
            ButtonAction::Insert(text) => field.insert_str(text).map(PressResult::Inserted),
            ButtonAction::Clear => {
                if !field.is_editable() {
                    return Err(InvalidControlError::ReadOnly);
                }
                field.clear();
                Ok(PressResult::Cleared)
            }
        }
    }

    /// Press the highlighted button.
    pub fn press_selected(&self, field: &mut TextField) -> Result<PressResult, InvalidControlError> {
        self.press(self.selected, field)
    }

    /// Rows may have different lengths; keep the column inside the new row.
    fn clamp_col(&mut self) {
        let row_len = self.rows.get(self.selected.row).map_or(0, Vec::len);
        self.selected.col = self.selected.col.min(row_len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InsertMode, Selection};

    #[test]
    fn default_keypad_layout() {
        let keypad = Keypad::default();
        assert_eq!(keypad.rows().len(), DEFAULT_ROWS.len());
        assert_eq!(keypad.button(Position::new(0, 0)).unwrap().label(), "1");
        assert_eq!(keypad.find("Clean"), Some(Position::new(4, 0)));
    }

    #[test]
    fn press_inserts_at_cursor_of_blurred_field() {
        let keypad = Keypad::default();
        let mut field = TextField::with_value("12");
        field.set_selection(Selection::cursor(1));
        field.blur();

        let pos = keypad.find("+").unwrap();
        let result = keypad.press(pos, &mut field).unwrap();

        assert!(matches!(
            result,
            PressResult::Inserted(InsertOutcome { mode: InsertMode::AtCursor, .. })
        ));
        assert_eq!(field.value(), "1+2");
        assert_eq!(field.cursor(), Some(2));
        assert!(field.is_focused());
    }

    #[test]
    fn press_appends_to_never_focused_field() {
        let keypad = Keypad::default();
        let mut field = TextField::with_value("4");
        keypad.press(Position::new(0, 1), &mut field).unwrap();
        assert_eq!(field.value(), "42");
    }

    #[test]
    fn delimited_labels_insert_plain_text() {
        let keypad = Keypad::from_rows(&[vec!["\\(x!\\)"]]);
        let mut field = TextField::new();
        keypad.press(Position::new(0, 0), &mut field).unwrap();
        assert_eq!(field.value(), "x!");
    }

    #[test]
    fn clean_button_clears() {
        let keypad = Keypad::default();
        let mut field = TextField::with_value("1+2");
        let pos = keypad.find(CLEAR_LABEL).unwrap();
        assert_eq!(keypad.press(pos, &mut field).unwrap(), PressResult::Cleared);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn read_only_field_reports_error() {
        let keypad = Keypad::default();
        let mut field = TextField::with_value("9").read_only(true);
        assert_eq!(
            keypad.press(Position::new(0, 0), &mut field),
            Err(InvalidControlError::ReadOnly)
        );
        let clean = keypad.find(CLEAR_LABEL).unwrap();
        assert_eq!(keypad.press(clean, &mut field), Err(InvalidControlError::ReadOnly));
        assert_eq!(field.value(), "9");
    }

    #[test]
    fn press_outside_grid_misses() {
        let keypad = Keypad::default();
        let mut field = TextField::new();
        assert_eq!(
            keypad.press(Position::new(9, 9), &mut field).unwrap(),
            PressResult::Missed
        );
    }

    #[test]
    fn navigation_clamps_to_ragged_rows() {
        let mut keypad = Keypad::default();
        for _ in 0..10 {
            keypad.move_right();
        }
        assert_eq!(keypad.selected(), Position::new(0, 4));

        keypad.move_down();
        keypad.move_down();
        keypad.move_down();
        // row 3 has four buttons
        assert_eq!(keypad.selected(), Position::new(3, 3));

        keypad.move_down();
        assert_eq!(keypad.selected(), Position::new(4, 0));
        keypad.move_down();
        assert_eq!(keypad.selected(), Position::new(4, 0));

        keypad.move_up();
        keypad.move_left();
        assert_eq!(keypad.selected(), Position::new(3, 0));
        keypad.move_left();
        assert_eq!(keypad.selected(), Position::new(3, 0));
    }

    #[test]
    fn empty_rows_are_dropped() {
        let rows: Vec<Vec<String>> = vec![vec![], vec!["1".to_string()]];
        let keypad = Keypad::from_rows(&rows);
        assert_eq!(keypad.rows().len(), 1);
        assert!(!keypad.is_empty());
    }
}
