//! Default keypad layout.

use super::button::CLEAR_LABEL;

/// Rows of the default expression keypad.
pub const DEFAULT_ROWS: &[&[&str]] = &[
    &["1", "2", "3", "4", "5"],
    &["6", "7", "8", "9", "0"],
    &[".", "+", "-", "*", "/"],
    &["(", ")", "^", "!"],
    &[CLEAR_LABEL],
];

/// Default rows as owned strings, for config defaults.
pub fn default_rows() -> Vec<Vec<String>> {
    DEFAULT_ROWS
        .iter()
        .map(|row| row.iter().map(|label| label.to_string()).collect())
        .collect()
}
