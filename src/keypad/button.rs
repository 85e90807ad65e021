//! Keypad buttons and their labels.

/// Inline math delimiters that may wrap a label for display.
const MATH_DELIMITERS: &[&str] = &["\\(", "\\)"];

/// Label reserved for the button that clears the input.
pub const CLEAR_LABEL: &str = "Clean";

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Insert text at the input cursor
    Insert(String),
    /// Empty the input
    Clear,
}

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    label: String,
    action: ButtonAction,
}

impl KeypadButton {
    /// Build a button from its label.
    ///
    /// [`CLEAR_LABEL`] produces a clear button; every other label inserts
    /// its own text with math delimiters removed.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let action = if label == CLEAR_LABEL {
            ButtonAction::Clear
        } else {
            ButtonAction::Insert(strip_math_delimiters(&label))
        };
        Self { label, action }
    }

    /// A clear button.
    pub fn clear() -> Self {
        Self::from_label(CLEAR_LABEL)
    }

    /// Label as configured (may still contain delimiters).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label as shown on screen.
    pub fn display_label(&self) -> String {
        strip_math_delimiters(&self.label)
    }

    pub fn action(&self) -> &ButtonAction {
        &self.action
    }
}

/// Remove every `\(` and `\)` from a label.
pub fn strip_math_delimiters(label: &str) -> String {
    MATH_DELIMITERS
        .iter()
        .fold(label.to_string(), |acc, delim| acc.replace(delim, ""))
}
