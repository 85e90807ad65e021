//! TextControl trait: what an insertion needs from a text entry control.

use super::selection::Selection;

/// A text entry control that text can be inserted into.
///
/// Implementations own their text and cursor state; the insertion routine
/// only reads and mutates it through these methods. Offsets are char
/// offsets into [`TextControl::value`].
pub trait TextControl {
    /// Current text content.
    fn value(&self) -> &str;

    /// Replace the text content.
    fn set_value(&mut self, value: String);

    /// Current selection, or `None` when the control has no cursor
    /// (it never had focus, or does not track one).
    fn selection(&self) -> Option<Selection>;

    /// Move the selection. Callers pass offsets within the current value.
    fn set_selection(&mut self, selection: Selection);

    /// Give focus to the control.
    ///
    /// `hint` is the offset the caller considers current, when it knows one.
    /// Implementations must accept `None`.
    fn focus(&mut self, hint: Option<usize>);

    /// Whether the value may be changed.
    fn is_editable(&self) -> bool {
        true
    }

    /// Whether the control accepts focus.
    fn is_focusable(&self) -> bool {
        true
    }
}
