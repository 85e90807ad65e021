//! Errors raised by text input operations.

/// The control handed to an insertion lacks a required capability.
///
/// Checked before anything is mutated, so a failed call leaves the
/// control exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidControlError {
    #[error("Control is read-only and its value cannot be changed")]
    ReadOnly,

    #[error("Control cannot take focus")]
    NotFocusable,
}

/// Errors parsing a `START[:END]` selection argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSelectionError {
    #[error("Selection is empty; expected START or START:END")]
    Empty,

    #[error("Invalid selection offset '{input}': expected a non-negative integer")]
    InvalidOffset { input: String },
}
