//! Text input controls and cursor-aware insertion.
//!
//! # Module Structure
//!
//! - [`control`] - `TextControl` capability trait
//! - [`selection`] - char-offset selection ranges
//! - [`inserter`] - `insert_text_at_cursor` and its context/outcome types
//! - [`field`] - `TextField`, an in-memory control
//! - [`error`] - error types

mod control;
mod error;
mod field;
mod inserter;
mod selection;

pub use control::TextControl;
pub use error::{InvalidControlError, ParseSelectionError};
pub use field::TextField;
pub use inserter::{insert_text_at_cursor, InsertMode, InsertOutcome, InsertionContext};
pub use selection::Selection;

pub(crate) use selection::byte_index;
