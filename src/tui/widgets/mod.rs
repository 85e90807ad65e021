//! TUI widgets for mathpad
//!
//! Reusable UI components for the terminal interface.

pub mod input_field;
pub mod keypad_grid;

pub use input_field::InputFieldWidget;
pub use keypad_grid::KeypadWidget;
