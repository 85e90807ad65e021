//! Input field widget.
//!
//! Renders a [`TextField`] inside a bordered block, highlighting the
//! selected range and scrolling horizontally to keep the cursor visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use crate::input::{byte_index, Selection, TextControl, TextField};
use crate::theme::Theme;

/// Widget that draws a text field.
pub struct InputFieldWidget<'a> {
    field: &'a TextField,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputFieldWidget<'a> {
    pub fn new(field: &'a TextField, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            field,
            title,
            focused: false,
            theme,
        }
    }

    /// Draw with the focused border style.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Horizontal scroll needed so the cursor fits in `inner_width` columns.
    pub fn scroll_offset(field: &TextField, inner_width: u16) -> u16 {
        let column = field.cursor_column();
        let width = inner_width.max(1) as usize;
        if column < width {
            0
        } else {
            (column + 1 - width) as u16
        }
    }

    /// Screen position of the cursor for a field drawn in `area`.
    pub fn cursor_position(field: &TextField, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2);
        let offset = Self::scroll_offset(field, inner_width);
        let column = field.cursor_column() as u16;
        let x = area.x + 1 + column.saturating_sub(offset);
        (x.min(area.right().saturating_sub(2)), area.y + 1)
    }

    fn value_line(&self) -> Line<'a> {
        let value = self.field.value();
        let text_style = self.theme.text_style();
        match self.field.selection() {
            Some(sel) if !sel.is_collapsed() => {
                let (head, selected, tail) = split_at_selection(value, sel);
                Line::from(vec![
                    Span::styled(head, text_style),
                    Span::styled(selected, self.theme.selection_style()),
                    Span::styled(tail, text_style),
                ])
            }
            _ => Line::from(Span::styled(value, text_style)),
        }
    }
}

impl Widget for InputFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.text_secondary_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.title), Style::default()));

        let inner_width = block.inner(area).width;
        let offset = Self::scroll_offset(self.field, inner_width);

        Paragraph::new(self.value_line())
            .block(block)
            .scroll((0, offset))
            .render(area, buf);
    }
}

/// Split `value` into the text before, inside and after `sel`.
fn split_at_selection(value: &str, sel: Selection) -> (&str, &str, &str) {
    let start = byte_index(value, sel.start());
    let end = byte_index(value, sel.end());
    (&value[..start], &value[start..end], &value[end..])
}
