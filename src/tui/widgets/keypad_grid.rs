//! Keypad grid widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::keypad::{Keypad, Position};
use crate::theme::Theme;

/// Minimum width of a single button cell, brackets included.
const MIN_CELL_WIDTH: u16 = 7;

/// Draws the keypad as rows of `[ label ]` cells.
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(keypad: &'a Keypad, theme: &'a Theme) -> Self {
        Self {
            keypad,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height needed to draw `keypad` (one line per row plus borders).
    pub fn height(keypad: &Keypad) -> u16 {
        keypad.rows().len() as u16 + 2
    }

    fn row_line(&self, row: usize) -> Line<'a> {
        let Some(buttons) = self.keypad.rows().get(row) else {
            return Line::default();
        };
        let selected = self.keypad.selected();
        let spans: Vec<Span<'static>> = buttons
            .iter()
            .enumerate()
            .map(|(col, button)| {
                let label = format!("[ {} ]", button.display_label());
                let cell = format!("{:<width$}", label, width = MIN_CELL_WIDTH as usize);
                let style = if self.focused && selected == Position::new(row, col) {
                    self.theme.accent_bold_style()
                } else {
                    self.theme.text_style()
                };
                Span::styled(cell, style)
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.text_secondary_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Keypad ");
        let inner = block.inner(area);
        block.render(area, buf);

        let row_count = self.keypad.rows().len();
        let rows = Layout::vertical(vec![Constraint::Length(1); row_count]).split(inner);
        for (idx, row_area) in rows.iter().enumerate() {
            Paragraph::new(self.row_line(idx)).render(*row_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn draws_every_row_with_sanitized_labels() {
        let theme = Theme::default();
        let keypad = Keypad::from_rows(&[vec!["1", "2"], vec!["\\(x!\\)"]]);
        let area = Rect::new(0, 0, 30, KeypadWidget::height(&keypad));
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Keypad"));
        assert!(row(&buf, 1).contains("[ 1 ]"));
        assert!(row(&buf, 1).contains("[ 2 ]"));
        assert!(row(&buf, 2).contains("[ x! ]"));
        assert!(!row(&buf, 2).contains("\\("));
    }

    #[test]
    fn highlights_selected_button_when_focused() {
        let theme = Theme::default();
        let mut keypad = Keypad::from_rows(&[vec!["1", "2"]]);
        keypad.move_right();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad, &theme)
            .focused(true)
            .render(area, &mut buf);

        // second cell starts at inner x (1) + one cell width
        let x = 1 + MIN_CELL_WIDTH;
        assert_eq!(buf[(x, 1)].symbol(), "[");
        assert_eq!(buf[(x, 1)].fg, theme.accent);
        assert_eq!(buf[(1, 1)].fg, theme.text_primary);
    }

    #[test]
    fn height_counts_rows_and_borders() {
        assert_eq!(KeypadWidget::height(&Keypad::default()), 7);
    }
}
