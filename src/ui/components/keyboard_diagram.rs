use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::keyboard::finger::{LEGEND, qwerty_finger};
use crate::keyboard::layout::{GUIDE_ROWS, ROW_OFFSETS};
use crate::ui::theme::Theme;

const KEY_WIDTH: u16 = 5;

/// QWERTY map tinted by finger, highlighting a selected key and the next
/// key to type.
pub struct KeyboardDiagram<'a> {
    pub selected: Option<char>,
    pub next_key: Option<char>,
    pub show_legend: bool,
    pub theme: &'a Theme,
}

impl<'a> KeyboardDiagram<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            selected: None,
            next_key: None,
            show_legend: false,
            theme,
        }
    }

    pub fn selected(mut self, key: Option<char>) -> Self {
        self.selected = key.map(|k| k.to_ascii_lowercase());
        self
    }

    pub fn next_key(mut self, key: Option<char>) -> Self {
        self.next_key = key.map(|k| k.to_ascii_lowercase());
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Rows needed inside the border.
    pub fn content_height(&self) -> u16 {
        GUIDE_ROWS.len() as u16 + if self.show_legend { 2 } else { 0 }
    }
}

impl Widget for KeyboardDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Keyboard ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < GUIDE_ROWS.len() as u16 || inner.width < 30 {
            return;
        }

        for (row_idx, row) in GUIDE_ROWS.iter().enumerate() {
            let y = inner.y + row_idx as u16;
            let offset = ROW_OFFSETS[row_idx];

            for (col_idx, &key) in row.iter().enumerate() {
                let x = inner.x + offset + col_idx as u16 * KEY_WIDTH;
                if x + KEY_WIDTH > inner.x + inner.width {
                    break;
                }

                let style = if self.next_key == Some(key) {
                    Style::default()
                        .fg(colors.bg())
                        .bg(colors.accent())
                        .add_modifier(Modifier::BOLD)
                } else if self.selected == Some(key) {
                    Style::default()
                        .fg(colors.bg())
                        .bg(colors.text_cursor_bg())
                        .add_modifier(Modifier::BOLD)
                } else if let Some(assignment) = qwerty_finger(key) {
                    Style::default().fg(colors.bg()).bg(colors.finger(assignment))
                } else {
                    Style::default().fg(colors.text_pending()).bg(colors.bg())
                };

                buf.set_string(x, y, format!("[ {key} ]"), style);
            }
        }

        if !self.show_legend || inner.height < self.content_height() {
            return;
        }

        let y = inner.y + GUIDE_ROWS.len() as u16 + 1;
        let mut x = inner.x;
        for assignment in LEGEND {
            let code = format!(" {} ", assignment.code());
            let width = code.len() as u16;
            if x + width > inner.x + inner.width {
                break;
            }
            buf.set_string(
                x,
                y,
                &code,
                Style::default().fg(colors.bg()).bg(colors.finger(assignment)),
            );
            x += width + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(diagram: KeyboardDiagram, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        diagram.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_home_row_position() {
        let theme = Theme::default();
        let buf = render(KeyboardDiagram::new(&theme), 60, 6);
        // Border (1) + home row offset (3), then "[ a ]"
        assert_eq!(buf[(1 + 3 + 2, 1 + 2)].symbol(), "a");
    }

    #[test]
    fn test_next_key_highlight_wins() {
        let theme = Theme::default();
        let buf = render(
            KeyboardDiagram::new(&theme)
                .selected(Some('A'))
                .next_key(Some('a')),
            60,
            6,
        );
        assert_eq!(buf[(1 + 3 + 2, 1 + 2)].bg, theme.colors.accent());
    }

    #[test]
    fn test_too_small_draws_only_border() {
        let theme = Theme::default();
        let buf = render(KeyboardDiagram::new(&theme), 20, 6);
        assert_eq!(buf[(3, 2)].symbol(), " ");
    }
}
