use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct MenuItem {
    pub key: char,
    pub label: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

/// Training modes in display order; the hotkey doubles as the screen shortcut.
pub const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        key: '1',
        label: "Speed Test",
        description: "Test your typing speed with real-time WPM tracking",
        badge: "Most Popular",
    },
    MenuItem {
        key: '2',
        label: "Accuracy Training",
        description: "Improve precision with row-by-row exercises",
        badge: "Essential",
    },
    MenuItem {
        key: '3',
        label: "Learning Guide",
        description: "Master proper finger positioning and technique",
        badge: "Beginner Friendly",
    },
    MenuItem {
        key: '4',
        label: "Typing Games",
        description: "Fun games to make learning engaging",
        badge: "Fun",
    },
    MenuItem {
        key: 's',
        label: "Statistics",
        description: "Track your progress, achievements and insights",
        badge: "Insights",
    },
];

pub struct Menu<'a> {
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { selected: 0, theme }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MENU_ITEMS.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = MENU_ITEMS.len() - 1;
        }
    }

    /// Index of the item bound to `key`, if any.
    pub fn index_for_key(key: char) -> Option<usize> {
        MENU_ITEMS.iter().position(|item| item.key == key)
    }
}

impl Widget for &Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "typeshala",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Master touch typing",
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let menu_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(MENU_ITEMS.iter().map(|_| Constraint::Length(3)))
            .split(layout[2]);

        for (i, item) in MENU_ITEMS.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let label_style = Style::default()
                .fg(if is_selected {
                    colors.accent()
                } else {
                    colors.fg()
                })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {indicator} [{}] {}", item.key, item.label),
                        label_style,
                    ),
                    Span::styled(
                        format!("  {}", item.badge),
                        Style::default().fg(colors.muted()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("     {}", item.description),
                    Style::default().fg(colors.text_pending()),
                )),
            ];

            if let Some(rect) = menu_layout.get(i) {
                Paragraph::new(lines).render(*rect, buf);
            }
        }
    }
}
