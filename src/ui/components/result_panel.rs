use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::components::metrics_panel::{Stat, tone_color};
use crate::ui::theme::Theme;

/// End-of-run summary: a headline, the final figures and key hints.
pub struct ResultPanel<'a> {
    pub title: &'a str,
    pub headline: Option<&'a str>,
    pub stats: Vec<Stat>,
    pub hints: &'a [&'a str],
    pub theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    pub fn new(title: &'a str, stats: Vec<Stat>, theme: &'a Theme) -> Self {
        Self {
            title,
            headline: None,
            stats,
            hints: &[],
            theme,
        }
    }

    pub fn headline(mut self, headline: &'a str) -> Self {
        self.headline = Some(headline);
        self
    }

    pub fn hints(mut self, hints: &'a [&'a str]) -> Self {
        self.hints = hints;
        self
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(self.stats.len() as u16 * 2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let headline = match self.headline {
            Some(text) => Span::styled(
                text,
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "Results",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        };
        Paragraph::new(Line::from(headline))
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let label_width = self
            .stats
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = self
            .stats
            .iter()
            .flat_map(|stat| {
                [
                    Line::from(vec![
                        Span::styled(
                            format!("  {:<width$}  ", stat.label, width = label_width),
                            Style::default().fg(colors.fg()),
                        ),
                        Span::styled(
                            stat.value.clone(),
                            Style::default()
                                .fg(tone_color(stat.tone, colors))
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(""),
                ]
            })
            .collect();
        Paragraph::new(lines).render(layout[1], buf);

        let hint_spans: Vec<Span> = self
            .hints
            .iter()
            .map(|h| Span::styled(format!("  {h}"), Style::default().fg(colors.accent())))
            .collect();
        Paragraph::new(Line::from(hint_spans)).render(layout[3], buf);
    }
}
