use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::MetricsSnapshot;
use crate::ui::theme::{Theme, ThemeColors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Good,
    Bad,
    Muted,
}

/// One labelled figure in a panel.
pub struct Stat {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
        }
    }

    pub fn wpm(wpm: u32) -> Self {
        Self::new("WPM", wpm.to_string(), Tone::Accent)
    }

    pub fn accuracy(accuracy: u32) -> Self {
        let tone = if accuracy >= 95 {
            Tone::Good
        } else if accuracy >= 85 {
            Tone::Plain
        } else {
            Tone::Bad
        };
        Self::new("Accuracy", format!("{accuracy}%"), tone)
    }

    pub fn seconds(label: &str, secs: u64) -> Self {
        Self::new(label, format!("{secs}s"), Tone::Plain)
    }

    /// WPM, accuracy and character counts from a session snapshot.
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Vec<Stat> {
        vec![
            Self::wpm(snapshot.wpm),
            Self::accuracy(snapshot.accuracy),
            Self::new("Correct", snapshot.correct_count.to_string(), Tone::Good),
            Self::new(
                "Errors",
                snapshot.total_typed.saturating_sub(snapshot.correct_count).to_string(),
                if snapshot.total_typed == snapshot.correct_count {
                    Tone::Muted
                } else {
                    Tone::Bad
                },
            ),
        ]
    }
}

pub fn tone_color(tone: Tone, colors: &ThemeColors) -> Color {
    match tone {
        Tone::Plain => colors.fg(),
        Tone::Accent => colors.accent(),
        Tone::Good => colors.success(),
        Tone::Bad => colors.error(),
        Tone::Muted => colors.muted(),
    }
}

/// Bordered column of live figures, shown beside the typing area.
pub struct MetricsPanel<'a> {
    title: &'a str,
    stats: Vec<Stat>,
    theme: &'a Theme,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(title: &'a str, stats: Vec<Stat>, theme: &'a Theme) -> Self {
        Self {
            title,
            stats,
            theme,
        }
    }
}

impl Widget for MetricsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let label_width = self
            .stats
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(self.stats.len() * 2);
        for (i, stat) in self.stats.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", stat.label, width = label_width),
                    Style::default().fg(colors.fg()),
                ),
                Span::styled(
                    stat.value.clone(),
                    Style::default().fg(tone_color(stat.tone, colors)),
                ),
            ]));
        }

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
