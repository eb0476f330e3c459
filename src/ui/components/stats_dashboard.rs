use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::stats::mock::{MockStats, RangeRows, SkillLevel, progress_level};
use crate::stats::TimeRange;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatsTab {
    #[default]
    Overview,
    Progress,
    Achievements,
    Insights,
}

impl StatsTab {
    pub const ALL: [StatsTab; 4] = [
        StatsTab::Overview,
        StatsTab::Progress,
        StatsTab::Achievements,
        StatsTab::Insights,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatsTab::Overview => "Overview",
            StatsTab::Progress => "Progress",
            StatsTab::Achievements => "Achievements",
            StatsTab::Insights => "Insights",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct StatsDashboard<'a> {
    pub active_tab: StatsTab,
    pub range: TimeRange,
    pub theme: &'a Theme,
}

impl<'a> StatsDashboard<'a> {
    pub fn new(active_tab: StatsTab, range: TimeRange, theme: &'a Theme) -> Self {
        Self {
            active_tab,
            range,
            theme,
        }
    }
}

impl Widget for StatsDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Your Progress & Statistics ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(inner);

        let tab_spans: Vec<Span> = StatsTab::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, &tab)| {
                let style = if tab == self.active_tab {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(colors.text_pending())
                };
                vec![
                    Span::styled(format!(" [{}] {} ", i + 1, tab.label()), style),
                    Span::raw("  "),
                ]
            })
            .collect();
        Paragraph::new(Line::from(tab_spans)).render(layout[0], buf);

        match self.active_tab {
            StatsTab::Overview => self.render_overview_tab(layout[1], buf),
            StatsTab::Progress => self.render_progress_tab(layout[1], buf),
            StatsTab::Achievements => self.render_achievements_tab(layout[1], buf),
            StatsTab::Insights => self.render_insights_tab(layout[1], buf),
        }

        let footer_text = if self.active_tab == StatsTab::Progress {
            "  [ESC] Back  [Tab] Next tab  [1-4] Switch tab  [t] Time range"
        } else {
            "  [ESC] Back  [Tab] Next tab  [1-4] Switch tab"
        };
        Paragraph::new(Line::from(Span::styled(
            footer_text,
            Style::default().fg(colors.accent()),
        )))
        .render(layout[2], buf);
    }
}

impl StatsDashboard<'_> {
    fn section(&self, title: &str) -> Block<'static> {
        let colors = &self.theme.colors;
        Block::bordered()
            .title(Line::from(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .border_style(Style::default().fg(colors.border()))
    }

    fn render_overview_tab(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let overview = MockStats::overview();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(6)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(layout[0]);

        let card_data = [
            (
                "Average WPM",
                overview.avg_wpm.to_string(),
                format!("\u{2191} {}% this month", overview.improvement_percent),
                colors.success(),
            ),
            (
                "Average Accuracy",
                format!("{}%", overview.avg_accuracy),
                format!("Best: {}%", overview.best_accuracy),
                colors.text_pending(),
            ),
            (
                "Time Practiced",
                format!("{}h", overview.total_hours),
                format!("{} tests", overview.total_tests),
                colors.text_pending(),
            ),
            (
                "Best WPM",
                overview.best_wpm.to_string(),
                format!("{} words typed", overview.words_typed),
                colors.text_pending(),
            ),
        ];

        for (rect, (label, value, detail, detail_color)) in cards.iter().zip(card_data) {
            let block = Block::bordered().border_style(Style::default().fg(colors.border()));
            let lines = vec![
                Line::from(Span::styled(label, Style::default().fg(colors.muted()))),
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(detail, Style::default().fg(detail_color))),
            ];
            Paragraph::new(lines).block(block).render(*rect, buf);
        }

        let level_block = self.section("Skill Level");
        let level_inner = level_block.inner(layout[1]);
        level_block.render(layout[1], buf);
        if level_inner.height < 3 || level_inner.width < 12 {
            return;
        }

        let current = progress_level(overview.avg_wpm);
        buf.set_string(
            level_inner.x + 1,
            level_inner.y,
            format!(
                "{} ({}) at {} WPM",
                current.level.label(),
                current.level.range_label(),
                overview.avg_wpm
            ),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        );
        let bar_area = Rect::new(
            level_inner.x + 1,
            level_inner.y + 1,
            level_inner.width.saturating_sub(2),
            2,
        );
        render_text_bar(
            &format!("{:.0}% through this level", current.progress),
            current.progress / 100.0,
            level_color(current.level, self.theme),
            colors.bar_empty(),
            bar_area,
            buf,
        );
    }

    fn render_progress_tab(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = self.section(&format!("Progress: {}", self.range.label()));
        let inner = block.inner(area);
        block.render(area, buf);

        let (header, rows) = match MockStats::for_range(self.range) {
            RangeRows::Daily(days) => (
                "  Date         WPM    Acc%   Tests   Minutes".to_string(),
                days.iter()
                    .map(|d| {
                        (
                            format!(
                                "  {:<10}  {:>4}  {:>5}%  {:>6}  {:>8}",
                                d.date.format("%b %d").to_string(),
                                d.wpm,
                                d.accuracy,
                                d.tests_completed,
                                d.minutes_spent
                            ),
                            d.accuracy,
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            RangeRows::Weekly(weeks) => (
                "  Week         WPM    Acc%   Tests".to_string(),
                weeks
                    .iter()
                    .map(|w| {
                        (
                            format!(
                                "  {:<10}  {:>4}  {:>5}%  {:>6}",
                                w.week, w.avg_wpm, w.avg_accuracy, w.tests_completed
                            ),
                            w.avg_accuracy,
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
        };

        let mut lines = vec![
            Line::from(Span::styled(
                header,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", "\u{2500}".repeat(44)),
                Style::default().fg(colors.border()),
            )),
        ];
        for (row, accuracy) in rows {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(accuracy_color(accuracy, self.theme)),
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_achievements_tab(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let achievements = MockStats::achievements();
        let earned = achievements.iter().filter(|a| a.is_earned()).count();

        let block = self.section(&format!(
            "Achievements ({earned}/{})",
            achievements.len()
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for achievement in &achievements {
            let (mark, style, when) = match achievement.earned_on {
                Some(date) => (
                    "\u{2713}",
                    Style::default().fg(colors.success()),
                    format!("earned {}", date.format("%Y-%m-%d")),
                ),
                None => (
                    "\u{25cb}",
                    Style::default().fg(colors.text_pending()),
                    "locked".to_string(),
                ),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {mark} "), style),
                Span::styled(
                    format!("{:<20}", achievement.title),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<42}", achievement.description),
                    Style::default().fg(colors.fg()),
                ),
                Span::styled(when, Style::default().fg(colors.muted())),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_insights_tab(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(layout[0]);

        // Difficult keys
        let keys_block = self.section("Difficult Keys");
        let keys_inner = keys_block.inner(top[0]);
        keys_block.render(top[0], buf);
        for (i, key) in MockStats::difficult_keys().iter().enumerate() {
            let y = keys_inner.y + i as u16;
            if y >= keys_inner.y + keys_inner.height {
                break;
            }
            let label = format!(" {:<2} {:>2} errors {:>3}% ", key.key.to_ascii_uppercase(), key.errors, key.accuracy);
            let label_len = label.chars().count() as u16;
            let color = accuracy_color(key.accuracy, self.theme);
            buf.set_string(keys_inner.x, y, &label, Style::default().fg(color));
            let bar_space = keys_inner.width.saturating_sub(label_len) as usize;
            if bar_space > 0 {
                let filled = (f64::from(key.accuracy) / 100.0 * bar_space as f64).round() as usize;
                let bar = "\u{2588}".repeat(filled.min(bar_space));
                buf.set_string(keys_inner.x + label_len, y, &bar, Style::default().fg(color));
            }
        }

        // Tips
        let tips_block = self.section("Personalized Tips");
        let mut tip_lines = Vec::new();
        for tip in MockStats::tips() {
            tip_lines.push(Line::from(Span::styled(
                tip.heading,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            tip_lines.push(Line::from(Span::styled(
                tip.body,
                Style::default().fg(colors.fg()),
            )));
            tip_lines.push(Line::from(""));
        }
        Paragraph::new(tip_lines)
            .block(tips_block)
            .wrap(Wrap { trim: true })
            .render(top[1], buf);

        // Weekly summary
        let summary = MockStats::weekly_summary();
        let summary_block = self.section("This Week's Summary");
        let figures = format!(
            "  +{} WPM improvement    {} tests completed    {:.1}h practiced    {}/7 days active",
            summary.wpm_gain, summary.tests_completed, summary.hours_practiced, summary.days_active
        );
        let lines = vec![
            Line::from(Span::styled(figures, Style::default().fg(colors.fg()))),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", summary.headline),
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(summary.message, Style::default().fg(colors.muted())),
            ]),
        ];
        Paragraph::new(lines)
            .block(summary_block)
            .wrap(Wrap { trim: false })
            .render(layout[1], buf);
    }
}

fn accuracy_color(accuracy: u32, theme: &Theme) -> Color {
    let colors = &theme.colors;
    if accuracy >= 95 {
        colors.success()
    } else if accuracy >= 85 {
        colors.warning()
    } else {
        colors.error()
    }
}

pub fn level_color(level: SkillLevel, theme: &Theme) -> Color {
    let colors = &theme.colors;
    match level {
        SkillLevel::Beginner => colors.success(),
        SkillLevel::Intermediate => colors.accent(),
        SkillLevel::Advanced => colors.warning(),
        SkillLevel::Expert => colors.error(),
    }
}

fn render_text_bar(
    label: &str,
    ratio: f64,
    fill_color: Color,
    empty_color: Color,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    buf.set_string(area.x, area.y, label, Style::default().fg(fill_color));

    let bar_width = area.width as usize;
    let filled = (ratio.clamp(0.0, 1.0) * bar_width as f64).round() as usize;
    let bar_y = area.y + 1;
    buf.set_string(
        area.x,
        bar_y,
        "\u{2588}".repeat(filled),
        Style::default().fg(fill_color),
    );
    buf.set_string(
        area.x + filled as u16,
        bar_y,
        "\u{2591}".repeat(bar_width - filled),
        Style::default().fg(empty_color),
    );
}
