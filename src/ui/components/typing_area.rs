use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::{CharClass, TypingSession};
use crate::ui::theme::{Theme, ThemeColors};

/// Target text colored by per-character classification, with any input
/// typed past the end of the target shown as errors.
pub struct TypingArea<'a> {
    session: &'a TypingSession,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(session: &'a TypingSession, theme: &'a Theme) -> Self {
        Self {
            session,
            title: "",
            focused: session.is_active(),
            theme,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

fn class_style(class: CharClass, colors: &ThemeColors) -> Style {
    match class {
        CharClass::Correct => Style::default().fg(colors.text_correct()),
        CharClass::Incorrect => Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg())
            .add_modifier(Modifier::UNDERLINED),
        CharClass::Current => Style::default()
            .fg(colors.text_cursor_fg())
            .bg(colors.text_cursor_bg()),
        CharClass::Pending => Style::default().fg(colors.text_pending()),
    }
}

/// A mistyped space is invisible, so mark it.
fn display_char(ch: char, class: CharClass) -> char {
    if ch == ' ' && class == CharClass::Incorrect {
        '\u{00b7}'
    } else {
        ch
    }
}

fn build_spans(session: &TypingSession, colors: &ThemeColors) -> Vec<Span<'static>> {
    let mut spans: Vec<Span> = session
        .char_classes()
        .map(|(ch, class)| {
            Span::styled(display_char(ch, class).to_string(), class_style(class, colors))
        })
        .collect();

    let overflow: String = session
        .typed()
        .iter()
        .skip(session.target().len())
        .collect();
    if !overflow.is_empty() {
        spans.push(Span::styled(
            overflow,
            class_style(CharClass::Incorrect, colors),
        ));
    }
    spans
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let mut block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        if !self.title.is_empty() {
            block = block.title(format!(" {} ", self.title));
        }

        let paragraph = Paragraph::new(Line::from(build_spans(self.session, colors)))
            .block(block)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}
