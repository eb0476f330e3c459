use std::collections::HashSet;
use std::time::Instant;

use tracing::info;

use crate::content::lessons::{LESSONS, Lesson};
use crate::keyboard::finger::{FingerAssignment, qwerty_finger};
use crate::keyboard::layout::KeyCursor;
use crate::session::{InputOutcome, TypingSession};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideTab {
    #[default]
    Lessons,
    Keyboard,
    Posture,
}

impl GuideTab {
    pub const ALL: [GuideTab; 3] = [GuideTab::Lessons, GuideTab::Keyboard, GuideTab::Posture];

    pub fn label(self) -> &'static str {
        match self {
            GuideTab::Lessons => "Lessons",
            GuideTab::Keyboard => "Keyboard",
            GuideTab::Posture => "Posture",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Lessons, keyboard map and posture tips, with an optional typing run over
/// the selected lesson's practice text.
#[derive(Default)]
pub struct FingerGuide {
    tab: GuideTab,
    lesson: usize,
    cursor: KeyCursor,
    practice: TypingSession,
    practiced: HashSet<usize>,
}

impl FingerGuide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> GuideTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: GuideTab) {
        if tab != self.tab {
            self.practice.reset();
            self.tab = tab;
        }
    }

    pub fn lesson_index(&self) -> usize {
        self.lesson
    }

    pub fn lesson(&self) -> &'static Lesson {
        &LESSONS[self.lesson.min(LESSONS.len() - 1)]
    }

    /// Out-of-range indices are ignored.
    pub fn select_lesson(&mut self, index: usize) {
        if index < LESSONS.len() && index != self.lesson {
            self.lesson = index;
            self.practice = TypingSession::new();
        }
    }

    pub fn next_lesson(&mut self) {
        self.select_lesson((self.lesson + 1) % LESSONS.len());
    }

    pub fn prev_lesson(&mut self) {
        self.select_lesson((self.lesson + LESSONS.len() - 1) % LESSONS.len());
    }

    pub fn start_practice(&mut self, now: Instant) {
        let lesson = self.lesson();
        self.practice.start(lesson.practice, now);
        info!(lesson = lesson.title, "lesson practice started");
    }

    pub fn stop_practice(&mut self) {
        self.practice.reset();
    }

    pub fn is_practicing(&self) -> bool {
        self.practice.is_active()
    }

    pub fn type_char(&mut self, ch: char, now: Instant) -> InputOutcome {
        let practiced = &mut self.practiced;
        let lesson = self.lesson;
        self.practice.push_char(ch, now, |done| {
            practiced.insert(lesson);
            info!(
                lesson,
                wpm = done.snapshot.wpm,
                accuracy = done.snapshot.accuracy,
                "lesson practice completed"
            );
        })
    }

    pub fn backspace(&mut self, now: Instant) -> InputOutcome {
        self.practice.pop_char(now)
    }

    pub fn practice(&self) -> &TypingSession {
        &self.practice
    }

    pub fn is_practiced(&self, index: usize) -> bool {
        self.practiced.contains(&index)
    }

    pub fn cursor(&self) -> KeyCursor {
        self.cursor
    }

    pub fn move_cursor(&mut self, dir: CursorMove) {
        match dir {
            CursorMove::Up => self.cursor.up(),
            CursorMove::Down => self.cursor.down(),
            CursorMove::Left => self.cursor.left(),
            CursorMove::Right => self.cursor.right(),
        }
    }

    /// Jump the cursor to `ch` if it is on the guide keyboard.
    pub fn select_key(&mut self, ch: char) -> bool {
        match KeyCursor::position_of(ch) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    pub fn selected_key(&self) -> char {
        self.cursor.key()
    }

    pub fn selected_finger(&self) -> Option<FingerAssignment> {
        qwerty_finger(self.cursor.key())
    }

    /// Back to the first tab and lesson with nothing in progress.
    pub fn reset(&mut self) {
        self.tab = GuideTab::default();
        self.lesson = 0;
        self.cursor = KeyCursor::default();
        self.practice = TypingSession::new();
    }
}
