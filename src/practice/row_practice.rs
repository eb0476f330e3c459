use std::collections::HashSet;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::content::Row;
use crate::session::{InputOutcome, TypingSession};

/// Drills one keyboard row at a time and remembers which exercises were
/// typed exactly during this run of the app.
pub struct RowPractice {
    row: Row,
    session: TypingSession,
    completed: HashSet<String>,
    last_completed: Option<String>,
    rng: SmallRng,
}

impl RowPractice {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            row: Row::Home,
            session: TypingSession::new(),
            completed: HashSet::new(),
            last_completed: None,
            rng,
        }
    }

    /// Begin a random exercise from the selected row.
    pub fn start(&mut self, now: Instant) {
        let exercise = self
            .row
            .exercises()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        self.session.start(exercise, now);
        self.last_completed = None;
        info!(row = self.row.info().title, exercise, "row exercise started");
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.last_completed = None;
    }

    /// Switching rows abandons any exercise in progress.
    pub fn select_row(&mut self, row: Row) {
        if row == self.row {
            return;
        }
        self.row = row;
        self.session = TypingSession::new();
        self.last_completed = None;
    }

    pub fn type_char(&mut self, ch: char, now: Instant) -> InputOutcome {
        let completed = &mut self.completed;
        let last = &mut self.last_completed;
        self.session.push_char(ch, now, |done| {
            Self::record_completion(completed, last, done.target_text());
        })
    }

    pub fn backspace(&mut self, now: Instant) -> InputOutcome {
        self.session.pop_char(now)
    }

    pub fn input(&mut self, typed: &str, now: Instant) -> InputOutcome {
        let completed = &mut self.completed;
        let last = &mut self.last_completed;
        self.session.on_input(typed, now, |done| {
            Self::record_completion(completed, last, done.target_text());
        })
    }

    fn record_completion(
        completed: &mut HashSet<String>,
        last: &mut Option<String>,
        exercise: String,
    ) {
        info!(exercise = exercise.as_str(), "row exercise completed");
        completed.insert(exercise.clone());
        *last = Some(exercise);
    }

    /// Percentage of `row`'s exercises completed so far.
    pub fn row_progress(&self, row: Row) -> u32 {
        let exercises = row.exercises();
        if exercises.is_empty() {
            return 0;
        }
        let done = exercises
            .iter()
            .filter(|ex| self.completed.contains(**ex))
            .count();
        (done as f64 / exercises.len() as f64 * 100.0).round() as u32
    }

    pub fn is_exercise_done(&self, exercise: &str) -> bool {
        self.completed.contains(exercise)
    }

    /// The exercise finished by the latest input, until the next start or reset.
    pub fn just_completed(&self) -> Option<&str> {
        self.last_completed.as_deref()
    }

    pub fn row(&self) -> Row {
        self.row
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

impl Default for RowPractice {
    fn default() -> Self {
        Self::new()
    }
}
