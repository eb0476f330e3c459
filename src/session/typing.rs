use std::time::{Duration, Instant};

use crate::session::metrics::{self, CharClass, MetricsSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Updated,
    Completed,
}

/// Handed to the caller's completion closure when typed input matches the target.
#[derive(Debug)]
pub struct Completion<'a> {
    pub target: &'a [char],
    pub snapshot: MetricsSnapshot,
    pub elapsed: Duration,
}

impl Completion<'_> {
    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }
}

/// One attempt at reproducing a target text.
///
/// Every practice view drives its typing through this type; the views differ
/// only in where targets come from and what happens on completion.
#[derive(Clone, Debug, Default)]
pub struct TypingSession {
    target: Vec<char>,
    typed: Vec<char>,
    started_at: Option<Instant>,
    active: bool,
    snapshot: MetricsSnapshot,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle session that displays `target` but does not accept input yet.
    pub fn idle(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            ..Self::default()
        }
    }

    pub fn start(&mut self, target: &str, now: Instant) {
        self.target = target.chars().collect();
        self.typed.clear();
        self.started_at = Some(now);
        self.active = true;
        self.snapshot = MetricsSnapshot::default();
    }

    /// Back to idle defaults. The target stays so it can still be displayed.
    pub fn reset(&mut self) {
        self.typed.clear();
        self.started_at = None;
        self.active = false;
        self.snapshot = MetricsSnapshot::default();
    }

    /// Replace the target without touching the session clock.
    pub fn advance(&mut self, target: &str) {
        self.target = target.chars().collect();
        self.typed.clear();
        self.active = self.started_at.is_some();
        self.snapshot = MetricsSnapshot::default();
    }

    /// Stop accepting input, keeping the last snapshot for display.
    pub fn finish(&mut self) {
        self.active = false;
    }

    pub fn set_target(&mut self, target: &str) {
        self.reset();
        self.target = target.chars().collect();
    }

    pub fn on_input<F>(&mut self, typed: &str, now: Instant, on_complete: F) -> InputOutcome
    where
        F: FnOnce(&Completion<'_>),
    {
        if !self.active {
            return InputOutcome::Ignored;
        }

        self.typed = typed.chars().collect();
        let elapsed = self.elapsed(now);
        self.snapshot = MetricsSnapshot::compute(&self.target, &self.typed, elapsed);

        if metrics::is_complete(&self.typed, &self.target) {
            self.active = false;
            on_complete(&Completion {
                target: &self.target,
                snapshot: self.snapshot,
                elapsed,
            });
            InputOutcome::Completed
        } else {
            InputOutcome::Updated
        }
    }

    pub fn push_char<F>(&mut self, ch: char, now: Instant, on_complete: F) -> InputOutcome
    where
        F: FnOnce(&Completion<'_>),
    {
        if !self.active {
            return InputOutcome::Ignored;
        }
        let mut next = self.typed_text();
        next.push(ch);
        self.on_input(&next, now, on_complete)
    }

    pub fn pop_char(&mut self, now: Instant) -> InputOutcome {
        if !self.active || self.typed.is_empty() {
            return InputOutcome::Ignored;
        }
        let mut next = self.typed_text();
        next.pop();
        self.on_input(&next, now, |_| {})
    }

    pub fn classify(&self, index: usize) -> CharClass {
        metrics::classify_char(&self.target, &self.typed, index)
    }

    pub fn char_classes(&self) -> impl Iterator<Item = (char, CharClass)> + '_ {
        self.target
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, self.classify(i)))
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        metrics::is_complete(&self.typed, &self.target)
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn typed_text(&self) -> String {
        self.typed.iter().collect()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.snapshot
    }

    pub fn next_char(&self) -> Option<char> {
        self.target.get(self.typed.len()).copied()
    }

    /// Share of the target covered by typed input, as a rounded percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.target.is_empty() {
            return 0;
        }
        (self.snapshot.current_index as f64 / self.target.len() as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_session_ignores_input() {
        let mut session = TypingSession::idle("asdf");
        let now = Instant::now();
        assert_eq!(session.on_input("a", now, |_| {}), InputOutcome::Ignored);
        assert!(session.typed().is_empty());
        assert_eq!(session.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_input_recomputes_snapshot() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("asdf", t0);
        let outcome = session.on_input("asdg", t0 + Duration::from_secs(60), |_| {});
        assert_eq!(outcome, InputOutcome::Updated);
        let snap = session.snapshot();
        assert_eq!(snap.accuracy, 75);
        assert_eq!(snap.correct_count, 3);
        assert_eq!(snap.current_index, 4);
        assert_eq!(snap.wpm, 1);
        assert!(session.is_active());
    }

    #[test]
    fn test_completion_invokes_closure_once_and_deactivates() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("ab", t0);
        let mut completed = Vec::new();
        session.push_char('a', t0, |c| completed.push(c.target_text()));
        let outcome = session.push_char('b', t0 + Duration::from_secs(1), |c| {
            completed.push(c.target_text())
        });
        assert_eq!(outcome, InputOutcome::Completed);
        assert_eq!(completed, vec!["ab".to_string()]);
        assert!(!session.is_active());
        assert_eq!(session.push_char('c', t0, |_| {}), InputOutcome::Ignored);
    }

    #[test]
    fn test_overlong_input_never_completes() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("ab", t0);
        assert_eq!(session.on_input("abc", t0, |_| {}), InputOutcome::Updated);
        assert_eq!(session.typed().len(), 3);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("asdf", t0);
        session.on_input("xx", t0 + Duration::from_secs(5), |_| {});
        session.reset();
        assert!(!session.is_active());
        assert!(session.started_at().is_none());
        assert_eq!(session.snapshot().accuracy, 100);
        assert_eq!(session.snapshot().wpm, 0);
        assert_eq!(metrics::accuracy(session.typed(), session.target()), 100);
        assert_eq!(session.target_text(), "asdf");
    }

    #[test]
    fn test_empty_target_completes_on_empty_input() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("", t0);
        assert_eq!(session.on_input("", t0, |_| {}), InputOutcome::Completed);
        assert_eq!(session.snapshot().accuracy, 100);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn test_pop_char() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("abc", t0);
        session.push_char('x', t0, |_| {});
        assert_eq!(session.snapshot().accuracy, 0);
        session.pop_char(t0);
        assert!(session.typed().is_empty());
        assert_eq!(session.snapshot().accuracy, 100);
        assert_eq!(session.pop_char(t0), InputOutcome::Ignored);
    }

    #[test]
    fn test_advance_keeps_clock() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("cat", t0);
        session.on_input("cat", t0, |_| {});
        assert!(!session.is_active());
        session.advance("dog");
        assert!(session.is_active());
        assert_eq!(session.started_at(), Some(t0));
        assert_eq!(session.next_char(), Some('d'));
    }

    #[test]
    fn test_advance_clears_previous_snapshot() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("cat", t0);
        session.on_input("cat", t0 + Duration::from_secs(6), |_| {});
        assert!(session.snapshot().wpm > 0);
        session.advance("dog");
        assert_eq!(session.snapshot(), MetricsSnapshot::default());
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn test_progress_percent() {
        let mut session = TypingSession::new();
        let t0 = Instant::now();
        session.start("abcd", t0);
        session.on_input("ab", t0, |_| {});
        assert_eq!(session.progress_percent(), 50);
    }
}
