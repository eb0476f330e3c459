use std::time::Instant;

use tracing::{debug, info};

use crate::content::Difficulty;
use crate::session::{
    Completion, Countdown, InputOutcome, Tick, TickHandle, TimerState, TypingSession,
};

/// Timed reproduction of a fixed text chosen by difficulty.
pub struct SpeedTest {
    difficulty: Difficulty,
    session: TypingSession,
    timer: Countdown,
    ticker: Option<TickHandle>,
}

impl SpeedTest {
    pub fn new(difficulty: Difficulty, duration_secs: u64) -> Self {
        Self {
            difficulty,
            session: TypingSession::idle(difficulty.text()),
            timer: Countdown::new(duration_secs),
            ticker: None,
        }
    }

    /// Returns false when a test is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.timer.is_running() {
            return false;
        }
        self.session.start(self.difficulty.text(), now);
        self.ticker = Some(self.timer.start(now));
        info!(
            difficulty = self.difficulty.as_str(),
            duration = self.timer.total_secs(),
            "speed test started"
        );
        true
    }

    /// Clear input and timer; the text stays.
    pub fn reset(&mut self) {
        self.session.reset();
        self.timer.cancel();
        self.ticker = None;
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.is_running() {
            return false;
        }
        self.difficulty = difficulty;
        self.session.set_target(difficulty.text());
        self.timer.cancel();
        self.ticker = None;
        true
    }

    pub fn select_duration(&mut self, secs: u64) -> bool {
        if self.is_running() || !self.timer.set_duration(secs) {
            return false;
        }
        self.session.reset();
        self.ticker = None;
        true
    }

    pub fn type_char(&mut self, ch: char, now: Instant) -> InputOutcome {
        let timer = &mut self.timer;
        let ticker = &mut self.ticker;
        self.session.push_char(ch, now, |done| complete(timer, ticker, done))
    }

    pub fn backspace(&mut self, now: Instant) -> InputOutcome {
        self.session.pop_char(now)
    }

    /// Replace the whole typed input, as a paste or text-field change would.
    pub fn input(&mut self, typed: &str, now: Instant) -> InputOutcome {
        let timer = &mut self.timer;
        let ticker = &mut self.ticker;
        self.session.on_input(typed, now, |done| complete(timer, ticker, done))
    }

    pub fn tick(&mut self, now: Instant) -> Tick {
        match self.ticker {
            Some(handle) => self.handle_tick(handle, now),
            None => Tick::Stale,
        }
    }

    pub fn handle_tick(&mut self, handle: TickHandle, now: Instant) -> Tick {
        let tick = self.timer.tick(handle, now);
        if tick == Tick::Expired {
            self.session.finish();
            self.ticker = None;
            let snapshot = self.session.snapshot();
            info!(wpm = snapshot.wpm, accuracy = snapshot.accuracy, "speed test time up");
        } else if let Tick::Running { remaining_secs } = tick {
            debug!(remaining_secs, "speed test tick");
        }
        tick
    }

    pub fn ticker(&self) -> Option<TickHandle> {
        self.ticker
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.timer.state(), TimerState::Stopped | TimerState::Expired)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn duration_secs(&self) -> u64 {
        self.timer.total_secs()
    }

    pub fn time_left(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn progress_percent(&self) -> u32 {
        self.session.progress_percent()
    }
}

fn complete(timer: &mut Countdown, ticker: &mut Option<TickHandle>, done: &Completion<'_>) {
    timer.stop();
    *ticker = None;
    info!(
        wpm = done.snapshot.wpm,
        accuracy = done.snapshot.accuracy,
        secs = done.elapsed.as_secs(),
        "speed test completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn type_str(test: &mut SpeedTest, s: &str, now: Instant) -> InputOutcome {
        let mut outcome = InputOutcome::Ignored;
        for ch in s.chars() {
            outcome = test.type_char(ch, now);
        }
        outcome
    }

    #[test]
    fn test_input_ignored_before_start() {
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        assert_eq!(test.type_char('T', Instant::now()), InputOutcome::Ignored);
        assert_eq!(test.session().snapshot().accuracy, 100);
        assert_eq!(test.session().snapshot().wpm, 0);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        assert!(test.start(t0));
        let handle = test.ticker();
        assert!(!test.start(t0 + Duration::from_secs(5)));
        assert_eq!(test.ticker(), handle);
    }

    #[test]
    fn test_settings_locked_while_running() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        test.start(t0);
        assert!(!test.select_difficulty(Difficulty::Hard));
        assert!(!test.select_duration(120));
        assert_eq!(test.difficulty(), Difficulty::Easy);
        assert_eq!(test.duration_secs(), 60);

        test.reset();
        assert!(test.select_difficulty(Difficulty::Hard));
        assert!(test.select_duration(120));
        assert_eq!(test.session().target_text(), Difficulty::Hard.text());
        assert_eq!(test.time_left(), 120);
    }

    #[test]
    fn test_expiry_finishes_session() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Medium, 30);
        test.start(t0);
        type_str(&mut test, "Tech", t0 + Duration::from_secs(2));
        assert_eq!(test.tick(t0 + Duration::from_secs(10)), Tick::Running { remaining_secs: 20 });
        assert_eq!(test.tick(t0 + Duration::from_secs(30)), Tick::Expired);
        assert!(test.is_finished());
        assert_eq!(test.type_char('n', t0 + Duration::from_secs(31)), InputOutcome::Ignored);
        assert_eq!(test.session().typed_text(), "Tech");
        assert_eq!(test.tick(t0 + Duration::from_secs(40)), Tick::Stale);
    }

    #[test]
    fn test_completion_stops_timer() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 300);
        test.start(t0);
        let text = Difficulty::Easy.text();
        let outcome = type_str(&mut test, text, t0 + Duration::from_secs(40));
        assert_eq!(outcome, InputOutcome::Completed);
        assert_eq!(test.timer().state(), TimerState::Stopped);
        assert!(test.ticker().is_none());
        assert_eq!(test.progress_percent(), 100);
        assert_eq!(test.session().snapshot().accuracy, 100);
    }

    #[test]
    fn test_pasted_completion_stops_timer() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 300);
        test.start(t0);
        let Some(handle) = test.ticker() else {
            panic!("running test has a ticker");
        };
        let outcome = test.input(Difficulty::Easy.text(), t0 + Duration::from_secs(40));
        assert_eq!(outcome, InputOutcome::Completed);
        assert_eq!(test.timer().state(), TimerState::Stopped);
        assert!(test.ticker().is_none());
        assert!(test.is_finished());
        assert_eq!(test.handle_tick(handle, t0 + Duration::from_secs(300)), Tick::Stale);
        assert_eq!(test.input("The", t0 + Duration::from_secs(41)), InputOutcome::Ignored);
    }

    #[test]
    fn test_stale_handle_after_reset() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        test.start(t0);
        let Some(old) = test.ticker() else {
            panic!("running test has a ticker");
        };
        test.reset();
        assert_eq!(test.handle_tick(old, t0 + Duration::from_secs(5)), Tick::Stale);
        assert_eq!(test.time_left(), 60);
        assert_eq!(test.timer().state(), TimerState::Idle);
    }

    #[test]
    fn test_progress_percent() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        test.start(t0);
        let text: String = Difficulty::Easy.text().chars().take(31).collect();
        type_str(&mut test, &text, t0);
        let len = Difficulty::Easy.text().chars().count();
        let expected = (31.0 / len as f64 * 100.0).round() as u32;
        assert_eq!(test.progress_percent(), expected);
    }

    #[test]
    fn test_whole_input_replacement() {
        let t0 = Instant::now();
        let mut test = SpeedTest::new(Difficulty::Easy, 60);
        test.start(t0);
        assert_eq!(test.input("The quack", t0), InputOutcome::Updated);
        // "The quack" vs "The quick": one mismatch in nine
        assert_eq!(test.session().snapshot().accuracy, 89);
        assert_eq!(test.backspace(t0), InputOutcome::Updated);
        assert_eq!(test.session().typed_text(), "The quac");
    }
}
