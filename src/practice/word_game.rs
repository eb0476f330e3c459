use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::content::words::WordTier;
use crate::session::{Countdown, InputOutcome, Tick, TickHandle, TypingSession};

pub const DEFAULT_GAME_SECS: u64 = 60;
pub const WORDS_PER_LEVEL: u32 = 10;
pub const POINTS_PER_CHAR: u64 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    WordRain,
    SpeedRace,
    AccuracyChallenge,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::WordRain,
        GameMode::SpeedRace,
        GameMode::AccuracyChallenge,
    ];

    /// Identifier used in storage keys.
    pub fn slug(self) -> &'static str {
        match self {
            GameMode::WordRain => "word-rain",
            GameMode::SpeedRace => "speed-race",
            GameMode::AccuracyChallenge => "accuracy-challenge",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameMode::WordRain => "Word Rain",
            GameMode::SpeedRace => "Speed Race",
            GameMode::AccuracyChallenge => "Accuracy Challenge",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameMode::WordRain => "Type falling words before they reach the bottom!",
            GameMode::SpeedRace => "Race against time to type as many words as possible!",
            GameMode::AccuracyChallenge => "Perfect typing with zero mistakes allowed!",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    Ended,
}

/// Every typed character checked against the character expected at its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeystrokeTally {
    pub total: u64,
    pub correct: u64,
}

impl KeystrokeTally {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Rounded percentage; 100 before the first keystroke.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub mode: GameMode,
    pub score: u64,
    pub level: u32,
    pub words_completed: u32,
    pub accuracy: u32,
}

/// Timed single-word typing game shared by all three modes.
pub struct WordGame {
    mode: GameMode,
    state: GameState,
    score: u64,
    level: u32,
    words_completed: u32,
    tally: KeystrokeTally,
    session: TypingSession,
    timer: Countdown,
    ticker: Option<TickHandle>,
    summary: Option<GameSummary>,
    new_high_score: bool,
    rng: SmallRng,
}

impl WordGame {
    pub fn new(duration_secs: u64) -> Self {
        Self::with_rng(duration_secs, SmallRng::from_entropy())
    }

    pub fn with_rng(duration_secs: u64, rng: SmallRng) -> Self {
        Self {
            mode: GameMode::default(),
            state: GameState::Menu,
            score: 0,
            level: 1,
            words_completed: 0,
            tally: KeystrokeTally::default(),
            session: TypingSession::new(),
            timer: Countdown::new(duration_secs),
            ticker: None,
            summary: None,
            new_high_score: false,
            rng,
        }
    }

    /// Mode changes are only accepted from the menu or the results screen.
    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        if !matches!(self.state, GameState::Menu | GameState::Ended) {
            return false;
        }
        self.mode = mode;
        self.quit();
        true
    }

    pub fn start(&mut self, now: Instant) {
        self.state = GameState::Playing;
        self.score = 0;
        self.level = 1;
        self.words_completed = 0;
        self.tally = KeystrokeTally::default();
        self.summary = None;
        self.new_high_score = false;
        let word = self.random_word();
        self.session.start(word, now);
        self.ticker = Some(self.timer.start(now));
        info!(mode = self.mode.slug(), "game started");
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.state {
            GameState::Playing => {
                self.timer.pause();
                self.ticker = None;
                self.state = GameState::Paused;
                debug!("game paused");
            }
            GameState::Paused => {
                self.ticker = self.timer.resume(now);
                self.state = GameState::Playing;
                debug!("game resumed");
            }
            GameState::Menu | GameState::Ended => {}
        }
    }

    /// Abandon the current game and return to the menu.
    pub fn quit(&mut self) {
        self.timer.cancel();
        self.ticker = None;
        self.state = GameState::Menu;
        self.score = 0;
        self.level = 1;
        self.words_completed = 0;
        self.tally = KeystrokeTally::default();
        self.session = TypingSession::new();
        self.summary = None;
        self.new_high_score = false;
    }

    pub fn type_char(&mut self, ch: char, now: Instant) -> InputOutcome {
        if self.state != GameState::Playing {
            return InputOutcome::Ignored;
        }
        self.tally.record(self.session.next_char() == Some(ch));

        let score = &mut self.score;
        let level = &mut self.level;
        let words = &mut self.words_completed;
        let outcome = self.session.push_char(ch, now, |done| {
            *words += 1;
            *score += done.target.len() as u64 * u64::from(*level) * POINTS_PER_CHAR;
            if *words % WORDS_PER_LEVEL == 0 {
                *level += 1;
                info!(level = *level, "level up");
            }
        });

        if outcome == InputOutcome::Completed {
            let word = self.random_word();
            self.session.advance(word);
        }
        outcome
    }

    pub fn backspace(&mut self, now: Instant) -> InputOutcome {
        if self.state != GameState::Playing {
            return InputOutcome::Ignored;
        }
        self.session.pop_char(now)
    }

    /// Advance the countdown. On expiry the game ends and `on_game_over`
    /// receives the final summary; it returns whether a new high score was set.
    pub fn tick<F>(&mut self, now: Instant, on_game_over: F) -> Tick
    where
        F: FnOnce(&GameSummary) -> bool,
    {
        match self.ticker {
            Some(handle) => self.handle_tick(handle, now, on_game_over),
            None => Tick::Stale,
        }
    }

    pub fn handle_tick<F>(&mut self, handle: TickHandle, now: Instant, on_game_over: F) -> Tick
    where
        F: FnOnce(&GameSummary) -> bool,
    {
        let tick = self.timer.tick(handle, now);
        if tick == Tick::Expired {
            self.state = GameState::Ended;
            self.ticker = None;
            self.session.finish();
            let summary = self.current_summary();
            info!(
                mode = summary.mode.slug(),
                score = summary.score,
                level = summary.level,
                words = summary.words_completed,
                accuracy = summary.accuracy,
                "game over"
            );
            self.new_high_score = on_game_over(&summary);
            self.summary = Some(summary);
        }
        tick
    }

    fn random_word(&mut self) -> &'static str {
        WordTier::for_level(self.level)
            .words()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }

    fn current_summary(&self) -> GameSummary {
        GameSummary {
            mode: self.mode,
            score: self.score,
            level: self.level,
            words_completed: self.words_completed,
            accuracy: self.accuracy(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn words_completed(&self) -> u32 {
        self.words_completed
    }

    pub fn accuracy(&self) -> u32 {
        self.tally.accuracy()
    }

    pub fn tally(&self) -> KeystrokeTally {
        self.tally
    }

    pub fn current_word(&self) -> String {
        self.session.target_text()
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn time_left(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn ticker(&self) -> Option<TickHandle> {
        self.ticker
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }
}
