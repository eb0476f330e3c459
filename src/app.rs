use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::practice::{FingerGuide, GameSummary, RowPractice, SpeedTest, WordGame};
use crate::session::Tick;
use crate::stats::TimeRange;
use crate::store::{HighScores, KeyValueStore};
use crate::ui::components::menu::Menu;
use crate::ui::components::stats_dashboard::StatsTab;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    SpeedTest,
    FingerGuide,
    RowPractice,
    Games,
    Statistics,
}

impl Screen {
    /// Target of each home menu entry, in menu order.
    pub const MENU: [Screen; 5] = [
        Screen::SpeedTest,
        Screen::RowPractice,
        Screen::FingerGuide,
        Screen::Games,
        Screen::Statistics,
    ];

    pub fn from_menu_index(index: usize) -> Option<Self> {
        Self::MENU.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::SpeedTest => "Speed Test",
            Screen::FingerGuide => "Finger Guide",
            Screen::RowPractice => "Row Practice",
            Screen::Games => "Typing Games",
            Screen::Statistics => "Statistics",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub speed_test: SpeedTest,
    pub row_practice: RowPractice,
    pub word_game: WordGame,
    pub finger_guide: FingerGuide,
    pub stats_tab: StatsTab,
    pub stats_range: TimeRange,
    pub high_scores: HighScores<Box<dyn KeyValueStore>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let loaded_theme = Theme::load_or_default(&config.theme);
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            screen: Screen::Home,
            menu: Menu::new(theme),
            theme,
            speed_test: SpeedTest::new(config.difficulty, config.test_duration_secs),
            row_practice: RowPractice::new(),
            word_game: WordGame::new(config.game_duration_secs),
            finger_guide: FingerGuide::new(),
            stats_tab: StatsTab::default(),
            stats_range: TimeRange::default(),
            high_scores: HighScores::new(store),
            config,
            should_quit: false,
        }
    }

    /// Switch screens. The view being left is reset, which also revokes any
    /// countdown it owns.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        match self.screen {
            Screen::Home => {}
            Screen::SpeedTest => self.speed_test.reset(),
            Screen::FingerGuide => self.finger_guide.reset(),
            Screen::RowPractice => self.row_practice.reset(),
            Screen::Games => self.word_game.quit(),
            Screen::Statistics => {
                self.stats_tab = StatsTab::default();
                self.stats_range = TimeRange::default();
            }
        }
        debug!(from = self.screen.title(), to = screen.title(), "navigate");
        self.screen = screen;
    }

    pub fn go_home(&mut self) {
        self.navigate(Screen::Home);
    }

    pub fn open_selected(&mut self) {
        if let Some(screen) = Screen::from_menu_index(self.menu.selected) {
            self.navigate(screen);
        }
    }

    /// Drive the active screen's countdown. Views that are not shown own no
    /// live ticker, so only the current screen is polled.
    pub fn tick(&mut self, now: Instant) -> Tick {
        match self.screen {
            Screen::SpeedTest => self.speed_test.tick(now),
            Screen::Games => {
                let high_scores = &mut self.high_scores;
                self.word_game
                    .tick(now, |summary| record_high_score(high_scores, summary))
            }
            Screen::Home | Screen::FingerGuide | Screen::RowPractice | Screen::Statistics => {
                Tick::Stale
            }
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.get(self.word_game.mode().slug())
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }
}

/// Write-failures are logged and reported as "not a new high score" so the
/// game still reaches its results screen.
fn record_high_score(
    high_scores: &mut HighScores<Box<dyn KeyValueStore>>,
    summary: &GameSummary,
) -> bool {
    match high_scores.record(summary.mode.slug(), summary.score) {
        Ok(is_new) => is_new,
        Err(err) => {
            warn!(mode = summary.mode.slug(), score = summary.score, error = %err, "failed to save high score");
            false
        }
    }
}
