use std::fs;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tempfile::TempDir;

use typeshala::app::{App, Screen};
use typeshala::config::Config;
use typeshala::content::{Difficulty, Row};
use typeshala::practice::{GameMode, GameState, RowPractice, SpeedTest, WordGame};
use typeshala::session::{InputOutcome, Tick, TimerState};
use typeshala::store::high_score::key_for;
use typeshala::store::{HighScores, JsonStore, KeyValueStore};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn test_high_score_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let mut scores = HighScores::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
    assert_eq!(scores.get("word-rain"), 0);
    assert!(scores.record("word-rain", 420).unwrap());
    assert!(!scores.record("word-rain", 420).unwrap());
    assert!(!scores.record("word-rain", 100).unwrap());

    let reopened = HighScores::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
    assert_eq!(reopened.get("word-rain"), 420);
    assert_eq!(reopened.get("speed-race"), 0);
}

#[test]
fn test_stored_value_is_decimal_string() {
    let dir = TempDir::new().unwrap();
    let mut scores = HighScores::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
    scores.record("speed-race", 1250).unwrap();

    let raw = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[key_for("speed-race")], "1250");
}

#[test]
fn test_unparseable_high_score_reads_as_zero() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    store.set(&key_for("accuracy-challenge"), "lots").unwrap();

    let mut scores = HighScores::new(store);
    assert_eq!(scores.get("accuracy-challenge"), 0);
    assert!(scores.record("accuracy-challenge", 1).unwrap());
    assert_eq!(scores.get("accuracy-challenge"), 1);
}

#[test]
fn test_corrupt_storage_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("storage.json"), "{ not json").unwrap();

    let mut store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    assert!(store.get(&key_for("word-rain")).is_none());
    store.set(&key_for("word-rain"), "10").unwrap();

    let reopened = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    assert_eq!(reopened.get(&key_for("word-rain")).as_deref(), Some("10"));
}

#[test]
fn test_app_game_over_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let mut app = App::new(Config::default(), Box::new(store));

    app.navigate(Screen::Games);
    assert!(app.word_game.select_mode(GameMode::SpeedRace));
    let t0 = Instant::now();
    app.word_game.start(t0);
    for ch in app.word_game.current_word().chars() {
        app.word_game.type_char(ch, t0 + secs(2));
    }
    let score = app.word_game.score();
    assert!(score > 0);

    let total = app.config.game_duration_secs;
    assert_eq!(app.tick(t0 + secs(total)), Tick::Expired);
    assert!(app.word_game.is_new_high_score());

    let reopened = HighScores::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
    assert_eq!(reopened.get("speed-race"), score);
    assert_eq!(reopened.get("word-rain"), 0);
}

#[test]
fn test_speed_test_stale_tick_after_reset() {
    let t0 = Instant::now();
    let mut test = SpeedTest::new(Difficulty::Hard, 30);
    test.start(t0);
    test.type_char('S', t0 + secs(1));
    let handle = test.ticker().unwrap();

    test.reset();
    assert_eq!(test.handle_tick(handle, t0 + secs(30)), Tick::Stale);
    assert_eq!(test.timer().state(), TimerState::Idle);
    assert_eq!(test.time_left(), 30);
    assert!(test.session().typed().is_empty());

    // A fresh start issues a handle the old one cannot stand in for.
    test.start(t0 + secs(40));
    assert_eq!(test.handle_tick(handle, t0 + secs(45)), Tick::Stale);
    assert_eq!(test.tick(t0 + secs(45)), Tick::Running { remaining_secs: 25 });
}

#[test]
fn test_speed_test_mistakes_and_overlong_input() {
    let t0 = Instant::now();
    let mut test = SpeedTest::new(Difficulty::Easy, 60);
    test.start(t0);

    let target = Difficulty::Easy.text();
    let mut typed = target.to_string();
    typed.push_str(" extra");
    assert_eq!(test.input(&typed, t0 + secs(30)), InputOutcome::Updated);
    assert!(!test.session().is_complete());
    assert!(test.is_running());

    let snapshot = test.session().snapshot();
    assert_eq!(snapshot.total_typed, typed.chars().count());
    assert_eq!(snapshot.correct_count, target.chars().count());
    assert!(snapshot.accuracy < 100);
}

#[test]
fn test_row_practice_progress_through_all_exercises() {
    let t0 = Instant::now();
    let mut practice = RowPractice::with_rng(SmallRng::seed_from_u64(7));
    practice.select_row(Row::Numbers);

    // Random picks repeat, so keep drilling until the row is done.
    for round in 0..200 {
        if practice.row_progress(Row::Numbers) == 100 {
            break;
        }
        practice.start(t0 + secs(round));
        let exercise = practice.session().target_text();
        let outcome = practice.input(&exercise, t0 + secs(round) + Duration::from_millis(500));
        assert_eq!(outcome, InputOutcome::Completed);
        assert_eq!(practice.just_completed(), Some(exercise.as_str()));
    }

    assert_eq!(practice.row_progress(Row::Numbers), 100);
    assert_eq!(practice.completed_count(), Row::Numbers.exercises().len());
    assert_eq!(practice.row_progress(Row::Home), 0);
}

#[test]
fn test_word_game_pause_blocks_ticks_and_input() {
    let t0 = Instant::now();
    let mut game = WordGame::with_rng(60, SmallRng::seed_from_u64(3));
    game.start(t0);
    let handle = game.ticker().unwrap();

    game.toggle_pause(t0 + secs(10));
    assert_eq!(game.state(), GameState::Paused);
    assert_eq!(game.handle_tick(handle, t0 + secs(70), |_| true), Tick::Stale);
    assert_eq!(game.type_char('a', t0 + secs(11)), InputOutcome::Ignored);
    assert_eq!(game.time_left(), 60);

    game.toggle_pause(t0 + secs(20));
    assert_eq!(game.tick(t0 + secs(25), |_| true), Tick::Running { remaining_secs: 55 });

    game.quit();
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(game.tick(t0 + secs(90), |_| true), Tick::Stale);
}
