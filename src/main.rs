use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use tracing::{error, info, warn};

use typeshala::app::{App, Screen};
use typeshala::config::Config;
use typeshala::content::lessons::{HAND_POSITION, LESSONS, PRACTICE_REMINDER, PostureTip, SITTING_POSTURE};
use typeshala::content::texts::{duration_label, next_duration, prev_duration};
use typeshala::content::{Difficulty, Row};
use typeshala::event::{AppEvent, EventHandler};
use typeshala::logging;
use typeshala::practice::{CursorMove, GameMode, GameState, GuideTab};
use typeshala::stats::MockStats;
use typeshala::store::{JsonStore, KeyValueStore, MemoryStore};
use typeshala::ui::components::keyboard_diagram::KeyboardDiagram;
use typeshala::ui::components::menu::{MENU_ITEMS, Menu};
use typeshala::ui::components::metrics_panel::{MetricsPanel, Stat, Tone};
use typeshala::ui::components::progress_bar::ProgressBar;
use typeshala::ui::components::result_panel::ResultPanel;
use typeshala::ui::components::stats_dashboard::{StatsDashboard, StatsTab, level_color};
use typeshala::ui::components::typing_area::TypingArea;
use typeshala::ui::layout::{AppLayout, centered_rect, pack_hint_lines};
use typeshala::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "typeshala",
    version,
    about = "Terminal typing tutor with speed tests, row drills and typing games"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Speed test difficulty")]
    difficulty: Option<Difficulty>,

    #[arg(long, help = "Speed test duration in seconds (30, 60, 120 or 300)")]
    duration: Option<u64>,

    #[arg(long, help = "Directory for high scores and logs")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Print the bundled theme names and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(duration) = cli.duration {
        config.test_duration_secs = duration;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    let adjustments = config.validate();

    let _log_guard = match logging::init_logging(&config.log_dir(), &config.log_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: file logging disabled: {err}");
            None
        }
    };
    if let Some(err) = config_error {
        warn!(error = %err, "config file unreadable, using defaults");
    }
    for note in &adjustments {
        warn!(adjustment = note.as_str(), "config value adjusted");
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = config.theme.as_str(),
        data_dir = config.data_dir.as_str(),
        "typeshala starting"
    );

    let store: Box<dyn KeyValueStore> = match JsonStore::with_base_dir(config.data_dir()) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "storage unavailable, high scores will not persist");
            Box::new(MemoryStore::new())
        }
    };

    let mut app = App::new(config, store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(error = ?err, "event loop failed");
        eprintln!("Error: {err:?}");
    }
    info!("typeshala exiting");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {
                app.tick(Instant::now());
            }
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only process Press events; Repeat would inflate input
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::SpeedTest => handle_speed_test_key(app, key),
        Screen::FingerGuide => handle_finger_guide_key(app, key),
        Screen::RowPractice => handle_row_practice_key(app, key),
        Screen::Games => handle_games_key(app, key),
        Screen::Statistics => handle_stats_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char(ch) => {
            if let Some(index) = Menu::index_for_key(ch) {
                app.menu.selected = index;
                app.open_selected();
            }
        }
        _ => {}
    }
}

fn handle_speed_test_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    let test = &mut app.speed_test;

    if test.is_running() {
        match key.code {
            KeyCode::Esc => test.reset(),
            KeyCode::Backspace => {
                test.backspace(now);
            }
            KeyCode::Char(ch) => {
                test.type_char(ch, now);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Enter => {
            test.start(now);
        }
        KeyCode::Char('r') => test.reset(),
        KeyCode::Right | KeyCode::Char('l') => {
            test.select_difficulty(test.difficulty().next());
        }
        KeyCode::Left | KeyCode::Char('h') => {
            test.select_difficulty(test.difficulty().prev());
        }
        KeyCode::Up | KeyCode::Char('k') => {
            test.select_duration(next_duration(test.duration_secs()));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            test.select_duration(prev_duration(test.duration_secs()));
        }
        _ => {}
    }
}

fn handle_row_practice_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    let practice = &mut app.row_practice;

    if practice.session().is_active() {
        match key.code {
            KeyCode::Esc => practice.reset(),
            KeyCode::Backspace => {
                practice.backspace(now);
            }
            KeyCode::Char(ch) => {
                practice.type_char(ch, now);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Enter => practice.start(now),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
            practice.select_row(practice.row().next());
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            practice.select_row(practice.row().prev());
        }
        KeyCode::Char(ch @ '1'..='5') => {
            let index = ch as usize - '1' as usize;
            if let Some(&row) = Row::ALL.get(index) {
                practice.select_row(row);
            }
        }
        _ => {}
    }
}

fn handle_games_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    let game = &mut app.word_game;

    match game.state() {
        GameState::Playing => match key.code {
            KeyCode::Esc => game.toggle_pause(now),
            KeyCode::Backspace => {
                game.backspace(now);
            }
            KeyCode::Char(ch) => {
                game.type_char(ch, now);
            }
            _ => {}
        },
        GameState::Paused => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('p') => game.toggle_pause(now),
            KeyCode::Char('q') => game.quit(),
            _ => {}
        },
        GameState::Menu => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
            KeyCode::Enter => game.start(now),
            KeyCode::Up | KeyCode::Char('k') => {
                game.select_mode(game.mode().prev());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                game.select_mode(game.mode().next());
            }
            _ => {}
        },
        GameState::Ended => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => game.start(now),
            KeyCode::Esc | KeyCode::Char('q') => game.quit(),
            KeyCode::Up | KeyCode::Char('k') => {
                game.select_mode(game.mode().prev());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                game.select_mode(game.mode().next());
            }
            _ => {}
        },
    }
}

fn handle_finger_guide_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    let guide = &mut app.finger_guide;

    if guide.is_practicing() {
        match key.code {
            KeyCode::Esc => guide.stop_practice(),
            KeyCode::Backspace => {
                guide.backspace(now);
            }
            KeyCode::Char(ch) => {
                guide.type_char(ch, now);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.go_home();
            return;
        }
        KeyCode::Tab => {
            guide.select_tab(guide.tab().next());
            return;
        }
        KeyCode::BackTab => {
            guide.select_tab(guide.tab().prev());
            return;
        }
        _ => {}
    }

    match guide.tab() {
        GuideTab::Lessons => match key.code {
            KeyCode::Up | KeyCode::Char('k') => guide.prev_lesson(),
            KeyCode::Down | KeyCode::Char('j') => guide.next_lesson(),
            KeyCode::Enter | KeyCode::Char('p') => guide.start_practice(now),
            KeyCode::Char(ch @ '1'..='9') => {
                guide.select_lesson(ch as usize - '1' as usize);
            }
            KeyCode::Char('q') => app.go_home(),
            _ => {}
        },
        GuideTab::Keyboard => match key.code {
            KeyCode::Up => guide.move_cursor(CursorMove::Up),
            KeyCode::Down => guide.move_cursor(CursorMove::Down),
            KeyCode::Left => guide.move_cursor(CursorMove::Left),
            KeyCode::Right => guide.move_cursor(CursorMove::Right),
            KeyCode::Char(ch) => {
                guide.select_key(ch.to_ascii_lowercase());
            }
            _ => {}
        },
        GuideTab::Posture => {
            if key.code == KeyCode::Char('q') {
                app.go_home();
            }
        }
    }
}

fn handle_stats_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Tab | KeyCode::Right => app.stats_tab = app.stats_tab.next(),
        KeyCode::BackTab | KeyCode::Left => app.stats_tab = app.stats_tab.prev(),
        KeyCode::Char('t') if app.stats_tab == StatsTab::Progress => {
            app.stats_range = app.stats_range.toggle();
        }
        KeyCode::Char(ch @ '1'..='4') => {
            if let Some(tab) = StatsTab::from_index(ch as usize - '1' as usize) {
                app.stats_tab = tab;
            }
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        Screen::Home => render_home(frame, app),
        Screen::SpeedTest => render_speed_test(frame, app),
        Screen::FingerGuide => render_finger_guide(frame, app),
        Screen::RowPractice => render_row_practice(frame, app),
        Screen::Games => render_games(frame, app),
        Screen::Statistics => {
            let dashboard = StatsDashboard::new(app.stats_tab, app.stats_range, app.theme);
            frame.render_widget(dashboard, area);
        }
    }
}

fn render_header(frame: &mut ratatui::Frame, area: Rect, title: &str, info: &str, theme: &Theme) {
    let colors = &theme.colors;
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {info}"),
                Style::default()
                    .fg(colors.text_pending())
                    .bg(colors.header_bg()),
            ),
        ]),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, area: Rect, hints: &[&str], theme: &Theme) {
    let lines: Vec<Line> = pack_hint_lines(hints, area.width as usize)
        .into_iter()
        .map(|l| {
            Line::from(Span::styled(
                l,
                Style::default().fg(theme.colors.text_pending()),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let quick = MockStats::quick_stats();
    let header_info = format!(
        "Best {} WPM | Accuracy {}% | {} tests | {}h practiced",
        quick.best_wpm, quick.accuracy, quick.total_tests, quick.hours_practiced
    );
    render_header(frame, layout[0], "typeshala", &header_info, app.theme);

    let menu_height = (MENU_ITEMS.len() as u16 * 3 + 8).min(layout[1].height);
    let body = if layout[1].width >= 100 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[1])
            .to_vec()
    } else {
        vec![layout[1]]
    };

    let menu_area = Rect {
        height: menu_height,
        ..centered_rect(90, 100, body[0])
    };
    frame.render_widget(&app.menu, menu_area);

    if let Some(&journey_area) = body.get(1) {
        let block = Block::bordered()
            .title(" Your Progress Journey ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(journey_area);
        frame.render_widget(block, journey_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(MockStats::journey().iter().map(|_| Constraint::Length(3)))
            .split(inner);
        for ((level, percent), row) in MockStats::journey().into_iter().zip(rows.iter()) {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(*row);
            let label = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {:<14}", level.label()),
                    Style::default().fg(level_color(level, app.theme)),
                ),
                Span::styled(
                    level.range_label(),
                    Style::default().fg(colors.muted()),
                ),
            ]));
            frame.render_widget(label, parts[0]);
            let bar_area = Rect {
                x: parts[1].x + 1,
                width: parts[1].width.saturating_sub(2),
                ..parts[1]
            };
            frame.render_widget(
                ProgressBar::percent(level.label(), f64::from(percent), app.theme)
                    .fill(level_color(level, app.theme))
                    .bare(),
                bar_area,
            );
        }
    }

    render_footer(
        frame,
        layout[2],
        &["[1-4] Train", "[s] Stats", "[Up/Down] Select", "[Enter] Open", "[q] Quit"],
        app.theme,
    );
}

fn render_speed_test(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let test = &app.speed_test;
    let app_layout = AppLayout::new(area);
    let snapshot = test.session().snapshot();

    let mut info = format!(
        "{} | {} | {}s left",
        test.difficulty().label(),
        duration_label(test.duration_secs()),
        test.time_left()
    );
    if !app_layout.tier.show_sidebar() {
        info.push_str(&format!(
            " | WPM {} | Acc {}%",
            snapshot.wpm, snapshot.accuracy
        ));
    }
    render_header(frame, app_layout.header, "Speed Test", &info, app.theme);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(app_layout.main);

    let title = if test.is_running() {
        "Type the text below"
    } else {
        "Press Enter to start"
    };
    frame.render_widget(TypingArea::new(test.session(), app.theme).title(title), main[0]);
    frame.render_widget(
        ProgressBar::percent("Progress", f64::from(test.progress_percent()), app.theme),
        main[1],
    );
    frame.render_widget(
        ProgressBar::new("Time", test.timer().remaining_ratio(), app.theme)
            .caption(format!("{}s", test.time_left())),
        main[2],
    );

    if let Some(sidebar) = app_layout.sidebar {
        let mut stats = Stat::from_snapshot(&snapshot);
        stats.push(Stat::seconds("Time left", test.time_left()));
        frame.render_widget(MetricsPanel::new("Live Metrics", stats, app.theme), sidebar);
    }

    let hints: &[&str] = if test.is_running() {
        &["[Type] Practice", "[Backspace] Delete", "[Esc] Stop"]
    } else {
        &[
            "[Enter] Start",
            "[Left/Right] Difficulty",
            "[Up/Down] Duration",
            "[r] Reset",
            "[Esc] Back",
        ]
    };
    render_footer(frame, app_layout.footer, hints, app.theme);

    if test.is_finished() {
        let popup = centered_rect(40, 50, area);
        let mut stats = Stat::from_snapshot(&snapshot);
        stats.push(Stat::seconds(
            "Time used",
            test.duration_secs().saturating_sub(test.time_left()),
        ));
        let headline = if test.session().is_complete() {
            "Text completed!"
        } else {
            "Time's up!"
        };
        frame.render_widget(Clear, popup);
        frame.render_widget(
            ResultPanel::new("Speed Test Results", stats, app.theme)
                .headline(headline)
                .hints(&["[Enter] Try again", "[r] Reset", "[Esc] Back"]),
            popup,
        );
    }
}

fn render_row_practice(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let practice = &app.row_practice;
    let row = practice.row();
    let row_info = row.info();
    let app_layout = AppLayout::new(area);
    let snapshot = practice.session().snapshot();

    let done = row_info
        .exercises
        .iter()
        .filter(|ex| practice.is_exercise_done(ex))
        .count();
    let mut info = format!(
        "{} | {}/{} exercises completed",
        row_info.title,
        done,
        row_info.exercises.len()
    );
    if !app_layout.tier.show_sidebar() {
        info.push_str(&format!(
            " | WPM {} | Acc {}%",
            snapshot.wpm, snapshot.accuracy
        ));
    }
    render_header(frame, app_layout.header, "Row Practice", &info, app.theme);

    let keyboard = KeyboardDiagram::new(app.theme).next_key(practice.session().next_char());
    let show_kbd = app_layout.tier.show_keyboard(area.height);
    let mut constraints = vec![Constraint::Length(4), Constraint::Min(5)];
    if show_kbd {
        constraints.push(Constraint::Length(keyboard.content_height() + 2));
    }
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(app_layout.main);

    let row_spans: Vec<Span> = Row::ALL
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            let style = if r == row {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.text_pending())
            };
            Span::styled(
                format!(" [{}] {} {}% ", i + 1, r.info().badge, practice.row_progress(r)),
                style,
            )
        })
        .collect();
    let mut info_lines = vec![
        Line::from(row_spans),
        Line::from(Span::styled(
            format!(" {}", row_info.description),
            Style::default().fg(colors.fg()),
        )),
        Line::from(vec![
            Span::styled(" Focus keys: ", Style::default().fg(colors.muted())),
            Span::styled(
                row_info.keys,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(exercise) = practice.just_completed() {
        info_lines.push(Line::from(Span::styled(
            format!(" Exercise complete: \"{exercise}\". Press Enter for the next one."),
            Style::default().fg(colors.success()),
        )));
    }
    frame.render_widget(Paragraph::new(info_lines), main[0]);

    let title = if practice.session().is_active() {
        "Type the exercise"
    } else {
        "Press Enter to start an exercise"
    };
    frame.render_widget(
        TypingArea::new(practice.session(), app.theme).title(title),
        main[1],
    );
    if show_kbd {
        frame.render_widget(keyboard, main[2]);
    }

    if let Some(sidebar) = app_layout.sidebar {
        let mut stats = Stat::from_snapshot(&snapshot);
        stats.push(Stat::new(
            "Row progress",
            format!("{}%", practice.row_progress(row)),
            Tone::Accent,
        ));
        stats.push(Stat::new(
            "Completed",
            practice.completed_count().to_string(),
            Tone::Plain,
        ));
        frame.render_widget(MetricsPanel::new("Metrics", stats, app.theme), sidebar);
    }

    let hints: &[&str] = if practice.session().is_active() {
        &["[Type] Practice", "[Backspace] Delete", "[Esc] Stop"]
    } else {
        &["[Enter] Start", "[1-5/Tab] Row", "[Esc] Back"]
    };
    render_footer(frame, app_layout.footer, hints, app.theme);
}

fn render_games(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let game = &app.word_game;
    let app_layout = AppLayout::new(area);

    match game.state() {
        GameState::Menu => {
            render_header(
                frame,
                app_layout.header,
                "Typing Games",
                "Choose a game and press Enter",
                app.theme,
            );
            let list_area = Rect {
                width: area.width,
                ..app_layout.main
            };
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(GameMode::ALL.iter().map(|_| Constraint::Length(4)))
                .split(list_area);
            for (mode, row) in GameMode::ALL.iter().zip(rows.iter()) {
                let selected = *mode == game.mode();
                let border = if selected {
                    colors.border_focused()
                } else {
                    colors.border()
                };
                let block = Block::bordered()
                    .title(format!(" {} ", mode.title()))
                    .border_style(Style::default().fg(border));
                let lines = vec![
                    Line::from(Span::styled(
                        format!(" {}", mode.description()),
                        Style::default().fg(colors.fg()),
                    )),
                    Line::from(Span::styled(
                        format!(" High score: {}", app.high_scores.get(mode.slug())),
                        Style::default().fg(colors.warning()),
                    )),
                ];
                frame.render_widget(Paragraph::new(lines).block(block), *row);
            }
            render_footer(
                frame,
                app_layout.footer,
                &["[Up/Down] Choose", "[Enter] Play", "[Esc] Back"],
                app.theme,
            );
        }
        GameState::Playing | GameState::Paused => {
            let info = format!(
                "Score {} | Level {} | Words {} | Accuracy {}% | {}s",
                game.score(),
                game.level(),
                game.words_completed(),
                game.accuracy(),
                game.time_left()
            );
            render_header(frame, app_layout.header, game.mode().title(), &info, app.theme);

            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
                .split(app_layout.main);
            frame.render_widget(
                TypingArea::new(game.session(), app.theme).title("Type this word"),
                main[0],
            );
            frame.render_widget(
                ProgressBar::new("Time", game.timer().remaining_ratio(), app.theme)
                    .caption(format!("{}s", game.time_left())),
                main[1],
            );

            if let Some(sidebar) = app_layout.sidebar {
                let stats = vec![
                    Stat::new("Score", game.score().to_string(), Tone::Accent),
                    Stat::new("Level", game.level().to_string(), Tone::Plain),
                    Stat::new("Words", game.words_completed().to_string(), Tone::Plain),
                    Stat::accuracy(game.accuracy()),
                    Stat::new(
                        "High score",
                        app.high_score().to_string(),
                        Tone::Muted,
                    ),
                ];
                frame.render_widget(MetricsPanel::new("Game", stats, app.theme), sidebar);
            }

            let hints: &[&str] = if game.state() == GameState::Paused {
                &["[Esc/Enter] Resume", "[q] Quit game"]
            } else {
                &["[Type] Play", "[Backspace] Delete", "[Esc] Pause"]
            };
            render_footer(frame, app_layout.footer, hints, app.theme);

            if game.state() == GameState::Paused {
                let popup = Rect {
                    height: 5,
                    ..centered_rect(30, 20, area)
                };
                frame.render_widget(Clear, popup);
                let paused = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Paused",
                        Style::default()
                            .fg(colors.warning())
                            .add_modifier(Modifier::BOLD),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_style(Style::default().fg(colors.accent()))
                        .style(Style::default().bg(colors.bg())),
                );
                frame.render_widget(paused, popup);
            }
        }
        GameState::Ended => {
            render_header(
                frame,
                app_layout.header,
                game.mode().title(),
                "Game over",
                app.theme,
            );
            let popup = centered_rect(40, 60, area);
            let stats = match game.summary() {
                Some(summary) => vec![
                    Stat::new("Final score", summary.score.to_string(), Tone::Accent),
                    Stat::new("Level reached", summary.level.to_string(), Tone::Plain),
                    Stat::new("Words typed", summary.words_completed.to_string(), Tone::Plain),
                    Stat::accuracy(summary.accuracy),
                    Stat::new("High score", app.high_score().to_string(), Tone::Muted),
                ],
                None => Vec::new(),
            };
            let headline = if game.is_new_high_score() {
                "New High Score!"
            } else {
                "Game Over"
            };
            frame.render_widget(Clear, popup);
            frame.render_widget(
                ResultPanel::new(game.mode().title(), stats, app.theme)
                    .headline(headline)
                    .hints(&["[Enter] Play again", "[Up/Down] Game", "[Esc] Games"]),
                popup,
            );
        }
    }
}

fn render_finger_guide(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let guide = &app.finger_guide;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let tabs = GuideTab::ALL
        .iter()
        .map(|t| {
            if *t == guide.tab() {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    render_header(frame, layout[0], "Finger Guide", &tabs, app.theme);

    match guide.tab() {
        GuideTab::Lessons => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(30), Constraint::Min(20)])
                .split(layout[1]);

            let lesson_lines: Vec<Line> = LESSONS
                .iter()
                .enumerate()
                .map(|(i, lesson)| {
                    let selected = i == guide.lesson_index();
                    let marker = if guide.is_practiced(i) { "\u{2713}" } else { " " };
                    let style = if selected {
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors.fg())
                    };
                    Line::from(Span::styled(
                        format!(" {marker} {}. {}", i + 1, lesson.title),
                        style,
                    ))
                })
                .collect();
            let list_block = Block::bordered()
                .title(" Lessons ")
                .border_style(Style::default().fg(colors.border()));
            frame.render_widget(Paragraph::new(lesson_lines).block(list_block), columns[0]);

            let lesson = guide.lesson();
            let detail = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(6)])
                .split(columns[1]);

            let mut lines = vec![
                Line::from(Span::styled(
                    lesson.description,
                    Style::default().fg(colors.fg()),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Focus keys: ", Style::default().fg(colors.muted())),
                    Span::styled(
                        lesson.keys,
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Tips",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(lesson.tips.iter().map(|tip| {
                Line::from(Span::styled(
                    format!("  \u{2022} {tip}"),
                    Style::default().fg(colors.fg()),
                ))
            }));
            let detail_block = Block::bordered()
                .title(format!(" {} ", lesson.title))
                .border_style(Style::default().fg(colors.accent()));
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(detail_block),
                detail[0],
            );

            if guide.is_practicing() || guide.practice().is_complete() {
                frame.render_widget(
                    TypingArea::new(guide.practice(), app.theme).title("Practice this lesson"),
                    detail[1],
                );
            } else {
                let prompt = Paragraph::new(Line::from(Span::styled(
                    format!(" Practice text: {}", lesson.practice),
                    Style::default().fg(colors.text_pending()),
                )))
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title(" Press Enter to practice ")
                        .border_style(Style::default().fg(colors.border())),
                );
                frame.render_widget(prompt, detail[1]);
            }

            let hints: &[&str] = if guide.is_practicing() {
                &["[Type] Practice", "[Backspace] Delete", "[Esc] Stop"]
            } else {
                &["[Up/Down] Lesson", "[Enter] Practice", "[Tab] Next tab", "[Esc] Back"]
            };
            render_footer(frame, layout[2], hints, app.theme);
        }
        GuideTab::Keyboard => {
            let keyboard = KeyboardDiagram::new(app.theme)
                .selected(Some(guide.selected_key()))
                .with_legend();
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(keyboard.content_height() + 2),
                    Constraint::Min(0),
                ])
                .split(layout[1]);
            frame.render_widget(keyboard, parts[0]);

            let finger = guide
                .selected_finger()
                .map(|f| f.label())
                .unwrap_or_else(|| "Unassigned".to_string());
            let info = vec![
                Line::from(vec![
                    Span::styled(" Selected key: ", Style::default().fg(colors.muted())),
                    Span::styled(
                        guide.selected_key().to_ascii_uppercase().to_string(),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(" Finger: ", Style::default().fg(colors.muted())),
                    Span::styled(finger, Style::default().fg(colors.fg())),
                ]),
            ];
            frame.render_widget(Paragraph::new(info), parts[1]);
            render_footer(
                frame,
                layout[2],
                &["[Arrows] Move", "[Key] Jump to key", "[Tab] Next tab", "[Esc] Back"],
                app.theme,
            );
        }
        GuideTab::Posture => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(5)])
                .split(layout[1]);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(parts[0]);

            render_posture_tips(frame, columns[0], "Sitting Posture", SITTING_POSTURE, app.theme);
            render_posture_tips(frame, columns[1], "Hand Position", HAND_POSITION, app.theme);

            let reminder = Paragraph::new(Span::styled(
                PRACTICE_REMINDER,
                Style::default().fg(colors.fg()),
            ))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Practice Reminder ")
                    .border_style(Style::default().fg(colors.warning())),
            );
            frame.render_widget(reminder, parts[1]);
            render_footer(frame, layout[2], &["[Tab] Next tab", "[Esc] Back"], app.theme);
        }
    }
}

fn render_posture_tips(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    tips: &[PostureTip],
    theme: &Theme,
) {
    let colors = &theme.colors;
    let lines: Vec<Line> = tips
        .iter()
        .flat_map(|tip| {
            [
                Line::from(Span::styled(
                    tip.heading,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", tip.detail),
                    Style::default().fg(colors.fg()),
                )),
            ]
        })
        .collect();
    let block = Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, frame.buffer_mut());
}
