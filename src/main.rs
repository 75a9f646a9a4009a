//! GALLOWS - terminal hangman duel against a bot
//!
//! Guess the phrase before the bot does. Don't hang.

mod app;
mod config;
mod game;
mod storage;
mod tui;

use app::{AppCoordinator, Screen};
use config::DuelConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use storage::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tui::Tui;

/// How often the bot gets a chance to move
const TICK_RATE: Duration = Duration::from_millis(700);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = DuelConfig::from_env();
    let storage = match &config.db_path {
        Some(path) => Storage::open_at(path)?,
        None => Storage::open()?,
    };
    let mut coordinator = AppCoordinator::new(Box::new(storage), config);

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut coordinator, key);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            coordinator.tick();
            last_tick = Instant::now();
        }

        if coordinator.should_quit {
            break;
        }
    }

    terminal.exit()?;
    tracing::info!("exiting");
    Ok(())
}

fn handle_key(coordinator: &mut AppCoordinator, key: KeyEvent) {
    let editing_handle = coordinator.is_editing_handle();
    match coordinator.screen {
        Screen::Menu { .. } if editing_handle => match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::Esc => coordinator.menu_tab(),
            KeyCode::Backspace => coordinator.menu_backspace(),
            KeyCode::Char(c) if !c.is_control() => coordinator.menu_char(c),
            _ => {}
        },
        Screen::Menu { .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => coordinator.quit(),
            KeyCode::Up => coordinator.menu_up(),
            KeyCode::Down => coordinator.menu_down(),
            KeyCode::Left => coordinator.cycle_difficulty(false),
            KeyCode::Right => coordinator.cycle_difficulty(true),
            KeyCode::Tab => coordinator.menu_tab(),
            KeyCode::Enter => coordinator.menu_select(),
            _ => {}
        },
        Screen::Playing { .. } => match key.code {
            KeyCode::Esc => coordinator.go_to_menu(),
            KeyCode::Enter => coordinator.play_submit(),
            KeyCode::Backspace => coordinator.play_backspace(),
            KeyCode::Char(c) if !c.is_control() => coordinator.play_char(c),
            _ => {}
        },
        Screen::Leaderboard { .. } => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => coordinator.go_to_menu(),
            KeyCode::Left => coordinator.cycle_difficulty(false),
            KeyCode::Right => coordinator.cycle_difficulty(true),
            _ => {}
        },
    }
}

/// Log to `gallows.log` in the data directory. The terminal belongs to the
/// UI, so logging is skipped if the file cannot be opened.
fn init_logging() {
    let Ok(dir) = Storage::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("gallows.log"))
    else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallows=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}
