//! UI rendering using ratatui
//!
//! Screens:
//! - Menu: handle, difficulty and options
//! - Playing: both gallows, the phrase, input and event feed
//! - Leaderboard: top players for one difficulty

use crate::app::{App, AppCoordinator, MenuOption, Screen};
use crate::game::duel::Outcome;
use crate::game::{spaced, Actor, Difficulty};
use crate::storage::LeaderboardEntry;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const GALLOWS_STAGES: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu {
            selected,
            handle_input,
            editing_handle,
        } => {
            render_menu(
                frame,
                *selected,
                &coordinator.handle,
                handle_input,
                *editing_handle,
                coordinator.difficulty,
            );
        }
        Screen::Playing { app } => {
            render_game(frame, app);
        }
        Screen::Leaderboard {
            difficulty,
            entries,
            error,
        } => {
            render_leaderboard(frame, *difficulty, entries, error.as_deref());
        }
    }
}

/// Render the main menu
fn render_menu(
    frame: &mut Frame,
    selected: usize,
    handle: &str,
    handle_input: &str,
    editing_handle: bool,
    difficulty: Difficulty,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(3), // Handle input
            Constraint::Length(1), // Spacer
            Constraint::Min(6),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
  ____    _    _     _     _____        ______
 / ___|  / \  | |   | |   / _ \ \      / / ___|
| |  _  / _ \ | |   | |  | | | \ \ /\ / /\___ \
| |_| |/ ___ \| |___| |__| |_| |\ V  V /  ___) |
 \____/_/   \_\_____|_____\___/  \_/\_/  |____/
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let handle_display = if editing_handle {
        format!("Name: [{}]_", handle_input)
    } else {
        format!("Name: {} (Tab to edit)", handle)
    };
    let handle_style = if editing_handle {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let handle_widget = Paragraph::new(handle_display)
        .style(handle_style)
        .alignment(Alignment::Center);
    frame.render_widget(handle_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            let label = match opt {
                MenuOption::Difficulty => format!("{}: < {} >", opt.label(), difficulty.label()),
                _ => opt.label().to_string(),
            };
            ListItem::new(format!("{}{}", prefix, label)).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  ←→ Difficulty  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the playing screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(12), // Both sides
            Constraint::Min(6),     // Input and feed
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);

    let sides = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);
    render_side(frame, sides[0], app, Actor::Player);
    render_side(frame, sides[1], app, Actor::Bot);

    render_input_area(frame, layout[2], app);

    let hint = if app.is_round_over() {
        "Enter Play again  Esc Menu"
    } else if app.bonus_offered() {
        "1 Take a part back  2 Add a part to the bot  Esc Menu"
    } else {
        "Type a letter or the whole phrase, Enter to guess  Esc Menu"
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the header: title, category and difficulty, score
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(12),
        ])
        .split(inner);

    let title = Paragraph::new("GALLOWS")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let session = &app.session;
    let info = Paragraph::new(format!(
        "{} vs Bot  |  {}  |  {}",
        session.player_name(),
        session.category(),
        session.difficulty().label()
    ))
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center);
    frame.render_widget(info, header_layout[1]);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score, header_layout[2]);
}

/// Render one participant: gallows, phrase view and parts left
fn render_side(frame: &mut Frame, area: Rect, app: &App, actor: Actor) {
    let machine = app.session.machine();
    let state = machine.state();
    let side = state.side(actor);

    let active = !machine.is_over() && machine.turn() == actor;
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if active {
        format!(" {} (to move) ", actor.label())
    } else {
        format!(" {} ", actor.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Gallows
            Constraint::Length(1), // Phrase view
            Constraint::Length(1), // Parts / guessed
        ])
        .split(inner);

    let stage = gallows_stage(side.wrong_count, state.max_mistakes);
    let gallows = Paragraph::new(GALLOWS_STAGES[stage])
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(gallows, rows[0]);

    let view = match actor {
        Actor::Player if machine.is_over() => machine.phrase().text().to_string(),
        Actor::Player => machine.player_display(),
        Actor::Bot => machine.bot_progress(),
    };
    let phrase = Paragraph::new(spaced(&view))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(phrase, rows[1]);

    let status = match actor {
        Actor::Player => format!(
            "Parts left: {}  Guessed: {}",
            machine.parts_remaining(actor),
            side.guessed.iter().collect::<String>()
        ),
        Actor::Bot => format!(
            "Parts left: {}  Guesses: {}",
            machine.parts_remaining(actor),
            side.guessed.len()
        ),
    };
    let status_widget = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(status_widget, rows[2]);
}

/// Render the input line, feedback and event feed
fn render_input_area(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(44)])
        .split(area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Feedback line
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let input_display = if app.is_player_turn() {
        format!("> {}_", app.input)
    } else if app.is_round_over() {
        String::new()
    } else {
        "Bot is thinking...".to_string()
    };
    let input = Paragraph::new(input_display).style(Style::default().fg(Color::White));
    frame.render_widget(input, main_layout[0]);

    let (feedback, color) = format_feedback(app);
    let feedback_widget = Paragraph::new(feedback).style(Style::default().fg(color).bold());
    frame.render_widget(feedback_widget, main_layout[2]);

    let items: Vec<ListItem> = app
        .feed
        .iter()
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(Color::Gray)))
        .collect();
    let feed = List::new(items).block(Block::default().borders(Borders::ALL).title("Events"));
    frame.render_widget(feed, columns[1]);
}

/// Render the leaderboard
fn render_leaderboard(frame: &mut Frame, difficulty: Difficulty, entries: &[LeaderboardEntry], error: Option<&str>) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Table
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new(format!("Leaderboard  < {} >", difficulty.label()))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    if let Some(message) = error {
        let error = Paragraph::new(format!("Error: {}", message))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, layout[1]);
    } else if entries.is_empty() {
        let empty = Paragraph::new("No games played at this difficulty yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout[1]);
    } else {
        let mut items = vec![ListItem::new(format!(
            "{:>4}  {:<12}  {:>6}  {:>6}",
            "#", "Player", "Score", "Games"
        ))
        .style(Style::default().fg(Color::DarkGray))];
        items.extend(entries.iter().enumerate().map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{:>4}  {:<12}  {:>6}  {:>6}",
                i + 1,
                entry.player_name,
                entry.total_score,
                entry.games_played
            ))
            .style(style)
        }));
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Top 10"));
        frame.render_widget(list, layout[1]);
    }

    let footer = Paragraph::new("←→ Difficulty  Esc Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Which drawing to show for `wrong` mistakes out of `max`.
fn gallows_stage(wrong: u32, max: u32) -> usize {
    let last = GALLOWS_STAGES.len() - 1;
    if max == 0 {
        return last;
    }
    let stage = (wrong as usize * last).div_ceil(max as usize);
    stage.min(last)
}

/// Color the feedback line by what it says
fn format_feedback(app: &App) -> (String, Color) {
    let text = app.feedback.clone();
    let color = if app.is_round_over() {
        match app.session.machine().outcome() {
            Outcome::PlayerWin => Color::Green,
            Outcome::BotWin => Color::Red,
            _ => Color::Yellow,
        }
    } else if app.bonus_offered() {
        Color::Magenta
    } else if text.starts_with("Yes") || text.starts_with("Bonus") {
        Color::Green
    } else {
        Color::Yellow
    };
    (text, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallows_stage_scales_to_max() {
        assert_eq!(gallows_stage(0, 6), 0);
        assert_eq!(gallows_stage(3, 6), 3);
        assert_eq!(gallows_stage(6, 6), 6);
        assert_eq!(gallows_stage(1, 3), 2);
        assert_eq!(gallows_stage(3, 3), 6);
        assert_eq!(gallows_stage(1, 12), 1);
        assert_eq!(gallows_stage(9, 6), 6);
    }

    #[test]
    fn test_every_stage_has_same_height() {
        for stage in GALLOWS_STAGES {
            assert_eq!(stage.lines().count(), 7);
        }
    }
}
