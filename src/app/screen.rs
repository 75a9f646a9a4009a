//! Application screen state management
//!
//! Handles transitions between the application screens:
//! - Main menu (handle entry, difficulty)
//! - Playing a duel
//! - Leaderboard per difficulty

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{clean_player_name, DuelConfig, MAX_PLAYER_NAME};
use crate::game::duel::BonusEffect;
use crate::game::Difficulty;
use crate::storage::{DuelStore, LeaderboardEntry};

use super::session::DuelSession;
use super::state::App;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartDuel,
    Difficulty,
    Leaderboard,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::StartDuel,
            MenuOption::Difficulty,
            MenuOption::Leaderboard,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::StartDuel => "Start Duel",
            MenuOption::Difficulty => "Difficulty",
            MenuOption::Leaderboard => "Leaderboard",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu {
        selected: usize,
        handle_input: String,
        editing_handle: bool,
    },
    /// Playing a duel
    Playing { app: App },
    /// Top scores for one difficulty
    Leaderboard {
        difficulty: Difficulty,
        entries: Vec<LeaderboardEntry>,
        error: Option<String>,
    },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Player handle used for new duels
    pub handle: String,
    /// Difficulty used for new duels
    pub difficulty: Difficulty,
    /// Whether the application should quit
    pub should_quit: bool,
    store: Box<dyn DuelStore>,
    config: DuelConfig,
}

impl AppCoordinator {
    /// Create a new app coordinator starting at the menu
    pub fn new(store: Box<dyn DuelStore>, config: DuelConfig) -> Self {
        let handle = config.player_name.clone();
        Self {
            screen: Screen::Menu {
                selected: 0,
                handle_input: handle.clone(),
                editing_handle: false,
            },
            handle,
            difficulty: config.difficulty,
            should_quit: false,
            store,
            config,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu
    pub fn go_to_menu(&mut self) {
        if let Screen::Playing { app } = &self.screen {
            if !app.is_round_over() {
                tracing::info!(round = ?app.session.round_id(), "duel abandoned");
            }
        }
        self.screen = Screen::Menu {
            selected: 0,
            handle_input: self.handle.clone(),
            editing_handle: false,
        };
    }

    /// Whether typed characters currently go to the handle field
    pub fn is_editing_handle(&self) -> bool {
        matches!(self.screen, Screen::Menu { editing_handle: true, .. })
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Menu { selected, editing_handle, .. } = &mut self.screen {
            if !*editing_handle && *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Menu { selected, editing_handle, .. } = &mut self.screen {
            if !*editing_handle && *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu character input (for handle editing)
    pub fn menu_char(&mut self, c: char) {
        if let Screen::Menu { handle_input, editing_handle, .. } = &mut self.screen {
            if *editing_handle && handle_input.chars().count() < MAX_PLAYER_NAME {
                handle_input.push(c);
            }
        }
    }

    /// Handle menu backspace (for handle editing)
    pub fn menu_backspace(&mut self) {
        if let Screen::Menu { handle_input, editing_handle, .. } = &mut self.screen {
            if *editing_handle {
                handle_input.pop();
            }
        }
    }

    /// Handle Tab key to toggle handle editing
    pub fn menu_tab(&mut self) {
        if let Screen::Menu { handle_input, editing_handle, .. } = &mut self.screen {
            if *editing_handle {
                match clean_player_name(handle_input) {
                    Some(name) => self.handle = name,
                    // Restore previous handle if empty or reserved
                    None => *handle_input = self.handle.clone(),
                }
            }
            *editing_handle = !*editing_handle;
        }
    }

    /// Cycle the difficulty (Left/Right on the menu or leaderboard)
    pub fn cycle_difficulty(&mut self, forward: bool) {
        let all = Difficulty::all();
        let current = self.difficulty.index();
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.difficulty = all[next];

        if matches!(self.screen, Screen::Leaderboard { .. }) {
            self.show_leaderboard();
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let (selected, editing_handle) = match &self.screen {
            Screen::Menu { selected, editing_handle, .. } => (*selected, *editing_handle),
            _ => return,
        };
        if editing_handle {
            // Just finish editing
            self.menu_tab();
            return;
        }

        match MenuOption::all()[selected] {
            MenuOption::StartDuel => self.start_duel(),
            MenuOption::Difficulty => self.cycle_difficulty(true),
            MenuOption::Leaderboard => self.show_leaderboard(),
            MenuOption::Quit => self.should_quit = true,
        }
    }

    /// Start a fresh duel with the current handle and difficulty
    pub fn start_duel(&mut self) {
        let session = DuelSession::start(
            self.store.as_mut(),
            &self.config,
            &self.handle,
            self.difficulty,
            StdRng::from_os_rng(),
        );
        self.screen = Screen::Playing { app: App::new(session) };
    }

    /// Load the leaderboard for the current difficulty
    pub fn show_leaderboard(&mut self) {
        let (entries, error) = match self.store.get_leaderboard(self.difficulty) {
            Ok(entries) => (entries, None),
            Err(e) => {
                tracing::warn!(error = %e, "could not load leaderboard");
                (Vec::new(), Some(e.to_string()))
            }
        };
        self.screen = Screen::Leaderboard {
            difficulty: self.difficulty,
            entries,
            error,
        };
    }

    /// Playing: typed character
    pub fn play_char(&mut self, c: char) {
        if let Screen::Playing { app } = &mut self.screen {
            if app.bonus_offered() {
                match c {
                    '1' => app.on_bonus(self.store.as_mut(), BonusEffect::Take),
                    '2' => app.on_bonus(self.store.as_mut(), BonusEffect::Add),
                    _ => {}
                }
                return;
            }
            app.on_char(c);
        }
    }

    /// Playing: backspace
    pub fn play_backspace(&mut self) {
        if let Screen::Playing { app } = &mut self.screen {
            app.on_backspace();
        }
    }

    /// Playing: Enter submits a guess, or starts the next duel once over
    pub fn play_submit(&mut self) {
        let over = match &mut self.screen {
            Screen::Playing { app } if !app.is_round_over() => {
                app.on_submit(self.store.as_mut());
                false
            }
            Screen::Playing { .. } => true,
            _ => false,
        };
        if over {
            self.start_duel();
        }
    }

    /// Called on every timer tick
    pub fn tick(&mut self) {
        if let Screen::Playing { app } = &mut self.screen {
            app.tick(self.store.as_mut());
        }
    }
}
