//! Playing-screen state

use std::collections::VecDeque;

use crate::game::duel::{BonusEffect, DuelEvent, GuessError, Outcome, Phase};
use crate::game::Actor;
use crate::storage::DuelStore;

use super::session::DuelSession;

/// Longest guess the input line accepts
pub const MAX_INPUT_LEN: usize = 40;

/// Entries kept in the event feed
const FEED_MAX: usize = 8;

/// State for one duel on screen: the session plus input and feedback.
pub struct App {
    pub session: DuelSession,
    /// Current user input
    pub input: String,
    /// Feedback from the last action
    pub feedback: String,
    /// Recent events, oldest first
    pub feed: VecDeque<String>,
}

impl App {
    pub fn new(session: DuelSession) -> Self {
        Self {
            session,
            input: String::new(),
            feedback: String::new(),
            feed: VecDeque::new(),
        }
    }

    pub fn is_round_over(&self) -> bool {
        self.session.machine().is_over()
    }

    pub fn bonus_offered(&self) -> bool {
        self.session.machine().bonus_offered()
    }

    pub fn is_player_turn(&self) -> bool {
        self.session.machine().phase() == Phase::PlayerTurn
    }

    /// Handle character input (locked when the round is over)
    pub fn on_char(&mut self, c: char) {
        if self.is_round_over() || self.input.chars().count() >= MAX_INPUT_LEN {
            return;
        }
        self.input.push(c);
    }

    /// Handle backspace (locked when the round is over)
    pub fn on_backspace(&mut self) {
        if self.is_round_over() {
            return;
        }
        self.input.pop();
    }

    /// Submit the input line as a letter or phrase guess. Input typed while
    /// the bot is moving stays in the line.
    pub fn on_submit(&mut self, store: &mut dyn DuelStore) {
        if self.input.trim().is_empty() {
            return;
        }
        if !self.is_player_turn() {
            self.feedback = GuessError::ActionOutOfTurn.to_string();
            return;
        }
        let input = std::mem::take(&mut self.input);
        let result = self.session.submit(store, &input);
        self.apply(result);
    }

    pub fn on_bonus(&mut self, store: &mut dyn DuelStore, effect: BonusEffect) {
        let result = self.session.choose_bonus(store, effect);
        self.apply(result);
    }

    /// Let the bot move if it is its turn. Returns true if it did.
    pub fn tick(&mut self, store: &mut dyn DuelStore) -> bool {
        if self.session.machine().phase() != Phase::BotTurn {
            return false;
        }
        let result = self.session.play_bot_turn(store);
        self.apply(result);
        true
    }

    fn apply(&mut self, result: Result<Vec<DuelEvent>, GuessError>) {
        match result {
            Ok(events) => {
                if let Some(last) = events.last() {
                    self.feedback = describe(last);
                }
                for event in &events {
                    self.push_feed(describe(event));
                }
            }
            Err(e) => {
                self.feedback = e.to_string();
            }
        }
    }

    fn push_feed(&mut self, line: String) {
        self.feed.push_back(line);
        while self.feed.len() > FEED_MAX {
            self.feed.pop_front();
        }
    }
}

/// One-line description of an event. Bot letters stay hidden.
pub fn describe(event: &DuelEvent) -> String {
    match event {
        DuelEvent::LetterGuessed {
            actor: Actor::Player,
            letter,
            correct: true,
        } => format!("Yes! {} is in the phrase", letter),
        DuelEvent::LetterGuessed {
            actor: Actor::Player,
            letter,
            correct: false,
        } => format!("No {}", letter),
        DuelEvent::LetterGuessed {
            actor: Actor::Bot,
            correct,
            ..
        } => {
            if *correct {
                "Bot found a letter".to_string()
            } else {
                "Bot missed".to_string()
            }
        }
        DuelEvent::PhraseGuessed { actor: Actor::Player, correct } => {
            if *correct {
                "You solved it!".to_string()
            } else {
                "Wrong phrase, that costs extra".to_string()
            }
        }
        DuelEvent::PhraseGuessed { actor: Actor::Bot, correct } => {
            if *correct {
                "Bot called the phrase".to_string()
            } else {
                "Bot called the wrong phrase".to_string()
            }
        }
        DuelEvent::BonusOffered => {
            "Streak bonus! 1 = take a part back, 2 = add a part to the bot".to_string()
        }
        DuelEvent::BonusApplied(BonusEffect::Take) => "Bonus: you took a part back".to_string(),
        DuelEvent::BonusApplied(BonusEffect::Add) => "Bonus: the bot lost a part".to_string(),
        DuelEvent::TurnPassed { to: Actor::Player } => "Your turn".to_string(),
        DuelEvent::TurnPassed { to: Actor::Bot } => "Bot's turn".to_string(),
        DuelEvent::RoundOver { outcome, phrase } => match outcome {
            Outcome::Draw => format!("Draw. The phrase was {}", phrase),
            _ => format!("{} The phrase was {}", outcome.label(), phrase),
        },
    }
}
