//! Round score for the human player

use super::duel::{DuelEvent, Outcome};
use super::Actor;

/// Points for each correct letter the player finds.
pub const POINTS_PER_LETTER: u32 = 1;

/// Points for winning the round.
pub const POINTS_PER_WIN: u32 = 1;

/// Tracks the player's score for one round from duel events.
///
/// The in-memory value is authoritative; the store only mirrors it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Update from one event, returning the points it awarded.
    pub fn observe(&mut self, event: &DuelEvent) -> u32 {
        let points = match event {
            DuelEvent::LetterGuessed {
                actor: Actor::Player,
                correct: true,
                ..
            } => POINTS_PER_LETTER,
            DuelEvent::RoundOver {
                outcome: Outcome::PlayerWin,
                ..
            } => POINTS_PER_WIN,
            _ => 0,
        };
        self.score += points;
        points
    }
}
