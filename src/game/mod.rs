//! Game logic: phrases, difficulty tiers, the bot opponent and the duel

pub mod bot;
pub mod duel;
pub mod letter_pool;
pub mod score;
pub mod validation;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Letters guessed by one actor. Ordered so seeded sampling stays reproducible.
pub type GuessedSet = BTreeSet<char>;

/// Placeholder shown for a letter the viewer has not found yet.
pub const MASK: char = '_';

/// Marker shown on the bot progress line for positions the bot has found.
pub const BOT_MARK: char = '*';

/// Bot difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Lowercase name used in storage and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Display label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Position in [`Difficulty::all`], used to index tier tables.
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// One of the two duel participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Bot,
}

impl Actor {
    /// The other participant.
    pub fn opponent(&self) -> Actor {
        match self {
            Actor::Player => Actor::Bot,
            Actor::Bot => Actor::Player,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Actor::Player => "You",
            Actor::Bot => "Bot",
        }
    }
}

/// Returns true for characters that can be guessed (A-Z, either case).
/// Everything else in a phrase is a separator and is always shown.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The secret phrase for a round.
///
/// Stored uppercase so every comparison is case-insensitive. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    letters: BTreeSet<char>,
}

impl Phrase {
    /// Build a phrase from raw text. Surrounding whitespace is dropped.
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_ascii_uppercase();
        let letters = text.chars().filter(|c| is_letter(*c)).collect();
        Phrase { text, letters }
    }

    /// The full uppercase text, separators included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters appearing in the phrase.
    pub fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }

    /// Number of distinct letters. Zero for a symbol-only phrase.
    pub fn unique_letter_count(&self) -> usize {
        self.letters.len()
    }

    /// True when the phrase has no guessable letters at all.
    pub fn is_degenerate(&self) -> bool {
        self.letters.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Whether every letter position is covered by `guessed`.
    pub fn is_revealed_by(&self, guessed: &GuessedSet) -> bool {
        self.letters.iter().all(|c| guessed.contains(c))
    }

    /// Letters of the phrase that `guessed` has already found.
    pub fn found_count(&self, guessed: &GuessedSet) -> usize {
        self.letters.iter().filter(|c| guessed.contains(c)).count()
    }

    /// The phrase with unguessed letters masked and separators kept.
    pub fn reveal(&self, guessed: &GuessedSet) -> String {
        self.text
            .chars()
            .map(|c| {
                if !is_letter(c) || guessed.contains(&c) {
                    c
                } else {
                    MASK
                }
            })
            .collect()
    }

    /// Opponent view of the bot's progress: found positions show
    /// [`BOT_MARK`], never the letter itself.
    pub fn progress_marks(&self, guessed: &GuessedSet) -> String {
        self.text
            .chars()
            .map(|c| {
                if !is_letter(c) {
                    c
                } else if guessed.contains(&c) {
                    BOT_MARK
                } else {
                    MASK
                }
            })
            .collect()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Space out a display string so each position reads as its own cell.
pub fn spaced(display: &str) -> String {
    display
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
