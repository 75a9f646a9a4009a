//! Bot opponent decision policy
//!
//! One policy covers every difficulty tier; the tiers only differ by the
//! numbers in [`TIERS`].

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::letter_pool::{Band, LetterPool, ENGLISH};
use super::{Difficulty, GuessedSet, Phrase};

/// Lower clamp for the known-letter probability.
const KNOWN_LETTER_MIN: f64 = 0.05;

/// Upper clamp for the known-letter probability.
const KNOWN_LETTER_MAX: f64 = 0.90;

/// Ceiling on the chance of calling the whole phrase.
const PHRASE_CALL_MAX: f64 = 0.60;

/// Name the bot is registered under. Players cannot take it.
pub const BOT_NAME: &str = "Bot";

/// Tier-specific tuning numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    /// Probability mass of drawing from the top band.
    pub top_mass: f64,
    /// Cumulative mass of top + mid; the low band gets the rest.
    pub mid_mass: f64,
    /// Base chance of picking a letter known to be in the phrase.
    pub known_letter_base: f64,
    /// Share of the phrase's letters the bot must have found before it will
    /// consider calling the phrase.
    pub phrase_need_ratio: f64,
    /// Base chance of calling the phrase once the ratio is met.
    pub phrase_base: f64,
}

impl TierThresholds {
    /// Map a uniform draw in `[0, 1)` to a band.
    pub fn band_for(&self, draw: f64) -> Band {
        if draw < self.top_mass {
            Band::Top
        } else if draw < self.mid_mass {
            Band::Mid
        } else {
            Band::Low
        }
    }
}

/// Tuning table indexed by [`Difficulty::index`].
pub const TIERS: [TierThresholds; 3] = [
    // Easy
    TierThresholds {
        top_mass: 0.15,
        mid_mass: 0.50,
        known_letter_base: 0.35,
        phrase_need_ratio: 0.65,
        phrase_base: 0.12,
    },
    // Medium
    TierThresholds {
        top_mass: 0.55,
        mid_mass: 0.90,
        known_letter_base: 0.50,
        phrase_need_ratio: 0.55,
        phrase_base: 0.18,
    },
    // Hard
    TierThresholds {
        top_mass: 0.85,
        mid_mass: 0.97,
        known_letter_base: 0.65,
        phrase_need_ratio: 0.45,
        phrase_base: 0.25,
    },
];

/// What the bot wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    /// Guess a single letter.
    GuessLetter(char),
    /// Call the whole phrase.
    GuessPhrase,
    /// Nothing useful left to try; hand the turn back.
    Pass,
}

/// The slice of round state the bot gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct BotView<'a> {
    pub phrase: &'a Phrase,
    pub guessed: &'a GuessedSet,
    /// Body parts the bot can still lose.
    pub parts_remaining: u32,
}

/// Bot decision capability. The duel asks for one action at a time.
pub trait BotStrategy: Send {
    fn next_action(&self, view: &BotView<'_>, rng: &mut StdRng) -> BotAction;
}

/// Difficulty-tiered bot policy.
#[derive(Debug, Clone)]
pub struct BotPolicy {
    difficulty: Difficulty,
    pool: LetterPool,
}

impl BotPolicy {
    /// Policy over the English A-Z pool.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_pool(difficulty, ENGLISH.clone())
    }

    pub fn with_pool(difficulty: Difficulty, pool: LetterPool) -> Self {
        BotPolicy { difficulty, pool }
    }

    pub fn tier(&self) -> &'static TierThresholds {
        &TIERS[self.difficulty.index()]
    }

    /// The bot always takes its turn.
    pub fn should_act(&self) -> bool {
        true
    }

    /// Pick a band by tier mass, then a uniform letter from it. Empty bands
    /// fall through to their neighbours. `None` once every letter is used.
    pub fn choose_letter<R: Rng + ?Sized>(&self, guessed: &GuessedSet, rng: &mut R) -> Option<char> {
        let bands = self.pool.bands(guessed);
        let band = self.tier().band_for(rng.random::<f64>());
        bands
            .resolve(band)
            .and_then(|letters| letters.choose(rng).copied())
    }

    /// Probability of going straight for a letter known to be in the phrase.
    ///
    /// Grows as the bot runs out of body parts and is clamped to
    /// `[0.05, 0.90]`.
    pub fn bias_toward_known_letters(&self, parts_remaining: u32) -> f64 {
        let p = self.tier().known_letter_base + pressure_bonus(parts_remaining, 0.20, 0.10);
        p.clamp(KNOWN_LETTER_MIN, KNOWN_LETTER_MAX)
    }

    /// Letter choice used in the duel: a known letter with probability
    /// [`Self::bias_toward_known_letters`], otherwise [`Self::choose_letter`].
    pub fn pick_letter<R: Rng + ?Sized>(
        &self,
        phrase: &Phrase,
        guessed: &GuessedSet,
        parts_remaining: u32,
        rng: &mut R,
    ) -> Option<char> {
        let p = self.bias_toward_known_letters(parts_remaining);
        if rng.random_bool(p) {
            let known: Vec<char> = phrase
                .letters()
                .iter()
                .filter(|c| !guessed.contains(c))
                .copied()
                .collect();
            if let Some(&letter) = known.choose(rng) {
                return Some(letter);
            }
        }
        self.choose_letter(guessed, rng)
    }

    /// Chance of calling the phrase once the found-letter ratio is met.
    pub fn phrase_call_probability(&self, parts_remaining: u32) -> f64 {
        (self.tier().phrase_base + pressure_bonus(parts_remaining, 0.25, 0.15)).min(PHRASE_CALL_MAX)
    }

    /// Share of the phrase's distinct letters found in `guessed`. `None` for
    /// a phrase without letters.
    pub fn found_ratio(phrase: &Phrase, guessed: &GuessedSet) -> Option<f64> {
        let total = phrase.unique_letter_count();
        if total == 0 {
            return None;
        }
        Some(phrase.found_count(guessed) as f64 / total as f64)
    }

    /// Whether to gamble on calling the whole phrase now.
    pub fn should_guess_phrase<R: Rng + ?Sized>(
        &self,
        phrase: &Phrase,
        guessed: &GuessedSet,
        parts_remaining: u32,
        rng: &mut R,
    ) -> bool {
        let Some(ratio) = Self::found_ratio(phrase, guessed) else {
            return false;
        };
        if ratio < self.tier().phrase_need_ratio {
            return false;
        }
        rng.random_bool(self.phrase_call_probability(parts_remaining))
    }
}

impl BotStrategy for BotPolicy {
    fn next_action(&self, view: &BotView<'_>, rng: &mut StdRng) -> BotAction {
        if !self.should_act() {
            return BotAction::Pass;
        }

        if self.should_guess_phrase(view.phrase, view.guessed, view.parts_remaining, rng) {
            tracing::debug!(difficulty = %self.difficulty, "bot calls the phrase");
            return BotAction::GuessPhrase;
        }

        match self.pick_letter(view.phrase, view.guessed, view.parts_remaining, rng) {
            Some(letter) => BotAction::GuessLetter(letter),
            None => BotAction::Pass,
        }
    }
}

/// Extra probability when few body parts remain.
fn pressure_bonus(parts_remaining: u32, at_two: f64, at_three: f64) -> f64 {
    if parts_remaining <= 2 {
        at_two
    } else if parts_remaining <= 3 {
        at_three
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::letter_pool::ALPHABET;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_tiers_are_monotonic_in_difficulty() {
        for pair in TIERS.windows(2) {
            let (easier, harder) = (&pair[0], &pair[1]);
            assert!(harder.top_mass > easier.top_mass);
            assert!(harder.known_letter_base > easier.known_letter_base);
            assert!(harder.phrase_need_ratio < easier.phrase_need_ratio);
            assert!(harder.phrase_base > easier.phrase_base);
        }
        for tier in &TIERS {
            assert!(tier.top_mass < tier.mid_mass && tier.mid_mass < 1.0);
        }
    }

    #[test]
    fn test_band_for_draws() {
        let hard = &TIERS[Difficulty::Hard.index()];
        assert_eq!(hard.band_for(0.0), Band::Top);
        assert_eq!(hard.band_for(0.90), Band::Mid);
        assert_eq!(hard.band_for(0.99), Band::Low);
    }

    #[test]
    fn test_choose_letter_never_repeats() {
        let bot = BotPolicy::new(Difficulty::Medium);
        let mut rng = rng(7);
        let mut guessed = GuessedSet::new();
        for _ in 0..26 {
            let letter = bot.choose_letter(&guessed, &mut rng).expect("letters remain");
            assert!(guessed.insert(letter), "{} chosen twice", letter);
        }
        assert_eq!(bot.choose_letter(&guessed, &mut rng), None);
        assert_eq!(guessed.len(), ALPHABET.len());
    }

    #[test]
    fn test_hard_bot_prefers_common_letters() {
        let top: Vec<char> = ENGLISH.bands(&GuessedSet::new()).top;
        let mut hits = [0usize; 3];
        for (i, difficulty) in Difficulty::all().iter().enumerate() {
            let bot = BotPolicy::new(*difficulty);
            let mut rng = rng(11);
            for _ in 0..2000 {
                let letter = bot.choose_letter(&GuessedSet::new(), &mut rng).unwrap();
                if top.contains(&letter) {
                    hits[i] += 1;
                }
            }
        }
        // easy ~15%, medium ~55%, hard ~85%
        assert!(hits[0] < 500, "easy top hits {}", hits[0]);
        assert!(hits[1] > 900 && hits[1] < 1300, "medium top hits {}", hits[1]);
        assert!(hits[2] > 1550, "hard top hits {}", hits[2]);
    }

    #[test]
    fn test_choose_letter_with_one_letter_left() {
        let bot = BotPolicy::new(Difficulty::Easy);
        let guessed: GuessedSet = ALPHABET.chars().filter(|c| *c != 'Q').collect();
        let mut rng = rng(3);
        for _ in 0..20 {
            assert_eq!(bot.choose_letter(&guessed, &mut rng), Some('Q'));
        }
    }

    #[test]
    fn test_known_letter_bias_by_tier() {
        assert!(close(BotPolicy::new(Difficulty::Hard).bias_toward_known_letters(6), 0.65));
        assert!(close(BotPolicy::new(Difficulty::Medium).bias_toward_known_letters(6), 0.50));
        assert!(close(BotPolicy::new(Difficulty::Easy).bias_toward_known_letters(6), 0.35));
    }

    #[test]
    fn test_known_letter_bias_grows_under_pressure() {
        let hard = BotPolicy::new(Difficulty::Hard);
        assert!(close(hard.bias_toward_known_letters(4), 0.65));
        assert!(close(hard.bias_toward_known_letters(3), 0.75));
        assert!(close(hard.bias_toward_known_letters(2), 0.85));
        assert!(close(hard.bias_toward_known_letters(0), 0.85));

        let easy = BotPolicy::new(Difficulty::Easy);
        assert!(close(easy.bias_toward_known_letters(1), 0.55));
    }

    #[test]
    fn test_hard_bot_mostly_picks_known_letters() {
        let bot = BotPolicy::new(Difficulty::Hard);
        let phrase = Phrase::new("TEA");
        let guessed = GuessedSet::new();
        let mut rng = rng(42);

        let known = (0..1000)
            .filter_map(|_| bot.pick_letter(&phrase, &guessed, 6, &mut rng))
            .filter(|c| phrase.contains(*c))
            .count();
        assert!(known > 500, "known letters picked {} / 1000", known);
    }

    #[test]
    fn test_pick_letter_on_degenerate_phrase_uses_alphabet() {
        let bot = BotPolicy::new(Difficulty::Hard);
        let phrase = Phrase::new("?!");
        let mut rng = rng(5);
        let letter = bot.pick_letter(&phrase, &GuessedSet::new(), 6, &mut rng);
        assert!(letter.is_some_and(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_phrase_call_probability() {
        let hard = BotPolicy::new(Difficulty::Hard);
        assert!(close(hard.phrase_call_probability(6), 0.25));
        assert!(close(hard.phrase_call_probability(3), 0.40));
        assert!(close(hard.phrase_call_probability(2), 0.50));

        let easy = BotPolicy::new(Difficulty::Easy);
        assert!(close(easy.phrase_call_probability(1), 0.37));
        for parts in 0..=6 {
            for difficulty in Difficulty::all() {
                assert!(BotPolicy::new(*difficulty).phrase_call_probability(parts) <= PHRASE_CALL_MAX);
            }
        }
    }

    #[test]
    fn test_should_guess_phrase_requires_ratio() {
        let bot = BotPolicy::new(Difficulty::Hard);
        let phrase = Phrase::new("ABCDEFGHIJ");
        let guessed: GuessedSet = "ABCD".chars().collect(); // 0.40 < 0.45
        let mut rng = rng(9);
        for _ in 0..200 {
            assert!(!bot.should_guess_phrase(&phrase, &guessed, 1, &mut rng));
        }
    }

    #[test]
    fn test_should_guess_phrase_fires_sometimes_when_ratio_met() {
        let bot = BotPolicy::new(Difficulty::Hard);
        let phrase = Phrase::new("ABCDEFGHIJ");
        let guessed: GuessedSet = "ABCDE".chars().collect(); // 0.50 >= 0.45
        let mut rng = rng(9);
        let calls = (0..1000)
            .filter(|_| bot.should_guess_phrase(&phrase, &guessed, 2, &mut rng))
            .count();
        // p = 0.50
        assert!(calls > 400 && calls < 600, "calls {}", calls);
    }

    #[test]
    fn test_should_guess_phrase_false_for_degenerate_phrase() {
        let bot = BotPolicy::new(Difficulty::Hard);
        let phrase = Phrase::new("...");
        let mut rng = rng(1);
        assert_eq!(BotPolicy::found_ratio(&phrase, &GuessedSet::new()), None);
        for _ in 0..100 {
            assert!(!bot.should_guess_phrase(&phrase, &GuessedSet::new(), 0, &mut rng));
        }
    }

    #[test]
    fn test_next_action_passes_when_nothing_left() {
        let bot = BotPolicy::new(Difficulty::Medium);
        let phrase = Phrase::new("ZZZ");
        // Every letter tried except the phrase's own, which is already found
        let guessed: GuessedSet = ALPHABET.chars().collect();
        let view = BotView {
            phrase: &phrase,
            guessed: &guessed,
            parts_remaining: 6,
        };
        let mut rng = rng(2);
        // Ratio is 1.0, so the bot may call the phrase; otherwise it passes.
        for _ in 0..50 {
            let action = bot.next_action(&view, &mut rng);
            assert!(matches!(action, BotAction::Pass | BotAction::GuessPhrase));
        }
    }
}
