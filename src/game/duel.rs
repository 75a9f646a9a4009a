//! Duel turn state machine
//!
//! Owns a round's state and is the only thing that mutates it. Every
//! operation either rejects with a [`GuessError`] and leaves the state
//! untouched, or applies and returns the [`DuelEvent`]s it produced so
//! callers can persist and display them.
//!
//! Turn rules:
//! - An actor keeps the turn while guessing correctly.
//! - After `miss_streak` consecutive misses (the bot uses `bot_miss_streak`)
//!   the turn passes to the opponent.
//! - A wrong phrase guess by the player costs one extra mistake; a wrong
//!   phrase guess by the bot loses the round outright.
//! - `bonus_streak` consecutive correct player guesses offer a bonus the
//!   player must resolve (Take or Add) before guessing again.

use rand::rngs::StdRng;

use super::bot::{BotAction, BotStrategy, BotView};
use super::validation::{normalize_phrase, parse_phrase};
use super::{is_letter, Actor, GuessedSet, Phrase};

/// Default number of body parts per side.
pub const DEFAULT_MAX_MISTAKES: u32 = 6;

/// Reasons a guess or bonus choice is refused. A refused action never
/// changes the round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),
    #[error("Not your turn")]
    ActionOutOfTurn,
    #[error("Pick a bonus first")]
    BonusPending,
    #[error("No bonus on offer")]
    NoBonusOffered,
}

/// Tunable rule numbers for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelRules {
    /// Body parts per side; reaching this many mistakes loses the round.
    pub max_mistakes: u32,
    /// Consecutive correct player guesses that earn a bonus. Zero disables.
    pub bonus_streak: u32,
    /// Consecutive player misses that pass the turn to the bot. Zero never passes.
    pub miss_streak: u32,
    /// Consecutive bot misses that pass the turn back. Zero never passes.
    pub bot_miss_streak: u32,
    /// Extra mistakes charged on top of the usual one for a wrong phrase.
    pub phrase_miss_penalty: u32,
}

impl Default for DuelRules {
    fn default() -> Self {
        DuelRules {
            max_mistakes: DEFAULT_MAX_MISTAKES,
            bonus_streak: 2,
            miss_streak: 2,
            bot_miss_streak: 2,
            phrase_miss_penalty: 1,
        }
    }
}

impl DuelRules {
    fn miss_streak_for(&self, actor: Actor) -> u32 {
        match actor {
            Actor::Player => self.miss_streak,
            Actor::Bot => self.bot_miss_streak,
        }
    }
}

/// Per-actor bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorState {
    pub guessed: GuessedSet,
    pub wrong_count: u32,
    pub correct_streak: u32,
    pub wrong_streak: u32,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    None,
    PlayerWin,
    BotWin,
    /// Only for a phrase with no letters to guess.
    Draw,
}

impl Outcome {
    /// The outcome in which `actor` wins.
    pub fn win_for(actor: Actor) -> Outcome {
        match actor {
            Actor::Player => Outcome::PlayerWin,
            Actor::Bot => Outcome::BotWin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::None => "In progress",
            Outcome::PlayerWin => "You win!",
            Outcome::BotWin => "The bot wins!",
            Outcome::Draw => "Draw",
        }
    }
}

/// Coarse machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    BotTurn,
    RoundOver(Outcome),
}

/// The two streak rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusEffect {
    /// Remove one of the player's own mistakes (floor 0).
    Take,
    /// Charge the bot one mistake (capped at the maximum).
    Add,
}

impl BonusEffect {
    pub fn label(&self) -> &'static str {
        match self {
            BonusEffect::Take => "Take",
            BonusEffect::Add => "Add",
        }
    }
}

/// Something that happened during an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelEvent {
    LetterGuessed { actor: Actor, letter: char, correct: bool },
    PhraseGuessed { actor: Actor, correct: bool },
    BonusOffered,
    BonusApplied(BonusEffect),
    TurnPassed { to: Actor },
    RoundOver { outcome: Outcome, phrase: String },
}

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub phrase: Phrase,
    pub player: ActorState,
    pub bot: ActorState,
    pub turn: Actor,
    pub max_mistakes: u32,
    pub outcome: Outcome,
    pub bonus_offered: bool,
}

impl RoundState {
    fn new(phrase: Phrase, max_mistakes: u32) -> Self {
        RoundState {
            phrase,
            player: ActorState::default(),
            bot: ActorState::default(),
            turn: Actor::Player,
            max_mistakes,
            outcome: Outcome::None,
            bonus_offered: false,
        }
    }

    pub fn side(&self, actor: Actor) -> &ActorState {
        match actor {
            Actor::Player => &self.player,
            Actor::Bot => &self.bot,
        }
    }

    fn side_mut(&mut self, actor: Actor) -> &mut ActorState {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Bot => &mut self.bot,
        }
    }

    pub fn game_over(&self) -> bool {
        self.outcome != Outcome::None
    }
}

/// Drives one round between the player and a bot.
pub struct DuelStateMachine {
    state: RoundState,
    rules: DuelRules,
    bot: Box<dyn BotStrategy>,
    rng: StdRng,
}

impl DuelStateMachine {
    /// Start a round with the player to move. A phrase without letters has
    /// nothing to play for and starts already drawn.
    pub fn new(phrase: Phrase, rules: DuelRules, bot: Box<dyn BotStrategy>, rng: StdRng) -> Self {
        let max_mistakes = rules.max_mistakes.max(1);
        let mut state = RoundState::new(phrase, max_mistakes);
        if state.phrase.is_degenerate() {
            tracing::warn!(phrase = %state.phrase, "phrase has no letters, round is a draw");
            state.outcome = Outcome::Draw;
        }

        DuelStateMachine {
            state,
            rules: DuelRules { max_mistakes, ..rules },
            bot,
            rng,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phrase(&self) -> &Phrase {
        &self.state.phrase
    }

    pub fn phase(&self) -> Phase {
        if self.state.game_over() {
            Phase::RoundOver(self.state.outcome)
        } else {
            match self.state.turn {
                Actor::Player => Phase::PlayerTurn,
                Actor::Bot => Phase::BotTurn,
            }
        }
    }

    pub fn turn(&self) -> Actor {
        self.state.turn
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn bonus_offered(&self) -> bool {
        self.state.bonus_offered
    }

    /// Body parts `actor` can still lose.
    pub fn parts_remaining(&self, actor: Actor) -> u32 {
        self.state.max_mistakes - self.state.side(actor).wrong_count
    }

    /// The phrase as the player sees it.
    pub fn player_display(&self) -> String {
        self.state.phrase.reveal(&self.state.player.guessed)
    }

    /// Where the bot has found letters, without the letters themselves.
    pub fn bot_progress(&self) -> String {
        self.state.phrase.progress_marks(&self.state.bot.guessed)
    }

    /// Guess one letter for `actor`.
    pub fn submit_letter_guess(&mut self, actor: Actor, letter: char) -> Result<Vec<DuelEvent>, GuessError> {
        self.check_can_act(actor)?;
        if !is_letter(letter) {
            return Err(GuessError::InvalidInput(format!("'{}' is not a letter A-Z", letter)));
        }
        let letter = letter.to_ascii_uppercase();
        if self.state.side(actor).guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let mut events = Vec::new();
        self.apply_letter(actor, letter, &mut events);
        Ok(events)
    }

    /// Guess the whole phrase for `actor`. Comparison ignores case and
    /// repeated whitespace but not punctuation.
    pub fn submit_phrase_guess(&mut self, actor: Actor, text: &str) -> Result<Vec<DuelEvent>, GuessError> {
        self.check_can_act(actor)?;
        let guess = parse_phrase(text)?;

        let mut events = Vec::new();
        self.apply_phrase(actor, &guess, &mut events);
        Ok(events)
    }

    /// Resolve an offered streak bonus.
    pub fn choose_bonus(&mut self, effect: BonusEffect) -> Result<Vec<DuelEvent>, GuessError> {
        if self.state.game_over() {
            return Err(GuessError::ActionOutOfTurn);
        }
        if !self.state.bonus_offered {
            return Err(GuessError::NoBonusOffered);
        }

        let mut events = Vec::new();
        self.state.bonus_offered = false;
        self.state.player.correct_streak = 0;
        events.push(DuelEvent::BonusApplied(effect));

        match effect {
            BonusEffect::Take => {
                self.state.player.wrong_count = self.state.player.wrong_count.saturating_sub(1);
            }
            BonusEffect::Add => {
                let max = self.state.max_mistakes;
                let bot = &mut self.state.bot;
                bot.wrong_count = (bot.wrong_count + 1).min(max);
                if bot.wrong_count >= max {
                    self.finish(Outcome::PlayerWin, &mut events);
                }
            }
        }

        tracing::debug!(effect = effect.label(), "bonus applied");
        Ok(events)
    }

    /// Let the bot play until the turn passes back or the round ends.
    pub fn bot_take_turn(&mut self) -> Result<Vec<DuelEvent>, GuessError> {
        if self.state.game_over() || self.state.turn != Actor::Bot {
            return Err(GuessError::ActionOutOfTurn);
        }

        let mut events = Vec::new();
        while !self.state.game_over() && self.state.turn == Actor::Bot {
            let view = BotView {
                phrase: &self.state.phrase,
                guessed: &self.state.bot.guessed,
                parts_remaining: self.state.max_mistakes - self.state.bot.wrong_count,
            };
            let action = self.bot.next_action(&view, &mut self.rng);

            match action {
                BotAction::GuessPhrase => {
                    // The scripted bot knows the phrase
                    let text = normalize_phrase(self.state.phrase.text());
                    self.apply_phrase(Actor::Bot, &text, &mut events);
                }
                BotAction::GuessLetter(letter) => {
                    let letter = letter.to_ascii_uppercase();
                    if !is_letter(letter) || self.state.bot.guessed.contains(&letter) {
                        tracing::warn!(%letter, "bot proposed an unusable letter, passing");
                        self.pass_turn(&mut events);
                        break;
                    }
                    self.apply_letter(Actor::Bot, letter, &mut events);
                }
                BotAction::Pass => {
                    self.pass_turn(&mut events);
                }
            }
        }

        Ok(events)
    }

    fn check_can_act(&self, actor: Actor) -> Result<(), GuessError> {
        if self.state.game_over() || self.state.turn != actor {
            return Err(GuessError::ActionOutOfTurn);
        }
        if self.state.bonus_offered {
            return Err(GuessError::BonusPending);
        }
        Ok(())
    }

    fn apply_letter(&mut self, actor: Actor, letter: char, events: &mut Vec<DuelEvent>) {
        let correct = self.state.phrase.contains(letter);
        self.state.side_mut(actor).guessed.insert(letter);
        events.push(DuelEvent::LetterGuessed { actor, letter, correct });
        tracing::debug!(actor = actor.label(), %letter, correct, "letter guessed");

        if !correct {
            self.charge_miss(actor, 1, events);
            return;
        }

        let side = self.state.side_mut(actor);
        side.correct_streak += 1;
        side.wrong_streak = 0;
        let streak = side.correct_streak;

        if self.state.phrase.is_revealed_by(&self.state.side(actor).guessed) {
            self.finish(Outcome::win_for(actor), events);
            return;
        }

        if actor == Actor::Player && self.rules.bonus_streak > 0 && streak >= self.rules.bonus_streak {
            self.state.bonus_offered = true;
            events.push(DuelEvent::BonusOffered);
        }
    }

    fn apply_phrase(&mut self, actor: Actor, guess: &str, events: &mut Vec<DuelEvent>) {
        let correct = guess == normalize_phrase(self.state.phrase.text());
        events.push(DuelEvent::PhraseGuessed { actor, correct });
        tracing::debug!(actor = actor.label(), correct, "phrase guessed");

        if correct {
            self.finish(Outcome::win_for(actor), events);
            return;
        }

        match actor {
            Actor::Player => self.charge_miss(actor, 1 + self.rules.phrase_miss_penalty, events),
            Actor::Bot => {
                self.state.bot.wrong_count = self.state.max_mistakes;
                self.finish(Outcome::PlayerWin, events);
            }
        }
    }

    /// Charge `mistakes` against `actor` for one wrong guess, then check for
    /// a loss and for the miss-streak turn pass.
    fn charge_miss(&mut self, actor: Actor, mistakes: u32, events: &mut Vec<DuelEvent>) {
        let max = self.state.max_mistakes;
        let side = self.state.side_mut(actor);
        side.wrong_count = (side.wrong_count + mistakes).min(max);
        side.wrong_streak += 1;
        side.correct_streak = 0;

        if side.wrong_count >= max {
            self.finish(Outcome::win_for(actor.opponent()), events);
            return;
        }

        let limit = self.rules.miss_streak_for(actor);
        if limit > 0 && self.state.side(actor).wrong_streak >= limit {
            self.pass_turn(events);
        }
    }

    fn pass_turn(&mut self, events: &mut Vec<DuelEvent>) {
        let from = self.state.turn;
        self.state.side_mut(from).wrong_streak = 0;
        self.state.turn = from.opponent();
        events.push(DuelEvent::TurnPassed { to: self.state.turn });
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<DuelEvent>) {
        self.state.outcome = outcome;
        self.state.bonus_offered = false;
        tracing::info!(outcome = outcome.label(), phrase = %self.state.phrase, "round over");
        events.push(DuelEvent::RoundOver {
            outcome,
            phrase: self.state.phrase.text().to_string(),
        });
    }
}
