//! One duel round wired to persistence
//!
//! The state machine stays pure; this layer picks the phrase, registers both
//! participants and mirrors every event into a [`DuelStore`]. Store failures
//! are logged and counted but never undo or block a move.

use rand::rngs::StdRng;

use crate::config::{clean_player_name, DuelConfig, DEFAULT_PLAYER_NAME};
use crate::game::bot::{BotPolicy, BotStrategy, BOT_NAME};
use crate::game::duel::{BonusEffect, DuelEvent, DuelStateMachine, GuessError, Outcome};
use crate::game::score::ScoreKeeper;
use crate::game::validation::parse_letter;
use crate::game::{Actor, Difficulty, Phrase};
use crate::storage::{DuelStore, PhraseRecord, PlayerId, RoundId, RoundStatus, StorageError};

/// Phrase used when the bank cannot supply an acceptable one.
pub const FALLBACK_PHRASE: &str = "PYTHON";
pub const FALLBACK_CATEGORY: &str = "General";

pub struct DuelSession {
    machine: DuelStateMachine,
    difficulty: Difficulty,
    category: String,
    player_name: String,
    player_id: Option<PlayerId>,
    bot_id: Option<PlayerId>,
    round_id: Option<RoundId>,
    score: ScoreKeeper,
    store_failures: u32,
}

impl DuelSession {
    /// Draw a phrase and start a round against the difficulty's bot.
    pub fn start(
        store: &mut dyn DuelStore,
        config: &DuelConfig,
        player_name: &str,
        difficulty: Difficulty,
        rng: StdRng,
    ) -> Self {
        let record = pick_phrase(store, config, difficulty);
        Self::with_phrase(
            store,
            config,
            player_name,
            difficulty,
            record,
            Box::new(BotPolicy::new(difficulty)),
            rng,
        )
    }

    /// Start a round on a known phrase with any bot. A name that is empty or
    /// taken by the bot is replaced with the default player name.
    pub fn with_phrase(
        store: &mut dyn DuelStore,
        config: &DuelConfig,
        player_name: &str,
        difficulty: Difficulty,
        record: PhraseRecord,
        bot: Box<dyn BotStrategy>,
        rng: StdRng,
    ) -> Self {
        let player_name = clean_player_name(player_name).unwrap_or_else(|| {
            tracing::warn!(name = player_name, "unusable player name, using default");
            DEFAULT_PLAYER_NAME.to_string()
        });
        let machine = DuelStateMachine::new(Phrase::new(&record.text), config.rules, bot, rng);
        let mut session = DuelSession {
            machine,
            difficulty,
            category: record.category,
            player_name,
            player_id: None,
            bot_id: None,
            round_id: None,
            score: ScoreKeeper::new(),
            store_failures: 0,
        };

        let result = store.get_or_create_player(&session.player_name);
        session.player_id = session.check(result, "register player");
        session.bot_id = session.check(store.get_or_create_player(BOT_NAME), "register bot");
        if let Some(player_id) = session.player_id {
            let result = store.start_round(record.id, player_id, difficulty);
            session.round_id = session.check(result, "start round");
        }

        tracing::info!(
            player = %session.player_name,
            difficulty = %difficulty,
            category = %session.category,
            round = ?session.round_id,
            "duel started"
        );

        // A phrase without letters is already over
        if session.machine.is_over() {
            let over = DuelEvent::RoundOver {
                outcome: session.machine.outcome(),
                phrase: session.machine.phrase().text().to_string(),
            };
            session.persist(store, &[over]);
        }

        session
    }

    pub fn machine(&self) -> &DuelStateMachine {
        &self.machine
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn round_id(&self) -> Option<RoundId> {
        self.round_id
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    /// Store writes that failed during this round.
    pub fn store_failures(&self) -> u32 {
        self.store_failures
    }

    /// Guess a letter typed by the player.
    pub fn guess_letter(&mut self, store: &mut dyn DuelStore, input: &str) -> Result<Vec<DuelEvent>, GuessError> {
        let letter = parse_letter(input)?;
        let events = self.machine.submit_letter_guess(Actor::Player, letter)?;
        self.persist(store, &events);
        Ok(events)
    }

    /// Guess the whole phrase for the player.
    pub fn guess_phrase(&mut self, store: &mut dyn DuelStore, text: &str) -> Result<Vec<DuelEvent>, GuessError> {
        let events = self.machine.submit_phrase_guess(Actor::Player, text)?;
        self.persist(store, &events);
        Ok(events)
    }

    /// A single character is a letter guess; anything longer is a phrase.
    pub fn submit(&mut self, store: &mut dyn DuelStore, input: &str) -> Result<Vec<DuelEvent>, GuessError> {
        if input.trim().chars().count() == 1 {
            self.guess_letter(store, input)
        } else {
            self.guess_phrase(store, input)
        }
    }

    pub fn choose_bonus(&mut self, store: &mut dyn DuelStore, effect: BonusEffect) -> Result<Vec<DuelEvent>, GuessError> {
        let events = self.machine.choose_bonus(effect)?;
        self.persist(store, &events);
        Ok(events)
    }

    /// Play the bot's whole turn.
    pub fn play_bot_turn(&mut self, store: &mut dyn DuelStore) -> Result<Vec<DuelEvent>, GuessError> {
        let events = self.machine.bot_take_turn()?;
        self.persist(store, &events);
        Ok(events)
    }

    fn persist(&mut self, store: &mut dyn DuelStore, events: &[DuelEvent]) {
        for event in events {
            let points = self.score.observe(event);

            let Some(round_id) = self.round_id else {
                continue;
            };

            match event {
                DuelEvent::LetterGuessed { actor, letter, correct } => {
                    let actor_id = match actor {
                        Actor::Player => self.player_id,
                        Actor::Bot => self.bot_id,
                    };
                    if let Some(actor_id) = actor_id {
                        let result = store.record_guess(round_id, actor_id, *letter, *correct);
                        self.check(result, "record guess");
                    }
                }
                DuelEvent::RoundOver { outcome, .. } => {
                    if let Some(status) = round_status(*outcome) {
                        let result = store.mark_round_outcome(round_id, status);
                        self.check(result, "mark round outcome");
                    }
                }
                _ => {}
            }

            if let Some(player_id) = self.player_id {
                for _ in 0..points {
                    let result = store.increment_score(round_id, player_id);
                    self.check(result, "increment score");
                }
            }
        }
    }

    fn check<T>(&mut self, result: Result<T, StorageError>, what: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.store_failures += 1;
                tracing::warn!(error = %e, operation = what, "store write failed, continuing");
                None
            }
        }
    }
}

/// Draw phrases until one is in an allowed category and has letters to guess.
pub fn pick_phrase(store: &dyn DuelStore, config: &DuelConfig, difficulty: Difficulty) -> PhraseRecord {
    for attempt in 1..=config.phrase_retries {
        match store.get_random_phrase(difficulty) {
            Ok(record) if !config.allows_category(&record.category) => {
                tracing::debug!(attempt, category = %record.category, "phrase category not allowed");
            }
            Ok(record) if Phrase::new(&record.text).is_degenerate() => {
                tracing::debug!(attempt, "phrase has no letters");
            }
            Ok(record) => return record,
            Err(e) => {
                tracing::warn!(error = %e, "could not draw a phrase");
                break;
            }
        }
    }

    tracing::warn!(difficulty = %difficulty, "using fallback phrase");
    PhraseRecord {
        id: None,
        text: FALLBACK_PHRASE.to_string(),
        category: FALLBACK_CATEGORY.to_string(),
    }
}

fn round_status(outcome: Outcome) -> Option<RoundStatus> {
    match outcome {
        Outcome::PlayerWin => Some(RoundStatus::Won),
        Outcome::BotWin => Some(RoundStatus::Lost),
        Outcome::Draw => Some(RoundStatus::Drawn),
        Outcome::None => None,
    }
}
