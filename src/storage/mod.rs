//! Persistent storage using SQLite (rusqlite)
//!
//! This module provides:
//! - The [`DuelStore`] capability set the duel session persists through
//! - OS-standard data directory location (via `directories` crate)
//! - SQLite database with schema versioning
//! - A built-in phrase bank seeded on first open

mod seed;

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::game::Difficulty;

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: players, phrases, rounds, scores, guesses
/// - v2: difficulty stored on each round
const SCHEMA_VERSION: u32 = 2;

/// Most rows returned by a leaderboard query.
pub const LEADERBOARD_SIZE: u32 = 10;

pub type PlayerId = i64;
pub type RoundId = i64;
pub type PhraseId = i64;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("failed to create data directory: {0}")]
    CreateDirFailed(std::io::Error),
    #[error("database schema version {found} is newer than supported version {supported}")]
    FutureSchemaVersion { found: u32, supported: u32 },
    #[error("migration from v{from} to v{to} failed: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
    #[error("not found: {0}")]
    NotFound(String),
}

/// A phrase drawn for a round. `id` is `None` for the built-in fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRecord {
    pub id: Option<PhraseId>,
    pub text: String,
    pub category: String,
}

/// Final status written for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Won,
    Lost,
    Drawn,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
            RoundStatus::Drawn => "drawn",
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub total_score: u32,
    pub games_played: u32,
}

/// What the duel needs from persistence.
///
/// Implementations report failures; they never retry on the caller's behalf.
pub trait DuelStore {
    /// Look up a player by name, creating them on first sight.
    fn get_or_create_player(&mut self, name: &str) -> Result<PlayerId, StorageError>;

    /// Open a round for `player_id` on `phrase_id` (`None` for the fallback
    /// phrase), played against the bot at `difficulty`.
    fn start_round(
        &mut self,
        phrase_id: Option<PhraseId>,
        player_id: PlayerId,
        difficulty: Difficulty,
    ) -> Result<RoundId, StorageError>;

    /// Append one letter guess to the round's log.
    fn record_guess(
        &mut self,
        round_id: RoundId,
        actor_id: PlayerId,
        letter: char,
        was_correct: bool,
    ) -> Result<(), StorageError>;

    /// Add one point to the player's score for the round.
    fn increment_score(&mut self, round_id: RoundId, player_id: PlayerId) -> Result<(), StorageError>;

    /// The player's score for the round (0 if never incremented).
    fn get_score(&self, round_id: RoundId, player_id: PlayerId) -> Result<u32, StorageError>;

    /// A random phrase of the given difficulty.
    fn get_random_phrase(&self, difficulty: Difficulty) -> Result<PhraseRecord, StorageError>;

    /// Close a round with its final status.
    fn mark_round_outcome(&mut self, round_id: RoundId, status: RoundStatus) -> Result<(), StorageError>;

    /// Top players for a difficulty, highest total score first.
    fn get_leaderboard(&self, difficulty: Difficulty) -> Result<Vec<LeaderboardEntry>, StorageError>;
}

/// The SQLite-backed store.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open or create the database in the OS-standard data directory:
    /// - Linux: `$XDG_DATA_HOME/gallows/` or `~/.local/share/gallows/`
    /// - macOS: `~/Library/Application Support/gallows/`
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir).map_err(StorageError::CreateDirFailed)?;
        Self::open_at(&data_dir.join("gallows.db"))
    }

    /// Open or create the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(StorageError::CreateDirFailed)?;
        }
        let storage = Storage {
            conn: Connection::open(path)?,
        };
        storage.initialize_schema()?;
        tracing::info!(path = %path.display(), "storage opened");
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let storage = Storage {
            conn: Connection::open_in_memory()?,
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Get the OS-standard data directory.
    pub fn data_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("", "", "gallows")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDirectory)
    }

    // Private helper methods

    fn initialize_schema(&self) -> Result<(), StorageError> {
        let current_version = self.get_schema_version()?;

        if current_version == 0 {
            self.create_schema_v1()?;
            self.seed_phrases()?;
            self.migrate_schema(1)?;
        } else if current_version < SCHEMA_VERSION {
            self.migrate_schema(current_version)?;
        } else if current_version > SCHEMA_VERSION {
            // Database is from a newer build
            return Err(StorageError::FutureSchemaVersion {
                found: current_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<u32, StorageError> {
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='meta'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: u32 = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| row.get(0))
            .unwrap_or(0);

        Ok(version)
    }

    fn create_schema_v1(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE meta (
                schema_version INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE players (
                player_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE phrases (
                phrase_id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                category TEXT NOT NULL,
                difficulty TEXT NOT NULL
            );

            CREATE INDEX idx_phrases_difficulty ON phrases (difficulty);

            -- phrase_id is NULL when the built-in fallback phrase was played
            CREATE TABLE rounds (
                round_id INTEGER PRIMARY KEY AUTOINCREMENT,
                phrase_id INTEGER REFERENCES phrases (phrase_id),
                player_id INTEGER NOT NULL REFERENCES players (player_id),
                status TEXT NOT NULL DEFAULT 'in_progress',
                started_at INTEGER NOT NULL,
                ended_at INTEGER
            );

            CREATE TABLE scores (
                round_id INTEGER NOT NULL REFERENCES rounds (round_id),
                player_id INTEGER NOT NULL REFERENCES players (player_id),
                score INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (round_id, player_id)
            );

            CREATE TABLE guesses (
                guess_id INTEGER PRIMARY KEY AUTOINCREMENT,
                round_id INTEGER NOT NULL REFERENCES rounds (round_id),
                actor_id INTEGER NOT NULL REFERENCES players (player_id),
                letter TEXT NOT NULL,
                was_correct INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE INDEX idx_guesses_round ON guesses (round_id);
            "#,
        )?;

        self.conn.execute(
            "INSERT INTO meta (schema_version, created_at) VALUES (?1, ?2)",
            params![1, now_millis()],
        )?;

        Ok(())
    }

    fn migrate_schema(&self, from_version: u32) -> Result<(), StorageError> {
        let mut current_version = from_version;

        while current_version < SCHEMA_VERSION {
            match current_version {
                1 => {
                    self.migrate_v1_to_v2()?;
                    current_version = 2;
                }
                _ => {
                    return Err(StorageError::MigrationFailed {
                        from: current_version,
                        to: SCHEMA_VERSION,
                        reason: format!("no migration path from version {}", current_version),
                    });
                }
            }
        }

        self.conn.execute(
            "UPDATE meta SET schema_version = ?1",
            params![SCHEMA_VERSION],
        )?;
        tracing::debug!(from = from_version, to = SCHEMA_VERSION, "schema migrated");

        Ok(())
    }

    /// Migrate from schema v1 to v2: record the difficulty on each round.
    /// Old rounds take it from their phrase; old fallback rounds stay NULL.
    fn migrate_v1_to_v2(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            r#"
            ALTER TABLE rounds ADD COLUMN difficulty TEXT;

            UPDATE rounds SET difficulty = (
                SELECT ph.difficulty FROM phrases ph WHERE ph.phrase_id = rounds.phrase_id
            );

            CREATE INDEX IF NOT EXISTS idx_rounds_difficulty ON rounds (difficulty);
            "#,
        )?;

        Ok(())
    }

    fn seed_phrases(&self) -> Result<(), StorageError> {
        let mut stmt = self
            .conn
            .prepare("INSERT INTO phrases (text, category, difficulty) VALUES (?1, ?2, ?3)")?;
        for (text, category, difficulty) in seed::SEED_PHRASES {
            stmt.execute(params![text, category, difficulty])?;
        }
        tracing::debug!(count = seed::SEED_PHRASES.len(), "phrase bank seeded");
        Ok(())
    }
}

/// Inspection helpers for tests.
#[cfg(test)]
impl Storage {
    /// Add a phrase to the bank.
    pub fn add_phrase(&self, text: &str, category: &str, difficulty: Difficulty) -> Result<PhraseId, StorageError> {
        self.conn.execute(
            "INSERT INTO phrases (text, category, difficulty) VALUES (?1, ?2, ?3)",
            params![text, category, difficulty.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Number of phrases in the bank.
    pub fn phrase_count(&self) -> Result<i64, StorageError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM phrases", [], |row| row.get(0))?;
        Ok(count)
    }

    /// The guess log for a round in insertion order: (actor, letter, correct).
    pub fn round_guesses(&self, round_id: RoundId) -> Result<Vec<(PlayerId, char, bool)>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT actor_id, letter, was_correct FROM guesses WHERE round_id = ?1 ORDER BY guess_id",
        )?;
        let rows = stmt.query_map(params![round_id], |row| {
            let actor: PlayerId = row.get(0)?;
            let letter: String = row.get(1)?;
            let correct: bool = row.get(2)?;
            Ok((actor, letter, correct))
        })?;

        let mut guesses = Vec::new();
        for row in rows {
            let (actor, letter, correct) = row?;
            if let Some(c) = letter.chars().next() {
                guesses.push((actor, c, correct));
            }
        }
        Ok(guesses)
    }

    /// The stored status of a round.
    pub fn round_status(&self, round_id: RoundId) -> Result<String, StorageError> {
        self.conn
            .query_row(
                "SELECT status FROM rounds WHERE round_id = ?1",
                params![round_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| StorageError::NotFound(format!("round {}", round_id)))
    }
}

impl DuelStore for Storage {
    fn get_or_create_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO players (name, created_at) VALUES (?1, ?2)",
            params![name, now_millis()],
        )?;
        let id = self.conn.query_row(
            "SELECT player_id FROM players WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    fn start_round(
        &mut self,
        phrase_id: Option<PhraseId>,
        player_id: PlayerId,
        difficulty: Difficulty,
    ) -> Result<RoundId, StorageError> {
        self.conn.execute(
            "INSERT INTO rounds (phrase_id, player_id, difficulty, started_at) VALUES (?1, ?2, ?3, ?4)",
            params![phrase_id, player_id, difficulty.as_str(), now_millis()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn record_guess(
        &mut self,
        round_id: RoundId,
        actor_id: PlayerId,
        letter: char,
        was_correct: bool,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO guesses (round_id, actor_id, letter, was_correct, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![round_id, actor_id, letter.to_string(), was_correct, now_millis()],
        )?;
        Ok(())
    }

    fn increment_score(&mut self, round_id: RoundId, player_id: PlayerId) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO scores (round_id, player_id, score) VALUES (?1, ?2, 1)
             ON CONFLICT (round_id, player_id) DO UPDATE SET score = score + 1",
            params![round_id, player_id],
        )?;
        Ok(())
    }

    fn get_score(&self, round_id: RoundId, player_id: PlayerId) -> Result<u32, StorageError> {
        let score: Option<u32> = self
            .conn
            .query_row(
                "SELECT score FROM scores WHERE round_id = ?1 AND player_id = ?2",
                params![round_id, player_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(score.unwrap_or(0))
    }

    fn get_random_phrase(&self, difficulty: Difficulty) -> Result<PhraseRecord, StorageError> {
        self.conn
            .query_row(
                "SELECT phrase_id, text, category FROM phrases WHERE difficulty = ?1 ORDER BY RANDOM() LIMIT 1",
                params![difficulty.as_str()],
                |row| {
                    Ok(PhraseRecord {
                        id: Some(row.get(0)?),
                        text: row.get(1)?,
                        category: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StorageError::NotFound(format!("no {} phrases", difficulty)))
    }

    fn mark_round_outcome(&mut self, round_id: RoundId, status: RoundStatus) -> Result<(), StorageError> {
        let updated = self.conn.execute(
            "UPDATE rounds SET status = ?1, ended_at = ?2 WHERE round_id = ?3",
            params![status.as_str(), now_millis(), round_id],
        )?;
        if updated == 0 {
            return Err(StorageError::NotFound(format!("round {}", round_id)));
        }
        Ok(())
    }

    fn get_leaderboard(&self, difficulty: Difficulty) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, COALESCE(SUM(s.score), 0) AS total, COUNT(r.round_id) AS games
             FROM rounds r
             JOIN players p ON p.player_id = r.player_id
             LEFT JOIN scores s ON s.round_id = r.round_id AND s.player_id = r.player_id
             WHERE r.difficulty = ?1
             GROUP BY p.player_id
             ORDER BY total DESC, games ASC, p.name ASC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![difficulty.as_str(), LEADERBOARD_SIZE], |row| {
            Ok(LeaderboardEntry {
                player_name: row.get(0)?,
                total_score: row.get(1)?,
                games_played: row.get(2)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> Storage {
        Storage::open_in_memory().expect("in-memory storage")
    }

    #[test]
    fn test_storage_creation() {
        let storage = storage();
        assert_eq!(storage.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_phrase_bank_is_seeded() {
        let storage = storage();
        assert_eq!(storage.phrase_count().unwrap(), seed::SEED_PHRASES.len() as i64);
        for difficulty in Difficulty::all() {
            let phrase = storage.get_random_phrase(*difficulty).unwrap();
            assert!(phrase.id.is_some());
            assert!(!phrase.text.is_empty());
        }
    }

    #[test]
    fn test_schema_is_not_reseeded() {
        let storage = storage();
        storage.initialize_schema().unwrap();
        assert_eq!(storage.phrase_count().unwrap(), seed::SEED_PHRASES.len() as i64);
    }

    #[test]
    fn test_future_schema_version_rejected() {
        let storage = storage();
        storage
            .conn
            .execute("UPDATE meta SET schema_version = ?1", params![SCHEMA_VERSION + 1])
            .unwrap();
        assert!(matches!(
            storage.initialize_schema(),
            Err(StorageError::FutureSchemaVersion { .. })
        ));
    }

    #[test]
    fn test_random_phrase_missing_difficulty() {
        let storage = storage();
        storage
            .conn
            .execute("DELETE FROM phrases WHERE difficulty = 'hard'", [])
            .unwrap();
        assert!(matches!(
            storage.get_random_phrase(Difficulty::Hard),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_get_or_create_player_is_stable() {
        let mut storage = storage();
        let alice = storage.get_or_create_player("alice").unwrap();
        let bot = storage.get_or_create_player("Bot").unwrap();
        assert_ne!(alice, bot);
        assert_eq!(storage.get_or_create_player("alice").unwrap(), alice);
    }

    #[test]
    fn test_score_increments() {
        let mut storage = storage();
        let player = storage.get_or_create_player("alice").unwrap();
        let phrase = storage.get_random_phrase(Difficulty::Easy).unwrap();
        let round = storage.start_round(phrase.id, player, Difficulty::Easy).unwrap();

        assert_eq!(storage.get_score(round, player).unwrap(), 0);
        storage.increment_score(round, player).unwrap();
        storage.increment_score(round, player).unwrap();
        assert_eq!(storage.get_score(round, player).unwrap(), 2);
    }

    #[test]
    fn test_record_guess() {
        let mut storage = storage();
        let player = storage.get_or_create_player("alice").unwrap();
        let bot = storage.get_or_create_player("Bot").unwrap();
        let round = storage.start_round(None, player, Difficulty::Easy).unwrap();

        storage.record_guess(round, player, 'E', true).unwrap();
        storage.record_guess(round, bot, 'Q', false).unwrap();

        assert_eq!(
            storage.round_guesses(round).unwrap(),
            vec![(player, 'E', true), (bot, 'Q', false)]
        );
    }

    #[test]
    fn test_mark_round_outcome() {
        let mut storage = storage();
        let player = storage.get_or_create_player("alice").unwrap();
        let round = storage.start_round(None, player, Difficulty::Easy).unwrap();
        assert_eq!(storage.round_status(round).unwrap(), "in_progress");

        storage.mark_round_outcome(round, RoundStatus::Won).unwrap();
        assert_eq!(storage.round_status(round).unwrap(), "won");

        assert!(matches!(
            storage.mark_round_outcome(round + 100, RoundStatus::Lost),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_leaderboard_orders_by_score() {
        let mut storage = storage();
        let easy = storage.add_phrase("Easy Street", "Social", Difficulty::Easy).unwrap();
        let hard = storage.add_phrase("Hard Times", "Social", Difficulty::Hard).unwrap();

        let alice = storage.get_or_create_player("alice").unwrap();
        let bob = storage.get_or_create_player("bob").unwrap();

        let r1 = storage.start_round(Some(easy), alice, Difficulty::Easy).unwrap();
        storage.increment_score(r1, alice).unwrap();
        let r2 = storage.start_round(Some(easy), bob, Difficulty::Easy).unwrap();
        for _ in 0..3 {
            storage.increment_score(r2, bob).unwrap();
        }
        let r3 = storage.start_round(Some(easy), alice, Difficulty::Easy).unwrap();
        storage.increment_score(r3, alice).unwrap();
        let r4 = storage.start_round(Some(hard), alice, Difficulty::Hard).unwrap();
        for _ in 0..10 {
            storage.increment_score(r4, alice).unwrap();
        }

        let board = storage.get_leaderboard(Difficulty::Easy).unwrap();
        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    player_name: "bob".to_string(),
                    total_score: 3,
                    games_played: 1,
                },
                LeaderboardEntry {
                    player_name: "alice".to_string(),
                    total_score: 2,
                    games_played: 2,
                },
            ]
        );

        let hard_board = storage.get_leaderboard(Difficulty::Hard).unwrap();
        assert_eq!(hard_board.len(), 1);
        assert_eq!(hard_board[0].total_score, 10);
        assert!(storage.get_leaderboard(Difficulty::Medium).unwrap().is_empty());
    }

    #[test]
    fn test_leaderboard_is_limited() {
        let mut storage = storage();
        let phrase = storage.add_phrase("Crowded", "Social", Difficulty::Medium).unwrap();
        for i in 0..15 {
            let player = storage.get_or_create_player(&format!("player{:02}", i)).unwrap();
            let round = storage.start_round(Some(phrase), player, Difficulty::Medium).unwrap();
            for _ in 0..i {
                storage.increment_score(round, player).unwrap();
            }
        }

        let board = storage.get_leaderboard(Difficulty::Medium).unwrap();
        assert_eq!(board.len(), LEADERBOARD_SIZE as usize);
        assert_eq!(board[0].player_name, "player14");
        assert!(board.windows(2).all(|w| w[0].total_score >= w[1].total_score));
    }

    #[test]
    fn test_fallback_rounds_count_for_their_difficulty() {
        let mut storage = storage();
        let alice = storage.get_or_create_player("alice").unwrap();
        let round = storage.start_round(None, alice, Difficulty::Hard).unwrap();
        storage.increment_score(round, alice).unwrap();
        storage.mark_round_outcome(round, RoundStatus::Won).unwrap();

        assert_eq!(
            storage.get_leaderboard(Difficulty::Hard).unwrap(),
            vec![LeaderboardEntry {
                player_name: "alice".to_string(),
                total_score: 1,
                games_played: 1,
            }]
        );
        assert!(storage.get_leaderboard(Difficulty::Easy).unwrap().is_empty());
    }

    #[test]
    fn test_v1_database_is_migrated() {
        let storage = Storage {
            conn: Connection::open_in_memory().unwrap(),
        };
        storage.create_schema_v1().unwrap();
        storage.seed_phrases().unwrap();
        assert_eq!(storage.get_schema_version().unwrap(), 1);

        storage
            .conn
            .execute_batch(
                "INSERT INTO players (name, created_at) VALUES ('alice', 0);
                 INSERT INTO rounds (phrase_id, player_id, started_at)
                     SELECT phrase_id, 1, 0 FROM phrases WHERE difficulty = 'medium' LIMIT 1;
                 INSERT INTO rounds (phrase_id, player_id, started_at) VALUES (NULL, 1, 0);
                 INSERT INTO scores (round_id, player_id, score) VALUES (1, 1, 4), (2, 1, 7);",
            )
            .unwrap();

        storage.initialize_schema().unwrap();
        assert_eq!(storage.get_schema_version().unwrap(), SCHEMA_VERSION);

        // The fallback round has no known difficulty and stays off every board
        let board = storage.get_leaderboard(Difficulty::Medium).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_score, 4);
        assert_eq!(board[0].games_played, 1);
    }

    #[test]
    fn test_data_dir() {
        let dir = Storage::data_dir();
        assert!(dir.is_ok());
        assert!(dir.unwrap().to_string_lossy().contains("gallows"));
    }
}
