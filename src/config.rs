//! Runtime configuration
//!
//! Values come from the process environment (`main` loads `.env` into it
//! first). Anything missing or unparseable falls back to its default with a
//! warning in the log.

use std::path::PathBuf;
use std::str::FromStr;

use crate::game::bot::BOT_NAME;
use crate::game::duel::DuelRules;
use crate::game::Difficulty;

/// Category never served to players.
pub const DEFAULT_DISALLOWED_CATEGORY: &str = "music";

/// Draws attempted before falling back to the built-in phrase.
pub const DEFAULT_PHRASE_RETRIES: u32 = 10;

/// Longest accepted player name.
pub const MAX_PLAYER_NAME: usize = 12;

/// Name used when no usable one is configured.
pub const DEFAULT_PLAYER_NAME: &str = "player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelConfig {
    pub rules: DuelRules,
    pub difficulty: Difficulty,
    /// Lowercased category allow-list. Empty allows every category.
    pub categories: Vec<String>,
    pub disallowed_category: String,
    pub phrase_retries: u32,
    pub db_path: Option<PathBuf>,
    pub player_name: String,
}

impl Default for DuelConfig {
    fn default() -> Self {
        DuelConfig {
            rules: DuelRules::default(),
            difficulty: Difficulty::default(),
            categories: Vec::new(),
            disallowed_category: DEFAULT_DISALLOWED_CATEGORY.to_string(),
            phrase_retries: DEFAULT_PHRASE_RETRIES,
            db_path: None,
            player_name: default_player_name(std::env::var("USER").ok()),
        }
    }
}

impl DuelConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DuelRules::default();
        let rules = DuelRules {
            max_mistakes: parse_or("GALLOWS_MAX_MISTAKES", &lookup, defaults.max_mistakes),
            bonus_streak: parse_or("GALLOWS_BONUS_STREAK", &lookup, defaults.bonus_streak),
            miss_streak: parse_or("GALLOWS_MISS_STREAK", &lookup, defaults.miss_streak),
            bot_miss_streak: parse_or("GALLOWS_BOT_MISS_STREAK", &lookup, defaults.bot_miss_streak),
            phrase_miss_penalty: defaults.phrase_miss_penalty,
        };

        let rules = if rules.max_mistakes == 0 {
            tracing::warn!("GALLOWS_MAX_MISTAKES must be at least 1, using default");
            DuelRules {
                max_mistakes: defaults.max_mistakes,
                ..rules
            }
        } else {
            rules
        };

        let categories = lookup("GALLOWS_CATEGORIES")
            .map(|raw| {
                raw.split(',')
                    .map(|c| c.trim().to_lowercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let disallowed_category = lookup("GALLOWS_DISALLOWED_CATEGORY")
            .map(|c| c.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_DISALLOWED_CATEGORY.to_string());

        let player_name = lookup("GALLOWS_PLAYER")
            .and_then(|name| clean_player_name(&name))
            .unwrap_or_else(|| default_player_name(lookup("USER")));

        DuelConfig {
            rules,
            difficulty: parse_or("GALLOWS_DIFFICULTY", &lookup, Difficulty::default()),
            categories,
            disallowed_category,
            phrase_retries: parse_or("GALLOWS_PHRASE_RETRIES", &lookup, DEFAULT_PHRASE_RETRIES),
            db_path: lookup("GALLOWS_DB")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            player_name,
        }
    }

    /// Whether a phrase from `category` may be served.
    pub fn allows_category(&self, category: &str) -> bool {
        let category = category.trim().to_lowercase();
        if category == self.disallowed_category {
            return false;
        }
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Trim and truncate a player name. `None` if nothing is left or the name
/// belongs to the bot.
pub fn clean_player_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_PLAYER_NAME).collect();
    if name.is_empty() || name.eq_ignore_ascii_case(BOT_NAME) {
        None
    } else {
        Some(name)
    }
}

fn default_player_name(user: Option<String>) -> String {
    user.and_then(|u| clean_player_name(&u))
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "invalid setting, using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> DuelConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DuelConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("USER", "alice")]);
        assert_eq!(cfg.rules, DuelRules::default());
        assert_eq!(cfg.difficulty, Difficulty::Medium);
        assert!(cfg.categories.is_empty());
        assert_eq!(cfg.disallowed_category, "music");
        assert_eq!(cfg.phrase_retries, 10);
        assert_eq!(cfg.db_path, None);
        assert_eq!(cfg.player_name, "alice");
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("GALLOWS_MAX_MISTAKES", "8"),
            ("GALLOWS_BONUS_STREAK", "3"),
            ("GALLOWS_MISS_STREAK", "1"),
            ("GALLOWS_BOT_MISS_STREAK", "4"),
            ("GALLOWS_DIFFICULTY", "Hard"),
            ("GALLOWS_CATEGORIES", "Pixar, cowboy,,"),
            ("GALLOWS_PHRASE_RETRIES", "3"),
            ("GALLOWS_DB", "/tmp/gallows-test.db"),
            ("GALLOWS_PLAYER", "  averyveryverylongname "),
        ]);
        assert_eq!(cfg.rules.max_mistakes, 8);
        assert_eq!(cfg.rules.bonus_streak, 3);
        assert_eq!(cfg.rules.miss_streak, 1);
        assert_eq!(cfg.rules.bot_miss_streak, 4);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.categories, vec!["pixar".to_string(), "cowboy".to_string()]);
        assert_eq!(cfg.phrase_retries, 3);
        assert_eq!(cfg.db_path, Some(PathBuf::from("/tmp/gallows-test.db")));
        assert_eq!(cfg.player_name, "averyveryver");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("GALLOWS_MAX_MISTAKES", "0"),
            ("GALLOWS_BONUS_STREAK", "lots"),
            ("GALLOWS_DIFFICULTY", "nightmare"),
            ("GALLOWS_PHRASE_RETRIES", "-1"),
            ("GALLOWS_PLAYER", "   "),
        ]);
        assert_eq!(cfg.rules, DuelRules::default());
        assert_eq!(cfg.difficulty, Difficulty::Medium);
        assert_eq!(cfg.phrase_retries, DEFAULT_PHRASE_RETRIES);
        assert_eq!(cfg.player_name, "player");
    }

    #[test]
    fn test_bot_name_is_reserved() {
        assert_eq!(clean_player_name("Bot"), None);
        assert_eq!(clean_player_name("  bOT "), None);
        assert_eq!(clean_player_name("Botany"), Some("Botany".to_string()));

        let cfg = config(&[("GALLOWS_PLAYER", "bot"), ("USER", "Bot")]);
        assert_eq!(cfg.player_name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_allows_category() {
        let open = config(&[]);
        assert!(open.allows_category("Pixar"));
        assert!(!open.allows_category("Music"));

        let narrow = config(&[("GALLOWS_CATEGORIES", "cowboy,music")]);
        assert!(narrow.allows_category("Cowboy"));
        assert!(!narrow.allows_category("Pixar"));
        assert!(!narrow.allows_category("music"));
    }
}
