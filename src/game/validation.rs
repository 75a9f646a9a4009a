//! Guess input validation
//!
//! Validates raw guess text before it reaches the duel:
//! - Letter guesses must be exactly one letter A-Z (either case)
//! - Phrase guesses must contain something other than whitespace

use super::duel::GuessError;
use super::is_letter;

/// Parse a single-letter guess, returning it uppercase.
///
/// Surrounding whitespace is ignored; anything other than one letter is
/// rejected.
pub fn parse_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Ok(c.to_ascii_uppercase()),
        (None, _) => Err(GuessError::InvalidInput("enter a letter".to_string())),
        (Some(c), None) => Err(GuessError::InvalidInput(format!("'{}' is not a letter A-Z", c))),
        _ => Err(GuessError::InvalidInput("enter a single letter".to_string())),
    }
}

/// Normalize a phrase for comparison: uppercase, trimmed, inner whitespace
/// runs collapsed to one space.
pub fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a full-phrase guess, returning its normalized form.
pub fn parse_phrase(text: &str) -> Result<String, GuessError> {
    let normalized = normalize_phrase(text);
    if normalized.is_empty() {
        return Err(GuessError::InvalidInput("phrase guess is empty".to_string()));
    }
    Ok(normalized)
}
