//! Frequency-ranked letter pool
//!
//! Orders the letters an actor has not tried yet by how common they are in
//! English text, then cuts that ordering into three bands the bot samples
//! from.

use once_cell::sync::Lazy;

use super::GuessedSet;

/// English letters from most to least frequent in running text.
pub const ENGLISH_RANKING: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// The working alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Share of the remaining letters in the top band (percent, rounded up).
const TOP_BAND_PERCENT: usize = 30;

/// Cumulative share of the remaining letters covered by top + mid (percent).
const MID_BAND_PERCENT: usize = 70;

/// Shared A-Z pool ranked by English frequency.
pub static ENGLISH: Lazy<LetterPool> = Lazy::new(|| LetterPool::new(ALPHABET, ENGLISH_RANKING));

/// One of the three frequency partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Mid,
    Low,
}

impl Band {
    /// Order in which bands are tried when this one turns out to be empty.
    pub fn fallback_order(&self) -> [Band; 3] {
        match self {
            Band::Top => [Band::Top, Band::Mid, Band::Low],
            Band::Mid => [Band::Mid, Band::Low, Band::Top],
            Band::Low => [Band::Low, Band::Mid, Band::Top],
        }
    }
}

/// Remaining letters cut into frequency bands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bands {
    pub top: Vec<char>,
    pub mid: Vec<char>,
    pub low: Vec<char>,
}

impl Bands {
    pub fn get(&self, band: Band) -> &[char] {
        match band {
            Band::Top => &self.top,
            Band::Mid => &self.mid,
            Band::Low => &self.low,
        }
    }

    /// The first non-empty band in `preferred`'s fallback order.
    pub fn resolve(&self, preferred: Band) -> Option<&[char]> {
        preferred
            .fallback_order()
            .into_iter()
            .map(|band| self.get(band))
            .find(|letters| !letters.is_empty())
    }
}

/// An alphabet plus a reference frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    alphabet: Vec<char>,
    reference: Vec<char>,
}

impl LetterPool {
    /// Create a pool. Both inputs are uppercased and deduplicated, keeping the
    /// first occurrence.
    pub fn new(alphabet: &str, reference: &str) -> Self {
        LetterPool {
            alphabet: dedup_upper(alphabet),
            reference: dedup_upper(reference),
        }
    }

    /// Unguessed letters in reference order. Alphabet letters missing from the
    /// reference follow, in alphabet order.
    pub fn rank(&self, guessed: &GuessedSet) -> Vec<char> {
        let open = |c: &char| !guessed.contains(c);

        let mut ranked: Vec<char> = self
            .reference
            .iter()
            .filter(|c| self.alphabet.contains(c))
            .filter(|c| open(c))
            .copied()
            .collect();

        ranked.extend(
            self.alphabet
                .iter()
                .filter(|c| !self.reference.contains(c))
                .filter(|c| open(c))
                .copied(),
        );

        ranked
    }

    /// Rank the unguessed letters and cut them into bands in one step.
    pub fn bands(&self, guessed: &GuessedSet) -> Bands {
        band_split(&self.rank(guessed))
    }
}

/// Cut a ranked list into top / mid / low bands.
///
/// The top band takes the first 30% (rounded up, at least one letter), the
/// mid band runs to the 70% mark (at least one past the top band), the low
/// band takes the rest. Short lists leave the later bands empty.
pub fn band_split(ranked: &[char]) -> Bands {
    let n = ranked.len();
    let top_end = percent_ceil(n, TOP_BAND_PERCENT).max(1).min(n);
    let mid_end = percent_ceil(n, MID_BAND_PERCENT).max(top_end + 1).min(n);

    Bands {
        top: ranked[..top_end].to_vec(),
        mid: ranked[top_end..mid_end].to_vec(),
        low: ranked[mid_end..].to_vec(),
    }
}

fn percent_ceil(n: usize, percent: usize) -> usize {
    (n * percent).div_ceil(100)
}

fn dedup_upper(letters: &str) -> Vec<char> {
    let mut out = Vec::new();
    for c in letters.chars().map(|c| c.to_ascii_uppercase()) {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
