//! Word list, letter scores and letter supply
//!
//! The single letter-score table for the whole game lives here.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::error::DictionaryError;
use crate::sim::consume::normalize;

/// Weighted spawn pool, roughly Scrabble tile frequencies
pub const LETTER_DISTRIBUTION: &str =
    "AAAAAAAAABBCCDDDDEEEEEEEEEEEEFFGGGHHIIIIIIIIIJKLLLLMMNNNNNNOOOOOOOOPPQRRRRRRSSSSTTTTTTUUUUVVWWXYYZ";

/// Words used when no word list can be loaded
pub const FALLBACK_WORDS: [&str; 5] = ["THE", "AND", "YOU", "FOR", "NOT"];

/// Point value of a letter (0 for anything outside A-Z)
pub fn letter_score(ch: char) -> u32 {
    match ch.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'L' | 'N' | 'S' | 'T' | 'R' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Rarity tier, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterTier {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl LetterTier {
    pub fn of(ch: char) -> Self {
        match letter_score(ch) {
            8.. => LetterTier::Legendary,
            5..=7 => LetterTier::Rare,
            3..=4 => LetterTier::Uncommon,
            _ => LetterTier::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterTier::Common => "common",
            LetterTier::Uncommon => "uncommon",
            LetterTier::Rare => "rare",
            LetterTier::Legendary => "legendary",
        }
    }
}

/// Set of valid words (stored uppercase)
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref().trim()).into_iter().collect::<String>())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The built-in five word list
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Parse a JSON array of words
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let list: Vec<String> = serde_json::from_str(json)?;
        let dictionary = Self::from_words(list);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }

    /// Read a JSON word list from disk
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Try each source in turn, ending with the built-in list
    pub fn load_with_fallback<P: AsRef<Path>>(paths: &[P]) -> Self {
        for path in paths {
            let path = path.as_ref();
            match Self::load_file(path) {
                Ok(dictionary) => {
                    log::info!(
                        "Dictionary loaded ({}): {} words",
                        path.display(),
                        dictionary.len()
                    );
                    return dictionary;
                }
                Err(e) => log::warn!("Dictionary {} unavailable: {}", path.display(), e),
            }
        }
        log::error!("No word list could be loaded, using built-in words");
        Self::fallback()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&normalize(word).into_iter().collect::<String>())
    }

    /// Sum of letter values
    pub fn score(&self, word: &str) -> u32 {
        word.chars().map(letter_score).sum()
    }

    /// Draw a letter from the weighted distribution
    pub fn random_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let pool = LETTER_DISTRIBUTION.as_bytes();
        pool[rng.random_range(0..pool.len())] as char
    }
}
