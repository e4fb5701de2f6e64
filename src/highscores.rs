//! High score leaderboard system
//!
//! Persisted as a JSON array, tracks the top 10 scores.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, SCORES_KEY, Storage};
use crate::settings::Difficulty;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player name
    pub name: String,
    /// Final (difficulty-scaled) score
    pub score: u64,
    pub difficulty: Difficulty,
    /// Session length in seconds
    pub time: u32,
    /// Date achieved (browser locale on web, UTC month/day/year on native)
    pub date: String,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add an entry (if it qualifies). Ties rank below existing entries.
    /// Returns the rank achieved (1-indexed).
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from storage; unreadable data yields an empty board
    pub fn load(storage: &dyn Storage) -> Self {
        match persistence::load_json::<HighScores>(storage, SCORES_KEY) {
            Ok(Some(mut scores)) => {
                // Stored lists may come from elsewhere; restore the invariant
                scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
                scores.entries.truncate(MAX_HIGH_SCORES);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::error!("Failed to load scores: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        match persistence::save_json(storage, SCORES_KEY, self) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Failed to save scores: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn entry(name: &str, score: u64) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            score,
            difficulty: Difficulty::Medium,
            time: 60,
            date: "10/19/2026".to_string(),
        }
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add(entry("a", 10)), Some(1));
        assert_eq!(scores.add(entry("b", 30)), Some(1));
        assert_eq!(scores.add(entry("c", 20)), Some(2));
        let order: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![30, 20, 10]);
        assert_eq!(scores.top_score(), Some(30));
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut scores = HighScores::new();
        scores.add(entry("first", 10));
        assert_eq!(scores.add(entry("second", 10)), Some(2));
        assert_eq!(scores.entries[0].name, "first");
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut scores = HighScores::new();
        for i in 0..12u64 {
            scores.add(entry("p", i * 5));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(10));

        assert!(!scores.qualifies(10));
        assert_eq!(scores.potential_rank(11), Some(10));
        assert_eq!(scores.add(entry("low", 3)), None);
    }

    #[test]
    fn test_zero_score_recorded_when_room() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add(entry("zero", 0)), Some(1));
    }

    #[test]
    fn test_persisted_as_array() {
        let mut storage = MemoryStorage::default();
        let mut scores = HighScores::new();
        scores.add(entry("Ada", 42));
        scores.save(&mut storage);

        let raw = storage.get_item(SCORES_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"difficulty\":\"medium\""));
        assert_eq!(HighScores::load(&storage), scores);
    }

    #[test]
    fn test_load_corrupt_starts_fresh() {
        let mut storage = MemoryStorage::default();
        storage.set_item(SCORES_KEY, "oops").unwrap();
        assert!(HighScores::load(&storage).is_empty());
    }

    #[test]
    fn test_load_resorts_foreign_data() {
        let mut storage = MemoryStorage::default();
        let unsorted = vec![entry("a", 1), entry("b", 9)];
        persistence::save_json(&mut storage, SCORES_KEY, &unsorted).unwrap();
        assert_eq!(HighScores::load(&storage).top_score(), Some(9));
    }
}
