//! Player preferences and difficulty levels
//!
//! Persisted separately from the leaderboard.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DURATION_SECS;
use crate::persistence::{self, PREFS_KEY, Storage};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Letter speed multiplier; also scales the final score
    pub fn multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 2.0,
        }
    }

    /// Short leaderboard label ("EAS", "MED", "HAR")
    pub fn badge(&self) -> String {
        self.as_str()[..3].to_uppercase()
    }
}

/// Saved player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub player_name: String,
    pub difficulty: Difficulty,
    /// Session length in seconds
    pub duration: u32,
}

impl Default for Preferences {
    /// First launch
    fn default() -> Self {
        Self {
            player_name: String::new(),
            difficulty: Difficulty::Easy,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl Preferences {
    /// Used when stored preferences exist but cannot be read
    pub fn recovery() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            ..Self::default()
        }
    }

    pub fn load(storage: &dyn Storage) -> Self {
        match persistence::load_json::<Preferences>(storage, PREFS_KEY) {
            Ok(Some(prefs)) => {
                log::info!("Loaded preferences for {:?}", prefs.player_name);
                prefs
            }
            Ok(None) => {
                log::info!("Using default preferences");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load preferences: {}", e);
                Self::recovery()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        match persistence::save_json(storage, PREFS_KEY, self) {
            Ok(()) => log::info!("Preferences saved"),
            Err(e) => log::warn!("Failed to save preferences: {}", e),
        }
    }
}
