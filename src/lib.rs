//! Letter Nebula - An arcade word game with floating letters
//!
//! Core modules:
//! - `sim`: Deterministic letter simulation (motion, collisions, consumption)
//! - `dictionary`: Word validation, letter scores, weighted letter draws
//! - `session`: Score, timer and letter supply for one game
//! - `autoplay`: Demo player that submits feasible words
//! - `persistence`: Key/value storage for scores and preferences
//! - `platform`: Browser/native platform abstraction

pub mod autoplay;
pub mod dictionary;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, PersistenceError};
pub use highscores::{HighScoreEntry, HighScores};
pub use session::{Session, SessionConfig, SubmitOutcome};
pub use settings::{Difficulty, Preferences};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per animation frame)
    pub const SIM_HZ: u32 = 60;

    /// Letter diameter; also the minimum distance between two letter centers
    pub const LETTER_SIZE: f32 = 50.0;
    /// Letter speed in units per tick before the difficulty multiplier
    pub const BASE_SPEED: f32 = 1.5;

    /// Nominal arena extent used while the real bounds are unknown
    pub const DEFAULT_ARENA_WIDTH: f32 = 600.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 400.0;

    /// Pop-out animation length (~350 ms)
    pub const EXIT_DELAY_TICKS: u32 = 21;

    /// Session defaults
    pub const TARGET_LETTER_COUNT: usize = 15;
    pub const DEFAULT_DURATION_SECS: u32 = 60;
    /// Delay between staggered spawns (~100 ms)
    pub const SPAWN_STAGGER_TICKS: u32 = 6;
    /// Warm-up before physics and the clock start (~100 ms)
    pub const START_DELAY_TICKS: u32 = 6;
}
