//! One game: score, countdown clock and letter supply around the arena
//!
//! Driven at `SIM_HZ` by the host calling `tick()`. Words come in through
//! `submit()`; the arena decides whether their letters are available.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::dictionary::Dictionary;
use crate::highscores::HighScoreEntry;
use crate::settings::{Difficulty, Preferences};
use crate::sim::{Arena, ExitQueue, Resolution};

/// Name used when the player leaves theirs blank
pub const GUEST_NAME: &str = "Guest";

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub player_name: String,
    pub difficulty: Difficulty,
    /// Starting clock in seconds
    pub duration_secs: u32,
    /// Letters kept floating in the arena
    pub target_letters: usize,
    /// Ticks between staggered spawns
    pub spawn_stagger_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: GUEST_NAME.to_string(),
            difficulty: Difficulty::Medium,
            duration_secs: DEFAULT_DURATION_SECS,
            target_letters: TARGET_LETTER_COUNT,
            spawn_stagger_ticks: SPAWN_STAGGER_TICKS,
        }
    }
}

impl SessionConfig {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let name = prefs.player_name.trim();
        Self {
            player_name: if name.is_empty() {
                GUEST_NAME.to_string()
            } else {
                name.to_string()
            },
            difficulty: prefs.difficulty,
            duration_secs: prefs.duration,
            ..Self::default()
        }
    }

    /// Preferences to remember after a game
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            player_name: self.player_name.clone(),
            difficulty: self.difficulty,
            duration: self.duration_secs,
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Menu; nothing running
    Idle,
    /// Short warm-up before physics and the clock start
    Starting { ticks_left: u32 },
    Playing,
    GameOver,
}

/// Result of submitting a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Empty input or no game in progress
    Ignored,
    /// Not in the dictionary; no penalty
    UnknownWord,
    /// Letters consumed; points were added to score and clock
    Accepted { points: u32 },
    /// Valid word but the letters are not on the board; costs one point
    MissingLetters { missing: Vec<(char, usize)> },
}

/// Final result of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub duration_secs: u32,
    /// Score before the difficulty multiplier
    pub raw_score: u32,
    pub final_score: u64,
}

impl GameSummary {
    pub fn to_entry(&self, date: String) -> HighScoreEntry {
        HighScoreEntry {
            name: self.player_name.clone(),
            score: self.final_score,
            difficulty: self.difficulty,
            time: self.duration_secs,
            date,
        }
    }
}

pub struct Session {
    config: SessionConfig,
    dictionary: Dictionary,
    arena: Arena,
    exits: ExitQueue,
    /// Letter draws (the arena has its own RNG for placement)
    rng: Pcg32,
    phase: SessionPhase,
    score: u32,
    time_left: u32,
    /// Playing ticks since the clock last dropped
    frame_in_second: u32,
    /// Countdowns (ticks) until each scheduled spawn
    pending_spawns: Vec<u32>,
    summary: Option<GameSummary>,
}

impl Session {
    pub fn new(config: SessionConfig, dictionary: Dictionary, seed: u64) -> Self {
        let mut arena = Arena::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT, seed);
        arena.set_speed_multiplier(config.difficulty.multiplier());
        let time_left = config.duration_secs;

        Self {
            config,
            dictionary,
            arena,
            exits: ExitQueue::new(EXIT_DELAY_TICKS),
            rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
            phase: SessionPhase::Idle,
            score: 0,
            time_left,
            frame_in_second: 0,
            pending_spawns: Vec::new(),
            summary: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn exits(&self) -> &ExitQueue {
        &self.exits
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// HUD warning threshold
    pub fn is_time_low(&self) -> bool {
        self.time_left <= 10
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending_spawns.len()
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn take_summary(&mut self) -> Option<GameSummary> {
        self.summary.take()
    }

    /// Apply new settings; difficulty changes letter speed for later spawns
    pub fn configure(&mut self, config: SessionConfig) {
        self.arena.set_speed_multiplier(config.difficulty.multiplier());
        if self.phase == SessionPhase::Idle {
            self.time_left = config.duration_secs;
        }
        self.config = config;
    }

    /// Host container changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena.resize(width, height);
    }

    pub fn start(&mut self) {
        self.clear_board();
        self.score = 0;
        self.time_left = self.config.duration_secs;
        self.summary = None;
        self.arena.set_speed_multiplier(self.config.difficulty.multiplier());
        self.phase = SessionPhase::Starting {
            ticks_left: START_DELAY_TICKS,
        };
        log::info!(
            "Session started: {} on {} for {}s",
            self.config.player_name,
            self.config.difficulty.as_str(),
            self.config.duration_secs
        );
    }

    /// Back to the menu
    pub fn reset(&mut self) {
        self.clear_board();
        self.phase = SessionPhase::Idle;
        self.score = 0;
        self.time_left = self.config.duration_secs;
        self.summary = None;
    }

    /// One frame
    pub fn tick(&mut self) {
        match self.phase {
            SessionPhase::Idle | SessionPhase::GameOver => {
                self.exits.tick();
            }
            SessionPhase::Starting { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = SessionPhase::Starting {
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.phase = SessionPhase::Playing;
                    self.top_up();
                }
            }
            SessionPhase::Playing => {
                let pruned = self.arena.tick();
                self.exits.push(pruned);
                self.exits.tick();
                self.process_spawns();

                self.frame_in_second += 1;
                if self.frame_in_second >= SIM_HZ {
                    self.frame_in_second = 0;
                    self.time_left = self.time_left.saturating_sub(1);
                    if self.time_left == 0 {
                        self.finish();
                    }
                }
            }
        }
    }

    pub fn submit(&mut self, word: &str) -> SubmitOutcome {
        let word = word.trim();
        if word.is_empty() || !self.is_playing() {
            return SubmitOutcome::Ignored;
        }

        if !self.dictionary.is_valid(word) {
            log::debug!("Unknown word {:?}", word);
            return SubmitOutcome::UnknownWord;
        }

        match self.arena.try_consume(word) {
            Resolution::Feasible(_) => {
                let points = self.dictionary.score(word);
                self.score += points;
                self.time_left += points;
                log::info!("{} accepted: +{} pts & sec", word.to_uppercase(), points);
                self.top_up();
                SubmitOutcome::Accepted { points }
            }
            Resolution::Infeasible { missing } => {
                self.score = self.score.saturating_sub(1);
                log::debug!("{} missing letters {:?}", word.to_uppercase(), missing);
                SubmitOutcome::MissingLetters { missing }
            }
        }
    }

    /// End the game now and compute the final score
    pub fn finish(&mut self) {
        if self.phase == SessionPhase::GameOver {
            return;
        }
        self.phase = SessionPhase::GameOver;
        self.pending_spawns.clear();

        let multiplier = self.config.difficulty.multiplier();
        let final_score = (self.score as f32 * multiplier).round() as u64;
        log::info!("Game over: {} x{} = {}", self.score, multiplier, final_score);
        self.summary = Some(GameSummary {
            player_name: self.config.player_name.clone(),
            difficulty: self.config.difficulty,
            duration_secs: self.config.duration_secs,
            raw_score: self.score,
            final_score,
        });
    }

    fn clear_board(&mut self) {
        self.arena.clear();
        self.exits.clear();
        self.pending_spawns.clear();
        self.frame_in_second = 0;
    }

    /// Schedule enough staggered spawns to reach the target count
    fn top_up(&mut self) {
        let have = self.arena.active_count() + self.pending_spawns.len();
        let needed = self.config.target_letters.saturating_sub(have);
        let stagger = self.config.spawn_stagger_ticks;
        // Queue after whatever is already scheduled
        let offset = self.pending_spawns.iter().copied().max().map_or(0, |m| m + stagger);
        for i in 0..needed as u32 {
            self.pending_spawns.push(offset + i * stagger);
        }
    }

    fn process_spawns(&mut self) {
        let due = self.pending_spawns.iter().filter(|&&t| t == 0).count();
        self.pending_spawns.retain(|&t| t > 0);
        for t in &mut self.pending_spawns {
            *t -= 1;
        }
        for _ in 0..due {
            let ch = self.dictionary.random_letter(&mut self.rng);
            self.arena.spawn(ch);
        }
    }
}
