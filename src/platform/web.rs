//! Browser glue: LocalStorage backend and the JS-facing session
//!
//! Rendering and input stay in JS; it calls `tick()` from
//! requestAnimationFrame and reads letter positions back as JSON.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dictionary::{LetterTier, letter_score};
use crate::error::PersistenceError;
use crate::persistence::Storage;
use crate::session::{Session, SessionConfig};
use crate::{Dictionary, Difficulty, HighScores, Preferences};

/// Browser LocalStorage
pub struct LocalStorage {
    inner: web_sys::Storage,
}

fn js_error(e: JsValue) -> PersistenceError {
    PersistenceError::Unavailable {
        reason: format!("{:?}", e),
    }
}

impl LocalStorage {
    pub fn open() -> Result<Self, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
            .ok_or_else(|| PersistenceError::Unavailable {
                reason: "LocalStorage not available".to_string(),
            })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.inner.set_item(key, value).map_err(js_error)
    }
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Letter Nebula starting...");
}

/// What the front end needs to draw one letter
#[derive(Serialize)]
struct LetterView {
    id: u32,
    ch: char,
    x: f32,
    y: f32,
    points: u32,
    tier: &'static str,
    /// Exit animation progress (0-1) for consumed letters
    exiting: Option<f32>,
}

/// Session handle exported to JS
#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    storage: Option<LocalStorage>,
}

#[wasm_bindgen]
impl WebSession {
    /// `words_json` is a JSON array of words; unusable lists fall back to the built-in words
    #[wasm_bindgen(constructor)]
    pub fn new(words_json: &str, seed: u32) -> WebSession {
        let dictionary = match Dictionary::from_json_str(words_json) {
            Ok(dictionary) => {
                log::info!("Dictionary loaded: {} words", dictionary.len());
                dictionary
            }
            Err(e) => {
                log::warn!("Dictionary failed ({}), using built-in words", e);
                Dictionary::fallback()
            }
        };

        let storage = match LocalStorage::open() {
            Ok(storage) => Some(storage),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        let prefs = storage
            .as_ref()
            .map(|s| Preferences::load(s))
            .unwrap_or_default();

        WebSession {
            session: Session::new(SessionConfig::from_preferences(&prefs), dictionary, seed as u64),
            storage,
        }
    }

    /// Preferences as JSON, to prefill the start screen
    pub fn preferences_json(&self) -> String {
        serde_json::to_string(&self.session.config().to_preferences()).unwrap_or_default()
    }

    pub fn high_scores_json(&self) -> String {
        let scores = self
            .storage
            .as_ref()
            .map(|s| HighScores::load(s))
            .unwrap_or_default();
        serde_json::to_string(&scores).unwrap_or_default()
    }

    pub fn configure(&mut self, player_name: &str, difficulty: &str, duration_secs: u32) {
        let prefs = Preferences {
            player_name: player_name.to_string(),
            difficulty: Difficulty::from_str(difficulty).unwrap_or_default(),
            duration: duration_secs,
        };
        self.session.configure(SessionConfig::from_preferences(&prefs));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Advance one frame; returns true on the frame the game ends
    pub fn tick(&mut self) -> bool {
        let was_over = self.session.is_over();
        self.session.tick();
        if !was_over && self.session.is_over() {
            self.record_result();
            return true;
        }
        false
    }

    /// Submit a word; returns the outcome as JSON (`{"kind": "accepted", "points": 5}`)
    pub fn submit(&mut self, word: &str) -> String {
        let outcome = self.session.submit(word);
        serde_json::to_string(&outcome).unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn time_left(&self) -> u32 {
        self.session.time_left()
    }

    pub fn is_time_low(&self) -> bool {
        self.session.is_time_low()
    }

    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    pub fn final_score(&self) -> Option<f64> {
        self.session.summary().map(|s| s.final_score as f64)
    }

    /// Active and exiting letters as JSON
    pub fn letters_json(&self) -> String {
        let view = |l: &crate::sim::Letter, exiting: Option<f32>| LetterView {
            id: l.id.0,
            ch: l.ch,
            x: l.pos.x,
            y: l.pos.y,
            points: letter_score(l.ch),
            tier: LetterTier::of(l.ch).as_str(),
            exiting,
        };

        let exits = self.session.exits();
        let letters: Vec<LetterView> = self
            .session
            .arena()
            .active()
            .map(|l| view(l, None))
            .chain(
                exits
                    .iter()
                    .map(|e| view(&e.letter, Some(e.progress(exits.delay_ticks())))),
            )
            .collect();
        serde_json::to_string(&letters).unwrap_or_default()
    }
}

impl WebSession {
    fn record_result(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        if let Some(summary) = self.session.summary() {
            let mut scores = HighScores::load(&*storage);
            scores.add(summary.to_entry(super::date_string()));
            scores.save(&mut *storage);
        }
        self.session.config().to_preferences().save(&mut *storage);
    }
}
