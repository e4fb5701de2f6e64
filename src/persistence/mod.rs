//! Key/value persistence for the leaderboard and preferences
//!
//! Values are JSON strings stored under fixed keys. Backends:
//! - `MemoryStorage`: in-process (tests, headless runs without a data dir)
//! - `FileStorage`: one `<key>.json` file per key (native)
//! - `platform::web::LocalStorage`: browser LocalStorage (wasm32)

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PersistenceError;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

/// Leaderboard key
pub const SCORES_KEY: &str = "nebula_scores";
/// Preferences key
pub const PREFS_KEY: &str = "nebula_prefs";

/// String key/value store
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and decode a value; `Ok(None)` when the key was never written
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    match storage.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::default();
        assert!(load_json::<Vec<u32>>(&storage, "k").unwrap().is_none());

        save_json(&mut storage, "k", &vec![3u32, 1, 2]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, "k").unwrap(), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let mut storage = MemoryStorage::default();
        storage.set_item("k", "[1, 2").unwrap();
        assert!(matches!(
            load_json::<Vec<u32>>(&storage, "k"),
            Err(PersistenceError::Json(_))
        ));
    }
}
