//! High score table
//!
//! Maps player name to the score of their latest finished run. Persisted as
//! JSON in the key-value store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Number of entries shown on the game-over screen
pub const SHOWN_HIGH_SCORES: usize = 3;

/// Player name to latest score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: BTreeMap<String, u32>,
}

impl HighScores {
    /// Storage key for the persisted table
    pub const STORAGE_KEY: &'static str = "cupcake_catcher_highscores";

    /// Create empty table
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record `score` for `name`, replacing any earlier entry.
    /// Returns false (and records nothing) for a blank name.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.entries.insert(name.to_string(), score);
        true
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    /// Best `count` entries, highest score first (ties by name)
    pub fn top(&self, count: usize) -> Vec<(&str, u32)> {
        let mut sorted: Vec<_> = self.entries.iter().map(|(n, s)| (n.as_str(), *s)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted.truncate(count);
        sorted
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the table, falling back to empty on missing or corrupt data
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
                Err(err) => log::warn!("Ignoring corrupt high score table: {err}"),
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
            Err(err) => log::warn!("Failed to serialize high scores: {err}"),
        }
    }
}
