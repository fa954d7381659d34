//! Game settings and preferences
//!
//! Persisted separately from high scores in the key-value store.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{IDEAL_TICK_MS, SLOW_TICK_MS};
use crate::persistence::KeyValueStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Debug ===
    /// Draw collider overlays
    pub debug_mode: bool,
    /// One tick per second
    pub slow_mode: bool,

    // === Gameplay ===
    /// Minimum run time between food spawns
    pub food_spawn_interval_ms: u64,
    /// Lives at the start of each run
    pub starting_lives: i32,
    /// Fixed RNG seed; drawn from the OS when unset
    pub rng_seed: Option<u64>,

    // === Audio ===
    pub sfx_enabled: bool,
    pub music_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            slow_mode: false,

            food_spawn_interval_ms: 1000,
            starting_lives: 3,
            rng_seed: None,

            sfx_enabled: true,
            music_enabled: true,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "cupcake_catcher_settings";

    /// Length of one simulation tick
    pub fn tick_ms(&self) -> f64 {
        if self.slow_mode { SLOW_TICK_MS } else { IDEAL_TICK_MS }
    }

    /// Seed for the run's RNG
    pub fn seed(&self) -> u64 {
        self.rng_seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("Ignoring corrupt settings: {err}"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut store = MemoryStore::default();
        store.set(Settings::STORAGE_KEY, r#"{"debug_mode":true}"#);
        let settings = Settings::load(&store);
        assert!(settings.debug_mode);
        assert_eq!(settings.food_spawn_interval_ms, 1000);
        assert_eq!(settings.starting_lives, 3);
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemoryStore::default();
        let settings = Settings {
            slow_mode: true,
            rng_seed: Some(7),
            ..Settings::default()
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
        assert_eq!(settings.tick_ms(), SLOW_TICK_MS);
    }

    #[test]
    fn test_seed_prefers_configured_value() {
        let settings = Settings {
            rng_seed: Some(7),
            ..Settings::default()
        };
        assert_eq!(settings.seed(), 7);
        assert_eq!(settings.seed(), 7);

        // Unset: drawn fresh each time
        let settings = Settings::default();
        let seeds: Vec<u64> = (0..4).map(|_| settings.seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
