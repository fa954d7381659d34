//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Run time (suspendable clock)
//! - Input events
//! - Scene loading (asynchronous asset loads)
//! - Player name prompt
//!
//! The browser implementations live in `web`; headless stand-ins live here.

pub mod assets;
pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputState, Key};
pub use time::RunClock;

use thiserror::Error;

use crate::error::AssetMissing;
use crate::sim::SceneId;

/// Why a scene load was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneLoadError {
    #[error(transparent)]
    Asset(#[from] AssetMissing),
    #[error("scene load rejected: {0}")]
    Rejected(String),
}

/// Scene/asset collaborator
///
/// Loads run in the background. The tick driver polls for completion between
/// ticks, so a finished load never lands in the middle of a tick.
pub trait SceneLoader {
    /// Start loading `scene`'s images and sounds
    fn begin_load(&mut self, scene: SceneId, is_initial: bool);
    /// `None` while the load is still running
    fn poll(&mut self) -> Option<Result<SceneId, SceneLoadError>>;
}

/// Asks the player for a name on the game-over screen
pub trait NamePrompt {
    fn prompt_player_name(&mut self) -> Option<String>;
}

/// Prompt that always answers with the same name
#[derive(Debug, Clone, Default)]
pub struct FixedName(pub Option<String>);

impl FixedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }
}

impl NamePrompt for FixedName {
    fn prompt_player_name(&mut self) -> Option<String> {
        self.0.clone()
    }
}

/// Scene loader whose assets are already in memory
///
/// A load completes after `latency_polls` unanswered polls. `fail_next`
/// rejects that many upcoming loads.
#[derive(Debug, Clone, Default)]
pub struct PreloadedScenes {
    pub latency_polls: u32,
    pub fail_next: u32,
    /// Every load started, in order
    pub loads: Vec<(SceneId, bool)>,
    pending: Option<(SceneId, u32)>,
}

impl PreloadedScenes {
    pub fn new(latency_polls: u32) -> Self {
        Self {
            latency_polls,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

impl SceneLoader for PreloadedScenes {
    fn begin_load(&mut self, scene: SceneId, is_initial: bool) {
        log::info!("[SceneManager] Loading scene {}", scene.name());
        self.loads.push((scene, is_initial));
        self.pending = Some((scene, self.latency_polls));
    }

    fn poll(&mut self) -> Option<Result<SceneId, SceneLoadError>> {
        let (scene, remaining) = self.pending?;
        if remaining > 0 {
            self.pending = Some((scene, remaining - 1));
            return None;
        }
        self.pending = None;
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Some(Err(SceneLoadError::Rejected(format!(
                "{} assets unavailable",
                scene.name()
            ))));
        }
        Some(Ok(scene))
    }
}
