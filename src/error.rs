//! Error types
//!
//! Lookup failures are programming errors and propagate out of the tick.
//! Missing assets are reported by the collaborators and skipped by the systems.

use thiserror::Error;

use crate::platform::SceneLoadError;
use crate::sim::SceneId;
use crate::sim::ecs::EcsError;

/// An image or sound key that is not registered in the current scene
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset `{key}` is not registered in the current scene")]
pub struct AssetMissing {
    pub key: String,
}

impl AssetMissing {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Errors that stop the game loop
#[derive(Debug, Error)]
pub enum GameError {
    /// Entity or component lookup failed
    #[error("ECS lookup failed: {0}")]
    Ecs(#[from] EcsError),

    /// A scene could not be loaded after all retries
    #[error("failed to load scene `{}` after {attempts} attempts: {source}", scene.name())]
    SceneLoad {
        scene: SceneId,
        attempts: u32,
        #[source]
        source: SceneLoadError,
    },
}
