//! Per-tick systems
//!
//! Systems hold no state of their own. Each one reads and writes the `World`
//! and calls out to the collaborators it needs. The tick driver runs them in
//! this order:
//!
//! 1. `food_spawn`
//! 2. `movement` (ends with the `collision` pass)
//! 3. `player_state`
//! 4. `tile_breaking`
//! 5. `score`
//! 6. `render`
//! 7. `garbage`
//! 8. `level`

pub mod collision;
pub mod food_spawn;
pub mod garbage;
pub mod level;
pub mod movement;
pub mod player_state;
pub mod render;
pub mod score;
pub mod tile_breaking;

use crate::audio::Audio;
use crate::persistence::KeyValueStore;
use crate::platform::{NamePrompt, SceneLoader};
use crate::renderer::Renderer;

/// Collaborators owned by the host and lent to the systems for one frame
pub struct Services<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn Audio,
    pub scenes: &'a mut dyn SceneLoader,
    pub prompt: &'a mut dyn NamePrompt,
    pub store: &'a mut dyn KeyValueStore,
}
