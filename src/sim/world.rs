//! Simulation context passed to every system

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ecs::{EcsError, EntityId, EntityList};
use super::scene::{SceneId, spawn_player};
use super::state::GameState;
use crate::highscores::HighScores;
use crate::platform::{InputState, RunClock};
use crate::settings::Settings;

/// Everything the systems read and write during a tick
#[derive(Debug, Clone)]
pub struct World {
    pub state: GameState,
    pub entities: EntityList,
    pub clock: RunClock,
    pub rng: Pcg32,
    pub input: InputState,
    pub settings: Settings,
    /// Scene whose assets and entities are active
    pub scene: SceneId,
    pub player: EntityId,
}

impl World {
    /// Build the world with the player spawned and the initial scene populated
    pub fn new(settings: Settings, highscores: HighScores, seed: u64) -> Result<Self, EcsError> {
        let mut entities = EntityList::new();
        let player = spawn_player(&mut entities)?;
        let scene = SceneId::INITIAL;
        scene.populate(&mut entities)?;

        let state = GameState::new(
            settings.starting_lives,
            settings.food_spawn_interval_ms as f64,
            highscores,
        );

        Ok(Self {
            state,
            entities,
            clock: RunClock::new(),
            rng: Pcg32::seed_from_u64(seed),
            input: InputState::default(),
            settings,
            scene,
            player,
        })
    }
}
