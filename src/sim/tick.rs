//! Fixed timestep driver
//!
//! Accumulates frame time and runs the systems once per fixed tick. Scene
//! loads started by the level flow are polled between ticks, and their
//! continuation runs there, never in the middle of a tick.

use super::scene::SceneId;
use super::state::LevelPhase;
use super::systems::level::{self, SceneRequest};
use super::systems::{
    Services, food_spawn, garbage, movement, player_state, render, score, tile_breaking,
};
use super::world::World;
use crate::consts::{MAX_SCENE_LOAD_ATTEMPTS, MAX_TICKS_PER_FRAME};
use crate::error::GameError;
use crate::platform::Key;

#[derive(Debug, Clone, Copy)]
struct PendingLoad {
    request: SceneRequest,
    attempts: u32,
}

/// Game loop state owned by the host
#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    accumulator: f64,
    pending: Option<PendingLoad>,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            accumulator: 0.0,
            pending: None,
        }
    }

    /// Load the initial scene; the start screen shows once it is ready
    pub fn start(&mut self, services: &mut Services<'_>) {
        log::info!("[Game] Starting");
        self.world.state.phase = LevelPhase::Ready;
        self.world.state.paused = true;
        self.world.clock.suspend();
        self.begin_load(
            SceneRequest {
                scene: SceneId::INITIAL,
                is_initial: true,
            },
            services,
        );
    }

    fn begin_load(&mut self, request: SceneRequest, services: &mut Services<'_>) {
        services.scenes.begin_load(request.scene, request.is_initial);
        self.pending = Some(PendingLoad { request, attempts: 1 });
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance by `dt_ms` of real time
    pub fn frame(&mut self, dt_ms: f64, services: &mut Services<'_>) -> Result<(), GameError> {
        let tick_ms = self.world.settings.tick_ms();
        let max_backlog = tick_ms * f64::from(MAX_TICKS_PER_FRAME);
        self.accumulator = (self.accumulator + dt_ms.max(0.0)).min(max_backlog);

        self.poll_scene_load(services)?;
        if self.world.state.paused {
            log::debug!("[Game] Paused ({:?})", self.world.state.phase);
        }

        while self.accumulator >= tick_ms {
            self.accumulator -= tick_ms;
            self.tick(services)?;
            self.poll_scene_load(services)?;
        }
        Ok(())
    }

    /// Run every system once, unless paused
    pub fn tick(&mut self, services: &mut Services<'_>) -> Result<(), GameError> {
        if self.world.state.paused {
            return Ok(());
        }
        let world = &mut self.world;
        world.clock.advance(world.settings.tick_ms());

        food_spawn::tick(world)?;
        movement::tick(world)?;
        player_state::tick(world)?;
        tile_breaking::tick(world, services.audio)?;
        score::tick(world, services.audio)?;
        render::tick(world, services.renderer);
        garbage::tick(world);
        if let Some(request) = level::tick(world, services) {
            self.pending = Some(PendingLoad { request, attempts: 1 });
        }
        Ok(())
    }

    fn poll_scene_load(&mut self, services: &mut Services<'_>) -> Result<(), GameError> {
        let Some(pending) = self.pending else {
            return Ok(());
        };
        match services.scenes.poll() {
            None => Ok(()),
            Some(Ok(scene)) => {
                self.pending = None;
                level::finish_load(&mut self.world, services, scene)?;
                Ok(())
            }
            Some(Err(err)) if pending.attempts < MAX_SCENE_LOAD_ATTEMPTS => {
                let request = pending.request;
                log::warn!(
                    "[Game] Loading {} failed (attempt {}/{}): {err}",
                    request.scene.name(),
                    pending.attempts,
                    MAX_SCENE_LOAD_ATTEMPTS
                );
                services.scenes.begin_load(request.scene, request.is_initial);
                self.pending = Some(PendingLoad {
                    request,
                    attempts: pending.attempts + 1,
                });
                Ok(())
            }
            Some(Err(source)) => {
                self.pending = None;
                Err(GameError::SceneLoad {
                    scene: pending.request.scene,
                    attempts: pending.attempts,
                    source,
                })
            }
        }
    }

    /// Key press: movement intents, plus "any key" on the start and
    /// game-over screens
    pub fn key_down(&mut self, key: Key, services: &mut Services<'_>) {
        self.world.input.key_down(key);
        if self.pending.is_some() {
            return;
        }
        let state = &mut self.world.state;
        match state.phase {
            LevelPhase::Ready => {
                log::info!("[Game] Play started");
                state.resume_play();
                self.world.clock.resume();
                services.audio.resume_music();
            }
            LevelPhase::GameOver => {
                state.restart = true;
                state.resume_play();
            }
            LevelPhase::Playing if key == Key::Restart => {
                state.restart = true;
            }
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.world.input.key_up(key);
    }
}
