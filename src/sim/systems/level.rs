//! Level flow: restart, game over, and progression between worlds
//!
//! A transition is split in two. `tick` pauses the game and starts loading
//! the next scene; `finish_load` runs once that load has completed and
//! applies whatever the current `LevelPhase` asks for.

use super::{Services, render};
use crate::sim::ecs::EcsError;
use crate::sim::scene::{SceneId, load_scene_entities, reset_player};
use crate::sim::state::LevelPhase;
use crate::sim::world::World;

/// A scene load started by the level flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRequest {
    pub scene: SceneId,
    pub is_initial: bool,
}

/// Check restart, game over and progression, in that order.
/// Returns the load it started, if any.
pub fn tick(world: &mut World, services: &mut Services<'_>) -> Option<SceneRequest> {
    let (phase, request) = if world.state.restart {
        log::info!("[Level] Restart requested");
        (LevelPhase::Restarting, initial_request())
    } else if world.state.game_over {
        record_score(world, services);
        (LevelPhase::GameOver, initial_request())
    } else if let Some((_, next)) = world
        .scene
        .progression()
        .filter(|(threshold, _)| world.state.score > *threshold)
    {
        log::info!(
            "[Level] Score {} unlocks {}",
            world.state.score,
            next.name()
        );
        (
            LevelPhase::Transitioning(next),
            SceneRequest {
                scene: next,
                is_initial: false,
            },
        )
    } else {
        return None;
    };

    world.state.paused = true;
    world.state.phase = phase;
    world.clock.suspend();
    services.audio.clear();
    services.scenes.begin_load(request.scene, request.is_initial);
    Some(request)
}

fn initial_request() -> SceneRequest {
    SceneRequest {
        scene: SceneId::INITIAL,
        is_initial: true,
    }
}

fn record_score(world: &mut World, services: &mut Services<'_>) {
    let score = world.state.score;
    log::info!("[Level] Game over with score {score}");
    let Some(name) = services.prompt.prompt_player_name() else {
        return;
    };
    if world.state.highscores.record(&name, score) {
        world.state.highscores.save(services.store);
    }
}

/// Continuation of a completed scene load
pub fn finish_load(
    world: &mut World,
    services: &mut Services<'_>,
    scene: SceneId,
) -> Result<(), EcsError> {
    load_scene_entities(&mut world.entities, scene, world.player)?;
    world.scene = scene;
    render::draw_background(services.renderer);
    log::info!("[Level] Entered {} ({:?})", scene.name(), world.state.phase);

    match world.state.phase {
        LevelPhase::Transitioning(_) => {
            reset_player(&mut world.entities, world.player)?;
            world.clock.resume();
            world.state.resume_play();
            services.audio.resume_music();
        }
        LevelPhase::Restarting => {
            reset_run(world)?;
            world.state.resume_play();
            services.audio.resume_music();
        }
        LevelPhase::GameOver => {
            reset_run(world)?;
            world.clock.suspend();
            world.state.paused = true;
            render::draw_game_over_screen(&world.state.highscores, services.renderer);
        }
        LevelPhase::Ready => {
            reset_run(world)?;
            world.clock.suspend();
            world.state.paused = true;
            render::draw_start_message(services.renderer);
        }
        LevelPhase::Playing => {
            log::warn!("[Level] Scene {} loaded with no transition pending", scene.name());
        }
    }
    Ok(())
}

/// Fresh run: state, player and clock back to their starting values
fn reset_run(world: &mut World) -> Result<(), EcsError> {
    world.state.reset();
    reset_player(&mut world.entities, world.player)?;
    world.clock.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HeadlessAudio;
    use crate::highscores::HighScores;
    use crate::persistence::{KeyValueStore, MemoryStore};
    use crate::platform::{FixedName, PreloadedScenes};
    use crate::renderer::HeadlessRenderer;
    use crate::settings::Settings;
    use crate::sim::ecs::EntityKind;
    use crate::sim::scene::{FoodType, spawn_food};
    use glam::Vec2;

    struct Harness {
        renderer: HeadlessRenderer,
        audio: HeadlessAudio,
        scenes: PreloadedScenes,
        prompt: FixedName,
        store: MemoryStore,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                renderer: HeadlessRenderer::default(),
                audio: HeadlessAudio::default(),
                scenes: PreloadedScenes::default(),
                prompt: FixedName::new("ada"),
                store: MemoryStore::default(),
            }
        }

        fn services(&mut self) -> Services<'_> {
            Services {
                renderer: &mut self.renderer,
                audio: &mut self.audio,
                scenes: &mut self.scenes,
                prompt: &mut self.prompt,
                store: &mut self.store,
            }
        }
    }

    fn playing_world() -> World {
        let mut world = World::new(Settings::default(), HighScores::new(), 1).unwrap();
        world.state.resume_play();
        world
    }

    #[test]
    fn test_nothing_to_do() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.score = 10;

        assert_eq!(tick(&mut world, &mut harness.services()), None);
        assert!(!world.state.paused);
        assert!(harness.scenes.loads.is_empty());
    }

    #[test]
    fn test_progression_past_threshold() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.score = 11;

        let request = tick(&mut world, &mut harness.services()).unwrap();
        assert_eq!(request.scene, SceneId::SpaceWorld);
        assert!(!request.is_initial);
        assert!(world.state.paused);
        assert!(world.clock.is_suspended());
        assert_eq!(world.state.phase, LevelPhase::Transitioning(SceneId::SpaceWorld));
        assert_eq!(harness.audio.clears, 1);
        assert_eq!(harness.scenes.loads, vec![(SceneId::SpaceWorld, false)]);
    }

    #[test]
    fn test_second_progression_and_last_world() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.scene = SceneId::SpaceWorld;
        world.state.score = 21;
        let request = tick(&mut world, &mut harness.services()).unwrap();
        assert_eq!(request.scene, SceneId::MountainWorld);

        let mut world = playing_world();
        world.scene = SceneId::MountainWorld;
        world.state.score = 500;
        assert_eq!(tick(&mut world, &mut harness.services()), None);
    }

    #[test]
    fn test_restart_beats_game_over() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.restart = true;
        world.state.game_over = true;
        world.state.score = 15;

        let request = tick(&mut world, &mut harness.services()).unwrap();
        assert_eq!(request, initial_request());
        assert_eq!(world.state.phase, LevelPhase::Restarting);
        // No name prompt, nothing recorded
        assert!(world.state.highscores.is_empty());
        assert!(harness.store.get(HighScores::STORAGE_KEY).is_none());
    }

    #[test]
    fn test_game_over_records_and_persists() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.game_over = true;
        world.state.score = 15;

        tick(&mut world, &mut harness.services()).unwrap();
        assert_eq!(world.state.phase, LevelPhase::GameOver);
        assert_eq!(world.state.highscores.get("ada"), Some(15));
        assert_eq!(HighScores::load(&harness.store).get("ada"), Some(15));
        assert_eq!(harness.scenes.loads, vec![(SceneId::INITIAL, true)]);
    }

    #[test]
    fn test_game_over_overwrites_earlier_entry() {
        let mut seeded = HighScores::new();
        seeded.record("ada", 30);
        let mut world = World::new(Settings::default(), seeded, 1).unwrap();
        world.state.resume_play();
        let mut harness = Harness::new();
        world.state.game_over = true;
        world.state.score = 5;

        tick(&mut world, &mut harness.services()).unwrap();
        assert_eq!(world.state.highscores.get("ada"), Some(5));
        assert_eq!(HighScores::load(&harness.store).get("ada"), Some(5));
    }

    #[test]
    fn test_game_over_without_name_records_nothing() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        harness.prompt = FixedName(None);
        world.state.game_over = true;
        world.state.score = 15;

        tick(&mut world, &mut harness.services()).unwrap();
        assert!(world.state.highscores.is_empty());
        assert_eq!(world.state.phase, LevelPhase::GameOver);
    }

    #[test]
    fn test_finish_transition_keeps_score() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.score = 11;
        spawn_food(&mut world.entities, Vec2::new(20.0, 20.0), FoodType::Cupcake, 0).unwrap();
        tick(&mut world, &mut harness.services()).unwrap();

        finish_load(&mut world, &mut harness.services(), SceneId::SpaceWorld).unwrap();
        assert_eq!(world.scene, SceneId::SpaceWorld);
        assert_eq!(world.state.score, 11);
        assert!(!world.state.paused);
        assert_eq!(world.state.phase, LevelPhase::Playing);
        assert!(!world.clock.is_suspended());
        assert!(harness.audio.music_playing);
        assert_eq!(world.entities.count_kind(EntityKind::Food), 0);
        assert_eq!(world.entities.count_kind(EntityKind::Tile), 10);
        assert!(world.entities.contains(world.player));
    }

    #[test]
    fn test_finish_restart_resets_run() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.scene = SceneId::MountainWorld;
        world.state.score = 33;
        world.state.lives = 1;
        world.state.restart = true;
        world.clock.advance(5000.0);
        tick(&mut world, &mut harness.services()).unwrap();

        finish_load(&mut world, &mut harness.services(), SceneId::INITIAL).unwrap();
        assert_eq!(world.scene, SceneId::CupcakeWorld);
        assert_eq!(world.state.score, 0);
        assert_eq!(world.state.lives, 3);
        assert!(!world.state.restart);
        assert_eq!(world.clock.elapsed_ms(), 0.0);
        assert!(!world.state.paused);
    }

    #[test]
    fn test_finish_game_over_shows_table_and_stays_paused() {
        let mut world = playing_world();
        let mut harness = Harness::new();
        world.state.game_over = true;
        world.state.score = 9;
        tick(&mut world, &mut harness.services()).unwrap();
        harness.renderer.take();

        finish_load(&mut world, &mut harness.services(), SceneId::INITIAL).unwrap();
        assert!(world.state.paused);
        assert!(!world.state.game_over);
        assert_eq!(world.state.phase, LevelPhase::GameOver);
        assert!(world.clock.is_suspended());
        let texts = harness.renderer.texts();
        assert!(texts.contains(&"1. ada: 9"));
        assert!(texts.contains(&"Game Over"));
        assert!(texts.contains(&"Press any key to restart"));
    }

    #[test]
    fn test_finish_initial_load_shows_start_message() {
        let mut world = World::new(Settings::default(), HighScores::new(), 1).unwrap();
        let mut harness = Harness::new();

        finish_load(&mut world, &mut harness.services(), SceneId::INITIAL).unwrap();
        assert!(world.state.paused);
        assert_eq!(world.state.phase, LevelPhase::Ready);
        assert_eq!(harness.renderer.texts(), vec!["Press any key to start"]);
    }
}
