//! Eating food and catching bombs
//!
//! Everything the player touched this tick that carries a `Consumable` is
//! consumed: food adds its value to the score, a bomb costs a life. Lives are
//! not clamped here; the player state system raises the game-over flag.

use crate::audio::{Audio, Sfx, play_or_skip};
use crate::sim::components::{Collision2D, Consumable};
use crate::sim::ecs::EcsError;
use crate::sim::world::World;

pub fn tick(world: &mut World, audio: &mut dyn Audio) -> Result<(), EcsError> {
    let touched = world
        .entities
        .get::<Collision2D>(world.player)?
        .colliding_entities
        .clone();

    for id in touched {
        // Entities removed earlier this tick are skipped
        let Ok(consumable) = world.entities.get::<Consumable>(id).copied() else {
            continue;
        };

        if consumable.is_bomb {
            play_or_skip(audio, Sfx::Bomb);
            world.state.lives -= 1;
        } else {
            play_or_skip(audio, Sfx::Eat);
            world.state.score += consumable.value;
        }

        // Exact match only: a jump over a threshold skips that tier
        if world.state.tuning.apply_score_tier(world.state.score) {
            log::info!(
                "Speed tier reached at score {}: item +{}, player +{}",
                world.state.score,
                world.state.tuning.item_speed_tier,
                world.state.tuning.player_speed_tier
            );
        }

        world.entities.remove(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HeadlessAudio;
    use crate::consts::PLAYER_START;
    use crate::highscores::HighScores;
    use crate::settings::Settings;
    use crate::sim::ecs::EntityId;
    use crate::sim::scene::{FoodType, spawn_food};
    use crate::sim::state::RunTuning;

    fn world() -> World {
        World::new(Settings::default(), HighScores::new(), 1).unwrap()
    }

    /// Put a consumable in contact with the player
    fn touch(world: &mut World, food: FoodType) -> EntityId {
        let id = spawn_food(&mut world.entities, PLAYER_START, food, 0).unwrap();
        world
            .entities
            .get_mut::<Collision2D>(world.player)
            .unwrap()
            .add_collision(id);
        id
    }

    fn touch_value(world: &mut World, value: u32) -> EntityId {
        let id = touch(world, FoodType::Cupcake);
        world.entities.get_mut::<Consumable>(id).unwrap().value = value;
        id
    }

    #[test]
    fn test_food_adds_value_and_is_removed() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        let star = touch(&mut world, FoodType::Star);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 2);
        assert_eq!(world.state.lives, 3);
        assert!(!world.entities.contains(star));
        assert_eq!(audio.played, vec![Sfx::Eat]);
    }

    #[test]
    fn test_bomb_costs_life_only() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        world.state.score = 5;
        let bomb = touch(&mut world, FoodType::Bomb);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 5);
        assert_eq!(world.state.lives, 2);
        assert!(!world.entities.contains(bomb));
        assert_eq!(audio.played, vec![Sfx::Bomb]);
    }

    #[test]
    fn test_lives_not_clamped() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        world.state.lives = 0;
        touch(&mut world, FoodType::Bomb);
        touch(&mut world, FoodType::Bomb);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.lives, -2);
    }

    #[test]
    fn test_missing_sound_still_scores() {
        let mut world = world();
        let mut audio = HeadlessAudio::with_effects(&[]);
        touch(&mut world, FoodType::Cupcake);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 1);
        assert!(audio.played.is_empty());
    }

    #[test]
    fn test_non_consumables_and_removed_entities_ignored() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        let tile = world.entities.iter().find(|e| e.id != world.player).unwrap().id;
        let gone = touch(&mut world, FoodType::Cupcake);
        world.entities.remove(gone);
        world
            .entities
            .get_mut::<Collision2D>(world.player)
            .unwrap()
            .add_collision(tile);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 0);
        assert!(world.entities.contains(tile));
    }

    #[test]
    fn test_tier_applies_on_exact_threshold() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        world.state.score = 9;
        touch_value(&mut world, 1);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 10);
        assert_eq!(world.state.tuning.item_speed_tier, 1);
        assert_eq!(world.state.tuning.player_speed_tier, 1);
    }

    #[test]
    fn test_tier_skipped_when_jumping_over_threshold() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        world.state.score = 8;
        touch_value(&mut world, 4);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 12);
        assert_eq!(world.state.tuning, RunTuning::default());
    }

    #[test]
    fn test_tier_checked_after_each_consumption() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        world.state.score = 18;
        // 18 -> 20 (tier) -> 21 in the same tick
        touch_value(&mut world, 2);
        touch_value(&mut world, 1);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 21);
        assert_eq!(world.state.tuning.item_speed_tier, 3);
        assert_eq!(world.state.tuning.player_speed_tier, 2);
    }

    #[test]
    fn test_consumed_once_even_if_touched_twice() {
        let mut world = world();
        let mut audio = HeadlessAudio::default();
        let id = touch(&mut world, FoodType::Cupcake);
        world
            .entities
            .get_mut::<Collision2D>(world.player)
            .unwrap()
            .add_collision(id);

        tick(&mut world, &mut audio).unwrap();
        assert_eq!(world.state.score, 1);
    }
}
