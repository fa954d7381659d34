//! Food spawning
//!
//! Drops one food item from a random column each time the spawn interval
//! has passed in run time.

use glam::Vec2;
use rand::Rng;

use crate::consts::{BOMB_CHANCE, FOOD_SPAWN_COLUMNS, FOOD_SPAWN_Y};
use crate::sim::ecs::EcsError;
use crate::sim::scene::{FoodType, SceneId, spawn_food};
use crate::sim::world::World;

pub fn tick(world: &mut World) -> Result<(), EcsError> {
    let now = world.clock.elapsed_ms();
    let due = world.state.tuning.last_food_spawn_ms + world.state.food_spawn_interval_ms;
    if now <= due {
        return Ok(());
    }
    world.state.tuning.last_food_spawn_ms = now;

    let column = FOOD_SPAWN_COLUMNS[world.rng.random_range(0..FOOD_SPAWN_COLUMNS.len())];
    let food = choose_food(world.scene, world.rng.random_bool(BOMB_CHANCE));
    let id = spawn_food(
        &mut world.entities,
        Vec2::new(column, FOOD_SPAWN_Y),
        food,
        world.state.tuning.item_speed_tier,
    )?;
    log::debug!("Spawned {} {id} at x={column}", food.name());
    Ok(())
}

/// The scene's food, or a bomb when the bomb roll hit
pub fn choose_food(scene: SceneId, bomb_rolled: bool) -> FoodType {
    if bomb_rolled {
        FoodType::Bomb
    } else {
        scene.base_food()
    }
}
