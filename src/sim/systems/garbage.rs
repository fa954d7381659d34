//! Removes entities that have left the window

use crate::consts::{GAME_WINDOW_HEIGHT, GAME_WINDOW_WIDTH};
use crate::sim::components::Graphics2D;
use crate::sim::ecs::Entity;
use crate::sim::world::World;

pub fn tick(world: &mut World) {
    let player = world.player;
    let before = world.entities.len();
    world
        .entities
        .retain(|e| e.id == player || !is_off_screen(e));
    let removed = before - world.entities.len();
    if removed > 0 {
        log::debug!("Collected {removed} off-screen entities");
    }
}

/// True when the entity's graphics lie fully outside the window
fn is_off_screen(entity: &Entity) -> bool {
    let Some(g) = entity.get::<Graphics2D>() else {
        return false;
    };
    g.position.x + g.width < 0.0
        || g.position.x > GAME_WINDOW_WIDTH
        || g.position.y + g.height < 0.0
        || g.position.y > GAME_WINDOW_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::settings::Settings;
    use crate::sim::ecs::EntityKind;
    use crate::sim::scene::{FoodType, spawn_food};
    use glam::Vec2;

    fn world() -> World {
        World::new(Settings::default(), HighScores::new(), 1).unwrap()
    }

    #[test]
    fn test_food_below_window_removed() {
        let mut world = world();
        let gone = spawn_food(&mut world.entities, Vec2::new(20.0, 501.0), FoodType::Cupcake, 0)
            .unwrap();
        let partly_visible = spawn_food(
            &mut world.entities,
            Vec2::new(20.0, 480.0),
            FoodType::Cupcake,
            0,
        )
        .unwrap();

        tick(&mut world);
        assert!(!world.entities.contains(gone));
        assert!(world.entities.contains(partly_visible));
        assert_eq!(world.entities.count_kind(EntityKind::Tile), 10);
    }

    #[test]
    fn test_player_never_collected() {
        let mut world = world();
        let player = world.player;
        world.entities.get_mut::<Graphics2D>(player).unwrap().position = Vec2::new(0.0, 900.0);
        tick(&mut world);
        assert!(world.entities.contains(world.player));
    }
}
