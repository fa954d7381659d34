//! Player pose, falling out of the world, and the game-over flag

use crate::consts::{GAME_WINDOW_HEIGHT, PLAYER_HURT_TICKS};
use crate::sim::components::{
    AnimatedSprite, Collision2D, ComponentKind, Consumable, Graphics2D, Movement2D,
};
use crate::sim::ecs::EcsError;
use crate::sim::scene::{player_frames, reset_player};
use crate::sim::world::World;

pub fn tick(world: &mut World) -> Result<(), EcsError> {
    let player = world.player;

    if world.entities.get::<Graphics2D>(player)?.position.y > GAME_WINDOW_HEIGHT {
        world.state.lives -= 1;
        log::info!("Player fell out of the world, {} lives left", world.state.lives);
        reset_player(&mut world.entities, player)?;
    }

    let touched_bomb = world
        .entities
        .get::<Collision2D>(player)?
        .colliding_entities
        .iter()
        .any(|id| world.entities.get::<Consumable>(*id).is_ok_and(|c| c.is_bomb));
    if touched_bomb {
        world.state.hurt_ticks = PLAYER_HURT_TICKS;
    }

    let movement = *world.entities.get::<Movement2D>(player)?;
    let frames = if world.state.hurt_ticks > 0 {
        world.state.hurt_ticks -= 1;
        player_frames::HURT
    } else if !movement.grounded {
        player_frames::JUMP
    } else if movement.velocity.x != 0.0 {
        player_frames::WALK
    } else {
        player_frames::DEFAULT
    };
    world.entities.get_mut::<AnimatedSprite>(player)?.set_frames(frames);

    for id in world.entities.query(&[ComponentKind::AnimatedSprite]) {
        world.entities.get_mut::<AnimatedSprite>(id)?.advance();
    }

    if world.state.lives <= 0 && !world.state.game_over {
        log::info!("[Game] Out of lives, game over at score {}", world.state.score);
        world.state.game_over = true;
    }
    Ok(())
}
