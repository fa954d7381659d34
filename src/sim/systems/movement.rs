//! Movement and falling
//!
//! Moves the player from the held input intents, drops falling food by its
//! weight, then runs the collision pass on the new positions.

use glam::Vec2;

use super::collision;
use crate::consts::{GAME_WINDOW_WIDTH, PLAYER_GRAVITY, PLAYER_JUMP_SPEED, PLAYER_SPEED};
use crate::sim::components::{Collision2D, ComponentKind, Graphics2D, Gravity2D, Movement2D};
use crate::sim::ecs::{EcsError, EntityId, EntityKind, EntityList};
use crate::sim::world::World;

pub fn tick(world: &mut World) -> Result<(), EcsError> {
    move_player(world)?;
    apply_gravity(&mut world.entities)?;
    collision::tick(&mut world.entities)
}

/// Shift an entity's graphics and collider together
pub fn translate_entity(
    entities: &mut EntityList,
    id: EntityId,
    delta: Vec2,
) -> Result<(), EcsError> {
    entities.get_mut::<Graphics2D>(id)?.position += delta;
    if let Some(collision) = entities.entity_mut(id)?.get_mut::<Collision2D>() {
        collision.collider = collision.collider.translate(delta);
    }
    Ok(())
}

fn move_player(world: &mut World) -> Result<(), EcsError> {
    let player = world.player;
    let speed = PLAYER_SPEED + world.state.tuning.player_speed_tier as f32;

    let mut movement = *world.entities.get::<Movement2D>(player)?;
    movement.velocity.x = world.input.horizontal() * speed;
    if world.input.jump && movement.grounded {
        movement.velocity.y = -PLAYER_JUMP_SPEED;
        movement.grounded = false;
    }
    if !movement.grounded {
        movement.velocity.y += PLAYER_GRAVITY;
    }

    let graphics = world.entities.get::<Graphics2D>(player)?;
    let (start, width, height) = (graphics.position, graphics.width, graphics.height);
    let mut target = start + movement.velocity;
    target.x = target.x.clamp(0.0, GAME_WINDOW_WIDTH - width);

    // Land on a tile when the feet cross its top edge while falling
    movement.grounded = false;
    if movement.velocity.y >= 0.0 {
        let feet = (start.y + height, target.y + height);
        if let Some(top) = support_below(&world.entities, target.x, width, feet.0, feet.1) {
            target.y = top - height;
            movement.velocity.y = 0.0;
            movement.grounded = true;
        }
    }

    *world.entities.get_mut::<Movement2D>(player)? = movement;
    translate_entity(&mut world.entities, player, target - start)
}

/// Top edge of a tile under `[x, x + width)` that the feet reach this tick
fn support_below(
    entities: &EntityList,
    x: f32,
    width: f32,
    feet_before: f32,
    feet_after: f32,
) -> Option<f32> {
    entities
        .iter()
        .filter(|e| e.kind == EntityKind::Tile)
        .filter_map(|e| e.get::<Graphics2D>())
        .filter(|tile| tile.position.x < x + width && x < tile.position.x + tile.width)
        .map(|tile| tile.position.y)
        .filter(|top| feet_before <= *top && feet_after >= *top)
        .reduce(f32::min)
}

/// Constant-speed fall for every entity with `Gravity2D`
fn apply_gravity(entities: &mut EntityList) -> Result<(), EcsError> {
    for id in entities.query(&[ComponentKind::Gravity2D, ComponentKind::Graphics2D]) {
        let weight = entities.get::<Gravity2D>(id)?.weight;
        translate_entity(entities, id, Vec2::new(0.0, weight))?;
    }
    Ok(())
}
