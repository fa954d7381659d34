//! Bombs that reach the ground break the tiles they land on

use crate::audio::{Audio, Sfx, play_or_skip};
use crate::sim::components::{Collision2D, ComponentKind, Consumable};
use crate::sim::ecs::{EcsError, EntityId, EntityKind};
use crate::sim::world::World;

pub fn tick(world: &mut World, audio: &mut dyn Audio) -> Result<(), EcsError> {
    let candidates = world
        .entities
        .query(&[ComponentKind::Consumable, ComponentKind::Collision2D]);

    for bomb in candidates {
        if !world.entities.get::<Consumable>(bomb)?.is_bomb {
            continue;
        }
        let hits = &world.entities.get::<Collision2D>(bomb)?.colliding_entities;
        // Caught bombs are handled by the score system
        if hits.contains(&world.player) {
            continue;
        }
        let tiles: Vec<EntityId> = hits
            .iter()
            .copied()
            .filter(|id| world.entities.entity(*id).is_ok_and(|e| e.kind == EntityKind::Tile))
            .collect();
        if tiles.is_empty() {
            continue;
        }

        for tile in &tiles {
            world.entities.remove(*tile);
        }
        world.entities.remove(bomb);
        play_or_skip(audio, Sfx::Drop);
        log::debug!("Bomb {bomb} broke {} tile(s)", tiles.len());
    }
    Ok(())
}
