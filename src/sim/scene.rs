//! Scenes and entity factories
//!
//! Each scene spawns a row of ground tiles and chooses which food falls.
//! The player entity is created once and survives scene loads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::components::{
    AnimatedSprite, Collision2D, CollisionLayer, Consumable, Graphics2D, Gravity2D, Movement2D,
};
use super::ecs::{EcsError, EntityId, EntityKind, EntityList};
use super::geometry::{Circle, Collider, Rect};
use crate::consts::*;
use crate::renderer::FontColor;

/// The three worlds, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    CupcakeWorld,
    SpaceWorld,
    MountainWorld,
}

impl SceneId {
    pub const INITIAL: SceneId = SceneId::CupcakeWorld;

    pub fn name(&self) -> &'static str {
        match self {
            SceneId::CupcakeWorld => "Cupcake World",
            SceneId::SpaceWorld => "Space World",
            SceneId::MountainWorld => "Mountain World",
        }
    }

    pub fn font_color(&self) -> FontColor {
        match self {
            SceneId::CupcakeWorld => FontColor::Dark,
            SceneId::SpaceWorld | SceneId::MountainWorld => FontColor::Light,
        }
    }

    /// Food spawned here when no bomb is rolled
    pub fn base_food(&self) -> FoodType {
        match self {
            SceneId::CupcakeWorld => FoodType::Cupcake,
            SceneId::SpaceWorld => FoodType::Star,
            SceneId::MountainWorld => FoodType::IceCream,
        }
    }

    /// Next scene and the score that must be exceeded to reach it
    pub fn progression(&self) -> Option<(u32, SceneId)> {
        match self {
            SceneId::CupcakeWorld => Some((SECOND_LEVEL_SCORE, SceneId::SpaceWorld)),
            SceneId::SpaceWorld => Some((THIRD_LEVEL_SCORE, SceneId::MountainWorld)),
            SceneId::MountainWorld => None,
        }
    }

    /// Create the scene's own entities (the ground row)
    pub fn populate(&self, entities: &mut EntityList) -> Result<(), EcsError> {
        for i in 0..TILES_PER_ROW {
            let tile = match i {
                0 => TileType::Left,
                i if i == TILES_PER_ROW - 1 => TileType::Right,
                _ => TileType::Mid,
            };
            spawn_tile(entities, Vec2::new(i as f32 * TILE_SIZE, GROUND_LEVEL), tile)?;
        }
        Ok(())
    }
}

/// Swap the scene entities: everything but the player is dropped
pub fn load_scene_entities(
    entities: &mut EntityList,
    scene: SceneId,
    player: EntityId,
) -> Result<(), EcsError> {
    entities.retain(|e| e.id == player);
    scene.populate(entities)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    Cupcake,
    Fruit,
    Star,
    IceCream,
    Bomb,
}

impl FoodType {
    /// Image id
    pub fn name(&self) -> &'static str {
        match self {
            FoodType::Cupcake => "cupcake",
            FoodType::Fruit => "fruit",
            FoodType::Star => "star",
            FoodType::IceCream => "icecream",
            FoodType::Bomb => "bomb",
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            FoodType::Cupcake => 1,
            FoodType::Fruit => 3,
            FoodType::Star | FoodType::IceCream => 2,
            FoodType::Bomb => 0,
        }
    }

    /// Base fall speed
    pub fn weight(&self) -> f32 {
        match self {
            FoodType::Cupcake => 3.0,
            FoodType::Fruit => 5.0,
            FoodType::Star => 4.0,
            FoodType::IceCream | FoodType::Bomb => 6.0,
        }
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, FoodType::Bomb)
    }
}

/// Spawn a falling food item with its top-left at `position`
pub fn spawn_food(
    entities: &mut EntityList,
    position: Vec2,
    food: FoodType,
    item_speed_tier: u32,
) -> Result<EntityId, EcsError> {
    let id = entities.create(EntityKind::Food);
    entities.add_component(id, Consumable::new(food.value(), food.is_bomb()))?;
    entities.add_component(id, Graphics2D::new(position, FOOD_SIZE, FOOD_SIZE, food.name()))?;
    entities.add_component(
        id,
        Collision2D::new(
            Collider::Circle(Circle::from_dimensions(position, FOOD_SIZE, FOOD_SIZE)),
            CollisionLayer::Food,
        ),
    )?;
    entities.add_component(id, Gravity2D::new(food.weight() + item_speed_tier as f32))?;
    Ok(id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Left,
    Mid,
    Right,
}

impl TileType {
    pub fn image_id(&self) -> &'static str {
        match self {
            TileType::Left => "tile_left",
            TileType::Mid => "tile_mid",
            TileType::Right => "tile_right",
        }
    }
}

pub fn spawn_tile(
    entities: &mut EntityList,
    position: Vec2,
    tile: TileType,
) -> Result<EntityId, EcsError> {
    let id = entities.create(EntityKind::Tile);
    entities.add_component(id, Graphics2D::new(position, TILE_SIZE, TILE_SIZE, tile.image_id()))?;
    entities.add_component(
        id,
        Collision2D::new(
            Collider::Rect(Rect {
                position,
                width: TILE_SIZE,
                height: TILE_SIZE,
            }),
            CollisionLayer::Tile,
        ),
    )?;
    Ok(id)
}

/// Player sprite frames by pose
pub mod player_frames {
    pub const DEFAULT: &[&str] = &["player_default"];
    pub const HURT: &[&str] = &["player_hurt"];
    pub const JUMP: &[&str] = &["player_jump"];
    pub const WALK: &[&str] = &["player_walk_1", "player_walk_2", "player_walk_3"];
}

pub fn spawn_player(entities: &mut EntityList) -> Result<EntityId, EcsError> {
    let id = entities.create(EntityKind::Player);
    entities.add_component(
        id,
        Graphics2D::new(PLAYER_START, PLAYER_WIDTH, PLAYER_HEIGHT, "player_default"),
    )?;
    entities.add_component(id, Movement2D::default())?;
    entities.add_component(id, AnimatedSprite::new(player_frames::DEFAULT, WALK_TICKS_PER_FRAME))?;
    entities.add_component(
        id,
        Collision2D::new(Collider::Rect(player_box(PLAYER_START)), CollisionLayer::Player),
    )?;
    reset_player(entities, id)?;
    Ok(id)
}

/// Put the player back at the start position, standing still
pub fn reset_player(entities: &mut EntityList, player: EntityId) -> Result<(), EcsError> {
    entities.get_mut::<Graphics2D>(player)?.position = PLAYER_START;
    *entities.get_mut::<Movement2D>(player)? = Movement2D {
        velocity: Vec2::ZERO,
        grounded: true,
    };
    entities
        .get_mut::<AnimatedSprite>(player)?
        .set_frames(player_frames::DEFAULT);
    let collision = entities.get_mut::<Collision2D>(player)?;
    collision.collider = Collider::Rect(player_box(PLAYER_START))
        .translate(Vec2::new(collision.offset, 0.0));
    collision.reset_collisions();
    Ok(())
}

fn player_box(position: Vec2) -> Rect {
    Rect {
        position,
        width: PLAYER_WIDTH,
        height: PLAYER_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::components::ComponentKind;

    #[test]
    fn test_populate_ground_row() {
        let mut entities = EntityList::new();
        SceneId::SpaceWorld.populate(&mut entities).unwrap();
        let tiles: Vec<_> = entities.iter().collect();
        assert_eq!(tiles.len(), TILES_PER_ROW);

        let images: Vec<_> = tiles
            .iter()
            .map(|e| e.get::<Graphics2D>().unwrap().image_id.clone().unwrap())
            .collect();
        assert_eq!(images[0], "tile_left");
        assert_eq!(images[5], "tile_mid");
        assert_eq!(images[9], "tile_right");

        let last = tiles[9].get::<Graphics2D>().unwrap();
        assert_eq!(last.position, Vec2::new(450.0, GROUND_LEVEL));
    }

    #[test]
    fn test_food_components() {
        let mut entities = EntityList::new();
        let id = spawn_food(&mut entities, Vec2::new(80.0, 20.0), FoodType::Star, 3).unwrap();

        let consumable = entities.get::<Consumable>(id).unwrap();
        assert_eq!(consumable.value, 2);
        assert!(!consumable.is_bomb);

        let graphics = entities.get::<Graphics2D>(id).unwrap();
        assert_eq!((graphics.width, graphics.height), (44.0, 44.0));
        assert_eq!(graphics.image_id.as_deref(), Some("star"));

        let collision = entities.get::<Collision2D>(id).unwrap();
        assert_eq!(collision.layer, CollisionLayer::Food);
        assert_eq!(
            collision.collider,
            Collider::Circle(Circle::new(Vec2::new(102.0, 42.0), 22.0))
        );

        assert_eq!(entities.get::<Gravity2D>(id).unwrap().weight, 7.0);
    }

    #[test]
    fn test_bomb_food() {
        let mut entities = EntityList::new();
        let id = spawn_food(&mut entities, Vec2::ZERO, FoodType::Bomb, 0).unwrap();
        assert!(entities.get::<Consumable>(id).unwrap().is_bomb);
    }

    #[test]
    fn test_scene_swap_keeps_player() {
        let mut entities = EntityList::new();
        let player = spawn_player(&mut entities).unwrap();
        SceneId::CupcakeWorld.populate(&mut entities).unwrap();
        spawn_food(&mut entities, Vec2::ZERO, FoodType::Cupcake, 0).unwrap();

        load_scene_entities(&mut entities, SceneId::SpaceWorld, player).unwrap();
        assert!(entities.contains(player));
        assert_eq!(entities.count_kind(EntityKind::Food), 0);
        assert_eq!(entities.count_kind(EntityKind::Tile), TILES_PER_ROW);
        assert_eq!(entities.query(&[ComponentKind::Consumable]).len(), 0);
    }

    #[test]
    fn test_reset_player() {
        let mut entities = EntityList::new();
        let player = spawn_player(&mut entities).unwrap();
        entities.get_mut::<Graphics2D>(player).unwrap().position = Vec2::new(0.0, 900.0);
        entities.get_mut::<Movement2D>(player).unwrap().velocity = Vec2::new(3.0, 5.0);

        reset_player(&mut entities, player).unwrap();
        assert_eq!(entities.get::<Graphics2D>(player).unwrap().position, PLAYER_START);
        assert_eq!(entities.get::<Movement2D>(player).unwrap().velocity, Vec2::ZERO);
        assert_eq!(
            entities.get::<Collision2D>(player).unwrap().collider,
            Collider::Rect(player_box(PLAYER_START))
        );
    }
}
