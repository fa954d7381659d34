//! Entity-component simulation
//!
//! All gameplay logic lives here:
//! - Entities are plain ids with a closed set of component kinds
//! - Systems run in a fixed order once per tick
//! - Seeded RNG only; the host supplies rendering, audio and scene loading
//!   through the collaborator traits

pub mod components;
pub mod ecs;
pub mod geometry;
pub mod scene;
pub mod state;
pub mod systems;
pub mod tick;
pub mod world;

pub use components::{
    AnimatedSprite, Collision2D, CollisionLayer, Component, ComponentData, ComponentKind,
    Consumable, Graphics2D, Gravity2D, Movement2D,
};
pub use ecs::{EcsError, Entity, EntityId, EntityKind, EntityList};
pub use geometry::{Circle, Collider, Rect};
pub use scene::{FoodType, SceneId};
pub use state::{GameState, LevelPhase, RunTuning, SPEED_TIERS};
pub use systems::Services;
pub use tick::Game;
pub use world::World;
