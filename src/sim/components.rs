//! Component data
//!
//! Components hold per-entity attributes only. Cross-component reads go
//! through the owning entity in the `EntityList`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ecs::EntityId;
use super::geometry::Collider;

/// Every component kind an entity can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Collision2D,
    Consumable,
    Graphics2D,
    Movement2D,
    Gravity2D,
    AnimatedSprite,
}

/// Collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionLayer {
    Tile,
    Player,
    Food,
}

/// Shape used for overlap tests and the entities it touched this tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collision2D {
    pub collider: Collider,
    pub layer: CollisionLayer,
    /// Rebuilt by the collision pass every tick
    pub colliding_entities: Vec<EntityId>,
    pub ignore_collisions: bool,
    /// Horizontal offset from the entity position, already applied to `collider`
    pub offset: f32,
}

impl Collision2D {
    pub fn new(collider: Collider, layer: CollisionLayer) -> Self {
        Self::with_offset(collider, layer, 0.0)
    }

    pub fn with_offset(collider: Collider, layer: CollisionLayer, offset: f32) -> Self {
        Self {
            collider: collider.translate(Vec2::new(offset, 0.0)),
            layer,
            colliding_entities: Vec::new(),
            ignore_collisions: false,
            offset,
        }
    }

    pub fn reset_collisions(&mut self) {
        self.colliding_entities.clear();
    }

    pub fn add_collision(&mut self, entity: EntityId) {
        self.colliding_entities.push(entity);
    }

    /// Opt out of the collision pass; the entity is never tested or recorded
    pub fn disable_collisions(&mut self) {
        self.ignore_collisions = true;
        self.colliding_entities.clear();
    }
}

/// Food that changes score or lives when the player touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub value: u32,
    pub is_bomb: bool,
}

impl Consumable {
    pub fn new(value: u32, is_bomb: bool) -> Self {
        Self { value, is_bomb }
    }
}

/// On-screen box and the image drawn into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphics2D {
    /// Top-left corner
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub image_id: Option<String>,
}

impl Graphics2D {
    pub fn new(position: Vec2, width: f32, height: f32, image_id: impl Into<String>) -> Self {
        Self {
            position,
            width,
            height,
            image_id: Some(image_id.into()),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Movement2D {
    /// Pixels per tick
    pub velocity: Vec2,
    /// Standing on a tile
    pub grounded: bool,
}

/// Constant-speed falling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gravity2D {
    /// Pixels fallen per tick
    pub weight: f32,
}

impl Gravity2D {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

/// Looping sequence of image ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedSprite {
    pub frames: Vec<String>,
    pub frame_index: usize,
    pub ticks_per_frame: u32,
    pub elapsed_ticks: u32,
}

impl AnimatedSprite {
    pub fn new(frames: &[&str], ticks_per_frame: u32) -> Self {
        Self {
            frames: frames.iter().map(|f| f.to_string()).collect(),
            frame_index: 0,
            ticks_per_frame: ticks_per_frame.max(1),
            elapsed_ticks: 0,
        }
    }

    /// Image id of the frame currently shown
    pub fn active_sprite(&self) -> Option<&str> {
        self.frames.get(self.frame_index).map(String::as_str)
    }

    /// Swap to a new frame sequence, restarting only if it differs
    pub fn set_frames(&mut self, frames: &[&str]) {
        if self.frames.iter().map(String::as_str).eq(frames.iter().copied()) {
            return;
        }
        self.frames = frames.iter().map(|f| f.to_string()).collect();
        self.frame_index = 0;
        self.elapsed_ticks = 0;
    }

    pub fn advance(&mut self) {
        if self.frames.len() < 2 {
            return;
        }
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.ticks_per_frame {
            self.elapsed_ticks = 0;
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
    }
}

/// A component of any kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Collision2D(Collision2D),
    Consumable(Consumable),
    Graphics2D(Graphics2D),
    Movement2D(Movement2D),
    Gravity2D(Gravity2D),
    AnimatedSprite(AnimatedSprite),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Collision2D(_) => ComponentKind::Collision2D,
            Component::Consumable(_) => ComponentKind::Consumable,
            Component::Graphics2D(_) => ComponentKind::Graphics2D,
            Component::Movement2D(_) => ComponentKind::Movement2D,
            Component::Gravity2D(_) => ComponentKind::Gravity2D,
            Component::AnimatedSprite(_) => ComponentKind::AnimatedSprite,
        }
    }
}

/// Typed access to one variant of `Component`
pub trait ComponentData: Into<Component> {
    const KIND: ComponentKind;

    fn from_component(component: &Component) -> Option<&Self>;
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_data {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$ty(value)
                }
            }

            impl ComponentData for $ty {
                const KIND: ComponentKind = ComponentKind::$ty;

                fn from_component(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

component_data!(Collision2D, Consumable, Graphics2D, Movement2D, Gravity2D, AnimatedSprite);
