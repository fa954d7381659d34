//! Entity container
//!
//! Entities live in insertion order. Each one maps a `ComponentKind` to at
//! most one `Component`. Queries return materialized id lists so callers can
//! remove entities while walking the result.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::components::{Component, ComponentData, ComponentKind};

/// Opaque entity handle, never reused within a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a factory created the entity as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Tile,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
    #[error("entity {entity} has no {kind:?} component")]
    ComponentNotFound { entity: EntityId, kind: ComponentKind },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    components: BTreeMap<ComponentKind, Component>,
}

impl Entity {
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|kind| self.has_component(*kind))
    }

    pub fn get<T: ComponentData>(&self) -> Option<&T> {
        self.components.get(&T::KIND).and_then(T::from_component)
    }

    pub fn get_mut<T: ComponentData>(&mut self) -> Option<&mut T> {
        self.components.get_mut(&T::KIND).and_then(T::from_component_mut)
    }
}

/// All live entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityList {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Default for EntityList {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityList {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity with no components
    pub fn create(&mut self, kind: EntityKind) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            kind,
            components: BTreeMap::new(),
        });
        id
    }

    /// Attach a component, replacing any existing one of the same kind
    pub fn add_component(
        &mut self,
        id: EntityId,
        component: impl Into<Component>,
    ) -> Result<(), EcsError> {
        let component = component.into();
        let entity = self.entity_mut(id)?;
        entity.components.insert(component.kind(), component);
        Ok(())
    }

    pub fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.entity(id).map(|e| e.has_component(kind)).unwrap_or(false)
    }

    pub fn get<T: ComponentData>(&self, id: EntityId) -> Result<&T, EcsError> {
        self.entity(id)?.get::<T>().ok_or(EcsError::ComponentNotFound {
            entity: id,
            kind: T::KIND,
        })
    }

    pub fn get_mut<T: ComponentData>(&mut self, id: EntityId) -> Result<&mut T, EcsError> {
        self.entity_mut(id)?.get_mut::<T>().ok_or(EcsError::ComponentNotFound {
            entity: id,
            kind: T::KIND,
        })
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, EcsError> {
        self.entities
            .iter()
            .find(|e| e.id == id)
            .ok_or(EcsError::EntityNotFound(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, EcsError> {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EcsError::EntityNotFound(id))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|e| e.id == id)
    }

    /// Delete an entity and all its components
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Ids of every entity holding all `kinds`, in insertion order
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.has_all(kinds))
            .map(|e| e.id)
            .collect()
    }

    /// Keep only the entities matching `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&Entity) -> bool) {
        self.entities.retain(|e| keep(e));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities created as `kind`
    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}
