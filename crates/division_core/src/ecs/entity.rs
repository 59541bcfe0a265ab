//! Entity handles and the per-world identity registry
//!
//! Entities are plain monotonically increasing integers. Ids are never
//! recycled: destroying entity 1 and creating another yields a fresh id,
//! so stale handles can never alias a newer entity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque entity handle, unique within one World.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(u64);

impl Entity {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks which entity ids are alive and which id comes next.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    live: HashSet<Entity>,
    next: u64,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused id. Never fails.
    pub fn create(&mut self) -> Entity {
        let entity = Entity(self.next);
        self.next += 1;
        self.live.insert(entity);
        entity
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Returns true iff the entity was alive.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        self.live.remove(&entity)
    }

    /// Id the next `create` will hand out.
    pub fn next_id(&self) -> Entity {
        Entity(self.next)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.live.iter().copied()
    }

    /// Live entities in ascending id order.
    pub fn sorted(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.live.iter().copied().collect();
        entities.sort_unstable();
        entities
    }
}
