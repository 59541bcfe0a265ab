// storage.rs - Sparse, per-kind component storage
//
// One homogeneous `SparseStore<T>` per component kind, kept behind a small
// object-safe trait so the world can hold every kind in a single map keyed
// by `ComponentId`. Typed access performs exactly one checked downcast.

use crate::ecs::{AnyComponent, Component, ComponentId, Entity};
use std::any::Any;
use std::collections::HashMap;
use tracing::{debug, error};

/// Homogeneous map from entity to one component kind.
#[derive(Debug)]
pub struct SparseStore<T> {
    pub(crate) items: HashMap<Entity, T>,
}

impl<T: Component> SparseStore<T> {
    fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.items.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.items.iter().map(|(entity, value)| (*entity, value))
    }
}

/// Type-erased operations every store supports regardless of its kind.
pub(crate) trait ErasedStore: Send + Sync {
    fn kind_name(&self) -> &'static str;
    fn contains(&self, entity: Entity) -> bool;
    fn remove_entity(&mut self, entity: Entity) -> bool;
    fn len(&self) -> usize;
    fn entities(&self) -> Box<dyn Iterator<Item = Entity> + '_>;
    fn get_dyn(&self, entity: Entity) -> Option<&dyn AnyComponent>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for SparseStore<T> {
    fn kind_name(&self) -> &'static str {
        T::NAME
    }

    fn contains(&self, entity: Entity) -> bool {
        self.items.contains_key(&entity)
    }

    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.items.remove(&entity).is_some()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn entities(&self) -> Box<dyn Iterator<Item = Entity> + '_> {
        Box::new(self.items.keys().copied())
    }

    fn get_dyn(&self, entity: Entity) -> Option<&dyn AnyComponent> {
        self.items
            .get(&entity)
            .map(|value| value as &dyn AnyComponent)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Map of sparse maps: component kind -> (entity -> component).
///
/// A kind's store exists only while at least one entity carries that kind;
/// the store is dropped as soon as its last component is removed.
#[derive(Default)]
pub struct ComponentStore {
    pub(crate) stores: HashMap<ComponentId, Box<dyn ErasedStore>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `value` to `entity`.
    ///
    /// Returns false, leaving the stored value untouched, if the entity
    /// already has a component of this kind or if another Rust type has
    /// claimed the same kind id.
    pub fn insert<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        let store = self
            .stores
            .entry(T::ID)
            .or_insert_with(|| {
                debug!(kind = T::ID, name = T::NAME, "creating component store");
                Box::new(SparseStore::<T>::new())
            });

        if !store.as_any().is::<SparseStore<T>>() {
            error!(
                kind = T::ID,
                requested = T::NAME,
                existing = store.kind_name(),
                "component kind id is shared by two types"
            );
            return false;
        }
        let Some(typed) = store.as_any_mut().downcast_mut::<SparseStore<T>>() else {
            return false;
        };

        if typed.items.contains_key(&entity) {
            return false;
        }
        typed.items.insert(entity, value);
        true
    }

    /// Detach and return the component, pruning the kind's store if it
    /// becomes empty.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let typed = self.store_mut::<T>()?;
        let removed = typed.items.remove(&entity)?;
        if typed.items.is_empty() {
            self.stores.remove(&T::ID);
        }
        Some(removed)
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>()?.items.get(&entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.store_mut::<T>()?.items.get_mut(&entity)
    }

    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }

    /// Untyped membership test by kind id.
    pub fn contains_kind(&self, kind: ComponentId, entity: Entity) -> bool {
        self.stores
            .get(&kind)
            .is_some_and(|store| store.contains(entity))
    }

    /// Every component attached to `entity`, one scan over the live kinds.
    pub fn components_of(&self, entity: Entity) -> Vec<&dyn AnyComponent> {
        self.stores
            .values()
            .filter_map(|store| store.get_dyn(entity))
            .collect()
    }

    /// Remove `entity` from every store. Returns how many components were dropped.
    pub fn purge(&mut self, entity: Entity) -> usize {
        let mut removed = 0;
        self.stores.retain(|_, store| {
            if store.remove_entity(entity) {
                removed += 1;
            }
            store.len() > 0
        });
        removed
    }

    /// Number of kinds that currently have at least one component.
    pub fn kind_count(&self) -> usize {
        self.stores.len()
    }

    /// Kind ids in use, ascending.
    pub fn kinds(&self) -> Vec<ComponentId> {
        let mut kinds: Vec<ComponentId> = self.stores.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Typed view of one kind's store.
    pub fn store<T: Component>(&self) -> Option<&SparseStore<T>> {
        self.stores
            .get(&T::ID)?
            .as_any()
            .downcast_ref::<SparseStore<T>>()
    }

    pub(crate) fn store_mut<T: Component>(&mut self) -> Option<&mut SparseStore<T>> {
        self.stores
            .get_mut(&T::ID)?
            .as_any_mut()
            .downcast_mut::<SparseStore<T>>()
    }
}

impl std::fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in self.kinds() {
            if let Some(store) = self.stores.get(&kind) {
                map.entry(&store.kind_name(), &store.len());
            }
        }
        map.finish()
    }
}
