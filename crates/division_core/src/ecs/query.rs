// query.rs - Set queries and data joins over the component store
//
// Every query is evaluated against the live store when it is called.
// Nothing is cached between calls, and the returned iterators borrow the
// store, so a join can never observe a mutation made after it was created.

use crate::ecs::storage::SparseStore;
use crate::ecs::{AnyComponent, Component, ComponentId, ComponentStore, Entity};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Unordered set of matching entities.
pub type EntitySet = HashSet<Entity>;

impl ComponentStore {
    /// Entities carrying kind `T`. Empty when `T` was never attached.
    pub fn query<T: Component>(&self) -> EntitySet {
        self.query_kinds(&[T::ID])
    }

    /// Entities carrying every kind in `kinds`.
    ///
    /// Starts from the first kind's entities and narrows left to right. The
    /// order affects cost only, never membership. An empty list matches
    /// nothing.
    pub fn query_kinds(&self, kinds: &[ComponentId]) -> EntitySet {
        let Some((first, rest)) = kinds.split_first() else {
            return EntitySet::new();
        };
        let Some(seed) = self.stores.get(first) else {
            return EntitySet::new();
        };

        let mut result: EntitySet = seed.entities().collect();
        for kind in rest {
            if result.is_empty() {
                break;
            }
            match self.stores.get(kind) {
                Some(store) => result.retain(|entity| store.contains(*entity)),
                None => result.clear(),
            }
        }
        result
    }

    pub fn query_data<A: Component>(&self) -> impl Iterator<Item = (Entity, &A)> + '_ {
        self.query::<A>()
            .into_iter()
            .filter_map(move |entity| Some((entity, self.get::<A>(entity)?)))
    }

    pub fn query_data2<A: Component, B: Component>(
        &self,
    ) -> impl Iterator<Item = (Entity, &A, &B)> + '_ {
        self.query_kinds(&[A::ID, B::ID])
            .into_iter()
            .filter_map(move |entity| Some((entity, self.get::<A>(entity)?, self.get::<B>(entity)?)))
    }

    pub fn query_data3<A: Component, B: Component, C: Component>(
        &self,
    ) -> impl Iterator<Item = (Entity, &A, &B, &C)> + '_ {
        self.query_kinds(&[A::ID, B::ID, C::ID])
            .into_iter()
            .filter_map(move |entity| {
                Some((
                    entity,
                    self.get::<A>(entity)?,
                    self.get::<B>(entity)?,
                    self.get::<C>(entity)?,
                ))
            })
    }

    /// Join by kind id, yielding components in the requested order.
    pub fn query_data_dyn(
        &self,
        kinds: &[ComponentId],
    ) -> impl Iterator<Item = (Entity, Vec<&dyn AnyComponent>)> + '_ {
        let kinds = kinds.to_vec();
        self.query_kinds(&kinds)
            .into_iter()
            .map(move |entity| {
                let components = kinds
                    .iter()
                    .filter_map(|kind| self.stores.get(kind)?.get_dyn(entity))
                    .collect();
                (entity, components)
            })
    }

    pub fn query_data_mut<A: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut A)> + '_ {
        self.store_mut::<A>()
            .into_iter()
            .flat_map(|store| store.items.iter_mut())
            .map(|(entity, value)| (*entity, value))
    }

    /// Mutable two-kind join. Asking for the same kind twice yields nothing.
    pub fn query_data2_mut<A: Component, B: Component>(
        &mut self,
    ) -> impl Iterator<Item = (Entity, &mut A, &mut B)> + '_ {
        let (a, b) = if A::ID == B::ID {
            warn!(kind = A::ID, "mutable join requested the same kind twice");
            (None, None)
        } else {
            let (a, b, _) = self.split_stores_mut::<A, B, B>(&[A::ID, B::ID]);
            (a, b)
        };

        let mut bs: HashMap<Entity, &mut B> = index(b);
        a.into_iter()
            .flat_map(|store| store.items.iter_mut())
            .filter_map(move |(entity, av)| Some((*entity, av, bs.remove(entity)?)))
    }

    /// Mutable three-kind join. Any repeated kind yields nothing.
    pub fn query_data3_mut<A: Component, B: Component, C: Component>(
        &mut self,
    ) -> impl Iterator<Item = (Entity, &mut A, &mut B, &mut C)> + '_ {
        let (a, b, c) = if A::ID == B::ID || A::ID == C::ID || B::ID == C::ID {
            warn!(
                kinds = ?[A::ID, B::ID, C::ID],
                "mutable join requested the same kind twice"
            );
            (None, None, None)
        } else {
            self.split_stores_mut::<A, B, C>(&[A::ID, B::ID, C::ID])
        };

        let mut bs: HashMap<Entity, &mut B> = index(b);
        let mut cs: HashMap<Entity, &mut C> = index(c);
        a.into_iter()
            .flat_map(|store| store.items.iter_mut())
            .filter_map(move |(entity, av)| {
                if !bs.contains_key(entity) || !cs.contains_key(entity) {
                    return None;
                }
                Some((*entity, av, bs.remove(entity)?, cs.remove(entity)?))
            })
    }

    /// Disjoint mutable borrows of up to three distinct stores.
    ///
    /// `kinds` must hold distinct ids; the first matching store for each of
    /// A, B and C is handed out once.
    fn split_stores_mut<A: Component, B: Component, C: Component>(
        &mut self,
        kinds: &[ComponentId],
    ) -> (
        Option<&mut SparseStore<A>>,
        Option<&mut SparseStore<B>>,
        Option<&mut SparseStore<C>>,
    ) {
        let (mut a, mut b, mut c) = (None, None, None);
        for (kind, store) in self.stores.iter_mut() {
            if !kinds.contains(kind) {
                continue;
            }
            if *kind == A::ID {
                a = store.as_any_mut().downcast_mut::<SparseStore<A>>();
            } else if *kind == B::ID {
                b = store.as_any_mut().downcast_mut::<SparseStore<B>>();
            } else if *kind == C::ID {
                c = store.as_any_mut().downcast_mut::<SparseStore<C>>();
            }
        }
        (a, b, c)
    }
}

fn index<T: Component>(store: Option<&mut SparseStore<T>>) -> HashMap<Entity, &mut T> {
    store
        .map(|store| {
            store
                .items
                .iter_mut()
                .map(|(entity, value)| (*entity, value))
                .collect()
        })
        .unwrap_or_default()
}
