//! Persistence adapter surface
//!
//! The core does not pick a file format. It exposes every live entity as a
//! list of (kind, property bag) records and, through a [`ComponentCatalog`],
//! turns such records back into typed components.

use crate::components::{
    Camera, DirectionalLight, Name, Player, PointLight, SdfBox, SdfPyramid, SdfRoundedBox,
    SdfSphere, SdfTorus, SoftShadows, Transform,
};
use crate::ecs::{Component, ComponentId, Entity, PropertyBag, World};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("unknown component kind {kind} ('{name}')")]
    UnknownKind { kind: ComponentId, name: String },

    #[error("component kind {kind} is already registered as '{existing}'")]
    DuplicateKind { kind: ComponentId, existing: &'static str },

    #[error("entity {0} does not exist")]
    UnknownEntity(Entity),

    #[error("invalid properties for '{name}': {source}")]
    Properties {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One component flattened for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub kind: ComponentId,
    pub name: String,
    pub properties: PropertyBag,
}

/// One entity and all of its components, ordered by kind id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: Entity,
    pub components: Vec<ComponentRecord>,
}

impl World {
    /// Flatten every live entity, ascending by id.
    ///
    /// Components that fail to serialize are skipped with a warning.
    pub fn entity_records(&self) -> Vec<EntityRecord> {
        self.entities()
            .into_iter()
            .map(|entity| {
                let mut components: Vec<ComponentRecord> = self
                    .get_all_components(entity)
                    .into_iter()
                    .filter_map(|component| match component.properties() {
                        Ok(properties) => Some(ComponentRecord {
                            kind: component.kind(),
                            name: component.kind_name().to_string(),
                            properties,
                        }),
                        Err(err) => {
                            warn!(%entity, kind = component.kind_name(), %err, "component skipped");
                            None
                        }
                    })
                    .collect();
                components.sort_by_key(|record| record.kind);
                EntityRecord {
                    id: entity,
                    components,
                }
            })
            .collect()
    }
}

type Attach = fn(&mut World, Entity, &PropertyBag) -> Result<bool, serde_json::Error>;

fn attach_typed<T: Component>(
    world: &mut World,
    entity: Entity,
    properties: &PropertyBag,
) -> Result<bool, serde_json::Error> {
    let component = T::from_properties(properties)?;
    Ok(world.add_component(entity, component))
}

#[derive(Clone, Copy)]
struct CatalogEntry {
    name: &'static str,
    attach: Attach,
}

/// Maps kind ids and names to constructors that rebuild a component from a
/// property bag.
#[derive(Clone, Default)]
pub struct ComponentCatalog {
    by_id: HashMap<ComponentId, CatalogEntry>,
    by_name: HashMap<&'static str, ComponentId>,
}

static BUILTIN: Lazy<ComponentCatalog> = Lazy::new(|| {
    let mut catalog = ComponentCatalog::new();
    let results = [
        catalog.register::<Name>(),
        catalog.register::<Transform>(),
        catalog.register::<Camera>(),
        catalog.register::<Player>(),
        catalog.register::<SdfSphere>(),
        catalog.register::<SdfBox>(),
        catalog.register::<SdfRoundedBox>(),
        catalog.register::<SdfTorus>(),
        catalog.register::<SdfPyramid>(),
        catalog.register::<SoftShadows>(),
        catalog.register::<PointLight>(),
        catalog.register::<DirectionalLight>(),
    ];
    for err in results.into_iter().filter_map(Result::err) {
        warn!(%err, "built-in component catalog conflict");
    }
    catalog
});

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every built-in component kind. Extend a clone with
    /// application kinds.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn register<T: Component>(&mut self) -> Result<(), PersistError> {
        if let Some(existing) = self.by_id.get(&T::ID) {
            return Err(PersistError::DuplicateKind {
                kind: T::ID,
                existing: existing.name,
            });
        }
        self.by_id.insert(
            T::ID,
            CatalogEntry {
                name: T::NAME,
                attach: attach_typed::<T>,
            },
        );
        self.by_name.insert(T::NAME, T::ID);
        Ok(())
    }

    pub fn contains(&self, kind: ComponentId) -> bool {
        self.by_id.contains_key(&kind)
    }

    pub fn kind_of(&self, name: &str) -> Option<ComponentId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Build a component of `kind` from `properties` and attach it.
    ///
    /// `Ok(false)` follows `add_component`: the entity already has that kind.
    pub fn attach(
        &self,
        world: &mut World,
        entity: Entity,
        kind: ComponentId,
        properties: &PropertyBag,
    ) -> Result<bool, PersistError> {
        let entry = self.by_id.get(&kind).ok_or_else(|| PersistError::UnknownKind {
            kind,
            name: String::new(),
        })?;
        if !world.entity_exists(entity) {
            return Err(PersistError::UnknownEntity(entity));
        }
        (entry.attach)(world, entity, properties).map_err(|source| PersistError::Properties {
            name: entry.name.to_string(),
            source,
        })
    }

    /// Attach a stored record, resolving its kind by id and falling back to
    /// its name.
    pub fn attach_record(
        &self,
        world: &mut World,
        entity: Entity,
        record: &ComponentRecord,
    ) -> Result<bool, PersistError> {
        let kind = if self.contains(record.kind) {
            record.kind
        } else {
            self.kind_of(&record.name)
                .ok_or_else(|| PersistError::UnknownKind {
                    kind: record.kind,
                    name: record.name.clone(),
                })?
        };
        self.attach(world, entity, kind, &record.properties)
    }
}

impl std::fmt::Debug for ComponentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_records_list_components_by_kind() {
        let mut world = World::new();
        let e = world.create_transform_entity(Some("Ball"));
        world.add_component(e, SdfSphere::default());

        let records = world.entity_records();
        assert_eq!(records.len(), 1);
        let kinds: Vec<_> = records[0].components.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![Name::ID, Transform::ID, SdfSphere::ID]);
        assert_eq!(
            records[0].components[0].properties.get("name"),
            Some(&serde_json::Value::from("Ball"))
        );
    }

    #[test]
    fn test_attach_rebuilds_component() {
        let mut source = World::new();
        let e = source.create_entity();
        source.add_component(
            e,
            Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
        );
        let record = source.entity_records().remove(0).components.remove(0);

        let catalog = ComponentCatalog::builtin();
        let mut target = World::new();
        let t = target.create_entity();
        assert!(catalog.attach_record(&mut target, t, &record).unwrap());
        assert_eq!(
            target.get_component::<Transform>(t).map(|t| t.position),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
        // Second attach reports the duplicate like add_component does
        assert!(!catalog.attach_record(&mut target, t, &record).unwrap());
    }

    #[test]
    fn test_attach_errors() {
        let catalog = ComponentCatalog::builtin();
        let mut world = World::new();
        let e = world.create_entity();

        let unknown = catalog.attach(&mut world, e, 9999, &PropertyBag::new());
        assert!(matches!(unknown, Err(PersistError::UnknownKind { kind: 9999, .. })));

        let missing = catalog.attach(&mut world, Entity::from_raw(50), Camera::ID, &PropertyBag::new());
        assert!(matches!(missing, Err(PersistError::UnknownEntity(_))));

        let mut bad = PropertyBag::new();
        bad.insert("radius".into(), serde_json::Value::from("big"));
        let invalid = catalog.attach(&mut world, e, SdfSphere::ID, &bad);
        assert!(matches!(invalid, Err(PersistError::Properties { .. })));
    }

    #[test]
    fn test_builtin_catalog_is_complete_and_rejects_duplicates() {
        let mut catalog = ComponentCatalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.kind_of("SoftShadows"), Some(SoftShadows::ID));
        assert!(matches!(
            catalog.register::<Camera>(),
            Err(PersistError::DuplicateKind { kind: 3, existing: "Camera" })
        ));
    }
}
