//! World save/load
//!
//! A saved world is a versioned JSON document listing every entity's
//! components as property bags. Entity ids are not preserved on load: each
//! saved entity is recreated with a fresh id and the mapping is returned.

use division_core::ecs::{Entity, World};
use division_core::persist::{ComponentCatalog, EntityRecord, PersistError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found} (expected {expected})", expected = SAVE_VERSION)]
    Version { found: u32 },

    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldData {
    pub version: u32,
    pub entities: Vec<EntityRecord>,
}

/// Snapshot every live entity of `world`.
pub fn capture(world: &World) -> WorldData {
    WorldData {
        version: SAVE_VERSION,
        entities: world.entity_records(),
    }
}

/// Recreate the saved entities inside `world`.
///
/// Returns the saved-id to new-entity mapping. Fails on the first component
/// that cannot be rebuilt; entities created before the failure stay in the
/// world.
pub fn restore(
    data: &WorldData,
    catalog: &ComponentCatalog,
    world: &mut World,
) -> Result<HashMap<Entity, Entity>, SaveError> {
    if data.version != SAVE_VERSION {
        return Err(SaveError::Version {
            found: data.version,
        });
    }

    let mut mapping = HashMap::with_capacity(data.entities.len());
    for record in &data.entities {
        let entity = world.create_entity();
        for component in &record.components {
            if !catalog.attach_record(world, entity, component)? {
                warn!(saved = %record.id, kind = %component.name, "duplicate component in save skipped");
            }
        }
        mapping.insert(record.id, entity);
    }
    Ok(mapping)
}

pub fn save_world(path: impl AsRef<Path>, world: &World) -> Result<(), SaveError> {
    let path = path.as_ref();
    let data = capture(world);
    let text = serde_json::to_string_pretty(&data)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SaveError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), entities = data.entities.len(), "world saved");
    Ok(())
}

/// Load a saved world into a fresh world with no systems.
pub fn load_world(path: impl AsRef<Path>, catalog: &ComponentCatalog) -> Result<World, SaveError> {
    let mut world = World::new();
    load_into(path, catalog, &mut world)?;
    Ok(world)
}

/// Load a saved world into an existing world, e.g. one built from a
/// system registry.
pub fn load_into(
    path: impl AsRef<Path>,
    catalog: &ComponentCatalog,
    world: &mut World,
) -> Result<HashMap<Entity, Entity>, SaveError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: WorldData = serde_json::from_str(&text)?;
    let mapping = restore(&data, catalog, world)?;
    info!(path = %path.display(), entities = mapping.len(), "world loaded");
    Ok(mapping)
}
