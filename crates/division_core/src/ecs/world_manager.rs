// world_manager.rs - Directory of named worlds plus the current one

use crate::components::{DirectionalLight, Transform};
use crate::ecs::{SharedWorld, SystemRegistry, World, WorldError};
use crate::math::look_rotation;
use crate::prefabs;
use glam::Vec3;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Key used by [`WorldManager::create_default_world`].
pub const DEFAULT_WORLD_KEY: &str = "default";

#[derive(Debug, Default)]
pub struct WorldManager {
    worlds: HashMap<String, SharedWorld>,
    current: Option<SharedWorld>,
}

impl WorldManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the world stored under `key`.
    pub fn set_world(&mut self, key: impl Into<String>, world: impl Into<SharedWorld>) -> SharedWorld {
        let key = key.into();
        let world = world.into();
        debug!(%key, "world stored");
        self.worlds.insert(key, world.clone());
        world
    }

    pub fn has_world(&self, key: &str) -> bool {
        self.worlds.contains_key(key)
    }

    pub fn get_world(&self, key: &str) -> Option<SharedWorld> {
        self.worlds.get(key).cloned()
    }

    /// Make the world under `key` current. Leaves the current world alone
    /// and returns false when there is no such key.
    pub fn switch_world(&mut self, key: &str) -> bool {
        match self.worlds.get(key) {
            Some(world) => {
                self.current = Some(world.clone());
                info!(%key, "switched world");
                true
            }
            None => {
                warn!(%key, "cannot switch to unknown world");
                false
            }
        }
    }

    /// Remove the world under `key`. Refuses to remove the current world
    /// and returns false for an unknown key.
    pub fn remove_world(&mut self, key: &str) -> bool {
        let Some(world) = self.worlds.get(key) else {
            return false;
        };
        if self.is_current(world) {
            warn!(%key, "refusing to remove the current world");
            return false;
        }
        self.worlds.remove(key);
        debug!(%key, "world removed");
        true
    }

    pub fn current_world(&self) -> Option<SharedWorld> {
        self.current.clone()
    }

    /// Key of the current world, if it is still in the directory.
    pub fn current_key(&self) -> Option<&str> {
        let current = self.current.as_ref()?;
        self.worlds
            .iter()
            .find(|(_, world)| world.ptr_eq(current))
            .map(|(key, _)| key.as_str())
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.worlds.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Build the bootstrap scene with the built-in systems and store it
    /// under [`DEFAULT_WORLD_KEY`].
    ///
    /// The scene holds a player-controlled camera, a sphere in front of it
    /// and a directional light.
    pub fn create_default_world(&mut self, make_current: bool) -> Result<SharedWorld, WorldError> {
        let mut world = World::from_registry(&SystemRegistry::builtin())?;
        populate_default_scene(&mut world);

        let world = self.set_world(DEFAULT_WORLD_KEY, world);
        if make_current {
            self.current = Some(world.clone());
        }
        info!(make_current, "default world created");
        Ok(world)
    }

    fn is_current(&self, world: &SharedWorld) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.ptr_eq(world))
    }
}

/// Camera at (0, 1, 5) facing a unit sphere at the origin, lit from above.
pub fn populate_default_scene(world: &mut World) {
    let camera = prefabs::camera(world, true);
    if let Some(transform) = world.get_component_mut::<Transform>(camera) {
        transform.position = Vec3::new(0.0, 1.0, 5.0);
        transform.rotation = look_rotation(-transform.position);
    }

    prefabs::sphere(world);

    let sun = prefabs::empty_with_transform(world, Some("Sun"));
    world.add_component(sun, DirectionalLight::default());
}
