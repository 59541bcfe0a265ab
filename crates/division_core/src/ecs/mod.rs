//! Entity Component System core types.
//!
//! Entities are plain ids, components live in one sparse map per kind, and
//! systems opt into lifecycle phases through capability traits. A
//! [`World`] ties these together; a [`WorldManager`] keeps several worlds
//! and tracks which one is current.

mod component;
mod entity;
pub mod query;
mod scheduler;
pub mod storage;
mod system;
mod system_registration_error;
mod system_registry;
mod world;
mod world_manager;

pub use component::{AnyComponent, Component, ComponentId, PropertyBag, FIRST_USER_COMPONENT_ID};
pub use entity::{Entity, EntityRegistry};
pub use query::EntitySet;
pub use scheduler::SystemScheduler;
pub use storage::{ComponentStore, SparseStore};
pub use system::{Awake, FixedUpdate, Phase, Render, System, Unload, Update};
pub use system_registration_error::{BoxError, SystemRegistrationError};
pub use system_registry::SystemRegistry;
pub use world::{SharedWorld, World, WorldError, DEFAULT_VIEWPORT};
pub use world_manager::{populate_default_scene, WorldManager, DEFAULT_WORLD_KEY};
