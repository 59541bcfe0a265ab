//! Division Engine Core
//!
//! Contains the simulation runtime:
//! - Entity Component System (entities, sparse component storage, queries)
//! - Lifecycle-phase system scheduling and the engine run-state machine
//! - Named worlds with a current-world pointer
//! - Built-in components, systems and prefabs
//! - Persistence adapter surface

pub mod components;
pub mod ecs;
pub mod engine;
pub mod input;
pub mod math;
pub mod persist;
pub mod prefabs;
pub mod systems;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
