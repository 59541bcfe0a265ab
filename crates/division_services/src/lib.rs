//! Division Services Layer
//!
//! File-backed services around the core: engine settings and world
//! save/load.

pub mod save;
pub mod settings;

pub use save::{capture, load_into, load_world, restore, save_world, SaveError, WorldData};
pub use settings::{Settings, SettingsError};
