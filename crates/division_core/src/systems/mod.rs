//! Built-in systems
//!
//! [`SystemRegistry::builtin`] lists them in the order they run.

mod camera;
mod input;
mod player;
mod time;

pub use camera::CameraSystem;
pub use input::InputFrameSystem;
pub use player::PlayerSystem;
pub use time::TimeSystem;

use crate::ecs::SystemRegistry;
use tracing::error;

impl SystemRegistry {
    /// Registry holding the engine's built-in systems: time first so later
    /// systems see the current frame's delta.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let results = [
            registry.register_default::<TimeSystem>(),
            registry.register_default::<InputFrameSystem>(),
            registry.register_default::<PlayerSystem>(),
            registry.register_default::<CameraSystem>(),
        ];
        for err in results.into_iter().filter_map(Result::err) {
            error!(%err, "built-in system registration failed");
        }
        registry
    }
}
