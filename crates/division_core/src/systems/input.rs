use crate::ecs::{FixedUpdate, World};
use crate::impl_system;

/// Closes the input frame at the end of each tick so mouse deltas do not
/// carry over.
#[derive(Debug, Default)]
pub struct InputFrameSystem;

impl FixedUpdate for InputFrameSystem {
    fn fixed_update(&mut self, world: &mut World) {
        world.input_mut().end_frame();
    }
}

impl_system!(InputFrameSystem => FixedUpdate);
