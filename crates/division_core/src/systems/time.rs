use crate::ecs::{Awake, Update, World};
use crate::impl_system;
use std::time::Instant;
use tracing::{info, trace};

/// Drives the world's frame clock from wall-clock time.
#[derive(Debug, Default)]
pub struct TimeSystem;

impl Awake for TimeSystem {
    fn awake(&mut self, world: &mut World) {
        world.clock_mut().reset(Instant::now());
        info!("time started in current world");
    }
}

impl Update for TimeSystem {
    fn update(&mut self, world: &mut World) {
        let clock = world.clock_mut();
        clock.tick(Instant::now());
        trace!(
            delta = clock.delta(),
            frame = clock.frame_count(),
            fps = clock.fps(),
            "frame"
        );
    }
}

impl_system!(TimeSystem => Awake, Update);

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_awake_resets_and_update_counts_frames() {
        let mut world = World::new();
        world.clock_mut().advance(Duration::from_secs(3));
        world.add_system(TimeSystem);

        world.call_awake();
        assert_eq!(world.clock().frame_count(), 0);
        assert_eq!(world.clock().elapsed(), 0.0);

        world.call_update();
        world.call_update();
        assert_eq!(world.clock().frame_count(), 2);
        assert!(world.clock().delta() >= 0.0);
    }
}
