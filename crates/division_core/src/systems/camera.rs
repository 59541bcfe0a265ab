use crate::components::Camera;
use crate::ecs::{Awake, Render, World};
use crate::impl_system;

/// Keeps every camera's aspect ratio matched to the world's viewport.
#[derive(Debug, Default)]
pub struct CameraSystem;

impl CameraSystem {
    fn sync_aspect(world: &mut World) {
        let viewport = world.viewport();
        if viewport.x == 0 || viewport.y == 0 {
            return;
        }
        let aspect = viewport.x as f32 / viewport.y as f32;
        for (_, camera) in world.query_data_mut::<Camera>() {
            camera.aspect_ratio = aspect;
        }
    }
}

impl Awake for CameraSystem {
    fn awake(&mut self, world: &mut World) {
        Self::sync_aspect(world);
    }
}

impl Render for CameraSystem {
    fn render(&mut self, world: &mut World) {
        Self::sync_aspect(world);
    }
}

impl_system!(CameraSystem => Awake, Render);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_follows_viewport() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Camera::default());
        world.add_system(CameraSystem);

        world.set_viewport(800, 800);
        world.call_render();
        assert_eq!(world.get_component::<Camera>(e).map(|c| c.aspect_ratio), Some(1.0));

        // Degenerate viewport leaves the camera alone
        world.set_viewport(0, 600);
        world.call_render();
        assert_eq!(world.get_component::<Camera>(e).map(|c| c.aspect_ratio), Some(1.0));
    }
}
