//! Renderer-facing snapshot types
//!
//! A [`DrawData`] is a self-contained copy of everything a backend needs to
//! draw one frame. It holds no references into the world it came from.

use division_core::components::{Camera, Transform};
use division_core::ecs::Entity;
use glam::{Mat4, Quat, Vec3, Vec4};

/// Primitive shape tag, numbered as the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum PrimitiveKind {
    Sphere = 0,
    Box = 1,
    RoundedBox = 2,
    Torus = 3,
    Pyramid = 4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRecord {
    pub origin: Vec3,
    /// World-to-camera.
    pub view: Mat4,
    /// Camera-to-world.
    pub inverse_view: Mat4,
    pub projection: Mat4,
    pub inverse_projection: Mat4,
}

impl CameraRecord {
    pub fn new(transform: &Transform, camera: &Camera) -> Self {
        let view = Camera::view(transform);
        let projection = camera.projection();
        Self {
            origin: transform.position,
            view,
            inverse_view: view.inverse(),
            projection,
            inverse_projection: projection.inverse(),
        }
    }
}

impl Default for CameraRecord {
    /// Default camera at the origin looking down -Z.
    fn default() -> Self {
        Self::new(&Transform::default(), &Camera::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowRecord {
    pub cast: bool,
    pub receive: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveRecord {
    pub entity: Entity,
    pub kind: PrimitiveKind,
    pub color: Vec4,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Shape-specific: sphere (radius), box (size.xyz), rounded box
    /// (size.xyz, bevel), torus (whole radius, ring radius), pyramid (height).
    pub parameters: Vec4,
    /// `None` when the entity has no soft-shadow settings.
    pub shadows: Option<ShadowRecord>,
}

/// Tunables copied into every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub max_ray_steps: u32,
    pub max_shadow_ray_steps: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            max_ray_steps: 128,
            max_shadow_ray_steps: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawData {
    /// Frame counter of the source world at extraction time.
    pub frame: u64,
    pub camera: CameraRecord,
    /// Ascending by entity id.
    pub primitives: Vec<PrimitiveRecord>,
    pub max_ray_steps: u32,
    pub max_shadow_ray_steps: u32,
}

impl DrawData {
    pub fn primitives_of(&self, kind: PrimitiveKind) -> impl Iterator<Item = &PrimitiveRecord> {
        self.primitives.iter().filter(move |p| p.kind == kind)
    }
}
