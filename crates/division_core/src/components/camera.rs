use crate::components::Transform;
use crate::define_component;
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective camera. The view comes from the entity's Transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub aspect_ratio: f32,
}

define_component!(Camera, 3, "Camera");

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 70.0,
            near_clip: 0.1,
            far_clip: 10_000.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl Camera {
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near_clip,
            self.far_clip,
        )
    }

    /// World-to-camera matrix for a camera placed at `transform`.
    /// Scale is ignored.
    pub fn view(transform: &Transform) -> Mat4 {
        Mat4::from_rotation_translation(transform.rotation, transform.position).inverse()
    }

    /// Distance from the eye to a screen of `height` pixels at this fov.
    pub fn screen_distance(&self, height: f32) -> f32 {
        height / 2.0 / (self.fov.to_radians() / 2.0).tan()
    }
}

/// First-person controls: movement keys, sprint and right-mouse look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub sprint_multiplier: f32,
}

define_component!(Player, 4, "Player");

impl Default for Player {
    fn default() -> Self {
        Self {
            movement_speed: 4.0,
            mouse_sensitivity: 2.0,
            sprint_multiplier: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_defaults() {
        let cam = Camera::default();
        assert_eq!(cam.fov, 70.0);
        assert_eq!(cam.far_clip, 10_000.0);
        assert_eq!(Player::default().movement_speed, 4.0);
    }

    #[test]
    fn test_view_moves_camera_to_origin() {
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let view = Camera::view(&transform);
        let eye = view * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert!(eye.truncate().length() < 1e-6);
    }

    #[test]
    fn test_screen_distance_at_ninety_degrees() {
        let cam = Camera {
            fov: 90.0,
            ..Camera::default()
        };
        assert!((cam.screen_distance(200.0) - 100.0).abs() < 1e-3);
    }
}
