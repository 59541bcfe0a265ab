use crate::define_component;
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: Vec4,
    pub intensity: f32,
    pub radius: f32,
}

define_component!(PointLight, 30, "PointLight");

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            intensity: 1.0,
            radius: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Vec4,
    /// Direction the light travels, normalized.
    pub direction: Vec3,
    pub intensity: f32,
}

define_component!(DirectionalLight, 31, "DirectionalLight");

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            direction: Vec3::new(-0.4, -1.0, -0.3).normalize(),
            intensity: 1.0,
        }
    }
}
