//! Signed-distance-field primitives and their shadow settings
//!
//! Each primitive is rendered at its entity's Transform. Colors are linear
//! RGBA.

use crate::define_component;
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdfSphere {
    pub color: Vec4,
    pub radius: f32,
}

define_component!(SdfSphere, 10, "SdfSphere");

impl Default for SdfSphere {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdfBox {
    pub color: Vec4,
    pub size: Vec3,
}

define_component!(SdfBox, 11, "SdfBox");

impl Default for SdfBox {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            size: Vec3::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdfRoundedBox {
    pub color: Vec4,
    pub size: Vec3,
    pub bevel: f32,
}

define_component!(SdfRoundedBox, 12, "SdfRoundedBox");

impl Default for SdfRoundedBox {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            size: Vec3::ONE,
            bevel: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdfTorus {
    pub color: Vec4,
    /// Distance from the torus center to the middle of the ring.
    pub whole_radius: f32,
    /// Thickness of the ring.
    pub ring_radius: f32,
}

define_component!(SdfTorus, 13, "SdfTorus");

impl Default for SdfTorus {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            whole_radius: 2.0,
            ring_radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdfPyramid {
    pub color: Vec4,
    pub height: f32,
}

define_component!(SdfPyramid, 14, "SdfPyramid");

impl Default for SdfPyramid {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            height: 1.0,
        }
    }
}

/// Soft shadow participation for a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftShadows {
    pub caster: bool,
    pub receiver: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

define_component!(SoftShadows, 20, "SoftShadows");

impl Default for SoftShadows {
    fn default() -> Self {
        Self {
            caster: true,
            receiver: true,
            min_distance: 0.001,
            max_distance: 100.0,
        }
    }
}
