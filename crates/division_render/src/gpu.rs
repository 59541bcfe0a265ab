//! GPU buffer layouts
//!
//! Plain `#[repr(C)]` records a backend can upload with
//! `bytemuck::cast_slice`. Every vector is padded to 16 bytes.

use crate::draw_data::{DrawData, PrimitiveRecord};

const SHADOW_CAST: u32 = 1;
const SHADOW_RECEIVE: u32 = 1 << 1;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuWorld {
    pub camera_origin: [f32; 4],
    pub camera_to_world: [[f32; 4]; 4],
    pub inverse_projection: [[f32; 4]; 4],
    pub max_ray_steps: u32,
    pub max_shadow_ray_steps: u32,
    pub primitive_count: u32,
    pub _padding: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPrimitive {
    pub kind: u32,
    /// Bit 0 casts shadows, bit 1 receives them.
    pub shadow_flags: u32,
    pub shadow_distances: [f32; 2],
    pub color: [f32; 4],
    pub position: [f32; 4],
    pub rotation: [f32; 4],
    pub scale: [f32; 4],
    pub parameters: [f32; 4],
}

impl From<&PrimitiveRecord> for GpuPrimitive {
    fn from(record: &PrimitiveRecord) -> Self {
        let (shadow_flags, shadow_distances) = match record.shadows {
            Some(s) => {
                let mut flags = 0;
                if s.cast {
                    flags |= SHADOW_CAST;
                }
                if s.receive {
                    flags |= SHADOW_RECEIVE;
                }
                (flags, [s.min_distance, s.max_distance])
            }
            None => (0, [0.0, 0.0]),
        };

        Self {
            kind: record.kind as u32,
            shadow_flags,
            shadow_distances,
            color: record.color.to_array(),
            position: record.position.extend(0.0).to_array(),
            rotation: record.rotation.to_array(),
            scale: record.scale.extend(0.0).to_array(),
            parameters: record.parameters.to_array(),
        }
    }
}

impl DrawData {
    /// Pack the snapshot into upload-ready buffers.
    pub fn to_gpu(&self) -> (GpuWorld, Vec<GpuPrimitive>) {
        let primitives: Vec<GpuPrimitive> = self.primitives.iter().map(GpuPrimitive::from).collect();
        let world = GpuWorld {
            camera_origin: self.camera.origin.extend(1.0).to_array(),
            camera_to_world: self.camera.inverse_view.to_cols_array_2d(),
            inverse_projection: self.camera.inverse_projection.to_cols_array_2d(),
            max_ray_steps: self.max_ray_steps,
            max_shadow_ray_steps: self.max_shadow_ray_steps,
            primitive_count: u32::try_from(primitives.len()).unwrap_or(u32::MAX),
            _padding: 0,
        };
        (world, primitives)
    }
}
