//! Division Render Bridge
//!
//! Turns a world into a flat, backend-agnostic draw-data snapshot and hands
//! it to the render side without sharing live component storage.

pub mod bridge;
pub mod draw_data;
pub mod extract;
pub mod gpu;

pub use bridge::{RenderBridge, SnapshotReceiver};
pub use draw_data::{CameraRecord, DrawData, PrimitiveKind, PrimitiveRecord, RenderParams, ShadowRecord};
pub use extract::world_to_draw_data;
pub use gpu::{GpuPrimitive, GpuWorld};
