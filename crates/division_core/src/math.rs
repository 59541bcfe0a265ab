//! Math types used by components
//!
//! Re-exports glam plus orientation helpers.

pub use glam::*;

/// Shortest-arc rotation that turns `Vec3::NEG_Z` to face `direction`.
/// A zero direction yields the identity.
pub fn look_rotation(direction: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::NEG_Z, forward)
}
