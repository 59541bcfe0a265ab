//! Built-in component kinds
//!
//! Kind ids below [`FIRST_USER_COMPONENT_ID`](crate::ecs::FIRST_USER_COMPONENT_ID)
//! are reserved for the types in this module.

mod camera;
mod lights;
mod sdf;
mod transform;

pub use camera::{Camera, Player};
pub use lights::{DirectionalLight, PointLight};
pub use sdf::{SdfBox, SdfPyramid, SdfRoundedBox, SdfSphere, SdfTorus, SoftShadows};
pub use transform::{Name, Transform};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Component, ComponentId, FIRST_USER_COMPONENT_ID};
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique_and_reserved() {
        let ids: [ComponentId; 12] = [
            Name::ID,
            Transform::ID,
            Camera::ID,
            Player::ID,
            SdfSphere::ID,
            SdfBox::ID,
            SdfRoundedBox::ID,
            SdfTorus::ID,
            SdfPyramid::ID,
            SoftShadows::ID,
            PointLight::ID,
            DirectionalLight::ID,
        ];
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|id| *id < FIRST_USER_COMPONENT_ID));
    }

    #[test]
    fn test_shape_defaults() {
        assert_eq!(SdfSphere::default().radius, 1.0);
        assert_eq!(SdfRoundedBox::default().bevel, 0.05);
        assert_eq!(SdfTorus::default().whole_radius, 2.0);
        let shadows = SoftShadows::default();
        assert!(shadows.caster && shadows.receiver);
        assert_eq!(shadows.max_distance, 100.0);
    }
}
