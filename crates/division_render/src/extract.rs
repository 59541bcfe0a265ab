//! World-to-draw-data translation
//!
//! Runs once per render tick against a world the caller has locked. Every
//! entity with a Transform and at least one SDF shape becomes one primitive
//! record.

use crate::draw_data::{
    CameraRecord, DrawData, PrimitiveKind, PrimitiveRecord, RenderParams, ShadowRecord,
};
use division_core::components::{
    Camera, SdfBox, SdfPyramid, SdfRoundedBox, SdfSphere, SdfTorus, SoftShadows, Transform,
};
use division_core::ecs::{Entity, World};
use glam::Vec4;
use rayon::prelude::*;
use tracing::trace;

/// Flatten `world` into a renderer snapshot.
///
/// The camera is the lowest-id entity carrying Transform and Camera; with no
/// camera a default one at the origin is used. Primitives come out in
/// ascending entity order.
pub fn world_to_draw_data(world: &World, params: &RenderParams) -> DrawData {
    let camera = world
        .query_data2::<Transform, Camera>()
        .min_by_key(|(entity, _, _)| *entity)
        .map(|(_, transform, camera)| CameraRecord::new(transform, camera))
        .unwrap_or_default();

    let mut entities: Vec<Entity> = world.query::<Transform>().into_iter().collect();
    entities.sort_unstable();

    let primitives: Vec<PrimitiveRecord> = entities
        .par_iter()
        .filter_map(|&entity| primitive_for(world, entity))
        .collect();

    trace!(primitives = primitives.len(), "draw data extracted");
    DrawData {
        frame: world.clock().frame_count(),
        camera,
        primitives,
        max_ray_steps: params.max_ray_steps,
        max_shadow_ray_steps: params.max_shadow_ray_steps,
    }
}

/// Shape of `entity` with its color and parameters.
///
/// An entity carrying several shapes resolves to one, in the order
/// Pyramid, Torus, RoundedBox, Box, Sphere.
pub fn shape_of(world: &World, entity: Entity) -> Option<(PrimitiveKind, Vec4, Vec4)> {
    if let Some(p) = world.get_component::<SdfPyramid>(entity) {
        return Some((PrimitiveKind::Pyramid, p.color, Vec4::new(p.height, 0.0, 0.0, 0.0)));
    }
    if let Some(t) = world.get_component::<SdfTorus>(entity) {
        return Some((
            PrimitiveKind::Torus,
            t.color,
            Vec4::new(t.whole_radius, t.ring_radius, 0.0, 0.0),
        ));
    }
    if let Some(b) = world.get_component::<SdfRoundedBox>(entity) {
        return Some((PrimitiveKind::RoundedBox, b.color, b.size.extend(b.bevel)));
    }
    if let Some(b) = world.get_component::<SdfBox>(entity) {
        return Some((PrimitiveKind::Box, b.color, b.size.extend(0.0)));
    }
    if let Some(s) = world.get_component::<SdfSphere>(entity) {
        return Some((PrimitiveKind::Sphere, s.color, Vec4::new(s.radius, 0.0, 0.0, 0.0)));
    }
    None
}

fn primitive_for(world: &World, entity: Entity) -> Option<PrimitiveRecord> {
    let transform = world.get_component::<Transform>(entity)?;
    let (kind, color, parameters) = shape_of(world, entity)?;
    let shadows = world
        .get_component::<SoftShadows>(entity)
        .map(|s| ShadowRecord {
            cast: s.caster,
            receive: s.receiver,
            min_distance: s.min_distance,
            max_distance: s.max_distance,
        });

    Some(PrimitiveRecord {
        entity,
        kind,
        color,
        position: transform.position,
        rotation: transform.rotation,
        scale: transform.scale,
        parameters,
        shadows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use division_core::prefabs;
    use glam::Vec3;

    #[test]
    fn test_sphere_record_matches_components() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
        world.add_component(
            e,
            SdfSphere {
                radius: 2.0,
                ..SdfSphere::default()
            },
        );

        let data = world_to_draw_data(&world, &RenderParams::default());
        assert_eq!(data.primitives.len(), 1);
        let sphere = &data.primitives[0];
        assert_eq!(sphere.kind, PrimitiveKind::Sphere);
        assert_eq!(sphere.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.parameters.x, 2.0);
        assert!(sphere.shadows.is_none());
    }

    #[test]
    fn test_entities_without_shape_or_transform_are_skipped() {
        let mut world = World::new();
        world.create_transform_entity(Some("Empty"));
        let floating = world.create_entity();
        world.add_component(floating, SdfBox::default());

        let data = world_to_draw_data(&world, &RenderParams::default());
        assert!(data.primitives.is_empty());
    }

    #[test]
    fn test_shape_precedence() {
        let mut world = World::new();
        let e = world.create_transform_entity(None);
        world.add_component(e, SdfSphere::default());
        world.add_component(e, SdfBox::default());
        assert_eq!(shape_of(&world, e).map(|s| s.0), Some(PrimitiveKind::Box));

        world.add_component(e, SdfTorus::default());
        assert_eq!(shape_of(&world, e).map(|s| s.0), Some(PrimitiveKind::Torus));

        world.add_component(e, SdfPyramid::default());
        let data = world_to_draw_data(&world, &RenderParams::default());
        assert_eq!(data.primitives.len(), 1);
        assert_eq!(data.primitives[0].kind, PrimitiveKind::Pyramid);
    }

    #[test]
    fn test_parameters_per_shape() {
        let mut world = World::new();
        let rounded = prefabs::rounded_cube(&mut world);
        let torus = prefabs::torus(&mut world);

        let (_, _, p) = shape_of(&world, rounded).unwrap();
        assert_eq!(p, Vec4::new(1.0, 1.0, 1.0, 0.05));
        let (_, _, p) = shape_of(&world, torus).unwrap();
        assert_eq!(p, Vec4::new(2.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_primitives_sorted_and_shadows_copied() {
        let mut world = World::new();
        let made: Vec<Entity> = (0..32).map(|_| prefabs::sphere(&mut world)).collect();
        world.destroy_entity(made[7]);

        let data = world_to_draw_data(&world, &RenderParams::default());
        assert_eq!(data.primitives.len(), 31);
        assert!(data.primitives.windows(2).all(|w| w[0].entity < w[1].entity));
        let shadows = data.primitives[0].shadows.unwrap();
        assert!(shadows.cast && shadows.receive);
        assert_eq!(shadows.max_distance, 100.0);
    }

    #[test]
    fn test_first_camera_by_id() {
        let mut world = World::new();
        let first = prefabs::camera(&mut world, false);
        let second = prefabs::camera(&mut world, false);
        if let Some(t) = world.get_component_mut::<Transform>(first) {
            t.position = Vec3::new(0.0, 0.0, 10.0);
        }
        if let Some(t) = world.get_component_mut::<Transform>(second) {
            t.position = Vec3::new(5.0, 0.0, 0.0);
        }

        let data = world_to_draw_data(&world, &RenderParams::default());
        assert_eq!(data.camera.origin, Vec3::new(0.0, 0.0, 10.0));
        let back = data.camera.view * data.camera.inverse_view;
        assert!(back.abs_diff_eq(glam::Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn test_no_camera_uses_default() {
        let world = World::new();
        let data = world_to_draw_data(&world, &RenderParams { max_ray_steps: 7, max_shadow_ray_steps: 3 });
        assert_eq!(data.camera, CameraRecord::default());
        assert_eq!(data.max_ray_steps, 7);
        assert_eq!(data.frame, 0);
    }
}
