//! Ready-made entities
//!
//! Each helper creates one entity in the given world and returns it. Shape
//! helpers attach a default primitive plus soft shadows at the origin.

use crate::components::{
    Camera, Player, SdfBox, SdfPyramid, SdfRoundedBox, SdfSphere, SdfTorus, SoftShadows,
};
use crate::ecs::{Component, Entity, World};

pub fn empty(world: &mut World, name: Option<&str>) -> Entity {
    match name {
        Some(name) => world.create_named_entity(name),
        None => world.create_entity(),
    }
}

pub fn empty_with_transform(world: &mut World, name: Option<&str>) -> Entity {
    world.create_transform_entity(name)
}

/// Camera entity, optionally with first-person controls.
pub fn camera(world: &mut World, player_controlled: bool) -> Entity {
    let entity = world.create_transform_entity(Some("Camera"));
    world.add_component(entity, Camera::default());
    if player_controlled {
        world.add_component(entity, Player::default());
    }
    entity
}

pub fn sphere(world: &mut World) -> Entity {
    shape(world, "Sphere", SdfSphere::default())
}

pub fn cube(world: &mut World) -> Entity {
    shape(world, "Box", SdfBox::default())
}

pub fn rounded_cube(world: &mut World) -> Entity {
    shape(world, "Rounded Box", SdfRoundedBox::default())
}

pub fn torus(world: &mut World) -> Entity {
    shape(world, "Torus", SdfTorus::default())
}

pub fn pyramid(world: &mut World) -> Entity {
    shape(world, "Pyramid", SdfPyramid::default())
}

fn shape<T: Component>(world: &mut World, name: &str, primitive: T) -> Entity {
    let entity = world.create_transform_entity(Some(name));
    world.add_component(entity, primitive);
    world.add_component(entity, SoftShadows::default());
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Transform;

    #[test]
    fn test_shape_prefabs_carry_shadows() {
        let mut world = World::new();
        let made = [
            sphere(&mut world),
            cube(&mut world),
            rounded_cube(&mut world),
            torus(&mut world),
            pyramid(&mut world),
        ];
        for entity in made {
            assert!(world.has_component::<Transform>(entity));
            assert!(world.has_component::<SoftShadows>(entity));
            assert_eq!(world.get_all_components(entity).len(), 4);
        }
        assert_eq!(world.try_get_entity_name(made[2]), "Rounded Box");
    }

    #[test]
    fn test_camera_prefab() {
        let mut world = World::new();
        let plain = camera(&mut world, false);
        let controlled = camera(&mut world, true);
        assert!(world.has_component::<Camera>(plain));
        assert!(!world.has_component::<Player>(plain));
        assert!(world.has_component::<Player>(controlled));
    }

    #[test]
    fn test_empty_prefabs() {
        let mut world = World::new();
        let bare = empty(&mut world, None);
        assert!(world.get_all_components(bare).is_empty());
        let placed = empty_with_transform(&mut world, None);
        assert_eq!(world.get_all_components(placed).len(), 1);
    }
}
