use crate::components::{Player, Transform};
use crate::ecs::{Update, World};
use crate::impl_system;
use crate::input::{InputState, KeyCode, MouseButton};
use glam::{Quat, Vec2, Vec3};

/// First-person movement and right-mouse look for every entity with a
/// Transform and a Player.
#[derive(Debug, Default)]
pub struct PlayerSystem;

impl Update for PlayerSystem {
    fn update(&mut self, world: &mut World) {
        let delta = world.clock().delta();
        let input = world.input().clone();
        for (_, transform, player) in world.query_data2_mut::<Transform, Player>() {
            move_player(transform, player, &input, delta);
            look(transform, player, &input);
        }
    }
}

impl_system!(PlayerSystem => Update);

fn move_player(transform: &mut Transform, player: &Player, input: &InputState, delta: f32) {
    let mut speed = player.movement_speed * delta;
    if input.is_pressed(KeyCode::ShiftLeft) {
        speed *= player.sprint_multiplier;
    }

    let axis = |positive: &[KeyCode], negative: &[KeyCode]| -> f32 {
        let mut value = 0.0;
        if input.any_pressed(positive) {
            value += 1.0;
        }
        if input.any_pressed(negative) {
            value -= 1.0;
        }
        value
    };

    let forward = axis(&[KeyCode::W, KeyCode::ArrowUp], &[KeyCode::S, KeyCode::ArrowDown]);
    let right = axis(&[KeyCode::D, KeyCode::ArrowRight], &[KeyCode::A, KeyCode::ArrowLeft]);
    let up = axis(&[KeyCode::E, KeyCode::PageUp], &[KeyCode::Q, KeyCode::PageDown]);

    let movement: Vec3 =
        transform.forward() * forward + transform.right() * right + transform.up() * up;
    transform.position += movement * speed;
}

fn look(transform: &mut Transform, player: &Player, input: &InputState) {
    if !input.is_mouse_pressed(MouseButton::Right) {
        return;
    }
    let delta = input.mouse_uv_delta();
    if delta == Vec2::ZERO {
        return;
    }

    let yaw = Quat::from_axis_angle(Vec3::Y, delta.x * player.mouse_sensitivity);
    let pitch = Quat::from_axis_angle(Vec3::X, -delta.y * player.mouse_sensitivity);
    transform.rotation = (pitch * (transform.rotation * yaw)).normalize();
}
