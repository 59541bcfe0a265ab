//! Input state fed by the driver and read by systems
//!
//! The host translates device events into calls on [`InputState`] via
//! `World::input_mut`. Mouse deltas accumulate until the input frame ends
//! on FixedUpdate.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Escape,
    Tab,
    CapsLock,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    Space,
    Enter,
    Backspace,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    mouse_position: Vec2,
    mouse_delta: Vec2,
    mouse_uv: Vec2,
    mouse_uv_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn button_down(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn button_up(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    /// Move the cursor to `position` in pixels. `viewport` is the screen size
    /// used to derive normalized coordinates; a degenerate viewport leaves
    /// them untouched.
    pub fn set_mouse_position(&mut self, position: Vec2, viewport: Vec2) {
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;

        if viewport.x > 0.0 && viewport.y > 0.0 {
            let uv = position / viewport;
            self.mouse_uv_delta += uv - self.mouse_uv;
            self.mouse_uv = uv;
        }
    }

    /// Clear the per-frame mouse deltas.
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.mouse_uv_delta = Vec2::ZERO;
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// True if any of `keys` is held.
    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.keys.contains(key))
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Cursor position normalized to the viewport, (0,0) top-left.
    pub fn mouse_uv(&self) -> Vec2 {
        self.mouse_uv
    }

    pub fn mouse_uv_delta(&self) -> Vec2 {
        self.mouse_uv_delta
    }
}
