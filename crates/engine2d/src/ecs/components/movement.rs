//! Movement component for player-controlled entities
//!
//! Reads the four directional keys each frame and moves the owning transform
//! at a constant speed. Diagonal input is normalized so every direction
//! moves at the same rate.

use crate::ecs::components::Transform;
use crate::foundation::math::{utils, Vec2};
use crate::input::{InputSource, KeyCode};

/// Keyboard-driven movement with rollback support
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMotor {
    /// Movement speed in units per second
    pub speed: f32,

    /// Position before the most recent movement step
    pub previous_position: Vec2,

    /// Keys for up, down, left and right
    pub bindings: AxisBindings,
}

impl PlayerMotor {
    /// Default speed in pixels per second
    pub const DEFAULT_SPEED: f32 = 200.0;

    /// Create a motor with the given speed, starting at `position`
    pub fn new(speed: f32, position: Vec2) -> Self {
        Self {
            speed,
            previous_position: position,
            bindings: AxisBindings::default(),
        }
    }

    /// Builder pattern: Use different key bindings
    pub fn with_bindings(mut self, bindings: AxisBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Unit direction (or zero) from the currently held keys
    pub fn direction(&self, input: &dyn InputSource) -> Vec2 {
        let mut direction = Vec2::zeros();

        if input.any_down(&self.bindings.up) {
            direction.y -= 1.0;
        }
        if input.any_down(&self.bindings.down) {
            direction.y += 1.0;
        }
        if input.any_down(&self.bindings.left) {
            direction.x -= 1.0;
        }
        if input.any_down(&self.bindings.right) {
            direction.x += 1.0;
        }

        utils::normalize_or_zero(direction)
    }

    /// Apply one movement step
    ///
    /// Records the pre-move position first so a collision response can
    /// restore it.
    pub fn step(&mut self, transform: &mut Transform, input: &dyn InputSource, delta_time: f32) {
        self.previous_position = transform.position;
        transform.position += self.direction(input) * self.speed * delta_time;
    }

    /// Move the transform back to where it was before the last step
    pub fn rollback(&self, transform: &mut Transform) {
        transform.position = self.previous_position;
    }
}

/// Keys mapped to each movement axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisBindings {
    /// Keys moving toward -y
    pub up: Vec<KeyCode>,
    /// Keys moving toward +y
    pub down: Vec<KeyCode>,
    /// Keys moving toward -x
    pub left: Vec<KeyCode>,
    /// Keys moving toward +x
    pub right: Vec<KeyCode>,
}

impl Default for AxisBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::Up],
            down: vec![KeyCode::Down],
            left: vec![KeyCode::Left],
            right: vec![KeyCode::Right],
        }
    }
}

impl AxisBindings {
    /// Arrow keys plus WASD
    pub fn arrows_and_wasd() -> Self {
        Self {
            up: vec![KeyCode::Up, KeyCode::W],
            down: vec![KeyCode::Down, KeyCode::S],
            left: vec![KeyCode::Left, KeyCode::A],
            right: vec![KeyCode::Right, KeyCode::D],
        }
    }
}
