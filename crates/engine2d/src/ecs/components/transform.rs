//! Transform component
//!
//! Pure spatial state for a 2D entity: where it is, how large it is drawn, and
//! an independent collision rectangle that may be smaller than and offset
//! within the visual one.

use crate::foundation::math::{utils, Rect, Vec2};

/// Spatial state of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Top-left position in world space
    pub position: Vec2,

    /// Visual size
    pub size: Vec2,

    /// Sprite origin relative to the top-left corner
    pub origin: Vec2,

    /// Collision rectangle size (defaults to the visual size)
    pub collision_size: Vec2,

    /// Collision rectangle offset from `position`
    pub collision_offset: Vec2,
}

impl Transform {
    /// Create a transform whose collision box matches its visual bounds
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            origin: Vec2::zeros(),
            collision_size: size,
            collision_offset: Vec2::zeros(),
        }
    }

    /// Builder pattern: Set the collision box explicitly
    pub fn with_collision_box(mut self, size: Vec2, offset: Vec2) -> Self {
        self.collision_size = size;
        self.collision_offset = offset;
        self
    }

    /// Shrink the collision box to `scale` of the visual size and center it
    pub fn center_collision_box(&mut self, scale: Vec2) {
        self.collision_size = self.size.component_mul(&scale);
        self.collision_offset = (self.size - self.collision_size) * 0.5;
    }

    /// Visual bounds (used for drawing)
    pub fn visual_bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    /// Collision bounds (used for collision checks)
    pub fn collision_bounds(&self) -> Rect {
        Rect::from_position_size(self.position + self.collision_offset, self.collision_size)
    }

    /// Check that the transform can take part in the simulation
    ///
    /// Every component must be finite and neither size may be negative.
    pub fn is_valid(&self) -> bool {
        [self.position, self.size, self.origin, self.collision_size, self.collision_offset]
            .iter()
            .all(utils::is_finite)
            && self.size.x >= 0.0
            && self.size.y >= 0.0
            && self.collision_size.x >= 0.0
            && self.collision_size.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_collision_defaults_to_visual() {
        let transform = Transform::new(Vec2::new(3.0, 4.0), Vec2::new(10.0, 20.0));
        assert_eq!(transform.visual_bounds(), transform.collision_bounds());
        assert_eq!(transform.visual_bounds(), Rect::new(3.0, 4.0, 10.0, 20.0));
    }

    #[test]
    fn test_collision_box_offset() {
        let transform = Transform::new(Vec2::new(10.0, 10.0), Vec2::new(32.0, 32.0))
            .with_collision_box(Vec2::new(8.0, 4.0), Vec2::new(2.0, 3.0));
        assert_eq!(transform.collision_bounds(), Rect::new(12.0, 13.0, 8.0, 4.0));
        assert_eq!(transform.visual_bounds(), Rect::new(10.0, 10.0, 32.0, 32.0));
    }

    #[test]
    fn test_centered_collision_box() {
        let mut transform = Transform::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0));
        transform.center_collision_box(Vec2::new(0.4, 0.6));

        let bounds = transform.collision_bounds();
        assert_relative_eq!(bounds.width, 40.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.height, 30.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.y, 10.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.center().x, transform.visual_bounds().center().x, epsilon = 1e-4);
    }

    #[test]
    fn test_validity() {
        let valid = Transform::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        assert!(valid.is_valid());

        let mut nan = valid.clone();
        nan.position.x = f32::NAN;
        assert!(!nan.is_valid());

        let negative = Transform::new(Vec2::zeros(), Vec2::new(-1.0, 5.0));
        assert!(!negative.is_valid());
    }
}
