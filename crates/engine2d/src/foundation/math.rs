//! Math utilities and types
//!
//! Provides the 2D vector, matrix and rectangle types used by the simulation core.

pub use nalgebra::{Vector2, Vector3, Matrix4};
use serde::{Deserialize, Serialize};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type (view transforms)
pub type Mat4 = Matrix4<f32>;

/// 3D point type, for transforming positions through a [`Mat4`]
pub type Point3 = nalgebra::Point3<f32>;

/// Axis-aligned rectangle described by its top-left corner and size
///
/// Uses screen conventions: `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its corner and size components
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a corner position and a size vector
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Left edge
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Check whether two rectangles overlap
    ///
    /// Comparisons are strict, so rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Check whether a point lies inside the rectangle (half-open on the far edges)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// Check that every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Normalize a direction, leaving the zero vector untouched
    pub fn normalize_or_zero(direction: Vec2) -> Vec2 {
        let magnitude = direction.magnitude();
        if magnitude > f32::EPSILON {
            direction / magnitude
        } else {
            Vec2::zeros()
        }
    }

    /// Check that both components are finite
    pub fn is_finite(v: &Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}
