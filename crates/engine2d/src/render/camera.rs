//! # 2D Camera
//!
//! Builds the view transform handed to the renderer at the start of a draw pass.
//!
//! The transform is composed as: translate by `-position`, rotate about Z,
//! scale by `zoom`, then translate to the viewport center. With nalgebra's
//! column-vector convention that product reads right to left:
//!
//! ```text
//! view = T(center) * S(zoom) * R(rotation) * T(-position)
//! ```
//!
//! so the tracked position always lands on the viewport center regardless of
//! zoom or rotation.

use crate::foundation::math::{Mat4, Point3, Vec2, Vec3};
use serde::{Serialize, Deserialize};

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point in screen space
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// 2D camera tracking a world position
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// World position mapped to the viewport center
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// Smallest allowed zoom; prevents zero or inverted scale
    pub const MIN_ZOOM: f32 = 0.1;

    /// Create a camera at the origin with unit zoom and no rotation
    pub fn new() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }

    /// Current zoom factor
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor, clamped to [`Self::MIN_ZOOM`]
    pub fn set_zoom(&mut self, zoom: f32) {
        // NaN also falls back to the minimum
        self.zoom = if zoom >= Self::MIN_ZOOM { zoom } else { Self::MIN_ZOOM };
    }

    /// Lock the camera onto a world position
    pub fn follow(&mut self, target: Vec2) {
        self.position = target;
        log::trace!("Camera following {:?}", target);
    }

    /// Compute the view transform for the given viewport
    pub fn view_matrix(&self, viewport: Viewport) -> Mat4 {
        let center = viewport.center();

        Mat4::new_translation(&Vec3::new(center.x, center.y, 0.0))
            * Mat4::new_nonuniform_scaling(&Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_axis_angle(&Vec3::z_axis(), self.rotation)
            * Mat4::new_translation(&Vec3::new(-self.position.x, -self.position.y, 0.0))
    }

    /// Map a world point to screen space
    pub fn world_to_screen(&self, point: Vec2, viewport: Viewport) -> Vec2 {
        let transformed = self
            .view_matrix(viewport)
            .transform_point(&Point3::new(point.x, point.y, 0.0));
        Vec2::new(transformed.x, transformed.y)
    }
}
