//! Rendering interface
//!
//! The core produces ordered draw calls and a view transform; the host's
//! [`Renderer`] turns them into graphics-API work.

pub mod camera;

pub use camera::{Camera2D, Viewport};

use crate::assets::TextureHandle;
use crate::ecs::components::RenderLayer;
use crate::foundation::math::{Mat4, Vec2};
use serde::{Serialize, Deserialize};

/// Draw-call sink implemented by the host
///
/// Each frame receives `clear`, `begin`, any number of `draw` calls in
/// back-to-front order, then `end`.
pub trait Renderer {
    /// Clear the frame
    fn clear(&mut self, color: Color);

    /// Start a batch; `None` means no view transform (identity)
    fn begin(&mut self, view: Option<Mat4>);

    /// Draw one sprite
    fn draw(&mut self, sprite: &SpriteDraw);

    /// Finish the batch
    fn end(&mut self);
}

/// A single sprite draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Texture to draw
    pub texture: TextureHandle,

    /// World-space top-left position
    pub position: Vec2,

    /// Drawn size
    pub size: Vec2,

    /// Sprite origin relative to its top-left corner
    pub origin: Vec2,

    /// Layer the sprite was sorted by
    pub layer: RenderLayer,

    /// Tint
    pub tint: Color,
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white (no tint)
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Default frame clear color
    pub const CORNFLOWER_BLUE: Self = Self::rgb(100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
