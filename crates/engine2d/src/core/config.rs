//! # Engine Configuration
//!
//! Settings consumed by the [`Engine`](crate::Engine) frame driver and the
//! default camera. Serializable through the [`Config`] trait as TOML or RON.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::input::KeyCode;
use crate::render::{Camera2D, Color, Viewport};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key that requests engine shutdown when pressed
    pub exit_key: KeyCode,

    /// Fixed simulation step in seconds; `None` uses the platform clock
    pub fixed_timestep: Option<f32>,

    /// Viewport used when the platform does not report one
    pub viewport: Viewport,

    /// Color the frame is cleared to before drawing
    pub clear_color: Color,

    /// Initial camera settings for scenes that use one
    pub camera: CameraConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exit_key: KeyCode::Escape,
            fixed_timestep: None,
            viewport: Viewport::new(800.0, 480.0),
            clear_color: Color::CORNFLOWER_BLUE,
            camera: CameraConfig::default(),
        }
    }
}

impl Config for EngineConfig {}

/// Initial camera settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Zoom factor (clamped to the camera minimum)
    pub zoom: f32,

    /// Rotation in radians
    pub rotation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl CameraConfig {
    /// Build a camera with these settings
    pub fn build(&self) -> Camera2D {
        let mut camera = Camera2D::new();
        camera.set_zoom(self.zoom);
        camera.rotation = self.rotation;
        camera
    }
}
