//! Game configuration
//!
//! Loaded from `sandbox.toml` (or any `.toml`/`.ron` path given on the
//! command line). Every field has a default, so a partial file only needs to
//! name what it changes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use engine2d::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings
    pub engine: EngineConfig,

    /// Where textures come from
    pub assets: AssetsConfig,

    /// Player settings
    pub player: PlayerConfig,

    /// Hand-placed obstacles
    pub obstacles: Vec<ObstacleConfig>,

    /// Randomly placed obstacles
    pub scatter: Option<ScatterConfig>,

    /// Headless run settings
    pub run: RunConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                fixed_timestep: Some(1.0 / 60.0),
                ..EngineConfig::default()
            },
            assets: AssetsConfig::default(),
            player: PlayerConfig::default(),
            obstacles: vec![
                ObstacleConfig::new("Rock", 320.0, 200.0),
                ObstacleConfig::new("Rock", 200.0, 360.0),
            ],
            scatter: None,
            run: RunConfig::default(),
        }
    }
}

impl Config for GameConfig {}

/// Texture sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directories searched for image files; empty uses `builtin`
    pub search_paths: Vec<PathBuf>,

    /// In-memory texture sizes by name, `[width, height]`
    pub builtin: BTreeMap<String, [u32; 2]>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        let builtin = [("Player".to_string(), [32, 48]), ("Rock".to_string(), [64, 64])]
            .into_iter()
            .collect();
        Self {
            search_paths: Vec::new(),
            builtin,
        }
    }
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Texture name
    pub texture: String,

    /// Starting position
    pub start: Vec2,

    /// Movement speed in pixels per second
    pub speed: f32,

    /// Also accept WASD for movement
    pub wasd: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            texture: "Player".to_string(),
            start: Vec2::new(200.0, 200.0),
            speed: PlayerMotor::DEFAULT_SPEED,
            wasd: true,
        }
    }
}

/// A single obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    /// Texture name
    pub texture: String,

    /// Top-left position
    pub position: Vec2,
}

impl ObstacleConfig {
    /// Create an obstacle entry
    pub fn new(texture: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            texture: texture.into(),
            position: Vec2::new(x, y),
        }
    }
}

/// Random obstacle placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Texture name
    pub texture: String,

    /// Number of obstacles to place
    pub count: usize,

    /// RNG seed; the same seed gives the same layout
    pub seed: u64,

    /// Region obstacle positions are drawn from
    pub area: Rect,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            texture: "Rock".to_string(),
            count: 8,
            seed: 1,
            area: Rect::new(-400.0, -400.0, 1200.0, 1200.0),
        }
    }
}

/// Headless run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many frames; `None` runs until the script ends
    pub frames: Option<u64>,

    /// Keyboard timeline replayed by the headless platform
    pub script: Vec<ScriptStep>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: Some(300),
            script: vec![
                ScriptStep::new(90, &[KeyCode::Right]),
                ScriptStep::new(60, &[KeyCode::Right, KeyCode::Down]),
                ScriptStep::new(60, &[KeyCode::Left]),
                ScriptStep::new(1, &[KeyCode::Escape]),
            ],
        }
    }
}

/// Keys held for a number of frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Frames the keys stay held
    pub frames: u32,

    /// Keys held
    #[serde(default)]
    pub keys: Vec<KeyCode>,
}

impl ScriptStep {
    /// Create a step
    pub fn new(frames: u32, keys: &[KeyCode]) -> Self {
        Self {
            frames,
            keys: keys.to_vec(),
        }
    }
}
