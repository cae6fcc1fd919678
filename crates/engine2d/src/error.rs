//! Engine-level errors

use crate::assets::AssetError;
use crate::config::ConfigError;
use thiserror::Error;

/// Engine-level errors
///
/// Per-frame work never fails; these surface only at the call that received
/// the bad input (registration, scene changes, loading).
#[derive(Error, Debug)]
pub enum EngineError {
    /// A caller passed an argument the operation cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Asset system error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scene failed to load
    #[error("Scene '{scene}' failed to load: {reason}")]
    SceneLoad {
        /// Name of the scene
        scene: String,
        /// What went wrong
        reason: String,
    },
}
