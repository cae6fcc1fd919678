//! # Core Engine Module
//!
//! Shared abstractions used by the rest of the engine.
//!
//! ## Organization
//!
//! - **Config**: Engine configuration consumed by the frame driver
//! - **Foundation**: Low-level utilities (math, time, logging)
//! - **ECS**: Entities, registry and collision detection

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;
pub use crate::ecs;

pub use config::{CameraConfig, EngineConfig};
pub use crate::config::{Config, ConfigError};
