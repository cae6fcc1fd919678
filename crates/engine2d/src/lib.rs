//! # Engine2D
//!
//! A minimal 2D game engine core: a per-frame simulation loop that owns a set of
//! positioned, drawable, collidable entities, advances them once per tick,
//! detects overlapping pairs and lets a scene react to those overlaps.
//!
//! ## Features
//!
//! - **Entity Registry**: Arena-backed entity storage with stable handles
//! - **Layered Drawing**: Stable back-to-front ordering by render layer
//! - **Collision Detection**: Brute-force AABB pair detection
//! - **Scenes**: Load/unload lifecycle with a single current scene
//! - **Camera**: 2D view transform that keeps a tracked point centered
//!
//! Texture loading, raw input polling, rendering and windowing are supplied by
//! the host through the traits in [`assets`], [`input`], [`render`] and
//! [`engine::Platform`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use engine2d::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     # fn platform() -> Box<dyn Platform> { unimplemented!() }
//!     # fn my_scene() -> Box<dyn Scene> { unimplemented!() }
//!     let mut platform = platform();
//!     let mut engine = Engine::new(EngineConfig::default());
//!     engine.change_scene(my_scene(), platform.textures())?;
//!     let frames = engine.run(platform.as_mut());
//!     log::info!("Ran {frames} frames");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod ecs;
pub mod assets;
pub mod render;
pub mod input;
pub mod scene;
pub mod config;

mod engine;
mod error;

#[cfg(test)]
mod test_support;

pub use engine::{Engine, FrameContext, Platform};
pub use error::EngineError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError, FrameContext, Platform,
        foundation::{
            math::{Vec2, Mat4, Rect},
            time::{EngineClock, FrameTimer},
        },
        ecs::{
            Entity, EntityId, EntityKind, EntityRegistry, EntityCommands, Behavior, UpdateContext,
            components::{Transform, RenderLayer, PlayerMotor},
            systems::{CollisionDetector, CollisionPair, Collider},
        },
        assets::{AssetError, TextureHandle, TextureProvider},
        render::{Renderer, SpriteDraw, Color, Camera2D, Viewport},
        input::{InputSource, KeyCode, KeyboardState},
        scene::{Scene, SceneState, SceneDirector, SceneWorld, LoadContext},
        core::config::EngineConfig,
        config::{Config, ConfigError},
    };
}
