//! # Sandbox
//!
//! A small top-down game on top of `engine2d`: a keyboard-driven player,
//! obstacles that block it and a camera that follows it. Runs headless with
//! scripted input so it can be driven from tests and CI.

pub mod assets;
pub mod config;
pub mod platform;
pub mod scene;

pub use assets::{ImageTextureProvider, StaticTextures};
pub use config::GameConfig;
pub use platform::{HeadlessPlatform, LogRenderer, RenderStats, ScriptedInput};
pub use scene::GameScene;

#[cfg(test)]
mod tests;
