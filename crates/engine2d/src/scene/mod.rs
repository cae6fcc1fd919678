//! Scene management
//!
//! A scene owns everything one screen of the game needs: its entities, a
//! collision detector, an optional camera and the policy that reacts to
//! collisions. [`SceneDirector`] holds the single current scene and
//! forwards the frame's update and draw passes to it.

#[allow(clippy::module_inception)]
pub mod scene;
pub mod world;
pub mod director;

pub use scene::{LoadContext, Scene, SceneState};
pub use world::SceneWorld;
pub use director::SceneDirector;
