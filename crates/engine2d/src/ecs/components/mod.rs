//! Entity components
//!
//! Plain data attached to an [`Entity`](crate::ecs::Entity): spatial state,
//! draw layer and optional movement behaviour.

pub mod transform;
pub mod render_layer;
pub mod movement;

pub use transform::Transform;
pub use render_layer::RenderLayer;
pub use movement::{AxisBindings, PlayerMotor};
