//! Entity storage, components and systems
//!
//! Entities are owned by an [`EntityRegistry`] and addressed by generational
//! [`EntityId`] handles. Per-frame logic lives on the entity variant;
//! cross-entity work such as collision detection lives in [`systems`].

pub mod entity;
pub mod registry;
pub mod components;
pub mod systems;

pub use entity::{Behavior, Entity, EntityId, EntityKind, UpdateContext};
pub use registry::{EntityCommands, EntityRegistry};
