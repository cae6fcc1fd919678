//! Scene world
//!
//! The state most scenes share: an entity registry, a collision detector, a
//! camera and an optional controlled entity. [`SceneWorld::step`] runs the
//! per-frame sequence: update entities, detect overlaps over the post-update
//! set, then react.
//!
//! The built-in reaction blocks the controlled entity. On the first pair that
//! involves it, the controlled entity is moved back to the position it held
//! before this frame's movement. The other member of the pair is never moved
//! and later pairs are not examined.

use crate::ecs::entity::{Entity, EntityId};
use crate::ecs::registry::EntityRegistry;
use crate::ecs::systems::{CollisionDetector, CollisionPair};
use crate::engine::FrameContext;
use crate::error::EngineError;
use crate::foundation::math::Mat4;
use crate::render::{Camera2D, Renderer, Viewport};

/// Entities, collision and camera owned by one scene
#[derive(Debug, Default)]
pub struct SceneWorld {
    /// Scene entities
    pub registry: EntityRegistry,

    /// Pairwise overlap detector
    pub detector: CollisionDetector,

    /// View used for the draw pass
    pub camera: Camera2D,

    controlled: Option<EntityId>,
}

impl SceneWorld {
    /// Create an empty world with a default camera
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world with the given camera
    pub fn with_camera(camera: Camera2D) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    /// Register an entity
    ///
    /// # Errors
    /// See [`EntityRegistry::add`].
    pub fn spawn(&mut self, entity: Entity) -> Result<EntityId, EngineError> {
        self.registry.add(entity)
    }

    /// Choose the entity blocked by collisions
    pub fn set_controlled(&mut self, id: Option<EntityId>) {
        self.controlled = id;
    }

    /// Entity blocked by collisions
    pub const fn controlled(&self) -> Option<EntityId> {
        self.controlled
    }

    /// The controlled entity, if it is still registered
    pub fn controlled_entity(&self) -> Option<&Entity> {
        self.controlled.and_then(|id| self.registry.get(id))
    }

    /// Run one frame: update, detect, react
    ///
    /// Returns the pairs detected this frame.
    pub fn step(&mut self, frame: &FrameContext<'_>) -> Vec<CollisionPair> {
        self.registry.update(frame);

        let pairs = self.detector.collisions_in(&self.registry);
        log::trace!("Frame {}: {} collision pair(s)", frame.frame, pairs.len());

        self.block_controlled(&pairs);
        pairs
    }

    /// Roll the controlled entity back if any pair involves it
    ///
    /// Returns `true` if a rollback happened.
    pub fn block_controlled(&mut self, pairs: &[CollisionPair]) -> bool {
        let Some(controlled) = self.controlled else {
            return false;
        };
        let Some(pair) = pairs.iter().find(|pair| pair.involves(controlled)) else {
            return false;
        };
        let Some(entity) = self.registry.get_mut(controlled) else {
            return false;
        };

        let reverted = entity.revert_movement();
        if reverted {
            log::debug!(
                "Blocked '{}' against {:?}",
                entity.name,
                pair.other(controlled)
            );
        }
        reverted
    }

    /// Center the camera on the controlled entity
    pub fn follow_controlled(&mut self) {
        if let Some(position) = self.controlled_entity().map(Entity::position) {
            self.camera.follow(position);
        }
    }

    /// Submit every active entity's sprite
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.registry.draw(renderer);
    }

    /// Camera view transform
    pub fn view_transform(&self, viewport: Viewport) -> Mat4 {
        self.camera.view_matrix(viewport)
    }

    /// Drop all entities and forget the controlled entity
    pub fn clear(&mut self) {
        self.registry.clear();
        self.controlled = None;
    }
}
