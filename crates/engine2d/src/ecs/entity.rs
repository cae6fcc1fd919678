//! Entity implementation
//!
//! An entity is a plain record: one [`Transform`], activity and collision
//! flags, a draw layer, a texture, and an [`EntityKind`] selecting its
//! per-frame behaviour. Variants are a closed enum rather than a type
//! hierarchy; open-ended gameplay logic plugs in through [`Behavior`].

use std::fmt;

use crate::assets::TextureHandle;
use crate::ecs::components::{PlayerMotor, RenderLayer, Transform};
use crate::ecs::registry::EntityCommands;
use crate::ecs::systems::Collider;
use crate::foundation::math::{Rect, Vec2};
use crate::input::InputSource;
use crate::render::{Color, Renderer, SpriteDraw};

slotmap::new_key_type! {
    /// Generational entity handle
    ///
    /// Stale handles never alias a newer entity.
    pub struct EntityId;
}

/// Per-entity view of the current update pass
pub struct UpdateContext<'a> {
    /// Entity being updated
    pub entity: EntityId,

    /// Seconds since the previous frame
    pub delta_time: f32,

    /// Seconds since the clock started
    pub total_time: f32,

    /// Keyboard state polled for this frame
    pub input: &'a dyn InputSource,

    /// Structural changes applied when the pass ends
    pub commands: &'a mut EntityCommands,
}

/// Custom per-frame logic for scripted entities
pub trait Behavior {
    /// Advance the behaviour by one frame
    fn update(&mut self, transform: &mut Transform, ctx: &mut UpdateContext<'_>);
}

/// Entity variants
pub enum EntityKind {
    /// Generic entity with no behaviour of its own
    Prop,

    /// Static blocker
    Obstacle,

    /// Keyboard-controlled entity
    Player(PlayerMotor),

    /// Entity driven by custom logic
    Scripted(Box<dyn Behavior>),
}

impl fmt::Debug for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prop => f.write_str("Prop"),
            Self::Obstacle => f.write_str("Obstacle"),
            Self::Player(motor) => f.debug_tuple("Player").field(motor).finish(),
            Self::Scripted(_) => f.write_str("Scripted(..)"),
        }
    }
}

/// A positioned, drawable, collidable simulation object
#[derive(Debug)]
pub struct Entity {
    /// Display name used in logs
    pub name: String,

    /// Spatial state
    pub transform: Transform,

    /// Inactive entities are not updated, drawn or collided
    pub is_active: bool,

    /// Whether the entity takes part in collision detection
    pub is_collidable: bool,

    /// Draw-order layer
    pub layer: RenderLayer,

    /// Draw tint
    pub tint: Color,

    texture: TextureHandle,
    kind: EntityKind,
}

impl Entity {
    /// Collision box scale for obstacles, relative to the sprite
    pub const OBSTACLE_COLLISION_SCALE: [f32; 2] = [0.4, 0.6];

    /// Create a generic entity sized to its texture
    pub fn new(name: impl Into<String>, texture: TextureHandle, position: Vec2) -> Self {
        Self::with_kind(name, texture, position, EntityKind::Prop)
    }

    /// Create an entity of the given kind sized to its texture
    pub fn with_kind(name: impl Into<String>, texture: TextureHandle, position: Vec2, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(position, texture.size()),
            is_active: true,
            is_collidable: true,
            layer: RenderLayer::World,
            tint: Color::WHITE,
            texture,
            kind,
        }
    }

    /// Create a static obstacle with a smaller, centered collision box
    pub fn obstacle(name: impl Into<String>, texture: TextureHandle, position: Vec2) -> Self {
        let mut entity = Self::with_kind(name, texture, position, EntityKind::Obstacle);
        let [sx, sy] = Self::OBSTACLE_COLLISION_SCALE;
        entity.transform.center_collision_box(Vec2::new(sx, sy));
        entity
    }

    /// Create a keyboard-controlled player
    pub fn player(name: impl Into<String>, texture: TextureHandle, position: Vec2, speed: f32) -> Self {
        Self::with_kind(name, texture, position, EntityKind::Player(PlayerMotor::new(speed, position)))
    }

    /// Create an entity driven by a custom behaviour
    pub fn scripted<B: Behavior + 'static>(
        name: impl Into<String>,
        texture: TextureHandle,
        position: Vec2,
        behavior: B,
    ) -> Self {
        Self::with_kind(name, texture, position, EntityKind::Scripted(Box::new(behavior)))
    }

    /// Builder pattern: Set the draw layer
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Builder pattern: Enable or disable collision
    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.is_collidable = collidable;
        self
    }

    /// Builder pattern: Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Texture the entity draws with
    pub const fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Entity variant
    pub const fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Player motor, if this is a player
    pub const fn motor(&self) -> Option<&PlayerMotor> {
        match &self.kind {
            EntityKind::Player(motor) => Some(motor),
            _ => None,
        }
    }

    /// Mutable player motor, if this is a player
    pub fn motor_mut(&mut self) -> Option<&mut PlayerMotor> {
        match &mut self.kind {
            EntityKind::Player(motor) => Some(motor),
            _ => None,
        }
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Bounds used for collision
    pub fn bounds(&self) -> Rect {
        self.transform.collision_bounds()
    }

    /// Restore the position recorded before the last movement step
    ///
    /// Returns `false` for entities that do not track movement.
    pub fn revert_movement(&mut self) -> bool {
        match &self.kind {
            EntityKind::Player(motor) => {
                motor.rollback(&mut self.transform);
                true
            }
            _ => false,
        }
    }

    /// Advance the entity by one frame
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        match &mut self.kind {
            EntityKind::Prop | EntityKind::Obstacle => {}
            EntityKind::Player(motor) => motor.step(&mut self.transform, ctx.input, ctx.delta_time),
            EntityKind::Scripted(behavior) => behavior.update(&mut self.transform, ctx),
        }
    }

    /// Submit the entity's sprite
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.is_active {
            return;
        }

        renderer.draw(&SpriteDraw {
            texture: self.texture,
            position: self.transform.position,
            size: self.transform.size,
            origin: self.transform.origin,
            layer: self.layer,
            tint: self.tint,
        });
    }
}

impl Collider for Entity {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_collidable(&self) -> bool {
        self.is_collidable
    }

    fn collision_bounds(&self) -> Rect {
        self.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{texture, RecordingRenderer};
    use approx::assert_relative_eq;

    #[test]
    fn test_entity_sized_from_texture() {
        let entity = Entity::new("crate", texture(32, 16), Vec2::new(200.0, 100.0));
        assert_eq!(entity.transform.size, Vec2::new(32.0, 16.0));
        assert_eq!(entity.bounds(), Rect::new(200.0, 100.0, 32.0, 16.0));
        assert!(entity.is_active);
        assert!(entity.is_collidable);
        assert_eq!(entity.layer, RenderLayer::World);
    }

    #[test]
    fn test_obstacle_collision_box_is_centered() {
        let obstacle = Entity::obstacle("rock", texture(100, 100), Vec2::new(0.0, 0.0));
        let bounds = obstacle.bounds();

        assert!(matches!(obstacle.kind(), EntityKind::Obstacle));
        assert_relative_eq!(bounds.width, 40.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.height, 60.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.y, 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_revert_only_moves_players() {
        let mut prop = Entity::new("prop", texture(8, 8), Vec2::new(1.0, 1.0));
        assert!(!prop.revert_movement());

        let mut player = Entity::player("hero", texture(8, 8), Vec2::new(1.0, 1.0), 100.0);
        player.transform.position = Vec2::new(50.0, 50.0);
        assert!(player.revert_movement());
        assert_eq!(player.position(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_inactive_entity_does_not_draw() {
        let mut renderer = RecordingRenderer::default();
        let entity = Entity::new("ghost", texture(8, 8), Vec2::zeros()).with_active(false);
        entity.draw(&mut renderer);
        assert!(renderer.draws.is_empty());
    }
}
