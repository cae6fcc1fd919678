//! Entity registry
//!
//! Owns a scene's entities in a generational arena and keeps a separate
//! insertion order used for iteration, update order and draw tie-breaking.
//!
//! The update pass walks a snapshot of the ids present when it starts.
//! Entities that want to spawn or remove others during the pass queue the
//! change on [`EntityCommands`]; the registry applies the queue once the pass
//! has finished, so no entity is skipped or visited twice.

use slotmap::SlotMap;

use crate::ecs::entity::{Entity, EntityId, UpdateContext};
use crate::engine::FrameContext;
use crate::error::EngineError;
use crate::render::Renderer;

/// Structural changes queued during an update pass
#[derive(Debug, Default)]
pub struct EntityCommands {
    spawns: Vec<Entity>,
    despawns: Vec<EntityId>,
}

impl EntityCommands {
    /// Queue a new entity
    pub fn spawn(&mut self, entity: Entity) {
        self.spawns.push(entity);
    }

    /// Queue an entity for removal
    pub fn despawn(&mut self, id: EntityId) {
        self.despawns.push(id);
    }

    /// Check whether anything is queued
    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.despawns.is_empty()
    }
}

/// Owner of a scene's entity set
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: SlotMap<EntityId, Entity>,
    order: Vec<EntityId>,
    pending: EntityCommands,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity
    ///
    /// # Errors
    /// [`EngineError::InvalidArgument`] if the entity's transform has
    /// non-finite components or a negative size.
    pub fn add(&mut self, entity: Entity) -> Result<EntityId, EngineError> {
        if !entity.transform.is_valid() {
            return Err(EngineError::InvalidArgument(format!(
                "entity '{}' has an invalid transform: {:?}",
                entity.name, entity.transform
            )));
        }

        log::debug!("Adding entity '{}' on layer {:?}", entity.name, entity.layer);
        let id = self.entities.insert(entity);
        self.order.push(id);
        Ok(id)
    }

    /// Remove an entity, returning it if it was present
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(id)?;
        self.order.retain(|&other| other != id);
        log::debug!("Removed entity '{}'", entity.name);
        Some(entity)
    }

    /// Advance every active entity by one frame
    ///
    /// Commands queued by entities during the pass are applied afterwards.
    pub fn update(&mut self, frame: &FrameContext<'_>) {
        let snapshot = self.order.clone();
        let mut commands = std::mem::take(&mut self.pending);

        for id in snapshot {
            let Some(entity) = self.entities.get_mut(id) else {
                continue;
            };
            if !entity.is_active {
                continue;
            }

            let mut ctx = UpdateContext {
                entity: id,
                delta_time: frame.delta_time,
                total_time: frame.total_time,
                input: frame.input,
                commands: &mut commands,
            };
            entity.update(&mut ctx);
        }

        self.apply(commands);
    }

    /// Apply queued spawns and removals
    pub fn apply(&mut self, commands: EntityCommands) {
        if commands.is_empty() {
            return;
        }
        let EntityCommands { spawns, despawns } = commands;
        log::debug!("Applying {} spawn(s), {} despawn(s)", spawns.len(), despawns.len());

        for id in despawns {
            self.remove(id);
        }
        for entity in spawns {
            if let Err(err) = self.add(entity) {
                log::warn!("Dropping queued spawn: {err}");
            }
        }
    }

    /// Queue changes from outside an update pass; applied by the next [`update`](Self::update)
    pub fn commands(&mut self) -> &mut EntityCommands {
        &mut self.pending
    }

    /// Draw active entities back to front
    ///
    /// Sorted by ascending layer; entities sharing a layer keep insertion order.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for id in self.draw_order() {
            if let Some(entity) = self.entities.get(id) {
                entity.draw(renderer);
            }
        }
    }

    /// Ids of the active entities in the order they are drawn
    pub fn draw_order(&self) -> Vec<EntityId> {
        let mut visible: Vec<(EntityId, &Entity)> = self.iter().filter(|(_, entity)| entity.is_active).collect();
        // sort_by_key is stable
        visible.sort_by_key(|(_, entity)| entity.layer);
        visible.into_iter().map(|(id, _)| id).collect()
    }

    /// Iterate entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.entities.get(id).map(|entity| (id, entity)))
    }

    /// Collision candidates in insertion order
    pub fn candidates(&self) -> Vec<(EntityId, &Entity)> {
        self.iter().collect()
    }

    /// Look up an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity mutably
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Check whether an entity is registered
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Find the first entity with the given name
    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.iter().find(|(_, entity)| entity.name == name).map(|(id, _)| id)
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
        self.pending = EntityCommands::default();
    }
}
