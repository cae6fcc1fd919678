//! Scene director
//!
//! Holds the single current scene and mediates transitions. A transition
//! always unloads the outgoing scene completely before the incoming scene
//! starts loading, so two scenes never hold resources at the same time.

use crate::engine::FrameContext;
use crate::error::EngineError;
use crate::foundation::math::Mat4;
use crate::render::{Renderer, Viewport};
use crate::scene::scene::{LoadContext, Scene, SceneState};

/// Owner of the current scene
#[derive(Default)]
pub struct SceneDirector {
    current: Option<Box<dyn Scene>>,
}

impl SceneDirector {
    /// Create a director with no scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current scene
    ///
    /// The previous scene (if any) is unloaded, then `next` is loaded and
    /// becomes current. If loading fails, `next` is unloaded again, no scene
    /// is current afterwards and the load error is returned.
    ///
    /// # Errors
    /// [`EngineError::InvalidArgument`] if `next` is already loaded, or the
    /// error returned by [`Scene::load`].
    pub fn change_scene(&mut self, mut next: Box<dyn Scene>, ctx: &mut LoadContext<'_>) -> Result<(), EngineError> {
        if next.state() == SceneState::Loaded {
            return Err(EngineError::InvalidArgument(format!(
                "scene '{}' is already loaded",
                next.name()
            )));
        }

        if let Some(mut previous) = self.current.take() {
            log::info!("Unloading scene '{}'", previous.name());
            previous.unload();
        }

        log::info!("Loading scene '{}'", next.name());
        if let Err(err) = next.load(ctx) {
            log::error!("Scene '{}' failed to load: {}", next.name(), err);
            next.unload();
            return Err(err);
        }

        self.current = Some(next);
        Ok(())
    }

    /// Forward the update pass to the current scene
    pub fn update(&mut self, frame: &FrameContext<'_>) {
        if let Some(scene) = self.current.as_mut() {
            scene.update(frame);
        }
    }

    /// Forward the draw pass to the current scene
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(scene) = self.current.as_ref() {
            scene.draw(renderer);
        }
    }

    /// View transform of the current scene, or identity without one
    pub fn view_transform(&self, viewport: Viewport) -> Mat4 {
        self.current
            .as_ref()
            .map_or_else(Mat4::identity, |scene| scene.view_transform(viewport))
    }

    /// The current scene
    pub fn current(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    /// Check whether a scene is current
    pub fn has_scene(&self) -> bool {
        self.current.is_some()
    }

    /// Unload and drop the current scene
    pub fn shutdown(&mut self) {
        if let Some(mut scene) = self.current.take() {
            log::info!("Shutting down scene '{}'", scene.name());
            scene.unload();
        }
    }
}

impl Drop for SceneDirector {
    fn drop(&mut self) {
        self.shutdown();
    }
}
