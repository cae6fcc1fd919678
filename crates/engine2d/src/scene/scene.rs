//! Scene lifecycle contract

use crate::assets::TextureProvider;
use crate::core::config::EngineConfig;
use crate::engine::FrameContext;
use crate::error::EngineError;
use crate::foundation::math::Mat4;
use crate::render::{Renderer, Viewport};

/// Lifecycle state of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneState {
    /// Constructed or unloaded; update and draw do nothing
    #[default]
    Unloaded,
    /// Loaded and current
    Loaded,
}

/// Resources available while a scene loads
pub struct LoadContext<'a> {
    /// Source of textures for the scene's entities
    pub textures: &'a mut dyn TextureProvider,

    /// Engine settings (camera defaults, viewport)
    pub config: &'a EngineConfig,
}

impl<'a> LoadContext<'a> {
    /// Create a load context
    pub fn new(textures: &'a mut dyn TextureProvider, config: &'a EngineConfig) -> Self {
        Self { textures, config }
    }
}

/// A unit of gameplay with a load/unload lifecycle
///
/// Implementations must make `update` and `draw` no-ops while
/// [`state`](Self::state) is [`SceneState::Unloaded`], and `unload` must be
/// safe to call in either state.
pub trait Scene {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Current lifecycle state
    fn state(&self) -> SceneState;

    /// Build the scene's entities and systems
    ///
    /// # Errors
    /// Returns an error if a required asset or setting is unavailable. The
    /// caller unloads the scene afterwards.
    fn load(&mut self, ctx: &mut LoadContext<'_>) -> Result<(), EngineError>;

    /// Release everything built by [`load`](Self::load)
    fn unload(&mut self);

    /// Advance the scene by one frame
    fn update(&mut self, frame: &FrameContext<'_>);

    /// Submit the scene's sprites
    fn draw(&self, renderer: &mut dyn Renderer);

    /// View transform for the draw pass
    fn view_transform(&self, _viewport: Viewport) -> Mat4 {
        Mat4::identity()
    }

    /// Convenience check for [`SceneState::Loaded`]
    fn is_loaded(&self) -> bool {
        self.state() == SceneState::Loaded
    }
}
