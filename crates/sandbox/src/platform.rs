//! Headless platform
//!
//! Runs the game without a window: keyboard input comes from a scripted
//! timeline, draw calls are logged instead of rasterized, and time comes from
//! a wall clock or the engine's fixed timestep.

use engine2d::assets::TextureProvider;
use engine2d::foundation::math::Mat4;
use engine2d::foundation::time::FrameTimer;
use engine2d::input::{InputSource, KeyCode, KeyboardState};
use engine2d::render::{Color, Renderer, SpriteDraw, Viewport};
use engine2d::{EngineError, Platform};

use crate::assets::{ImageTextureProvider, StaticTextures};
use crate::config::{GameConfig, ScriptStep};

/// Keyboard input replayed from a timeline of steps
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    steps: Vec<ScriptStep>,
    step: usize,
    frames_in_step: u32,
    keyboard: KeyboardState,
}

impl ScriptedInput {
    /// Create an input source from a timeline
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            step: 0,
            frames_in_step: 0,
            keyboard: KeyboardState::new(),
        }
    }

    /// Move to the next frame of the timeline
    ///
    /// Once the timeline is exhausted no keys are held.
    pub fn advance(&mut self) {
        while let Some(step) = self.steps.get(self.step) {
            if self.frames_in_step < step.frames {
                break;
            }
            self.step += 1;
            self.frames_in_step = 0;
        }

        match self.steps.get(self.step) {
            Some(step) => {
                self.keyboard.poll(step.keys.iter().copied());
                self.frames_in_step += 1;
            }
            None => self.keyboard.poll([]),
        }
    }

    /// Whether every step has been replayed
    pub fn is_finished(&self) -> bool {
        let mut remaining = self.steps.iter().skip(self.step);
        match remaining.next() {
            None => true,
            Some(current) => self.frames_in_step >= current.frames && remaining.all(|step| step.frames == 0),
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    fn is_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }
}

/// Totals gathered by [`LogRenderer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Completed frames
    pub frames: u64,
    /// Sprites submitted across all frames
    pub sprites: u64,
}

/// Renderer that logs draw calls and keeps the most recent frame
#[derive(Debug, Default)]
pub struct LogRenderer {
    clear_color: Option<Color>,
    view: Option<Mat4>,
    pending: Vec<SpriteDraw>,
    last_frame: Vec<SpriteDraw>,
    stats: RenderStats,
}

impl LogRenderer {
    /// Create a renderer with empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites submitted in the last completed frame
    pub fn last_frame(&self) -> &[SpriteDraw] {
        &self.last_frame
    }

    /// View transform of the last frame
    pub const fn view(&self) -> Option<&Mat4> {
        self.view.as_ref()
    }

    /// Clear color of the last frame
    pub const fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Running totals
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl Renderer for LogRenderer {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
    }

    fn begin(&mut self, view: Option<Mat4>) {
        self.view = view;
        self.pending.clear();
    }

    fn draw(&mut self, sprite: &SpriteDraw) {
        log::trace!(
            "draw {:?} at ({:.1}, {:.1}) layer {:?}",
            sprite.texture.id(),
            sprite.position.x,
            sprite.position.y,
            sprite.layer
        );
        self.pending.push(*sprite);
    }

    fn end(&mut self) {
        self.stats.frames += 1;
        self.stats.sprites += self.pending.len() as u64;
        self.last_frame = std::mem::take(&mut self.pending);
        log::debug!("Frame {}: {} sprite(s)", self.stats.frames, self.last_frame.len());
    }
}

/// Windowless [`Platform`] used by the sandbox binary and tests
pub struct HeadlessPlatform {
    textures: Box<dyn TextureProvider>,
    input: ScriptedInput,
    renderer: LogRenderer,
    viewport: Viewport,
    timer: FrameTimer,
    frame_limit: Option<u64>,
    frames: u64,
}

impl HeadlessPlatform {
    /// Create a platform from explicit parts
    pub fn new(textures: Box<dyn TextureProvider>, input: ScriptedInput, viewport: Viewport) -> Self {
        Self {
            textures,
            input,
            renderer: LogRenderer::new(),
            viewport,
            timer: FrameTimer::new(),
            frame_limit: None,
            frames: 0,
        }
    }

    /// Build a platform from the game configuration
    ///
    /// Uses image files when search paths are configured, the built-in
    /// size table otherwise.
    ///
    /// # Errors
    /// [`EngineError::InvalidArgument`] if a configured search path is not
    /// a directory.
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        let textures: Box<dyn TextureProvider> = if config.assets.search_paths.is_empty() {
            log::info!("Using {} built-in texture size(s)", config.assets.builtin.len());
            Box::new(config.assets.builtin.iter().map(|(name, size)| (name.clone(), *size)).collect::<StaticTextures>())
        } else {
            if let Some(bad) = config.assets.search_paths.iter().find(|path| !path.is_dir()) {
                return Err(EngineError::InvalidArgument(format!(
                    "texture search path {} is not a directory",
                    bad.display()
                )));
            }
            Box::new(ImageTextureProvider::new(config.assets.search_paths.iter().cloned()))
        };

        let input = ScriptedInput::new(config.run.script.clone());
        Ok(Self::new(textures, input, config.engine.viewport).with_frame_limit(config.run.frames))
    }

    /// Builder pattern: Stop after a number of frames
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Draw-call recorder
    pub const fn log_renderer(&self) -> &LogRenderer {
        &self.renderer
    }

    /// Frames polled so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl Platform for HeadlessPlatform {
    fn delta_time(&mut self) -> f32 {
        self.timer.tick()
    }

    fn poll_input(&mut self) {
        self.input.advance();
        self.frames += 1;
    }

    fn input(&self) -> &dyn InputSource {
        &self.input
    }

    fn textures(&mut self) -> &mut dyn TextureProvider {
        self.textures.as_mut()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.renderer
    }

    fn exit_requested(&self) -> bool {
        match self.frame_limit {
            Some(limit) => self.frames >= limit,
            None => self.input.is_finished(),
        }
    }
}
