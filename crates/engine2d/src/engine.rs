//! Frame driver
//!
//! The engine owns the clock and the scene director and runs one update pass
//! followed by one draw pass per tick. Everything platform-specific (wall
//! clock, keyboard, textures, the renderer, window size) is reached through
//! [`Platform`], which the host passes in explicitly.

use crate::assets::TextureProvider;
use crate::core::config::EngineConfig;
use crate::error::EngineError;
use crate::foundation::time::EngineClock;
use crate::input::InputSource;
use crate::render::{Renderer, Viewport};
use crate::scene::{LoadContext, Scene, SceneDirector};

/// Per-frame inputs shared by every update call
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame
    pub delta_time: f32,

    /// Seconds since the clock started
    pub total_time: f32,

    /// Frame number, starting at 1
    pub frame: u64,

    /// Keyboard state for this frame
    pub input: &'a dyn InputSource,
}

/// Host services the frame driver needs
pub trait Platform {
    /// Seconds elapsed since the previous call
    fn delta_time(&mut self) -> f32;

    /// Refresh the keyboard state for a new frame
    fn poll_input(&mut self);

    /// Keyboard state polled by [`poll_input`](Self::poll_input)
    fn input(&self) -> &dyn InputSource;

    /// Texture source for scene loading
    fn textures(&mut self) -> &mut dyn TextureProvider;

    /// Current drawable area
    fn viewport(&self) -> Viewport;

    /// Renderer for the draw pass
    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Whether the host wants to stop (window closed, script finished)
    fn exit_requested(&self) -> bool {
        false
    }
}

/// Main engine struct
pub struct Engine {
    clock: EngineClock,
    director: SceneDirector,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create an engine with no scene
    pub fn new(config: EngineConfig) -> Self {
        log::info!("Initializing engine...");
        Self {
            clock: EngineClock::new(),
            director: SceneDirector::new(),
            config,
            running: true,
        }
    }

    /// Make `scene` the current scene
    ///
    /// # Errors
    /// See [`SceneDirector::change_scene`].
    pub fn change_scene(&mut self, scene: Box<dyn Scene>, textures: &mut dyn TextureProvider) -> Result<(), EngineError> {
        let mut ctx = LoadContext::new(textures, &self.config);
        self.director.change_scene(scene, &mut ctx)
    }

    /// Run the update pass for one frame
    ///
    /// The clock advances first. A fresh press of the configured exit key
    /// stops the engine and skips the scene update for that frame.
    pub fn update(&mut self, delta_time: f32, input: &dyn InputSource) {
        self.clock.advance(delta_time);

        if input.is_pressed(self.config.exit_key) {
            log::info!("Exit key {:?} pressed", self.config.exit_key);
            self.quit();
            return;
        }

        let frame = FrameContext {
            delta_time: self.clock.delta_time(),
            total_time: self.clock.total_time(),
            frame: self.clock.frame_count(),
            input,
        };
        self.director.update(&frame);
    }

    /// Run the draw pass for one frame
    pub fn draw(&self, renderer: &mut dyn Renderer, viewport: Viewport) {
        renderer.clear(self.config.clear_color);

        let view = self
            .director
            .current()
            .map(|scene| scene.view_transform(viewport));
        renderer.begin(view);
        self.director.draw(renderer);
        renderer.end();
    }

    /// Drive frames until the engine quits or the platform asks to stop
    ///
    /// Returns the number of frames run. The current scene is unloaded
    /// before returning.
    pub fn run(&mut self, platform: &mut dyn Platform) -> u64 {
        log::info!("Starting main loop...");
        let start_frame = self.clock.frame_count();

        while self.running && !platform.exit_requested() {
            let delta_time = match self.config.fixed_timestep {
                Some(step) => step,
                None => platform.delta_time(),
            };

            platform.poll_input();
            self.update(delta_time, platform.input());
            if !self.running {
                break;
            }

            let viewport = platform.viewport();
            self.draw(platform.renderer(), viewport);
        }

        self.director.shutdown();
        let frames = self.clock.frame_count() - start_frame;
        log::info!("Engine shutdown complete after {frames} frame(s)");
        frames
    }

    /// Stop the engine at the end of the current frame
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Whether the engine is still running
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Simulation clock
    pub const fn clock(&self) -> &EngineClock {
        &self.clock
    }

    /// Scene director
    pub const fn director(&self) -> &SceneDirector {
        &self.director
    }

    /// Engine configuration
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;
    use crate::foundation::math::{Mat4, Vec2};
    use crate::input::{KeyCode, KeyboardState};
    use crate::scene::{SceneState, SceneWorld};
    use crate::test_support::{FakeTextures, RecordingRenderer};
    use approx::assert_relative_eq;

    /// Player plus an obstacle, camera following the player
    struct TestScene {
        state: SceneState,
        world: SceneWorld,
        seen_dt: Vec<f32>,
    }

    impl TestScene {
        fn new() -> Self {
            Self { state: SceneState::Unloaded, world: SceneWorld::new(), seen_dt: Vec::new() }
        }
    }

    impl Scene for TestScene {
        fn name(&self) -> &str {
            "test"
        }

        fn state(&self) -> SceneState {
            self.state
        }

        fn load(&mut self, ctx: &mut LoadContext<'_>) -> Result<(), EngineError> {
            let hero = ctx.textures.load_texture("hero")?;
            let id = self.world.spawn(Entity::player("hero", hero, Vec2::zeros(), 100.0))?;
            self.world.set_controlled(Some(id));
            self.world.camera = ctx.config.camera.build();
            self.state = SceneState::Loaded;
            Ok(())
        }

        fn unload(&mut self) {
            self.world.clear();
            self.state = SceneState::Unloaded;
        }

        fn update(&mut self, frame: &FrameContext<'_>) {
            if self.state == SceneState::Loaded {
                self.seen_dt.push(frame.delta_time);
                self.world.step(frame);
                self.world.follow_controlled();
            }
        }

        fn draw(&self, renderer: &mut dyn Renderer) {
            if self.state == SceneState::Loaded {
                self.world.draw(renderer);
            }
        }

        fn view_transform(&self, viewport: Viewport) -> Mat4 {
            self.world.view_transform(viewport)
        }
    }

    struct TestPlatform {
        keyboard: KeyboardState,
        script: Vec<Vec<KeyCode>>,
        frame: usize,
        textures: FakeTextures,
        renderer: RecordingRenderer,
    }

    impl TestPlatform {
        fn new(script: Vec<Vec<KeyCode>>) -> Self {
            Self {
                keyboard: KeyboardState::new(),
                script,
                frame: 0,
                textures: FakeTextures::default().with("hero", 10, 10),
                renderer: RecordingRenderer::default(),
            }
        }
    }

    impl Platform for TestPlatform {
        fn delta_time(&mut self) -> f32 {
            0.25
        }

        fn poll_input(&mut self) {
            let keys = self.script.get(self.frame).cloned().unwrap_or_default();
            self.keyboard.poll(keys);
            self.frame += 1;
        }

        fn input(&self) -> &dyn InputSource {
            &self.keyboard
        }

        fn textures(&mut self) -> &mut dyn TextureProvider {
            &mut self.textures
        }

        fn viewport(&self) -> Viewport {
            Viewport::new(800.0, 480.0)
        }

        fn renderer(&mut self) -> &mut dyn Renderer {
            &mut self.renderer
        }

        fn exit_requested(&self) -> bool {
            self.frame >= self.script.len()
        }
    }

    #[test]
    fn test_update_advances_clock_first() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut platform = TestPlatform::new(Vec::new());
        engine.change_scene(Box::new(TestScene::new()), platform.textures()).unwrap();

        let input = KeyboardState::new();
        engine.update(0.5, &input);
        engine.update(-1.0, &input);

        assert_eq!(engine.clock().frame_count(), 2);
        assert_relative_eq!(engine.clock().total_time(), 0.5);
        assert_relative_eq!(engine.clock().delta_time(), 0.0);
    }

    #[test]
    fn test_exit_key_stops_engine() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut input = KeyboardState::new();
        input.poll([KeyCode::Escape]);

        engine.update(0.016, &input);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_held_exit_key_needs_fresh_press() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut input = KeyboardState::new();
        input.poll([KeyCode::Escape]);
        input.next_frame();

        engine.update(0.016, &input);
        assert!(engine.is_running());
        assert_eq!(engine.clock().frame_count(), 1);

        input.poll([]);
        input.poll([KeyCode::Escape]);
        engine.update(0.016, &input);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_draw_pass_order() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut platform = TestPlatform::new(Vec::new());
        engine.change_scene(Box::new(TestScene::new()), platform.textures()).unwrap();

        let viewport = platform.viewport();
        engine.draw(&mut platform.renderer, viewport);

        let renderer = &platform.renderer;
        assert_eq!(renderer.clears, vec![EngineConfig::default().clear_color]);
        assert_eq!(renderer.begins.len(), 1);
        assert!(renderer.begins[0].is_some());
        assert_eq!(renderer.draws.len(), 1);
        assert_eq!(renderer.ends, 1);
    }

    #[test]
    fn test_draw_without_scene() {
        let engine = Engine::new(EngineConfig::default());
        let mut renderer = RecordingRenderer::default();
        engine.draw(&mut renderer, Viewport::new(800.0, 480.0));

        assert_eq!(renderer.begins, vec![None]);
        assert!(renderer.draws.is_empty());
        assert_eq!(renderer.ends, 1);
    }

    #[test]
    fn test_run_until_platform_exits() {
        let mut engine = Engine::new(EngineConfig::default());
        let script = vec![vec![KeyCode::Right]; 4];
        let mut platform = TestPlatform::new(script);
        engine.change_scene(Box::new(TestScene::new()), platform.textures()).unwrap();

        let frames = engine.run(&mut platform);

        assert_eq!(frames, 4);
        assert_eq!(platform.renderer.draws.len(), 4);
        // 4 frames * 0.25 s * 100 px/s
        assert_relative_eq!(platform.renderer.draws[3].position.x, 100.0, epsilon = 1e-3);
        assert!(!engine.director().has_scene());
    }

    #[test]
    fn test_run_stops_on_exit_key() {
        let mut engine = Engine::new(EngineConfig::default());
        let script = vec![vec![], vec![KeyCode::Escape], vec![], vec![]];
        let mut platform = TestPlatform::new(script);
        engine.change_scene(Box::new(TestScene::new()), platform.textures()).unwrap();

        let frames = engine.run(&mut platform);

        assert_eq!(frames, 2);
        assert_eq!(platform.renderer.clears.len(), 1);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_fixed_timestep_overrides_platform_clock() {
        let config = EngineConfig { fixed_timestep: Some(0.5), ..EngineConfig::default() };
        let mut engine = Engine::new(config);
        let mut platform = TestPlatform::new(vec![vec![]; 3]);

        engine.run(&mut platform);

        assert_relative_eq!(engine.clock().total_time(), 1.5);
    }

    #[test]
    fn test_scene_load_error_propagates() {
        let mut engine = Engine::new(EngineConfig::default());
        let mut textures = FakeTextures::default();

        let result = engine.change_scene(Box::new(TestScene::new()), &mut textures);

        assert!(matches!(result, Err(EngineError::Asset(_))));
        assert!(!engine.director().has_scene());
    }
}
