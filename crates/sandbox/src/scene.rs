//! Main gameplay scene
//!
//! A keyboard-driven player walks around a field of obstacles. Obstacles
//! block the player; the camera stays locked on the player.

use engine2d::prelude::*;
use engine2d::ecs::components::AxisBindings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, ObstacleConfig, PlayerConfig, ScatterConfig};

/// Attempts per obstacle before scattering gives up on a free spot
const SCATTER_ATTEMPTS: usize = 16;

/// Placement attempts allowed for `count` obstacles
fn scatter_attempts(count: usize) -> usize {
    count.saturating_mul(SCATTER_ATTEMPTS)
}

/// Player-versus-obstacles scene
pub struct GameScene {
    player_config: PlayerConfig,
    obstacles: Vec<ObstacleConfig>,
    scatter: Option<ScatterConfig>,
    state: SceneState,
    world: SceneWorld,
    player: Option<EntityId>,
    blocked_frames: u64,
}

impl GameScene {
    /// Scene name used in logs
    pub const NAME: &'static str = "game";

    /// Create an unloaded scene from the game configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player_config: config.player.clone(),
            obstacles: config.obstacles.clone(),
            scatter: config.scatter.clone(),
            state: SceneState::Unloaded,
            world: SceneWorld::new(),
            player: None,
            blocked_frames: 0,
        }
    }

    /// The player entity while loaded
    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.world.registry.get(id))
    }

    /// Scene entities and camera
    pub const fn world(&self) -> &SceneWorld {
        &self.world
    }

    /// Frames in which the player was pushed back by an obstacle
    pub const fn blocked_frames(&self) -> u64 {
        self.blocked_frames
    }

    fn spawn_player(&mut self, textures: &mut dyn TextureProvider) -> Result<EntityId, EngineError> {
        let config = &self.player_config;
        let texture = textures.load_texture(&config.texture)?;

        let mut player = Entity::player("player", texture, config.start, config.speed);
        if config.wasd {
            if let Some(motor) = player.motor_mut() {
                motor.bindings = AxisBindings::arrows_and_wasd();
            }
        }
        // Drawn above obstacles
        player.layer = RenderLayer::Foreground;

        self.world.spawn(player)
    }

    fn spawn_obstacles(&mut self, textures: &mut dyn TextureProvider) -> Result<(), EngineError> {
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            let texture = textures.load_texture(&obstacle.texture)?;
            self.world
                .spawn(Entity::obstacle(format!("obstacle-{index}"), texture, obstacle.position))?;
        }
        Ok(())
    }

    /// Place seeded random obstacles that do not overlap the player
    fn scatter_obstacles(&mut self, textures: &mut dyn TextureProvider) -> Result<usize, EngineError> {
        let Some(scatter) = self.scatter.clone() else {
            return Ok(0);
        };
        if scatter.count == 0 {
            return Ok(0);
        }
        let area = scatter.area;
        // Large coordinates can swallow a small extent in f32
        let has_room = area.is_finite()
            && area.right().is_finite()
            && area.bottom().is_finite()
            && area.left() < area.right()
            && area.top() < area.bottom();
        if !has_room {
            return Err(EngineError::SceneLoad {
                scene: Self::NAME.to_string(),
                reason: format!("scatter area {:?} is empty", scatter.area),
            });
        }

        let texture = textures.load_texture(&scatter.texture)?;
        let keep_clear = self.player().map(Entity::bounds);
        let mut rng = StdRng::seed_from_u64(scatter.seed);
        let mut placed = 0;

        for _ in 0..scatter_attempts(scatter.count) {
            if placed == scatter.count {
                break;
            }

            let position = Vec2::new(
                rng.gen_range(area.left()..area.right()),
                rng.gen_range(area.top()..area.bottom()),
            );
            let obstacle = Entity::obstacle(format!("scatter-{placed}"), texture, position);
            if keep_clear.is_some_and(|clear| clear.intersects(&obstacle.bounds())) {
                continue;
            }

            self.world.spawn(obstacle)?;
            placed += 1;
        }

        if placed < scatter.count {
            log::warn!("Placed only {placed} of {} scattered obstacles", scatter.count);
        }
        Ok(placed)
    }
}

impl Scene for GameScene {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn state(&self) -> SceneState {
        self.state
    }

    fn load(&mut self, ctx: &mut LoadContext<'_>) -> Result<(), EngineError> {
        self.world = SceneWorld::with_camera(ctx.config.camera.build());

        let player = self.spawn_player(ctx.textures)?;
        self.player = Some(player);
        self.world.set_controlled(Some(player));

        self.spawn_obstacles(ctx.textures)?;
        let scattered = self.scatter_obstacles(ctx.textures)?;
        self.world.follow_controlled();

        log::info!(
            "Game scene ready: {} entities ({} scattered)",
            self.world.registry.len(),
            scattered
        );
        self.state = SceneState::Loaded;
        Ok(())
    }

    fn unload(&mut self) {
        self.world.clear();
        self.player = None;
        self.state = SceneState::Unloaded;
    }

    fn update(&mut self, frame: &FrameContext<'_>) {
        if self.state != SceneState::Loaded {
            return;
        }

        let pairs = self.world.step(frame);
        if let Some(player) = self.player {
            if pairs.iter().any(|pair| pair.involves(player)) {
                self.blocked_frames += 1;
            }
        }
        self.world.follow_controlled();
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.state == SceneState::Loaded {
            self.world.draw(renderer);
        }
    }

    fn view_transform(&self, viewport: Viewport) -> Mat4 {
        if self.state == SceneState::Loaded {
            self.world.view_transform(viewport)
        } else {
            Mat4::identity()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticTextures;
    use approx::assert_relative_eq;

    fn textures() -> StaticTextures {
        StaticTextures::new().with("Player", 32, 48).with("Rock", 64, 64)
    }

    fn load(scene: &mut GameScene, config: &GameConfig) -> Result<(), EngineError> {
        let mut textures = textures();
        scene.load(&mut LoadContext::new(&mut textures, &config.engine))
    }

    fn frame(input: &KeyboardState) -> FrameContext<'_> {
        FrameContext {
            delta_time: 0.1,
            total_time: 0.1,
            frame: 1,
            input,
        }
    }

    fn holding(keys: &[KeyCode]) -> KeyboardState {
        let mut input = KeyboardState::new();
        input.poll(keys.iter().copied());
        input
    }

    #[test]
    fn test_load_spawns_player_and_obstacles() {
        let config = GameConfig::default();
        let mut scene = GameScene::new(&config);
        load(&mut scene, &config).unwrap();

        assert!(scene.is_loaded());
        assert_eq!(scene.world().registry.len(), 1 + config.obstacles.len());
        let player = scene.player().unwrap();
        assert_eq!(player.position(), config.player.start);
        assert_eq!(player.transform.size, Vec2::new(32.0, 48.0));
        assert_eq!(scene.world().camera.position, config.player.start);
    }

    #[test]
    fn test_missing_texture_fails_load() {
        let config = GameConfig {
            obstacles: vec![ObstacleConfig::new("Nope", 0.0, 0.0)],
            ..GameConfig::default()
        };
        let mut scene = GameScene::new(&config);

        let result = load(&mut scene, &config);
        assert!(matches!(result, Err(EngineError::Asset(AssetError::NotFound(_)))));
    }

    #[test]
    fn test_obstacle_blocks_player() {
        // Player 32x48 at (200,200); rock collision box spans x 269.2..294.8 when placed at x=250
        let config = GameConfig {
            obstacles: vec![ObstacleConfig::new("Rock", 250.0, 190.0)],
            ..GameConfig::default()
        };
        let mut scene = GameScene::new(&config);
        load(&mut scene, &config).unwrap();
        let right = holding(&[KeyCode::Right]);

        // 20 px per frame: 200 -> 220 is free (player right edge 252 < 269.2)
        scene.update(&frame(&right));
        assert_relative_eq!(scene.player().unwrap().position().x, 220.0, epsilon = 1e-3);

        // 220 -> 240 would put the right edge at 272, inside the rock box
        scene.update(&frame(&right));
        assert_relative_eq!(scene.player().unwrap().position().x, 220.0, epsilon = 1e-3);
        assert_eq!(scene.blocked_frames(), 1);
        assert_eq!(scene.world().camera.position, scene.player().unwrap().position());
    }

    #[test]
    fn test_wasd_moves_player() {
        let config = GameConfig { obstacles: Vec::new(), ..GameConfig::default() };
        let mut scene = GameScene::new(&config);
        load(&mut scene, &config).unwrap();

        scene.update(&frame(&holding(&[KeyCode::W])));
        assert_relative_eq!(scene.player().unwrap().position().y, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_scatter_is_seeded_and_keeps_player_clear() {
        let config = GameConfig {
            obstacles: Vec::new(),
            scatter: Some(ScatterConfig {
                count: 12,
                seed: 7,
                area: Rect::new(0.0, 0.0, 600.0, 600.0),
                ..ScatterConfig::default()
            }),
            ..GameConfig::default()
        };

        let positions = |scene: &GameScene| -> Vec<Vec2> {
            scene.world().registry.iter().map(|(_, entity)| entity.position()).collect()
        };

        let mut first = GameScene::new(&config);
        load(&mut first, &config).unwrap();
        let mut second = GameScene::new(&config);
        load(&mut second, &config).unwrap();

        assert_eq!(first.world().registry.len(), 13);
        assert_eq!(positions(&first), positions(&second));

        let player = first.player().unwrap().bounds();
        let clear = first
            .world()
            .registry
            .iter()
            .filter(|(_, entity)| entity.name.starts_with("scatter-"))
            .all(|(_, entity)| !entity.bounds().intersects(&player));
        assert!(clear);
    }

    #[test]
    fn test_empty_scatter_area_fails_load() {
        let config = GameConfig {
            scatter: Some(ScatterConfig { area: Rect::new(0.0, 0.0, 0.0, 10.0), ..ScatterConfig::default() }),
            ..GameConfig::default()
        };
        let mut scene = GameScene::new(&config);
        assert!(matches!(load(&mut scene, &config), Err(EngineError::SceneLoad { .. })));
    }

    #[test]
    fn test_far_scatter_area_fails_load() {
        // x + width rounds back to x at this magnitude
        let config = GameConfig {
            scatter: Some(ScatterConfig { count: 1, area: Rect::new(1e8, 1e8, 1.0, 1.0), ..ScatterConfig::default() }),
            ..GameConfig::default()
        };
        let mut scene = GameScene::new(&config);
        assert!(matches!(load(&mut scene, &config), Err(EngineError::SceneLoad { .. })));

        let config = GameConfig {
            scatter: Some(ScatterConfig { count: 1, area: Rect::new(f32::MAX, 0.0, f32::MAX, 1.0), ..ScatterConfig::default() }),
            ..GameConfig::default()
        };
        let mut scene = GameScene::new(&config);
        assert!(matches!(load(&mut scene, &config), Err(EngineError::SceneLoad { .. })));
    }

    #[test]
    fn test_scatter_attempts_saturate() {
        assert_eq!(scatter_attempts(3), 3 * SCATTER_ATTEMPTS);
        assert_eq!(scatter_attempts(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_unloaded_scene_is_inert() {
        let config = GameConfig::default();
        let mut scene = GameScene::new(&config);
        load(&mut scene, &config).unwrap();
        scene.unload();

        let mut renderer = crate::platform::LogRenderer::new();
        renderer.begin(None);
        scene.update(&frame(&holding(&[KeyCode::Right])));
        scene.draw(&mut renderer);
        renderer.end();

        assert!(!scene.is_loaded());
        assert!(scene.player().is_none());
        assert!(renderer.last_frame().is_empty());
        assert_eq!(scene.view_transform(Viewport::new(800.0, 480.0)), Mat4::identity());
    }
}
