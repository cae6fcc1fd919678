//! Sandbox game entry point
//!
//! Usage: `sandbox [config.toml|config.ron]` (defaults to `sandbox.toml`).

use engine2d::foundation::logging;
use engine2d::prelude::*;
use sandbox::{GameConfig, GameScene, HeadlessPlatform};

const DEFAULT_CONFIG: &str = "sandbox.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = GameConfig::load_or_default(&path)?;

    let mut platform = HeadlessPlatform::from_config(&config)?;
    let mut engine = Engine::new(config.engine.clone());
    engine.change_scene(Box::new(GameScene::new(&config)), platform.textures())?;

    let frames = engine.run(&mut platform);

    let stats = platform.log_renderer().stats();
    log::info!(
        "Ran {} frame(s), drew {} frame(s) with {} sprite(s), total time {:.2}s",
        frames,
        stats.frames,
        stats.sprites,
        engine.clock().total_time()
    );
    Ok(())
}
