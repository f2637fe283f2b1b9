//! Shared helpers for integration tests.

#![allow(dead_code)]

use flappy::config::GameConfig;
use flappy::core::game::FlappyGame;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn new_game(config: GameConfig, seed: u64) -> (FlappyGame, ChaCha8Rng) {
    let mut rng = seeded(seed);
    let game = FlappyGame::new(config, &mut rng);
    (game, rng)
}

/// No gravity and a gap so tall the bird at mid-screen never touches a pipe.
///
/// Every gap spans 100..500, so the game runs forever and pairs move on a
/// fixed schedule: pair 0 is passed on tick 231 and recycled on tick 284,
/// a new pair spawns every 101 ticks.
pub fn floating_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        gap_height: 400.0,
        ..GameConfig::default()
    }
}

/// Default screen, but tall enough that free fall lasts well past 50 ticks.
pub fn tall_config() -> GameConfig {
    GameConfig {
        screen_height: 5000.0,
        bird_start_y: Some(300.0),
        ..GameConfig::default()
    }
}
