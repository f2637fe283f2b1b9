//! Integration test: obstacle pairs
//!
//! Generation, scrolling, spawn spacing and recycling of paired obstacles.

mod common;

use common::{floating_config, new_game, seeded};
use flappy::config::GameConfig;
use flappy::core::generator::spawn_pair;
use flappy::core::pipes::{advance, recycle};
use flappy::core::types::{ObstacleKind, PairId, PipeField};

#[test]
fn test_generated_pairs_share_id_and_exact_gap() {
    let config = GameConfig::default();
    let mut rng = seeded(11);

    for i in 0..1_000 {
        let (top, bottom) = spawn_pair(&mut rng, &config, PairId(i));
        assert_eq!(top.pair_id, bottom.pair_id);
        assert_eq!(top.kind, ObstacleKind::Top);
        assert_eq!(bottom.kind, ObstacleKind::Bottom);
        assert!((bottom.top - top.bottom() - config.gap_height).abs() < 1e-9);
        assert!((100.0..=300.0).contains(&top.bottom()));
        assert!((bottom.bottom() - config.screen_height).abs() < 1e-9);
    }
}

#[test]
fn test_gap_draws_cover_whole_range() {
    let config = GameConfig::default();
    let mut rng = seeded(12);
    let (mut lowest, mut highest) = (f64::MAX, f64::MIN);

    for i in 0..10_000 {
        let (top, _) = spawn_pair(&mut rng, &config, PairId(i));
        lowest = lowest.min(top.height);
        highest = highest.max(top.height);
    }
    assert!(lowest >= 100.0 && lowest < 105.0);
    assert!(highest <= 300.0 && highest > 295.0);
}

#[test]
fn test_obstacle_count_stays_even() {
    let (mut game, mut rng) = new_game(floating_config(), 13);
    let mut spawned = 1;
    let mut recycled = 0;

    for _ in 0..5_000 {
        let result = game.process_tick(&mut rng);
        spawned += result.pairs_spawned as usize;
        recycled += result.pairs_recycled.len();
        assert_eq!(game.obstacles().len() % 2, 0);
        assert_eq!(game.pipes().pair_count(), spawned - recycled);
    }
    assert!(recycled > 0);
}

#[test]
fn test_pairs_stay_aligned_after_recycling() {
    let (mut game, mut rng) = new_game(floating_config(), 14);
    for _ in 0..2_000 {
        game.process_tick(&mut rng);
        for pair in game.pipes().pairs() {
            assert_eq!(pair.top.pair_id, pair.bottom.pair_id);
            assert_eq!(pair.top.x, pair.bottom.x);
            assert_eq!(pair.top.kind, ObstacleKind::Top);
        }
    }
}

#[test]
fn test_spawn_spacing_schedule() {
    let (mut game, mut rng) = new_game(floating_config(), 15);
    let mut spawn_ticks = Vec::new();

    for _ in 0..400 {
        let result = game.process_tick(&mut rng);
        if result.pairs_spawned > 0 {
            spawn_ticks.push(game.tick_count);
        }
    }
    // The newest pair must be more than 300 units in from the right edge.
    assert_eq!(spawn_ticks, vec![101, 202, 303]);
}

#[test]
fn test_recycling_twice_is_a_no_op() {
    let config = GameConfig::default();
    let mut rng = seeded(16);
    let mut field = PipeField::new();
    for i in 0..3 {
        let (top, bottom) = spawn_pair(&mut rng, &config, PairId(i));
        field.push_pair(top, bottom);
        advance(&mut field, 300.0);
    }
    // Pairs sit at x=-100, 200 and 500; only pair 2 keeps its trailing
    // edge on screen after 500 more.
    advance(&mut field, 500.0);

    assert_eq!(recycle(&mut field), vec![PairId(0), PairId(1)]);
    assert!(recycle(&mut field).is_empty());
    assert_eq!(field.pair_count(), 1);
    assert!(field.contains(PairId(2)));
}
