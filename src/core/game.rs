//! Game state machine: owns the bird, the pipes and the score, and runs
//! one tick at a time.

use super::collision;
use super::generator;
use super::physics::{self, FIXED_DT};
use super::pipes;
use super::scoring::{self, ScoreTracker};
use super::types::{
    Bird, DebugInfo, GameOverCause, GameState, Obstacle, PairId, PipeField, PipePair, Snapshot,
    TickResult,
};
use crate::config::GameConfig;
use rand::Rng;

/// Commands the game itself understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap while running; restart once the game is over.
    Jump,
    /// Start a fresh game from any state.
    Restart,
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    config: GameConfig,
    bird: Bird,
    pipes: PipeField,
    scoring: ScoreTracker,
    state: GameState,
    game_over: Option<GameOverCause>,
    next_pair_id: u64,
    /// Ticks simulated since the last (re)start.
    pub tick_count: u64,
    /// Games started during this process, including the current one.
    pub games_played: u32,
}

impl FlappyGame {
    /// Create a session and start the first game.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let bird = Bird::new(config.bird_x(), config.bird_start_y(), config.bird_size);
        let mut game = Self {
            config,
            bird,
            pipes: PipeField::new(),
            scoring: ScoreTracker::new(),
            state: GameState::Running,
            game_over: None,
            next_pair_id: 0,
            tick_count: 0,
            games_played: 0,
        };
        game.start_game(rng);
        game
    }

    /// Reset everything and enter `Running` with a single fresh pair.
    pub fn start_game<R: Rng>(&mut self, rng: &mut R) {
        self.bird.reset(self.config.bird_start_y());
        self.pipes.clear();
        self.scoring.reset();
        self.state = GameState::Running;
        self.game_over = None;
        self.tick_count = 0;
        self.games_played += 1;
        self.spawn_pair(rng);
        log::info!("game {} started", self.games_played);
    }

    /// Apply one player command. Jumps only count while running.
    pub fn process_input<R: Rng>(&mut self, input: FlappyInput, rng: &mut R) {
        match (input, self.state) {
            (FlappyInput::Jump, GameState::Running) => {
                physics::jump(&mut self.bird, self.config.jump_impulse);
            }
            (FlappyInput::Jump, GameState::GameOver) | (FlappyInput::Restart, _) => {
                self.start_game(rng);
            }
        }
    }

    /// Advance one fixed tick: physics, scroll and recycle, spawn,
    /// crash detection, scoring. Does nothing once the game is over.
    pub fn process_tick<R: Rng>(&mut self, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if self.state != GameState::Running {
            return result;
        }
        self.tick_count += 1;

        self.bird = physics::integrate(self.bird, self.config.gravity, FIXED_DT);

        pipes::advance(&mut self.pipes, self.config.pipe_velocity);
        result.pairs_recycled = pipes::recycle(&mut self.pipes);
        self.scoring.forget(&result.pairs_recycled);

        if pipes::needs_spawn(
            &self.pipes,
            self.config.screen_width,
            self.config.spawn_spacing,
        ) {
            self.spawn_pair(rng);
            result.pairs_spawned += 1;
        }

        let crash = collision::detect_crash(&self.bird, &self.pipes, self.config.screen_height);

        if crash.is_none() || self.config.score_on_terminal_tick {
            let value = self.config.score_per_pair;
            result.scored = self.scoring.update_score(&self.bird, &self.pipes, value);
            if result.scored > 0 {
                log::info!("score {}", self.scoring.score());
            }
        }

        if let Some(cause) = crash {
            self.state = GameState::GameOver;
            self.game_over = Some(cause);
            log::info!(
                "game over after {} ticks with score {}: {}",
                self.tick_count,
                self.scoring.score(),
                cause.description()
            );
        }
        result.game_over = crash;

        debug_assert_eq!(self.pipes.len() % 2, 0);
        result
    }

    fn spawn_pair<R: Rng>(&mut self, rng: &mut R) {
        let id = PairId(self.next_pair_id);
        self.next_pair_id += 1;
        let (top, bottom) = generator::spawn_pair(rng, &self.config, id);
        self.pipes.push_pair(top, bottom);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Mutable bird access for scripted scenarios.
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &PipeField {
        &self.pipes
    }

    /// Mutable pipe access for scripted scenarios.
    pub fn pipes_mut(&mut self) -> &mut PipeField {
        &mut self.pipes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.pipes.obstacles()
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn scoring(&self) -> &ScoreTracker {
        &self.scoring
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over
    }

    /// Nearest pair the bird has not yet cleared.
    pub fn next_pair(&self) -> Option<PipePair<'_>> {
        let bird_x = self.bird.x();
        self.pipes
            .pairs()
            .find(|pair| !scoring::has_passed(pair, bird_x))
    }

    /// Pairs with any part inside the screen.
    pub fn pairs_on_screen(&self) -> impl Iterator<Item = PipePair<'_>> + '_ {
        let width = self.config.screen_width;
        self.pipes.pairs().filter(move |pair| pair.is_visible(width))
    }

    pub fn debug_info(&self, ticks_per_second: f64) -> DebugInfo {
        DebugInfo {
            ticks_per_second,
            tick_count: self.tick_count,
            bird_y: self.bird.y,
            bird_velocity: self.bird.velocity,
            obstacle_count: self.pipes.len(),
            scored_pairs: self.scoring.scored_count(),
            next_pair: self
                .next_pair()
                .map(|pair| (pair.id(), pair.x() - self.bird.bounds().right())),
        }
    }

    /// Read-only view for a renderer.
    pub fn snapshot(&self, debug: Option<DebugInfo>) -> Snapshot<'_> {
        Snapshot {
            bird: self.bird,
            obstacles: self.pipes.obstacles(),
            score: self.scoring.score(),
            state: self.state,
            game_over: self.game_over,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            debug,
        }
    }
}
