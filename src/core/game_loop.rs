//! Fixed-step driver shared by the terminal game and the simulator.
//!
//! Input commands are queued as they arrive and applied at the next tick
//! boundary. Wall time is accumulated and spent in whole ticks, so physics
//! never depends on how often the caller wakes up.

use super::constants::MAX_CATCH_UP_TICKS;
use super::game::{FlappyGame, FlappyInput};
use super::types::{Snapshot, TickResult};
use crate::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Commands delivered by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Jump,
    Restart,
    ToggleDebug,
}

/// FIFO of commands waiting for the next tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<GameCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: GameCommand) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameCommand> + '_ {
        self.pending.drain(..)
    }
}

/// Converts elapsed wall time into a number of fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    tick: Duration,
    accumulated: Duration,
    max_catch_up: u32,
    // Rate measurement over roughly one second of wall time.
    window: Duration,
    window_ticks: u32,
    ticks_per_second: f64,
}

impl FixedStepClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulated: Duration::ZERO,
            max_catch_up: MAX_CATCH_UP_TICKS,
            window: Duration::ZERO,
            window_ticks: 0,
            ticks_per_second: 0.0,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.tick.saturating_sub(self.accumulated)
    }

    pub fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// Add `elapsed` and return how many ticks are now due.
    ///
    /// A long stall is clamped to `max_catch_up` ticks and the rest of the
    /// backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let cap = self.tick * self.max_catch_up;
        self.accumulated += elapsed.min(cap);

        let mut due = 0;
        while self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            due += 1;
        }

        self.window += elapsed;
        self.window_ticks += due;
        if self.window >= Duration::from_secs(1) {
            self.ticks_per_second = self.window_ticks as f64 / self.window.as_secs_f64();
            self.window = Duration::ZERO;
            self.window_ticks = 0;
        }
        due
    }
}

/// Consumes one snapshot per frame.
pub trait RenderSink {
    type Error;

    fn present(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Self::Error>;
}

/// Owns the game, its RNG, the input queue and the clock.
pub struct GameDriver<R: Rng> {
    game: FlappyGame,
    rng: R,
    input: InputQueue,
    clock: FixedStepClock,
    show_debug: bool,
}

impl<R: Rng> GameDriver<R> {
    pub fn new(config: GameConfig, mut rng: R, show_debug: bool) -> Self {
        let tick = Duration::from_millis(config.tick_interval_ms);
        let game = FlappyGame::new(config, &mut rng);
        Self {
            game,
            rng,
            input: InputQueue::new(),
            clock: FixedStepClock::new(tick),
            show_debug,
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut FlappyGame {
        &mut self.game
    }

    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }

    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    pub fn pending_commands(&self) -> usize {
        self.input.len()
    }

    /// Queue a command for the next tick boundary.
    pub fn queue(&mut self, command: GameCommand) {
        self.input.push(command);
    }

    /// Spend `elapsed` wall time and run every tick that became due.
    pub fn update(&mut self, elapsed: Duration) -> Vec<TickResult> {
        let due = self.clock.advance(elapsed);
        (0..due).map(|_| self.step()).collect()
    }

    /// Apply queued commands, then run exactly one tick.
    pub fn step(&mut self) -> TickResult {
        let commands: Vec<GameCommand> = self.input.drain().collect();
        for command in commands {
            match command {
                GameCommand::ToggleDebug => self.show_debug = !self.show_debug,
                GameCommand::Jump => self.game.process_input(FlappyInput::Jump, &mut self.rng),
                GameCommand::Restart => {
                    self.game.process_input(FlappyInput::Restart, &mut self.rng)
                }
            }
        }
        self.game.process_tick(&mut self.rng)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let debug = self
            .show_debug
            .then(|| self.game.debug_info(self.clock.ticks_per_second()));
        self.game.snapshot(debug)
    }

    /// Hand the current snapshot to `sink`.
    pub fn render<S: RenderSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.present(&self.snapshot())
    }
}
