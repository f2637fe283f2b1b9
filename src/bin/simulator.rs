//! Flappy headless simulator
//!
//! Runs complete games without a terminal, steering the bird with a simple
//! autopilot. Uses the same `GameDriver` as the interactive game, one
//! fixed tick per step.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --config PATH   Config file (JSON)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --max-ticks N   Stop a run after N ticks (default: 15000 = 5 minutes)
//!   --json          Print a JSON report instead of text
//!   --quiet         Only the final summary

use anyhow::{Context, Result};
use clap::Parser;
use flappy::config::GameConfig;
use flappy::core::game::FlappyGame;
use flappy::core::game_loop::{GameCommand, GameDriver};
use flappy::core::types::GameOverCause;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "simulator", version, about = "Headless Flappy simulator")]
struct SimArgs {
    /// Config file (JSON). Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// First RNG seed; run N uses seed + N.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Runs with incrementing seeds.
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Ticks after which a surviving run is stopped.
    #[arg(long, default_value_t = 15_000)]
    max_ticks: u64,

    /// Print a JSON report on stdout.
    #[arg(long)]
    json: bool,

    /// Only print the final summary.
    #[arg(long)]
    quiet: bool,
}

// ── Autopilot ────────────────────────────────────────────────────────

/// How far below the gap center the bird may sink before flapping.
const AUTOPILOT_SLACK: f64 = 25.0;

/// Flap when the bird is falling and has dropped below the middle of the
/// next gap (or the screen middle when no pair is ahead).
fn autopilot_wants_jump(game: &FlappyGame) -> bool {
    let bird = game.bird();
    let target = game
        .next_pair()
        .map(|pair| (pair.gap_top() + pair.gap_bottom()) / 2.0)
        .unwrap_or(game.config().screen_height / 2.0);
    let center = bird.y + bird.size() / 2.0;
    bird.velocity >= 0.0 && center > target + AUTOPILOT_SLACK
}

// ── Run Reports ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
struct RunReport {
    run: u32,
    seed: u64,
    score: u32,
    ticks: u64,
    pairs_passed: u32,
    jumps: u32,
    /// `None` when the run hit the tick limit.
    cause: Option<GameOverCause>,
}

#[derive(Debug, Serialize)]
struct SimReport {
    config: GameConfig,
    max_ticks: u64,
    runs: Vec<RunReport>,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct Summary {
    min_score: u32,
    avg_score: f64,
    max_score: u32,
    avg_ticks: f64,
    survived: usize,
}

impl Summary {
    fn from_runs(runs: &[RunReport]) -> Self {
        let count = runs.len().max(1) as f64;
        Self {
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / count,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / count,
            survived: runs.iter().filter(|r| r.cause.is_none()).count(),
        }
    }
}

fn run_simulation(config: &GameConfig, run: u32, seed: u64, max_ticks: u64) -> RunReport {
    let rng = ChaCha8Rng::seed_from_u64(seed);
    let mut driver = GameDriver::new(config.clone(), rng, false);
    let mut pairs_passed = 0;
    let mut jumps = 0;
    let mut cause = None;

    while driver.game().tick_count < max_ticks {
        if autopilot_wants_jump(driver.game()) {
            driver.queue(GameCommand::Jump);
            jumps += 1;
        }
        let result = driver.step();
        if config.score_per_pair > 0 {
            pairs_passed += result.scored / config.score_per_pair;
        }
        if let Some(over) = result.game_over {
            log::debug!("run {run} ended: {}", over.description());
            cause = Some(over);
            break;
        }
    }

    let game = driver.game();
    RunReport {
        run,
        seed,
        score: game.score(),
        ticks: game.tick_count,
        pairs_passed,
        jumps,
        cause,
    }
}

fn ticks_to_time(ticks: u64, tick_interval_ms: u64) -> String {
    let secs = ticks * tick_interval_ms / 1000;
    format!("{}m{:02}s", secs / 60, secs % 60)
}

fn print_run(report: &RunReport, config: &GameConfig) {
    let cause = report
        .cause
        .map(|c| c.description())
        .unwrap_or_else(|| "survived".to_string());
    println!(
        "  Run {} (seed={}): score={} pairs={} ticks={} ({}) jumps={} - {}",
        report.run + 1,
        report.seed,
        report.score,
        report.pairs_passed,
        report.ticks,
        ticks_to_time(report.ticks, config.tick_interval_ms),
        report.jumps,
        cause,
    );
}

fn print_summary(summary: &Summary, runs: usize) {
    println!();
    println!("{:<20} {:>10} {:>10} {:>10}", "", "Min", "Avg", "Max");
    println!(
        "{:<20} {:>10} {:>10.1} {:>10}",
        "Score", summary.min_score, summary.avg_score, summary.max_score
    );
    println!("{:<20} {:>10.1}", "Avg Ticks", summary.avg_ticks);
    println!("{:<20} {:>10}", "Survived", format!("{}/{}", summary.survived, runs));
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = SimArgs::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = GameConfig::load(args.config.as_deref()).context("failed to load config")?;

    log::info!(
        "simulating {} run(s), seed={}, max_ticks={}",
        args.runs,
        args.seed,
        args.max_ticks
    );

    let mut runs = Vec::with_capacity(args.runs as usize);
    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run as u64);
        let report = run_simulation(&config, run, seed, args.max_ticks);
        if !args.json && !args.quiet {
            print_run(&report, &config);
        }
        runs.push(report);
    }

    let summary = Summary::from_runs(&runs);
    if args.json {
        let report = SimReport {
            config,
            max_ticks: args.max_ticks,
            runs,
            summary,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        print_summary(&summary, runs.len());
    }

    Ok(())
}
