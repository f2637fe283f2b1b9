use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::config::GameConfig;
use flappy::core::game_loop::GameDriver;
use flappy::input::{handle_key, InputResult};
use flappy::ui::TerminalSink;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(
    name = "flappy",
    version,
    long_version = build_info::LONG_VERSION,
    about = "Fixed-timestep Flappy Bird for the terminal"
)]
struct Cli {
    /// Config file (JSON). Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for gap placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the debug overlay visible.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // Stdout belongs to the terminal UI, so logs only go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if cli.print_config {
        println!("{}", config.to_json_pretty());
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    log::info!("starting flappy {}", build_info::LONG_VERSION);
    let mut driver = GameDriver::new(config, rng, cli.debug);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut sink = match setup_terminal() {
        Ok(sink) => sink,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let outcome = run(&mut driver, &mut sink);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    sink.terminal_mut().backend_mut().execute(LeaveAlternateScreen)?;
    sink.terminal_mut().show_cursor()?;

    let game = driver.game();
    log::info!(
        "exiting after {} games, last score {}",
        game.games_played,
        game.score()
    );
    outcome
}

fn setup_terminal() -> Result<TerminalSink<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(TerminalSink::new(terminal))
}

fn run(
    driver: &mut GameDriver<ChaCha8Rng>,
    sink: &mut TerminalSink<CrosstermBackend<Stdout>>,
) -> Result<()> {
    let mut last_frame = Instant::now();
    driver.render(sink).context("failed to draw frame")?;

    loop {
        if event::poll(driver.clock().until_next_tick())? {
            if let Event::Key(key) = event::read()? {
                match handle_key(key) {
                    InputResult::Command(command) => driver.queue(command),
                    InputResult::Quit => return Ok(()),
                    InputResult::Ignored => {}
                }
            }
        }

        let now = Instant::now();
        let ticks = driver.update(now - last_frame);
        last_frame = now;

        if !ticks.is_empty() {
            driver.render(sink).context("failed to draw frame")?;
        }
    }
}
