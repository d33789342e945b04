use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use env_logger::{Env, Target};
use grid_snake::config::{load_config, ConfigOverrides, GameConfig, THEME_FIELD};
use grid_snake::error::AppError;
use grid_snake::driver::{self, LoopControl};
use grid_snake::game::GameState;
use grid_snake::input::InputHandler;
use grid_snake::renderer::{self, RenderOptions};
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::timer::TickTimer;

/// Snake on a fixed square grid. Arrow keys or WASD to steer, q or Esc to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the field.
    #[arg(long)]
    field_size: Option<u16>,

    /// Terminal columns drawn per cell.
    #[arg(long)]
    pixel_size: Option<u16>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_interval_ms: Option<u64>,

    /// Seed for food placement, for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            field_size: self.field_size,
            pixel_size: self.pixel_size,
            tick_interval_ms: self.tick_interval_ms,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = load_config(cli.config.as_deref())?.with_overrides(cli.overrides());
    config.validate()?;
    log::info!(
        "starting: field {}x{}, pixel size {}, tick {}ms",
        config.field_size,
        config.field_size,
        config.pixel_size,
        config.tick_interval_ms
    );

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&mut session, config, cli.seed)?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}

fn run(session: &mut TerminalSession, config: GameConfig, seed: Option<u64>) -> io::Result<()> {
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(config.bounds(), seed),
        None => GameState::new(config.bounds()),
    };
    let mut input = InputHandler::new();
    let mut timer = TickTimer::new(
        Duration::from_millis(config.tick_interval_ms),
        Instant::now(),
    );
    let options = RenderOptions {
        pixel_size: config.pixel_size,
        theme: &THEME_FIELD,
    };

    loop {
        session.draw(|frame| renderer::render(frame, &state, options))?;

        // Input only steers or restarts; the snake moves on the timer alone.
        if let Some(game_input) = input.poll_input(timer.time_until_due(Instant::now()))? {
            let control = driver::handle_input(&mut state, &mut timer, game_input, Instant::now());
            if control == LoopControl::Quit {
                break;
            }
        }

        driver::tick_if_due(&mut state, &mut timer, Instant::now());
    }

    log::info!("quit at score {}", state.score);
    Ok(())
}
