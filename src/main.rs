use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use snake_engine::game::{Direction, GameConfig};
use snake_engine::modes::{Policy, SimConfig, SimulateMode};

#[derive(Parser)]
#[command(name = "snake-engine")]
#[command(version, about = "Headless Snake rules engine and episode driver")]
struct Cli {
    /// Grid width
    #[arg(long, default_value_t = 30)]
    width: usize,

    /// Grid height
    #[arg(long, default_value_t = 16)]
    height: usize,

    /// Fix the RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to run
    #[arg(long, default_value_t = 100)]
    episodes: usize,

    /// Steering policy for the driver
    #[arg(long, value_enum, default_value_t = PolicyArg::Greedy)]
    policy: PolicyArg,

    /// Initial heading of the snake
    #[arg(long, default_value = "up")]
    start_direction: Direction,

    /// Grow one segment every N ticks regardless of food
    #[arg(long)]
    auto_grow: Option<u32>,

    /// Abort an episode after this many ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u32,

    /// Log a progress line every N episodes (0 disables)
    #[arg(long, default_value_t = 10)]
    log_every: usize,

    /// Write per-episode statistics to this CSV file
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Steer uniformly at random, never reversing
    Random,
    /// Head toward the food, avoiding immediate death
    Greedy,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => Policy::Random,
            PolicyArg::Greedy => Policy::Greedy,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let game = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        initial_direction: cli.start_direction,
        auto_grow_interval: cli.auto_grow,
        seed: cli.seed,
        ..GameConfig::default()
    };
    game.validate().context("invalid game configuration")?;

    let mut sim = SimConfig::new(cli.episodes, game);
    sim.max_ticks = cli.max_ticks;
    sim.log_every = cli.log_every;
    sim.policy = cli.policy.into();

    let mut mode = SimulateMode::new(sim);
    let metrics = mode.run()?;

    if let Some(path) = cli.stats_out {
        metrics.write_csv(&path)?;
    }

    Ok(())
}
