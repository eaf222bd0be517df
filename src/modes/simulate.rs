//! Headless episode driver.
//!
//! Runs batches of episodes against the engine with a steering policy,
//! records session statistics, and logs progress. This is the "external
//! collaborator" that calls `tick()` once per time step; no rendering or
//! input handling is involved.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, GameStatus};
use crate::metrics::{EpisodeOutcome, SessionMetrics};
use crate::modes::policy::Policy;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of episodes to run
    pub episodes: usize,
    /// Hard stop per episode; episodes still running at the limit count
    /// as truncated
    pub max_ticks: u32,
    /// Log a progress line every N episodes (0 disables)
    pub log_every: usize,
    /// Steering policy for the driver
    pub policy: Policy,
    /// Game rules
    pub game: GameConfig,
}

impl SimConfig {
    pub fn new(episodes: usize, game: GameConfig) -> Self {
        Self {
            episodes,
            max_ticks: 10_000,
            log_every: 10,
            policy: Policy::Greedy,
            game,
        }
    }
}

/// Runs scripted episodes and aggregates their outcomes.
pub struct SimulateMode {
    engine: GameEngine,
    policy_rng: ChaCha8Rng,
    metrics: SessionMetrics,
    config: SimConfig,
}

impl SimulateMode {
    pub fn new(config: SimConfig) -> Self {
        // The policy gets its own stream so its draws never disturb the
        // engine's food placement sequence.
        let policy_rng = match config.game.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            engine: GameEngine::new(config.game.clone()),
            policy_rng,
            metrics: SessionMetrics::default(),
            config,
        }
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Run all configured episodes and return the session statistics.
    pub fn run(&mut self) -> Result<SessionMetrics> {
        self.config.game.validate()?;

        for episode in 1..=self.config.episodes {
            let mut state = self.engine.reset();

            while state.is_running() && state.ticks < self.config.max_ticks {
                let command = self.config.policy.decide(&state, &mut self.policy_rng);
                self.engine.tick(&mut state, command);
            }

            let outcome = match state.status {
                GameStatus::GameOver(reason) => EpisodeOutcome::from(reason),
                GameStatus::Running => EpisodeOutcome::Truncated,
            };
            self.metrics.record_episode(state.score, state.ticks, outcome);
            debug!(
                episode,
                score = state.score,
                ticks = state.ticks,
                outcome = outcome.label(),
                "episode finished"
            );

            if self.config.log_every > 0 && episode % self.config.log_every == 0 {
                info!(
                    episode,
                    high_score = self.metrics.high_score(),
                    mean_score = self.metrics.mean_score(),
                    mean_length = self.metrics.mean_length(),
                    "progress"
                );
            }
        }

        info!("{}", self.metrics.format_summary());
        Ok(self.metrics.clone())
    }
}
