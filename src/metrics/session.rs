//! Session statistics across game episodes.
//!
//! Tracks the high score and per-episode outcomes, with rolling windows
//! for smoothed score and length statistics, and optional CSV export.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Write as IoWrite;
use std::path::Path;

use anyhow::{Context, Result};

use crate::game::EndReason;

/// How an episode finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// Snake hit a wall
    HitWall,
    /// Snake hit its own body
    HitSelf,
    /// Snake filled the board
    BoardFull,
    /// Stopped by the driver's tick limit while still running
    Truncated,
}

impl EpisodeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            EpisodeOutcome::HitWall => "wall",
            EpisodeOutcome::HitSelf => "self",
            EpisodeOutcome::BoardFull => "board-full",
            EpisodeOutcome::Truncated => "truncated",
        }
    }
}

impl From<EndReason> for EpisodeOutcome {
    fn from(reason: EndReason) -> Self {
        match reason {
            EndReason::HitWall => EpisodeOutcome::HitWall,
            EndReason::HitSelf => EpisodeOutcome::HitSelf,
            EndReason::BoardFull => EpisodeOutcome::BoardFull,
        }
    }
}

/// One completed episode, kept for CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub episode: usize,
    pub score: u32,
    pub ticks: u32,
    pub outcome: EpisodeOutcome,
}

/// Rolling statistics over completed episodes.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    records: Vec<EpisodeRecord>,
    recent_scores: VecDeque<u32>,
    recent_lengths: VecDeque<u32>,
    high_score: u32,
    total_ticks: u64,
    window_size: usize,
}

impl SessionMetrics {
    /// Track episodes with rolling averages over the last `window_size`.
    pub fn new(window_size: usize) -> Self {
        Self {
            records: Vec::new(),
            recent_scores: VecDeque::with_capacity(window_size),
            recent_lengths: VecDeque::with_capacity(window_size),
            high_score: 0,
            total_ticks: 0,
            window_size,
        }
    }

    /// Record the completion of an episode.
    pub fn record_episode(&mut self, score: u32, ticks: u32, outcome: EpisodeOutcome) {
        let episode = self.records.len() + 1;
        self.records.push(EpisodeRecord {
            episode,
            score,
            ticks,
            outcome,
        });
        Self::push_window(&mut self.recent_scores, score, self.window_size);
        Self::push_window(&mut self.recent_lengths, ticks, self.window_size);
        self.high_score = self.high_score.max(score);
        self.total_ticks += u64::from(ticks);
    }

    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn records(&self) -> &[EpisodeRecord] {
        &self.records
    }

    /// Mean score over the rolling window.
    pub fn mean_score(&self) -> f64 {
        Self::mean(&self.recent_scores)
    }

    /// Mean episode length in ticks over the rolling window.
    pub fn mean_length(&self) -> f64 {
        Self::mean(&self.recent_lengths)
    }

    /// One-line human-readable summary.
    pub fn format_summary(&self) -> String {
        format!(
            "episodes: {} | high score: {} | mean score (last {}): {:.2} | mean length: {:.1} ticks",
            self.games_played(),
            self.high_score,
            self.recent_scores.len(),
            self.mean_score(),
            self.mean_length()
        )
    }

    /// Write per-episode records as CSV.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create stats file at {}", path.display()))?;

        writeln!(file, "episode,score,ticks,outcome")?;
        for record in &self.records {
            writeln!(
                file,
                "{},{},{},{}",
                record.episode,
                record.score,
                record.ticks,
                record.outcome.label()
            )?;
        }
        file.flush()?;
        Ok(())
    }

    fn push_window(window: &mut VecDeque<u32>, value: u32, size: usize) {
        if window.len() >= size {
            window.pop_front();
        }
        window.push_back(value);
    }

    fn mean(window: &VecDeque<u32>) -> f64 {
        if window.is_empty() {
            0.0
        } else {
            window.iter().map(|&v| f64::from(v)).sum::<f64>() / window.len() as f64
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new(100)
    }
}
