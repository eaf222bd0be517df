pub mod session;

pub use session::{EpisodeOutcome, EpisodeRecord, SessionMetrics};
