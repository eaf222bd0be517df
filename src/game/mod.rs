//! Core game rules for Snake.
//!
//! Everything in here is synchronous and free of I/O. One call to
//! [`GameEngine::tick`] advances the game by exactly one discrete step.

pub mod board;
pub mod command;
pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use command::Command;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{EndReason, GameState, GameStatus, Position, Snake};
