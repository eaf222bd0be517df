//! Snake game-state and rules engine.
//!
//! This library provides:
//! - Core game rules: board occupancy, snake movement, food placement,
//!   collision detection, scoring (`game` module)
//! - Session statistics across episodes (`metrics` module)
//! - Headless episode drivers for exercising the engine (`modes` module)
//!
//! There is deliberately no rendering or input handling here. A front-end
//! drives the game by calling [`game::GameEngine::tick`] once per time step
//! and reading the resulting [`game::GameState`].

pub mod game;
pub mod metrics;
pub mod modes;
