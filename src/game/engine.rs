use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::board::{Board, Cell};
use super::command::Command;
use super::config::GameConfig;
use super::state::{EndReason, GameState, GameStatus, Position, Snake};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Status after the tick
    pub status: GameStatus,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
}

/// The rules engine.
///
/// Owns the RNG used for food placement; all mutable game state lives in
/// the [`GameState`] passed to [`GameEngine::tick`]. Seeding the config
/// makes the whole food sequence reproducible.
pub struct GameEngine {
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake centered, food on a random empty cell.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            self.config.grid_width as i32 / 2,
            self.config.grid_height as i32 / 2,
        );
        let snake = Snake::new(
            center,
            self.config.initial_direction,
            self.config.initial_snake_length,
        );

        let mut board = Board::new(self.config.grid_width, self.config.grid_height);
        board.rebuild(&snake, None);

        let empty = board.empty_cells();
        let (food, status) = if empty.is_empty() {
            // Degenerate grid already covered by the snake
            (snake.head(), GameStatus::GameOver(EndReason::BoardFull))
        } else {
            let food = empty[self.rng.gen_range(0..empty.len())];
            board.set(food, Cell::Food);
            (food, GameStatus::Running)
        };

        GameState {
            snake,
            food,
            board,
            status,
            score: 0,
            ticks: 0,
            speed: self.config.initial_speed,
        }
    }

    /// Advance the game by one discrete step.
    ///
    /// A steering command that reverses the current heading is ignored.
    /// Moving into the cell the tail is vacating this tick is legal; any
    /// other body cell, or leaving the board, ends the game. Once the game
    /// is over further ticks change nothing.
    pub fn tick(&mut self, state: &mut GameState, command: Command) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome {
                status: state.status,
                ate_food: false,
            };
        }

        if let Command::Steer(requested) = command {
            if !state.snake.direction.is_opposite(requested) {
                state.snake.direction = requested;
            }
        }

        // Timed growth carried over from the original rules
        if let Some(every) = self.config.auto_grow_interval {
            if every > 0 && (state.ticks + 1) % every == 0 {
                state.snake.grow(1);
            }
        }

        let new_head = state.snake.head().step(state.snake.direction);
        let ate_food = new_head == state.food;
        let grows = ate_food || state.snake.will_grow();

        if !state.board.in_bounds(new_head) {
            return Self::end_game(state, EndReason::HitWall);
        }
        // The tail only vacates when nothing grows this tick
        if state.snake.hits_body(new_head, !grows) {
            return Self::end_game(state, EndReason::HitSelf);
        }

        if ate_food {
            state.snake.grow(self.config.growth_per_food);
        }
        if let Some(vacated) = state.snake.advance(new_head) {
            state.board.set(vacated, Cell::Empty);
        }
        state.board.set(new_head, Cell::Snake);

        if ate_food {
            state.score += 1;
            state.speed += self.config.speed_increase;

            let empty = state.board.empty_cells();
            if empty.is_empty() {
                // The snake fills the board: a win, not a failure
                state.ticks += 1;
                state.status = GameStatus::GameOver(EndReason::BoardFull);
                return TickOutcome {
                    status: state.status,
                    ate_food: true,
                };
            }
            let food = empty[self.rng.gen_range(0..empty.len())];
            state.board.set(food, Cell::Food);
            state.food = food;
        }

        state.ticks += 1;
        TickOutcome {
            status: GameStatus::Running,
            ate_food,
        }
    }

    fn end_game(state: &mut GameState, reason: EndReason) -> TickOutcome {
        state.ticks += 1;
        state.status = GameStatus::GameOver(reason);
        TickOutcome {
            status: state.status,
            ate_food: false,
        }
    }
}
