//! Steering strategies for headless episodes.
//!
//! These drive the engine in place of a player. They are exercise
//! drivers, not gameplay features.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::game::{Command, Direction, GameState};

/// How the driver steers the snake each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Pick uniformly among the non-reversing headings.
    Random,
    /// Head toward the food, avoiding moves that die immediately.
    Greedy,
}

impl Policy {
    pub fn decide(&self, state: &GameState, rng: &mut ChaCha8Rng) -> Command {
        match self {
            Policy::Random => random_step(state, rng),
            Policy::Greedy => greedy_step(state),
        }
    }
}

fn candidates(state: &GameState) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&d| !state.snake.direction.is_opposite(d))
        .collect()
}

/// Whether stepping in `direction` survives the next tick.
fn is_safe(state: &GameState, direction: Direction) -> bool {
    let next = state.snake.head().step(direction);
    if !state.board.in_bounds(next) {
        return false;
    }
    let grows = next == state.food || state.snake.will_grow();
    !state.snake.hits_body(next, !grows)
}

fn random_step(state: &GameState, rng: &mut ChaCha8Rng) -> Command {
    let options = candidates(state);
    Command::Steer(options[rng.gen_range(0..options.len())])
}

fn greedy_step(state: &GameState) -> Command {
    let head = state.snake.head();
    let food = state.food;

    let mut best: Option<(i32, Direction)> = None;
    for direction in candidates(state) {
        if !is_safe(state, direction) {
            continue;
        }
        let next = head.step(direction);
        let distance = (next.x - food.x).abs() + (next.y - food.y).abs();
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, direction));
        }
    }

    match best {
        Some((_, direction)) => Command::Steer(direction),
        // Boxed in: every move dies, so just keep heading
        None => Command::Coast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Position, Snake};
    use rand::SeedableRng;

    fn state_with(head: Position, direction: Direction, food: Position) -> GameState {
        GameState::new(Snake::new(head, direction, 3), food, 10, 10)
    }

    #[test]
    fn test_random_never_reverses() {
        let state = state_with(Position::new(5, 5), Direction::Up, Position::new(0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..50 {
            match Policy::Random.decide(&state, &mut rng) {
                Command::Steer(direction) => assert_ne!(direction, Direction::Down),
                Command::Coast => panic!("random policy always steers"),
            }
        }
    }

    #[test]
    fn test_greedy_moves_toward_food() {
        let state = state_with(Position::new(5, 5), Direction::Up, Position::new(8, 5));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let command = Policy::Greedy.decide(&state, &mut rng);
        assert_eq!(command, Command::Steer(Direction::Right));
    }

    #[test]
    fn test_greedy_avoids_wall() {
        // Head in the top-left corner moving Left with the body trailing
        // right; Up and Left leave the board, so only Down survives.
        let state = state_with(Position::new(0, 0), Direction::Left, Position::new(0, 5));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let command = Policy::Greedy.decide(&state, &mut rng);
        assert_eq!(command, Command::Steer(Direction::Down));
    }
}
