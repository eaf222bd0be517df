use super::board::Board;
use super::direction::Direction;

/// A position on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step along `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: body cells head-first, plus its current heading.
///
/// Invariants: the body never contains duplicate cells and is never empty.
/// Growth is queued in `pending_growth` and consumed one segment per tick,
/// so growth from food and timed growth compose.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0.
    pub body: Vec<Position>,
    /// Current heading.
    pub direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Build a snake of `length` cells with the body trailing away from
    /// the heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);
        let back = direction.opposite();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.step(back));
        }
        Self {
            body,
            direction,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether `pos` lies on any body cell, head included.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Collision test for a prospective head cell.
    ///
    /// With `ignore_tail` set, the current tail is about to vacate this
    /// tick and does not count as a collision.
    pub fn hits_body(&self, pos: Position, ignore_tail: bool) -> bool {
        let last = self.body.len() - 1;
        self.body
            .iter()
            .enumerate()
            .any(|(i, &cell)| cell == pos && !(ignore_tail && i == last))
    }

    /// Queue `segments` cells of growth to be consumed on future ticks.
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth += segments;
    }

    /// True when the next advance will keep the tail in place.
    pub fn will_grow(&self) -> bool {
        self.pending_growth > 0
    }

    /// Prepend the next head cell, consuming one queued growth segment or
    /// vacating the tail. Returns the vacated cell, if any.
    pub fn advance(&mut self, new_head: Position) -> Option<Position> {
        self.body.insert(0, new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
            None
        } else {
            self.body.pop()
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The head left the board.
    HitWall,
    /// The head ran into the body.
    HitSelf,
    /// No empty cell remained for food. A win, not a failure.
    BoardFull,
}

/// Whether the game is still accepting ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(EndReason),
}

/// Complete game state, mutated in place by the engine each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board: Board,
    pub status: GameStatus,
    pub score: u32,
    pub ticks: u32,
    /// Ticks per second the external clock should run at. The engine only
    /// accounts for it; nothing in here sleeps.
    pub speed: f32,
}

impl GameState {
    /// Assemble a state with the board rebuilt from `snake` and `food`.
    pub fn new(snake: Snake, food: Position, width: usize, height: usize) -> Self {
        let mut board = Board::new(width, height);
        board.rebuild(&snake, Some(food));
        Self {
            snake,
            food,
            board,
            status: GameStatus::Running,
            score: 0,
            ticks: 0,
            speed: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.step(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_snake_trails_away_from_heading() {
        let snake = Snake::new(Position::new(5, 5), Direction::Up, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(5, 6));
        assert_eq!(snake.body[2], Position::new(5, 7));
        assert_eq!(snake.tail(), Position::new(5, 7));
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let vacated = snake.advance(Position::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(vacated, Some(Position::new(3, 5)));
    }

    #[test]
    fn test_advance_consumes_pending_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.grow(2);
        assert!(snake.will_grow());

        assert_eq!(snake.advance(Position::new(6, 5)), None);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.advance(Position::new(7, 5)), None);
        assert_eq!(snake.len(), 5);
        assert!(!snake.will_grow());

        // Growth exhausted, tail vacates again
        assert_eq!(snake.advance(Position::new(8, 5)), Some(Position::new(3, 5)));
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_hits_body_tail_exclusion() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let tail = snake.tail();

        assert!(snake.hits_body(Position::new(4, 5), true));
        assert!(snake.hits_body(tail, false));
        assert!(!snake.hits_body(tail, true));
        assert!(!snake.hits_body(Position::new(9, 9), false));
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_state_board_consistency() {
        use crate::game::board::Cell;

        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let state = GameState::new(snake, Position::new(8, 8), 10, 10);

        assert!(state.is_running());
        assert_eq!(state.board.cell(Position::new(5, 5)), Some(Cell::Snake));
        assert_eq!(state.board.cell(Position::new(8, 8)), Some(Cell::Food));
        assert_eq!(state.board.cell(Position::new(0, 0)), Some(Cell::Empty));
    }
}
