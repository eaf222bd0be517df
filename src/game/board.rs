use super::state::{Position, Snake};

/// What occupies a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Fixed-size occupancy grid, stored row-major.
///
/// The board mirrors the snake and food positions so callers can query
/// cells without scanning the snake body. The engine keeps it in sync
/// every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    fn index(&self, pos: Position) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    /// Cell content at `pos`, or `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Write a cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.cells[idx] = cell;
        }
    }

    /// All currently unoccupied positions.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut empty = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x as i32, y as i32);
                if self.cells[self.index(pos)] == Cell::Empty {
                    empty.push(pos);
                }
            }
        }
        empty
    }

    /// Rewrite the whole grid from the snake body and food position.
    pub fn rebuild(&mut self, snake: &Snake, food: Option<Position>) {
        self.cells.fill(Cell::Empty);
        for &segment in &snake.body {
            self.set(segment, Cell::Snake);
        }
        if let Some(food) = food {
            self.set(food, Cell::Food);
        }
    }
}
