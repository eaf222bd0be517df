use super::direction::Direction;

/// Input to a single tick of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a new heading. Ignored when it reverses the current one.
    Steer(Direction),
    /// Keep the current heading.
    Coast,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
