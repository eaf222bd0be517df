use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Tunable rules for a single game.
///
/// Constructed in code or from CLI flags; there is no config file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Heading the snake starts with
    pub initial_direction: Direction,
    /// Segments gained per food consumed
    pub growth_per_food: u32,
    /// Grow one segment every this many ticks, independent of food
    pub auto_grow_interval: Option<u32>,
    /// Ticks per second the external clock should start at
    pub initial_speed: f32,
    /// Added to the speed each time food is consumed
    pub speed_increase: f32,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 16,
            initial_snake_length: 3,
            initial_direction: Direction::Up,
            growth_per_food: 1,
            auto_grow_interval: None,
            initial_speed: 10.0,
            speed_increase: 0.5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject configurations the engine cannot start from.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 5 || self.grid_height < 5 {
            bail!(
                "grid must be at least 5x5, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        // The body trails from the grid center opposite the heading, so it
        // must fit within half the grid along that axis.
        let axis = match self.initial_direction {
            Direction::Up | Direction::Down => self.grid_height,
            Direction::Left | Direction::Right => self.grid_width,
        };
        if self.initial_snake_length > axis / 2 {
            bail!(
                "initial snake of length {} does not fit a {}x{} grid heading {:?}",
                self.initial_snake_length,
                self.grid_width,
                self.grid_height,
                self.initial_direction
            );
        }
        if self.growth_per_food == 0 {
            bail!("growth per food must be at least 1");
        }
        if self.auto_grow_interval == Some(0) {
            bail!("auto-grow interval must be at least 1 tick");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 16);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.growth_per_food, 1);
        assert!(config.auto_grow_interval.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_grid() {
        let config = GameConfig::new(4, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_length_snake() {
        let config = GameConfig {
            initial_snake_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_snake_that_does_not_fit() {
        let config = GameConfig {
            initial_snake_length: 9,
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let config = GameConfig {
            auto_grow_interval: Some(0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            growth_per_food: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
