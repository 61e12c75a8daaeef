use serde::{Deserialize, Serialize};

use super::grid::GRID_SIZE;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Game-state steps per second
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_rate_hz: 15,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.tick_rate_hz, 15);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(10);
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.tick_rate_hz, 15);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"tick_rate_hz": 10}"#).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.tick_rate_hz, 10);
    }
}
