use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{GameConfig, MAX_GRID_SIZE};

/// Top-level application configuration, loadable from JSON.
///
/// Relative paths are resolved against `resource_root`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub resource_root: PathBuf,
    pub highscore_path: PathBuf,
    pub icon_path: PathBuf,
    pub log_path: PathBuf,
    pub game: GameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            resource_root: PathBuf::from("."),
            highscore_path: PathBuf::from("highscore.txt"),
            icon_path: PathBuf::from("icon.png"),
            log_path: PathBuf::from("snake.log"),
            game: GameConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.grid_size < 2 || self.game.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.grid_size must be in [2, {}]",
                MAX_GRID_SIZE
            )));
        }
        if self.game.tick_rate_hz == 0 {
            return Err(ConfigError::Validation(
                "game.tick_rate_hz must be > 0".into(),
            ));
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.resource_root.join(path)
        }
    }

    pub fn highscore_file(&self) -> PathBuf {
        self.resolve(&self.highscore_path)
    }

    pub fn icon_file(&self) -> PathBuf {
        self.resolve(&self.icon_path)
    }

    pub fn log_file(&self) -> PathBuf {
        self.resolve(&self.log_path)
    }
}
