use std::path::PathBuf;

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no free cell left on a {size}x{size} grid")]
    GridFull { size: i32 },
}

/// Errors that can occur while reading or writing the highscore file.
#[derive(Debug, thiserror::Error)]
pub enum HighscoreError {
    #[error("highscore file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid highscore data in {path}: {contents:?}")]
    InvalidData { path: PathBuf, contents: String },

    #[error("failed to read highscore from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write highscore to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::GridFull { size: 16 };
        assert_eq!(err.to_string(), "no free cell left on a 16x16 grid");
    }

    #[test]
    fn test_highscore_error_display() {
        let err = HighscoreError::InvalidData {
            path: PathBuf::from("highscore.txt"),
            contents: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid highscore data in highscore.txt: \"abc\""
        );

        let err = HighscoreError::NotFound(PathBuf::from("highscore.txt"));
        assert_eq!(err.to_string(), "highscore file not found: highscore.txt");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.grid_size must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.grid_size must be >= 2"
        );
    }
}
