//! Highscore persistence
//!
//! The highscore is a single decimal integer in a plain text file. It is read
//! once when the game starts and rewritten whenever a session sets a new
//! record. Writes go to a sibling temp file first and are renamed into place
//! so a crash never leaves a half-written score behind.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use crate::error::HighscoreError;

/// Somewhere the highscore can be loaded from and saved to
pub trait HighscoreStore {
    fn load(&self) -> Result<u32, HighscoreError>;

    fn save(&mut self, score: u32) -> Result<(), HighscoreError>;

    /// Load the stored score, treating missing or corrupt data as zero
    fn load_or_default(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("{}; starting from a highscore of 0", e);
                0
            }
        }
    }
}

/// Highscore kept in a text file
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&self) -> Result<u32, HighscoreError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                HighscoreError::NotFound(self.path.clone())
            } else {
                HighscoreError::Read {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        contents
            .trim()
            .parse::<u32>()
            .map_err(|_| HighscoreError::InvalidData {
                path: self.path.clone(),
                contents,
            })
    }

    fn save(&mut self, score: u32) -> Result<(), HighscoreError> {
        let write_err = |source| HighscoreError::Write {
            path: self.path.clone(),
            source,
        };

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let temp = self.temp_path();
        std::fs::write(&temp, score.to_string()).map_err(write_err)?;
        std::fs::rename(&temp, &self.path).map_err(write_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let store = FileHighscoreStore::new(dir.path().join("highscore.txt"));

        assert!(matches!(store.load(), Err(HighscoreError::NotFound(_))));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "not a number").unwrap();
        let store = FileHighscoreStore::new(&path);

        assert!(matches!(
            store.load(),
            Err(HighscoreError::InvalidData { .. })
        ));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn test_load_tolerates_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "42\n").unwrap();

        assert_eq!(FileHighscoreStore::new(&path).load().unwrap(), 42);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores").join("highscore.txt");
        let mut store = FileHighscoreStore::new(&path);

        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), 17);

        store.save(23).unwrap();
        assert_eq!(store.load().unwrap(), 23);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "23");
        assert!(!dir.path().join("scores").join("highscore.txt.tmp").exists());
    }
}
