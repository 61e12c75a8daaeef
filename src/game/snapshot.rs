use std::time::Duration;

use super::grid::Cell;
use super::session::{GameSession, Phase};

/// Read-only view of a session, taken once per drawn frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid_size: i32,
    /// Body cells, head first
    pub snake: Vec<Cell>,
    pub apple: Cell,
    pub score: u32,
    pub highscore: u32,
    pub elapsed: Duration,
    pub phase: Phase,
}

impl Snapshot {
    pub fn capture(session: &GameSession, tick_rate_hz: u32) -> Self {
        Self {
            grid_size: session.grid.size(),
            snake: session.snake.cells().copied().collect(),
            apple: session.apple.position(),
            score: session.score(),
            highscore: session.highscore,
            elapsed: session.elapsed(tick_rate_hz),
            phase: session.phase,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    /// Elapsed time as `m:ss`
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}
