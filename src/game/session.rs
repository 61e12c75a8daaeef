use std::time::Duration;

use log::debug;

use super::action::Direction;
use super::apple::Apple;
use super::grid::Grid;
use super::snake::Snake;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// No free cell was left for the apple
    GridFull,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver(GameOverReason),
}

/// Complete state of one game, from start until restart
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Apple,
    /// Direction applied on the most recent tick
    pub direction: Direction,
    /// Direction to apply on the next tick
    pub queued_direction: Direction,
    pub ticks: u64,
    pub highscore: u32,
    pub phase: Phase,
}

impl GameSession {
    /// Create a new session in the `Playing` phase
    pub fn new(grid: Grid, snake: Snake, apple: Apple, highscore: u32) -> Self {
        Self {
            grid,
            snake,
            apple,
            direction: Direction::None,
            queued_direction: Direction::None,
            ticks: 0,
            highscore,
            phase: Phase::Playing,
        }
    }

    /// Current score, the snake's length
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.length()).unwrap_or(u32::MAX)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Queue a direction for the next tick
    ///
    /// Ignored unless playing. A reversal of either the current heading or
    /// the direction already queued is rejected. Returns whether the
    /// direction was accepted.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if !self.is_playing() || direction == Direction::None {
            return false;
        }

        if direction.is_opposite(self.direction) || direction.is_opposite(self.queued_direction) {
            debug!(
                "rejected reversal {:?} while heading {:?}",
                direction, self.direction
            );
            return false;
        }

        self.queued_direction = direction;
        true
    }

    /// Switch between `Playing` and `Paused`; no effect after game over
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Playing,
            Phase::GameOver(_) => return false,
        }
        true
    }

    /// End the session and drop any pending movement
    pub fn end(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver(reason);
        self.direction = Direction::None;
        self.queued_direction = Direction::None;
    }

    /// Game time played, derived from ticks
    pub fn elapsed(&self, tick_rate_hz: u32) -> Duration {
        if tick_rate_hz == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.ticks * 1000 / u64::from(tick_rate_hz))
    }
}
