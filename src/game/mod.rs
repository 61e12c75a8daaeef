//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it one tick at a time and draws snapshots of it.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod grid;
pub mod session;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use apple::Apple;
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use grid::{Cell, Grid, GRID_SIZE, MAX_GRID_SIZE};
pub use session::{GameOverReason, GameSession, Phase};
pub use snake::Snake;
pub use snapshot::Snapshot;
