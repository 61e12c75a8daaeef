//! Grid Snake - single-player snake on a fixed grid
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, apple, session and tick engine
//! - Highscore persistence (highscore module)
//! - Configuration and error types (config, error modules)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive terminal loop (modes module)

pub mod config;
pub mod error;
pub mod game;
pub mod highscore;
pub mod input;
pub mod modes;
pub mod render;
