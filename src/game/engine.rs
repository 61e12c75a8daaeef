use std::collections::HashSet;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    apple::Apple,
    config::GameConfig,
    grid::Grid,
    session::{GameOverReason, GameSession},
    snake::Snake,
};
use crate::error::GameError;

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Whether the state advanced this step
    pub moved: bool,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Set when this step beat the stored highscore
    pub new_highscore: Option<u32>,
    /// Set when this step ended the session
    pub game_over: Option<GameOverReason>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible random sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Start a fresh session: one-cell snake on a random cell, apple elsewhere
    pub fn new_session(&mut self, highscore: u32) -> Result<GameSession, GameError> {
        let head = self.grid.random_free_cell(&mut self.rng, &HashSet::new())?;
        let snake = Snake::new(head);
        let apple = Apple::spawn(&self.grid, &snake, &mut self.rng)?;

        info!(
            "new session: snake at ({}, {}), apple at ({}, {})",
            head.x,
            head.y,
            apple.position().x,
            apple.position().y
        );

        Ok(GameSession::new(self.grid, snake, apple, highscore))
    }

    /// Execute one tick of the game
    pub fn step(&mut self, session: &mut GameSession) -> StepResult {
        if !session.is_playing() {
            return StepResult::default();
        }

        session.direction = session.queued_direction;
        session.snake.move_in(session.direction);
        session.ticks += 1;

        let mut result = StepResult {
            moved: true,
            ..Default::default()
        };

        if let Some(reason) = self.check_collision(session) {
            session.end(reason);
            result.game_over = Some(reason);
            return result;
        }

        if session.snake.head() != session.apple.position() {
            return result;
        }

        result.ate_apple = true;
        session.snake.grow();

        let score = session.score();
        if score > session.highscore {
            session.highscore = score;
            result.new_highscore = Some(score);
        }

        if let Err(e) = session
            .apple
            .relocate(&self.grid, &session.snake, &mut self.rng)
        {
            error!("apple placement failed, ending session: {}", e);
            session.end(GameOverReason::GridFull);
            result.game_over = Some(GameOverReason::GridFull);
        }

        result
    }

    /// Check whether the snake's current head ends the session
    fn check_collision(&self, session: &GameSession) -> Option<GameOverReason> {
        if self.grid.is_out_of_bounds(session.snake.head()) {
            return Some(GameOverReason::Wall);
        }

        if session.snake.has_tail_collision() {
            return Some(GameOverReason::SelfCollision);
        }

        None
    }
}
