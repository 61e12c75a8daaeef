use rand::Rng;

use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::error::GameError;

/// The single apple on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    /// Place an apple on a random cell not covered by the snake
    pub fn spawn<R: Rng>(
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let position = grid.random_free_cell(rng, &snake.occupied())?;
        Ok(Self { position })
    }

    /// Apple at a fixed cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the apple to a fresh cell not covered by the snake
    ///
    /// On error the apple stays where it was.
    pub fn relocate<R: Rng>(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.position = grid.random_free_cell(rng, &snake.occupied())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_avoids_snake() {
        let grid = Grid::new(2);
        let snake = Snake::from_cells([Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let apple = Apple::spawn(&grid, &snake, &mut rng).unwrap();
            assert_eq!(apple.position(), Cell::new(0, 1));
        }
    }

    #[test]
    fn test_relocate_on_full_grid_keeps_position() {
        let grid = Grid::new(2);
        let snake = Snake::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::at(Cell::new(0, 1));

        let result = apple.relocate(&grid, &snake, &mut rng);

        assert_eq!(result, Err(GameError::GridFull { size: 2 }));
        assert_eq!(apple.position(), Cell::new(0, 1));
    }
}
