use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use super::action::Direction;
use crate::error::GameError;

/// Side length of the square playing field
pub const GRID_SIZE: i32 = 16;

/// Largest side length accepted from configuration
pub const MAX_GRID_SIZE: i32 = 64;

/// Rejection-sampling attempts before falling back to enumerating free cells
pub const MAX_SAMPLE_ATTEMPTS: usize = 1024;

/// A position on the game grid
///
/// Cells outside the grid are representable so that a head which has just
/// left the field can still be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The square playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells on the field
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// True iff the cell lies outside `[0, size)` on either axis
    pub fn is_out_of_bounds(&self, cell: Cell) -> bool {
        cell.x < 0 || cell.x >= self.size || cell.y < 0 || cell.y >= self.size
    }

    /// Iterate every cell on the field, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell::new(x, y)))
    }

    /// Pick a uniformly random cell that is not in `occupied`
    ///
    /// Rejection sampling is tried first. After `MAX_SAMPLE_ATTEMPTS` misses
    /// the free cells are enumerated and one is chosen from those, so a
    /// nearly full field still terminates. A completely full field yields
    /// `GameError::GridFull`.
    pub fn random_free_cell<R: Rng>(
        &self,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Result<Cell, GameError> {
        let taken = occupied
            .iter()
            .filter(|cell| !self.is_out_of_bounds(**cell))
            .count();
        if taken >= self.cell_count() {
            return Err(GameError::GridFull { size: self.size });
        }

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = Cell::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size));
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }

        self.cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(rng)
            .ok_or(GameError::GridFull { size: self.size })
    }
}
