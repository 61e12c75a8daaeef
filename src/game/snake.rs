use std::collections::{HashSet, VecDeque};

use super::action::Direction;
use super::grid::Cell;

/// The snake in the game
///
/// `body` runs head to tail. `length` is the target size of the body; the
/// two are equal after every completed move.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    length: usize,
}

impl Snake {
    /// Create a one-cell snake at `head`
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
            length: 1,
        }
    }

    /// Build a snake from explicit body cells, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let length = body.len();
        Some(Self { body, length })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Target length; equals the score
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of body cells currently on the field
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells, head first
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Body cells as a set, for placement checks
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Advance one cell in `direction`, trimming the tail unless growing
    pub fn move_in(&mut self, direction: Direction) {
        if direction == Direction::None {
            return;
        }

        let new_head = self.head().moved_in_direction(direction);
        self.body.push_front(new_head);

        while self.body.len() > self.length {
            self.body.pop_back();
        }
    }

    /// Lengthen by one; the next move keeps the tail
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// True iff the head overlaps any other body cell
    pub fn has_tail_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }
}
