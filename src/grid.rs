//! Coordinate space of the playing field.

use std::ops::{Add, Sub};

/// Number of cells along each side of the square field.
pub const GRID_SIZE: i16 = 20;

/// A cell on the grid, or the difference between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, other: Cell) -> Cell {
        Cell::new(self.x - other.x, self.y - other.y)
    }
}

/// True iff the cell lies inside the `GRID_SIZE` x `GRID_SIZE` field.
pub fn in_bounds(cell: Cell) -> bool {
    (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
}
