use crate::models::{Cell, Grid};

use super::MazeError;

/// First open cell scanning rows top to bottom, columns left to right.
pub fn first_open(grid: &Grid) -> Result<Cell, MazeError> {
    let width = grid.width();
    (0..grid.height())
        .flat_map(|row| (0..width).map(move |col| Cell::new(row, col)))
        .find(|&cell| grid.is_open(cell))
        .ok_or(MazeError::NoOpenCell)
}

/// First open cell scanning rows bottom to top, columns right to left.
pub fn last_open(grid: &Grid) -> Result<Cell, MazeError> {
    let width = grid.width();
    (0..grid.height())
        .rev()
        .flat_map(|row| (0..width).rev().map(move |col| Cell::new(row, col)))
        .find(|&cell| grid.is_open(cell))
        .ok_or(MazeError::NoOpenCell)
}
