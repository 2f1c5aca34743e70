//! Shared helpers for generators that carve passages between rooms of an
//! all-wall grid.
//!
//! Generators take the maze size in rooms. A `width × height` maze is laid
//! out on a `(2 * height + 1) × (2 * width + 1)` grid: rooms sit at odd
//! coordinates, with a wall cell between each pair of neighbouring rooms and
//! an outer wall all around.

use rand::Rng;

use crate::models::Cell;

use super::{MazeError, MIN_DIMENSION};

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(MazeError::TooSmall { width, height });
    }
    Ok(())
}

/// Grid width and height for a maze of `width × height` rooms.
pub(crate) fn grid_dimensions(width: usize, height: usize) -> (usize, usize) {
    (2 * width + 1, 2 * height + 1)
}

/// A random room: odd row in `1..=2 * height - 1`, odd column in
/// `1..=2 * width - 1`.
pub(crate) fn random_room<R: Rng>(rng: &mut R, width: usize, height: usize) -> Cell {
    let row = 2 * rng.gen_range(0..height) + 1;
    let col = 2 * rng.gen_range(0..width) + 1;
    Cell::new(row, col)
}

/// Rooms two steps up, right, down and left of `room` in a maze of
/// `width × height` rooms.
pub(crate) fn neighbor_rooms(room: Cell, width: usize, height: usize) -> Vec<Cell> {
    let mut rooms = Vec::with_capacity(4);
    if room.row >= 3 {
        rooms.push(Cell::new(room.row - 2, room.col));
    }
    if room.col + 2 < 2 * width {
        rooms.push(Cell::new(room.row, room.col + 2));
    }
    if room.row + 2 < 2 * height {
        rooms.push(Cell::new(room.row + 2, room.col));
    }
    if room.col >= 3 {
        rooms.push(Cell::new(room.row, room.col - 2));
    }
    rooms
}

/// The wall cell between two neighbouring rooms.
pub(crate) fn wall_between(a: Cell, b: Cell) -> Cell {
    Cell::new((a.row + b.row) / 2, (a.col + b.col) / 2)
}

/// Number of rooms in a `width × height` maze.
#[cfg(test)]
pub(crate) fn room_count(width: usize, height: usize) -> usize {
    width * height
}
