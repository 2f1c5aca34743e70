//! Maze sizing, generation and solving.
//!
//! Generators and solvers sit behind the [`MazeGenerator`] and
//! [`MazeSolver`] traits; the rest of the crate only depends on the
//! [`Grid`] and path shapes they exchange.

mod backtracker;
mod builder;
mod carve;
mod endpoints;
mod prims;
mod sizing;
mod solver;
#[cfg(test)]
mod test_support;

use std::fmt;

use crate::models::{Cell, Grid};

pub use backtracker::BacktrackerGenerator;
pub use builder::{solve_between_endpoints, Maze, MazeBuilder, MazeConfig};
pub use endpoints::{first_open, last_open};
pub use prims::PrimsGenerator;
pub use sizing::{scaled_side, MazeSizing, DEFAULT_FIXED_SIDE, MIN_SIDE};
pub use solver::BacktrackingSolver;

/// Smallest width or height, in rooms, a generator accepts.
pub const MIN_DIMENSION: usize = 1;

/// Produces a maze of `width × height` rooms.
///
/// Rooms sit at odd coordinates, so the returned grid is
/// `2 * width + 1` cells wide and `2 * height + 1` cells tall.
pub trait MazeGenerator {
    fn generate(&mut self, width: usize, height: usize) -> Result<Grid, MazeError>;
}

/// Finds a path of open cells from `start` to `end`.
///
/// Returns an empty path when the two cells are not connected.
pub trait MazeSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Vec<Cell>;
}

/// Which generation algorithm the builder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Randomized Prim's algorithm.
    #[default]
    Prims,
    /// Depth-first recursive backtracker.
    Backtracker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Requested dimensions leave no room for a passage.
    TooSmall { width: usize, height: usize },
    /// The grid has no open cell to start or end on.
    NoOpenCell,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::TooSmall { width, height } => write!(
                f,
                "maze of {}x{} rooms is too small, both sides must be at least {}",
                width, height, MIN_DIMENSION
            ),
            MazeError::NoOpenCell => write!(f, "grid has no open cell"),
        }
    }
}

impl std::error::Error for MazeError {}
