use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Cell, Grid, OPEN, WALL};

use super::carve::{
    check_dimensions, grid_dimensions, neighbor_rooms, random_room, wall_between,
};
use super::{MazeError, MazeGenerator};

/// Depth-first recursive backtracker, run on an explicit stack.
///
/// Produces long winding corridors with few branches, compared to the
/// short dead ends of [`PrimsGenerator`](super::PrimsGenerator).
pub struct BacktrackerGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> BacktrackerGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MazeGenerator for BacktrackerGenerator<R> {
    fn generate(&mut self, width: usize, height: usize) -> Result<Grid, MazeError> {
        check_dimensions(width, height)?;
        let (grid_width, grid_height) = grid_dimensions(width, height);
        let mut grid = Grid::filled(grid_width, grid_height, WALL);

        let start = random_room(&mut self.rng, width, height);
        grid.set(start, OPEN);
        let mut stack = vec![start];

        while let Some(&room) = stack.last() {
            let unvisited: Vec<Cell> = neighbor_rooms(room, width, height)
                .into_iter()
                .filter(|&neighbor| !grid.is_open(neighbor))
                .collect();

            match unvisited.choose(&mut self.rng) {
                Some(&next) => {
                    grid.set(wall_between(room, next), OPEN);
                    grid.set(next, OPEN);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(grid)
    }
}
