use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Grid, OPEN, WALL};

use super::carve::{
    check_dimensions, grid_dimensions, neighbor_rooms, random_room, wall_between,
};
use super::{MazeError, MazeGenerator};

/// Randomized Prim's algorithm.
///
/// Grows the maze from a random room by repeatedly picking a random
/// frontier room and joining it to one of its already carved neighbours.
pub struct PrimsGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> PrimsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MazeGenerator for PrimsGenerator<R> {
    fn generate(&mut self, width: usize, height: usize) -> Result<Grid, MazeError> {
        check_dimensions(width, height)?;
        let (grid_width, grid_height) = grid_dimensions(width, height);
        let mut grid = Grid::filled(grid_width, grid_height, WALL);

        let start = random_room(&mut self.rng, width, height);
        grid.set(start, OPEN);
        let mut frontier = neighbor_rooms(start, width, height);

        while !frontier.is_empty() {
            let room = frontier.swap_remove(self.rng.gen_range(0..frontier.len()));
            // Rooms can be queued more than once
            if grid.is_open(room) {
                continue;
            }

            let (carved, uncarved): (Vec<_>, Vec<_>) = neighbor_rooms(room, width, height)
                .into_iter()
                .partition(|&neighbor| grid.is_open(neighbor));

            if let Some(&neighbor) = carved.choose(&mut self.rng) {
                grid.set(room, OPEN);
                grid.set(wall_between(room, neighbor), OPEN);
                frontier.extend(uncarved);
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::maze::carve::room_count;
    use crate::maze::test_support::assert_spanning_tree;
    use crate::models::Cell;

    #[test]
    fn test_generates_requested_dimensions() {
        let mut generator = PrimsGenerator::new(StdRng::seed_from_u64(1));
        let grid = generator.generate(11, 7).unwrap();
        assert_eq!(grid.width(), 23);
        assert_eq!(grid.height(), 15);
    }

    #[test]
    fn test_carves_a_spanning_tree() {
        for seed in 0..20 {
            let mut generator = PrimsGenerator::new(StdRng::seed_from_u64(seed));
            let grid = generator.generate(7, 7).unwrap();
            assert_spanning_tree(&grid);
            assert_eq!(grid.open_count(), 2 * room_count(7, 7) - 1);
        }
    }

    #[test]
    fn test_every_room_is_carved() {
        let grid = PrimsGenerator::new(StdRng::seed_from_u64(3))
            .generate(10, 10)
            .unwrap();
        assert_eq!((grid.width(), grid.height()), (21, 21));
        for row in (1..21).step_by(2) {
            for col in (1..21).step_by(2) {
                assert!(grid.is_open(Cell::new(row, col)), "room ({}, {}) is wall", row, col);
            }
        }
        // no solid interior rows or columns
        for i in 1..20 {
            assert!(grid.rows()[i].iter().any(|&v| v == OPEN));
            assert!(grid.rows().iter().any(|row| row[i] == OPEN));
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = PrimsGenerator::new(StdRng::seed_from_u64(42))
            .generate(10, 10)
            .unwrap();
        let b = PrimsGenerator::new(StdRng::seed_from_u64(42))
            .generate(10, 10)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_smallest_maze_is_a_single_room() {
        let grid = PrimsGenerator::new(StdRng::seed_from_u64(0))
            .generate(1, 1)
            .unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.open_count(), 1);
        assert!(grid.is_open(Cell::new(1, 1)));
    }

    #[test]
    fn test_rejects_too_small() {
        let mut generator = PrimsGenerator::new(StdRng::seed_from_u64(0));
        assert_eq!(
            generator.generate(0, 5),
            Err(MazeError::TooSmall {
                width: 0,
                height: 5
            })
        );
    }
}
