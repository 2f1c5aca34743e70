use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{Cell, Grid};

use super::{
    first_open, last_open, BacktrackerGenerator, BacktrackingSolver, GeneratorKind,
    MazeError, MazeGenerator, MazeSizing, MazeSolver, PrimsGenerator,
};

/// How mazes are sized, generated and whether they are solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub sizing: MazeSizing,
    pub generator: GeneratorKind,
    /// When false, mazes are returned without a solution path.
    pub solve: bool,
    /// Seed every maze from this value instead of OS entropy.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            sizing: MazeSizing::Scaled,
            generator: GeneratorKind::Prims,
            solve: true,
            seed: None,
        }
    }
}

/// A generated grid and its solution path (empty if unsolved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    pub grid: Grid,
    pub path: Vec<Cell>,
}

/// Builds one maze per request from a fixed [`MazeConfig`].
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    config: MazeConfig,
}

impl MazeBuilder {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Rooms per side for a quiz worth `score` points.
    pub fn side_for(&self, score: f64) -> usize {
        self.config.sizing.side_for(score)
    }

    pub fn build(&self, score: f64) -> Result<Maze, MazeError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with(score, &mut rng)
    }

    pub fn build_with<R: Rng>(&self, score: f64, rng: &mut R) -> Result<Maze, MazeError> {
        let side = self.side_for(score);
        let grid = match self.config.generator {
            GeneratorKind::Prims => PrimsGenerator::new(&mut *rng).generate(side, side)?,
            GeneratorKind::Backtracker => {
                BacktrackerGenerator::new(&mut *rng).generate(side, side)?
            }
        };

        let path = if self.config.solve {
            solve_between_endpoints(&grid, &BacktrackingSolver)
        } else {
            Vec::new()
        };

        debug!(side, path_len = path.len(), "built maze");
        Ok(Maze { grid, path })
    }
}

/// Solve from the first open cell to the last one.
///
/// A grid without open cells is never handed to the solver and yields an
/// empty path.
pub fn solve_between_endpoints<S: MazeSolver>(grid: &Grid, solver: &S) -> Vec<Cell> {
    let endpoints = first_open(grid).and_then(|start| last_open(grid).map(|end| (start, end)));
    match endpoints {
        Ok((start, end)) => solver.solve(grid, start, end),
        Err(err) => {
            warn!(%err, "maze has no endpoints, returning it unsolved");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as Counter;

    use super::*;
    use crate::maze::DEFAULT_FIXED_SIDE;
    use crate::models::WALL;

    struct CountingSolver {
        calls: Counter<usize>,
    }

    impl MazeSolver for CountingSolver {
        fn solve(&self, _grid: &Grid, start: Cell, end: Cell) -> Vec<Cell> {
            self.calls.set(self.calls.get() + 1);
            vec![start, end]
        }
    }

    fn seeded(config: MazeConfig) -> MazeBuilder {
        MazeBuilder::new(MazeConfig {
            seed: Some(9),
            ..config
        })
    }

    #[test]
    fn test_scaled_maze_follows_score() {
        // 11 rooms a side, 23 cells with walls
        let maze = seeded(MazeConfig::default()).build(40.0).unwrap();
        assert_eq!((maze.grid.width(), maze.grid.height()), (23, 23));
        assert_eq!(maze.path.first().copied(), first_open(&maze.grid).ok());
        assert_eq!(maze.path.last().copied(), last_open(&maze.grid).ok());
    }

    #[test]
    fn test_fixed_maze_ignores_score() {
        let builder = seeded(MazeConfig {
            sizing: MazeSizing::Fixed(DEFAULT_FIXED_SIDE),
            ..MazeConfig::default()
        });
        for score in [0.0, 40.0, 10_000.0] {
            let maze = builder.build(score).unwrap();
            assert_eq!((maze.grid.width(), maze.grid.height()), (21, 21));
            assert!(!maze.path.is_empty());
        }
    }

    #[test]
    fn test_grid_only_skips_solving() {
        let maze = seeded(MazeConfig {
            solve: false,
            generator: GeneratorKind::Backtracker,
            ..MazeConfig::default()
        })
        .build(100.0)
        .unwrap();
        assert_eq!(maze.grid.width(), 31);
        assert!(maze.path.is_empty());
    }

    #[test]
    fn test_seeded_builds_repeat() {
        let builder = seeded(MazeConfig::default());
        assert_eq!(builder.build(60.0).unwrap(), builder.build(60.0).unwrap());
    }

    #[test]
    fn test_too_small_fixed_side_is_an_error() {
        let builder = seeded(MazeConfig {
            sizing: MazeSizing::Fixed(0),
            ..MazeConfig::default()
        });
        assert_eq!(
            builder.build(0.0),
            Err(MazeError::TooSmall {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_fixed_maze_has_no_trailing_wall() {
        let builder = seeded(MazeConfig {
            sizing: MazeSizing::Fixed(10),
            generator: GeneratorKind::Backtracker,
            ..MazeConfig::default()
        });
        let maze = builder.build(0.0).unwrap();
        let grid = &maze.grid;
        assert_eq!(grid.width() % 2, 1);
        assert_eq!(grid.height() % 2, 1);
        // the last room sits just inside the outer wall
        assert_eq!(last_open(grid), Ok(Cell::new(19, 19)));
        assert_eq!(maze.path.last().copied(), Some(Cell::new(19, 19)));
        assert!(grid.rows()[19].iter().any(|&v| v != WALL));
    }

    #[test]
    fn test_all_wall_grid_is_not_solved() {
        let solver = CountingSolver {
            calls: Counter::new(0),
        };
        let grid = Grid::filled(5, 5, WALL);
        assert!(solve_between_endpoints(&grid, &solver).is_empty());
        assert_eq!(solver.calls.get(), 0);

        let grid = Grid::from_rows(vec![vec![1, 0, 0]]).unwrap();
        assert_eq!(
            solve_between_endpoints(&grid, &solver),
            vec![Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(solver.calls.get(), 1);
    }
}
