use std::collections::HashSet;

use crate::models::{Cell, Grid};

use super::MazeSolver;

/// Depth-first search that retracts dead-end branches.
///
/// The current stack is the path, so on a spanning-tree maze the result is
/// the unique path between the two cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl MazeSolver for BacktrackingSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Vec<Cell> {
        if !grid.is_open(start) || !grid.is_open(end) {
            return Vec::new();
        }

        let mut visited = HashSet::from([start]);
        let mut path = vec![start];

        while let Some(&cell) = path.last() {
            if cell == end {
                return path;
            }

            let next = grid
                .open_neighbors(cell)
                .find(|neighbor| !visited.contains(neighbor));

            match next {
                Some(next) => {
                    visited.insert(next);
                    path.push(next);
                }
                None => {
                    path.pop();
                }
            }
        }

        Vec::new()
    }
}
