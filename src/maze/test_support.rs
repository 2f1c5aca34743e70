use std::collections::{HashSet, VecDeque};

use crate::models::{Cell, Grid, WALL};

use super::first_open;

/// Asserts the open cells form a tree: walled border, connected, and one
/// edge fewer than cells.
pub(crate) fn assert_spanning_tree(grid: &Grid) {
    let (width, height) = (grid.width(), grid.height());
    for (row, cells) in grid.rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                assert_eq!(value, WALL, "border cell ({}, {}) is open", row, col);
            }
        }
    }

    let start = first_open(grid).expect("maze should have an open cell");
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for next in grid.open_neighbors(cell) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    assert_eq!(seen.len(), grid.open_count(), "open cells are not connected");

    let edges: usize = seen
        .iter()
        .map(|cell| {
            [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)]
                .into_iter()
                .filter(|&next| grid.is_open(next))
                .count()
        })
        .sum();
    assert_eq!(edges + 1, seen.len(), "open cells contain a loop");
}
