//! Maze grid and cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traversable cell value.
pub const OPEN: u8 = 0;
/// Impassable cell value.
pub const WALL: u8 = 1;

const STEPS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Zero-indexed `(row, col)` coordinate, serialized as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` is one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error building a grid from raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without cells.
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell that is neither open nor wall.
    InvalidCell { cell: Cell, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::InvalidCell { cell, value } => {
                write!(f, "cell {} has invalid value {}", cell, value)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular `height × width` grid of [`OPEN`] / [`WALL`] cells.
///
/// Serializes as a plain `number[][]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            rows: vec![vec![value; width]; height],
        }
    }

    /// Build a grid from rows, checking it is non-empty, rectangular and
    /// only holds open/wall values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            if let Some(col) = cells.iter().position(|&v| v != OPEN && v != WALL) {
                return Err(GridError::InvalidCell {
                    cell: Cell::new(row, col),
                    value: cells[col],
                });
            }
        }

        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }

    /// Cell value, or `None` when out of bounds.
    pub fn get(&self, cell: Cell) -> Option<u8> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// Out-of-bounds cells are never open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell) == Some(OPEN)
    }

    /// Set a cell value. Out-of-bounds writes are ignored.
    pub fn set(&mut self, cell: Cell, value: u8) {
        if let Some(slot) = self
            .rows
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        {
            *slot = value;
        }
    }

    /// Open cells one step up, right, down or left of `cell`, in that order.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            let next = Cell::new(
                cell.row.checked_add_signed(dr)?,
                cell.col.checked_add_signed(dc)?,
            );
            self.is_open(next).then_some(next)
        })
    }

    pub fn open_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&value| value == OPEN)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec![0, 1], vec![1]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![0, 2]]),
            Err(GridError::InvalidCell {
                cell: Cell::new(0, 1),
                value: 2
            })
        );
    }

    #[test]
    fn test_dimensions_and_lookup() {
        let grid = Grid::from_rows(vec![vec![1, 0, 1], vec![0, 0, 1]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_open(Cell::new(0, 1)));
        assert!(!grid.is_open(Cell::new(0, 0)));
        assert!(!grid.is_open(Cell::new(5, 5)));
        assert_eq!(grid.get(Cell::new(1, 3)), None);
        assert_eq!(grid.open_count(), 3);
    }

    #[test]
    fn test_open_neighbors() {
        let grid = Grid::from_rows(vec![
            vec![1, 0, 1],
            vec![0, 0, 1],
            vec![1, 0, 1],
        ])
        .unwrap();
        let neighbors: Vec<_> = grid.open_neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 0)]
        );
        assert_eq!(grid.open_neighbors(Cell::new(0, 0)).count(), 2);
    }

    #[test]
    fn test_serialization_shapes() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[1,0],[0,1]]");
        assert_eq!(serde_json::to_string(&Cell::new(2, 3)).unwrap(), "[2,3]");
        let cell: Cell = serde_json::from_str("[4,1]").unwrap();
        assert_eq!(cell, Cell::new(4, 1));
    }
}
