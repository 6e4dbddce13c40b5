//! Grid Definitions
//!
//! The 4×4 value matrix and its pure read queries. A grid is a plain
//! `Copy` value: moves and spawns build a whole new grid and the owner
//! swaps it in, so no reader ever sees a half-applied move.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::hash::StateHasher;
use crate::core::vec2::FixedVec2;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;

/// Largest tile a 4×4 game can reach (2^17).
///
/// Keeps every merge and the score sum well inside `u32`.
pub const MAX_TILE: u32 = 1 << 17;

// =============================================================================
// CELL
// =============================================================================

/// A (row, column) coordinate, 0-indexed, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index in [0, GRID_SIZE)
    pub row: usize,
    /// Column index in [0, GRID_SIZE)
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the cell's origin in cell-grid coordinates
    /// (`x` = column, `y` = row).
    pub fn position(self) -> FixedVec2 {
        FixedVec2::from_ints(self.col as i32, self.row as i32)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors from building a grid out of external data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A non-zero cell that is not a power of two >= 2.
    #[error("invalid tile {value} at ({row}, {col}): tiles must be powers of two >= 2")]
    InvalidTile {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u32,
    },

    /// A tile above [`MAX_TILE`].
    #[error("tile {value} at ({row}, {col}) exceeds the maximum tile {max}", max = MAX_TILE)]
    TileTooLarge {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u32,
    },
}

// =============================================================================
// GRID
// =============================================================================

/// N×N matrix of tile values; 0 is empty.
///
/// Every non-zero value is a power of two in [2, MAX_TILE]. Construct
/// through [`Grid::create`] or the validating [`Grid::from_rows`];
/// deserialization goes through the same check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[[u32; GRID_SIZE]; GRID_SIZE]", into = "[[u32; GRID_SIZE]; GRID_SIZE]")]
pub struct Grid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An empty grid.
    pub const fn create() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from row data, rejecting values that are not tiles.
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                if value > MAX_TILE {
                    return Err(GridError::TileTooLarge { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Wrap already-valid rows. Only the resolver and spawner call this.
    pub(crate) const fn from_rows_unchecked(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Value at a cell (0 = empty).
    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[cell.row][cell.col]
    }

    /// Copy of the grid with one cell replaced.
    pub(crate) fn with_cell(mut self, cell: Cell, value: u32) -> Self {
        self.cells[cell.row][cell.col] = value;
        self
    }

    /// Row data.
    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.iter_cells()
            .filter(|&(_, value)| value == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Check if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    /// Sum of all cells.
    pub fn score(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    /// Highest tile on the grid (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Iterate `(cell, value)` pairs in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| (Cell::new(row, col), value))
        })
    }

    /// Left/right reflection.
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for line in cells.iter_mut() {
            line.reverse();
        }
        Self { cells }
    }

    /// Rows become columns.
    pub fn transposed(&self) -> Self {
        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                cells[col][row] = value;
            }
        }
        Self { cells }
    }

    /// Feed the grid into a state hash.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        for &value in self.cells.iter().flatten() {
            hasher.update_u32(value);
        }
    }
}

impl TryFrom<[[u32; GRID_SIZE]; GRID_SIZE]> for Grid {
    type Error = GridError;

    fn try_from(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for [[u32; GRID_SIZE]; GRID_SIZE] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// Whether two grids hold the same tiles.
#[inline]
pub fn equals(a: &Grid, b: &Grid) -> bool {
    a == b
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in line.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
