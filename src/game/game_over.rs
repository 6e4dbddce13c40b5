//! Game-Over Detection
//!
//! A grid is terminal when it is full and every direction is a no-op.
//! The probe runs the full resolver four times; it happens once per turn
//! after a spawn, so no adjacency bookkeeping is kept.

use crate::game::grid::{self, Grid};
use crate::game::input::Direction;
use crate::game::resolve::resolve;

/// Check whether no move can change `grid`.
pub fn is_over(grid: &Grid) -> bool {
    if !grid.empty_cells().is_empty() {
        return false;
    }

    Direction::ALL
        .iter()
        .all(|&direction| grid::equals(&resolve(grid, direction).grid, grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_checkerboard_is_over() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_over(&g));
    }

    #[test]
    fn test_empty_cell_is_not_over() {
        assert!(!is_over(&Grid::create()));

        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        assert!(!is_over(&g));
    }

    #[test]
    fn test_full_grid_with_horizontal_pair() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 8, 8], [4, 2, 4, 2]]);
        assert!(!is_over(&g));
    }

    #[test]
    fn test_full_grid_with_vertical_pair() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 16], [4, 2, 4, 16]]);
        assert!(!is_over(&g));
    }

    #[test]
    fn test_large_tiles_no_pairs() {
        let g = grid([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [2, 4, 8, 16],
        ]);
        assert!(is_over(&g));
    }
}
