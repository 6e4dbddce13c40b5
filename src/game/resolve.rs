//! Move Resolution
//!
//! Compacts and merges every line of the grid toward a direction and
//! reports where each source tile went. Pure: no RNG, no hidden state.
//!
//! ## Algorithm (per line)
//!
//! ```text
//!  scan order (direction of travel)      destination cursor k
//!  ┌────┬────┬────┬────┐                 ┌────┬────┬────┬────┐
//!  │ 2  │ .  │ 2  │ 2  │  Left  ──────►  │ 4  │ 2  │ .  │ .  │
//!  └────┴────┴────┴────┘                 └────┴────┴────┴────┘
//!   k=0 takes the first pair, k=1 takes the leftover 2
//! ```
//!
//! Merging is pairwise and greedy in scan order: a tile merged this move is
//! never merged again, so `[2, 2, 2, 0]` moved left becomes `[4, 2, 0, 0]`.

use crate::game::events::MoveEvent;
use crate::game::grid::{Cell, Grid, GRID_SIZE};
use crate::game::input::Direction;

/// Outcome of resolving a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Complete replacement grid
    pub grid: Grid,
    /// Tile movements, grouped by line in line order
    pub events: Vec<MoveEvent>,
}

impl Resolution {
    /// Number of merges (each merge contributes two events).
    pub fn merge_count(&self) -> u32 {
        (self.events.iter().filter(|e| e.merge).count() / 2) as u32
    }
}

/// Cells of line `index` listed in scan order for `direction`.
///
/// Scan position `k` is also the destination for cursor value `k`, so
/// this one table covers both the scan and `toIndex(k)`.
fn line_cells(direction: Direction, index: usize) -> [Cell; GRID_SIZE] {
    let mut cells = [Cell::new(0, 0); GRID_SIZE];
    for (k, cell) in cells.iter_mut().enumerate() {
        let along = if direction.is_reversed() { GRID_SIZE - 1 - k } else { k };
        *cell = if direction.is_vertical() {
            Cell::new(along, index)
        } else {
            Cell::new(index, along)
        };
    }
    cells
}

/// Resolve one line into `out`, appending its events.
fn resolve_line(
    grid: &Grid,
    cells: &[Cell; GRID_SIZE],
    out: &mut [[u32; GRID_SIZE]; GRID_SIZE],
    events: &mut Vec<MoveEvent>,
) {
    // Non-zero tiles in scan order
    let mut tiles = [(0u32, Cell::new(0, 0)); GRID_SIZE];
    let mut count = 0;
    for &cell in cells {
        let value = grid.get(cell);
        if value != 0 {
            tiles[count] = (value, cell);
            count += 1;
        }
    }

    let mut i = 0;
    let mut k = 0;
    while i < count {
        let (value, from) = tiles[i];
        let dest = cells[k];

        if i + 1 < count && tiles[i + 1].0 == value {
            let (_, partner) = tiles[i + 1];
            out[dest.row][dest.col] = value * 2;
            events.push(MoveEvent::new(from, dest, value, true));
            events.push(MoveEvent::new(partner, dest, value, true));
            i += 2;
        } else {
            out[dest.row][dest.col] = value;
            events.push(MoveEvent::new(from, dest, value, false));
            i += 1;
        }
        k += 1;
    }
    // Cells past k stay 0 in `out`
}

/// Resolve a move of `grid` toward `direction`.
///
/// Returns the replacement grid and the tile movements. Tiles that neither
/// moved nor merged produce no event; a merge partner that already sits on
/// the destination keeps its event so both halves of the merge animate.
pub fn resolve(grid: &Grid, direction: Direction) -> Resolution {
    let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
    let mut events = Vec::with_capacity(GRID_SIZE * GRID_SIZE);

    for index in 0..GRID_SIZE {
        let cells = line_cells(direction, index);
        resolve_line(grid, &cells, &mut out, &mut events);
    }

    events.retain(|e| e.merge || !e.is_stationary());

    Resolution {
        grid: Grid::from_rows_unchecked(out),
        events,
    }
}

// =============================================================================
// TESTS
// =============================================================================
