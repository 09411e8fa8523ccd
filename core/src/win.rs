use crate::*;

/// Whether every cell of `grid` is unlit. Stops at the first lit cell.
pub fn is_won(grid: &Grid) -> bool {
    grid.iter_cells().all(|(_, lit)| !lit)
}
