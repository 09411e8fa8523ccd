use crate::*;

/// Offsets `(d_row, d_col)` flipped by a click: the cell itself and its four orthogonal neighbors.
pub const PLUS_PATTERN: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flips the plus-shaped neighborhood around `center`, returning how many cells changed.
///
/// Every in-bounds cell of the pattern is flipped regardless of its current value. Neighbors that
/// fall off the grid are skipped, but `center` itself must be on the grid.
pub fn apply_toggle(grid: &mut Grid, center: Coord2) -> Result<u8> {
    let (row, col) = grid.validate_coords(center)?;
    let (row, col) = (row as isize, col as isize);

    let mut flipped = 0;
    for (d_row, d_col) in PLUS_PATTERN {
        if grid.toggle_if_in_bounds(row + d_row, col + d_col) {
            flipped += 1;
        }
    }
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn lit_cells(grid: &Grid) -> Vec<Coord2> {
        grid.iter_cells()
            .filter(|&(_, lit)| lit)
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn center_click_lights_exactly_the_plus_pattern() {
        let mut grid = Grid::new((3, 3)).unwrap();

        assert_eq!(apply_toggle(&mut grid, (1, 1)), Ok(5));

        assert_eq!(lit_cells(&grid), [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn neighbors_flip_even_when_currently_off() {
        // only the center starts lit; a rule that skipped unlit neighbors would leave them dark
        let mut grid = Grid::new((3, 3)).unwrap();
        grid.set((1, 1), true).unwrap();

        apply_toggle(&mut grid, (1, 1)).unwrap();

        assert_eq!(lit_cells(&grid), [(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn lit_neighbors_turn_off() {
        let mut grid = Grid::new((3, 3)).unwrap();
        grid.set((0, 1), true).unwrap();
        grid.set((2, 2), true).unwrap();

        apply_toggle(&mut grid, (1, 1)).unwrap();

        assert_eq!(lit_cells(&grid), [(1, 0), (1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn corner_and_edge_clicks_skip_missing_neighbors() {
        let mut grid = Grid::new((3, 4)).unwrap();

        assert_eq!(apply_toggle(&mut grid, (0, 0)), Ok(3));
        assert_eq!(lit_cells(&grid), [(0, 0), (0, 1), (1, 0)]);

        let mut grid = Grid::new((3, 4)).unwrap();
        assert_eq!(apply_toggle(&mut grid, (2, 3)), Ok(3));
        assert_eq!(lit_cells(&grid), [(1, 3), (2, 2), (2, 3)]);

        let mut grid = Grid::new((3, 4)).unwrap();
        assert_eq!(apply_toggle(&mut grid, (0, 2)), Ok(4));
        assert_eq!(lit_cells(&grid), [(0, 1), (0, 2), (0, 3), (1, 2)]);
    }

    #[test]
    fn single_cell_grid_flips_only_itself() {
        let mut grid = Grid::new((1, 1)).unwrap();

        assert_eq!(apply_toggle(&mut grid, (0, 0)), Ok(1));
        assert!(grid[(0, 0)]);
    }

    #[test]
    fn applying_twice_restores_the_grid() {
        let mut grid = Grid::new((4, 5)).unwrap();
        grid.set((0, 0), true).unwrap();
        grid.set((2, 3), true).unwrap();
        grid.set((3, 4), true).unwrap();
        let before = grid.clone();

        for row in 0..4 {
            for col in 0..5 {
                apply_toggle(&mut grid, (row, col)).unwrap();
                apply_toggle(&mut grid, (row, col)).unwrap();
                assert_eq!(grid, before);
            }
        }
    }

    #[test]
    fn off_grid_center_is_an_error_and_changes_nothing() {
        let mut grid = Grid::new((2, 2)).unwrap();

        assert_eq!(apply_toggle(&mut grid, (2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.lit_count(), 0);
    }
}
