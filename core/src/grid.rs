use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use rand::distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular matrix of lit (`true`) and unlit (`false`) cells.
///
/// Both sides are at least 1 and at most [`Coord::MAX`], fixed for the lifetime of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// All-off grid of the given `(rows, cols)` size.
    pub fn new(size: Coord2) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
        })
    }

    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let rows: Coord = rows.try_into().map_err(|_| GameError::InvalidDimension)?;
        let cols: Coord = cols.try_into().map_err(|_| GameError::InvalidDimension)?;
        validate_size((rows, cols))?;
        Ok(Self { cells })
    }

    /// Draws every cell independently: lit with `probability`, unlit otherwise.
    pub fn random<R: Rng + ?Sized>(size: Coord2, probability: f64, rng: &mut R) -> Result<Self> {
        let size = validate_size(size)?;
        let lit = Bernoulli::new(probability).map_err(|_| GameError::InvalidProbability)?;
        let cells = Array2::from_shape_simple_fn(size.to_nd_index(), || lit.sample(&mut *rng));
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, value: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = value;
        Ok(())
    }

    /// Flips a cell and returns its new value.
    pub fn toggle(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Flips the cell at a signed position if it lies on the grid, reporting whether it did.
    ///
    /// Positions off the grid are ignored, so callers can expand neighborhoods without edge checks.
    pub fn toggle_if_in_bounds(&mut self, row: isize, col: isize) -> bool {
        match checked_coords(row, col, self.size()) {
            Some(coords) => {
                let cell = &mut self.cells[coords.to_nd_index()];
                *cell = !*cell;
                true
            }
            None => false,
        }
    }

    /// Every `(coords, lit)` pair in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, bool)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &lit)| ((row as Coord, col as Coord), lit))
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl TryFrom<Array2<bool>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Array2<bool> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

fn validate_size(size: Coord2) -> Result<Coord2> {
    if size.0 >= 1 && size.1 >= 1 {
        Ok(size)
    } else {
        Err(GameError::InvalidDimension)
    }
}
