/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Checks a signed `(row, col)` pair against `bounds`, converting it back to board coordinates.
pub(crate) fn checked_coords(row: isize, col: isize, bounds: Coord2) -> Option<Coord2> {
    let row: Coord = row.try_into().ok()?;
    let col: Coord = col.try_into().ok()?;
    let (rows, cols) = bounds;

    if row < rows && col < cols {
        Some((row, col))
    } else {
        None
    }
}
