#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use rule::*;
pub use types::*;
pub use win::*;

mod engine;
mod error;
mod generator;
mod grid;
mod rule;
mod types;
mod win;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub start_probability: f64,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_START_PROBABILITY: f64 = 0.3;

    pub const fn new_unchecked(size: Coord2, start_probability: f64) -> Self {
        Self {
            size,
            start_probability,
        }
    }

    pub fn new(size: Coord2, start_probability: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, start_probability);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 < 1 || self.size.1 < 1 {
            return Err(GameError::InvalidDimension);
        }

        // also rejects NaN
        if !(0.0..=1.0).contains(&self.start_probability) {
            return Err(GameError::InvalidProbability);
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_START_PROBABILITY)
    }
}

/// Outcome of clicking a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ClickOutcome {
    /// Whether this outcome changed the board
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}
