use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Owns the board and its win status; the only way to change the board is [`BoardEngine::click`].
///
/// The engine has no internal synchronization. Sharing one between threads for mutation requires
/// an external lock around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineParts")]
pub struct BoardEngine {
    grid: Grid,
    state: EngineState,
}

#[derive(Deserialize)]
struct EngineParts {
    grid: Grid,
    state: EngineState,
}

impl TryFrom<EngineParts> for BoardEngine {
    type Error = GameError;

    /// `Won` must be backed by an all-off grid; `Playing` may be anything, including a dark board.
    fn try_from(EngineParts { grid, state }: EngineParts) -> Result<Self> {
        if state.is_finished() && !is_won(&grid) {
            return Err(GameError::InconsistentState);
        }
        Ok(Self { grid, state })
    }
}

impl BoardEngine {
    /// Starts a game on an explicit layout.
    ///
    /// The layout is not checked for a win, an all-off board only counts once a click ends on it.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: Default::default(),
        }
    }

    /// Starts a game on a board where each cell is lit independently with
    /// `config.start_probability`, drawing from `rng`.
    pub fn initialize<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::random(config.size, config.start_probability, rng)?;
        log::debug!(
            "initialized {}x{} board, {} of {} lit",
            config.size.0,
            config.size.1,
            grid.lit_count(),
            grid.total_cells()
        );
        Ok(Self::new(grid))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.grid.lit_count()
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<bool> {
        self.grid.get(coords)
    }

    /// Read-only view of the board for rendering.
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Applies the plus-shaped toggle around `coords` and re-checks for a win.
    ///
    /// Coordinates off the board are an error even after the game ended. Once won, clicks leave
    /// the board untouched and report [`ClickOutcome::NoChange`].
    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            log::trace!("ignoring click at {:?}, board already solved", coords);
            return Ok(ClickOutcome::NoChange);
        }

        let flipped = apply_toggle(&mut self.grid, coords)?;
        log::trace!("click at {:?} flipped {} cells", coords, flipped);

        if is_won(&self.grid) {
            self.state = EngineState::Won;
            log::info!("board solved");
            Ok(ClickOutcome::Won)
        } else {
            Ok(ClickOutcome::Toggled)
        }
    }
}
