use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimension,
    #[error("Start probability must be within [0, 1]")]
    InvalidProbability,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Board is marked solved but still has lit cells")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
