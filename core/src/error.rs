use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines on a {side}x{side} board")]
    InvalidConfiguration { side: Coord, mines: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout does not match the requested configuration")]
    LayoutMismatch,
    #[error("Score {score} exceeds the {safe_cells} safe cells of the board")]
    ScoreOutOfRange { score: CellCount, safe_cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
