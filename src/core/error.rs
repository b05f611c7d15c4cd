//! Error types.
//!
//! `FocusError` covers every way a move or reserve placement can be
//! rejected. A returned error always means the game state is untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;

/// Rejection reasons for mutating and querying operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum FocusError {
    #[error("not your turn")]
    NotPlayersTurn,
    #[error("start and end must share a row or a column and differ")]
    InvalidAlignment,
    #[error("distance moved must equal the number of pieces moved")]
    DistanceMismatch,
    #[error("invalid location")]
    OutOfBounds,
    #[error("top piece of the start stack belongs to the other player")]
    WrongController,
    #[error("invalid number of pieces")]
    InsufficientPieces,
    #[error("no pieces in reserve")]
    NoReserve,
    #[error("game is over")]
    GameOver,
}

/// Errors raised while setting up a new game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("both players are named {0:?}")]
    DuplicateName(String),
    #[error("both players use the symbol {0:?}")]
    DuplicateSymbol(char),
    #[error("invalid rules config: {0}")]
    InvalidConfig(&'static str),
    #[error("position accounts for {found} pieces, expected {expected}")]
    PieceCountMismatch { expected: usize, found: usize },
    #[error("stack at {0} is taller than the maximum stack height")]
    StackTooTall(Coord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FocusError::NotPlayersTurn.to_string(), "not your turn");
        assert_eq!(FocusError::NoReserve.to_string(), "no pieces in reserve");
        assert_eq!(
            SetupError::DuplicateSymbol('R').to_string(),
            "both players use the symbol 'R'"
        );
    }
}
