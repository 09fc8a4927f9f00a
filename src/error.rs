//! Error types for the tic-tac-toe crate

use thiserror::Error;

use crate::board::Move;

/// Why a placement was rejected. The board is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("position {index} is out of bounds (must be 0-8)")]
    OutOfRange { index: Move },

    #[error("invalid move: position {index} is already occupied")]
    Occupied { index: Move },

    #[error("game already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}

/// Errors from parsing a board from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Result alias for board mutations
pub type Result<T> = std::result::Result<T, MoveError>;
