//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square {square} is already occupied")]
    SquareOccupied { square: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("square index {index} is out of bounds (must be 0-8)")]
    SquareOutOfBounds { index: usize },

    #[error("unrecognized move '{input}' (expected a row letter A-C followed by a column digit 1-3)")]
    ParseSquare { input: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("piece counts (X={x_count}, O={o_count}) are inconsistent with {player} to move in '{context}'")]
    TurnCountMismatch {
        x_count: usize,
        o_count: usize,
        player: char,
        context: String,
    },

    #[error("invalid player count {count} (expected 0, 1, or 2)")]
    InvalidPlayerCount { count: u8 },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
