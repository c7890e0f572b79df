//! Error types shared across the rules engine and its collaborators.

use thiserror::Error;

/// Why a move or pass was rejected.
///
/// Every variant is an expected outcome of play; a rejected action leaves
/// the game untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game has ended; nothing more may be played
    #[error("Game Over")]
    GameOver,
    /// The acting color is not the one whose turn it is
    #[error("Not your turn")]
    WrongPlayer,
    /// The target intersection already holds a stone
    #[error("Intersection is not empty")]
    SpotNotEmpty,
    /// The target lies outside the board
    #[error("Position is out of bounds")]
    OutOfBounds,
    /// The mover has no stones left to place
    #[error("No stones remaining")]
    NoStones,
    /// The move would recreate the previous board
    #[error("Move repeats the previous board state")]
    RepeatState,
    /// The placed stone's group would have no liberties
    #[error("Move is self-capture")]
    SelfCapture,
}

/// A text board could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("unexpected character '{0}'")]
    BadCell(char),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// A move request body could not be turned into an action.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("Decode move error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Move has {0} coordinates")]
    Arity(usize),
}

/// Failure of an action routed through the match registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("No player for id {0}")]
    UnknownPlayer(u64),
    #[error(transparent)]
    Move(#[from] MoveError),
}
