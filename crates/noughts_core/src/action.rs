//! Moves and the errors that reject them.
//!
//! A move is a player's intent: a mark and the position it goes to. It is
//! validated before it touches the board, and each rejection reason is its
//! own variant so the driver can report it and re-prompt.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Reasons a move was rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input was not two comma-separated integers.
    #[display("Invalid format. Please use row,col (e.g., 0,1).")]
    Format,

    /// Row or column fell outside 0..=2.
    #[display("Invalid position. Row and column must be between 0 and 2.")]
    OutOfRange,

    /// The target cell already holds a mark.
    #[display("Cell already occupied. Choose an empty cell.")]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// A mark choice that is neither X nor O.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The rejected input, as typed.
    #[display("Invalid mark. Please choose X or O.")]
    Invalid(String),
}

impl std::error::Error for MarkError {}
