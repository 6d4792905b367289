//! Derived game status.

use super::{Board, Mark, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether moves are still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No line is complete and at least one cell is empty.
    Pending,
    /// A line is complete or the board is full.
    Complete,
}

/// Result of evaluating a board.
///
/// A winner is only ever present on a complete game; a complete game
/// without one is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    phase: Phase,
    winner: Option<Mark>,
}

impl GameStatus {
    /// Game still in play.
    pub const PENDING: Self = Self {
        phase: Phase::Pending,
        winner: None,
    };

    /// Game over, won by `mark`.
    pub fn won(mark: Mark) -> Self {
        Self {
            phase: Phase::Complete,
            winner: Some(mark),
        }
    }

    /// Game over with a full board and no line.
    pub fn draw() -> Self {
        Self {
            phase: Phase::Complete,
            winner: None,
        }
    }

    /// Evaluates `board`: win lines first, then fullness.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        let status = if let Some(mark) = rules::check_winner(board) {
            Self::won(mark)
        } else if rules::is_full(board) {
            Self::draw()
        } else {
            Self::PENDING
        };
        debug!(?status, "Evaluated board");
        status
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winning mark, if a line was completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True while moves remain to be played.
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// True once the game is over.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// True for a complete game with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_complete() && self.winner.is_none()
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.phase, self.winner) {
            (Phase::Pending, _) => write!(f, "Pending"),
            (Phase::Complete, Some(mark)) => write!(f, "Complete ({mark} wins)"),
            (Phase::Complete, None) => write!(f, "Complete (draw)"),
        }
    }
}
