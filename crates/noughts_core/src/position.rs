//! Board coordinates.

use super::MoveError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A cell on the board, addressed by 0-indexed row and column.
///
/// A `Position` is always in range: the only ways to build one check the
/// bounds, so the board never has to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if either coordinate is outside 0..=2.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Const constructor for fixed tables; out-of-range coordinates fail
    /// at compile time.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        match Self::new(row, col) {
            Some(pos) => pos,
            None => panic!("position out of range"),
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Parses `"row,col"` player input.
    ///
    /// Format is checked before range: `"1"` and `"a,b"` are
    /// [`MoveError::Format`], while `"-1,0"` and `"3,3"` parse as integers
    /// and fail with [`MoveError::OutOfRange`]. Whitespace around either
    /// number is ignored.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let mut parts = input.split(',');
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            debug!("Expected exactly two comma-separated values");
            return Err(MoveError::Format);
        };

        let row: i64 = row.trim().parse().map_err(|_| MoveError::Format)?;
        let col: i64 = col.trim().parse().map_err(|_| MoveError::Format)?;

        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Self::new(row, col).ok_or(MoveError::OutOfRange),
            _ => Err(MoveError::OutOfRange),
        }
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(MoveError::OutOfRange)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
