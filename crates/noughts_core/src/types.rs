//! Core domain types for tic-tac-toe.

use super::{GameStatus, MarkError, MoveError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// The symbol a player places in cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Resolves a typed mark choice, case-insensitively.
    ///
    /// Surrounding whitespace is ignored; anything other than `x` or `o`
    /// is rejected.
    #[instrument]
    pub fn choose(input: &str) -> Result<Self, MarkError> {
        let choice = input.trim();
        Mark::from_str(choice).map_err(|_| {
            debug!("Rejected mark choice");
            MarkError::Invalid(choice.to_string())
        })
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed this cell.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Writes `mark` into the cell, overwriting whatever was there.
    ///
    /// Use [`Board::place`] when the cell must be empty.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = Cell::Occupied(mark);
    }

    /// Places `mark` only if the cell is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(cell = ?self.get(pos), "Cell already occupied");
            return Err(MoveError::Occupied(pos));
        }
        self.set(pos, mark);
        Ok(())
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Evaluates the board.
    ///
    /// A completed line wins even when the board is also full.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their own `row,col` label so players know what to
    /// type. Marked cells are padded to the same width.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "    {}", "-".repeat(15))?;
            }
            write!(f, "    ")?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{row},{col}")?,
                    Cell::Occupied(mark) => write!(f, " {mark} ")?,
                }
            }
        }
        Ok(())
    }
}
