//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Cells owned by each mark, one bit per row-major index.
#[derive(Debug, Default, Clone, Copy)]
struct Occupancy {
    x: u16,
    o: u16,
}

impl Occupancy {
    fn scan(board: &Board) -> Self {
        board
            .cells()
            .fold(Self::default(), |mut acc, (pos, cell)| {
                if let Some(mark) = cell.mark() {
                    *acc.owned_mut(mark) |= bit(pos);
                }
                acc
            })
    }

    fn owned(self, mark: Mark) -> u16 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn owned_mut(&mut self, mark: Mark) -> &mut u16 {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}

fn bit(pos: Position) -> u16 {
    1 << pos.index()
}

fn line_mask(line: &[Position; 3]) -> u16 {
    line.iter().fold(0, |mask, pos| mask | bit(*pos))
}

/// Checks if there is a winner on the board.
///
/// Returns the mark owning the first fully-claimed line in
/// [`WIN_LINES`] order, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let occupancy = Occupancy::scan(board);

    WIN_LINES.iter().find_map(|line| {
        let mask = line_mask(line);
        Mark::iter().find(|mark| occupancy.owned(*mark) & mask == mask)
    })
}
