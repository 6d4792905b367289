//! Pure tic-tac-toe board logic.
//!
//! This crate owns the game's state machine and nothing else: which cells
//! are occupied, which mark owns a line of three, and whether the game is
//! still pending. Console prompting and turn order live in the `noughts`
//! driver crate.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, Phase, Position};
//!
//! let mut board = Board::new();
//! for col in 0..3 {
//!     let pos = Position::new(0, col).expect("in range");
//!     board.place(pos, Mark::X).expect("empty cell");
//! }
//!
//! let status = board.status();
//! assert_eq!(status.phase(), Phase::Complete);
//! assert_eq!(status.winner(), Some(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{MarkError, Move, MoveError};
pub use position::Position;
pub use status::{GameStatus, Phase};
pub use types::{Board, Cell, Mark};
