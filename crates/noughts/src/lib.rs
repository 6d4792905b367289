//! Two-player console tic-tac-toe.
//!
//! Drives a [`noughts_core::Board`] over a line-oriented [`Terminal`]:
//! players are seated, prompted for moves in turn, and told who won.
//!
//! # Architecture
//!
//! - **Console**: the [`Terminal`] seam and a [`Console`] over any reader
//!   and writer
//! - **Setup**: names and mark choice ([`GameSetup`])
//! - **Controller**: move validation and turn alternation
//!   ([`TurnController`])
//!
//! # Example
//!
//! ```
//! use noughts::{Console, play};
//! use std::io::Cursor;
//!
//! let script = "Ada\nx\nBob\n0,0\n1,0\n0,1\n1,1\n0,2\n";
//! let mut console = Console::new(Cursor::new(script), Vec::new());
//! let finished = play(&mut console).expect("scripted game");
//! assert_eq!(finished.outcome().winner().map(|p| p.name().as_str()), Some("Ada"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod controller;
mod error;
mod player;
mod setup;

pub use console::{Console, Terminal};
pub use controller::{GameFinished, Outcome, TurnController, request_move};
pub use error::{ConsoleError, ConsoleErrorKind};
pub use player::{Player, Seating};
pub use setup::{GameSetup, choose_mark};

use tracing::instrument;

/// Plays one full game over `terminal`: setup, turns, and the result.
#[instrument(skip(terminal))]
pub fn play<T: Terminal>(mut terminal: T) -> Result<GameFinished, ConsoleError> {
    terminal.say("Welcome to Tic-Tac-Toe!")?;
    GameSetup::new(terminal).seat_players()?.run()
}
