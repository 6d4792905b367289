//! Console error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to the console.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// Reading or writing failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
    /// Input ended while a prompt was waiting for a line.
    #[display("input stream closed")]
    Closed,
}

/// Console error with location tracking.
///
/// Input validation never produces one of these; bad moves and marks are
/// re-prompted. This is only for a console that can no longer be used.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// What failed.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Input ended mid-game.
    #[track_caller]
    pub fn closed() -> Self {
        Self::new(ConsoleErrorKind::Closed)
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
