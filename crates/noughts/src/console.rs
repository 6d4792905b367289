//! Line-oriented console boundary.

use crate::ConsoleError;
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Text exchange with whoever is playing.
///
/// Everything the game shows or asks goes through this trait, so the turn
/// logic runs the same against a real terminal or a scripted one.
pub trait Terminal {
    /// Shows `text` without a newline and returns the next input line,
    /// with surrounding whitespace trimmed.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError>;

    /// Shows `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        (**self).prompt(text)
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).say(text)
    }
}

/// A [`Terminal`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    #[instrument(skip(self))]
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and are rejected as ordinary bad input.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::closed());
        }
        let line = String::from_utf8_lossy(&buf);
        trace!(line = %line.trim_end(), "Read input line");
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
