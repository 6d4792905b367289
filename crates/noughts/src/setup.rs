//! Game setup: names and marks.

use crate::{ConsoleError, Seating, Terminal, TurnController};
use noughts_core::Mark;
use tracing::{debug, info, instrument};

/// Game in setup phase, before anyone is seated.
#[derive(Debug)]
pub struct GameSetup<T> {
    terminal: T,
}

impl<T: Terminal> GameSetup<T> {
    /// Creates a setup phase talking over `terminal`.
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    /// Asks both players for their names and Player 1 for a mark.
    ///
    /// Consumes the setup and returns a controller ready for the first move.
    #[instrument(skip(self))]
    pub fn seat_players(mut self) -> Result<TurnController<T>, ConsoleError> {
        let first_name = self.terminal.prompt("Please enter a name for Player 1: ")?;
        let first_mark = choose_mark(&mut self.terminal, &first_name)?;
        let second_name = self.terminal.prompt("Please enter a name for Player 2: ")?;

        let seating = Seating::new(first_name, first_mark, second_name);
        for player in [seating.first(), seating.second()] {
            self.terminal
                .say(&format!("{} uses {}", player.name(), player.mark()))?;
        }
        info!(first = %seating.first(), second = %seating.second(), "Players seated");

        Ok(TurnController::new(self.terminal, seating))
    }
}

/// Prompts `name` for a mark until the answer is X or O, in either case.
#[instrument(skip(terminal))]
pub fn choose_mark<T: Terminal>(terminal: &mut T, name: &str) -> Result<Mark, ConsoleError> {
    let prompt = format!("Please choose a mark (X or O) for {name}: ");
    loop {
        let input = terminal.prompt(&prompt)?;
        match Mark::choose(&input) {
            Ok(mark) => return Ok(mark),
            Err(err) => {
                debug!(%input, "Invalid mark choice");
                terminal.say(&err.to_string())?;
            }
        }
    }
}
