//! Turn controller: move solicitation, validation, and alternation.

use crate::{ConsoleError, Player, Seating, Terminal};
use noughts_core::{Board, GameStatus, Move, Position};
use tracing::{debug, info, instrument};

/// Prompts `player` until they enter a legal move, then applies it.
///
/// Rejections are reported and re-prompted in the order format, range,
/// occupancy. The turn is not consumed until a move lands on the board.
#[instrument(skip(terminal, player, board), fields(player = %player))]
pub fn request_move<T: Terminal>(
    terminal: &mut T,
    player: &Player,
    board: &mut Board,
) -> Result<Move, ConsoleError> {
    let prompt = format!("{}: ", player.name());
    loop {
        let input = terminal.prompt(&prompt)?;
        match Position::parse(&input).and_then(|pos| {
            board.place(pos, *player.mark())?;
            Ok(pos)
        }) {
            Ok(pos) => {
                let action = Move::new(*player.mark(), pos);
                debug!(%action, "Move accepted");
                return Ok(action);
            }
            Err(err) => {
                debug!(%input, ?err, "Move rejected");
                terminal.say(&err.to_string())?;
            }
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// This player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => {
                write!(f, "Congratulations! {player} is the winner!")
            }
            Outcome::Draw => write!(f, "Game ended in a draw."),
        }
    }
}

/// Game finished: the final board, every move played, and the outcome.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Game in progress: owns the board and whose turn it is.
#[derive(Debug)]
pub struct TurnController<T> {
    terminal: T,
    seating: Seating,
    board: Board,
    history: Vec<Move>,
    turn: usize,
}

impl<T: Terminal> TurnController<T> {
    /// Creates a controller with an empty board; Player 1 moves first.
    pub fn new(terminal: T, seating: Seating) -> Self {
        Self {
            terminal,
            seating,
            board: Board::new(),
            history: Vec::new(),
            turn: 0,
        }
    }

    /// Replaces the starting board.
    #[cfg(test)]
    pub(crate) fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players.
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.seating.seat(self.turn)
    }

    /// Returns the current status of the board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Solicits and applies one move from the current player, then passes
    /// the turn.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_turn(&mut self) -> Result<Move, ConsoleError> {
        let player = self.seating.seat(self.turn);
        self.terminal
            .say(&format!("\n{}'s turn ({}).", player.name(), player.mark()))?;
        let action = request_move(&mut self.terminal, player, &mut self.board)?;
        self.history.push(action);
        self.terminal.say(&format!("\n{}\n", self.board))?;
        self.turn = (self.turn + 1) % 2;
        Ok(action)
    }

    /// Plays turns until a line is completed or the board fills, then
    /// announces the result.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameFinished, ConsoleError> {
        self.terminal.say("\nInitializing Game Board....")?;
        self.terminal.say("Game Started.\n=============\n")?;
        self.terminal.say(&self.board.to_string())?;
        self.terminal
            .say("\nChoose a position from available positions on the board (e.g., 0,1).")?;

        let mut status = self.status();
        while status.is_pending() {
            self.play_turn()?;
            status = self.status();
        }

        let outcome = match status.winner() {
            Some(mark) => Outcome::Winner(self.seating.holding(mark).clone()),
            None => Outcome::Draw,
        };
        info!(%outcome, moves = self.history.len(), "Game over");

        self.terminal.say("Game Over.")?;
        self.terminal.say(&outcome.to_string())?;

        Ok(GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Console;
    use noughts_core::{Cell, Mark, MoveError};
    use std::io::Cursor;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    fn ada() -> Player {
        Player::new("Ada".to_string(), Mark::X)
    }

    #[test]
    fn test_request_move_accepts_first_valid() {
        let mut console = scripted("0,0\n");
        let mut board = Board::new();
        let action = request_move(&mut console, &ada(), &mut board).unwrap();
        assert_eq!(action, Move::new(Mark::X, pos(0, 0)));
        assert_eq!(board.get(pos(0, 0)), Cell::Occupied(Mark::X));
        assert_eq!(output(console), "Ada: ");
    }

    #[test]
    fn test_request_move_format_errors() {
        let mut console = scripted("1\na,b\n0,1\n");
        let mut board = Board::new();
        request_move(&mut console, &ada(), &mut board).unwrap();
        assert_eq!(board.get(pos(0, 1)), Cell::Occupied(Mark::X));

        let out = output(console);
        assert_eq!(out.matches(&MoveError::Format.to_string()).count(), 2);
        assert_eq!(out.matches("Ada: ").count(), 3);
    }

    #[test]
    fn test_request_move_invalid_utf8_is_format_error() {
        let input: &[u8] = &[0xff, 0xfe, b',', b'1', b'\n', b'0', b',', b'1', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut board = Board::new();
        let action = request_move(&mut console, &ada(), &mut board).unwrap();
        assert_eq!(action, Move::new(Mark::X, pos(0, 1)));

        let out = String::from_utf8(console.into_parts().1).unwrap();
        assert_eq!(out.matches(&MoveError::Format.to_string()).count(), 1);
        assert_eq!(out.matches("Ada: ").count(), 2);
    }

    #[test]
    fn test_request_move_range_errors() {
        let mut console = scripted("-1,0\n3,3\n0,2\n");
        let mut board = Board::new();
        request_move(&mut console, &ada(), &mut board).unwrap();
        assert_eq!(board.get(pos(0, 2)), Cell::Occupied(Mark::X));
        assert_eq!(
            output(console)
                .matches(&MoveError::OutOfRange.to_string())
                .count(),
            2
        );
    }

    #[test]
    fn test_request_move_occupied_error() {
        let mut console = scripted("0,0\n1,1\n");
        let mut board = Board::new();
        board.set(pos(0, 0), Mark::O);
        request_move(&mut console, &ada(), &mut board).unwrap();
        assert_eq!(board.get(pos(0, 0)), Cell::Occupied(Mark::O));
        assert_eq!(board.get(pos(1, 1)), Cell::Occupied(Mark::X));
        assert_eq!(
            output(console)
                .matches("Cell already occupied. Choose an empty cell.")
                .count(),
            1
        );
    }

    #[test]
    fn test_request_move_closed_input() {
        let mut console = scripted("9,9\n");
        let mut board = Board::new();
        let err = request_move(&mut console, &ada(), &mut board).unwrap_err();
        assert_eq!(err.kind, crate::ConsoleErrorKind::Closed);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut console = scripted("1,1\n0,0\n");
        let seating = Seating::new("Ada".into(), Mark::O, "Bob".into());
        let mut controller = TurnController::new(&mut console, seating);

        assert_eq!(controller.current_player().name(), "Ada");
        assert_eq!(controller.play_turn().unwrap().mark(), Mark::O);
        assert_eq!(controller.current_player().name(), "Bob");
        assert_eq!(controller.play_turn().unwrap().mark(), Mark::X);
        assert_eq!(controller.current_player().name(), "Ada");
    }

    #[test]
    fn test_run_stops_after_winning_move() {
        // X: 0,0 0,1 0,2; O: 1,0 1,1. Nothing is scripted for a sixth move.
        let mut console = scripted("0,0\n1,0\n0,1\n1,1\n0,2\n");
        let seating = Seating::new("Ada".into(), Mark::X, "Bob".into());
        let finished = TurnController::new(&mut console, seating).run().unwrap();

        assert_eq!(finished.outcome().winner().map(|p| p.name().as_str()), Some("Ada"));
        assert_eq!(finished.history().len(), 5);
        assert_eq!(finished.board().status().winner(), Some(Mark::X));

        let out = output(console);
        assert!(out.ends_with("Game Over.\nCongratulations! Ada (X) is the winner!\n"));
    }

    #[test]
    fn test_run_reports_draw() {
        // X O X / X O O / O X X
        let moves = ["0,0", "0,1", "0,2", "1,1", "1,0", "1,2", "2,1", "2,0", "2,2"];
        let mut console = scripted(&(moves.join("\n") + "\n"));
        let seating = Seating::new("Ada".into(), Mark::X, "Bob".into());
        let finished = TurnController::new(&mut console, seating).run().unwrap();

        assert!(finished.outcome().is_draw());
        assert!(finished.board().is_full());
        assert!(output(console).ends_with("Game Over.\nGame ended in a draw.\n"));
    }

    #[test]
    fn test_run_on_finished_board_asks_nothing() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(pos(2, col), Mark::O);
        }
        let mut console = scripted("");
        let seating = Seating::new("Ada".into(), Mark::X, "Bob".into());
        let finished = TurnController::new(&mut console, seating)
            .with_board(board)
            .run()
            .unwrap();
        assert_eq!(finished.outcome().winner().map(|p| p.name().as_str()), Some("Bob"));
        assert!(finished.history().is_empty());
    }
}
