//! End-to-end games driven through a scripted console.

use noughts::{Console, ConsoleErrorKind, GameFinished, play};
use noughts_core::{Cell, Mark, Position};
use std::io::Cursor;

fn play_script(lines: &[&str]) -> (Result<GameFinished, noughts::ConsoleError>, String) {
    let script = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    let mut console = Console::new(Cursor::new(script), Vec::new());
    let result = play(&mut console);
    let out = String::from_utf8(console.into_parts().1).expect("utf-8 output");
    (result, out)
}

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("in range")
}

#[test]
fn test_x_wins_top_row_without_extra_o_move() {
    let (result, out) = play_script(&[
        "PlayerOne", "X", "PlayerTwo", "0,0", "1,0", "0,1", "2,2", "0,2",
    ]);
    let finished = result.expect("game completes");

    let winner = finished.outcome().winner().expect("a winner");
    assert_eq!(winner.name(), "PlayerOne");
    assert_eq!(*winner.mark(), Mark::X);
    assert_eq!(finished.history().len(), 5);
    assert_eq!(finished.board().status().winner(), Some(Mark::X));

    assert!(out.contains("PlayerOne uses X\n"));
    assert!(out.contains("PlayerTwo uses O\n"));
    assert!(out.contains("Congratulations! PlayerOne (X) is the winner!"));
    assert_eq!(out.matches("PlayerTwo's turn (O).").count(), 2);
}

#[test]
fn test_lowercase_mark_complements() {
    let (result, out) = play_script(&[
        "PlayerOne", "o", "PlayerTwo", "1,1", "0,0", "0,1", "0,2", "2,1",
    ]);
    let finished = result.expect("game completes");

    assert!(out.contains("PlayerOne uses O\n"));
    assert!(out.contains("PlayerTwo uses X\n"));
    // O took the middle column.
    assert_eq!(finished.board().get(pos(2, 1)), Cell::Occupied(Mark::O));
    assert_eq!(finished.outcome().winner().map(|p| p.name().as_str()), Some("PlayerOne"));
}

#[test]
fn test_invalid_marks_reprompt() {
    let (result, out) = play_script(&[
        "PlayerOne", "A", "1", "O", "PlayerTwo", "0,0", "1,0", "0,1", "1,1", "0,2",
    ]);
    let finished = result.expect("game completes");

    assert_eq!(out.matches("Invalid mark. Please choose X or O.").count(), 2);
    assert_eq!(
        out.matches("Please choose a mark (X or O) for PlayerOne: ").count(),
        3
    );
    assert!(out.contains("PlayerOne uses O\n"));
    assert!(out.contains("PlayerTwo uses X\n"));
    assert_eq!(*finished.outcome().winner().expect("a winner").mark(), Mark::O);
}

#[test]
fn test_invalid_moves_do_not_consume_turn() {
    let (result, out) = play_script(&[
        "Ada", "X", "Bob", "0,0", "0,0", "4,4", "nope", "1,1", "0,2", "0,1", "2,1", "2,0",
        "1,0", "1,2", "2,2",
    ]);
    let finished = result.expect("game completes");

    assert_eq!(out.matches("Cell already occupied").count(), 1);
    assert_eq!(out.matches("Invalid position").count(), 1);
    assert_eq!(out.matches("Invalid format").count(), 1);
    // Bob's retries all belong to his first move.
    assert_eq!(finished.board().get(pos(1, 1)), Cell::Occupied(Mark::O));
    assert!(finished.outcome().is_draw());
    assert!(out.ends_with("Game Over.\nGame ended in a draw.\n"));
}

#[test]
fn test_board_shown_after_each_move() {
    let (result, out) = play_script(&["Ada", "X", "Bob", "0,0", "1,0", "0,1", "1,1", "0,2"]);
    result.expect("game completes");
    // Initial board plus one per accepted move.
    assert_eq!(out.matches("    ---------------\n").count(), 2 * 6);
}

#[test]
fn test_input_closed_mid_game() {
    let (result, _) = play_script(&["Ada", "X", "Bob", "0,0"]);
    let err = result.expect_err("input ran out");
    assert_eq!(err.kind, ConsoleErrorKind::Closed);
}
