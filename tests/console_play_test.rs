//! End-to-end tests driving the console loop with in-memory streams.

use numpad_tictactoe::{Console, DRAW_MESSAGE, EXIT_MESSAGE, Game, GameStatus, Mark, WELCOME};
use std::io::Cursor;

const NOT_A_NUMBER: &str = "Please use the number pad to enter a number between 1 and 9.";

fn run(input: &str) -> (anyhow::Result<GameStatus>, Game, String) {
    let mut game = Game::new();
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let result = console.play(&mut game);
    let output = String::from_utf8(console.into_output()).expect("UTF-8 output");
    (result, game, output)
}

#[test]
fn test_first_player_wins_bottom_row() {
    let (result, game, output) = run("1\n4\n2\n5\n3\n");

    assert_eq!(result.unwrap(), GameStatus::Won(Mark::X));
    assert!(!game.is_active());
    assert!(output.starts_with(WELCOME));
    assert!(output.contains("Player 1 wins!"));
    assert!(output.trim_end().ends_with(EXIT_MESSAGE));
    assert!(!output.contains(DRAW_MESSAGE));
}

#[test]
fn test_prompts_alternate() {
    let (_, _, output) = run("1\n4\n2\n5\n3\n");

    let prompts: Vec<&str> = output
        .match_indices("'s Turn: ")
        .map(|(i, _)| &output[i - 8..i])
        .collect();
    assert_eq!(
        prompts,
        ["Player 1", "Player 2", "Player 1", "Player 2", "Player 1"]
    );
}

#[test]
fn test_board_rendered_after_each_move() {
    let (_, _, output) = run("1\n4\n2\n5\n3\n");

    // Empty board at startup plus one per accepted move.
    assert_eq!(output.matches("-----------").count(), 2 * 6);
    assert!(output.contains("\n\n   |   |  \n-----------\n O | O |  \n-----------\n X | X | X\n\n\n"));
}

#[test]
fn test_draw_message() {
    let (result, _, output) = run("7\n8\n9\n5\n4\n6\n2\n1\n3\n");

    assert_eq!(result.unwrap(), GameStatus::Draw);
    assert!(output.contains(DRAW_MESSAGE));
    assert!(!output.contains("wins!"));
    assert!(output.trim_end().ends_with(EXIT_MESSAGE));
}

#[test]
fn test_occupied_position_reprompts_same_player() {
    let (result, game, output) = run("5\n5\n1\n");

    // Input runs out mid-game.
    assert!(result.is_err());
    assert!(output.contains("Cannot update middle center from X to O."));
    assert_eq!(output.matches("Player 2's Turn: ").count(), 2);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().cells()[4].mark(), Some(Mark::X));
    assert_eq!(game.board().cells()[0].mark(), Some(Mark::O));
}

#[test]
fn test_non_numeric_input_reprompts_same_player() {
    let (_, game, output) = run("abc\n\n5\n");

    assert_eq!(output.matches(NOT_A_NUMBER).count(), 2);
    assert_eq!(output.matches("Player 1's Turn: ").count(), 3);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.board().open_positions().len(), 8);
}

#[test]
fn test_out_of_range_reprompts_same_player() {
    let (_, game, output) = run("0\n10\n9\n");

    assert!(output.contains("Position 0 is not on the board."));
    assert!(output.contains("Position 10 is not on the board."));
    assert_eq!(output.matches("Player 1's Turn: ").count(), 3);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_oversized_integer_gets_range_message() {
    let (_, game, output) = run("99999999999999999999\n9\n");

    assert!(output.contains("Position 99999999999999999999 is not on the board."));
    assert!(!output.contains(NOT_A_NUMBER));
    assert_eq!(output.matches("Player 1's Turn: ").count(), 2);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_many_invalid_inputs_do_not_overflow() {
    let mut input = "nope\n".repeat(50_000);
    input.push_str("1\n4\n2\n5\n3\n");
    let (result, _, output) = run(&input);

    assert_eq!(result.unwrap(), GameStatus::Won(Mark::X));
    assert_eq!(output.matches(NOT_A_NUMBER).count(), 50_000);
}

#[test]
fn test_closed_input_is_an_error() {
    let (result, game, output) = run("");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("input closed"));
    assert!(game.is_active());
    assert!(!output.contains(EXIT_MESSAGE));
}
