//! Tests for the numpad board.

use numpad_tictactoe::{Board, Mark, MoveError, Position, Square};

#[test]
fn test_new_board_is_open() {
    let board = Board::new();
    assert!(board.has_open_positions());
    assert_eq!(board.open_positions(), Position::ALL.to_vec());
    assert!(board.cells().iter().all(|cell| cell.square() == Square::Empty));
}

#[test]
fn test_cells_in_index_order() {
    let board = Board::new();
    let indices: Vec<u8> = board.cells().iter().map(|c| c.position().index()).collect();
    assert_eq!(indices, (1..=9).collect::<Vec<u8>>());
    assert_eq!(board.cells()[0].label(), "bottom left");
    assert_eq!(board.cells()[8].label(), "top right");
}

#[test]
fn test_apply_move_by_index() {
    let mut board = Board::new();
    let pos = board.apply_move(7, Mark::X).unwrap();
    assert_eq!(pos, Position::TopLeft);
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
}

#[test]
fn test_apply_move_out_of_range() {
    let mut board = Board::new();
    assert_eq!(
        board.apply_move(0, Mark::X),
        Err(MoveError::OutOfRange("0".to_string()))
    );
    assert_eq!(
        board.apply_move(10, Mark::O),
        Err(MoveError::OutOfRange("10".to_string()))
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_move_occupied_keeps_original_mark() {
    let mut board = Board::new();
    board.apply_move(5, Mark::X).unwrap();

    let err = board.apply_move(5, Mark::O).unwrap_err();
    assert_eq!(
        err,
        MoveError::AlreadyOccupied {
            position: Position::Center,
            existing: Mark::X,
            attempted: Mark::O,
        }
    );
    assert_eq!(err.to_string(), "Cannot update middle center from X to O.");
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_full_board_has_no_open_positions() {
    let mut board = Board::new();
    for (i, pos) in Position::ALL.into_iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place(pos, mark).unwrap();
    }
    assert!(!board.has_open_positions());
    assert!(board.open_positions().is_empty());
}

#[test]
fn test_render_empty_board() {
    let board = Board::new();
    let expected = "   |   |  \n-----------\n   |   |  \n-----------\n   |   |  ";
    assert_eq!(board.render(), expected);
}

#[test]
fn test_render_uses_numpad_layout() {
    let mut board = Board::new();
    board.apply_move(7, Mark::X).unwrap();
    board.apply_move(5, Mark::O).unwrap();
    board.apply_move(3, Mark::X).unwrap();

    let expected = " X |   |  \n-----------\n   | O |  \n-----------\n   |   | X";
    assert_eq!(board.render(), expected);
    assert_eq!(board.to_string(), expected);
}
