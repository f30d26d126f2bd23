//! Tests for minimax search optimality and safety.

use tripline::{Board, Mark, Outcome, best_move, outcome};

/// Walks every legal continuation for the opponent, letting the AI answer
/// with `best_move`, and asserts the opponent never completes a line.
///
/// Call with the opponent to move.
fn assert_ai_never_loses(board: &Board, ai: Mark) {
    for index in board.empty_cells() {
        let mut after_opponent = board.clone();
        after_opponent.place(index, ai.opponent()).unwrap();

        match outcome(&after_opponent) {
            Some(Outcome::Win(mark)) => {
                panic!("AI allowed {mark} to win:\n{}", after_opponent.display())
            }
            Some(Outcome::Draw) => continue,
            None => {}
        }

        let reply = best_move(&after_opponent, ai, true).expect("board is not full");
        let mut after_ai = after_opponent;
        after_ai.place(reply, ai).unwrap();

        match outcome(&after_ai) {
            Some(_) => continue,
            None => assert_ai_never_loses(&after_ai, ai),
        }
    }
}

#[test]
fn ai_moving_second_never_loses() {
    assert_ai_never_loses(&Board::new(), Mark::O);
}

#[test]
fn ai_moving_first_never_loses() {
    let mut board = Board::new();
    let opening = best_move(&board, Mark::X, true).expect("empty board");
    board.place(opening, Mark::X).unwrap();
    assert_ai_never_loses(&board, Mark::X);
}

#[test]
fn corner_opening_is_answered_with_center() {
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    assert_eq!(best_move(&board, Mark::O, false), Some(4));
    assert_eq!(best_move(&board, Mark::O, true), Some(4));
}

#[test]
fn probing_is_idempotent() {
    // A mid-game position; the board must be bit-for-bit unchanged.
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(4, Mark::O).unwrap();
    board.place(8, Mark::X).unwrap();
    let before = board.clone();

    best_move(&board, Mark::O, false);
    best_move(&board, Mark::O, true);
    assert_eq!(board, before);
}

#[test]
fn best_score_is_maximal_over_all_empty_cells() {
    // The chosen cell must win where a win exists: [X,X,_,O,O,_,...]
    // has exactly one winning cell for O (5) and one for X (2).
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(3, Mark::O).unwrap();
    board.place(1, Mark::X).unwrap();
    board.place(4, Mark::O).unwrap();

    assert_eq!(best_move(&board, Mark::O, false), Some(5));
    assert_eq!(best_move(&board, Mark::X, false), Some(2));
}

#[test]
fn ties_break_to_the_lowest_index() {
    // X holds 0, 1, 4 against O on 3, 5, 6: cells 2, 7 and 8 all win
    // immediately and score equally. The scan must keep the first.
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(3, Mark::O).unwrap();
    board.place(1, Mark::X).unwrap();
    board.place(5, Mark::O).unwrap();
    board.place(4, Mark::X).unwrap();
    board.place(6, Mark::O).unwrap();

    assert_eq!(best_move(&board, Mark::X, false), Some(2));
    assert_eq!(best_move(&board, Mark::X, true), Some(2));
}
