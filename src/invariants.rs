//! First-class invariants over the board.
//!
//! Invariants are logical properties that must hold for every board reachable
//! by legal play. They are checked in debug builds and testable independently.

use crate::board::{Board, Cell, Mark};
use crate::rules::LINES;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts differ by at most one.
///
/// Either mark may open a match (the AI opens when it is the designated
/// first mover), so the balance can tip one move in either direction.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x_count = board
            .cells()
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::X)))
            .count();
        let o_count = board
            .cells()
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::O)))
            .count();

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: at most one mark holds a completed line.
///
/// A single move can complete two lines for the same mark, but alternating
/// play can never leave both marks with three in a row.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut x_wins = false;
        let mut o_wins = false;

        for [a, b, c] in LINES {
            let cell = board.get(a);
            if let Some(Cell::Occupied(mark)) = cell
                && board.get(b) == cell
                && board.get(c) == cell
            {
                match mark {
                    Mark::X => x_wins = true,
                    Mark::O => o_wins = true,
                }
            }
        }

        let valid = !(x_wins && o_wins);
        if !valid {
            warn!("both marks hold completed lines");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one mark holds a completed line"
    }
}

/// Asserts that all board invariants hold (debug builds only).
pub fn assert_board_invariants(board: &Board) {
    debug_assert!(BalancedMarks::holds(board), "{}", BalancedMarks::description());
    debug_assert!(SingleWinner::holds(board), "{}", SingleWinner::description());
}
