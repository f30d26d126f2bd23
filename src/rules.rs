//! Win and draw detection over a board.

use crate::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, scanned in that order.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed three in a row.
    Win(Mark),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
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
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns the mark holding a completed line, if any.
///
/// Lines are scanned rows, then columns, then diagonals; the first complete
/// line decides. Two complete lines held by different marks cannot arise from
/// alternating play and is asserted rather than silently resolved.
#[instrument]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    let mut winner = None;

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(Cell::Occupied(mark)) = cell
            && board.get(b) == cell
            && board.get(c) == cell
        {
            match winner {
                None => winner = Some(mark),
                Some(first) => debug_assert_eq!(
                    first, mark,
                    "both marks hold completed lines; board was not reached by legal play"
                ),
            }
        }
    }

    winner
}

/// Evaluates the board: `Win` if a line is complete, `Draw` if the board is
/// full, `None` while the game continues.
#[instrument]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = winning_mark(board) {
        Some(Outcome::Win(mark))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
