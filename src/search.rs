//! Exhaustive minimax search over the remaining game tree.
//!
//! The tree is at most 9 plies deep with branching at most 9, so full
//! enumeration is tractable and no pruning is needed. The opponent is modeled
//! as optimal regardless of the actual opponent's behavior.

use crate::board::{Board, Mark};
use crate::rules::{self, Outcome};
use tracing::{debug, instrument};

/// Score of an immediate win at the root of the search.
const WIN_SCORE: i32 = 10;

/// Finds the cell whose minimax score is maximal for `ai`.
///
/// Candidates are scanned in ascending index order and ties keep the first
/// candidate. With `stop_at_forced_win` the scan stops as soon as a candidate
/// scores the maximum (an immediate win), since no later candidate can score
/// higher.
///
/// The search works on a private clone; the caller's board is never mutated.
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Mark, stop_at_forced_win: bool) -> Option<usize> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best = None;

    for index in 0..9 {
        if !scratch.is_empty(index) {
            continue;
        }

        scratch.put(index, ai);
        let score = minimax(&mut scratch, 0, false, ai);
        scratch.erase(index);

        if score > best_score {
            best_score = score;
            best = Some(index);
        }

        if stop_at_forced_win && best_score == WIN_SCORE {
            debug!(index, "immediate win found, stopping candidate scan");
            break;
        }
    }

    debug!(?best, best_score, "candidate scan complete");
    best
}

/// Scores the position for `ai`, assuming `ai` just moved when
/// `maximizing` is false.
///
/// Terminal scores are depth-adjusted: `+(10 - depth)` for an `ai` win,
/// `-(10 - depth)` for an opponent win, `0` for a draw. Faster wins and
/// slower losses score better, which is a required tie-break.
fn minimax(board: &mut Board, depth: i32, maximizing: bool, ai: Mark) -> i32 {
    match rules::outcome(board) {
        Some(Outcome::Win(mark)) if mark == ai => return WIN_SCORE - depth,
        Some(Outcome::Win(_)) => return depth - WIN_SCORE,
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in 0..9 {
            if board.is_empty(index) {
                board.put(index, ai);
                best = best.max(minimax(board, depth + 1, false, ai));
                board.erase(index);
            }
        }
        best
    } else {
        let mut worst = i32::MAX;
        for index in 0..9 {
            if board.is_empty(index) {
                board.put(index, ai.opponent());
                worst = worst.min(minimax(board, depth + 1, true, ai));
                board.erase(index);
            }
        }
        worst
    }
}
