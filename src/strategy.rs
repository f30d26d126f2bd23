//! Difficulty levels and the policies that pick the AI's move.
//!
//! Policies are state-free: each call takes the current board, the AI's mark,
//! and a caller-supplied RNG so that Easy and Medium are deterministic under a
//! seeded generator.

use crate::board::{Board, Mark};
use crate::{rules, search};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI difficulty level, fixed for the length of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// Uniform-random choice among empty cells.
    Easy,
    /// Greedy heuristic 70% of the time, random otherwise.
    Medium,
    /// Full minimax search.
    Hard,
    /// Full minimax search with the forced-win cutoff.
    Impossible,
}

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Probability that Medium plays the greedy heuristic instead of randomly.
const MEDIUM_GREEDY_ODDS: f64 = 0.7;

/// Picks a cell for `ai` according to the difficulty's policy.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    difficulty: Difficulty,
    board: &Board,
    ai: Mark,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_cell(board, rng),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_GREEDY_ODDS) {
                greedy_move(board, ai, rng)
            } else {
                random_cell(board, rng)
            }
        }
        Difficulty::Hard => search::best_move(board, ai, false),
        Difficulty::Impossible => search::best_move(board, ai, true),
    };
    debug!(?choice, "policy selected a cell");
    choice
}

/// Greedy heuristic: the first applicable rule wins.
///
/// 1. Take any cell that wins immediately.
/// 2. Block any cell that would win immediately for the opponent.
/// 3. Take the center.
/// 4. Take a random empty corner.
/// 5. Take a random empty edge.
/// 6. Fall back to a random empty cell.
///
/// Rules 3-5 partition the board, so rule 6 cannot trigger on a board with an
/// empty cell; it remains as a defensive fallback.
#[instrument(skip(board, rng))]
pub fn greedy_move<R: Rng>(board: &Board, ai: Mark, rng: &mut R) -> Option<usize> {
    let mut scratch = board.clone();

    if let Some(index) = winning_cell(&mut scratch, ai) {
        return Some(index);
    }
    if let Some(index) = winning_cell(&mut scratch, ai.opponent()) {
        return Some(index);
    }
    if board.is_empty(CENTER) {
        return Some(CENTER);
    }

    let corners: Vec<usize> = CORNERS.into_iter().filter(|&i| board.is_empty(i)).collect();
    if let Some(&index) = corners.choose(rng) {
        return Some(index);
    }

    let edges: Vec<usize> = EDGES.into_iter().filter(|&i| board.is_empty(i)).collect();
    if let Some(&index) = edges.choose(rng) {
        return Some(index);
    }

    random_cell(board, rng)
}

/// Finds the lowest-index empty cell that completes a line for `mark`.
///
/// Probes on the caller's scratch clone, restoring each cell before returning.
fn winning_cell(scratch: &mut Board, mark: Mark) -> Option<usize> {
    for index in 0..9 {
        if scratch.is_empty(index) {
            scratch.put(index, mark);
            let wins = rules::winning_mark(scratch) == Some(mark);
            scratch.erase(index);
            if wins {
                return Some(index);
            }
        }
    }
    None
}

fn random_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_greedy_takes_winning_cell() {
        // [X,X,_,O,O,_,_,_,_] - O wins at 5.
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(3, Mark::O).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(greedy_move(&board, Mark::O, &mut rng), Some(5));
    }

    #[test]
    fn test_greedy_blocks_threat() {
        // [X,X,_,_,O,_,_,_,_] - O has no win, must block at 2.
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(1, Mark::X).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(greedy_move(&board, Mark::O, &mut rng), Some(2));
    }

    #[test]
    fn test_greedy_takes_center() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(greedy_move(&board, Mark::O, &mut rng), Some(CENTER));
    }

    #[test]
    fn test_greedy_takes_corner_when_center_gone() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let choice = greedy_move(&board, Mark::O, &mut rng).unwrap();
        assert!(CORNERS.contains(&choice));
    }

    #[test]
    fn test_greedy_takes_edge_when_corners_gone() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        board.place(0, Mark::O).unwrap();
        board.place(2, Mark::X).unwrap();
        board.place(6, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let choice = greedy_move(&board, Mark::O, &mut rng).unwrap();
        assert!(EDGES.contains(&choice));
    }

    #[test]
    fn test_greedy_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(1, Mark::X).unwrap();
        let before = board.clone();

        let mut rng = StdRng::seed_from_u64(0);
        greedy_move(&board, Mark::O, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_every_difficulty_picks_an_empty_cell() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        for difficulty in Difficulty::iter() {
            let mut rng = StdRng::seed_from_u64(7);
            let choice = choose_move(difficulty, &board, Mark::O, &mut rng)
                .expect("board has empty cells");
            assert!(board.is_empty(choice), "{difficulty} picked occupied cell");
        }
    }

    #[test]
    fn test_seeded_easy_is_deterministic() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            choose_move(Difficulty::Easy, &board, Mark::O, &mut a),
            choose_move(Difficulty::Easy, &board, Mark::O, &mut b),
        );
    }
}
