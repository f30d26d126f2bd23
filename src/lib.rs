//! Tripline - tic-tac-toe engine with an adversarial search AI
//!
//! The crate provides the full game core: board representation, legal-move
//! enforcement, win/draw detection, an exhaustive minimax search, difficulty
//! policies, and the session state machine an interface layer drives.
//!
//! # Architecture
//!
//! - **Board & rules**: pure data with invariant checks and stateless
//!   win/draw detection
//! - **Search**: exhaustive minimax with depth-adjusted terminal scores
//! - **Strategy**: difficulty-keyed move policies (random, greedy, optimal)
//! - **Session**: the turn state machine, AI invocation, and score keeping
//!
//! # Example
//!
//! ```
//! use tripline::{Difficulty, Mark, Mode, Session};
//!
//! // Human plays X against an optimal AI; the human opens.
//! let mut session = Session::new(
//!     Mode::HumanVsAi,
//!     Some(Difficulty::Impossible),
//!     Some(Mark::X),
//! );
//!
//! // A corner opening is answered with the center.
//! session.attempt_move(0).expect("cell 0 is empty");
//! assert!(!session.board().is_empty(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod invariants;
mod rules;
mod search;
mod session;
mod strategy;

// Crate-level exports - Board & rules
pub use board::{Board, Cell, IllegalMove, Mark};
pub use rules::{Outcome, outcome, winning_mark};

// Crate-level exports - Invariants
pub use invariants::{BalancedMarks, Invariant, SingleWinner, assert_board_invariants};

// Crate-level exports - Search & strategy
pub use search::best_move;
pub use strategy::{Difficulty, choose_move, greedy_move};

// Crate-level exports - Session
pub use session::{AI_MARK, Mode, Scores, Session, SessionState, Snapshot};
