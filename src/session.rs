//! Game session state machine: turn order, AI invocation, score keeping.
//!
//! The session is the sole mutator of its board. Every state transition is a
//! synchronous call that runs to completion; an AI decision appears to the
//! caller as an indivisible part of [`Session::attempt_move`].

use crate::board::{Board, IllegalMove, Mark};
use crate::invariants;
use crate::rules::{self, Outcome};
use crate::strategy::{self, Difficulty};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans alternate at the same interface.
    HumanVsHuman,
    /// A human plays X against the engine playing O.
    HumanVsAi,
}

/// The mark the AI plays in [`Mode::HumanVsAi`].
pub const AI_MARK: Mark = Mark::O;

/// State of the session's turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the given mark to move.
    AwaitingMove(Mark),
    /// The game has a decided outcome; absorbing until [`Session::reset_match`].
    Terminal(Outcome),
}

/// Accumulated win counters per mark.
///
/// Counters persist across rematches and reset only via
/// [`Session::reset_scores`] (returning to a menu in the original interface).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Returns the win count for a mark.
    pub fn of(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn tally(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board as it stands.
    pub board: Board,
    /// Mark expected to move next (meaningless once terminal).
    pub to_move: Mark,
    /// Accumulated win counters.
    pub scores: Scores,
    /// Current machine state.
    pub state: SessionState,
}

/// A single interactive session: one board, one mode, accumulated scores.
#[derive(Debug)]
pub struct Session {
    board: Board,
    to_move: Mark,
    mode: Mode,
    difficulty: Option<Difficulty>,
    first_mover: Mark,
    scores: Scores,
    state: SessionState,
    rng: StdRng,
}

impl Session {
    /// Creates a session with OS-sourced randomness.
    ///
    /// `first_mover` selects which mark opens each match; it applies in AI
    /// mode ([`AI_MARK`] means the AI opens) and defaults to X. Human-vs-human
    /// matches always open with X.
    ///
    /// # Panics
    ///
    /// Panics if `mode` is [`Mode::HumanVsAi`] and no difficulty is given;
    /// that is a caller contract violation, not a recoverable error.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Option<Difficulty>, first_mover: Option<Mark>) -> Self {
        Self::with_rng(mode, difficulty, first_mover, StdRng::from_os_rng())
    }

    /// Creates a session with a seeded RNG for deterministic AI randomness.
    #[instrument]
    pub fn seeded(
        mode: Mode,
        difficulty: Option<Difficulty>,
        first_mover: Option<Mark>,
        seed: u64,
    ) -> Self {
        Self::with_rng(mode, difficulty, first_mover, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        mode: Mode,
        difficulty: Option<Difficulty>,
        first_mover: Option<Mark>,
        rng: StdRng,
    ) -> Self {
        assert!(
            mode == Mode::HumanVsHuman || difficulty.is_some(),
            "HumanVsAi sessions require a difficulty"
        );

        let first_mover = match mode {
            Mode::HumanVsHuman => Mark::X,
            Mode::HumanVsAi => first_mover.unwrap_or(Mark::X),
        };

        let mut session = Self {
            board: Board::new(),
            to_move: first_mover,
            mode,
            difficulty,
            first_mover,
            scores: Scores::default(),
            state: SessionState::AwaitingMove(first_mover),
            rng,
        };

        info!(?mode, ?difficulty, ?first_mover, "session created");

        // An AI first mover opens immediately, so the human always sees a
        // board with the AI's mark already placed.
        if session.ai_to_move() {
            session.ai_take_turn();
        }

        session
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the active difficulty, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Returns the mark that opens each match.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current machine state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the accumulated scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the outcome once the game is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Terminal(outcome) => Some(outcome),
            SessionState::AwaitingMove(_) => None,
        }
    }

    /// Applies a human move at `index`.
    ///
    /// In AI mode, when the human's move does not end the game, the AI's
    /// reply is applied before returning, so the result reflects both
    /// half-moves.
    ///
    /// # Errors
    ///
    /// Surfaces [`IllegalMove`] without touching the board: out-of-range or
    /// occupied cells, or a move against a finished game.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, index: usize) -> Result<Option<Outcome>, IllegalMove> {
        if let SessionState::Terminal(outcome) = self.state {
            warn!(%outcome, "move attempted on a finished game");
            return Err(IllegalMove::GameOver);
        }
        debug_assert!(!self.ai_to_move(), "attempt_move called on the AI's turn");

        self.place_current(index)?;

        if self.mode == Mode::HumanVsAi && self.ai_to_move() {
            self.ai_take_turn();
        }

        Ok(self.outcome())
    }

    /// Clears the board for a rematch, preserving scores, mode, difficulty,
    /// and the designated first mover. If the AI opens, it moves immediately.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.board = Board::new();
        self.to_move = self.first_mover;
        self.state = SessionState::AwaitingMove(self.first_mover);
        info!("board cleared for a rematch");

        if self.ai_to_move() {
            self.ai_take_turn();
        }
    }

    /// Zeroes the win counters (used when leaving to a menu).
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("scores reset");
    }

    /// Returns a read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            scores: self.scores,
            state: self.state,
        }
    }

    /// Places the current mover's mark and settles the machine state.
    fn place_current(&mut self, index: usize) -> Result<(), IllegalMove> {
        let mark = self.to_move;
        self.board.place(index, mark)?;
        invariants::assert_board_invariants(&self.board);
        debug!(index, %mark, "mark placed");

        match rules::outcome(&self.board) {
            Some(outcome) => {
                if let Outcome::Win(winner) = outcome {
                    self.scores.tally(winner);
                }
                info!(%outcome, "game finished");
                self.state = SessionState::Terminal(outcome);
            }
            None => {
                self.to_move = mark.opponent();
                self.state = SessionState::AwaitingMove(self.to_move);
            }
        }

        Ok(())
    }

    fn ai_to_move(&self) -> bool {
        self.mode == Mode::HumanVsAi
            && matches!(self.state, SessionState::AwaitingMove(mark) if mark == AI_MARK)
    }

    /// Runs one full AI turn: policy evaluation and placement.
    ///
    /// Invoking AI logic outside AI mode is a caller contract violation and
    /// panics; the strategy only ever returns a legal empty cell, so
    /// placement cannot fail here.
    #[instrument(skip(self))]
    fn ai_take_turn(&mut self) {
        assert_eq!(
            self.mode,
            Mode::HumanVsAi,
            "AI move requested outside HumanVsAi mode"
        );
        let difficulty = self
            .difficulty
            .expect("HumanVsAi session without a difficulty");

        let index = strategy::choose_move(difficulty, &self.board, AI_MARK, &mut self.rng)
            .expect("AI asked to move on a full board");
        debug!(index, %difficulty, "AI chose a cell");

        self.place_current(index)
            .expect("AI strategy selected an illegal cell");
    }
}
