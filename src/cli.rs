//! Command-line interface for tripline.

use clap::{Parser, ValueEnum};
use tripline::{Difficulty, Mode};

/// Tripline - play tic-tac-toe against a minimax AI
#[derive(Parser, Debug)]
#[command(name = "tripline")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode
    #[arg(long, value_enum, default_value_t = ModeArg::Ai)]
    pub mode: ModeArg,

    /// AI difficulty (AI mode only)
    #[arg(long, value_enum, default_value_t = DifficultyArg::Hard)]
    pub difficulty: DifficultyArg,

    /// Let the AI open the match
    #[arg(long)]
    pub ai_first: bool,

    /// Seed for the AI's random choices (Easy/Medium), for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Game mode flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans at the same terminal.
    Pvp,
    /// Human versus the engine.
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::HumanVsHuman,
            ModeArg::Ai => Mode::HumanVsAi,
        }
    }
}

/// Difficulty flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    /// Random moves.
    Easy,
    /// Mostly greedy, sometimes random.
    Medium,
    /// Optimal search.
    Hard,
    /// Optimal search with an early cutoff on forced wins.
    Impossible,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Impossible => Difficulty::Impossible,
        }
    }
}
