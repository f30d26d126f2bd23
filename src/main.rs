//! Tripline - interactive terminal front-end
//!
//! A thin line-oriented consumer of the session API: it renders snapshots and
//! translates input into `attempt_move` calls. All game logic lives in the
//! library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tripline::{Mark, Mode, Outcome, Session, SessionState};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mode: Mode = cli.mode.into();
    let difficulty = (mode == Mode::HumanVsAi).then(|| cli.difficulty.into());
    let first_mover = Some(if cli.ai_first { Mark::O } else { Mark::X });

    let mut session = match cli.seed {
        Some(seed) => Session::seeded(mode, difficulty, first_mover, seed),
        None => Session::new(mode, difficulty, first_mover),
    };
    info!(?mode, ?difficulty, "starting interactive session");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let snapshot = session.snapshot();
        println!("\n{}\n", snapshot.board.display());
        println!(
            "Score  X: {}  O: {}",
            snapshot.scores.of(Mark::X),
            snapshot.scores.of(Mark::O)
        );

        match snapshot.state {
            SessionState::Terminal(outcome) => {
                match outcome {
                    Outcome::Win(mark) => println!("{mark} wins!"),
                    Outcome::Draw => println!("It's a draw!"),
                }
                if !prompt_yes_no(&mut lines, "Play again? [y/n] ")? {
                    break;
                }
                session.reset_match();
            }
            SessionState::AwaitingMove(mark) => {
                let Some(input) = prompt(&mut lines, &format!("{mark} to move (1-9, q quits): "))?
                else {
                    break;
                };
                let input = input.trim();
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                let cell = match input.parse::<usize>() {
                    Ok(n) if (1..=9).contains(&n) => n - 1,
                    _ => {
                        println!("Enter a cell number from 1 to 9.");
                        continue;
                    }
                };
                if let Err(err) = session.attempt_move(cell) {
                    println!("{err}");
                }
            }
        }
    }

    // Leaving to the "menu" ends the session; scores go with it.
    let scores = session.scores();
    println!(
        "Final score  X: {}  O: {}",
        scores.of(Mark::X),
        scores.of(Mark::O)
    );
    session.reset_scores();

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("flushing prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("reading input")?)),
        None => Ok(None),
    }
}

fn prompt_yes_no(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<bool> {
    let Some(input) = prompt(lines, message)? else {
        return Ok(false);
    };
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
